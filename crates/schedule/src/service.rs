use crate::error::Result;
use chrono::{NaiveDate, Utc};
use countdown::{today_queue, CountdownTimer};
use game_event::{GameEvent, GameEventDraft, GameEventRepository};
use tracing::debug;

/// Composition point between the event repository and the countdown timer.
/// Every mutation is sequenced as mutate → re-read → re-derive → re-load,
/// so the timer always reflects the latest committed event set.
pub struct ScheduleService {
	repo: GameEventRepository,
	timer: CountdownTimer,
}

impl ScheduleService {
	pub fn new(repo: GameEventRepository, timer: CountdownTimer) -> Self {
		Self { repo, timer }
	}

	fn today() -> NaiveDate {
		Utc::now().date_naive()
	}

	/// Access to the countdown timer for imperative control and snapshots
	#[must_use]
	pub fn timer(&self) -> &CountdownTimer {
		&self.timer
	}

	///
	/// # Errors
	/// Returns `ValidationFailed` before any store is touched, or a store
	/// error if the mutation fails on both tiers
	pub async fn create(&self, draft: GameEventDraft) -> Result<GameEvent> {
		draft.validate(Self::today())?;
		let event = self.repo.create(&draft).await?;
		self.refresh().await?;
		Ok(event)
	}

	///
	/// # Errors
	/// Returns `ValidationFailed` before any store is touched, `NotFound`
	/// if the id is absent in the active tier
	pub async fn update(&self, id: &str, draft: GameEventDraft) -> Result<GameEvent> {
		draft.validate(Self::today())?;
		let event = self.repo.update(id, &draft).await?;
		self.refresh().await?;
		Ok(event)
	}

	///
	/// # Errors
	/// Returns a store error if the mutation fails on both tiers
	pub async fn remove(&self, id: &str) -> Result<()> {
		self.repo.remove(id).await?;
		self.refresh().await?;
		Ok(())
	}

	///
	/// # Errors
	/// Returns a store error if the active tier cannot be read
	pub async fn list(&self) -> Result<Vec<GameEvent>> {
		Ok(self.repo.list(None).await?)
	}

	/// Events airing on one calendar day, for calendar-style queries
	///
	/// # Errors
	/// Returns a store error if the active tier cannot be read
	pub async fn games_for(&self, date: NaiveDate) -> Result<Vec<GameEvent>> {
		Ok(self.repo.list(Some(date)).await?)
	}

	/// Sweep events older than one year, then republish today's queue
	///
	/// # Errors
	/// Returns a store error if the sweep fails on both tiers
	pub async fn purge_expired(&self) -> Result<u64> {
		let purged = self.repo.purge_expired(Self::today()).await?;
		self.refresh().await?;
		Ok(purged)
	}

	/// Re-read the committed event set and hand today's queue to the timer
	///
	/// # Errors
	/// Returns a store error if the re-read fails, `Timer` if the engine is gone
	pub async fn refresh(&self) -> Result<()> {
		let events = self.repo.list(None).await?;
		let queue = today_queue(&events, Self::today());
		debug!(total = events.len(), today = queue.len(), "republishing countdown queue");
		self.timer.load_queue(queue).await?;
		Ok(())
	}
}
