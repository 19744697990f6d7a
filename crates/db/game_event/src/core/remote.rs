use crate::core::error::{GameStoreError, Result};
use crate::core::model::{GameEvent, GameEventDraft};
use crate::core::{queries, schema};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Remote relational tier contract. Implementations own id assignment and
/// ownership stamping; every error they return is treated as a soft failure
/// by the repository and rerouted to the local tier.
#[async_trait]
pub trait RemoteStore: Send + Sync {
	async fn select(&self, date_filter: Option<NaiveDate>) -> Result<Vec<GameEvent>>;
	async fn insert(&self, draft: &GameEventDraft) -> Result<GameEvent>;
	async fn update(&self, id: &str, draft: &GameEventDraft) -> Result<GameEvent>;
	async fn delete(&self, id: &str) -> Result<()>;
	async fn delete_before(&self, cutoff: NaiveDate) -> Result<u64>;
}

/// SQLite-backed remote store stamping rows with the authenticated caller
pub struct SqliteRemote {
	pool: SqlitePool,
	owner: String,
}

impl SqliteRemote {
	pub fn new(pool: SqlitePool, owner: impl Into<String>) -> Self {
		Self { pool, owner: owner.into() }
	}

	///
	/// # Errors
	/// Returns an error if the schema cannot be created
	pub async fn init_schema(&self) -> Result<()> {
		schema::init_schema(&self.pool).await?;
		Ok(())
	}
}

#[async_trait]
impl RemoteStore for SqliteRemote {
	async fn select(&self, date_filter: Option<NaiveDate>) -> Result<Vec<GameEvent>> {
		queries::fetch_events(&self.pool, date_filter).await
	}

	async fn insert(&self, draft: &GameEventDraft) -> Result<GameEvent> {
		let event = GameEvent {
			id: Uuid::new_v4().to_string(),
			name: draft.name.clone(),
			scheduled_date: draft.scheduled_date,
			start: draft.start,
			end: draft.end,
			owner: Some(self.owner.clone()),
			created_at: Utc::now(),
		};

		queries::insert_event(&self.pool, &event).await?;
		Ok(event)
	}

	async fn update(&self, id: &str, draft: &GameEventDraft) -> Result<GameEvent> {
		// Zero rows affected is a soft failure: the repository reroutes the
		// mutation to the local tier, which owns the NotFound verdict.
		let touched = queries::update_event(&self.pool, id, draft, &self.owner).await?;
		if touched == 0 {
			return Err(GameStoreError::RemoteUnavailable(format!("update of {id} affected no rows")));
		}

		match queries::fetch_event(&self.pool, id).await? {
			Some(event) => Ok(event),
			None => Err(GameStoreError::RemoteUnavailable(format!("updated row {id} vanished"))),
		}
	}

	async fn delete(&self, id: &str) -> Result<()> {
		// Deleting an absent id is a no-op, matching the local tier
		queries::delete_event(&self.pool, id).await?;
		Ok(())
	}

	async fn delete_before(&self, cutoff: NaiveDate) -> Result<u64> {
		queries::delete_before(&self.pool, cutoff).await
	}
}
