use crate::core::error::Result;
use crate::core::local::LocalStore;
use crate::core::model::{GameEvent, GameEventDraft};
use crate::core::remote::RemoteStore;
use chrono::{Months, NaiveDate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Two-tier event repository: every operation is attempted against the
/// remote tier first (when configured) and rerouted to the local tier on
/// any remote error. Callers observe a single contract either way; the
/// degradation is visible only in logs.
pub struct GameEventRepository {
	remote: Option<Arc<dyn RemoteStore>>,
	local: LocalStore,
}

impl GameEventRepository {
	pub fn new(remote: Arc<dyn RemoteStore>, local: LocalStore) -> Self {
		Self { remote: Some(remote), local }
	}

	/// Repository with no remote tier configured; every operation goes
	/// straight to the local store.
	pub fn local_only(local: LocalStore) -> Self {
		Self { remote: None, local }
	}

	///
	/// # Errors
	/// Returns `StorageFatal` if the local tier fails after remote fallback
	pub async fn list(&self, date_filter: Option<NaiveDate>) -> Result<Vec<GameEvent>> {
		if let Some(remote) = &self.remote {
			match remote.select(date_filter).await {
				Ok(events) => return Ok(events),
				Err(error) => warn!(%error, "remote select failed, serving local tier"),
			}
		}
		self.local.list(date_filter)
	}

	///
	/// # Errors
	/// Returns `StorageFatal` if both tiers fail
	pub async fn create(&self, draft: &GameEventDraft) -> Result<GameEvent> {
		if let Some(remote) = &self.remote {
			match remote.insert(draft).await {
				Ok(event) => {
					debug!(id = %event.id, "game event created remotely");
					return Ok(event);
				}
				Err(error) => warn!(%error, "remote insert failed, creating locally"),
			}
		}
		self.local.insert(draft)
	}

	///
	/// # Errors
	/// Returns `NotFound` if the id is absent in the active tier,
	/// `StorageFatal` if both tiers fail
	pub async fn update(&self, id: &str, draft: &GameEventDraft) -> Result<GameEvent> {
		if let Some(remote) = &self.remote {
			match remote.update(id, draft).await {
				Ok(event) => return Ok(event),
				Err(error) => warn!(%error, id, "remote update failed, updating locally"),
			}
		}
		self.local.update(id, draft)
	}

	/// Idempotent from the caller's perspective.
	///
	/// # Errors
	/// Returns `StorageFatal` if both tiers fail
	pub async fn remove(&self, id: &str) -> Result<()> {
		if let Some(remote) = &self.remote {
			match remote.delete(id).await {
				Ok(()) => return Ok(()),
				Err(error) => warn!(%error, id, "remote delete failed, removing locally"),
			}
		}
		self.local.remove(id)
	}

	/// Deletes every event scheduled strictly more than one year before
	/// `now`. Safe to call repeatedly; the second sweep is a no-op.
	///
	/// # Errors
	/// Returns `StorageFatal` if both tiers fail
	pub async fn purge_expired(&self, now: NaiveDate) -> Result<u64> {
		let cutoff = now - Months::new(12);
		if let Some(remote) = &self.remote {
			match remote.delete_before(cutoff).await {
				Ok(purged) => {
					if purged > 0 {
						debug!(purged, %cutoff, "expired game events purged remotely");
					}
					return Ok(purged);
				}
				Err(error) => warn!(%error, "remote purge failed, purging locally"),
			}
		}
		self.local.purge_before(cutoff)
	}
}
