use crate::core::error::{GameStoreError, Result};
use crate::core::model::{GameEvent, GameEventDraft};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Fixed namespace for the serialized event collection
pub const STORAGE_KEY: &str = "avisos-games";

/// Injected key-value storage contract backing the local tier.
/// Errors here are fatal: there is no further tier to fall back to.
pub trait StoragePort: Send + Sync {
	///
	/// # Errors
	/// Returns `StorageFatal` if the underlying storage cannot be read
	fn read(&self, key: &str) -> Result<Option<String>>;
	///
	/// # Errors
	/// Returns `StorageFatal` if the underlying storage cannot be written
	fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage port, used in tests and as an embedded default
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl StoragePort for MemoryStorage {
	fn read(&self, key: &str) -> Result<Option<String>> {
		let entries = self.entries.lock().map_err(|_| GameStoreError::StorageFatal("storage mutex poisoned".to_string()))?;
		Ok(entries.get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		let mut entries = self.entries.lock().map_err(|_| GameStoreError::StorageFatal("storage mutex poisoned".to_string()))?;
		entries.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// File-backed storage port keeping one JSON file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStorage {
	root: PathBuf,
}

impl FileStorage {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn path_for(&self, key: &str) -> PathBuf {
		self.root.join(format!("{key}.json"))
	}
}

impl StoragePort for FileStorage {
	fn read(&self, key: &str) -> Result<Option<String>> {
		match std::fs::read_to_string(self.path_for(key)) {
			Ok(raw) => Ok(Some(raw)),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(error) => Err(GameStoreError::StorageFatal(format!("read of {key} failed: {error}"))),
		}
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		std::fs::create_dir_all(&self.root).map_err(|error| GameStoreError::StorageFatal(format!("cannot create storage root: {error}")))?;
		std::fs::write(self.path_for(key), value).map_err(|error| GameStoreError::StorageFatal(format!("write of {key} failed: {error}")))
	}
}

/// Local fallback tier: the full event collection serialized as a single
/// JSON blob under a fixed key, de-duplicated by id, overwritten on every
/// mutation.
pub struct LocalStore {
	port: Box<dyn StoragePort>,
	key: String,
}

impl LocalStore {
	pub fn new(port: Box<dyn StoragePort>) -> Self {
		Self {
			port,
			key: STORAGE_KEY.to_string(),
		}
	}

	/// Read = parse-or-empty: a corrupt blob is logged and treated as an
	/// empty collection, and the next successful write repairs it.
	fn load(&self) -> Result<Vec<GameEvent>> {
		let Some(raw) = self.port.read(&self.key)? else {
			return Ok(Vec::new());
		};

		match serde_json::from_str(&raw) {
			Ok(events) => Ok(events),
			Err(error) => {
				warn!(%error, "local blob is corrupt, starting from empty");
				Ok(Vec::new())
			}
		}
	}

	fn save(&self, events: &[GameEvent]) -> Result<()> {
		let raw = serde_json::to_string(events)?;
		self.port.write(&self.key, &raw)
	}

	///
	/// # Errors
	/// Returns `StorageFatal` if the storage port fails
	pub fn list(&self, date_filter: Option<NaiveDate>) -> Result<Vec<GameEvent>> {
		let mut events = self.load()?;
		if let Some(date) = date_filter {
			events.retain(|event| event.scheduled_date == date);
		}
		events.sort_by_key(|event| (event.scheduled_date, event.start.total_seconds()));
		Ok(events)
	}

	///
	/// # Errors
	/// Returns `StorageFatal` if the storage port fails
	pub fn insert(&self, draft: &GameEventDraft) -> Result<GameEvent> {
		let mut events = self.load()?;

		// Millisecond token, bumped on collision to keep ids unique
		let mut token = Utc::now().timestamp_millis();
		while events.iter().any(|event| event.id == token.to_string()) {
			token += 1;
		}

		let event = GameEvent {
			id: token.to_string(),
			name: draft.name.clone(),
			scheduled_date: draft.scheduled_date,
			start: draft.start,
			end: draft.end,
			owner: None,
			created_at: Utc::now(),
		};

		events.push(event.clone());
		self.save(&events)?;
		Ok(event)
	}

	///
	/// # Errors
	/// Returns `NotFound` if the id is absent, `StorageFatal` if the storage port fails
	pub fn update(&self, id: &str, draft: &GameEventDraft) -> Result<GameEvent> {
		let mut events = self.load()?;
		let Some(event) = events.iter_mut().find(|event| event.id == id) else {
			return Err(GameStoreError::NotFound { id: id.to_string() });
		};

		event.name = draft.name.clone();
		event.scheduled_date = draft.scheduled_date;
		event.start = draft.start;
		event.end = draft.end;
		let updated = event.clone();

		self.save(&events)?;
		Ok(updated)
	}

	/// Removing an absent id is a no-op.
	///
	/// # Errors
	/// Returns `StorageFatal` if the storage port fails
	pub fn remove(&self, id: &str) -> Result<()> {
		let mut events = self.load()?;
		let before = events.len();
		events.retain(|event| event.id != id);
		if events.len() != before {
			self.save(&events)?;
		}
		Ok(())
	}

	/// Drops every event scheduled strictly before the cutoff date.
	///
	/// # Errors
	/// Returns `StorageFatal` if the storage port fails
	pub fn purge_before(&self, cutoff: NaiveDate) -> Result<u64> {
		let mut events = self.load()?;
		let before = events.len();
		events.retain(|event| event.scheduled_date >= cutoff);
		let purged = before - events.len();
		if purged > 0 {
			self.save(&events)?;
		}
		Ok(purged as u64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(name: &str, date: &str, start: &str, end: &str) -> GameEventDraft {
		GameEventDraft {
			name: name.to_string(),
			scheduled_date: date.parse().unwrap(),
			start: start.parse().unwrap(),
			end: end.parse().unwrap(),
		}
	}

	fn store() -> LocalStore {
		LocalStore::new(Box::new(MemoryStorage::new()))
	}

	#[test]
	fn insert_then_list_round_trips() {
		let store = store();
		let created = store.insert(&draft("semis", "2026-09-01", "10:00:00", "11:00:00")).unwrap();

		let events = store.list(None).unwrap();
		assert_eq!(events.len(), 1);
		assert_eq!(events[0], created);
		assert!(events[0].owner.is_none());
	}

	#[test]
	fn list_sorts_by_date_then_start() {
		let store = store();
		store.insert(&draft("late", "2026-09-02", "08:00:00", "09:00:00")).unwrap();
		store.insert(&draft("second", "2026-09-01", "12:00:00", "13:00:00")).unwrap();
		store.insert(&draft("first", "2026-09-01", "09:00:00", "10:00:00")).unwrap();

		let names: Vec<_> = store.list(None).unwrap().into_iter().map(|e| e.name).collect();
		assert_eq!(names, vec!["first", "second", "late"]);
	}

	#[test]
	fn list_filters_by_date() {
		let store = store();
		store.insert(&draft("today", "2026-09-01", "09:00:00", "10:00:00")).unwrap();
		store.insert(&draft("tomorrow", "2026-09-02", "09:00:00", "10:00:00")).unwrap();

		let events = store.list(Some("2026-09-01".parse().unwrap())).unwrap();
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].name, "today");
	}

	#[test]
	fn update_missing_id_is_not_found() {
		let store = store();
		let result = store.update("nope", &draft("x", "2026-09-01", "09:00:00", "10:00:00"));
		assert!(matches!(result, Err(GameStoreError::NotFound { .. })));
	}

	#[test]
	fn update_replaces_business_fields_only() {
		let store = store();
		let created = store.insert(&draft("semis", "2026-09-01", "10:00:00", "11:00:00")).unwrap();
		let updated = store.update(&created.id, &draft("finals", "2026-09-03", "12:00:00", "14:00:00")).unwrap();

		assert_eq!(updated.id, created.id);
		assert_eq!(updated.created_at, created.created_at);
		assert_eq!(updated.name, "finals");
		assert_eq!(updated.scheduled_date, "2026-09-03".parse::<NaiveDate>().unwrap());
	}

	#[test]
	fn remove_is_idempotent() {
		let store = store();
		let created = store.insert(&draft("semis", "2026-09-01", "10:00:00", "11:00:00")).unwrap();

		store.remove(&created.id).unwrap();
		assert!(store.list(None).unwrap().is_empty());
		store.remove(&created.id).unwrap();
		store.remove("never-existed").unwrap();
	}

	#[test]
	fn purge_drops_only_events_before_cutoff() {
		let store = store();
		store.insert(&draft("old", "2024-01-01", "10:00:00", "11:00:00")).unwrap();
		store.insert(&draft("kept", "2026-09-01", "10:00:00", "11:00:00")).unwrap();

		let cutoff: NaiveDate = "2025-08-30".parse().unwrap();
		assert_eq!(store.purge_before(cutoff).unwrap(), 1);
		let names: Vec<_> = store.list(None).unwrap().into_iter().map(|e| e.name).collect();
		assert_eq!(names, vec!["kept"]);

		// Second sweep is a no-op
		assert_eq!(store.purge_before(cutoff).unwrap(), 0);
	}

	#[test]
	fn corrupt_blob_reads_as_empty_and_next_write_repairs_it() {
		let port = MemoryStorage::new();
		port.write(STORAGE_KEY, "{ not json").unwrap();
		let store = LocalStore::new(Box::new(port));

		assert!(store.list(None).unwrap().is_empty());
		store.insert(&draft("fresh", "2026-09-01", "10:00:00", "11:00:00")).unwrap();
		assert_eq!(store.list(None).unwrap().len(), 1);
	}

	#[test]
	fn file_storage_round_trips() {
		let dir = tempfile::tempdir().unwrap();
		let store = LocalStore::new(Box::new(FileStorage::new(dir.path())));

		assert!(store.list(None).unwrap().is_empty());
		store.insert(&draft("persisted", "2026-09-01", "10:00:00", "11:00:00")).unwrap();

		let reopened = LocalStore::new(Box::new(FileStorage::new(dir.path())));
		assert_eq!(reopened.list(None).unwrap().len(), 1);
	}
}
