pub mod core;

pub use crate::core::error::{GameStoreError, Result};
pub use crate::core::local::{FileStorage, LocalStore, MemoryStorage, StoragePort, STORAGE_KEY};
pub use crate::core::model::{GameEvent, GameEventDraft, TimeOfDay};
pub use crate::core::remote::{RemoteStore, SqliteRemote};
pub use crate::core::repository::GameEventRepository;
