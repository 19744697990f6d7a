use thiserror::Error;

/// Core error type for the game event store
#[derive(Debug, Error)]
pub enum GameStoreError {
	/// Soft failure on the remote tier. The repository catches this and
	/// reroutes the operation to the local tier, so callers never see it
	/// unless they talk to a remote store directly.
	#[error("remote store unavailable: {0}")]
	RemoteUnavailable(String),
	#[error("not found: game event with id = {id}")]
	NotFound { id: String },
	#[error("validation failed: {0}")]
	ValidationFailed(String),
	#[error("storage failure: {0}")]
	StorageFatal(String),
}

impl From<sqlx::Error> for GameStoreError {
	fn from(error: sqlx::Error) -> Self {
		Self::RemoteUnavailable(error.to_string())
	}
}

impl From<serde_json::Error> for GameStoreError {
	fn from(error: serde_json::Error) -> Self {
		Self::StorageFatal(format!("serialization error: {error}"))
	}
}

pub type Result<T> = std::result::Result<T, GameStoreError>;
