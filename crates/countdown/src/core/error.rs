use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountdownError {
	/// The engine task has shut down or panicked; commands can no longer
	/// be delivered.
	#[error("countdown engine is no longer running")]
	EngineGone,
}

pub type Result<T> = std::result::Result<T, CountdownError>;
