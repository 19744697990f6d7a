use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
	#[error("store error: {0}")]
	Store(#[from] game_event::GameStoreError),
	#[error("timer error: {0}")]
	Timer(#[from] countdown::CountdownError),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
