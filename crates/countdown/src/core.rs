mod commands;
mod config;
mod engine;
mod error;
mod queue;
mod state;
mod timer;

pub use config::CountdownConfig;
pub use engine::CountdownEngine;
pub use error::{CountdownError, Result};
pub use queue::today_queue;
pub use state::{format_seconds, CountdownSnapshot, CountdownState, CountdownStatus};
pub use timer::CountdownTimer;

use commands::CountdownCommand;
