pub mod core;

pub use crate::core::{format_seconds, today_queue, CountdownConfig, CountdownEngine, CountdownError, CountdownSnapshot, CountdownState, CountdownStatus, CountdownTimer};
