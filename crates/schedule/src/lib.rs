pub mod error;
pub mod service;

pub use error::{Result, ScheduleError};
pub use service::ScheduleService;
