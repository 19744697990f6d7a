pub mod error;
pub mod local;
pub mod model;
pub mod queries;
pub mod remote;
pub mod repository;
pub mod schema;

// Re-export commonly used types
pub use error::{GameStoreError, Result};
pub use model::*;
pub use repository::GameEventRepository;
