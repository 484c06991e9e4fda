pub mod auth;
pub mod chat;
pub mod course;
pub mod error;
pub mod ledger;
pub mod reward;
pub mod task;

// Re-export common error type
pub use error::{HarborError, Result};

pub use ledger::PointsLedger;
