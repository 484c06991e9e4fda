//! Task ledger domain.

pub mod model;
pub mod repository;

pub use model::TaskRecord;
pub use repository::TaskRepository;
