pub mod config;
pub mod course_repository;
pub mod dto;
pub mod suggestion_repository;
pub mod task_repository;

pub use config::BackendConfig;
pub use course_repository::RestCourseRepository;
pub use suggestion_repository::RestSuggestionRepository;
pub use task_repository::RestTaskRepository;
