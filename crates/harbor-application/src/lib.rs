pub mod chat_service;
pub mod course_service;
pub mod portal;
pub mod rewards_service;

pub use chat_service::ChatSessionFactory;
pub use course_service::CourseAdvisorService;
pub use portal::Portal;
pub use rewards_service::{MilestoneProgress, RewardTrackerService, RewardsOverview};
