//! Portal assembly.
//!
//! Wires the REST repositories and API clients into the three use-case
//! services from explicit configuration. Hosts construct one `Portal` per
//! signed-in scope and hand its services to the presentation layer.

use crate::chat_service::ChatSessionFactory;
use crate::course_service::CourseAdvisorService;
use crate::rewards_service::RewardTrackerService;
use harbor_core::PointsLedger;
use harbor_core::auth::AuthContext;
use harbor_core::reward::MilestoneSet;
use harbor_infrastructure::{
    BackendConfig, RestCourseRepository, RestSuggestionRepository, RestTaskRepository,
};
use harbor_interaction::{CompletionConfig, OpenAiAssistantDirectory, OpenAiCompletionClient};
use std::sync::Arc;

/// The assembled portal core: rewards, course advising and chat.
pub struct Portal {
    /// Reward tracking over the task ledger.
    pub rewards: RewardTrackerService,
    /// Course suggestion resolution.
    pub courses: CourseAdvisorService,
    /// Chat session assembly.
    pub chat: ChatSessionFactory,
}

impl Portal {
    /// Assembles the portal from explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `backend` - Hosted data backend settings
    /// * `completion` - Completion endpoint settings
    /// * `assistant_id` - Identifier of the assistant persona
    /// * `auth` - Authentication context supplying the current user
    /// * `milestones` - Validated reward ladder
    pub fn new(
        backend: BackendConfig,
        completion: CompletionConfig,
        assistant_id: impl Into<String>,
        auth: Arc<dyn AuthContext>,
        milestones: MilestoneSet,
    ) -> Self {
        let model = completion.model.clone();

        let ledger = PointsLedger::new(
            Arc::new(RestTaskRepository::new(backend.clone())),
            auth.clone(),
        );
        let rewards = RewardTrackerService::new(ledger, milestones);

        let courses = CourseAdvisorService::new(
            auth,
            Arc::new(RestSuggestionRepository::new(backend.clone())),
            Arc::new(RestCourseRepository::new(backend)),
        );

        let chat = ChatSessionFactory::new(
            Arc::new(OpenAiCompletionClient::new(&completion)),
            Arc::new(OpenAiAssistantDirectory::new(&completion)),
            assistant_id,
        )
        .with_model(model);

        Self {
            rewards,
            courses,
            chat,
        }
    }
}
