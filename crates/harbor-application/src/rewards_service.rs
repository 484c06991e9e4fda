//! Reward tracking use case.
//!
//! Composes the points ledger reader with the progression engine: one call
//! loads the live point total and derives the milestone ladder's state
//! from it.

use harbor_core::PointsLedger;
use harbor_core::Result;
use harbor_core::reward::{MilestoneDefinition, MilestoneSet, MilestoneStatus, compute_progress};

/// Progression state for one milestone, paired with its definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneProgress {
    /// The configured milestone.
    pub definition: MilestoneDefinition,
    /// Its derived progression state.
    pub status: MilestoneStatus,
}

/// The rewards view model: live point total plus per-milestone state.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardsOverview {
    /// The user's accumulated point total.
    pub total_points: u32,
    /// One entry per configured milestone, ascending by threshold.
    pub milestones: Vec<MilestoneProgress>,
}

/// Service deriving the rewards overview for the current user.
pub struct RewardTrackerService {
    ledger: PointsLedger,
    milestones: MilestoneSet,
}

impl RewardTrackerService {
    /// Creates a tracker over the given ledger and milestone ladder.
    pub fn new(ledger: PointsLedger, milestones: MilestoneSet) -> Self {
        Self { ledger, milestones }
    }

    /// Loads the live point total and computes the milestone ladder state.
    ///
    /// # Errors
    ///
    /// - `NotAuthorized` when no user is signed in
    /// - `Backend` when the ledger read fails; progression is never
    ///   computed against a guessed total
    pub async fn overview(&self) -> Result<RewardsOverview> {
        let total_points = self.ledger.load_points().await?;
        let statuses = compute_progress(total_points, &self.milestones);

        tracing::debug!(
            "[RewardTracker] {} points, {}/{} milestones achieved",
            total_points,
            statuses.iter().filter(|s| s.achieved).count(),
            statuses.len()
        );

        let milestones = self
            .milestones
            .iter()
            .cloned()
            .zip(statuses)
            .map(|(definition, status)| MilestoneProgress { definition, status })
            .collect();

        Ok(RewardsOverview {
            total_points,
            milestones,
        })
    }
}
