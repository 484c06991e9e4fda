//! Reward progression engine.
//!
//! Pure derivation of per-milestone achievement state from an accumulated
//! point total. Identical inputs always yield identical outputs; nothing
//! here is persisted or fetched.

use super::milestone::MilestoneSet;
use serde::{Deserialize, Serialize};

/// Derived progression state for one milestone.
///
/// Recomputed on every points-total change and handed to the presentation
/// layer as-is; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    /// Whether the point total has reached the milestone threshold.
    pub achieved: bool,
    /// Progress toward this milestone within its band, in [0, 100].
    pub progress_percent: f64,
    /// Points still needed to achieve the milestone (zero once achieved).
    pub points_remaining: u32,
}

/// Computes the progression state for every milestone in the ladder.
///
/// Progress toward a milestone is measured within its band: from the
/// previous milestone's threshold (zero for the first) up to its own. A
/// total past the band yields 100%, a total below it 0%, and a total inside
/// it a linear fraction of the band.
///
/// Returns one status per milestone, in ladder order. An empty ladder
/// yields an empty result. Division by zero is impossible here: the
/// [`MilestoneSet`] constructor already rejected non-increasing thresholds.
pub fn compute_progress(points: u32, milestones: &MilestoneSet) -> Vec<MilestoneStatus> {
    let mut previous = 0u32;
    milestones
        .iter()
        .map(|milestone| {
            let status = if points >= milestone.threshold {
                MilestoneStatus {
                    achieved: true,
                    progress_percent: 100.0,
                    points_remaining: 0,
                }
            } else if points > previous {
                let band = f64::from(milestone.threshold - previous);
                let gained = f64::from(points - previous);
                MilestoneStatus {
                    achieved: false,
                    progress_percent: gained / band * 100.0,
                    points_remaining: milestone.threshold - points,
                }
            } else {
                MilestoneStatus {
                    achieved: false,
                    progress_percent: 0.0,
                    points_remaining: milestone.threshold - points,
                }
            };
            previous = milestone.threshold;
            status
        })
        .collect()
}
