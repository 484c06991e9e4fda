//! Milestone configuration.
//!
//! Milestones are static configuration: an ascending ladder of point
//! thresholds, each unlocking a named reward. The ladder is validated once
//! at load time; a non-increasing ladder is a configuration error and must
//! fail fast rather than surface later as a division by zero in the
//! progression math.

use crate::error::{HarborError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A fixed point threshold unlocking a named reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDefinition {
    /// Points required to achieve this milestone. Must be positive and
    /// strictly greater than the previous milestone's threshold.
    pub threshold: u32,
    /// Display name of the reward.
    pub reward: String,
}

/// A validated, ascending ladder of milestones.
///
/// Construction enforces the invariants the progression engine relies on:
/// every threshold is positive and thresholds strictly increase. Once a
/// `MilestoneSet` exists, progression math over it cannot divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneSet(Vec<MilestoneDefinition>);

impl MilestoneSet {
    /// Validates a milestone list into a set.
    ///
    /// # Errors
    ///
    /// Returns `HarborError::Config` if any threshold is zero or not
    /// strictly greater than its predecessor.
    pub fn new(milestones: Vec<MilestoneDefinition>) -> Result<Self> {
        let mut previous = 0u32;
        for (index, milestone) in milestones.iter().enumerate() {
            if milestone.threshold == 0 {
                return Err(HarborError::config(format!(
                    "milestone {} ('{}') has a zero threshold",
                    index, milestone.reward
                )));
            }
            if milestone.threshold <= previous {
                return Err(HarborError::config(format!(
                    "milestone {} ('{}') threshold {} does not exceed previous threshold {}",
                    index, milestone.reward, milestone.threshold, previous
                )));
            }
            previous = milestone.threshold;
        }
        Ok(Self(milestones))
    }

    /// The built-in reward ladder used when no configuration file is given.
    pub fn defaults() -> Self {
        let milestones = vec![
            MilestoneDefinition {
                threshold: 10,
                reward: "$10 GV Voucher".to_string(),
            },
            MilestoneDefinition {
                threshold: 20,
                reward: "$10 Fairprice Voucher".to_string(),
            },
            MilestoneDefinition {
                threshold: 30,
                reward: "$15 Grab Voucher".to_string(),
            },
            MilestoneDefinition {
                threshold: 40,
                reward: "$30 Haidilao Voucher".to_string(),
            },
        ];
        // Safe to unwrap because the built-in ladder is strictly increasing
        Self::new(milestones).expect("built-in milestone ladder is valid")
    }

    /// Parses and validates a milestone set from a TOML document.
    ///
    /// The expected format is a list of `[[milestone]]` tables:
    ///
    /// ```toml
    /// [[milestone]]
    /// threshold = 10
    /// reward = "$10 GV Voucher"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: MilestoneFile = toml::from_str(content)?;
        Self::new(file.milestone)
    }

    /// Loads and validates a milestone set from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Iterates the milestones in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = &MilestoneDefinition> {
        self.0.iter()
    }

    /// The milestones as a slice, ascending by threshold.
    pub fn as_slice(&self) -> &[MilestoneDefinition] {
        &self.0
    }

    /// Number of milestones in the ladder.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ladder is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Root structure of a milestone configuration file.
#[derive(Debug, Clone, Deserialize)]
struct MilestoneFile {
    #[serde(default)]
    milestone: Vec<MilestoneDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn def(threshold: u32, reward: &str) -> MilestoneDefinition {
        MilestoneDefinition {
            threshold,
            reward: reward.to_string(),
        }
    }

    #[test]
    fn test_valid_ladder() {
        let set = MilestoneSet::new(vec![def(10, "A"), def(20, "B")]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_ladder_is_valid() {
        let set = MilestoneSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let err = MilestoneSet::new(vec![def(10, "A"), def(10, "B")]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_decreasing_thresholds_rejected() {
        let err = MilestoneSet::new(vec![def(20, "A"), def(10, "B")]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = MilestoneSet::new(vec![def(0, "A")]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_defaults_are_the_voucher_ladder() {
        let set = MilestoneSet::defaults();
        let thresholds: Vec<u32> = set.iter().map(|m| m.threshold).collect();
        assert_eq!(thresholds, vec![10, 20, 30, 40]);
        assert_eq!(set.as_slice()[0].reward, "$10 GV Voucher");
    }

    #[test]
    fn test_from_toml_str() {
        let content = r#"
            [[milestone]]
            threshold = 10
            reward = "$10 GV Voucher"

            [[milestone]]
            threshold = 20
            reward = "$10 Fairprice Voucher"
        "#;
        let set = MilestoneSet::from_toml_str(content).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].threshold, 20);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_ladder() {
        let content = r#"
            [[milestone]]
            threshold = 20
            reward = "A"

            [[milestone]]
            threshold = 20
            reward = "B"
        "#;
        assert!(MilestoneSet::from_toml_str(content).unwrap_err().is_config());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[milestone]]\nthreshold = 15\nreward = \"Coffee Voucher\"\n"
        )
        .unwrap();

        let set = MilestoneSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].threshold, 15);
    }
}
