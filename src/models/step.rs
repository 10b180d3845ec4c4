// file: src/models/step.rs
// description: controller phase identifiers and their display labels
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// One phase of the three-lane signal cycle.
///
/// Even steps give a single lane its green; odd steps are the overlap
/// between the outgoing and incoming lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    AGreen,
    AToBOverlap,
    BGreen,
    BToCOverlap,
    CGreen,
    CToAOverlap,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::AGreen,
        Step::AToBOverlap,
        Step::BGreen,
        Step::BToCOverlap,
        Step::CGreen,
        Step::CToAOverlap,
    ];

    /// Exact match on the raw identifier; anything else is unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(Step::AGreen),
            "1" => Some(Step::AToBOverlap),
            "2" => Some(Step::BGreen),
            "3" => Some(Step::BToCOverlap),
            "4" => Some(Step::CGreen),
            "5" => Some(Step::CToAOverlap),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Step::AGreen => "0",
            Step::AToBOverlap => "1",
            Step::BGreen => "2",
            Step::BToCOverlap => "3",
            Step::CGreen => "4",
            Step::CToAOverlap => "5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::AGreen => "lane A green",
            Step::AToBOverlap => "A to B overlap",
            Step::BGreen => "lane B green",
            Step::BToCOverlap => "B to C overlap",
            Step::CGreen => "lane C green",
            Step::CToAOverlap => "C to A overlap",
        }
    }

    pub fn is_overlap(self) -> bool {
        matches!(
            self,
            Step::AToBOverlap | Step::BToCOverlap | Step::CToAOverlap
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for step in Step::ALL {
            assert_eq!(Step::parse(step.id()), Some(step));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Step::parse(""), None);
        assert_eq!(Step::parse("6"), None);
        assert_eq!(Step::parse(" 2"), None);
        assert_eq!(Step::parse("02"), None);
    }

    #[test]
    fn test_overlap_steps_are_odd() {
        assert!(!Step::AGreen.is_overlap());
        assert!(Step::AToBOverlap.is_overlap());
        assert!(Step::CToAOverlap.is_overlap());
    }
}
