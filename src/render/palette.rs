// file: src/render/palette.rs
// description: maps the controller step to per-lane border colors
// reference: traffic controller phase table

use crate::models::{Border, Signal, Step};

use Signal::{Green, Red, Yellow};

/// Border signals for lanes A, B and C in the given phase.
pub fn signals_for(step: Step) -> [Signal; 3] {
    match step {
        Step::AGreen => [Yellow, Red, Red],
        Step::AToBOverlap => [Yellow, Yellow, Red],
        Step::BGreen => [Red, Green, Red],
        Step::BToCOverlap => [Red, Yellow, Yellow],
        Step::CGreen => [Red, Red, Green],
        Step::CToAOverlap => [Red, Yellow, Yellow],
    }
}

/// Borders for the raw step value, or `None` when the step is not recognized
/// and existing borders should be left alone.
pub fn border_triple(step: &str) -> Option<[Border; 3]> {
    Step::parse(step).map(|step| signals_for(step).map(Border::solid))
}
