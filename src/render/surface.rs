// file: src/render/surface.rs
// description: display surface abstraction and the in-memory lane board
// reference: internal module structure

use crate::models::Lane;

/// Somewhere lanes are drawn. Lanes are fixed when the surface is built and
/// only ever updated in place.
pub trait DisplaySurface {
    fn lane_count(&self) -> usize;

    /// `None` when no lane exists at `index`.
    fn lane_mut(&mut self, index: usize) -> Option<&mut Lane>;

    /// Document-level marker holding the raw step value.
    fn set_step_marker(&mut self, raw: &str);

    fn step_marker(&self) -> Option<&str>;

    /// Flush the current state to the output medium.
    fn present(&mut self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneBoard {
    lanes: Vec<Lane>,
    step: Option<String>,
}

impl LaneBoard {
    pub fn new(lane_count: usize) -> Self {
        let lanes = (0..lane_count).map(|i| Lane::named(lane_name(i))).collect();
        Self { lanes, step: None }
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }
}

impl Default for LaneBoard {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LANE_COUNT)
    }
}

impl DisplaySurface for LaneBoard {
    fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    fn lane_mut(&mut self, index: usize) -> Option<&mut Lane> {
        self.lanes.get_mut(index)
    }

    fn set_step_marker(&mut self, raw: &str) {
        self.step = Some(raw.to_string());
    }

    fn step_marker(&self) -> Option<&str> {
        self.step.as_deref()
    }
}

/// `A`, `B`, `C`, ... `Z`, then `L26`, `L27`, ...
pub fn lane_name(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("L{}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_names_lanes() {
        let board = LaneBoard::new(4);
        let names: Vec<&str> = board.lanes().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(lane_name(30), "L30");
    }

    #[test]
    fn test_lane_mut_guards_out_of_range() {
        let mut board = LaneBoard::default();
        assert_eq!(board.lane_count(), 3);
        assert!(board.lane_mut(2).is_some());
        assert!(board.lane_mut(3).is_none());
    }

    #[test]
    fn test_step_marker() {
        let mut board = LaneBoard::default();
        assert_eq!(board.step_marker(), None);
        board.set_step_marker("3");
        assert_eq!(board.step_marker(), Some("3"));
    }
}
