// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod poller;
pub mod render;
pub mod utils;

pub use config::{Config, DisplayConfig, PollerConfig};
pub use error::{MonitorError, Result};
pub use models::{Border, Lane, LaneStatus, MetricValue, Signal, StatusPayload, Step};
pub use poller::{Poller, StatusClient, StatusSource};
pub use render::{
    DisplaySurface, LaneBoard, RenderOutcome, TerminalBoard, border_triple, render,
};
pub use utils::PollStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let board = LaneBoard::new(config.display.lane_count);
        assert_eq!(board.lane_count(), 3);
        assert!(border_triple("0").is_some());
    }
}
