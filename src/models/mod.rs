// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod lane;
pub mod status;
pub mod step;

pub use lane::{Border, Lane, Signal};
pub use status::{LaneStatus, MetricValue, StatusPayload};
pub use step::Step;
