// file: src/models/status.rs
// description: status payload decoded from the controller's /status endpoint
// reference: internal data structures

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Snapshot of the controller as served by `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    #[serde(rename = "currentStep", deserialize_with = "step_as_string")]
    pub current_step: String,
    #[serde(default)]
    pub lanes: Vec<LaneStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneStatus {
    pub count: MetricValue,
    pub flow: MetricValue,
    pub speed: MetricValue,
}

/// A display-only metric. The controller may send numbers or preformatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Integer(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Integer(value)
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        MetricValue::Integer(value.into())
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Float(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl LaneStatus {
    pub fn new(
        count: impl Into<MetricValue>,
        flow: impl Into<MetricValue>,
        speed: impl Into<MetricValue>,
    ) -> Self {
        Self {
            count: count.into(),
            flow: flow.into(),
            speed: speed.into(),
        }
    }
}

impl StatusPayload {
    pub fn new(current_step: impl Into<String>, lanes: Vec<LaneStatus>) -> Self {
        Self {
            current_step: current_step.into(),
            lanes,
        }
    }

    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

// The controller firmware reports its step as an integer; the dashboard contract says string.
fn step_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStep {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawStep::deserialize(deserializer)? {
        RawStep::Text(s) => s,
        RawStep::Number(n) => n.to_string(),
    })
}
