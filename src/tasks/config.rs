use crate::tasks::EvaluationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_MAX_INSTANCES: u64 = 1_000_000;
const DEFAULT_TEST_TAIL_START: u64 = 999_000;
const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

fn default_max_instances() -> u64 {
    DEFAULT_MAX_INSTANCES
}

fn default_test_tail_start() -> u64 {
    DEFAULT_TEST_TAIL_START
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluationConfig {
    #[serde(default = "default_max_instances")]
    #[schemars(
        title = "Max Instances",
        description = "Hard cap on instances consumed from the stream",
        default = "default_max_instances"
    )]
    pub max_instances: u64,

    #[serde(default = "default_test_tail_start")]
    #[schemars(
        title = "Test Tail Start",
        description = "Zero-based position from which instances are held out for testing",
        default = "default_test_tail_start"
    )]
    pub test_tail_start: u64,

    #[serde(default = "default_progress_interval")]
    #[schemars(
        title = "Progress Interval",
        description = "Emit a progress signal every N instances",
        range(min = 1),
        default = "default_progress_interval"
    )]
    pub progress_interval: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_instances: DEFAULT_MAX_INSTANCES,
            test_tail_start: DEFAULT_TEST_TAIL_START,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl EvaluationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EvaluationError> {
        serde_json::from_str(json).map_err(|e| EvaluationError::InvalidConfig(e.to_string()))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EvaluationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EvaluationError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        if self.progress_interval == 0 {
            return Err(EvaluationError::InvalidConfig(
                "progress_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(EvaluationConfig)
    }
}
