use crate::evaluation::RunCounters;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter, Result};
use std::time::Duration;

fn as_secs<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Outcome of one holdout-tail run.
///
/// `accuracy` is `NaN` when the run ended before the test tail; it
/// serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub instances_processed: u64,
    pub instances_trained: u64,
    pub tests_seen: u64,
    pub tests_correct: u64,
    pub accuracy: f64,
    #[serde(rename = "wall_seconds", serialize_with = "as_secs")]
    pub wall_time: Duration,
    #[serde(rename = "cpu_seconds", serialize_with = "as_secs")]
    pub cpu_time: Duration,
    #[serde(rename = "processing_seconds", serialize_with = "as_secs")]
    pub train_time: Duration,
    pub rss_gb: Option<f64>,
}

impl Report {
    pub fn from_counters(
        counters: &RunCounters,
        wall_time: Duration,
        cpu_time: Duration,
        rss_gb: Option<f64>,
    ) -> Self {
        Self {
            instances_processed: counters.seen,
            instances_trained: counters.trained,
            tests_seen: counters.tests_seen,
            tests_correct: counters.tests_correct,
            accuracy: counters.accuracy(),
            wall_time,
            cpu_time,
            train_time: counters.train_time,
            rss_gb,
        }
    }

    /// `None` for the no-test-instances case.
    pub fn accuracy(&self) -> Option<f64> {
        (!self.accuracy.is_nan()).then_some(self.accuracy)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.accuracy() {
            Some(acc) => write!(
                f,
                "{} instances processed with {acc}% accuracy",
                self.instances_processed
            )?,
            None => write!(
                f,
                "{} instances processed with undefined accuracy (no test instances)",
                self.instances_processed
            )?,
        }
        writeln!(
            f,
            " in {:.3} seconds and processing time {:.3} seconds.",
            self.cpu_time.as_secs_f64(),
            self.train_time.as_secs_f64()
        )?;
        write!(
            f,
            "trained={}, tested={}, correct={}, wall={:.3}s",
            self.instances_trained,
            self.tests_seen,
            self.tests_correct,
            self.wall_time.as_secs_f64()
        )?;
        if let Some(rss) = self.rss_gb {
            write!(f, ", rss={rss:.3}GB")?;
        }
        Ok(())
    }
}
