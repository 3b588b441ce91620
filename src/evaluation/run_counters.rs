use std::time::Duration;

/// Accumulators for a single evaluation run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunCounters {
    pub seen: u64,
    pub trained: u64,
    pub tests_seen: u64,
    pub tests_correct: u64,
    pub train_time: Duration,
}

impl RunCounters {
    #[inline]
    pub fn record_train(&mut self, elapsed: Duration) {
        self.trained += 1;
        self.train_time += elapsed;
    }

    #[inline]
    pub fn record_test(&mut self, correct: bool) {
        self.tests_seen += 1;
        if correct {
            self.tests_correct += 1;
        }
    }

    /// Percentage of held-out instances classified correctly; `NaN` when no
    /// instance was tested.
    pub fn accuracy(&self) -> f64 {
        if self.tests_seen == 0 {
            return f64::NAN;
        }
        100.0 * self.tests_correct as f64 / self.tests_seen as f64
    }
}
