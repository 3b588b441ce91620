use crate::classifiers::Classifier;
use crate::evaluation::{Progress, Report, RunCounters};
use crate::streams::Stream;
use crate::tasks::{EvaluationConfig, EvaluationError};
use crate::utils::system::{CpuStopwatch, current_rss_gb};
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::info;

/// Train on the head of a stream, test on its tail.
///
/// Instances at positions `< test_tail_start` are used for training only,
/// later ones (up to `max_instances`) for testing only. Only the training
/// calls are timed for the reported processing time.
pub struct HoldoutTailEvaluator {
    learner: Box<dyn Classifier>,
    stream: Box<dyn Stream>,
    config: EvaluationConfig,
    counters: RunCounters,
    finished: bool,
    progress_tx: Option<Sender<Progress>>,
}

impl HoldoutTailEvaluator {
    pub fn new(
        learner: Box<dyn Classifier>,
        stream: Box<dyn Stream>,
        config: EvaluationConfig,
    ) -> Result<Self, EvaluationError> {
        config.validate()?;
        Ok(Self {
            learner,
            stream,
            config,
            counters: RunCounters::default(),
            finished: false,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Progress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn learner(&self) -> &dyn Classifier {
        self.learner.as_ref()
    }

    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    pub fn run(&mut self) -> Result<Report, EvaluationError> {
        if self.finished {
            return Err(EvaluationError::AlreadyRun);
        }
        self.finished = true;

        let header = self.stream.header();
        info!(
            relation = header.relation_name(),
            max_instances = self.config.max_instances,
            test_tail_start = self.config.test_tail_start,
            "starting holdout-tail evaluation"
        );
        self.learner.set_model_context(header);

        let wall_start = Instant::now();
        let cpu_start = CpuStopwatch::start();

        while self.stream.has_more_instances() && self.counters.seen < self.config.max_instances {
            let instance = self.stream.next_instance()?;

            if self.counters.seen >= self.config.test_tail_start {
                let correct = self.learner.correctly_classifies(instance.as_ref())?;
                self.counters.record_test(correct);
            } else {
                let stopwatch = CpuStopwatch::start();
                self.learner.train_on_instance(instance.as_ref())?;
                self.counters.record_train(stopwatch.elapsed());
            }

            self.counters.seen += 1;
            if self.counters.seen % self.config.progress_interval == 0 {
                self.emit_progress();
            }
        }

        let report = Report::from_counters(
            &self.counters,
            wall_start.elapsed(),
            cpu_start.elapsed(),
            current_rss_gb(),
        );
        info!(
            processed = report.instances_processed,
            tests = report.tests_seen,
            accuracy = report.accuracy,
            "holdout-tail evaluation finished"
        );
        Ok(report)
    }

    fn emit_progress(&self) {
        let progress = Progress {
            instances_seen: self.counters.seen,
        };
        info!(instances_seen = progress.instances_seen, "progress");
        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(progress);
        }
    }
}
