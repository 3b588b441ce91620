use crate::core::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::{Stream, StreamError};
use crate::testing::dummies::header_binary;
use std::sync::Arc;

/// In-memory stream over binary labels, optionally failing at one position.
pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub labels: Vec<usize>,
    idx: usize,
    fail_at: Option<usize>,
}

impl VecStream {
    pub fn new(labels: Vec<usize>) -> Self {
        Self {
            header: header_binary(),
            labels,
            idx: 0,
            fail_at: None,
        }
    }

    /// `n` instances with labels alternating `0, 1, 0, ...`.
    pub fn alternating(n: usize) -> Self {
        Self::new((0..n).map(|i| i % 2).collect())
    }

    /// The instance at `position` is reported as malformed.
    pub fn failing_at(mut self, position: usize) -> Self {
        self.fail_at = Some(position);
        self
    }
}

impl Stream for VecStream {
    fn header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.labels.len()
    }

    fn next_instance(&mut self) -> Result<Box<dyn Instance>, StreamError> {
        if !self.has_more_instances() {
            return Err(StreamError::Exhausted);
        }
        let position = self.idx;
        self.idx += 1;
        if self.fail_at == Some(position) {
            return Err(StreamError::Format {
                line: position + 1,
                message: "injected malformed record".into(),
            });
        }
        Ok(Box::new(DenseInstance::new(
            Arc::clone(&self.header),
            vec![self.labels[position] as f64],
            1.0,
        )))
    }
}
