use crate::classifiers::{Classifier, ClassifierError};
use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Fails on the n-th training call or on every query.
#[derive(Default)]
pub struct FaultyClassifier {
    fail_train_at: Option<u64>,
    fail_queries: bool,
    trains: u64,
}

impl FaultyClassifier {
    /// The `n`-th training call (1-based) fails.
    pub fn failing_train_at(n: u64) -> Self {
        Self {
            fail_train_at: Some(n),
            ..Self::default()
        }
    }

    pub fn failing_queries() -> Self {
        Self {
            fail_queries: true,
            ..Self::default()
        }
    }
}

impl Classifier for FaultyClassifier {
    fn set_model_context(&mut self, _header: Arc<InstanceHeader>) {}

    fn train_on_instance(&mut self, _instance: &dyn Instance) -> Result<(), ClassifierError> {
        self.trains += 1;
        if self.fail_train_at == Some(self.trains) {
            return Err(ClassifierError::MissingClassValue);
        }
        Ok(())
    }

    fn get_votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        if self.fail_queries {
            return Err(ClassifierError::ClassOutOfRange {
                class: 9,
                num_classes: 2,
            });
        }
        Ok(vec![1.0, 0.0])
    }
}

impl Display for FaultyClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FaultyClassifier")
    }
}
