use crate::classifiers::Classifier;
use crate::classifiers::classifier::{ClassifierError, class_of, max_index};
use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Predicts the class with the largest observed weight so far.
#[derive(Default)]
pub struct MajorityClass {
    header: Option<Arc<InstanceHeader>>,
    observed_class_distribution: Vec<f64>,
}

impl MajorityClass {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Classifier for MajorityClass {
    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.observed_class_distribution = vec![0.0; header.number_of_classes()];
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), ClassifierError> {
        if self.header.is_none() {
            return Err(ClassifierError::ModelContextNotSet);
        }
        let class = class_of(instance, self.observed_class_distribution.len())?;
        self.observed_class_distribution[class] += instance.weight();
        Ok(())
    }

    fn get_votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        if self.header.is_none() {
            return Err(ClassifierError::ModelContextNotSet);
        }
        Ok(self.observed_class_distribution.clone())
    }
}

impl Display for MajorityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match max_index(&self.observed_class_distribution) {
            Some(c) => write!(
                f,
                "MajorityClass: predicts class index {c}, distribution {:?}",
                self.observed_class_distribution
            ),
            None => write!(f, "MajorityClass (no model context)"),
        }
    }
}
