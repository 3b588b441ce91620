use crate::classifiers::{Classifier, ClassifierError};
use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Votes for the instance's own label, so it is always right.
#[derive(Default)]
pub struct OracleClassifier {
    num_classes: usize,
    trained: u64,
}

impl Classifier for OracleClassifier {
    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.num_classes = header.number_of_classes();
    }

    fn train_on_instance(&mut self, _instance: &dyn Instance) -> Result<(), ClassifierError> {
        self.trained += 1;
        Ok(())
    }

    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        let class = instance
            .class_value()
            .ok_or(ClassifierError::MissingClassValue)? as usize;
        let mut votes = vec![0.0; self.num_classes.max(class + 1)];
        votes[class] = 1.0;
        Ok(votes)
    }
}

impl Display for OracleClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OracleClassifier (trained on {})", self.trained)
    }
}
