use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("model context not set; call set_model_context first")]
    ModelContextNotSet,

    #[error("instance has no class value")]
    MissingClassValue,

    #[error("class {class} out of range for {num_classes} classes")]
    ClassOutOfRange { class: usize, num_classes: usize },
}

/// Incremental learner driven one instance at a time.
///
/// `Display` renders the current model as text.
pub trait Classifier: Display {
    /// One-time setup with the stream schema; must precede any other call.
    fn set_model_context(&mut self, header: Arc<InstanceHeader>);

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), ClassifierError>;

    /// One score per class. Must not change the model.
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError>;

    /// Whether the current model predicts the instance's true class. An
    /// instance without a class value is never classified correctly.
    fn correctly_classifies(&self, instance: &dyn Instance) -> Result<bool, ClassifierError> {
        let Some(class) = instance.class_value() else {
            return Ok(false);
        };
        let class = class as usize;
        let votes = self.get_votes_for_instance(instance)?;
        Ok(max_index(&votes) == Some(class))
    }
}

/// Index of the first maximum; non-finite votes are ignored.
pub fn max_index(votes: &[f64]) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in votes.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        if best.is_none() || v > best_value {
            best = Some(i);
            best_value = v;
        }
    }
    best
}

/// Validates the class of a training instance against the model's class count.
pub(crate) fn class_of(instance: &dyn Instance, num_classes: usize) -> Result<usize, ClassifierError> {
    let class = instance
        .class_value()
        .ok_or(ClassifierError::MissingClassValue)? as usize;
    if class >= num_classes {
        return Err(ClassifierError::ClassOutOfRange { class, num_classes });
    }
    Ok(class)
}
