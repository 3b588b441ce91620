pub mod attribute_class_observers;
pub mod bayes;
pub mod classifier;
mod majority_class;

pub use bayes::NaiveBayes;
pub use classifier::{Classifier, ClassifierError, max_index};
pub use majority_class::MajorityClass;
