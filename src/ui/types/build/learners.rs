use crate::classifiers::{Classifier, MajorityClass, NaiveBayes};
use crate::ui::types::choices::LearnerKind;

pub fn build_learner(kind: LearnerKind) -> Box<dyn Classifier> {
    match kind {
        LearnerKind::NaiveBayes => Box::new(NaiveBayes::new()),
        LearnerKind::MajorityClass => Box::new(MajorityClass::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind() {
        assert!(build_learner(LearnerKind::NaiveBayes).to_string().starts_with("NaiveBayes"));
        assert!(build_learner(LearnerKind::MajorityClass).to_string().starts_with("MajorityClass"));
    }
}
