use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    EnumString,
    Display,
    EnumMessage,
)]
#[strum(serialize_all = "kebab-case")]
pub enum LearnerKind {
    #[default]
    #[strum(
        message = "Naive Bayes Classifier",
        detailed_message = "Performs classic Bayesian prediction assuming feature independence."
    )]
    NaiveBayes,
    #[strum(
        message = "Majority Class",
        detailed_message = "Predicts the most frequent class seen so far."
    )]
    MajorityClass,
}
