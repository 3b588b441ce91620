use crate::classifiers::ClassifierError;
use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("classifier fault: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("evaluation already ran; the stream cannot be replayed")]
    AlreadyRun,
}
