use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Stream(#[from] StreamError),
}
