use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("source unavailable: {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("stream exhausted: next_instance called with no instances left")]
    Exhausted,
}

impl StreamError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        StreamError::Format {
            line,
            message: message.into(),
        }
    }

    /// Undecodable bytes are bad content, anything else means the source
    /// itself could not be read.
    pub(crate) fn read_failure(path: impl Into<PathBuf>, line: usize, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::InvalidData => StreamError::format(line, source.to_string()),
            _ => StreamError::unavailable(path, source),
        }
    }

    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StreamError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failures_split_by_kind() {
        let bad_bytes = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(matches!(
            StreamError::read_failure("a.arff", 4, bad_bytes),
            StreamError::Format { line: 4, .. }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            StreamError::read_failure("a.arff", 4, denied),
            StreamError::SourceUnavailable { .. }
        ));
    }
}
