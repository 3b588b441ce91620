pub mod arff;
mod error;
pub mod record_log;
pub mod stream;

pub use error::StreamError;
pub use stream::Stream;
