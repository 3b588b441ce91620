mod record_log_stream;

pub use record_log_stream::RecordLogStream;
