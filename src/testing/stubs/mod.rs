pub mod faulty_classifier;
pub mod oracle_classifier;
pub mod train_spy_classifier;
pub mod vec_stream;

pub use faulty_classifier::FaultyClassifier;
pub use oracle_classifier::OracleClassifier;
pub use train_spy_classifier::{SpyHandle, TrainSpyClassifier};
pub use vec_stream::VecStream;
