pub mod dummies;
pub mod stubs;

pub use dummies::header_binary;
pub use stubs::{FaultyClassifier, OracleClassifier, SpyHandle, TrainSpyClassifier, VecStream};
