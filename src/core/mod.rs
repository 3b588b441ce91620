pub mod attributes;
mod estimators;
mod instance_header;
pub mod instances;
mod metadata;

pub use estimators::GaussianEstimator;
pub use instance_header::InstanceHeader;
pub use metadata::RecordMetadata;
