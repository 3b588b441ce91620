use crate::core::instances::instance::Instance;
use crate::core::{InstanceHeader, RecordMetadata};
use std::sync::Arc;

pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<f64>,
    pub weight: f64,
    metadata: Option<RecordMetadata>,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<f64>, weight: f64) -> DenseInstance {
        DenseInstance {
            header,
            values,
            weight,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: RecordMetadata) -> DenseInstance {
        self.metadata = Some(metadata);
        self
    }
}

impl Instance for DenseInstance {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn metadata(&self) -> Option<&RecordMetadata> {
        self.metadata.as_ref()
    }
}
