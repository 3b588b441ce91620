use crate::core::InstanceHeader;
use crate::core::attributes::{AttributeRef, NominalAttribute};
use std::sync::Arc;

/// Single nominal class attribute with labels `A` and `B`.
pub fn header_binary() -> Arc<InstanceHeader> {
    let class_attribute = Arc::new(NominalAttribute::with_values(
        "class".into(),
        vec!["A".to_string(), "B".to_string()],
    )) as AttributeRef;

    Arc::new(InstanceHeader::new("bin".into(), vec![class_attribute], 0))
}
