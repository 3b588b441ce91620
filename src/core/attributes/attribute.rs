use std::any::Any;
use std::sync::Arc;

/// A column of an [`InstanceHeader`](crate::core::InstanceHeader).
pub trait Attribute: Any {
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn is_nominal(&self) -> bool {
        false
    }
}

pub type AttributeRef = Arc<dyn Attribute>;
