use crate::core::InstanceHeader;
use crate::core::RecordMetadata;
use crate::core::attributes::Attribute;

/// A labeled data point conforming to an [`InstanceHeader`].
///
/// Values are stored as `f64`: nominal values hold the label index and
/// missing values are `NaN`.
pub trait Instance {
    fn weight(&self) -> f64;

    fn value_at_index(&self, index: usize) -> Option<f64>;

    fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.header().attribute_at_index(index)
    }

    fn number_of_attributes(&self) -> usize {
        self.header().number_of_attributes()
    }

    fn class_index(&self) -> usize {
        self.header().class_index()
    }

    /// `None` when the class value is missing.
    fn class_value(&self) -> Option<f64> {
        self.value_at_index(self.class_index())
            .filter(|v| !v.is_nan())
    }

    fn number_of_classes(&self) -> usize {
        self.header().number_of_classes()
    }

    fn to_vec(&self) -> Vec<f64>;

    fn header(&self) -> &InstanceHeader;

    /// Provenance attached by log-backed sources.
    fn metadata(&self) -> Option<&RecordMetadata> {
        None
    }
}
