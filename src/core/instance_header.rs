use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute};

/// Schema shared by every instance of a stream: relation name, ordered
/// attributes and the position of the class attribute.
#[derive(Clone)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&dyn Attribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&dyn Attribute> {
        self.attribute_at_index(self.class_index)
    }

    /// Number of class labels, or 0 when the class attribute is not nominal.
    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .and_then(|a| a.as_any().downcast_ref::<NominalAttribute>())
            .map_or(0, |n| n.number_of_values())
    }
}

impl std::fmt::Debug for InstanceHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.attributes.iter().map(|a| a.name()).collect();
        f.debug_struct("InstanceHeader")
            .field("relation_name", &self.relation_name)
            .field("attributes", &names)
            .field("class_index", &self.class_index)
            .finish()
    }
}
