use crate::classifiers::attribute_class_observers::AttributeClassObserver;

/// Weighted label counts per class with Laplace smoothing.
#[derive(Debug)]
pub struct NominalAttributeClassObserver {
    num_values: usize,
    counts_per_class: Vec<Option<Vec<f64>>>,
}

impl NominalAttributeClassObserver {
    pub fn new(num_values: usize) -> Self {
        Self {
            num_values,
            counts_per_class: Vec::new(),
        }
    }
}

impl AttributeClassObserver for NominalAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize, weight: f64) {
        if att_val.is_nan() || !weight.is_finite() || weight <= 0.0 {
            return;
        }
        let value = att_val as usize;
        if class_val >= self.counts_per_class.len() {
            self.counts_per_class.resize_with(class_val + 1, || None);
        }
        let counts = self.counts_per_class[class_val].get_or_insert_with(Vec::new);
        if value >= counts.len() {
            counts.resize(value + 1, 0.0);
        }
        counts[value] += weight;
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        let counts = self.counts_per_class.get(class_val)?.as_ref()?;
        let value = att_val as usize;
        let count = counts.get(value).copied().unwrap_or(0.0);
        let total: f64 = counts.iter().sum();
        let num_values = self.num_values.max(counts.len()) as f64;
        Some((count + 1.0) / (total + num_values))
    }
}
