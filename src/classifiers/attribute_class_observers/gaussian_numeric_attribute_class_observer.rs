use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::core::GaussianEstimator;

/// Models a numeric attribute as one normal distribution per class.
#[derive(Debug, Default)]
pub struct GaussianNumericAttributeClassObserver {
    distribution_per_class: Vec<Option<GaussianEstimator>>,
}

impl GaussianNumericAttributeClassObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttributeClassObserver for GaussianNumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize, weight: f64) {
        if att_val.is_nan() || !weight.is_finite() || weight <= 0.0 {
            return;
        }
        if class_val >= self.distribution_per_class.len() {
            self.distribution_per_class.resize_with(class_val + 1, || None);
        }
        self.distribution_per_class[class_val]
            .get_or_insert_with(GaussianEstimator::new)
            .add_observation(att_val, weight);
    }

    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64> {
        if att_val.is_nan() {
            return None;
        }
        match self.distribution_per_class.get(class_val) {
            Some(Some(est)) => Some(est.probability_density(att_val)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_returns_none() {
        let obs = GaussianNumericAttributeClassObserver::new();
        assert!(obs.probability_of_attribute_value_given_class(0.0, 0).is_none());
    }

    #[test]
    fn density_peaks_at_class_mean() {
        let mut obs = GaussianNumericAttributeClassObserver::new();
        for v in [1.0, 2.0, 3.0] {
            obs.observe_attribute_class(v, 0, 1.0);
        }
        let center = obs.probability_of_attribute_value_given_class(2.0, 0).unwrap();
        let left = obs.probability_of_attribute_value_given_class(0.0, 0).unwrap();
        let right = obs.probability_of_attribute_value_given_class(5.0, 0).unwrap();
        assert!(center > left && center > right);
        assert!(obs.probability_of_attribute_value_given_class(2.0, 1).is_none());
    }

    #[test]
    fn ignores_nan_and_non_positive_weight() {
        let mut obs = GaussianNumericAttributeClassObserver::new();
        obs.observe_attribute_class(f64::NAN, 0, 1.0);
        obs.observe_attribute_class(10.0, 0, 0.0);
        obs.observe_attribute_class(10.0, 0, -1.0);
        assert!(obs.probability_of_attribute_value_given_class(10.0, 0).is_none());

        obs.observe_attribute_class(10.0, 0, 2.0);
        assert_eq!(obs.probability_of_attribute_value_given_class(10.0, 0), Some(1.0));
        assert_eq!(obs.probability_of_attribute_value_given_class(9.5, 0), Some(0.0));
    }

    #[test]
    fn sparse_class_indices_are_padded() {
        let mut obs = GaussianNumericAttributeClassObserver::new();
        obs.observe_attribute_class(1.0, 3, 1.0);
        assert!(obs.probability_of_attribute_value_given_class(1.0, 1).is_none());
        assert!(obs.probability_of_attribute_value_given_class(1.0, 3).is_some());
    }
}
