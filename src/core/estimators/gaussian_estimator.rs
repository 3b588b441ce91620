use std::f64::consts::PI;

/// Weighted running mean/variance of a numeric attribute, used to evaluate a
/// normal density for a value.
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussianEstimator {
    weight_sum: f64,
    mean: f64,
    variance_sum: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, value: f64, weight: f64) {
        if !value.is_finite() {
            return;
        }
        if self.weight_sum > 0.0 {
            self.weight_sum += weight;
            let last_mean = self.mean;
            self.mean += weight * (value - last_mean) / self.weight_sum;
            self.variance_sum += weight * (value - last_mean) * (value - self.mean);
        } else {
            self.mean = value;
            self.weight_sum = weight;
        }
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.weight_sum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        if self.weight_sum > 1.0 {
            self.variance_sum / (self.weight_sum - 1.0)
        } else {
            0.0
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Degenerate (zero variance) estimators put all the mass on the mean.
    pub fn probability_density(&self, value: f64) -> f64 {
        if self.weight_sum <= 0.0 {
            return 0.0;
        }
        let std_dev = self.std_dev();
        if std_dev > 0.0 {
            let diff = value - self.mean;
            (1.0 / ((2.0 * PI).sqrt() * std_dev)) * (-(diff * diff) / (2.0 * std_dev * std_dev)).exp()
        } else if value == self.mean {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance_match_sample_statistics() {
        let mut est = GaussianEstimator::new();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            est.add_observation(v, 1.0);
        }
        assert!((est.mean() - 5.0).abs() < 1e-12);
        assert!((est.variance() - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(est.total_weight_observed(), 8.0);
    }

    #[test]
    fn single_observation_is_a_point_mass() {
        let mut est = GaussianEstimator::new();
        est.add_observation(3.0, 1.0);
        assert_eq!(est.probability_density(3.0), 1.0);
        assert_eq!(est.probability_density(3.5), 0.0);
    }

    #[test]
    fn ignores_non_finite_values() {
        let mut est = GaussianEstimator::new();
        est.add_observation(f64::NAN, 1.0);
        est.add_observation(f64::INFINITY, 1.0);
        assert_eq!(est.total_weight_observed(), 0.0);
        assert_eq!(est.probability_density(0.0), 0.0);
    }
}
