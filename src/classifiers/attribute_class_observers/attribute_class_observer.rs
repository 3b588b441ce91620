/// Per-attribute statistics conditioned on the class, as used by Bayesian
/// leaf predictors.
pub trait AttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize, weight: f64);

    /// `None` when nothing has been observed for `class_val`.
    fn probability_of_attribute_value_given_class(
        &self,
        att_val: f64,
        class_val: usize,
    ) -> Option<f64>;
}
