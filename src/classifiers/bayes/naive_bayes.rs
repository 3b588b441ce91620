use crate::classifiers::Classifier;
use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, GaussianNumericAttributeClassObserver, NominalAttributeClassObserver,
};
use crate::classifiers::classifier::{ClassifierError, class_of};
use crate::core::InstanceHeader;
use crate::core::attributes::NominalAttribute;
use crate::core::instances::Instance;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Incremental naive Bayes: class priors from the observed class
/// distribution, Gaussian likelihoods for numeric attributes and smoothed
/// frequencies for nominal ones.
pub struct NaiveBayes {
    header: Option<Arc<InstanceHeader>>,
    observed_class_distribution: Vec<f64>,
    attribute_observers: Vec<Option<Box<dyn AttributeClassObserver>>>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self {
            header: None,
            observed_class_distribution: Vec::new(),
            attribute_observers: Vec::new(),
        }
    }

    pub fn weight_seen(&self) -> f64 {
        self.observed_class_distribution.iter().sum()
    }

    /// Unnormalized posterior per class. Attributes whose value is missing
    /// are left out of the product.
    pub fn do_naive_bayes_prediction(
        instance: &dyn Instance,
        observed_class_distribution: &[f64],
        attribute_observers: &[Option<Box<dyn AttributeClassObserver>>],
    ) -> Vec<f64> {
        let total: f64 = observed_class_distribution.iter().sum();
        if total <= 0.0 {
            return vec![0.0; observed_class_distribution.len()];
        }

        let mut votes: Vec<f64> = observed_class_distribution
            .iter()
            .map(|w| w / total)
            .collect();

        for (att_index, observer) in attribute_observers.iter().enumerate() {
            let Some(observer) = observer else { continue };
            let Some(value) = instance.value_at_index(att_index).filter(|v| !v.is_nan()) else {
                continue;
            };
            for (class, vote) in votes.iter_mut().enumerate() {
                *vote *= observer
                    .probability_of_attribute_value_given_class(value, class)
                    .unwrap_or(0.0);
            }
        }
        votes
    }

    fn new_observer(header: &InstanceHeader, index: usize) -> Box<dyn AttributeClassObserver> {
        match header
            .attribute_at_index(index)
            .and_then(|a| a.as_any().downcast_ref::<NominalAttribute>())
        {
            Some(nominal) => Box::new(NominalAttributeClassObserver::new(nominal.number_of_values())),
            None => Box::new(GaussianNumericAttributeClassObserver::new()),
        }
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NaiveBayes {
    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.observed_class_distribution = vec![0.0; header.number_of_classes()];
        self.attribute_observers = (0..header.number_of_attributes())
            .map(|i| (i != header.class_index()).then(|| Self::new_observer(&header, i)))
            .collect();
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<(), ClassifierError> {
        if self.header.is_none() {
            return Err(ClassifierError::ModelContextNotSet);
        }
        let class = class_of(instance, self.observed_class_distribution.len())?;
        let weight = instance.weight();
        self.observed_class_distribution[class] += weight;

        for (att_index, observer) in self.attribute_observers.iter_mut().enumerate() {
            if let (Some(observer), Some(value)) = (observer, instance.value_at_index(att_index)) {
                observer.observe_attribute_class(value, class, weight);
            }
        }
        Ok(())
    }

    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        if self.header.is_none() {
            return Err(ClassifierError::ModelContextNotSet);
        }
        Ok(Self::do_naive_bayes_prediction(
            instance,
            &self.observed_class_distribution,
            &self.attribute_observers,
        ))
    }
}

impl Display for NaiveBayes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some(header) = &self.header else {
            return write!(f, "NaiveBayes (no model context)");
        };
        let seen = self.weight_seen();
        writeln!(
            f,
            "NaiveBayes on '{}': {} classes, {} attributes, weight seen {}",
            header.relation_name(),
            self.observed_class_distribution.len(),
            header.number_of_attributes(),
            seen
        )?;
        let labels = header
            .class_attribute()
            .and_then(|a| a.as_any().downcast_ref::<NominalAttribute>());
        for (c, w) in self.observed_class_distribution.iter().enumerate() {
            let label = labels.and_then(|l| l.value_at(c)).unwrap_or("?");
            let prior = if seen > 0.0 { w / seen } else { 0.0 };
            writeln!(f, "  class {label}: weight {w} (prior {prior:.4})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{AttributeRef, NumericAttribute};
    use crate::core::instances::DenseInstance;

    fn header() -> Arc<InstanceHeader> {
        Arc::new(InstanceHeader::new(
            "toy".into(),
            vec![
                Arc::new(NumericAttribute::new("x".into())) as AttributeRef,
                Arc::new(NominalAttribute::with_values(
                    "color".into(),
                    vec!["red".into(), "blue".into()],
                )) as AttributeRef,
                Arc::new(NominalAttribute::with_values(
                    "class".into(),
                    vec!["neg".into(), "pos".into()],
                )) as AttributeRef,
            ],
            2,
        ))
    }

    fn inst(h: &Arc<InstanceHeader>, x: f64, color: f64, class: f64) -> DenseInstance {
        DenseInstance::new(Arc::clone(h), vec![x, color, class], 1.0)
    }

    fn trained() -> (NaiveBayes, Arc<InstanceHeader>) {
        let h = header();
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));
        for i in 0..50 {
            let jitter = (i % 5) as f64 * 0.1;
            nb.train_on_instance(&inst(&h, 1.0 + jitter, 0.0, 0.0)).unwrap();
            nb.train_on_instance(&inst(&h, 5.0 + jitter, 1.0, 1.0)).unwrap();
        }
        (nb, h)
    }

    #[test]
    fn separates_two_clusters() {
        let (nb, h) = trained();
        assert!(nb.correctly_classifies(&inst(&h, 1.1, 0.0, 0.0)).unwrap());
        assert!(nb.correctly_classifies(&inst(&h, 5.2, 1.0, 1.0)).unwrap());
        assert!(!nb.correctly_classifies(&inst(&h, 5.2, 1.0, 0.0)).unwrap());
        assert_eq!(nb.weight_seen(), 100.0);
    }

    #[test]
    fn missing_attribute_falls_back_to_other_evidence() {
        let (nb, h) = trained();
        let votes = nb
            .get_votes_for_instance(&inst(&h, f64::NAN, 1.0, 1.0))
            .unwrap();
        assert!(votes[1] > votes[0]);
    }

    #[test]
    fn voting_does_not_mutate() {
        let (nb, h) = trained();
        let probe = inst(&h, 3.0, 0.0, 1.0);
        let a = nb.get_votes_for_instance(&probe).unwrap();
        let b = nb.get_votes_for_instance(&probe).unwrap();
        assert_eq!(a, b);
        assert_eq!(nb.weight_seen(), 100.0);
    }

    #[test]
    fn untrained_model_votes_zero() {
        let h = header();
        let mut nb = NaiveBayes::new();
        nb.set_model_context(Arc::clone(&h));
        assert_eq!(
            nb.get_votes_for_instance(&inst(&h, 1.0, 0.0, 0.0)).unwrap(),
            vec![0.0, 0.0]
        );
    }

    #[test]
    fn faults() {
        let h = header();
        let mut nb = NaiveBayes::new();
        assert_eq!(
            nb.train_on_instance(&inst(&h, 1.0, 0.0, 0.0)),
            Err(ClassifierError::ModelContextNotSet)
        );

        nb.set_model_context(Arc::clone(&h));
        assert_eq!(
            nb.train_on_instance(&inst(&h, 1.0, 0.0, f64::NAN)),
            Err(ClassifierError::MissingClassValue)
        );
        assert_eq!(
            nb.train_on_instance(&inst(&h, 1.0, 0.0, 4.0)),
            Err(ClassifierError::ClassOutOfRange {
                class: 4,
                num_classes: 2
            })
        );
    }

    #[test]
    fn renders_class_priors() {
        let (nb, _) = trained();
        let text = nb.to_string();
        assert!(text.contains("NaiveBayes on 'toy'"), "{text}");
        assert!(text.contains("class pos: weight 50"), "{text}");
    }
}
