use crate::classifiers::{Classifier, ClassifierError};
use crate::core::InstanceHeader;
use crate::core::instances::Instance;
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    contexts: Cell<u64>,
    trains: Cell<u64>,
    queries: Cell<u64>,
    trained_after_query: Cell<bool>,
    called_before_context: Cell<bool>,
}

/// Records how the driver talks to its classifier. Always votes for class 0.
pub struct TrainSpyClassifier {
    counters: Rc<Counters>,
}

/// Read side of a [`TrainSpyClassifier`], usable after the spy was moved away.
#[derive(Clone)]
pub struct SpyHandle {
    counters: Rc<Counters>,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, SpyHandle) {
        let counters = Rc::new(Counters::default());
        (
            Self {
                counters: Rc::clone(&counters),
            },
            SpyHandle { counters },
        )
    }

    fn note_call(&self) {
        if self.counters.contexts.get() == 0 {
            self.counters.called_before_context.set(true);
        }
    }
}

impl SpyHandle {
    pub fn count(&self) -> u64 {
        self.counters.trains.get()
    }

    pub fn queries(&self) -> u64 {
        self.counters.queries.get()
    }

    pub fn contexts(&self) -> u64 {
        self.counters.contexts.get()
    }

    pub fn trained_after_query(&self) -> bool {
        self.counters.trained_after_query.get()
    }

    pub fn called_before_context(&self) -> bool {
        self.counters.called_before_context.get()
    }
}

impl Classifier for TrainSpyClassifier {
    fn set_model_context(&mut self, _header: Arc<InstanceHeader>) {
        self.counters.contexts.set(self.counters.contexts.get() + 1);
    }

    fn train_on_instance(&mut self, _instance: &dyn Instance) -> Result<(), ClassifierError> {
        self.note_call();
        if self.counters.queries.get() > 0 {
            self.counters.trained_after_query.set(true);
        }
        self.counters.trains.set(self.counters.trains.get() + 1);
        Ok(())
    }

    fn get_votes_for_instance(&self, _instance: &dyn Instance) -> Result<Vec<f64>, ClassifierError> {
        self.note_call();
        self.counters.queries.set(self.counters.queries.get() + 1);
        Ok(vec![1.0, 0.0])
    }
}

impl Display for TrainSpyClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrainSpyClassifier (trains={}, queries={})",
            self.counters.trains.get(),
            self.counters.queries.get()
        )
    }
}
