mod config;
mod error;
mod holdout_tail_evaluator;

pub use config::EvaluationConfig;
pub use error::EvaluationError;
pub use holdout_tail_evaluator::HoldoutTailEvaluator;
