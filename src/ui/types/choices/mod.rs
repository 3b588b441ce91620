mod learner_choice;
mod source_choice;

pub use learner_choice::LearnerKind;
pub use source_choice::{ArffParameters, RecordLogParameters, SourceChoice};
