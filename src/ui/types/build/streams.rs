use crate::streams::Stream;
use crate::streams::arff::ArffFileStream;
use crate::streams::record_log::RecordLogStream;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::SourceChoice;

/// Opens the source; header problems surface here, before any run starts.
pub fn build_stream(choice: SourceChoice) -> Result<Box<dyn Stream>, BuildError> {
    match choice {
        SourceChoice::ArffFile(p) => {
            let s = ArffFileStream::open(p.path, p.class_index)?;
            Ok(Box::new(s))
        }
        SourceChoice::RecordLog(p) => {
            let s = RecordLogStream::open(p.path, p.class_index)?;
            Ok(Box::new(s))
        }
    }
}
