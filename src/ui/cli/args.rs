use crate::tasks::{EvaluationConfig, EvaluationError};
use crate::ui::types::choices::{ArffParameters, LearnerKind, SourceChoice};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Used when no usable source path is given on the command line.
pub const DEFAULT_SOURCE_PATH: &str = "data/lin_class_mil.arff";

#[derive(Debug, Parser)]
#[command(name = "rivu-holdout")]
#[command(about = "Train an incremental classifier on a stream and test it on the held-out tail")]
#[command(version)]
pub struct Args {
    /// Instance source (.arff file or .jsonl record log)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Learner to evaluate
    #[arg(short, long, default_value_t = LearnerKind::NaiveBayes)]
    pub learner: LearnerKind,

    /// JSON file with evaluation settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hard cap on instances consumed
    #[arg(long)]
    pub max_instances: Option<u64>,

    /// Position from which instances are held out for testing
    #[arg(long)]
    pub test_tail_start: Option<u64>,

    /// Emit a progress line every N instances
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Zero-based class column (default: last attribute)
    #[arg(long)]
    pub class_index: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the JSON schema of the config file and exit
    #[arg(long)]
    pub print_config_schema: bool,
}

impl Args {
    /// Defaults, then the config file, then command-line overrides.
    pub fn evaluation_config(&self) -> Result<EvaluationConfig, EvaluationError> {
        let mut config = match &self.config {
            Some(path) => EvaluationConfig::from_json_file(path)?,
            None => EvaluationConfig::default(),
        };
        if let Some(v) = self.max_instances {
            config.max_instances = v;
        }
        if let Some(v) = self.test_tail_start {
            config.test_tail_start = v;
        }
        if let Some(v) = self.progress_interval {
            config.progress_interval = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// The given path when it names a supported source, otherwise
    /// [`DEFAULT_SOURCE_PATH`].
    pub fn source(&self) -> SourceChoice {
        if let Some(path) = &self.path {
            if let Some(choice) = SourceChoice::from_path(path, self.class_index) {
                return choice;
            }
            warn!(
                path = %path.display(),
                fallback = DEFAULT_SOURCE_PATH,
                "unsupported source extension, using fallback"
            );
        }
        SourceChoice::ArffFile(ArffParameters {
            path: PathBuf::from(DEFAULT_SOURCE_PATH),
            class_index: self.class_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rivu-holdout").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let a = parse(&[]);
        assert_eq!(a.learner, LearnerKind::NaiveBayes);
        assert_eq!(a.evaluation_config().unwrap(), EvaluationConfig::default());
        assert_eq!(a.source().path(), PathBuf::from(DEFAULT_SOURCE_PATH));
    }

    #[test]
    fn non_arff_path_falls_back() {
        let a = parse(&["data/whatever.csv"]);
        assert_eq!(a.source().path(), PathBuf::from(DEFAULT_SOURCE_PATH));
        let a = parse(&["runs/clicks.jsonl", "--class-index", "0"]);
        assert!(matches!(a.source(), SourceChoice::RecordLog(_)));
    }

    #[test]
    fn flags_override_config_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"max_instances": 5000, "test_tail_start": 4000}}"#).unwrap();
        let path = f.path().to_str().unwrap();
        let a = parse(&["--config", path, "--test-tail-start", "4500", "-l", "majority-class"]);
        let c = a.evaluation_config().unwrap();
        assert_eq!(c.max_instances, 5000);
        assert_eq!(c.test_tail_start, 4500);
        assert_eq!(c.progress_interval, 10_000);
        assert_eq!(a.learner, LearnerKind::MajorityClass);
    }

    #[test]
    fn zero_progress_interval_is_invalid() {
        let a = parse(&["--progress-interval", "0"]);
        assert!(a.evaluation_config().is_err());
    }

    #[test]
    fn unknown_learner_is_a_usage_error() {
        let res = Args::try_parse_from(["rivu-holdout", "--learner", "hoeffding-tree"]);
        assert!(res.is_err());
    }
}
