use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArffParameters {
    pub path: PathBuf,
    /// Zero-based class column; `None` selects the last attribute.
    pub class_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLogParameters {
    pub path: PathBuf,
    pub class_index: Option<usize>,
}

/// Instance source, selected by file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    ArffFile(ArffParameters),
    RecordLog(RecordLogParameters),
}

impl SourceChoice {
    /// `None` when the extension is neither `.arff` nor `.jsonl`.
    pub fn from_path(path: &Path, class_index: Option<usize>) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        let path = path.to_path_buf();
        if ext.eq_ignore_ascii_case("arff") {
            Some(SourceChoice::ArffFile(ArffParameters { path, class_index }))
        } else if ext.eq_ignore_ascii_case("jsonl") {
            Some(SourceChoice::RecordLog(RecordLogParameters { path, class_index }))
        } else {
            None
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SourceChoice::ArffFile(p) => &p.path,
            SourceChoice::RecordLog(p) => &p.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_source_by_extension() {
        assert!(matches!(
            SourceChoice::from_path(Path::new("data/x.ARFF"), None),
            Some(SourceChoice::ArffFile(_))
        ));
        assert!(matches!(
            SourceChoice::from_path(Path::new("dump.jsonl"), Some(2)),
            Some(SourceChoice::RecordLog(RecordLogParameters {
                class_index: Some(2),
                ..
            }))
        ));
        assert!(SourceChoice::from_path(Path::new("data.csv"), None).is_none());
        assert!(SourceChoice::from_path(Path::new("noext"), None).is_none());
    }
}
