use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instances::{DenseInstance, Instance};
use crate::core::{InstanceHeader, RecordMetadata};
use crate::streams::{Stream, StreamError};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct LogHeader {
    relation: String,
    attributes: Vec<AttributeSpec>,
    #[serde(default)]
    class_index: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum AttributeSpec {
    Numeric { name: String },
    Nominal { name: String, values: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct LogRecord {
    #[serde(flatten)]
    metadata: RecordMetadata,
    values: Vec<Value>,
}

/// Instances exported from a partitioned log as JSON lines.
///
/// The first non-blank line is the header object; every following line is
/// one record whose envelope fields become the instance's [`RecordMetadata`].
pub struct RecordLogStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    pending: Option<Result<DenseInstance, StreamError>>,
}

impl RecordLogStream {
    /// `class_index` overrides the one carried by the header line; with
    /// neither, the last attribute is the class.
    pub fn open<P: AsRef<Path>>(path: P, class_index: Option<usize>) -> Result<Self, StreamError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| StreamError::unavailable(&path, e))?;
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0;

        let header_line = loop {
            let Some(line) = lines.next() else {
                return Err(StreamError::format(line_no, "missing header line"));
            };
            line_no += 1;
            let line = line.map_err(|e| StreamError::read_failure(&path, line_no, e))?;
            if !line.trim().is_empty() {
                break line;
            }
        };

        let log_header: LogHeader = serde_json::from_str(&header_line)
            .map_err(|e| StreamError::format(line_no, format!("invalid header: {e}")))?;
        let header = Arc::new(build_header(log_header, class_index, line_no)?);
        debug!(
            path = %path.display(),
            relation = header.relation_name(),
            attributes = header.number_of_attributes(),
            "opened record log stream"
        );

        let mut stream = Self {
            path,
            header,
            lines,
            line_no,
            pending: None,
        };
        stream.pending = stream.read_record();
        Ok(stream)
    }

    fn read_record(&mut self) -> Option<Result<DenseInstance, StreamError>> {
        loop {
            let next = self.lines.next()?;
            self.line_no += 1;
            let line = match next {
                Ok(l) => l,
                Err(e) => return Some(Err(StreamError::read_failure(&self.path, self.line_no, e))),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_record(&line));
        }
    }

    fn parse_record(&self, line: &str) -> Result<DenseInstance, StreamError> {
        let record: LogRecord = serde_json::from_str(line)
            .map_err(|e| StreamError::format(self.line_no, format!("invalid record: {e}")))?;

        let n = self.header.number_of_attributes();
        if record.values.len() != n {
            return Err(StreamError::format(
                self.line_no,
                format!("expected {n} values, found {}", record.values.len()),
            ));
        }

        let values = record
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| self.convert_value(i, v))
            .collect::<Result<Vec<f64>, _>>()?;

        Ok(DenseInstance::new(Arc::clone(&self.header), values, 1.0).with_metadata(record.metadata))
    }

    fn convert_value(&self, index: usize, value: &Value) -> Result<f64, StreamError> {
        let attr = &self.header.attributes[index];
        match (value, attr.as_any().downcast_ref::<NominalAttribute>()) {
            (Value::Null, _) => Ok(f64::NAN),
            (Value::String(label), Some(nominal)) => nominal
                .index_of_value(label)
                .map(|i| i as f64)
                .ok_or_else(|| {
                    StreamError::format(
                        self.line_no,
                        format!("unknown label '{label}' for attribute '{}'", nominal.name),
                    )
                }),
            (Value::Number(num), None) => num.as_f64().ok_or_else(|| {
                StreamError::format(self.line_no, format!("'{num}' is not a finite number"))
            }),
            (other, _) => Err(StreamError::format(
                self.line_no,
                format!("value {other} does not fit attribute '{}'", attr.name()),
            )),
        }
    }
}

fn build_header(
    log_header: LogHeader,
    class_index: Option<usize>,
    line: usize,
) -> Result<InstanceHeader, StreamError> {
    if log_header.attributes.is_empty() {
        return Err(StreamError::format(line, "header declares no attributes"));
    }
    let attributes: Vec<AttributeRef> = log_header
        .attributes
        .into_iter()
        .map(|a| match a {
            AttributeSpec::Numeric { name } => Arc::new(NumericAttribute::new(name)) as AttributeRef,
            AttributeSpec::Nominal { name, values } => {
                Arc::new(NominalAttribute::with_values(name, values)) as AttributeRef
            }
        })
        .collect();

    let class_index = class_index
        .or(log_header.class_index)
        .unwrap_or(attributes.len() - 1);
    match attributes.get(class_index) {
        Some(attr) if attr.is_nominal() => {}
        Some(attr) => {
            return Err(StreamError::format(
                line,
                format!("class attribute '{}' must be nominal", attr.name()),
            ));
        }
        None => {
            return Err(StreamError::format(
                line,
                format!("class index {class_index} out of range"),
            ));
        }
    }
    Ok(InstanceHeader::new(log_header.relation, attributes, class_index))
}

impl Stream for RecordLogStream {
    fn header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    fn next_instance(&mut self) -> Result<Box<dyn Instance>, StreamError> {
        let current = self.pending.take().ok_or(StreamError::Exhausted)?;
        let instance = current?;
        self.pending = self.read_record();
        Ok(Box::new(instance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = r#"{"relation":"clicks","attributes":[{"type":"numeric","name":"dwell"},{"type":"nominal","name":"clicked","values":["no","yes"]}]}"#;

    fn log(lines: &[&str]) -> NamedTempFile {
        let mut f = NamedTempFile::with_suffix(".jsonl").unwrap();
        for l in lines {
            writeln!(f, "{l}").unwrap();
        }
        f
    }

    #[test]
    fn records_carry_their_envelope() {
        let f = log(&[
            HEADER,
            r#"{"topic":"clicks","partition":2,"key":7,"offset":100,"timestamp":1700000000000,"values":[3.5,"yes"]}"#,
            "",
            r#"{"topic":"clicks","partition":0,"offset":101,"timestamp":1700000000500,"values":[null,"no"]}"#,
        ]);
        let mut s = RecordLogStream::open(f.path(), None).unwrap();
        assert_eq!(s.header().relation_name(), "clicks");
        assert_eq!(s.header().class_index(), 1);

        let first = s.next_instance().unwrap();
        assert_eq!(first.to_vec(), vec![3.5, 1.0]);
        let m = first.metadata().unwrap();
        assert_eq!((m.topic.as_str(), m.partition, m.key, m.offset), ("clicks", 2, Some(7), 100));
        assert_eq!(m.timestamp.timestamp_millis(), 1_700_000_000_000);

        let second = s.next_instance().unwrap();
        assert!(second.value_at_index(0).unwrap().is_nan());
        assert_eq!(second.metadata().unwrap().key, None);

        assert!(!s.has_more_instances());
        assert!(matches!(s.next_instance(), Err(StreamError::Exhausted)));
    }

    #[test]
    fn empty_file_has_no_header() {
        let f = log(&[]);
        assert!(matches!(
            RecordLogStream::open(f.path(), None),
            Err(StreamError::Format { .. })
        ));
    }

    #[test]
    fn numeric_class_is_rejected() {
        let f = log(&[HEADER]);
        assert!(matches!(
            RecordLogStream::open(f.path(), Some(0)),
            Err(StreamError::Format { .. })
        ));
    }

    #[test]
    fn bad_record_fails_when_pulled() {
        let f = log(&[
            HEADER,
            r#"{"topic":"t","partition":0,"offset":1,"timestamp":0,"values":[1.0,"maybe"]}"#,
        ]);
        let mut s = RecordLogStream::open(f.path(), None).unwrap();
        assert!(s.has_more_instances());
        assert!(matches!(
            s.next_instance(),
            Err(StreamError::Format { line: 2, .. })
        ));
    }

    #[test]
    fn undecodable_record_is_a_format_error() {
        let mut f = NamedTempFile::with_suffix(".jsonl").unwrap();
        writeln!(f, "{HEADER}").unwrap();
        f.write_all(b"{\"topic\":\"\xff\"}\n").unwrap();
        let mut s = RecordLogStream::open(f.path(), None).unwrap();
        let err = s.next_instance().err().unwrap();
        assert!(matches!(err, StreamError::Format { line: 2, .. }), "{err}");
    }
}
