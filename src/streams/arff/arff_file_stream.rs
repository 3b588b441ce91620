use crate::core::InstanceHeader;
use crate::core::attributes::NominalAttribute;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::arff::header_parser::{parse_attribute, parse_relation, strip_keyword};
use crate::streams::{Stream, StreamError};
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Lazily reads the `@data` section of an ARFF file, one row ahead.
pub struct ArffFileStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    pending: Option<Result<DenseInstance, StreamError>>,
}

impl ArffFileStream {
    /// Opens `path` and parses its header. `class_index = None` selects the
    /// last attribute.
    pub fn open<P: AsRef<Path>>(path: P, class_index: Option<usize>) -> Result<Self, StreamError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| StreamError::unavailable(&path, e))?;
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0;

        let mut relation = String::new();
        let mut attributes = Vec::new();
        let mut saw_data = false;

        for line in lines.by_ref() {
            line_no += 1;
            let line = line.map_err(|e| StreamError::read_failure(&path, line_no, e))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }
            if let Some(rest) = strip_keyword(line, "@relation") {
                relation = parse_relation(rest);
            } else if let Some(rest) = strip_keyword(line, "@attribute") {
                attributes.push(parse_attribute(rest, line_no)?);
            } else if strip_keyword(line, "@data").is_some() {
                saw_data = true;
                break;
            } else {
                return Err(StreamError::format(
                    line_no,
                    format!("unexpected header line '{line}'"),
                ));
            }
        }

        if !saw_data {
            return Err(StreamError::format(line_no, "missing @data section"));
        }
        if attributes.is_empty() {
            return Err(StreamError::format(line_no, "no @attribute declarations"));
        }

        let class_index = class_index.unwrap_or(attributes.len() - 1);
        match attributes.get(class_index) {
            None => {
                return Err(StreamError::format(
                    line_no,
                    format!(
                        "class index {class_index} out of range for {} attributes",
                        attributes.len()
                    ),
                ));
            }
            Some(attr) if !attr.is_nominal() => {
                return Err(StreamError::format(
                    line_no,
                    format!("class attribute '{}' must be nominal", attr.name()),
                ));
            }
            Some(_) => {}
        }

        let header = Arc::new(InstanceHeader::new(relation, attributes, class_index));
        debug!(
            path = %path.display(),
            relation = header.relation_name(),
            attributes = header.number_of_attributes(),
            class_index,
            "opened arff stream"
        );

        let mut stream = Self {
            path,
            header,
            lines,
            line_no,
            pending: None,
        };
        stream.pending = stream.read_row();
        Ok(stream)
    }

    fn read_row(&mut self) -> Option<Result<DenseInstance, StreamError>> {
        loop {
            let next = self.lines.next()?;
            self.line_no += 1;
            let line = match next {
                Ok(l) => l,
                Err(e) => return Some(Err(StreamError::read_failure(&self.path, self.line_no, e))),
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }
            return Some(self.parse_row(line));
        }
    }

    fn parse_row(&self, line: &str) -> Result<DenseInstance, StreamError> {
        let values = if let Some(body) = line.strip_prefix('{') {
            let body = body
                .strip_suffix('}')
                .ok_or_else(|| StreamError::format(self.line_no, "unterminated sparse row"))?;
            self.parse_sparse(body)?
        } else {
            self.parse_dense(line)?
        };
        Ok(DenseInstance::new(Arc::clone(&self.header), values, 1.0))
    }

    fn parse_dense(&self, line: &str) -> Result<Vec<f64>, StreamError> {
        let tokens = split_csv_preserving_quotes(line);
        let n = self.header.number_of_attributes();
        if tokens.len() != n {
            return Err(StreamError::format(
                self.line_no,
                format!("expected {n} values, found {}", tokens.len()),
            ));
        }
        tokens
            .iter()
            .enumerate()
            .map(|(i, tok)| self.parse_value(i, tok))
            .collect()
    }

    fn parse_sparse(&self, body: &str) -> Result<Vec<f64>, StreamError> {
        let n = self.header.number_of_attributes();
        let mut values = vec![0.0; n];
        for entry in split_csv_preserving_quotes(body) {
            let (idx, tok) = entry
                .split_once(char::is_whitespace)
                .ok_or_else(|| {
                    StreamError::format(self.line_no, format!("malformed sparse entry '{entry}'"))
                })?;
            let idx: usize = idx.parse().map_err(|_| {
                StreamError::format(self.line_no, format!("bad sparse index '{idx}'"))
            })?;
            if idx >= n {
                return Err(StreamError::format(
                    self.line_no,
                    format!("sparse index {idx} out of range"),
                ));
            }
            values[idx] = self.parse_value(idx, tok.trim())?;
        }
        Ok(values)
    }

    fn parse_value(&self, index: usize, token: &str) -> Result<f64, StreamError> {
        if token == "?" {
            return Ok(f64::NAN);
        }
        let attr = &self.header.attributes[index];
        if let Some(nominal) = attr.as_any().downcast_ref::<NominalAttribute>() {
            let label = strip_surrounding_quotes(token);
            nominal
                .index_of_value(label)
                .map(|i| i as f64)
                .ok_or_else(|| {
                    StreamError::format(
                        self.line_no,
                        format!("unknown label '{label}' for attribute '{}'", nominal.name),
                    )
                })
        } else {
            strip_surrounding_quotes(token).parse::<f64>().map_err(|_| {
                StreamError::format(
                    self.line_no,
                    format!("'{token}' is not numeric for attribute '{}'", attr.name()),
                )
            })
        }
    }
}

impl Stream for ArffFileStream {
    fn header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    fn next_instance(&mut self) -> Result<Box<dyn Instance>, StreamError> {
        let current = self.pending.take().ok_or(StreamError::Exhausted)?;
        match current {
            Ok(instance) => {
                self.pending = self.read_row();
                Ok(Box::new(instance))
            }
            Err(e) => Err(e),
        }
    }
}
