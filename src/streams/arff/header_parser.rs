use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::streams::StreamError;
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};
use std::sync::Arc;

/// Matches an ARFF keyword (`@relation`, `@attribute`, `@data`) at the start
/// of `line`, case-insensitively, and returns the remainder.
pub(super) fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Splits a possibly quoted leading token from the rest of the line.
fn split_name(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim_start();
    let first = rest.chars().next()?;
    if first == '\'' || first == '"' {
        let close = rest[1..].find(first)? + 1;
        Some((&rest[1..close], rest[close + 1..].trim()))
    } else {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Some((&rest[..end], rest[end..].trim()))
    }
}

pub(super) fn parse_relation(rest: &str) -> String {
    strip_surrounding_quotes(rest.trim()).to_string()
}

pub(super) fn parse_attribute(rest: &str, line: usize) -> Result<AttributeRef, StreamError> {
    let (name, kind) =
        split_name(rest).ok_or_else(|| StreamError::format(line, "attribute without a name"))?;
    if kind.is_empty() {
        return Err(StreamError::format(
            line,
            format!("attribute '{name}' has no type"),
        ));
    }

    if let Some(body) = kind.strip_prefix('{') {
        let body = body
            .strip_suffix('}')
            .ok_or_else(|| StreamError::format(line, "unterminated nominal value list"))?;
        let values: Vec<String> = split_csv_preserving_quotes(body)
            .iter()
            .map(|v| strip_surrounding_quotes(v).to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return Err(StreamError::format(
                line,
                format!("nominal attribute '{name}' declares no values"),
            ));
        }
        return Ok(Arc::new(NominalAttribute::with_values(name.to_string(), values)) as AttributeRef);
    }

    match kind.to_ascii_lowercase().as_str() {
        "numeric" | "real" | "integer" => {
            Ok(Arc::new(NumericAttribute::new(name.to_string())) as AttributeRef)
        }
        other => Err(StreamError::format(
            line,
            format!("unsupported type '{other}' for attribute '{name}'"),
        )),
    }
}
