//! Turns the text of one export file into a [`Dataset`].
//!
//! Both parsers are all-or-nothing: a single malformed line or a broken array fails the whole
//! file, so aggregate figures are never computed from a partial dataset.

use crate::core::detect::{detect_format, trim_blank};
use crate::domain::model::{Dataset, Record, SourceFormat};
use crate::utils::error::{ConvertError, Result};

/// Parses newline-delimited JSON, ignoring blank lines.
///
/// Line numbers in errors count non-blank lines only, starting at 1.
pub fn parse_json_lines(content: &str) -> Result<Vec<Record>> {
    content
        .split('\n')
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| ConvertError::MalformedLine {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Parses the whole content as one JSON document. The result is not required to be an array.
pub fn parse_json_array(content: &str) -> Result<serde_json::Value> {
    serde_json::from_str(trim_blank(content)).map_err(|e| ConvertError::MalformedArray {
        message: e.to_string(),
    })
}

pub fn parse_dataset(content: &str) -> Result<(SourceFormat, Dataset)> {
    let format = detect_format(content)?;
    let dataset = match format {
        SourceFormat::JsonArray => Dataset::from_document(parse_json_array(content)?),
        SourceFormat::JsonLines => Dataset::from_records(parse_json_lines(content)?),
    };
    Ok((format, dataset))
}
