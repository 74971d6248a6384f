use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Message printed ahead of the JSON array once the page has been processed
pub const FINISHED_PREFIX: &str = "Finished. Here is your data:";

/// A country label paired with the registry link found next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Visible text of the matched link
    #[serde(rename = "Country")]
    pub label: String,

    /// Raw `href` of the matched link, empty when the attribute is missing
    #[serde(rename = "URL")]
    pub target: String,
}

impl Record {
    /// Create a new record
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Serializes the records into the final stdout line.
///
/// Returns [`Error::Serialize`] if the records cannot be encoded; callers print
/// the error text in place of the data line.
pub fn completion_line(records: &[Record]) -> Result<String> {
    let data = serde_json::to_string(records).map_err(Error::Serialize)?;
    Ok(format!("{} {}", FINISHED_PREFIX, escape_html(&data)))
}

/// Escapes `<`, `>`, `&`, U+2028 and U+2029 as `\uXXXX` sequences so the
/// array can be embedded in HTML.
///
/// These characters only ever occur inside JSON string literals, so the
/// escaped text decodes to the same values.
fn escape_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}
