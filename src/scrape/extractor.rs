//! Positional pairing of independently queried label and value cell text.

use crate::error::ScrapeError;
use serde::Serialize;

/// One row of the spec table: a label and its same-index value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecPair {
    pub label: String,
    pub value: String,
}

/// Pairs label texts with same-index value texts.
///
/// Indices whose trimmed label text is empty are skipped and never consume
/// a value. A non-empty label with no value at its index is a scrape gone
/// wrong (the two cell lists come from the same table rows), so that fails
/// fast with [`ScrapeError::ValueIndexOutOfRange`] rather than silently
/// truncating. Values beyond the label list are ignored.
pub fn pair_specs(labels: &[String], values: &[String]) -> Result<Vec<SpecPair>, ScrapeError> {
    let mut pairs = Vec::new();

    for (index, label) in labels.iter().enumerate() {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }

        let value = values.get(index).ok_or(ScrapeError::ValueIndexOutOfRange {
            index,
            labels: labels.len(),
            values: values.len(),
        })?;

        pairs.push(SpecPair { label: label.to_string(), value: value.trim().to_string() });
    }

    Ok(pairs)
}
