//! Parser for the per-transcript attributes table.
//!
//! A header-bearing TSV whose first column is the transcript id; remaining
//! columns are free-form annotation metadata (gene id, biotype, common
//! name). The hint pipeline only ever asks one question of it: which
//! transcript ids carry a given value in a given column.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::warn;

use crate::parsing::psl::ParseError;

/// Transcript metadata indexed by the first column of a TSV.
#[derive(Debug, Clone, Default)]
pub struct AttributesTable {
    /// Names of the value columns (header minus the key column).
    columns: Vec<String>,
    /// Key column values mapped to the remaining fields of their row.
    rows: HashMap<String, Vec<String>>,
}

impl AttributesTable {
    /// Number of keyed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value-column names, in header order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Look up one cell by key and column name.
    #[must_use]
    pub fn value(&self, key: &str, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(key).map(|row| row[idx].as_str())
    }

    /// All keys whose `column` equals `value`. Returns `None` when the
    /// column does not exist, which callers should treat as a usage error
    /// rather than an empty result.
    #[must_use]
    pub fn keys_where(&self, column: &str, value: &str) -> Option<HashSet<String>> {
        let idx = self.columns.iter().position(|c| c == column)?;
        Some(
            self.rows
                .iter()
                .filter(|(_, row)| row[idx] == value)
                .map(|(key, _)| key.clone())
                .collect(),
        )
    }
}

/// Parse an attributes TSV (plain or gzipped).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the content is invalid.
pub fn parse_attrs_file(path: &Path) -> Result<AttributesTable, ParseError> {
    let content = crate::parsing::read_file(path)?;
    parse_attrs_text(&content)
}

/// Parse attributes TSV text. The first non-blank line is the header; every
/// row must match its width. Duplicate keys keep the first row and log a
/// warning.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header is missing or a row has
/// the wrong number of fields.
pub fn parse_attrs_text(text: &str) -> Result<AttributesTable, ParseError> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(ParseError::InvalidFormat(
            "Attributes table has no header line".to_string(),
        ));
    };
    let header_fields: Vec<&str> = header.split('\t').collect();
    if header_fields.len() < 2 {
        return Err(ParseError::InvalidFormat(
            "Attributes header needs a key column and at least one value column".to_string(),
        ));
    }
    let columns: Vec<String> = header_fields[1..]
        .iter()
        .map(|c| c.trim().to_string())
        .collect();

    let mut rows: HashMap<String, Vec<String>> = HashMap::new();
    for (i, line) in lines {
        let line_num = i + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != header_fields.len() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {} has {} fields, expected {}",
                line_num,
                fields.len(),
                header_fields.len()
            )));
        }
        let key = fields[0].trim().to_string();
        let values: Vec<String> = fields[1..].iter().map(|v| v.trim().to_string()).collect();
        if rows.contains_key(&key) {
            warn!("duplicate attributes entry for {key}, keeping the first");
            continue;
        }
        rows.insert(key, values);
    }

    Ok(AttributesTable { columns, rows })
}
