//! Parser for BLAT PSL alignment files.
//!
//! PSL is tab-separated with 21 columns and an optional `psLayout` header
//! block. Data rows always begin with the numeric match count, which is how
//! header lines are told apart from data.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::core::psl::PslRow;
use crate::core::strand::Strand;

/// Number of leading lines that may belong to a `psLayout` header block.
const HEADER_PROBE_LINES: usize = 5;

/// Errors shared by the PSL, genePred, and attributes parsers.
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content doesn't match the expected format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Parse a PSL file (plain or gzipped), returning rows in file order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the content is invalid.
pub fn parse_psl_file(path: &Path) -> Result<Vec<PslRow>, ParseError> {
    let content = crate::parsing::read_file(path)?;
    parse_psl_text(&content)
}

/// Parse PSL text, returning rows in file order.
///
/// Blank lines and `#` comments are skipped anywhere. When the file opens
/// with the `psLayout` block BLAT writes (version line, column names,
/// dashes), those header lines are skipped up to the first data row; in any
/// other file every line must be a data row.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a data row doesn't have exactly
/// 21 tab-separated columns or its fields don't parse.
pub fn parse_psl_text(text: &str) -> Result<Vec<PslRow>, ParseError> {
    let mut rows = Vec::new();
    // Set when line 1 announces a psLayout block; only then are non-data
    // lines tolerated while probing for the first row.
    let mut in_header = false;

    for (i, line) in text.lines().enumerate() {
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if line_num == 1 && line.starts_with("psLayout") {
            in_header = true;
            continue;
        }
        if in_header {
            if line_num <= HEADER_PROBE_LINES && !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            in_header = false;
        }
        rows.push(parse_psl_line(line, line_num)?);
    }

    Ok(rows)
}

/// Parse one 21-column PSL data row.
fn parse_psl_line(line: &str, line_num: usize) -> Result<PslRow, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 21 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {} has {} fields, expected 21",
            line_num,
            fields.len()
        )));
    }

    let num = |idx: usize, what: &str| -> Result<u64, ParseError> {
        fields[idx].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {what} on line {line_num}: '{}'",
                fields[idx]
            ))
        })
    };
    let list = |idx: usize, what: &str| -> Result<Vec<u64>, ParseError> {
        fields[idx]
            .split_terminator(',')
            .map(|v| {
                v.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "Invalid {what} on line {line_num}: '{}'",
                        fields[idx]
                    ))
                })
            })
            .collect()
    };

    let strand = Strand::parse(fields[8].trim()).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Invalid strand on line {line_num}: '{}'",
            fields[8]
        ))
    })?;

    let block_count = num(17, "block count")? as usize;
    let block_sizes = list(18, "block sizes")?;
    let q_starts = list(19, "query starts")?;
    let t_starts = list(20, "target starts")?;

    if block_count == 0 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has no alignment blocks"
        )));
    }
    if block_sizes.len() != block_count
        || q_starts.len() != block_count
        || t_starts.len() != block_count
    {
        return Err(ParseError::InvalidFormat(format!(
            "Line {} block lists have {}/{}/{} entries, expected {}",
            line_num,
            block_sizes.len(),
            q_starts.len(),
            t_starts.len(),
            block_count
        )));
    }

    Ok(PslRow {
        matches: num(0, "match count")?,
        mismatches: num(1, "mismatch count")?,
        rep_matches: num(2, "repeat match count")?,
        n_count: num(3, "N count")?,
        q_num_insert: num(4, "query insert count")?,
        q_base_insert: num(5, "query insert bases")?,
        t_num_insert: num(6, "target insert count")?,
        t_base_insert: num(7, "target insert bases")?,
        strand,
        q_name: fields[9].trim().to_string(),
        q_size: num(10, "query size")?,
        q_start: num(11, "query start")?,
        q_end: num(12, "query end")?,
        t_name: fields[13].trim().to_string(),
        t_size: num(14, "target size")?,
        t_start: num(15, "target start")?,
        t_end: num(16, "target end")?,
        block_sizes,
        q_starts,
        t_starts,
    })
}

/// Index rows by query name. On duplicate names the first row wins and a
/// warning is logged; transMap alignment ids are unique, so duplicates mean
/// a concatenated or repeated input.
#[must_use]
pub fn psl_dict(rows: Vec<PslRow>) -> HashMap<String, PslRow> {
    let mut dict = HashMap::with_capacity(rows.len());
    for row in rows {
        match dict.entry(row.q_name.clone()) {
            Entry::Occupied(_) => {
                warn!("duplicate PSL entry for {}, keeping the first", row.q_name);
            }
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
        }
    }
    dict
}
