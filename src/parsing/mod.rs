//! Parsers for the text formats the hint pipeline consumes.
//!
//! This module provides parsers for:
//!
//! - **PSL files**: transMap and reference transcript alignments
//! - **genePred files**: transMap projected transcripts (10 or 15 columns)
//! - **Attributes TSV**: per-transcript metadata keyed by transcript id
//!
//! All parsers accept plain or gzip-compressed input (by `.gz` extension)
//! and report 1-based line numbers in errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use transmap_hints::parsing::psl::{parse_psl_file, psl_dict};
//! use std::path::Path;
//!
//! let rows = parse_psl_file(Path::new("ref.psl")).unwrap();
//! let by_name = psl_dict(rows);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

pub mod attrs;
pub mod genepred;
pub mod psl;

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Read a whole text file, transparently decompressing `.gz` input.
pub(crate) fn read_file(path: &Path) -> Result<String, std::io::Error> {
    if is_gzipped(path) {
        let file = File::open(path)?;
        let mut text = String::new();
        GzDecoder::new(file).read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}
