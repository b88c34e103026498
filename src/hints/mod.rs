//! Augustus hint generation from annotated transMap transcripts.
//!
//! This module turns junction-flagged transcripts into extrinsic hints:
//!
//! - [`convert`]: Flag computation and record assembly per transcript
//! - [`generator`]: The `transMap2hints.pl` subprocess behind the
//!   [`HintGenerator`] trait
//!
//! ## Record Format
//!
//! Each record handed to the tool is one genePred row with one extra
//! column:
//!
//! ```text
//! txA-1  chr1  +  60  170  60  170  2  60,110,  100,170,   1
//! ```
//!
//! The final column holds one `1`/`0` flag per intron (comma joined, empty
//! for single-exon transcripts). The tool's GFF output is passed through
//! verbatim.
//!
//! [`HintGenerator`]: generator::HintGenerator

pub mod convert;
pub mod generator;

pub use convert::{junction_support, transcript_to_hints, JunctionSupport};
pub use generator::{HintGenerator, TransMapHintsCommand, HINT_TOOL};
