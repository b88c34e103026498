//! # transmap-hints
//!
//! A library for turning transMap projected transcripts into Augustus
//! extrinsic hints.
//!
//! transMap projects an annotated transcriptome from a reference genome onto
//! a target genome through whole-genome alignments. The projection shifts
//! every coordinate into the target frame, so before the result can drive
//! gene prediction one question must be answered per intron: does this
//! splice junction still correspond to an exon boundary of the original
//! transcript?
//!
//! `transmap-hints` answers it by projecting each intron's flanks back into
//! transcript coordinates through the transMap PSL and scanning the
//! reference alignment's exon boundaries within a small tolerance window.
//! The per-intron verdicts are appended to the transcript record and handed
//! to the Augustus `transMap2hints.pl` script, whose GFF output is passed
//! through verbatim.
//!
//! ## Features
//!
//! - **Coordinate projection**: Target-to-query mapping through gapped PSL
//!   alignments, strand-aware, with clamping outside the aligned span
//! - **Fuzzy junction matching**: Tolerance-windowed boundary comparison
//!   that survives small indel wobble near splice sites
//! - **Biotype filtering**: Restrict conversion via an attributes table
//! - **Swappable hint tool**: The subprocess sits behind a trait, so
//!   pipelines and tests can substitute their own generator
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use transmap_hints::hints::{transcript_to_hints, TransMapHintsCommand};
//! use transmap_hints::matching::DEFAULT_FUZZ_DISTANCE;
//! use transmap_hints::parsing::genepred::parse_genepred_file;
//! use transmap_hints::parsing::psl::{parse_psl_file, psl_dict};
//!
//! let transcripts = parse_genepred_file(Path::new("tm.gp")).unwrap();
//! let tm_psls = psl_dict(parse_psl_file(Path::new("tm.psl")).unwrap());
//! let ref_psls = psl_dict(parse_psl_file(Path::new("ref.psl")).unwrap());
//!
//! let generator = TransMapHintsCommand::new();
//! for tx in &transcripts {
//!     let tm = &tm_psls[&tx.name];
//!     let reference = &ref_psls["txA"];
//!     let gff = transcript_to_hints(tx, tm, reference, DEFAULT_FUZZ_DISTANCE, &generator).unwrap();
//!     print!("{gff}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: PSL rows, genePred transcripts, and coordinate projection
//! - [`matching`]: Fuzzy splice-junction matching
//! - [`hints`]: Record assembly and the external hint tool
//! - [`parsing`]: Parsers for PSL, genePred, and attributes files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod hints;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::psl::{ProjectionError, PslRow};
pub use crate::core::strand::Strand;
pub use crate::core::transcript::{GenePred, IntronInterval};
pub use crate::hints::convert::{junction_support, transcript_to_hints, JunctionSupport};
pub use crate::hints::generator::{HintGenerator, TransMapHintsCommand};
pub use crate::matching::{is_fuzzy_intron, reference_junctions, DEFAULT_FUZZ_DISTANCE};
