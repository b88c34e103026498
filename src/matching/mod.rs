//! Fuzzy splice-junction matching between transMap and reference alignments.
//!
//! This module provides the core matching functionality:
//!
//! - [`reference_junctions`]: Normalize reference exon boundaries into the
//!   forward query frame
//! - [`is_fuzzy_intron`]: Test one projected intron against those boundaries
//! - [`DEFAULT_FUZZ_DISTANCE`]: The standard 12-base tolerance
//!
//! ## Matching Algorithm
//!
//! For each intron of a projected transcript:
//!
//! 1. **Project the flanks**: Map the last base of the upstream exon and the
//!    first base of the downstream exon through the transMap PSL back into
//!    transcript coordinates
//! 2. **Widen**: Extend the projected gap by the tolerance on both sides,
//!    keeping the edges inclusive
//! 3. **Scan**: The intron is supported if any reference exon boundary falls
//!    inside the window
//!
//! ## Example
//!
//! ```rust
//! use transmap_hints::core::transcript::IntronInterval;
//! use transmap_hints::matching::{is_fuzzy_intron, reference_junctions, DEFAULT_FUZZ_DISTANCE};
//! use transmap_hints::parsing::psl::parse_psl_text;
//!
//! let tm = &parse_psl_text(
//!     "100\t0\t0\t0\t1\t10\t1\t10\t+\ttxA-1\t110\t0\t110\tchr1\t1000\t60\t170\t2\t40,60,\t0,50,\t60,110,",
//! ).unwrap()[0];
//! let reference = &parse_psl_text(
//!     "130\t0\t0\t0\t2\t20\t2\t200\t+\ttxA\t150\t0\t150\tchrR\t5000\t100\t430\t3\t40,60,30,\t0,50,120,\t100,200,400,",
//! ).unwrap()[0];
//!
//! let junctions = reference_junctions(reference);
//! let intron = IntronInterval { start: 100, stop: 110 };
//! let supported = is_fuzzy_intron(intron, tm, &junctions, DEFAULT_FUZZ_DISTANCE).unwrap();
//! assert!(supported);
//! ```

pub mod boundaries;
pub mod fuzzy;

pub use boundaries::reference_junctions;
pub use fuzzy::{is_fuzzy_intron, DEFAULT_FUZZ_DISTANCE};
