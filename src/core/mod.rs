//! Core data types for transMap hint generation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`PslRow`]: A gapped pairwise alignment in BLAT PSL format
//! - [`GenePred`]: A transcript in UCSC genePred format
//! - [`IntronInterval`]: A gap between consecutive exons, in genome coordinates
//! - [`Strand`]: Query orientation shared by both formats
//!
//! ## Coordinate Frames
//!
//! Everything is 0-based half-open, but three distinct frames are in play:
//!
//! | Frame | Used by |
//! |-------|---------|
//! | Target genome | genePred exons, PSL `t_start`/`t_starts` |
//! | Query (transcript), forward | PSL `q_start`/`q_end`, projection results |
//! | Query, reversed | PSL `q_starts` on the reverse strand |
//!
//! [`PslRow::target_to_query`] and the matching layer normalize the reversed
//! frame away, so downstream code only ever sees forward query coordinates.
//!
//! [`PslRow`]: psl::PslRow
//! [`PslRow::target_to_query`]: psl::PslRow::target_to_query
//! [`GenePred`]: transcript::GenePred
//! [`IntronInterval`]: transcript::IntronInterval
//! [`Strand`]: strand::Strand

pub mod psl;
pub mod strand;
pub mod transcript;
