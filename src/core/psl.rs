//! PSL alignment records and coordinate projection.
//!
//! A PSL row describes a gapped pairwise alignment as parallel block arrays
//! (sizes, query starts, target starts). For transMap data the query is a
//! transcript and the target is a genome, so projecting target positions back
//! into transcript coordinates is the primitive everything else builds on.

use serde::Serialize;
use thiserror::Error;

use crate::core::strand::Strand;

/// Error raised when a target position cannot be mapped into query space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The position lies between aligned blocks (inside a target insertion),
    /// so no query base corresponds to it.
    #[error("target position {position} of {query} falls in an unaligned gap")]
    Unaligned {
        /// Query (transcript) name of the alignment.
        query: String,
        /// Target position that failed to project.
        position: u64,
    },
}

/// One alignment in BLAT PSL format (21 columns).
///
/// All coordinates are 0-based half-open, following the format. On the
/// reverse strand, `q_starts` entries are expressed in the *reversed* query
/// frame while `q_start`/`q_end` stay in the forward frame; helpers on this
/// type take care of the flip so callers work in forward coordinates only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PslRow {
    /// Number of matching bases.
    pub matches: u64,
    /// Number of mismatching bases.
    pub mismatches: u64,
    /// Number of matches in repeat-masked sequence.
    pub rep_matches: u64,
    /// Number of `N` bases.
    pub n_count: u64,
    /// Number of query gap openings.
    pub q_num_insert: u64,
    /// Total bases in query gaps.
    pub q_base_insert: u64,
    /// Number of target gap openings.
    pub t_num_insert: u64,
    /// Total bases in target gaps.
    pub t_base_insert: u64,
    /// Query orientation relative to the target.
    pub strand: Strand,
    /// Query sequence name.
    pub q_name: String,
    /// Query sequence length.
    pub q_size: u64,
    /// Alignment start in the query (forward frame).
    pub q_start: u64,
    /// Alignment end in the query (forward frame).
    pub q_end: u64,
    /// Target sequence name.
    pub t_name: String,
    /// Target sequence length.
    pub t_size: u64,
    /// Alignment start in the target.
    pub t_start: u64,
    /// Alignment end in the target.
    pub t_end: u64,
    /// Per-block lengths.
    pub block_sizes: Vec<u64>,
    /// Per-block query starts (reversed frame on the reverse strand).
    pub q_starts: Vec<u64>,
    /// Per-block target starts, ascending.
    pub t_starts: Vec<u64>,
}

impl PslRow {
    /// Project a target position into query (transcript) coordinates.
    ///
    /// Positions before the aligned span clamp to `q_start`; positions at or
    /// past its end clamp to `q_end`. Inside the span, the covering block is
    /// located by binary search over `t_starts` and the offset is carried
    /// into query space; on the reverse strand the in-block result is flipped
    /// to the forward frame (`q_size - q - 1`).
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Unaligned`] when the position falls between
    /// blocks, where no query base exists.
    pub fn target_to_query(&self, position: u64) -> Result<u64, ProjectionError> {
        if position < self.t_start {
            return Ok(self.q_start);
        }
        if position >= self.t_end {
            return Ok(self.q_end);
        }
        // Rightmost block starting at or before the position.
        let idx = self.t_starts.partition_point(|&t| t <= position);
        if idx > 0 {
            let i = idx - 1;
            let offset = position - self.t_starts[i];
            if offset < self.block_sizes[i] {
                let q = self.q_starts[i] + offset;
                return Ok(match self.strand {
                    Strand::Forward => q,
                    Strand::Reverse => self.q_size - q - 1,
                });
            }
        }
        Err(ProjectionError::Unaligned {
            query: self.q_name.clone(),
            position,
        })
    }
}

/// Strip a transMap alignment suffix (`-1`, `-2`, ...) from an alignment id.
///
/// transMap names each projected alignment by appending `-N` to the source
/// transcript id, so `ENSMUST00000023572-2` maps back to
/// `ENSMUST00000023572`. Names without an all-digit suffix after the last
/// `-` are returned unchanged.
#[must_use]
pub fn strip_alignment_number(name: &str) -> &str {
    match name.rsplit_once('-') {
        Some((base, suffix))
            if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}
