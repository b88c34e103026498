//! Fuzzy matching of projected introns against reference exon boundaries.
//!
//! A transMap intron is "supported" when, after projecting its flanks back
//! into transcript coordinates, some reference exon boundary lands within a
//! tolerance window around the projected gap. Support survives small indel
//! wobble near the splice site without requiring base-exact agreement.

use crate::core::psl::{ProjectionError, PslRow};
use crate::core::transcript::IntronInterval;

/// Default tolerance (bases) on each side of the projected gap.
pub const DEFAULT_FUZZ_DISTANCE: u64 = 12;

/// Decide whether a projected intron is supported by a reference exon
/// boundary.
///
/// The last base of the upstream exon (`intron.start - 1`) and the first
/// base of the downstream exon (`intron.stop`) are projected through
/// `tm_psl` into transcript coordinates, widened by `fuzz_distance` on each
/// side, and the window is tested against every entry of `ref_junctions`
/// (see [`reference_junctions`]). Both window edges are inclusive.
///
/// The window keeps the projected orientation: when a reverse-strand
/// alignment projects the gap "backwards" and the tolerance doesn't bridge
/// the inversion, the window is empty and the intron is unsupported.
///
/// # Errors
///
/// Returns [`ProjectionError::Unaligned`] when either flank falls in an
/// unaligned gap of `tm_psl`.
///
/// [`reference_junctions`]: crate::matching::boundaries::reference_junctions
pub fn is_fuzzy_intron(
    intron: IntronInterval,
    tm_psl: &PslRow,
    ref_junctions: &[u64],
    fuzz_distance: u64,
) -> Result<bool, ProjectionError> {
    let q_gap_start = tm_psl.target_to_query(intron.start.saturating_sub(1))? as i64;
    let q_gap_stop = tm_psl.target_to_query(intron.stop)? as i64;
    let window = (q_gap_start - fuzz_distance as i64)..=(q_gap_stop + fuzz_distance as i64);
    Ok(ref_junctions.iter().any(|&j| window.contains(&(j as i64))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strand::Strand;

    fn tm_row(
        strand: Strand,
        q_size: u64,
        t_span: (u64, u64),
        block_sizes: &[u64],
        q_starts: &[u64],
        t_starts: &[u64],
    ) -> PslRow {
        PslRow {
            matches: 0,
            mismatches: 0,
            rep_matches: 0,
            n_count: 0,
            q_num_insert: 0,
            q_base_insert: 0,
            t_num_insert: 0,
            t_base_insert: 0,
            strand,
            q_name: "txA-1".to_string(),
            q_size,
            q_start: 0,
            q_end: q_size,
            t_name: "chr1".to_string(),
            t_size: 100_000,
            t_start: t_span.0,
            t_end: t_span.1,
            block_sizes: block_sizes.to_vec(),
            q_starts: q_starts.to_vec(),
            t_starts: t_starts.to_vec(),
        }
    }

    /// Two exon blocks abutting in query space: the intron [100, 110)
    /// projects to the gap between query 39 and 50.
    fn clean_projection() -> PslRow {
        tm_row(Strand::Forward, 110, (60, 170), &[40, 60], &[0, 50], &[60, 110])
    }

    const INTRON: IntronInterval = IntronInterval { start: 100, stop: 110 };

    #[test]
    fn test_exact_junction_matches_at_zero_tolerance() {
        let tm = clean_projection();
        // Boundary exactly at the projected downstream flank.
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[50], 0), Ok(true));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[39], 0), Ok(true));
    }

    #[test]
    fn test_support_is_monotone_in_tolerance() {
        let tm = clean_projection();
        // Boundary 5 bases outside the bare window [39, 50].
        let junctions = [55];
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &junctions, 0), Ok(false));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &junctions, 4), Ok(false));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &junctions, 5), Ok(true));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &junctions, 12), Ok(true));
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let tm = clean_projection();
        // With tolerance 12 the window is [27, 62].
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[27], 12), Ok(true));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[62], 12), Ok(true));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[26], 12), Ok(false));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[63], 12), Ok(false));
    }

    #[test]
    fn test_one_boundary_inside_is_enough() {
        let tm = clean_projection();
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[0, 50, 120], 12), Ok(true));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[0, 200], 12), Ok(false));
        assert_eq!(is_fuzzy_intron(INTRON, &tm, &[], 12), Ok(false));
    }

    #[test]
    fn test_window_below_zero_still_matches() {
        let tm = clean_projection();
        // Intron right at the alignment start projects near query 0; the
        // window extends below zero without wrapping.
        let early = IntronInterval { start: 61, stop: 110 };
        assert_eq!(is_fuzzy_intron(early, &tm, &[0], 12), Ok(true));
    }

    #[test]
    fn test_reverse_strand_inverted_window_is_empty() {
        // One reverse block over t [100, 200): projection decreases as the
        // target position grows, so the gap projects backwards.
        let tm = tm_row(Strand::Reverse, 100, (100, 200), &[100], &[0], &[100]);
        let intron = IntronInterval { start: 150, stop: 160 };
        // q_gap_start = 50, q_gap_stop = 39; tolerance 3 leaves [47, 42].
        assert_eq!(is_fuzzy_intron(intron, &tm, &[45], 3), Ok(false));
        // A tolerance wide enough to bridge the inversion matches again.
        assert_eq!(is_fuzzy_intron(intron, &tm, &[45], 12), Ok(true));
    }

    #[test]
    fn test_unaligned_flank_is_an_error() {
        // Target gap between blocks at [140, 150).
        let tm = tm_row(Strand::Forward, 80, (100, 190), &[40, 40], &[0, 40], &[100, 150]);
        let intron = IntronInterval { start: 120, stop: 145 };
        let err = is_fuzzy_intron(intron, &tm, &[0], 12).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::Unaligned { query: "txA-1".to_string(), position: 145 }
        );
    }
}
