//! Reference exon boundaries in forward query coordinates.

use crate::core::psl::PslRow;

/// Exon block starts of a reference alignment, normalized to the forward
/// query frame.
///
/// On the forward strand these are the `q_starts` as stored. On the reverse
/// strand each stored start is in the reversed frame, so the *end* of the
/// block is flipped instead: `q_size - (q_start + block_size)` is where the
/// block begins once read forward. The first entry is the transcript start
/// rather than a splice site, which is harmless for windowed matching.
#[must_use]
pub fn reference_junctions(ref_psl: &PslRow) -> Vec<u64> {
    if ref_psl.strand.is_reverse() {
        ref_psl
            .q_starts
            .iter()
            .zip(ref_psl.block_sizes.iter())
            .map(|(&q, &size)| ref_psl.q_size - (q + size))
            .collect()
    } else {
        ref_psl.q_starts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strand::Strand;

    fn ref_row(strand: Strand, q_size: u64, block_sizes: &[u64], q_starts: &[u64]) -> PslRow {
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
            q_name: "txA".to_string(),
            q_size,
            q_start: 0,
            q_end: q_size,
            t_name: "chrR".to_string(),
            t_size: 10_000,
            t_start: 100,
            t_end: 500,
            block_sizes: block_sizes.to_vec(),
            q_starts: q_starts.to_vec(),
            t_starts: q_starts.iter().map(|q| q + 100).collect(),
        }
    }

    #[test]
    fn test_forward_passes_through() {
        let r = ref_row(Strand::Forward, 150, &[40, 60, 30], &[0, 50, 120]);
        assert_eq!(reference_junctions(&r), vec![0, 50, 120]);
    }

    #[test]
    fn test_reverse_flips_block_ends() {
        let r = ref_row(Strand::Reverse, 150, &[40, 60, 30], &[0, 50, 120]);
        assert_eq!(reference_junctions(&r), vec![110, 40, 0]);

        // q_size - (q_start + block_size), elementwise.
        let r = ref_row(Strand::Reverse, 500, &[10, 25], &[100, 300]);
        assert_eq!(reference_junctions(&r), vec![390, 175]);
    }

    #[test]
    fn test_single_block() {
        let r = ref_row(Strand::Forward, 100, &[100], &[0]);
        assert_eq!(reference_junctions(&r), vec![0]);
        let r = ref_row(Strand::Reverse, 100, &[100], &[0]);
        assert_eq!(reference_junctions(&r), vec![0]);
    }
}
