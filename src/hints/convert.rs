//! Per-transcript conversion: intron flags, record assembly, hint output.
//!
//! The hint tool takes a genePred row with one extra tab-separated column: a
//! comma-joined `1`/`0` flag per intron saying whether that intron is
//! supported by the reference alignment. This module computes the flags and
//! assembles the record; the actual hint generation is delegated to a
//! [`HintGenerator`].

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::psl::{strip_alignment_number, ProjectionError, PslRow};
use crate::core::strand::Strand;
use crate::core::transcript::GenePred;
use crate::hints::generator::{HintError, HintGenerator};
use crate::matching::{is_fuzzy_intron, reference_junctions};

/// Errors from converting one transcript.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An intron flank failed to project into transcript coordinates.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The hint tool failed.
    #[error(transparent)]
    Hints(#[from] HintError),
}

/// Junction support for one transcript, independent of the hint tool.
#[derive(Debug, Clone, Serialize)]
pub struct JunctionSupport {
    /// Alignment id of the projected transcript.
    pub name: String,
    /// Transcription direction on the target genome.
    pub strand: Strand,
    /// Number of introns (0 for single-exon transcripts).
    pub intron_count: usize,
    /// How many of them are supported.
    pub supported: usize,
    /// Per-intron support, in genome order.
    pub flags: Vec<bool>,
}

impl JunctionSupport {
    /// The flag column handed to the hint tool: `1`/`0` per intron, comma
    /// joined. Empty for single-exon transcripts.
    #[must_use]
    pub fn token(&self) -> String {
        flag_token(&self.flags)
    }
}

/// Per-intron support flags for a projected transcript.
///
/// # Errors
///
/// Returns [`ProjectionError`] unmodified when an intron flank cannot be
/// projected through `tm_psl`.
pub fn intron_flags(
    tx: &GenePred,
    tm_psl: &PslRow,
    ref_junctions: &[u64],
    fuzz_distance: u64,
) -> Result<Vec<bool>, ProjectionError> {
    tx.intron_intervals()
        .into_iter()
        .map(|intron| is_fuzzy_intron(intron, tm_psl, ref_junctions, fuzz_distance))
        .collect()
}

/// Render flags as the comma-joined `1`/`0` column.
#[must_use]
pub fn flag_token(flags: &[bool]) -> String {
    let rendered: Vec<&str> = flags.iter().map(|&f| if f { "1" } else { "0" }).collect();
    rendered.join(",")
}

/// The record handed to the hint tool: the genePred row, a tab, the flag
/// column, and a newline.
#[must_use]
pub fn hint_record(tx: &GenePred, flags: &[bool]) -> String {
    format!("{}\t{}\n", tx.to_row(), flag_token(flags))
}

/// Compute junction support for one transcript.
///
/// # Errors
///
/// Returns [`ProjectionError`] when an intron flank cannot be projected.
pub fn junction_support(
    tx: &GenePred,
    tm_psl: &PslRow,
    ref_psl: &PslRow,
    fuzz_distance: u64,
) -> Result<JunctionSupport, ProjectionError> {
    let junctions = reference_junctions(ref_psl);
    let flags = intron_flags(tx, tm_psl, &junctions, fuzz_distance)?;
    let supported = flags.iter().filter(|&&f| f).count();
    debug!(
        "{}: {supported}/{} introns supported",
        tx.name,
        flags.len()
    );
    Ok(JunctionSupport {
        name: tx.name.clone(),
        strand: tx.strand,
        intron_count: flags.len(),
        supported,
        flags,
    })
}

/// Convert one transcript to Augustus hint text.
///
/// Single-exon transcripts are still converted; their flag column is empty
/// and the tool derives what it can from the exon structure alone.
///
/// # Errors
///
/// Returns [`ConvertError`] when projection fails or the hint tool reports
/// an error.
pub fn transcript_to_hints<G: HintGenerator>(
    tx: &GenePred,
    tm_psl: &PslRow,
    ref_psl: &PslRow,
    fuzz_distance: u64,
    generator: &G,
) -> Result<String, ConvertError> {
    let junctions = reference_junctions(ref_psl);
    let flags = intron_flags(tx, tm_psl, &junctions, fuzz_distance)?;
    Ok(generator.generate(&hint_record(tx, &flags))?)
}

/// Look up the reference alignment for a transMap alignment id: first by the
/// id itself, then with the `-N` suffix stripped, since reference PSLs are
/// keyed by the source transcript id.
#[must_use]
pub fn reference_alignment<'a>(
    ref_psls: &'a HashMap<String, PslRow>,
    alignment_id: &str,
) -> Option<&'a PslRow> {
    ref_psls
        .get(alignment_id)
        .or_else(|| ref_psls.get(strip_alignment_number(alignment_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::IntronInterval;
    use crate::matching::DEFAULT_FUZZ_DISTANCE;
    use crate::parsing::genepred::parse_genepred_text;
    use crate::parsing::psl::parse_psl_text;

    const TM_PSL: &str =
        "100\t0\t0\t0\t1\t10\t1\t10\t+\ttxA-1\t110\t0\t110\tchr1\t1000\t60\t170\t2\t40,60,\t0,50,\t60,110,";
    const REF_PSL: &str =
        "130\t0\t0\t0\t2\t20\t2\t200\t+\ttxA\t150\t0\t150\tchrR\t5000\t100\t430\t3\t40,60,30,\t0,50,120,\t100,200,400,";
    // Same query but no boundary anywhere near the projected gap [39, 50].
    const FAR_REF_PSL: &str =
        "150\t0\t0\t0\t1\t100\t1\t200\t+\ttxA\t300\t0\t250\tchrR\t5000\t100\t450\t2\t100,50,\t0,200,\t100,400,";
    const GP: &str = "txA-1\tchr1\t+\t60\t170\t60\t170\t2\t60,110,\t100,170,";

    struct Recorder;

    impl HintGenerator for Recorder {
        fn generate(&self, record: &str) -> Result<String, HintError> {
            Ok(format!("seen:{record}"))
        }
    }

    fn fixtures() -> (GenePred, PslRow, PslRow) {
        let tx = parse_genepred_text(GP).unwrap().remove(0);
        let tm = parse_psl_text(TM_PSL).unwrap().remove(0);
        let reference = parse_psl_text(REF_PSL).unwrap().remove(0);
        (tx, tm, reference)
    }

    #[test]
    fn test_supported_intron_end_to_end() {
        let (tx, tm, reference) = fixtures();
        let support = junction_support(&tx, &tm, &reference, DEFAULT_FUZZ_DISTANCE).unwrap();
        assert_eq!(support.flags, vec![true]);
        assert_eq!(support.supported, 1);
        assert_eq!(support.token(), "1");
    }

    #[test]
    fn test_unsupported_intron_end_to_end() {
        let (tx, tm, _) = fixtures();
        let reference = parse_psl_text(FAR_REF_PSL).unwrap().remove(0);
        let support = junction_support(&tx, &tm, &reference, DEFAULT_FUZZ_DISTANCE).unwrap();
        assert_eq!(support.flags, vec![false]);
        assert_eq!(support.token(), "0");
    }

    #[test]
    fn test_flag_token_rendering() {
        assert_eq!(flag_token(&[]), "");
        assert_eq!(flag_token(&[true]), "1");
        assert_eq!(flag_token(&[true, false, true]), "1,0,1");
    }

    #[test]
    fn test_hint_record_layout() {
        let (tx, _, _) = fixtures();
        let record = hint_record(&tx, &[true]);
        assert_eq!(record, format!("{GP}\t1\n"));
        assert!(record.ends_with('\n'));
    }

    #[test]
    fn test_single_exon_record_has_empty_flags() {
        let gp = "txS-1\tchr1\t+\t60\t170\t60\t170\t1\t60,\t170,";
        let tx = parse_genepred_text(gp).unwrap().remove(0);
        let record = hint_record(&tx, &[]);
        assert_eq!(record, format!("{gp}\t\n"));
    }

    #[test]
    fn test_transcript_to_hints_feeds_generator() {
        let (tx, tm, reference) = fixtures();
        let out =
            transcript_to_hints(&tx, &tm, &reference, DEFAULT_FUZZ_DISTANCE, &Recorder).unwrap();
        assert_eq!(out, format!("seen:{GP}\t1\n"));
    }

    #[test]
    fn test_projection_error_propagates() {
        let (mut tx, tm, reference) = fixtures();
        // An intron whose downstream flank lands in the target gap of the
        // transMap alignment.
        tx.exon_starts = vec![60, 105];
        tx.exon_ends = vec![90, 170];
        let err = junction_support(&tx, &tm, &reference, DEFAULT_FUZZ_DISTANCE).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::Unaligned { query: "txA-1".to_string(), position: 105 }
        );
    }

    #[test]
    fn test_reference_lookup_strips_suffix() {
        let reference = parse_psl_text(REF_PSL).unwrap();
        let dict = crate::parsing::psl::psl_dict(reference);
        assert!(reference_alignment(&dict, "txA-1").is_some());
        assert!(reference_alignment(&dict, "txA").is_some());
        assert!(reference_alignment(&dict, "txB-1").is_none());
    }

    #[test]
    fn test_intron_flags_order_matches_introns() {
        let (tx, tm, reference) = fixtures();
        let junctions = reference_junctions(&reference);
        let flags = intron_flags(&tx, &tm, &junctions, DEFAULT_FUZZ_DISTANCE).unwrap();
        assert_eq!(flags.len(), tx.intron_intervals().len());
        assert_eq!(
            tx.intron_intervals(),
            vec![IntronInterval { start: 100, stop: 110 }]
        );
        assert_eq!(flags, vec![true]);
    }
}
