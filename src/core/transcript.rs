//! genePred transcript records and intron arithmetic.
//!
//! transMap emits its projected transcripts in UCSC genePred format. The
//! hint pipeline needs two things from a transcript: its intron intervals in
//! target-genome coordinates, and the original tab-separated row so the
//! record can be handed to the hint tool with extra columns appended.

use serde::Serialize;

use crate::core::strand::Strand;

/// A gap between two consecutive exons, 0-based half-open in target
/// (genome) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntronInterval {
    /// First base of the intron (= end of the upstream exon).
    pub start: u64,
    /// One past the last base of the intron (= start of the downstream exon).
    pub stop: u64,
}

/// Optional columns 11-15 of an extended genePred (`genePredExt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenePredExt {
    /// Score column, usually 0.
    pub score: i64,
    /// Alternate name (commonly the gene id).
    pub name2: String,
    /// CDS start completeness (`none`, `unk`, `incmpl`, `cmpl`).
    pub cds_start_stat: String,
    /// CDS end completeness.
    pub cds_end_stat: String,
    /// Reading frame per exon, `-1` for non-coding exons.
    pub exon_frames: Vec<i64>,
}

/// One transcript in UCSC genePred format.
///
/// Exon coordinates are 0-based half-open on the target genome, with
/// `exon_starts`/`exon_ends` ascending regardless of strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenePred {
    /// Transcript name; for transMap output this is an alignment id
    /// (`<transcript>-<N>`).
    pub name: String,
    /// Target chromosome.
    pub chrom: String,
    /// Transcription direction on the target.
    pub strand: Strand,
    /// Transcription start.
    pub tx_start: u64,
    /// Transcription end.
    pub tx_end: u64,
    /// Coding region start.
    pub cds_start: u64,
    /// Coding region end.
    pub cds_end: u64,
    /// Exon start positions, ascending.
    pub exon_starts: Vec<u64>,
    /// Exon end positions, ascending.
    pub exon_ends: Vec<u64>,
    /// Extended columns, when the source file had 15 fields.
    pub extended: Option<GenePredExt>,
}

impl GenePred {
    /// Number of exons.
    #[must_use]
    pub fn exon_count(&self) -> usize {
        self.exon_starts.len()
    }

    /// Intron intervals in transcription order along the genome: the gap
    /// between each pair of consecutive exons. A single-exon transcript has
    /// none.
    #[must_use]
    pub fn intron_intervals(&self) -> Vec<IntronInterval> {
        self.exon_ends
            .iter()
            .zip(self.exon_starts.iter().skip(1))
            .map(|(&end, &next_start)| IntronInterval { start: end, stop: next_start })
            .collect()
    }

    /// Reconstruct the tab-separated genePred row, including the trailing
    /// comma UCSC tools put after coordinate lists. Extended columns are
    /// emitted only when present in the source.
    #[must_use]
    pub fn to_row(&self) -> String {
        let mut fields = vec![
            self.name.clone(),
            self.chrom.clone(),
            self.strand.to_string(),
            self.tx_start.to_string(),
            self.tx_end.to_string(),
            self.cds_start.to_string(),
            self.cds_end.to_string(),
            self.exon_count().to_string(),
            comma_list(&self.exon_starts),
            comma_list(&self.exon_ends),
        ];
        if let Some(ext) = &self.extended {
            fields.push(ext.score.to_string());
            fields.push(ext.name2.clone());
            fields.push(ext.cds_start_stat.clone());
            fields.push(ext.cds_end_stat.clone());
            fields.push(comma_list(&ext.exon_frames));
        }
        fields.join("\t")
    }
}

fn comma_list<T: ToString>(values: &[T]) -> String {
    let mut out = String::new();
    for v in values {
        out.push_str(&v.to_string());
        out.push(',');
    }
    out
}
