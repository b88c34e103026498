//! Parser for UCSC genePred transcript files.
//!
//! Accepts the 10-column core format and the 15-column extended format
//! (`genePredExt`); transMap emits the latter. Coordinate list columns carry
//! the usual UCSC trailing comma.

use std::path::Path;

use crate::core::strand::Strand;
use crate::core::transcript::{GenePred, GenePredExt};
use crate::parsing::psl::ParseError;

/// Parse a genePred file (plain or gzipped), returning transcripts in file
/// order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the content is invalid.
pub fn parse_genepred_file(path: &Path) -> Result<Vec<GenePred>, ParseError> {
    let content = crate::parsing::read_file(path)?;
    parse_genepred_text(&content)
}

/// Parse genePred text, returning transcripts in file order.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row doesn't have 10 or 15
/// tab-separated columns, a field doesn't parse, or the exon lists disagree
/// with the exon count.
pub fn parse_genepred_text(text: &str) -> Result<Vec<GenePred>, ParseError> {
    let mut transcripts = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        transcripts.push(parse_genepred_line(line, line_num)?);
    }

    Ok(transcripts)
}

fn parse_genepred_line(line: &str, line_num: usize) -> Result<GenePred, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 10 && fields.len() != 15 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {} has {} fields, expected 10 or 15",
            line_num,
            fields.len()
        )));
    }

    let num = |idx: usize, what: &str| -> Result<u64, ParseError> {
        fields[idx].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {what} on line {line_num}: '{}'",
                fields[idx]
            ))
        })
    };
    let list = |idx: usize, what: &str| -> Result<Vec<u64>, ParseError> {
        fields[idx]
            .split_terminator(',')
            .map(|v| {
                v.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "Invalid {what} on line {line_num}: '{}'",
                        fields[idx]
                    ))
                })
            })
            .collect()
    };

    let strand = Strand::parse(fields[2].trim()).ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "Invalid strand on line {line_num}: '{}'",
            fields[2]
        ))
    })?;

    let exon_count = num(7, "exon count")? as usize;
    let exon_starts = list(8, "exon starts")?;
    let exon_ends = list(9, "exon ends")?;

    if exon_count == 0 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has no exons"
        )));
    }
    if exon_starts.len() != exon_count || exon_ends.len() != exon_count {
        return Err(ParseError::InvalidFormat(format!(
            "Line {} exon lists have {}/{} entries, expected {}",
            line_num,
            exon_starts.len(),
            exon_ends.len(),
            exon_count
        )));
    }

    let extended = if fields.len() == 15 {
        let score: i64 = fields[10].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid score on line {line_num}: '{}'",
                fields[10]
            ))
        })?;
        let exon_frames: Vec<i64> = fields[14]
            .split_terminator(',')
            .map(|v| {
                v.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "Invalid exon frames on line {line_num}: '{}'",
                        fields[14]
                    ))
                })
            })
            .collect::<Result<_, ParseError>>()?;
        if exon_frames.len() != exon_count {
            return Err(ParseError::InvalidFormat(format!(
                "Line {} exon frames have {} entries, expected {}",
                line_num,
                exon_frames.len(),
                exon_count
            )));
        }
        Some(GenePredExt {
            score,
            name2: fields[11].trim().to_string(),
            cds_start_stat: fields[12].trim().to_string(),
            cds_end_stat: fields[13].trim().to_string(),
            exon_frames,
        })
    } else {
        None
    };

    Ok(GenePred {
        name: fields[0].trim().to_string(),
        chrom: fields[1].trim().to_string(),
        strand,
        tx_start: num(3, "transcription start")?,
        tx_end: num(4, "transcription end")?,
        cds_start: num(5, "CDS start")?,
        cds_end: num(6, "CDS end")?,
        exon_starts,
        exon_ends,
        extended,
    })
}
