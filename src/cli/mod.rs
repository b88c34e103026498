//! Command-line interface for transmap-hints.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **generate**: Convert transMap transcripts to Augustus hints via
//!   `transMap2hints.pl`
//! - **flags**: Report per-intron junction support without running the tool
//!
//! ## Usage
//!
//! ```text
//! # Generate hints for protein-coding transcripts
//! transmap-hints generate --genepred tm.gp --tm-psl tm.psl --ref-psl ref.psl \
//!     --attrs attrs.tsv -o hints.gff
//!
//! # Inspect junction support as a table
//! transmap-hints flags --genepred tm.gp --tm-psl tm.psl --ref-psl ref.psl
//!
//! # JSON output for scripting
//! transmap-hints flags --genepred tm.gp --tm-psl tm.psl --ref-psl ref.psl --format json
//!
//! # Widen the matching window
//! transmap-hints flags --genepred tm.gp --tm-psl tm.psl --ref-psl ref.psl --tolerance 25
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::core::psl::{strip_alignment_number, PslRow};
use crate::core::transcript::GenePred;
use crate::hints::convert::reference_alignment;
use crate::parsing::attrs::parse_attrs_file;
use crate::parsing::genepred::parse_genepred_file;
use crate::parsing::psl::{parse_psl_file, psl_dict};

pub mod flags;
pub mod generate;

#[derive(Parser)]
#[command(name = "transmap-hints")]
#[command(version)]
#[command(about = "Generate Augustus extrinsic hints from transMap projected transcripts")]
#[command(
    long_about = "transmap-hints reconciles transMap projected transcripts with their source\nalignments and feeds them to the Augustus transMap2hints.pl script.\n\nFor every intron of a projected transcript it decides whether a reference\nexon boundary supports the splice junction (within a tolerance window), and\nhands the transcript plus its per-intron support flags to the hint tool."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert transcripts to Augustus hints via the external tool
    Generate(generate::GenerateArgs),

    /// Report per-intron junction support without running the tool
    Flags(flags::FlagsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Input files shared by both subcommands.
#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// transMap transcripts in genePred format (10 or 15 columns, may be gzipped)
    #[arg(long, value_name = "FILE")]
    pub genepred: PathBuf,

    /// transMap PSL: projected transcripts aligned to the target genome
    #[arg(long, value_name = "FILE")]
    pub tm_psl: PathBuf,

    /// Reference PSL: source transcripts aligned to the reference genome
    #[arg(long, value_name = "FILE")]
    pub ref_psl: PathBuf,

    /// Attributes TSV keyed by transcript id; enables biotype filtering
    #[arg(long, value_name = "FILE")]
    pub attrs: Option<PathBuf>,

    /// Biotype value to keep when --attrs is given
    #[arg(long, default_value = "protein_coding")]
    pub biotype: String,

    /// Attributes column holding the biotype
    #[arg(long, default_value = "TranscriptBiotype")]
    pub biotype_column: String,
}

/// Parsed and filtered inputs, ready for per-transcript conversion.
pub(crate) struct HintInputs {
    pub transcripts: Vec<GenePred>,
    pub tm_psls: HashMap<String, PslRow>,
    pub ref_psls: HashMap<String, PslRow>,
}

impl InputArgs {
    /// Load all three inputs and apply the biotype filter when an
    /// attributes table was given.
    pub(crate) fn load(&self, verbose: bool) -> anyhow::Result<HintInputs> {
        let transcripts = parse_genepred_file(&self.genepred)
            .with_context(|| format!("failed to read transcripts from {}", self.genepred.display()))?;
        let tm_psls = psl_dict(
            parse_psl_file(&self.tm_psl)
                .with_context(|| format!("failed to read transMap PSL from {}", self.tm_psl.display()))?,
        );
        let ref_psls = psl_dict(
            parse_psl_file(&self.ref_psl)
                .with_context(|| format!("failed to read reference PSL from {}", self.ref_psl.display()))?,
        );

        if verbose {
            eprintln!(
                "Loaded {} transcripts, {} transMap and {} reference alignments",
                transcripts.len(),
                tm_psls.len(),
                ref_psls.len()
            );
        }

        let transcripts = match &self.attrs {
            Some(path) => {
                let table = parse_attrs_file(path)
                    .with_context(|| format!("failed to read attributes from {}", path.display()))?;
                let allowed = table
                    .keys_where(&self.biotype_column, &self.biotype)
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "attributes table {} has no column '{}'",
                            path.display(),
                            self.biotype_column
                        )
                    })?;
                let before = transcripts.len();
                let kept: Vec<GenePred> = transcripts
                    .into_iter()
                    .filter(|tx| allowed.contains(strip_alignment_number(&tx.name)))
                    .collect();
                if verbose {
                    eprintln!(
                        "Kept {} of {before} transcripts with {} = {}",
                        kept.len(),
                        self.biotype_column,
                        self.biotype
                    );
                }
                kept
            }
            None => transcripts,
        };

        Ok(HintInputs { transcripts, tm_psls, ref_psls })
    }
}

impl HintInputs {
    /// Resolve the transMap and reference alignments for a transcript,
    /// warning and returning `None` when either is missing.
    pub(crate) fn resolve(&self, tx: &GenePred) -> Option<(&PslRow, &PslRow)> {
        let Some(tm) = self.tm_psls.get(&tx.name) else {
            warn!("{}: no transMap alignment, skipping", tx.name);
            return None;
        };
        let Some(reference) = reference_alignment(&self.ref_psls, &tx.name) else {
            warn!("{}: no reference alignment, skipping", tx.name);
            return None;
        };
        Some((tm, reference))
    }
}
