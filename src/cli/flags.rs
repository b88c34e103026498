use anyhow::Context;
use clap::Args;

use crate::cli::{InputArgs, OutputFormat};
use crate::hints::convert::{junction_support, JunctionSupport};
use crate::matching::DEFAULT_FUZZ_DISTANCE;

#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Matching tolerance in bases on each side of the projected gap
    #[arg(long, default_value_t = DEFAULT_FUZZ_DISTANCE)]
    pub tolerance: u64,
}

/// Execute flags subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed or a flank fails to
/// project.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FlagsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let inputs = args.input.load(verbose)?;

    let mut reports = Vec::new();
    let mut skipped = 0usize;
    for tx in &inputs.transcripts {
        let Some((tm, reference)) = inputs.resolve(tx) else {
            skipped += 1;
            continue;
        };
        let support = junction_support(tx, tm, reference, args.tolerance)
            .with_context(|| format!("failed to project introns of {}", tx.name))?;
        reports.push(support);
    }

    if reports.is_empty() {
        eprintln!("No transcripts to report.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&reports),
        OutputFormat::Json => print_json_results(&reports)?,
        OutputFormat::Tsv => print_tsv_results(&reports),
    }

    if verbose && skipped > 0 {
        eprintln!("Skipped {skipped} transcripts without alignments");
    }

    Ok(())
}

fn print_text_results(reports: &[JunctionSupport]) {
    for r in reports {
        if r.intron_count == 0 {
            println!("{} ({}): single-exon", r.name, r.strand);
        } else {
            println!(
                "{} ({}): {}/{} introns supported [{}]",
                r.name,
                r.strand,
                r.supported,
                r.intron_count,
                r.token()
            );
        }
    }

    let introns: usize = reports.iter().map(|r| r.intron_count).sum();
    let supported: usize = reports.iter().map(|r| r.supported).sum();
    println!("\n{} transcripts, {supported}/{introns} introns supported", reports.len());
}

fn print_json_results(reports: &[JunctionSupport]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

fn print_tsv_results(reports: &[JunctionSupport]) {
    println!("name\tstrand\tintrons\tsupported\tflags");
    for r in reports {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            r.name,
            r.strand,
            r.intron_count,
            r.supported,
            r.token()
        );
    }
}
