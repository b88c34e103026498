use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::InputArgs;
use crate::hints::convert::transcript_to_hints;
use crate::hints::generator::{TransMapHintsCommand, HINT_TOOL};
use crate::matching::DEFAULT_FUZZ_DISTANCE;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hint tool executable (resolved via PATH unless a path is given)
    #[arg(long, default_value = HINT_TOOL)]
    pub tool: PathBuf,

    /// Write GFF hints here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute generate subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed, a flank fails to
/// project, or the hint tool fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, verbose: bool) -> anyhow::Result<()> {
    let inputs = args.input.load(verbose)?;

    if inputs.transcripts.is_empty() {
        eprintln!("No transcripts to convert.");
        return Ok(());
    }

    let generator = TransMapHintsCommand::with_program(&args.tool);
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut converted = 0usize;
    let mut skipped = 0usize;
    for tx in &inputs.transcripts {
        let Some((tm, reference)) = inputs.resolve(tx) else {
            skipped += 1;
            continue;
        };
        let hints = transcript_to_hints(tx, tm, reference, DEFAULT_FUZZ_DISTANCE, &generator)
            .with_context(|| format!("failed to convert {}", tx.name))?;
        out.write_all(hints.as_bytes())?;
        converted += 1;
    }
    out.flush()?;

    if verbose {
        eprintln!("Converted {converted} transcripts ({skipped} skipped)");
    }

    Ok(())
}
