//! External hint generator invocation.
//!
//! The actual conversion from an annotated genePred record to Augustus
//! extrinsic hints is done by the Augustus script `transMap2hints.pl`,
//! driven over stdin/stdout one record at a time. The [`HintGenerator`]
//! trait isolates that subprocess so the rest of the pipeline (and the
//! tests) can swap it out.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

/// Program name of the Augustus hint script, resolved via `PATH` unless a
/// full path is given.
pub const HINT_TOOL: &str = "transMap2hints.pl";

/// Fixed parameter contract with `transMap2hints.pl`. The exon-part margin
/// matches the fuzzy-match tolerance so hint widths and junction support
/// agree.
const HINT_TOOL_ARGS: &[&str] = &[
    "--ep_cutoff=0",
    "--ep_margin=12",
    "--min_intron_len=50",
    "--start_stop_radius=5",
    "--tss_tts_radius=10",
    "--utrend_cutoff=10",
    "--in=/dev/stdin",
    "--out=/dev/stdout",
];

/// Errors from running the hint tool.
#[derive(Debug, Error)]
pub enum HintError {
    /// The tool could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// IO error while feeding the tool or collecting its output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool ran but exited unsuccessfully.
    #[error("{program} failed ({status}): {stderr}")]
    CommandFailed {
        /// Program that failed.
        program: String,
        /// Its exit status.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

/// Turns one annotated transcript record into Augustus hint text (GFF).
pub trait HintGenerator {
    /// Convert a single record. The output is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`HintError`] if the generator cannot run or reports failure.
    fn generate(&self, record: &str) -> Result<String, HintError>;
}

/// [`HintGenerator`] backed by the `transMap2hints.pl` subprocess.
#[derive(Debug, Clone)]
pub struct TransMapHintsCommand {
    program: PathBuf,
}

impl TransMapHintsCommand {
    /// Generator using [`HINT_TOOL`] from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self { program: PathBuf::from(HINT_TOOL) }
    }

    /// Generator using an explicit program path.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// The program this generator runs.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for TransMapHintsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HintGenerator for TransMapHintsCommand {
    fn generate(&self, record: &str) -> Result<String, HintError> {
        let program = self.program.display().to_string();
        debug!("running {program} on {} bytes", record.len());

        let mut child = Command::new(&self.program)
            .args(HINT_TOOL_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HintError::Launch { program: program.clone(), source })?;

        // The tool reads all of --in before writing hints, so a plain write
        // followed by a drain cannot deadlock.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("child stdin was not captured"))?;
        stdin.write_all(record.as_bytes())?;
        drop(stdin);

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(HintError::CommandFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn script(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("tool.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_passes_record_through_tool() {
        let dir = tempfile::tempdir().unwrap();
        // Ignores the fixed arguments and echoes stdin back.
        let tool = script(&dir, "cat -");
        let generator = TransMapHintsCommand::with_program(tool);
        let out = generator.generate("txA-1\tchr1\t1,0\n").unwrap();
        assert_eq!(out, "txA-1\tchr1\t1,0\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // Drains stdin so the record write can't hit a closed pipe.
        let tool = script(&dir, "cat - >/dev/null\necho boom >&2\nexit 3");
        let generator = TransMapHintsCommand::with_program(tool);
        let err = generator.generate("record\n").unwrap_err();
        match err {
            HintError::CommandFailed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_a_launch_error() {
        let generator = TransMapHintsCommand::with_program("/nonexistent/transMap2hints.pl");
        let err = generator.generate("record\n").unwrap_err();
        assert!(matches!(err, HintError::Launch { .. }));
    }

    #[test]
    fn test_default_uses_path_lookup() {
        let generator = TransMapHintsCommand::default();
        assert_eq!(generator.program(), Path::new(HINT_TOOL));
    }
}
