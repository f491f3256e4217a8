//! Runs the external limiter and captures what it prints.

use crate::{CoreError, CoreResult};

use std::{
    future::Future,
    panic::Location,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// What the limiter printed, plus how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Standard output with surrounding whitespace trimmed.
    pub stdout: String,
    /// Exit code, if the process exited normally.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    /// Output of a process that exited with code 0.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code: Some(0),
        }
    }
}

/// Runs the limiter with an argument vector and waits for it to exit.
///
/// A non-zero exit code is not an error here: callers log the output either
/// way.
pub trait LimiterInvoker {
    /// Spawn the limiter with `args`, wait for exit and capture stdout.
    fn run(&self, args: &[String]) -> impl Future<Output = CoreResult<CapturedOutput>> + Send;
}

/// Invokes a limiter executable on disk through `tokio::process`.
#[derive(Debug, Clone)]
pub struct ProcessLimiter {
    program: PathBuf,
}

impl ProcessLimiter {
    /// Limiter backed by the executable at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable this invoker launches.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl LimiterInvoker for ProcessLimiter {
    // No timeout: a hung limiter stalls the caller until it exits.
    #[instrument(skip(self), fields(program = ?self.program))]
    async fn run(&self, args: &[String]) -> CoreResult<CapturedOutput> {
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CoreError::ProcessSpawn {
                program: self.program.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| CoreError::ProcessIo {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            exit_code: output.status.code(),
        };

        log_exit(output.status, &output.stderr);
        debug!(stdout_len = captured.stdout.len(), "Limiter finished");

        Ok(captured)
    }
}

fn log_exit(status: ExitStatus, stderr: &[u8]) {
    if !status.success() {
        warn!(
            status = %status,
            stderr = %String::from_utf8_lossy(stderr).trim(),
            "Limiter exited unsuccessfully"
        );
    }
}
