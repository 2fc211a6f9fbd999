use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::types::{DockerCommand, RunOutcome};
use crate::error::{Result, StackError};

/// Executes a program to completion and reports whether it succeeded.
///
/// The stack operations only talk to this trait, so tests can substitute a
/// runner that records invocations instead of spawning processes.
pub trait CommandRunner {
    fn execute(&self, program: &Path, args: &[String]) -> RunOutcome;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, program: &Path, args: &[String]) -> RunOutcome {
        (**self).execute(program, args)
    }
}

/// Runs real child processes through `std::process::Command`.
///
/// Blocks until the child exits. Stdout is discarded; stderr is buffered in
/// full and returned as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn execute(&self, program: &Path, args: &[String]) -> RunOutcome {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) if output.status.success() => RunOutcome::succeeded(),
            Ok(output) => {
                debug!(status = %output.status, "docker exited unsuccessfully");
                RunOutcome::failed(String::from_utf8_lossy(&output.stderr).into_owned())
            }
            Err(err) => {
                // Nothing reached stderr, so the io error only shows up here.
                warn!(program = %program.display(), error = %err, "failed to spawn docker");
                RunOutcome::failed(String::new())
            }
        }
    }
}

/// Run `cmd` and turn a failed outcome into [`StackError::CommandFailed`].
pub fn run_and_capture_stderr<R: CommandRunner + ?Sized>(
    runner: &R,
    cmd: &DockerCommand,
) -> Result<()> {
    debug!(command = %cmd.redacted(), "running docker");

    let outcome = runner.execute(&cmd.program, &cmd.args);
    if outcome.success {
        return Ok(());
    }
    Err(StackError::CommandFailed {
        stderr: outcome.stderr,
    })
}
