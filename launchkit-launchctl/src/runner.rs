//! The process-execution seam.

use std::process::Command;

use crate::error::LaunchctlError;

/// Run an external command, capture stdout, fail on non-zero exit.
///
/// Implementations take `&self`; callers that need call logs (test fakes)
/// use interior mutability. The contract is synchronous and blocking — no
/// timeout or cancellation semantics.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, LaunchctlError>;
}

/// [`CommandRunner`] over `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, LaunchctlError> {
        let command = render_command(program, args);
        tracing::debug!(command = %command, "running external command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| LaunchctlError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(LaunchctlError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Human-readable command line for error messages.
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program];
    parts.extend_from_slice(args);
    parts.join(" ")
}
