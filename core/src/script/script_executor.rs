// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          process::ExitStatus,
          time::Duration};

use miette::Diagnostic;

/// Shown in place of empty output.
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";

/// Anything that can evaluate a piece of source code and hand back what it printed.
pub trait ScriptExecutor {
    /// # Errors
    ///
    /// Returns a [`ScriptError`] if:
    /// - The interpreter can't be started.
    /// - The code runs longer than the executor allows.
    /// - The interpreter exits with a failure status.
    fn execute(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = miette::Result<ScriptOutput, ScriptError>> + Send;
}

/// Captured standard output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptOutput {
    pub stdout: String,
}

impl ScriptOutput {
    #[must_use]
    pub fn is_empty(&self) -> bool { self.stdout.is_empty() }
}

/// The captured text, or [`NO_OUTPUT_PLACEHOLDER`] if nothing was printed.
impl Display for ScriptOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_empty() {
            write!(f, "{NO_OUTPUT_PLACEHOLDER}")
        } else {
            write!(f, "{}", self.stdout)
        }
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ScriptError {
    #[error("Unable to start interpreter '{program}'")]
    #[diagnostic(
        code(byteviz_core::script::spawn_failed),
        help("Make sure the interpreter is installed and on your PATH, or set `interpreter.program` in the config file")
    )]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Script did not finish within {timeout:?}")]
    #[diagnostic(
        code(byteviz_core::script::timed_out),
        help("Look for an infinite loop, or raise `interpreter.timeout_secs` in the config file")
    )]
    TimedOut { timeout: Duration },

    #[error("Interpreter failed with {status}\n{stderr}")]
    #[diagnostic(code(byteviz_core::script::exited_with_failure))]
    ExitedWithFailure { status: ExitStatus, stderr: String },

    #[error("I/O error while talking to the interpreter")]
    #[diagnostic(code(byteviz_core::script::io))]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_empty_output_shows_placeholder() {
        assert_eq2!(ScriptOutput::default().to_string(), NO_OUTPUT_PLACEHOLDER);
        let it = ScriptOutput {
            stdout: "42\n".into(),
        };
        assert_eq2!(it.to_string(), "42\n");
    }

    #[test]
    fn test_timed_out_message() {
        let it = ScriptError::TimedOut {
            timeout: Duration::from_millis(1500),
        };
        assert_eq2!(it.to_string(), "Script did not finish within 1.5s");
    }
}
