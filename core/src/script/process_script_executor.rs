// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::ErrorKind, process::Stdio, time::Duration};

use tokio::{io::AsyncWriteExt, process::Command};

use super::{ScriptError, ScriptExecutor, ScriptOutput};

pub const DEFAULT_INTERPRETER_PROGRAM: &str = "ruby";
/// Makes `ruby` read the program from stdin.
pub const DEFAULT_INTERPRETER_ARGS: [&str; 1] = ["-"];
pub const DEFAULT_SCRIPT_TIMEOUT: Duration = Duration::from_secs(10);

/// How the user's code is embedded into the program that is actually piped to the
/// interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptWrapping {
    /// Catch exceptions and print them to stdout as `Error: <class>: <message>`, the
    /// same text the web playground shows.
    #[default]
    Ruby,
    /// Pass the code through untouched.
    Verbatim,
}

impl ScriptWrapping {
    #[must_use]
    pub fn wrap(self, code: &str) -> String {
        match self {
            ScriptWrapping::Ruby => format!(
                "begin\n{code}\nrescue => e\n  puts \"Error: #{{e.class}}: #{{e.message}}\"\nend\n"
            ),
            ScriptWrapping::Verbatim => code.to_string(),
        }
    }
}

/// Runs each script in a fresh interpreter process. The source is written to the
/// child's stdin, stdout is captured, and the child is killed if it outlives
/// [`ProcessScriptExecutor::timeout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessScriptExecutor {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
    pub wrapping: ScriptWrapping,
}

impl Default for ProcessScriptExecutor {
    fn default() -> Self {
        Self {
            program: DEFAULT_INTERPRETER_PROGRAM.into(),
            args: DEFAULT_INTERPRETER_ARGS.map(String::from).to_vec(),
            timeout: DEFAULT_SCRIPT_TIMEOUT,
            wrapping: ScriptWrapping::default(),
        }
    }
}

impl ProcessScriptExecutor {
    fn command(&self) -> Command {
        let mut it = Command::new(&self.program);
        it.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        it
    }
}

impl ScriptExecutor for ProcessScriptExecutor {
    async fn execute(&self, code: &str) -> Result<ScriptOutput, ScriptError> {
        let source = self.wrapping.wrap(code);

        // Might be unable to run it if the program does not exist.
        let mut child =
            self.command()
                .spawn()
                .map_err(|source| ScriptError::SpawnFailed {
                    program: self.program.clone(),
                    source,
                })?;

        tracing::debug!(
            message = "Spawned interpreter",
            program = %self.program,
            timeout = ?self.timeout,
            source_len = source.len()
        );

        let run_to_completion = async move {
            if let Some(mut stdin) = child.stdin.take() {
                match stdin.write_all(source.as_bytes()).await {
                    // The interpreter is allowed to exit without reading everything.
                    Err(err) if err.kind() != ErrorKind::BrokenPipe => return Err(err),
                    _ => {}
                }
                // Dropping stdin here closes the pipe, so the interpreter sees EOF.
            }
            child.wait_with_output().await
        };

        // On timeout the future is dropped along with the child, which kills it.
        let Ok(output) = tokio::time::timeout(self.timeout, run_to_completion).await
        else {
            tracing::warn!(message = "Interpreter timed out", timeout = ?self.timeout);
            return Err(ScriptError::TimedOut {
                timeout: self.timeout,
            });
        };
        let output = output?;

        // At this point the interpreter has run, but it might have failed.
        if !output.status.success() {
            return Err(ScriptError::ExitedWithFailure {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(ScriptOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn sh() -> ProcessScriptExecutor {
        ProcessScriptExecutor {
            program: "sh".into(),
            args: vec!["-s".into()],
            wrapping: ScriptWrapping::Verbatim,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_runs_ruby_from_stdin() {
        let it = ProcessScriptExecutor::default();
        assert_eq2!(it.program, "ruby");
        assert_eq2!(it.args, vec!["-".to_string()]);
        assert_eq2!(it.timeout, Duration::from_secs(10));
        assert_eq2!(it.wrapping, ScriptWrapping::Ruby);
    }

    #[test]
    fn test_ruby_wrapping_rescues_errors() {
        let it = ScriptWrapping::Ruby.wrap("puts 1 / 0");
        assert_eq2!(
            it,
            "begin\nputs 1 / 0\nrescue => e\n  puts \"Error: #{e.class}: #{e.message}\"\nend\n"
        );
        assert_eq2!(ScriptWrapping::Verbatim.wrap("puts 1"), "puts 1");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stdout() {
        let output = sh().execute("echo hello").await.unwrap();
        assert_eq2!(output.stdout, "hello\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_output() {
        let output = sh().execute("true").await.unwrap();
        assert!(output.is_empty());
        assert_eq2!(output.to_string(), "(no output)");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_carries_status_and_stderr() {
        let error = sh().execute("echo oops >&2\nexit 3").await.unwrap_err();
        let ScriptError::ExitedWithFailure { status, stderr } = error else {
            panic!("expected ExitedWithFailure, got {error:?}");
        };
        assert_eq2!(status.code(), Some(3));
        assert_eq2!(stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_missing_program() {
        let it = ProcessScriptExecutor {
            program: "byteviz-no-such-interpreter".into(),
            ..Default::default()
        };
        let error = it.execute("puts 1").await.unwrap_err();
        assert!(matches!(error, ScriptError::SpawnFailed { .. }), "{error:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_times_out() {
        let it = ProcessScriptExecutor {
            timeout: Duration::from_millis(100),
            ..sh()
        };
        let error = it.execute("sleep 5").await.unwrap_err();
        assert!(matches!(error, ScriptError::TimedOut { .. }), "{error:?}");
    }
}
