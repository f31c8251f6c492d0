// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use byteviz_core::{CommonResult, ScriptError, ScriptExecutor, ScriptOutput};
use miette::{Context, IntoDiagnostic};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::Palette;

/// Where the code for a `run` comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Inline(String),
    File(String),
    Stdin,
}

impl ScriptSource {
    /// # Errors
    ///
    /// Returns an error if the file or stdin can't be read.
    pub async fn read(&self, stdin: impl AsyncRead + Unpin) -> CommonResult<String> {
        match self {
            ScriptSource::Inline(code) => Ok(code.clone()),
            ScriptSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .into_diagnostic()
                .wrap_err_with(|| format!("Unable to read script file: {path}")),
            ScriptSource::Stdin => {
                let mut acc = String::new();
                let mut stdin = stdin;
                stdin
                    .read_to_string(&mut acc)
                    .await
                    .into_diagnostic()
                    .wrap_err("Unable to read script from stdin")?;
                Ok(acc)
            }
        }
    }
}

/// Run `code` and render what happened: the captured output, or the error in the same
/// `Error: ...` form the script itself uses for exceptions.
pub async fn run_script(
    executor: &impl ScriptExecutor,
    code: &str,
    palette: Palette,
) -> (Result<ScriptOutput, ScriptError>, String) {
    // % is Display, ? is Debug.
    tracing::debug!(message = "Running script", code_len = code.len());
    let result = executor.execute(code).await;
    if let Err(error) = &result {
        tracing::error!(message = "Script failed", error = ?error);
    }
    let rendered = render_script_result(palette, &result);
    (result, rendered)
}

#[must_use]
pub fn render_script_result(
    palette: Palette,
    result: &Result<ScriptOutput, ScriptError>,
) -> String {
    match result {
        Ok(output) => format!("{}\n{output}", palette.header("Output")),
        Err(error) => format!(
            "{}\n{}",
            palette.header("Output"),
            palette.error(format!("Error: {error}"))
        ),
    }
}
