// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns a parsed [`CLICommand`] into output. The one shot subcommands build a widget's
//! initial state from the config, fold the command line values in as actions through
//! the widget's reducer, and render once.

use std::path::Path;

use byteviz_core::{AsciiCode, CommonError, CommonErrorType, CommonResult, first_code_point,
                   ok};
use miette::IntoDiagnostic;
use tokio::io::{AsyncBufRead, AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::{AppConfig, AsciiTableAction, BitwiseCalcAction, ByteTogglerAction, CLICommand,
            ConfigSubcommand, Palette, ScriptSource, Utf8VizAction, Widget, run_script, run_session_for};

/// Render the widget a one shot subcommand asks for. Returns `None` for the
/// subcommands that are not a single widget render (`interactive`, `run`, `config`).
///
/// # Errors
///
/// Returns an error if a value on the command line or in the config is invalid.
pub fn render_widget_command(
    command: &CLICommand,
    config: &AppConfig,
    palette: Palette,
) -> CommonResult<Option<String>> {
    let rendered = match command {
        CLICommand::Ascii { filter, select } => {
            let mut actions = vec![];
            if let Some(filter) = filter {
                actions.push(AsciiTableAction::SetFilter(*filter));
            }
            if let Some(code) = select {
                actions.push(AsciiTableAction::Select(AsciiCode::try_new(*code)?));
            }
            apply_all(config.ascii_table_state()?, &actions).render(palette)
        }

        CLICommand::Byte { value, toggle } => {
            let actions: Vec<_> = value
                .map(ByteTogglerAction::Set)
                .into_iter()
                .chain(toggle.iter().copied().map(ByteTogglerAction::Toggle))
                .collect();
            apply_all(config.byte_toggler_state(), &actions).render(palette)
        }

        CLICommand::Bitwise { op, a, b, shift } => {
            let actions: Vec<_> = [
                op.map(BitwiseCalcAction::SetOperator),
                a.map(BitwiseCalcAction::SetOperandA),
                b.map(BitwiseCalcAction::SetOperandB),
                shift.map(BitwiseCalcAction::SetShiftAmount),
            ]
            .into_iter()
            .flatten()
            .collect();
            apply_all(config.bitwise_calc_state(), &actions).render(palette)
        }

        CLICommand::Utf8 { text } => {
            let mut actions = vec![];
            if let Some(text) = text {
                let Some(code_point) = first_code_point(text) else {
                    return CommonError::new_error_result(
                        CommonErrorType::InvalidArguments,
                        "Expected a character, got an empty string",
                    );
                };
                actions.push(Utf8VizAction::SetCodePoint(code_point));
            }
            apply_all(config.utf8_viz_state(), &actions).render(palette)
        }

        CLICommand::Interactive { .. } | CLICommand::Run { .. } | CLICommand::Config { .. } => {
            return Ok(None);
        }
    };
    Ok(Some(rendered))
}

/// Run any subcommand. Output goes to `output`, and `input` is only read by
/// `interactive` and by `run` without a file or `--eval`. `config_path` is the
/// `--config` value, `None` means the default location.
///
/// A script that fails is reported in the rendered output like any other result, it
/// does not make this function fail.
///
/// # Errors
///
/// Returns an error for invalid arguments or config, or if the terminal can't be read
/// or written.
pub async fn try_run_command(
    command: &CLICommand,
    config: &AppConfig,
    config_path: Option<&Path>,
    palette: Palette,
    input: impl AsyncBufRead + AsyncRead + Unpin,
    mut output: impl AsyncWrite + Unpin,
) -> CommonResult<()> {
    match command {
        CLICommand::Ascii { .. }
        | CLICommand::Byte { .. }
        | CLICommand::Bitwise { .. }
        | CLICommand::Utf8 { .. } => {
            if let Some(rendered) = render_widget_command(command, config, palette)? {
                write_line(&mut output, &rendered).await?;
            }
        }
        CLICommand::Interactive { widget } => {
            run_session_for(*widget, config, palette, input, output).await?;
        }
        CLICommand::Run { file, code } => {
            let source = match (file, code) {
                (_, Some(code)) => ScriptSource::Inline(code.clone()),
                (Some(file), None) => ScriptSource::File(file.clone()),
                (None, None) => ScriptSource::Stdin,
            };
            let code = source.read(input).await?;
            let executor = config.interpreter.to_executor();
            let (_, rendered) = run_script(&executor, &code, palette).await;
            write_line(&mut output, &rendered).await?;
        }
        CLICommand::Config { action } => {
            let message = match action {
                ConfigSubcommand::Init { force } => {
                    let path = AppConfig::try_init_file(config_path, *force)?;
                    format!("Wrote default config to {}", path.display())
                }
                ConfigSubcommand::Path => {
                    AppConfig::try_resolve_path(config_path)?.display().to_string()
                }
            };
            write_line(&mut output, &message).await?;
        }
    }
    ok!()
}

fn apply_all<W: Widget>(initial_state: W, actions: &[W::Action]) -> W {
    actions
        .iter()
        .fold(initial_state, |state, action| state.reduce(action))
}

async fn write_line(output: &mut (impl AsyncWrite + Unpin), text: &str) -> CommonResult<()> {
    output.write_all(text.as_bytes()).await.into_diagnostic()?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await.into_diagnostic()?;
    }
    output.flush().await.into_diagnostic()?;
    ok!()
}

#[cfg(test)]
mod tests {
    use byteviz_core::{BitIndex, BitwiseOperator, ShiftAmount, assert_eq2};

    use super::*;
    use crate::WidgetKind;

    fn render(command: &CLICommand) -> String {
        render_widget_command(command, &AppConfig::default(), Palette::plain())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_byte_applies_set_then_toggles() {
        let command = CLICommand::Byte {
            value: Some(65),
            toggle: vec![BitIndex::try_new(0).unwrap(), BitIndex::try_new(7).unwrap()],
        };
        // 65 ^ 128 ^ 1 = 192.
        let it = render(&command);
        assert!(it.contains("Decimal:   192"), "{it}");
        assert!(it.contains("Hex:       0xC0"), "{it}");
    }

    #[test]
    fn test_byte_defaults_come_from_config() {
        let config = AppConfig {
            byte_value: 10,
            ..Default::default()
        };
        let command = CLICommand::Byte {
            value: None,
            toggle: vec![],
        };
        let it = render_widget_command(&command, &config, Palette::plain())
            .unwrap()
            .unwrap();
        assert!(it.contains("Hex:       0x0A"), "{it}");
    }

    #[test]
    fn test_bitwise_shift() {
        let command = CLICommand::Bitwise {
            op: Some(BitwiseOperator::ShiftRight),
            a: Some(202),
            b: None,
            shift: Some(ShiftAmount::try_new(2).unwrap()),
        };
        let it = render(&command);
        assert!(it.contains("Shift by: 2"), "{it}");
        assert!(it.contains("Result = 50"), "{it}");
    }

    #[test]
    fn test_utf8_uses_first_character() {
        let command = CLICommand::Utf8 {
            text: Some("中文".into()),
        };
        let it = render(&command);
        assert!(it.contains("U+4E2D"), "{it}");
        assert!(it.contains("0xE4"), "{it}");
    }

    #[test]
    fn test_utf8_rejects_empty_text() {
        let command = CLICommand::Utf8 {
            text: Some(String::new()),
        };
        let report =
            render_widget_command(&command, &AppConfig::default(), Palette::plain())
                .unwrap_err();
        assert_eq2!(
            CommonError::error_type_of(&report),
            Some(CommonErrorType::InvalidArguments)
        );
    }

    #[test]
    fn test_ascii_rejects_code_above_127() {
        let command = CLICommand::Ascii {
            filter: None,
            select: Some(200),
        };
        assert!(
            render_widget_command(&command, &AppConfig::default(), Palette::plain()).is_err()
        );
    }

    #[test]
    fn test_session_commands_are_not_rendered_once() {
        let command = CLICommand::Interactive {
            widget: WidgetKind::Ascii,
        };
        assert_eq2!(
            render_widget_command(&command, &AppConfig::default(), Palette::plain())
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_try_run_command_interactive() {
        let command = CLICommand::Interactive {
            widget: WidgetKind::Byte,
        };
        let mut output = Vec::new();
        try_run_command(
            &command,
            &AppConfig::default(),
            None,
            Palette::plain(),
            &b"set 0x42\nquit\n"[..],
            &mut output,
        )
        .await
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Character: B"), "{output}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_try_run_command_runs_script_from_stdin() {
        let mut config = AppConfig::default();
        config.interpreter.program = "sh".into();
        config.interpreter.args = vec!["-s".into()];
        config.interpreter.wrap_ruby = false;

        let command = CLICommand::Run {
            file: None,
            code: None,
        };
        let mut output = Vec::new();
        try_run_command(
            &command,
            &config,
            None,
            Palette::plain(),
            &b"echo 202"[..],
            &mut output,
        )
        .await
        .unwrap();
        assert_eq2!(String::from_utf8(output).unwrap(), "Output\n202\n");
    }

    #[tokio::test]
    async fn test_try_run_command_config_init_then_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let init = CLICommand::Config {
            action: ConfigSubcommand::Init { force: false },
        };

        let mut output = Vec::new();
        try_run_command(
            &init,
            &AppConfig::default(),
            Some(&path),
            Palette::plain(),
            &b""[..],
            &mut output,
        )
        .await
        .unwrap();
        assert_eq2!(
            String::from_utf8(output).unwrap(),
            format!("Wrote default config to {}\n", path.display())
        );
        assert_eq2!(AppConfig::load_from(&path).unwrap(), AppConfig::default());

        // A second init without --force keeps the file.
        let result = try_run_command(
            &init,
            &AppConfig::default(),
            Some(&path),
            Palette::plain(),
            &b""[..],
            Vec::new(),
        )
        .await;
        assert!(result.is_err());

        let mut output = Vec::new();
        try_run_command(
            &CLICommand::Config {
                action: ConfigSubcommand::Path,
            },
            &AppConfig::default(),
            Some(&path),
            Palette::plain(),
            &b""[..],
            &mut output,
        )
        .await
        .unwrap();
        assert_eq2!(
            String::from_utf8(output).unwrap(),
            format!("{}\n", path.display())
        );
    }
}
