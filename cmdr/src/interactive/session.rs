// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A line driven session: render the widget, read one action per line, reduce, render
//! again. State is owned by the loop, so actions are applied strictly in the order they
//! were typed.

use byteviz_core::{CommonResult, ok};
use miette::IntoDiagnostic;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{AppConfig, Palette, PROMPT, Widget, WidgetKind, action_error_message,
            goodbye_message, session_help_message};

/// What one line of input asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand<A> {
    Apply(A),
    Help,
    Quit,
    Nothing,
}

/// # Errors
///
/// Returns the widget's parse error for a line that is not a session command.
pub fn parse_session_command<W: Widget>(line: &str) -> CommonResult<SessionCommand<W::Action>> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Ok(SessionCommand::Nothing),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        _ => Ok(SessionCommand::Apply(W::parse_action(line)?)),
    }
}

/// Run a session until `quit` or the end of `input`. Returns the final state.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails. Bad actions are
/// reported to `output` and do not end the session.
pub async fn run_session<W: Widget>(
    initial_state: W,
    palette: Palette,
    mut input: impl AsyncBufRead + Unpin,
    mut output: impl AsyncWrite + Unpin,
) -> CommonResult<W> {
    let mut state = initial_state;
    let mut buffer = Vec::new();

    write_out(&mut output, &state.render(palette)).await?;
    write_out(&mut output, PROMPT).await?;

    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer).await.into_diagnostic()? == 0 {
            break;
        }
        // Bytes that are not UTF-8 turn into U+FFFD, so such a line is rejected like any
        // other unknown action instead of ending the session.
        let decoded = String::from_utf8_lossy(&buffer);
        let line = decoded.trim_end_matches(['\n', '\r']);

        match parse_session_command::<W>(line) {
            Ok(SessionCommand::Apply(action)) => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "Apply action", widget = W::NAME, action = ?action);
                state = state.reduce(&action);
                write_out(&mut output, &state.render(palette)).await?;
            }
            Ok(SessionCommand::Help) => {
                let help = session_help_message(palette, W::NAME, W::ACTIONS_HELP);
                write_out(&mut output, &format!("{help}\n")).await?;
            }
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Nothing) => {}
            Err(report) => {
                tracing::debug!(message = "Rejected line", line = %line, error = %report);
                let message = action_error_message(palette, &report);
                write_out(&mut output, &format!("{message}\n")).await?;
            }
        }
        write_out(&mut output, PROMPT).await?;
    }

    write_out(&mut output, &format!("\n{}\n", goodbye_message(palette))).await?;
    ok!(state)
}

/// Start a session for `kind` with its initial state taken from `config`.
///
/// # Errors
///
/// Returns an error if the config holds an invalid initial state, or from
/// [`run_session`].
pub async fn run_session_for(
    kind: WidgetKind,
    config: &AppConfig,
    palette: Palette,
    input: impl AsyncBufRead + Unpin,
    output: impl AsyncWrite + Unpin,
) -> CommonResult<()> {
    match kind {
        WidgetKind::Ascii => {
            run_session(config.ascii_table_state()?, palette, input, output).await?;
        }
        WidgetKind::Byte => {
            run_session(config.byte_toggler_state(), palette, input, output).await?;
        }
        WidgetKind::Bitwise => {
            run_session(config.bitwise_calc_state(), palette, input, output).await?;
        }
        WidgetKind::Utf8 => {
            run_session(config.utf8_viz_state(), palette, input, output).await?;
        }
    }
    ok!()
}

async fn write_out(output: &mut (impl AsyncWrite + Unpin), text: &str) -> CommonResult<()> {
    output.write_all(text.as_bytes()).await.into_diagnostic()?;
    output.flush().await.into_diagnostic()?;
    ok!()
}

#[cfg(test)]
mod tests {
    use byteviz_core::{BitwiseOperator, assert_eq2};

    use super::*;
    use crate::{BitwiseCalcState, ByteTogglerAction, ByteTogglerState, Utf8VizState};

    async fn session<W: Widget>(initial_state: W, script: &str) -> (W, String) {
        let mut output = Vec::new();
        let state = run_session(initial_state, Palette::plain(), script.as_bytes(), &mut output)
            .await
            .unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_session_command() {
        assert_eq2!(
            parse_session_command::<ByteTogglerState>("  ").unwrap(),
            SessionCommand::Nothing
        );
        assert_eq2!(
            parse_session_command::<ByteTogglerState>("HELP").unwrap(),
            SessionCommand::Help
        );
        assert_eq2!(
            parse_session_command::<ByteTogglerState>("q").unwrap(),
            SessionCommand::Quit
        );
        assert_eq2!(
            parse_session_command::<ByteTogglerState>("set 1").unwrap(),
            SessionCommand::Apply(ByteTogglerAction::Set(1))
        );
        assert!(parse_session_command::<ByteTogglerState>("fly").is_err());
    }

    #[tokio::test]
    async fn test_actions_apply_in_order() {
        let (state, output) =
            session(ByteTogglerState::default(), "toggle 1\ntoggle 7\nset 0x0F\ntoggle 0\n")
                .await;
        assert_eq2!(state.value, 0x8F);
        assert!(output.contains("Binary:    0b10001111"), "{output}");
        assert!(output.ends_with("Goodbye 👋\n"), "{output}");
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (state, _) = session(ByteTogglerState::default(), "toggle 1\nquit\ntoggle 1\n").await;
        assert_eq2!(state.value, 65 ^ 64);
    }

    #[tokio::test]
    async fn test_line_that_is_not_utf8_is_rejected_and_session_continues() {
        let mut output = Vec::new();
        let state = run_session(
            ByteTogglerState::default(),
            Palette::plain(),
            &b"toggle 1\n\xff\xfe\ntoggle 2\n"[..],
            &mut output,
        )
        .await
        .unwrap();
        assert_eq2!(state.value, 65 ^ 64 ^ 32);
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("✗"), "{output}");
    }

    #[tokio::test]
    async fn test_crlf_line_endings() {
        let (state, _) = session(ByteTogglerState::default(), "toggle 1\r\nset 0x0F\r\n").await;
        assert_eq2!(state.value, 0x0F);
    }

    #[tokio::test]
    async fn test_bad_line_is_reported_and_session_continues() {
        let (state, output) =
            session(BitwiseCalcState::default(), "op nand\nop xor\n").await;
        assert_eq2!(state.operator, BitwiseOperator::Xor);
        assert!(output.contains("✗"), "{output}");
        assert!(output.contains("Unknown operator 'nand'"), "{output}");
        assert!(output.contains("Result = 127"), "{output}");
    }

    #[tokio::test]
    async fn test_help_lists_widget_actions() {
        let (_, output) = session(Utf8VizState::default(), "help\n").await;
        assert!(output.contains("Commands for the utf8 widget:"), "{output}");
        assert!(output.contains("cp <U+XXXX>"), "{output}");
        assert!(output.contains("quit"), "{output}");
    }

    #[tokio::test]
    async fn test_run_session_for_uses_config() {
        let config = AppConfig {
            byte_value: 0,
            ..Default::default()
        };
        let mut output = Vec::new();
        run_session_for(
            WidgetKind::Byte,
            &config,
            Palette::plain(),
            &b"toggle 7\n"[..],
            &mut output,
        )
        .await
        .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Decimal:   0"), "{output}");
        assert!(output.contains("Decimal:   1"), "{output}");
    }
}
