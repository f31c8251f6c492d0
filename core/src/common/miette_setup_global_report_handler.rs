// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a global [`miette`] report handler that fits the terminal.
//!
//! - The [`miette::ErrorHook`] is stored when [`miette::set_hook`] is called, but the
//!   handler is only built when a report is actually displayed. So the terminal width is
//!   measured just before the output is generated, not when the hook is registered.
//! - The handler itself is configured with [`MietteHandlerOpts`], whose `build()`
//!   produces the "real" graphical handler.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// If an error never occurs, then the terminal width is never calculated.
///
/// Calling this more than once is harmless, only the first call wins.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
