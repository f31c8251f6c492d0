// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::{Color, Stylize, style};

/// Named colors used across all the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultColors {
    LizardGreen,
    SlateGray,
    FrozenBlue,
    SoftPink,
    GuardsRed,
    Amber,
}

impl DefaultColors {
    #[must_use]
    pub fn as_crossterm_color(self) -> Color {
        match self {
            DefaultColors::LizardGreen => Color::Rgb { r: 20, g: 244, b: 0 },
            DefaultColors::SlateGray => Color::Rgb { r: 94, g: 103, b: 111 },
            DefaultColors::FrozenBlue => Color::Rgb { r: 171, g: 204, b: 242 },
            DefaultColors::SoftPink => Color::Rgb { r: 255, g: 140, b: 170 },
            DefaultColors::GuardsRed => Color::Rgb { r: 200, g: 1, b: 1 },
            DefaultColors::Amber => Color::Rgb { r: 255, g: 191, b: 0 },
        }
    }
}

/// Styles text for the terminal. With color turned off every method returns the text
/// unchanged, which is what the tests (and pipes, and CI logs) see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color_enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color_enabled: false,
        }
    }

    #[must_use]
    pub fn colored() -> Self {
        Self {
            color_enabled: true,
        }
    }

    /// Color is used unless it was turned off on the command line, in the config file,
    /// or we are running in CI.
    #[must_use]
    pub fn detect(no_color_flag: bool, color_in_config: bool) -> Self {
        Self {
            color_enabled: !no_color_flag && color_in_config && !is_ci::cached(),
        }
    }

    fn paint(self, text: impl Display, color: DefaultColors) -> String {
        if self.color_enabled {
            style(text).with(color.as_crossterm_color()).to_string()
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn header(self, text: impl Display) -> String {
        if self.color_enabled {
            style(text)
                .with(DefaultColors::FrozenBlue.as_crossterm_color())
                .bold()
                .to_string()
        } else {
            text.to_string()
        }
    }

    /// Selected items, bits that are on, significant result bits.
    #[must_use]
    pub fn emphasis(self, text: impl Display) -> String {
        self.paint(text, DefaultColors::LizardGreen)
    }

    /// Labels, bits that are off, unselected options.
    #[must_use]
    pub fn dim(self, text: impl Display) -> String { self.paint(text, DefaultColors::SlateGray) }

    /// UTF-8 prefix bits.
    #[must_use]
    pub fn marker(self, text: impl Display) -> String { self.paint(text, DefaultColors::Amber) }

    #[must_use]
    pub fn accent(self, text: impl Display) -> String {
        self.paint(text, DefaultColors::SoftPink)
    }

    #[must_use]
    pub fn error(self, text: impl Display) -> String {
        self.paint(text, DefaultColors::GuardsRed)
    }
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;

    use super::*;

    #[test]
    fn test_plain_returns_text_unchanged() {
        let palette = Palette::plain();
        assert_eq2!(palette.emphasis("A"), "A");
        assert_eq2!(palette.header(42), "42");
        assert_eq2!(palette.error("oops"), "oops");
    }

    #[test]
    fn test_colored_keeps_text() {
        // Escape codes are left out when `NO_COLOR` is set, so only check the text.
        assert!(Palette::colored().emphasis("A").contains('A'));
        assert!(Palette::colored().dim(7).contains('7'));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!Palette::detect(true, true).color_enabled);
        assert!(!Palette::detect(false, false).color_enabled);
    }
}
