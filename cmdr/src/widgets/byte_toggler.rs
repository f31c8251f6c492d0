// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use byteviz_core::{BIT_PLACE_VALUES, BitIndex, ByteReadout, CommonResult, parse_radix,
                   toggle_bit};

use super::{Widget, parse_bit_index, render_bit_cells, require_argument, split_command,
            unknown_action};
use crate::Palette;

pub const DEFAULT_BYTE_VALUE: u8 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteTogglerState {
    pub value: u8,
}

impl Default for ByteTogglerState {
    fn default() -> Self {
        Self {
            value: DEFAULT_BYTE_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteTogglerAction {
    Toggle(BitIndex),
    Set(u8),
}

impl Widget for ByteTogglerState {
    type Action = ByteTogglerAction;

    const NAME: &'static str = "byte";

    const ACTIONS_HELP: &'static str = "  toggle <0-7>  flip a bit, 0 is the leftmost (128)\n  set <byte>    replace the byte, eg: 65, 0x41, 0b01000001";

    fn parse_action(line: &str) -> CommonResult<Self::Action> {
        let (command, argument) = split_command(line);
        match command.as_str() {
            "toggle" | "t" => Ok(ByteTogglerAction::Toggle(parse_bit_index(
                require_argument(&command, argument)?,
            )?)),
            "set" | "s" => Ok(ByteTogglerAction::Set(parse_radix(require_argument(
                &command, argument,
            )?)?)),
            _ => unknown_action(&command, Self::NAME),
        }
    }

    fn reduce(&self, action: &Self::Action) -> Self {
        match action {
            ByteTogglerAction::Toggle(index) => Self {
                value: toggle_bit(self.value, *index),
            },
            ByteTogglerAction::Set(value) => Self { value: *value },
        }
    }

    fn render(&self, palette: Palette) -> String {
        let readout = ByteReadout::new(self.value);
        let mut acc = String::new();

        _ = writeln!(acc, "{}", palette.header("Byte Toggler"));

        let place_values = BIT_PLACE_VALUES
            .iter()
            .map(|it| format!("{it:>3}"))
            .collect::<Vec<_>>()
            .join(" ");
        _ = writeln!(acc, "{}", palette.dim(place_values));

        let cells = render_bit_cells(&readout.bits, |_, bit| {
            if bit.is_set() {
                palette.emphasis(bit)
            } else {
                palette.dim(bit)
            }
        });
        _ = writeln!(acc, "{cells}");
        _ = writeln!(acc, "{:^31}", "↓");

        for (label, value) in [
            ("Binary:", readout.binary.to_string()),
            ("Decimal:", readout.value.to_string()),
            ("Hex:", readout.hex.to_string()),
            ("Character:", readout.character.to_string()),
        ] {
            _ = writeln!(acc, "{} {}", palette.dim(format!("{label:<10}")), palette.emphasis(value));
        }

        acc
    }
}
