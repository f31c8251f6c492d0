// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info on clap derive:
//! - <https://docs.rs/clap/latest/clap/_derive/#overview>
//! - <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>

use std::path::PathBuf;

use byteviz_core::{AsciiFilter, BitIndex, BitwiseOperator, ShiftAmount, parse_radix};
use clap::{Args, Parser, Subcommand};

use crate::{WidgetKind, error_message_of, parse_ascii_filter, parse_bit_index};

#[derive(Debug, Parser)]
#[command(bin_name = "byteviz")]
#[command(about = "🔢 See what your bytes are made of: bits, ASCII, bitwise ops, and UTF-8")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  byteviz [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        value_name = "PATH",
        help = "Read settings from this file instead of the default `<config dir>/byteviz/config.json`"
    )]
    pub config: Option<PathBuf>,

    #[arg(global = true, long, help = "Print plain text without colors")]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔤 Print the ASCII table\n💡 Eg: `byteviz ascii --filter control --select 10`")]
    Ascii {
        #[arg(long, short, value_parser = parse_filter_arg, help = "all, control, or printable")]
        filter: Option<AsciiFilter>,

        #[arg(long, short, value_name = "CODE", value_parser = parse_byte_arg, help = "Code to show the details of")]
        select: Option<u8>,
    },

    #[clap(about = "💡 Print a byte as 8 bits\n💡 Eg: `byteviz byte 0x41 --toggle 0 --toggle 7`")]
    Byte {
        #[arg(value_parser = parse_byte_arg, help = "Decimal, or with a 0b / 0o / 0x prefix")]
        value: Option<u8>,

        #[arg(long, short, value_name = "INDEX", value_parser = parse_bit_index_arg, help = "Flip this bit (0 is leftmost), repeatable")]
        toggle: Vec<BitIndex>,
    },

    #[clap(about = "🧮 Apply a bitwise operator to two bytes\n💡 Eg: `byteviz bitwise --op xor 202 181`")]
    Bitwise {
        #[arg(long, short, value_parser = parse_operator_arg, help = "and, or, xor, not, left, right")]
        op: Option<BitwiseOperator>,

        #[arg(value_parser = parse_byte_arg, help = "Operand A")]
        a: Option<u8>,

        #[arg(value_parser = parse_byte_arg, help = "Operand B, ignored by not and the shifts")]
        b: Option<u8>,

        #[arg(long, short, value_name = "N", value_parser = parse_shift_arg, help = "Shift amount, 1 to 7")]
        shift: Option<ShiftAmount>,
    },

    #[clap(about = "🌐 Show how one character is encoded in UTF-8\n💡 Eg: `byteviz utf8 中`")]
    Utf8 {
        #[arg(value_name = "CHAR", help = "Only the first character is used")]
        text: Option<String>,
    },

    #[clap(about = "🎛️ Drive a widget one action per line, type `help` for the actions")]
    Interactive {
        #[arg(value_enum, default_value_t = WidgetKind::Byte)]
        widget: WidgetKind,
    },

    #[clap(about = "💎 Run a Ruby snippet and print its output\n💡 Eg: `byteviz run -e 'puts 0b1010 ^ 0b0110'`")]
    Run {
        #[arg(value_name = "FILE", help = "Script file, stdin is read if neither FILE nor --eval is given")]
        file: Option<String>,

        #[arg(long = "eval", short = 'e', value_name = "CODE", conflicts_with = "file")]
        code: Option<String>,
    },

    #[clap(about = "⚙️ Manage the config file, `--config` picks which one")]
    Config {
        #[command(subcommand)]
        action: ConfigSubcommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    #[clap(about = "📝 Write the default settings to the config file")]
    Init {
        #[arg(long, help = "Replace the file if it already exists")]
        force: bool,
    },

    #[clap(about = "📍 Print where the config file is read from")]
    Path,
}

fn parse_byte_arg(text: &str) -> Result<u8, String> {
    parse_radix(text).map_err(|report| error_message_of(&report))
}

fn parse_bit_index_arg(text: &str) -> Result<BitIndex, String> {
    parse_bit_index(text).map_err(|report| error_message_of(&report))
}

fn parse_filter_arg(text: &str) -> Result<AsciiFilter, String> {
    parse_ascii_filter(text).map_err(|report| error_message_of(&report))
}

fn parse_operator_arg(text: &str) -> Result<BitwiseOperator, String> {
    text.parse().map_err(|report| error_message_of(&report))
}

fn parse_shift_arg(text: &str) -> Result<ShiftAmount, String> {
    parse_radix(text)
        .and_then(ShiftAmount::try_new)
        .map_err(|report| error_message_of(&report))
}
