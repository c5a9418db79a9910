//! `catlog` binary.
//!
//! Usage:
//!   catlog log <category> <message...> [-d <description>]
//!   catlog trace <message...> [--color #RRGGBB]
//!   catlog table [<json>|-] [-d <caption>]
//!   catlog categories
//!   catlog hint < stacktrace.txt
//!
//! Global flags: --config <path>, --mask <mask>, --gate <trace|category>, --no-color

use catlog::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
