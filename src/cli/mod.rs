//! Command line front end: log categorized lines, traces, and tables from
//! shell scripts, and inspect category bits.

mod commands;

pub use commands::{cmd_categories, cmd_hint, cmd_log, cmd_table, cmd_trace, run};

use crate::category::{Category, CategoryMask};
use crate::logger::GateMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Category for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    Net,
    Model,
    Business,
    View,
    Config,
    Trace,
}

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Net => Self::Net,
            CategoryArg::Model => Self::Model,
            CategoryArg::Business => Self::Business,
            CategoryArg::View => Self::View,
            CategoryArg::Config => Self::Config,
            CategoryArg::Trace => Self::Trace,
        }
    }
}

/// Gate mode for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GateArg {
    Trace,
    Category,
}

impl From<GateArg> for GateMode {
    fn from(gate: GateArg) -> Self {
        match gate {
            GateArg::Trace => Self::Trace,
            GateArg::Category => Self::Category,
        }
    }
}

/// catlog - category-gated console logging.
#[derive(Parser)]
#[command(
    name = "catlog",
    version,
    about = "Category-gated console logging from the command line"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Enabled categories, e.g. "net|trace", "all", "none", or a number
    #[arg(long, global = true, value_name = "MASK")]
    pub mask: Option<CategoryMask>,
    /// Which bit gates categorized lines
    #[arg(long, global = true, value_enum)]
    pub gate: Option<GateArg>,
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a categorized message.
    Log {
        /// Category
        #[arg(value_enum)]
        category: CategoryArg,
        /// Description printed before the message
        #[arg(short, long)]
        description: Option<String>,
        /// Message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print a plain trace line.
    Trace {
        /// Line color as #RRGGBB
        #[arg(long, value_name = "HEX")]
        color: Option<String>,
        /// Message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print JSON as a table.
    Table {
        /// Caption printed above the table
        #[arg(short, long)]
        description: Option<String>,
        /// JSON value (reads stdin if omitted or "-")
        json: Option<String>,
    },
    /// List categories with their bits and labels.
    Categories,
    /// Read a stack trace from stdin and print its caller hint.
    Hint,
}
