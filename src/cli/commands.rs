//! Subcommand implementations. Each returns the process exit code.

use super::{Cli, Command};
use crate::caller::stack::hint_from_trace;
use crate::category::Category;
use crate::config::Config;
use crate::fmt::{Color, render_table};
use crate::logger::{GateMode, Logger};
use serde_json::{Value, json};
use std::io;
use std::process::ExitCode;

/// Loads config, applies flag overrides, and dispatches the subcommand.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let config = match &cli.config {
        Some(path) if !path.exists() => {
            eprintln!("Error loading config: {}", crate::Error::ConfigNotFound(path.clone()));
            return ExitCode::FAILURE;
        }
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.mask() {
        eprintln!("Error loading config: {e}");
        return ExitCode::FAILURE;
    }

    // Call sites inside this binary say nothing useful about the user's script.
    config.terminal.caller = "none".to_string();
    if cli.no_color {
        config.terminal.colors = false;
    }
    if let Some(gate) = cli.gate {
        config.general.gate = match GateMode::from(gate) {
            GateMode::Trace => "trace",
            GateMode::Category => "category",
        }
        .to_string();
    }

    let logger = Logger::from_config(&config);
    logger.set_enabled_categories(cli.mask);

    let code = match cli.command {
        Command::Log {
            category,
            description,
            message,
        } => cmd_log(&logger, category.into(), &message, description.as_deref()),
        Command::Trace { color, message } => cmd_trace(&logger, &message, color.as_deref()),
        Command::Table { description, json } => {
            cmd_table(&logger, json.as_deref(), description.as_deref())
        }
        Command::Categories => cmd_categories(&logger),
        Command::Hint => cmd_hint(),
    };

    let _ = logger.flush();
    code
}

#[must_use]
pub fn cmd_log(
    logger: &Logger,
    category: Category,
    message: &[String],
    description: Option<&str>,
) -> ExitCode {
    logger.log(category, message.join(" "), description);
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_trace(logger: &Logger, message: &[String], color: Option<&str>) -> ExitCode {
    let color = match color {
        None => logger.color(Category::Trace),
        Some(hex) => match Color::try_from_hex(hex) {
            Some(color) => color,
            None => {
                eprintln!("Invalid color: {hex} (expected #RRGGBB)");
                return ExitCode::FAILURE;
            }
        },
    };
    logger.trace_with_color(message.join(" "), color);
    ExitCode::SUCCESS
}

/// Handles `catlog table [<json>]`.
#[must_use]
pub fn cmd_table(logger: &Logger, input: Option<&str>, description: Option<&str>) -> ExitCode {
    let text = match input {
        None | Some("-") => match io::read_to_string(io::stdin()) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        },
        Some(text) => text.to_string(),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(value) => {
            logger.table(&value, description);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Always printed: the user asked for it, so the mask doesn't apply.
#[must_use]
pub fn cmd_categories(logger: &Logger) -> ExitCode {
    let rows: Vec<Value> = Category::all()
        .into_iter()
        .map(|c| {
            json!({
                "name": c.as_str(),
                "bit": c.bit(),
                "label": logger.label(c),
                "enabled": logger.is_enabled(c),
            })
        })
        .collect();
    for line in render_table(&Value::Array(rows)) {
        println!("{line}");
    }
    println!("mask: {} ({})", logger.enabled_categories(), logger.enabled_categories().bits());
    ExitCode::SUCCESS
}

/// Handles `catlog hint < trace.txt`.
#[must_use]
pub fn cmd_hint() -> ExitCode {
    match io::read_to_string(io::stdin()) {
        Ok(trace) => {
            println!("{}", hint_from_trace(&trace));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to read stdin: {e}");
            ExitCode::FAILURE
        }
    }
}
