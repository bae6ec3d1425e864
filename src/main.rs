mod config;
#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Mode};
use keypad_calc::{run_script, Calculator};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.keys.is_some())?;

    let calculator = Calculator::with_limits(cli.limits());
    info!(limits = ?calculator.limits(), "calculator ready");

    if let Some(script) = &cli.keys {
        return run_headless(calculator, script);
    }

    info!(mode = ?cli.mode, "starting keypad");
    let result = match cli.mode {
        Mode::Tui => run_tui_mode(calculator),
        Mode::Line => run_line_mode(calculator),
    };
    info!("keypad closed");
    result
}

// Raw-mode front ends own the terminal, so they only log when a file is given.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_headless(mut calculator: Calculator, script: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for display in run_script(&mut calculator, script) {
        writeln!(out, "{}", display)?;
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui_mode(calculator: Calculator) -> Result<()> {
    tui_mode::run_tui(calculator)
}

#[cfg(not(feature = "tui"))]
fn run_tui_mode(_calculator: Calculator) -> Result<()> {
    anyhow::bail!("this build has no TUI keypad; rebuild with `--features tui`")
}

#[cfg(feature = "line")]
fn run_line_mode(calculator: Calculator) -> Result<()> {
    line_mode::run_line(calculator)
}

#[cfg(not(feature = "line"))]
fn run_line_mode(_calculator: Calculator) -> Result<()> {
    anyhow::bail!("this build has no line keypad; rebuild with `--features line`")
}
