use clap::{Parser, ValueEnum};
use keypad_calc::calc_engine::{DEFAULT_MAX_DIGITS, DEFAULT_PRECISION};
use keypad_calc::Limits;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Full-screen keypad (ratatui)
    Tui,
    /// Single-line raw keypad (termion)
    Line,
}

#[derive(Parser, Debug)]
#[command(
    name = "keypad-calc",
    about = "Four-function keypad calculator for the terminal",
    version
)]
pub struct Cli {
    /// Front end to start
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    pub mode: Mode,

    /// Digits accepted in one entry
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS as u8, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub max_digits: u8,

    /// Fractional digits shown for computed results
    #[arg(long, default_value_t = DEFAULT_PRECISION as u8, value_parser = clap::value_parser!(u8).range(0..=15))]
    pub precision: u8,

    /// Press these keys without a UI and print the display after each one
    #[arg(long, value_name = "SCRIPT")]
    pub keys: Option<String>,

    /// Write logs to this file (RUST_LOG sets the filter)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn limits(&self) -> Limits {
        Limits {
            max_digits: usize::from(self.max_digits),
            precision: usize::from(self.precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["keypad-calc"]).unwrap();
        assert_eq!(cli.mode, Mode::Tui);
        assert_eq!(cli.limits(), Limits::default());
        assert!(cli.keys.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_custom_limits() {
        let cli = Cli::try_parse_from([
            "keypad-calc",
            "--mode",
            "line",
            "--max-digits",
            "8",
            "--precision",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.mode, Mode::Line);
        assert_eq!(
            cli.limits(),
            Limits {
                max_digits: 8,
                precision: 3
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_limits() {
        assert!(Cli::try_parse_from(["keypad-calc", "--max-digits", "0"]).is_err());
        assert!(Cli::try_parse_from(["keypad-calc", "--max-digits", "18"]).is_err());
        assert!(Cli::try_parse_from(["keypad-calc", "--precision", "16"]).is_err());
    }

    #[test]
    fn test_key_script() {
        let cli = Cli::try_parse_from(["keypad-calc", "--keys", "7+3="]).unwrap();
        assert_eq!(cli.keys.as_deref(), Some("7+3="));
    }
}
