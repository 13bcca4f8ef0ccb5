//! CLI argument definitions
//!
//! Every flag is optional: a bare invocation produces yesterday's row.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "attendance-report")]
#[command(
    about = "Count unique campus devices seen by Meraki yesterday and append them to the monthly attendance CSV",
    version
)]
pub(crate) struct Cli {
    /// Read settings from this TOML file instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Directory the monthly report files live in (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Timezone that decides what "yesterday" is (e.g., "America/New_York", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Only device names starting with this prefix are counted
    #[arg(long, value_name = "PREFIX")]
    pub(crate) prefix: Option<String>,

    /// Lookback window in seconds
    #[arg(long, value_name = "SECS")]
    pub(crate) timespan: Option<u64>,

    /// Count devices and print the row without touching the report file
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Print the month's report as a table after writing
    #[arg(long)]
    pub(crate) show: bool,

    /// Color output mode for --show
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Enable debug logging (per-page progress)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    pub(crate) fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["attendance-report"]).unwrap();
        assert!(!cli.dry_run);
        assert!(!cli.show);
        assert!(cli.prefix.is_none());
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "attendance-report",
            "-n",
            "--show",
            "--color",
            "never",
            "-o",
            "/srv/reports",
            "--timespan",
            "3600",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.show);
        assert!(!cli.use_color());
        assert_eq!(cli.output_dir, Some(PathBuf::from("/srv/reports")));
        assert_eq!(cli.timespan, Some(3600));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["attendance-report", "daily"]).is_err());
    }

    #[test]
    fn non_numeric_timespan_is_rejected() {
        assert!(Cli::try_parse_from(["attendance-report", "--timespan", "a day"]).is_err());
    }
}
