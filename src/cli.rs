//! CLI argument parsing via clap.

use clap::Parser;

/// Load a terminal color theme and print it as JSON.
#[derive(Debug, Parser)]
#[command(name = "waltheme", version)]
pub struct Args {
    /// Theme name, path to a theme file, or one of `random`, `random_dark`,
    /// `random_light`, `random_user`.
    #[arg(required_unless_present_any = ["list", "last"])]
    pub theme: Option<String>,

    /// Use light themes instead of dark ones.
    #[arg(short = 'l', long = "light")]
    pub light: bool,

    /// List available themes for the selected variant and exit.
    #[arg(long = "list", conflicts_with = "last")]
    pub list: bool,

    /// Print the last theme file that was applied and exit.
    #[arg(long = "last")]
    pub last: bool,

    /// Path to settings file (default: ~/.config/waltheme/waltheme.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the default alpha for themes that do not set one.
    #[arg(long = "alpha", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub alpha: Option<u8>,

    /// Only log warnings and errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
