//! [`Args`] definitions.

use clap::Parser;

/// Checkout calculator of the tool rental system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Code of the tool to rent.
    pub tool_code: String,

    /// Number of days the tool is rented for.
    #[arg(allow_hyphen_values = true)]
    pub rental_days: i64,

    /// Discount percentage to apply.
    #[arg(allow_hyphen_values = true)]
    pub discount_percent: i64,

    /// Checkout date in `MM/DD/YY` format.
    pub checkout_date: String,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
