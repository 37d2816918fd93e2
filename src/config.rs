//! Configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console table
    Table,

    /// Calculation result as JSON
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Cart offers calculator configuration
#[derive(Debug, Parser)]
#[command(
    name = "cart-offers",
    about = "Calculate every applicable promotion for a cart and pick the best offer",
    long_about = None
)]
pub struct Config {
    /// Promotion catalogue file (YAML)
    #[arg(
        long,
        env = "OFFERS_CATALOG",
        default_value = "./fixtures/promotions/default.yml"
    )]
    pub catalog: PathBuf,

    /// Cart file (YAML or JSON)
    #[arg(long, env = "OFFERS_CART", default_value = "./fixtures/carts/default.yml")]
    pub cart: PathBuf,

    /// Calculate as a VIP customer
    #[arg(long, env = "OFFERS_VIP", default_value_t = false)]
    pub vip: bool,

    /// ISO currency code for displayed amounts (USD, GBP, EUR)
    #[arg(long, env = "OFFERS_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// Output format (table, json)
    #[arg(long, env = "OFFERS_OUTPUT", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flags() -> TestResult {
        let config = Config::try_parse_from([
            "cart-offers",
            "--catalog",
            "promos.yml",
            "--cart",
            "cart.json",
            "--vip",
            "--currency",
            "GBP",
            "--output",
            "json",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.catalog, PathBuf::from("promos.yml"));
        assert_eq!(config.cart, PathBuf::from("cart.json"));
        assert!(config.vip);
        assert_eq!(config.currency, "GBP");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn rejects_unknown_output_format() {
        let result = Config::try_parse_from(["cart-offers", "--output", "xml"]);

        assert!(result.is_err(), "xml is not an output format");
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
