//! Cart Offers CLI
//!
//! Loads a cart and a promotion catalogue, then prints every applicable offer
//! and the best one.

use std::{
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

use anyhow::Result;
use tracing::{error, info};

use cart_offers::{
    calculator::PromotionCalculator,
    catalog::YamlCatalog,
    config::{Config, OutputFormat},
    fixtures::load_cart,
    money::currency,
    observability::init_logging,
    report::OfferReport,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            // Help and version requests are reported through clap as errors too.
            _ = err.print();

            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> Result<()> {
    let currency = currency(&config.currency)?;
    let items = load_cart(&config.cart).await?;

    info!(
        cart = %config.cart.display(),
        catalog = %config.catalog.display(),
        vip = config.vip,
        "calculating offers"
    );

    let calculator = PromotionCalculator::new(YamlCatalog::new(&config.catalog));

    let start = Instant::now();
    let result = calculator.calculate(&items, config.vip).await?;
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.output {
        OutputFormat::Table => OfferReport::new(&result, currency, elapsed).write_to(&mut handle)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &result)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
