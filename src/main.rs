use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use fda_link_scraper::config::{DEFAULT_BASE_URL, DEFAULT_INPUT, DEFAULT_OUTPUT};
use fda_link_scraper::{batch, input_loader, logger, reporter};
use fda_link_scraper::{Fetcher, HttpTransport, ScrapeConfig, ThreadSleeper};

/// Look up FDA registration detail links and save them to a spreadsheet.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Text file with one registration code per line (or an .xlsx with codes in column A).
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output spreadsheet; use a .csv extension for CSV instead of xlsx.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Requests per code, including the first.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    retries: u32,

    #[arg(long, default_value_t = 10.0)]
    timeout_secs: f64,

    /// Base pause after a failed request; up to one second is added at random.
    #[arg(long, default_value_t = 2.0)]
    retry_delay_secs: f64,

    /// Base pause between codes; up to one second is added at random.
    #[arg(long, default_value_t = 1.0)]
    politeness_delay_secs: f64,
}

impl Cli {
    fn scrape_config(&self) -> Result<ScrapeConfig> {
        Ok(ScrapeConfig {
            base_url: self.base_url.clone(),
            max_attempts: self.retries,
            request_timeout: secs("--timeout-secs", self.timeout_secs)?,
            retry_delay: secs("--retry-delay-secs", self.retry_delay_secs)?,
            politeness_delay: secs("--politeness-delay-secs", self.politeness_delay_secs)?,
        })
    }
}

fn secs(flag: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).with_context(|| format!("{} must be a non-negative number", flag))
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();
    let config = cli.scrape_config()?;
    info!("Starting FDA link scraper...");

    let identifiers = input_loader::load_identifiers(&cli.input)
        .with_context(|| format!("failed to load identifiers from {:?}", cli.input))?;

    let transport = HttpTransport::new(config.request_timeout)?;
    let fetcher = Fetcher::new(&config, transport, ThreadSleeper)?;
    let table = batch::run_batch(&identifiers, &fetcher, &ThreadSleeper, config.politeness_delay);

    reporter::write_table(&table, &cli.output)
        .with_context(|| format!("failed to save results to {:?}", cli.output))?;
    info!("Save {} success", cli.output.display());

    print!("{}", reporter::render_summary(&table));
    Ok(())
}
