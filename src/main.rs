use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use compute_sales::{compute, load_catalogue, load_sales, Catalogue, Report, DEFAULT_OUTPUT};

#[derive(Parser)]
/// Prices a sales record against a price catalogue and prints an invoice.
struct Args {
    /// Path to the price catalogue JSON file
    price_catalogue: PathBuf,
    /// Path to the sales record JSON file
    sales_record: PathBuf,
    /// Where to write the invoice
    #[arg(short, long, env = "COMPUTE_SALES_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let start = Instant::now();
    let (entries, sales) = match (
        load_catalogue(&args.price_catalogue),
        load_sales(&args.sales_record),
    ) {
        (Ok(entries), Ok(sales)) => (entries, sales),
        (entries, sales) => {
            for e in [entries.err(), sales.err()].into_iter().flatten() {
                println!("Error: {:#}", anyhow::Error::from(e));
            }
            return Ok(ExitCode::FAILURE);
        }
    };
    let catalogue = Catalogue::new(entries);
    debug!(titles = catalogue.len(), sales = sales.len(), "inputs loaded");
    let invoice = compute(&catalogue, &sales);
    let elapsed = start.elapsed();
    for diag in &invoice.diagnostics {
        info!("{diag}");
        println!("Warning: {diag}");
    }
    let report = Report::new(&invoice);
    print!("{report}");
    report.with_elapsed(elapsed).write_to(&args.output)?;
    debug!(?elapsed, output = %args.output.display(), "report written");
    Ok(ExitCode::SUCCESS)
}
