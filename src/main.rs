use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wallet::application::engine::{Outcome, WalletEngine};
use wallet::domain::bitcoin::Bitcoin;
use wallet::domain::wallet::Wallet;
use wallet::interfaces::csv::operation_reader::OperationReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file (columns: type, amount)
    input: PathBuf,

    /// Balance the wallet starts with
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    initial_balance: f64,

    /// Apply every operation as its own task instead of one after another
    #[arg(long)]
    concurrent: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let initial_balance = Bitcoin::from(cli.initial_balance);
    if !initial_balance.is_finite() {
        return Err(miette!(
            "initial balance {} is not a finite number",
            initial_balance
        ));
    }
    let engine = WalletEngine::new(Wallet::with_balance(initial_balance));

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);

    // Readable rows only; bad rows are reported and skipped.
    let ops = reader.operations().filter_map(|op_result| match op_result {
        Ok(op) => Some(op),
        Err(e) => {
            warn!("Error reading operation: {}", e);
            None
        }
    });

    if cli.concurrent {
        let ops: Vec<_> = ops.collect();
        info!(count = ops.len(), "applying operations concurrently");
        for result in engine.apply_concurrently(ops).await {
            if let Err(e) = result {
                warn!("Error processing operation: {}", e);
            }
        }
    } else {
        for op in ops {
            match engine.apply(op) {
                Ok(Outcome::Balance(balance)) => println!("balance: {}", balance),
                Ok(Outcome::Applied) => {}
                Err(e) => warn!("Error processing operation: {}", e),
            }
        }
    }

    println!("final balance: {}", engine.into_balance());

    Ok(())
}
