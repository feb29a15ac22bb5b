//! Loads a names file such as `"MARY","PATRICIA","LINDA"` into a table and
//! dumps every bucket.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chained_hash::{ChainOrder, ChainedHashTable, TableConfig};
use clap::Parser;
use log::{error, info};

#[derive(Parser, Debug)]
#[command(about = "Bulk-load a comma-separated names file into a chained hash table")]
struct Args {
    /// Input file of comma-separated, optionally double-quoted names
    #[arg(default_value = "names.txt")]
    path: PathBuf,

    /// Number of buckets (falls back to CHAINED_HASH_BUCKETS, then 5000)
    #[arg(short, long)]
    buckets: Option<TableConfig>,

    /// Print each chain newest entry first
    #[arg(long)]
    reversed: bool,

    /// Look up these names after loading
    #[arg(short, long = "lookup")]
    lookups: Vec<String>,
}

fn tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(|token| {
            token
                .chars()
                .filter(|&c| !matches!(c, '"' | '\r' | '\n'))
                .collect()
        })
        .collect()
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.path)?;
    let names = tokens(&text);

    let config = match args.buckets {
        Some(config) => config,
        None => TableConfig::from_env()?,
    };
    let mut table = ChainedHashTable::with_config(&config)?;
    let loaded = table.load_all(&names)?;
    info!(
        "Loaded {} of {} tokens from {}",
        loaded,
        names.len(),
        args.path.display()
    );

    let order = if args.reversed {
        ChainOrder::Reversed
    } else {
        ChainOrder::Insertion
    };
    table.print_table(order);
    for name in &args.lookups {
        table.print_value(name);
    }

    table.destroy();
    Ok(())
}

fn main() -> ExitCode {
    chained_hash::logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
