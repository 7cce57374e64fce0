//! onehot - shuffle category labels and print their one-hot encoding
//!
//! Builds `--count` copies of every label, shuffles them, encodes the result
//! as a 0/1 table with one column per label and prints its first `--rows` rows.

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use phonebook::cli;
use phonebook::config::init_logging;
use phonebook::onehot::{check_labels, generate_labels, OneHotTable};

fn main() -> Result<()> {
    let args = cli::parse_onehot_args()?;
    init_logging(args.verbose);
    debug!("Arguments: {:?}", args);

    check_labels(&args.labels).context("Cannot encode labels")?;

    let sequence = match args.seed {
        Some(seed) => generate_labels(&args.labels, args.count, &mut StdRng::seed_from_u64(seed)),
        None => generate_labels(&args.labels, args.count, &mut thread_rng()),
    };
    debug!("Generated {} labels", sequence.len());

    let table = OneHotTable::encode(&sequence, &args.labels);
    println!("{}", table.head(args.rows));

    Ok(())
}
