use std::path::PathBuf;

use anyhow::Result;
use arrow::util::pretty::pretty_format_batches;

use penguin_dash::data::{export, loader};

/// Convert a penguin table (or the built-in one) to Parquet.
///
/// Usage: `export_parquet [input.csv|.json|.parquet] [output.parquet]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("penguins.parquet"));

    let dataset = match &input {
        Some(path) => loader::load_file(path)?,
        None => loader::load_embedded()?,
    };
    log::info!("Read {} penguins", dataset.len());

    export::write_parquet(&dataset, &output)?;

    let preview = export::to_record_batch(&dataset)?.slice(0, dataset.len().min(5));
    println!("{}", pretty_format_batches(&[preview])?);
    println!(
        "Wrote {} penguins ({} species) to {}",
        dataset.len(),
        dataset.species().len(),
        output.display()
    );
    Ok(())
}
