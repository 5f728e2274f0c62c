use anyhow::{Context, Result};
use clap::Parser;
use fpminer::output::write_results;
use fpminer::{fp_growth, Dataset, MinSupport, MiningConfig};
use std::path::PathBuf;
use std::time::Instant;

/// Mine all frequent itemsets of a transaction dataset with FP-Growth.
#[derive(Debug, Parser)]
#[command(name = "fpminer", version, about)]
struct Cli {
    /// Dataset file, one transaction per line
    dataset: PathBuf,

    /// Minimum support as a percentage of all transactions, in (0, 100]
    #[arg(allow_negative_numbers = true)]
    minsup_percent: f64,

    /// Directory receiving MiningResult_<dataset>.txt
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Always recurse, even into trees that are a single path
    #[arg(long)]
    no_single_path: bool,

    /// Abort when more FP-tree nodes than this would be alive at once
    #[arg(long, value_name = "N")]
    max_tree_nodes: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let min_support = MinSupport::new(cli.minsup_percent)?;

    let start = Instant::now();
    let dataset = Dataset::load(&cli.dataset)?;
    let min_count = min_support.to_count(dataset.len());

    let config = MiningConfig::new(min_count)
        .with_single_path_shortcut(!cli.no_single_path)
        .with_max_tree_nodes(cli.max_tree_nodes);
    let frequent = fp_growth(dataset.transactions(), &config)
        .with_context(|| format!("mining {} failed", cli.dataset.display()))?;

    let output_path = write_results(&cli.output_dir, &cli.dataset, &frequent)?;
    let elapsed = start.elapsed();

    println!("minsup = {}% = {}", min_support.percent(), min_count);
    println!("|FPs| = {}", frequent.len());
    println!("Runtime: {:.3} s", elapsed.as_secs_f64());
    println!("Output written to {}", output_path.display());

    Ok(())
}
