//! Dataset Builder CLI
//!
//! Generates the starting dataset (league, transfer market, event
//! calendar) that the game client loads on a new save.

use anyhow::Result;
use clap::Parser;
use dataset_builder::{build_dataset, DatasetMetadata};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dataset_builder")]
#[command(about = "Generate the starting game dataset", long_about = None)]
struct Cli {
    /// Input name list (one candidate player name per line)
    #[arg(long, default_value = "data/male_names.txt")]
    names: PathBuf,

    /// Output JSON document path
    #[arg(long, default_value = "game.json")]
    out: PathBuf,

    /// RNG seed for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Output metadata JSON file
    #[arg(long)]
    metadata: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🔨 Building starting dataset...");
    println!("   Names:  {}", cli.names.display());
    println!("   Output: {}", cli.out.display());
    if let Some(seed) = cli.seed {
        println!("   Seed:   {}", seed);
    }

    let meta = build_dataset(&cli.names, &cli.out, cli.seed)?;

    print_metadata(&meta);

    if let Some(metadata_path) = cli.metadata {
        save_metadata(&metadata_path, &meta)?;
    }

    Ok(())
}

fn print_metadata(meta: &DatasetMetadata) {
    println!("\n✅ Dataset built successfully!");
    println!(
        "   Teams:          {} ({} rostered players)",
        meta.teams, meta.rostered_players
    );
    println!("   Market:         {} free agents", meta.market_players);
    println!("   Special events: {}", meta.special_events);
    println!(
        "   Document size:  {} bytes ({:.2} KB)",
        meta.output_size,
        meta.output_size as f64 / 1024.0
    );
    println!("   Created:        {}", meta.created_at);
}

fn save_metadata(path: &PathBuf, meta: &DatasetMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}
