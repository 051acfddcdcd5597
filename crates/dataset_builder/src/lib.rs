//! Dataset Builder Library
//!
//! Name list → generated league/market/events → indented JSON document.

use anyhow::{Context, Result};
use bm_core::{generate_document, GameDocument, GenContext, NamePool};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Summary of one dataset build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Teams written to the document
    pub teams: usize,
    /// Players rostered across all teams
    pub rostered_players: usize,
    /// Free agents on the transfer market
    pub market_players: usize,
    /// Scheduled special events
    pub special_events: usize,
    /// Output document size (bytes)
    pub output_size: u64,
    /// RNG seed, when the build was pinned with one
    pub seed: Option<u64>,
    /// Creation time (RFC3339)
    pub created_at: String,
}

/// Generate the starting dataset and write it as indented JSON.
///
/// # Arguments
///
/// * `names_path` - Newline-delimited candidate name list (needs at least
///   100 usable names)
/// * `out_path` - Output JSON document path, overwritten if present
/// * `seed` - Optional RNG seed for a reproducible dataset
///
/// # Returns
///
/// Metadata describing the generated document
pub fn build_dataset(
    names_path: &Path,
    out_path: &Path,
    seed: Option<u64>,
) -> Result<DatasetMetadata> {
    let names = NamePool::load(names_path)
        .with_context(|| format!("Failed to load name list: {}", names_path.display()))?;

    let mut ctx = match seed {
        Some(seed) => GenContext::new(names, seed),
        None => GenContext::from_entropy(names),
    };

    let document = generate_document(&mut ctx).context("Dataset generation failed")?;

    let json = document
        .to_json_pretty()
        .context("Failed to serialize document")?;

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(out_path, &json)
        .with_context(|| format!("Failed to write output file: {}", out_path.display()))?;

    Ok(build_metadata(&document, json.len() as u64, seed))
}

fn build_metadata(document: &GameDocument, output_size: u64, seed: Option<u64>) -> DatasetMetadata {
    DatasetMetadata {
        teams: document.teams.len(),
        rostered_players: document.teams.iter().map(|t| t.players.len()).sum(),
        market_players: document.market.len(),
        special_events: document.special_events.len(),
        output_size,
        seed,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}
