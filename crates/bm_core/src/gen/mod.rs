//! Dataset generation.
//!
//! One synchronous pass: league teams, transfer market, event calendar,
//! then the assembled document. All randomness and id state lives in
//! [`GenContext`], so a seed reproduces a dataset byte-for-byte.

mod context;
mod event;
mod player;
mod rating;
mod team;

pub use context::GenContext;
pub use event::{create_special_events, EVENT_DATES, EVENT_NAMES};
pub use player::{create_players, ROSTER_SIZE};
pub use rating::{synthesize_rating, FLOOR_RANGE};
pub use team::{aggregate_team_rating, create_teams, TEAM_NAMES};

use crate::error::Result;
use crate::models::{GameDocument, START_DATE, STARTING_BUDGET, YOUR_TEAM_INDEX};

/// Free agents listed on the transfer market of a new save.
pub const MARKET_SIZE: usize = 25;

/// Run the full generation pass and assemble the document.
pub fn generate_document(ctx: &mut GenContext) -> Result<GameDocument> {
    let teams = create_teams(ctx)?;
    log::info!(
        "generated {} teams, {} names left in pool",
        teams.len(),
        ctx.names_left()
    );

    let market = create_players(ctx, MARKET_SIZE, "")?;
    log::info!("generated {} market free agents", market.len());

    let special_events = create_special_events(ctx);
    log::debug!("scheduled {} special events", special_events.len());

    Ok(GameDocument {
        teams,
        market,
        special_events,
        budget: STARTING_BUDGET,
        date: START_DATE,
        your_team: YOUR_TEAM_INDEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NamePool;
    use std::collections::HashSet;

    fn pool(count: usize) -> NamePool {
        NamePool::new((0..count).map(|i| format!("Player {}", i)).collect())
    }

    #[test]
    fn document_counts_and_constants() {
        let mut ctx = GenContext::new(pool(120), 42);
        let document = generate_document(&mut ctx).unwrap();

        assert_eq!(document.teams.len(), TEAM_NAMES.len());
        assert!(document
            .teams
            .iter()
            .all(|t| t.players.len() == ROSTER_SIZE));
        assert_eq!(document.market.len(), MARKET_SIZE);
        assert_eq!(document.special_events.len(), EVENT_NAMES.len());
        assert_eq!(document.budget, STARTING_BUDGET);
        assert_eq!(document.date, START_DATE);
        assert_eq!(document.your_team, YOUR_TEAM_INDEX);
        // 15 teams x 5 + 25 market players = 100 names consumed
        assert_eq!(ctx.names_left(), 20);
    }

    #[test]
    fn player_ids_share_one_counter_across_teams_and_market() {
        let mut ctx = GenContext::new(pool(100), 9);
        let document = generate_document(&mut ctx).unwrap();
        let ids: Vec<u32> = document
            .teams
            .iter()
            .flat_map(|t| t.players.iter())
            .chain(document.market.iter())
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn names_are_unique_across_the_whole_run() {
        let mut ctx = GenContext::new(pool(150), 13);
        let document = generate_document(&mut ctx).unwrap();
        let names: HashSet<&str> = document
            .teams
            .iter()
            .flat_map(|t| t.players.iter())
            .chain(document.market.iter())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names.len(), 100);
    }

    #[test]
    fn same_seed_reproduces_the_document() {
        let doc_a = generate_document(&mut GenContext::new(pool(120), 77)).unwrap();
        let doc_b = generate_document(&mut GenContext::new(pool(120), 77)).unwrap();
        assert_eq!(
            doc_a.to_json_pretty().unwrap(),
            doc_b.to_json_pretty().unwrap()
        );
    }

    #[test]
    fn exhaustion_mid_run_fails() {
        // 99 names cannot cover 15 rosters plus the 25-man market
        let mut ctx = GenContext::new(pool(99), 1);
        assert!(generate_document(&mut ctx).is_err());
    }
}
