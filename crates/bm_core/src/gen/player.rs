//! Player factory.

use super::context::GenContext;
use super::rating::synthesize_rating;
use crate::error::Result;
use crate::models::{Player, Position};
use rand::Rng;

/// Number of players a full team roster carries.
pub const ROSTER_SIZE: usize = 5;

/// Transfer listing price derived from the overall rating.
fn player_price(overall: u8) -> u32 {
    175 + u32::from(overall).pow(2) / 30
}

/// Create `count` players bound to `team_name` (empty string marks a
/// transfer-market free agent).
///
/// A full-roster request (`count == 5`) assigns one player per position in
/// canonical order; any other count draws positions uniformly at random.
pub fn create_players(ctx: &mut GenContext, count: usize, team_name: &str) -> Result<Vec<Player>> {
    let mut players = Vec::with_capacity(count);
    for slot in 0..count {
        let position = if count == ROSTER_SIZE {
            Position::ALL[slot]
        } else {
            Position::ALL[ctx.rng_mut().gen_range(0..Position::ALL.len())]
        };
        let name = ctx.draw_name()?;
        let rating = synthesize_rating(ctx.rng_mut(), position);
        let price = player_price(rating.overall);
        players.push(Player {
            name,
            position,
            rating,
            current_team: team_name.to_string(),
            price,
            id: ctx.next_player_id(),
        });
    }
    Ok(players)
}
