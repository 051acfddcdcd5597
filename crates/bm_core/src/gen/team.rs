//! Team factory and rating aggregation.

use super::context::GenContext;
use super::player::{create_players, ROSTER_SIZE};
use crate::error::{CoreError, Result};
use crate::models::{PlayStyle, Player, Team, TeamRating};
use rand::Rng;

/// The 15 franchises present in every new save.
pub const TEAM_NAMES: [&str; 15] = [
    "Raptors",
    "Knicks",
    "City Thunder",
    "Lakers",
    "Warriors",
    "Spurs",
    "Bulls",
    "Suns",
    "Bucks",
    "Rockets",
    "Mavericks",
    "Cavaliers",
    "Jazz",
    "Celtics",
    "Heat",
];

/// Chemistry draw bounds (inclusive lower, exclusive upper).
const CHEMISTRY_RANGE: (u8, u8) = (65, 90);

/// Aggregate a 5-man roster into the team rating bundle.
///
/// attack averages the four offensive attribute pools, defense the two
/// defensive ones; chemistry is an independent draw and overall is the
/// integer mean of the roster's player overalls.
pub fn aggregate_team_rating<R: Rng>(rng: &mut R, players: &[Player]) -> Result<TeamRating> {
    if players.len() != ROSTER_SIZE {
        return Err(CoreError::InvalidRosterSize {
            expected: ROSTER_SIZE,
            found: players.len(),
        });
    }

    let sum = |pick: fn(&Player) -> u8| -> u32 { players.iter().map(|p| u32::from(pick(p))).sum() };

    let attack = (sum(|p| p.rating.shooting)
        + sum(|p| p.rating.passing)
        + sum(|p| p.rating.dribbling)
        + sum(|p| p.rating.pace))
        / 20;
    let defense = (sum(|p| p.rating.defending) + sum(|p| p.rating.physicality)) / 10;
    let overall = sum(|p| p.rating.overall) / ROSTER_SIZE as u32;

    Ok(TeamRating {
        attack: attack as u8,
        defense: defense as u8,
        chemistry: rng.gen_range(CHEMISTRY_RANGE.0..CHEMISTRY_RANGE.1),
        overall: overall as u8,
    })
}

/// Build the full 15-team league.
pub fn create_teams(ctx: &mut GenContext) -> Result<Vec<Team>> {
    let mut teams = Vec::with_capacity(TEAM_NAMES.len());
    for team_name in TEAM_NAMES {
        let players = create_players(ctx, ROSTER_SIZE, team_name)?;
        let rating = aggregate_team_rating(ctx.rng_mut(), &players)?;
        let play_style = PlayStyle::ALL[ctx.rng_mut().gen_range(0..PlayStyle::ALL.len())];
        teams.push(Team {
            name: team_name.to_string(),
            description: format!("Team {}", team_name),
            play_style,
            rating,
            players,
            id: ctx.next_team_id(),
        });
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NamePool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn league_pool() -> NamePool {
        NamePool::new((0..100).map(|i| format!("Player {}", i)).collect())
    }

    #[test]
    fn builds_fifteen_teams_with_increasing_ids() {
        let mut ctx = GenContext::new(league_pool(), 11);
        let teams = create_teams(&mut ctx).unwrap();
        assert_eq!(teams.len(), TEAM_NAMES.len());
        for (index, team) in teams.iter().enumerate() {
            assert_eq!(team.id, index as u32 + 1);
            assert_eq!(team.name, TEAM_NAMES[index]);
            assert_eq!(team.description, format!("Team {}", TEAM_NAMES[index]));
            assert_eq!(team.players.len(), ROSTER_SIZE);
        }
    }

    #[test]
    fn rating_matches_roster_sums() {
        let mut ctx = GenContext::new(league_pool(), 5);
        let players = create_players(&mut ctx, ROSTER_SIZE, "Jazz").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let rating = aggregate_team_rating(&mut rng, &players).unwrap();

        let total =
            |pick: fn(&Player) -> u8| -> u32 { players.iter().map(|p| u32::from(pick(p))).sum() };
        let offense = total(|p| p.rating.shooting)
            + total(|p| p.rating.passing)
            + total(|p| p.rating.dribbling)
            + total(|p| p.rating.pace);
        assert_eq!(u32::from(rating.attack), offense / 20);

        let backline = total(|p| p.rating.defending) + total(|p| p.rating.physicality);
        assert_eq!(u32::from(rating.defense), backline / 10);

        assert_eq!(u32::from(rating.overall), total(|p| p.rating.overall) / 5);
        assert!(rating.chemistry >= 65 && rating.chemistry < 90);
    }

    #[test]
    fn rejects_partial_rosters() {
        let mut ctx = GenContext::new(league_pool(), 2);
        let players = create_players(&mut ctx, 3, "").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = aggregate_team_rating(&mut rng, &players).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidRosterSize {
                expected: 5,
                found: 3
            }
        ));
    }
}
