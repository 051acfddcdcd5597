//! Player rating synthesis.
//!
//! Each rating starts from a floor drawn in [65, 83); the six base
//! attributes are then drawn from position-specific ranges parameterized
//! by that floor, and the overall is the integer mean of the three best
//! attributes.

use crate::models::{PlayerRating, Position};
use rand::Rng;

/// Inclusive lower / exclusive upper bound of one attribute draw.
type AttrRange = (u8, u8);

/// Floor draw bounds shared by every position.
pub const FLOOR_RANGE: AttrRange = (65, 83);

/// Per-position draw ranges in attribute order: pace, shooting, defending,
/// passing, dribbling, physicality. The whole table lives here so the
/// bounds stay auditable against the game's balance sheet.
fn attribute_ranges(position: Position, floor: u8) -> [AttrRange; 6] {
    match position {
        Position::SmallForward => [
            (floor, 90),
            (floor, 88),
            (floor.min(70), 77),
            (72, 85),
            (floor, 89),
            (65, 83),
        ],
        Position::ShootingGuard => [
            (75, 90),
            (floor, 90),
            (73, 90),
            (69, 84),
            (floor, 90),
            (78, 90),
        ],
        Position::PowerForward => [
            (70, 87),
            (70, 90),
            (72, 83),
            (floor, 90),
            (floor, 90),
            (68, 90),
        ],
        Position::PointGuard => [
            (floor, 90),
            (floor, 87),
            (floor, 90),
            (floor + 4, 90),
            (floor + 3, 90),
            (floor, 86),
        ],
        Position::Center => [
            (floor, 87),
            (floor, 87),
            (floor + 5, 90),
            (floor, 89),
            (floor - 2, 86),
            (floor.max(80), 90),
        ],
    }
}

/// Integer mean of the three largest attribute values.
fn top_three_average(mut attributes: [u8; 6]) -> u8 {
    attributes.sort_unstable();
    let top: u32 = attributes[3..].iter().map(|&v| u32::from(v)).sum();
    (top / 3) as u8
}

/// Draw a full rating bundle for `position`.
pub fn synthesize_rating<R: Rng>(rng: &mut R, position: Position) -> PlayerRating {
    let floor = rng.gen_range(FLOOR_RANGE.0..FLOOR_RANGE.1);
    let [pace, shooting, defending, passing, dribbling, physicality] =
        attribute_ranges(position, floor).map(|(low, high)| {
            // Every table entry keeps low < high for any legal floor.
            debug_assert!(low < high, "empty attribute range for floor {}", floor);
            rng.gen_range(low..high)
        });
    let overall = top_three_average([pace, shooting, defending, passing, dribbling, physicality]);

    PlayerRating {
        pace,
        shooting,
        defending,
        passing,
        dribbling,
        physicality,
        overall,
    }
}
