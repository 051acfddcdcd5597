//! Special-event factory.

use super::context::GenContext;
use crate::models::SpecialEvent;
use rand::Rng;

/// Calendar events scheduled into every new save.
pub const EVENT_NAMES: [&str; 4] = [
    "friendly match",
    "champions league game",
    "charity game",
    "promotional game",
];

/// Fixed ascending event calendar; events consume dates front-to-back, so
/// with 4 events the final slot stays free.
pub const EVENT_DATES: [u32; 5] = [5, 21, 34, 36, 53];

/// Reward draw bounds (inclusive lower, exclusive upper); the payout is
/// the draw times 100.
const REWARD_STEPS: (u32, u32) = (3, 8);

pub fn create_special_events(ctx: &mut GenContext) -> Vec<SpecialEvent> {
    EVENT_NAMES
        .iter()
        .zip(EVENT_DATES)
        .map(|(&name, date)| SpecialEvent {
            name: name.to_string(),
            reward: ctx.rng_mut().gen_range(REWARD_STEPS.0..REWARD_STEPS.1) * 100,
            date,
            id: ctx.next_event_id(),
        })
        .collect()
}
