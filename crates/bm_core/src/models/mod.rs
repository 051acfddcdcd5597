pub mod document;
pub mod event;
pub mod player;
pub mod team;

pub use document::{GameDocument, START_DATE, STARTING_BUDGET, YOUR_TEAM_INDEX};
pub use event::SpecialEvent;
pub use player::{Player, PlayerRating, Position};
pub use team::{PlayStyle, Team, TeamRating};
