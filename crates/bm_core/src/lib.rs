//! # bm_core - Basketball Management Dataset Generation
//!
//! Core library for generating the static starting dataset of the
//! basketball management game: the 15-team league, the transfer-market
//! free-agent pool, and the season's special-event calendar.
//!
//! ## Features
//! - Reproducible generation (same seed + same name list = same dataset)
//! - Explicit generation context, no process-global state
//! - serde document model matching the game client's JSON schema

pub mod data;
pub mod error;
pub mod gen;
pub mod models;

pub use data::NamePool;
pub use error::{CoreError, Result};
pub use gen::{generate_document, GenContext, MARKET_SIZE, ROSTER_SIZE, TEAM_NAMES};
pub use models::{
    GameDocument, PlayStyle, Player, PlayerRating, Position, SpecialEvent, Team, TeamRating,
    START_DATE, STARTING_BUDGET, YOUR_TEAM_INDEX,
};
