use super::player::Player;
use serde::{Deserialize, Serialize};

/// Tactical identity assigned to a generated team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    UltraDefensive,
    Defensive,
    Balanced,
    Attacking,
    UltraAttacking,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 5] = [
        PlayStyle::UltraDefensive,
        PlayStyle::Defensive,
        PlayStyle::Balanced,
        PlayStyle::Attacking,
        PlayStyle::UltraAttacking,
    ];

    /// Canonical style code string (e.g. "ultra_defensive"), identical to
    /// the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            PlayStyle::UltraDefensive => "ultra_defensive",
            PlayStyle::Defensive => "defensive",
            PlayStyle::Balanced => "balanced",
            PlayStyle::Attacking => "attacking",
            PlayStyle::UltraAttacking => "ultra_attacking",
        }
    }
}

/// Aggregate rating bundle for a team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRating {
    pub attack: u8,
    pub defense: u8,
    pub chemistry: u8,
    pub overall: u8,
}

/// A generated team record with its 5-man roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "team name")]
    pub name: String,
    pub description: String,
    #[serde(rename = "play style")]
    pub play_style: PlayStyle,
    #[serde(rename = "team rating")]
    pub rating: TeamRating,
    pub players: Vec<Player>,
    #[serde(rename = "team id")]
    pub id: u32,
}
