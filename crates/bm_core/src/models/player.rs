use serde::{Deserialize, Serialize};

/// Court position of a generated player.
///
/// Serialized as the display strings the game client expects
/// (e.g. "Small Forward").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "Small Forward")]
    SmallForward,
    #[serde(rename = "Shooting Guard")]
    ShootingGuard,
    #[serde(rename = "Power Forward")]
    PowerForward,
    #[serde(rename = "Point Guard")]
    PointGuard,
    Center,
}

impl Position {
    /// Canonical position order; doubles as the fixed assignment order for
    /// a full 5-man roster.
    pub const ALL: [Position; 5] = [
        Position::SmallForward,
        Position::ShootingGuard,
        Position::PowerForward,
        Position::PointGuard,
        Position::Center,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Position::SmallForward => "Small Forward",
            Position::ShootingGuard => "Shooting Guard",
            Position::PowerForward => "Power Forward",
            Position::PointGuard => "Point Guard",
            Position::Center => "Center",
        }
    }
}

/// Six base attributes plus the derived overall.
///
/// The overall is always the integer mean of the three best base
/// attributes; it is computed at generation and never recomputed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRating {
    pub pace: u8,
    pub shooting: u8,
    pub defending: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub physicality: u8,
    pub overall: u8,
}

impl PlayerRating {
    /// The six base attributes in canonical order (pace, shooting,
    /// defending, passing, dribbling, physicality).
    pub fn base_attributes(&self) -> [u8; 6] {
        [
            self.pace,
            self.shooting,
            self.defending,
            self.passing,
            self.dribbling,
            self.physicality,
        ]
    }
}

/// A generated player record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    #[serde(rename = "player name")]
    pub name: String,
    pub position: Position,
    pub rating: PlayerRating,
    /// Owning team's name; empty string for transfer-market free agents.
    #[serde(rename = "current team")]
    pub current_team: String,
    pub price: u32,
    #[serde(rename = "player id")]
    pub id: u32,
}

impl Player {
    pub fn is_free_agent(&self) -> bool {
        self.current_team.is_empty()
    }
}
