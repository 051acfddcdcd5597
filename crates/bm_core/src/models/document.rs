use super::{Player, SpecialEvent, Team};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// Fixed starting budget handed to the player.
pub const STARTING_BUDGET: u32 = 2000;

/// Calendar day a new save starts on.
pub const START_DATE: u32 = 1;

/// Index of the team the player controls.
pub const YOUR_TEAM_INDEX: u32 = 3;

/// Top-level starting dataset consumed by the game client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    pub teams: Vec<Team>,
    pub market: Vec<Player>,
    #[serde(rename = "special events")]
    pub special_events: Vec<SpecialEvent>,
    pub budget: u32,
    pub date: u32,
    #[serde(rename = "your team")]
    pub your_team: u32,
}

impl GameDocument {
    /// Render the document as 4-space-indented JSON, the exact layout the
    /// game client parses.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| CoreError::SerializationError(e.to_string()))
    }
}
