use serde::{Deserialize, Serialize};

/// A scheduled special event on the season calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialEvent {
    #[serde(rename = "event name")]
    pub name: String,
    /// Payout for completing the event, always a multiple of 100.
    #[serde(rename = "event reward")]
    pub reward: u32,
    #[serde(rename = "event date")]
    pub date: u32,
    #[serde(rename = "event id")]
    pub id: u32,
}
