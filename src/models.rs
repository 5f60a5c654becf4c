use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Running,
}

/// The single persisted challenge. Absence of the file means nothing is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub start_time: NaiveDateTime,
    pub challenge_days: u32,
    pub status: ChallengeStatus,
    #[serde(default)]
    pub last_milestone: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Complete,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notice {
    Started,
    Stopped,
}

#[derive(Debug, Default, Deserialize)]
pub struct MusicQuery {
    pub music: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub music: Option<bool>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub phase: Phase,
    pub challenge_days: Option<u32>,
    pub start_time: Option<String>,
    pub last_milestone: Option<u32>,
    pub percent: Option<f64>,
    pub milestone: Option<u32>,
    pub emoji_message: Option<String>,
    pub headline: Option<String>,
    pub milestone_reached: bool,
}
