//! Outbound notifications
//!
//! The simulation never calls back into the host. It queues typed events on
//! `SimContext` and the host drains them once per frame.

use serde::{Deserialize, Serialize};

/// Named sound cues for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    NewWave,
    PointAdded,
    PowerUpAppears,
    PoweredUp,
    PoweredDown,
    DotDestroyed,
    LifeLost,
    LevelWon,
    GameOver,
    YouWin,
}

impl AudioCue {
    /// Asset name the host maps to a sound file
    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::NewWave => "NewWave",
            AudioCue::PointAdded => "PointAdded",
            AudioCue::PowerUpAppears => "PowerUpAppears",
            AudioCue::PoweredUp => "PoweredUp",
            AudioCue::PoweredDown => "PoweredDown",
            AudioCue::DotDestroyed => "DotDestroyed",
            AudioCue::LifeLost => "LifeLost",
            AudioCue::LevelWon => "LevelWon",
            AudioCue::GameOver => "GameOver",
            AudioCue::YouWin => "YouWin",
        }
    }
}

/// How a campaign ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverText {
    YouWin,
    GameOver,
}

impl GameOverText {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverText::YouWin => "YOU WIN",
            GameOverText::GameOver => "GAME OVER",
        }
    }
}

/// Game events, in the order the state changes happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Seconds left in the current level
    CountdownChanged(u32),
    /// Campaign score after an award
    ScoreChanged(u64),
    /// A point pickup was collected for this amount
    PointHit(u32),
    LivesChanged(u32),
    LevelTitleChanged(String),
    /// Session survived its countdown
    LevelWon,
    /// Session lost a life and restarted the level
    LifeLost,
    /// Session lost its last life
    GameLost,
    /// Campaign finished
    GameOver(GameOverText),
    Cue(AudioCue),
}

/// Values the score-recording collaborator persists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u64,
    /// 1-based level reached
    pub level: u32,
    pub username: String,
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.username, self.score, self.level)
    }
}
