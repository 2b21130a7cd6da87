//! Error types for construction and loading
//!
//! Ticking never fails; everything here surfaces before a level starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Point pickups must be worth something
    #[error("point value must be greater than 0, got {0}")]
    InvalidPointValue(u32),

    /// Raw integer did not name a member of a closed enumeration
    #[error("{what} value {value} is out of range")]
    OutOfRange { what: &'static str, value: u32 },

    #[error("level '{title}' is invalid: {reason}")]
    InvalidLevel { title: String, reason: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("campaign needs at least one level")]
    EmptyCampaign,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
