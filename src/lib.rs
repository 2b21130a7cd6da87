//! Dodge Dots - a color-matching survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (waves, collisions, levels, campaign)
//! - `settings`: Tuning and arena configuration passed into the simulation
//! - `error`: Construction and loading errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Fast cadence: movement, spawning, collisions
    pub const FAST_TICK_MS: u32 = 20;
    /// Slow cadence: wave scheduling and countdown
    pub const WAVE_TICK_MS: u32 = 1000;
    /// Maximum fast ticks per `Game::update` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_LIVES: u32 = 3;
    /// Dying animation length (seconds)
    pub const DYING_ANIMATION_SECS: u32 = 2;
    /// Number of size pulses when powering up
    pub const POWER_UP_ANIMATION_PULSES: u32 = 10;

    /// Hostile dot defaults
    pub const DOT_SIZE: f32 = 20.0;
    /// Inclusive speed range, pixels per fast tick
    pub const DOT_SPEED_MIN: u32 = 1;
    pub const DOT_SPEED_MAX: u32 = 5;
    /// Half-open spawn interval range in fast ticks
    pub const DOT_SPAWN_MIN_TICKS: u32 = 20;
    pub const DOT_SPAWN_MAX_TICKS: u32 = 40;
    pub const FINAL_BLITZ_MULTIPLIER: f32 = 2.0;

    /// Point pickup defaults
    pub const POINT_SIZE: f32 = 15.0;
    /// Lower bound of every tier's spawn interval (fast ticks)
    pub const POINT_SPAWN_MIN_TICKS: u32 = 80;
    pub const POINT_VALUE_BASIC: u32 = 10;
    pub const POINT_VALUE_MID: u32 = 25;
    pub const POINT_VALUE_MAX: u32 = 50;

    /// Power-up defaults
    pub const POWER_UP_SIZE: f32 = 20.0;
    /// Half-open speed range, pixels per fast tick
    pub const POWER_UP_SPEED_MIN: u32 = 1;
    pub const POWER_UP_SPEED_MAX: u32 = 5;
    pub const POWER_UP_SPAWN_MIN_TICKS: u32 = 80;
    pub const POWER_UP_SPAWN_MAX_TICKS: u32 = 400;
    pub const POWER_UP_DURATION_SECS: u32 = 5;
}

/// Top-left position that centers a box of `size` inside `arena`
#[inline]
pub fn centered_in(arena: Vec2, size: Vec2) -> Vec2 {
    arena / 2.0 - size / 2.0
}

/// Number of grid slots of width `step` that fit along an edge of length `extent`
/// while keeping the whole object on the edge
#[inline]
pub fn grid_slots(extent: f32, step: f32) -> u32 {
    if step <= 0.0 || extent <= step {
        return 1;
    }
    ((extent - step) / step).ceil() as u32
}
