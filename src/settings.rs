//! Simulation settings
//!
//! One `Settings` value is built by the host and handed to the simulation
//! through `SimContext`. Nothing in the simulation reads global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::level::PickupTier;

/// Tuning and arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena & cadence ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Fast tick period (movement, spawning, collisions)
    pub fast_tick_ms: u32,
    /// Wave tick period (wave scheduling, countdown)
    pub wave_tick_ms: u32,

    // === Player ===
    pub player_size: f32,
    /// Pixels moved per fast tick per held direction
    pub player_speed: f32,
    pub player_lives: u32,
    pub dying_animation_secs: u32,
    pub power_up_animation_pulses: u32,

    // === Hostile dots ===
    pub dot_size: f32,
    /// Inclusive speed range
    pub dot_speed: [u32; 2],
    /// Half-open spawn interval range in fast ticks
    pub dot_spawn_ticks: [u32; 2],
    /// Used for final-blitz waves unless the level overrides it
    pub final_blitz_multiplier: f32,

    // === Point pickups ===
    pub point_size: f32,
    /// Lower bound of every tier's spawn interval
    pub point_spawn_min_ticks: u32,
    /// Point values for Basic, Mid, Max
    pub point_values: [u32; 3],

    // === Power-ups ===
    pub power_up_size: f32,
    /// Half-open speed range
    pub power_up_speed: [u32; 2],
    /// Half-open spawn interval range in fast ticks
    pub power_up_spawn_ticks: [u32; 2],
    pub power_up_duration_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            fast_tick_ms: FAST_TICK_MS,
            wave_tick_ms: WAVE_TICK_MS,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_lives: PLAYER_LIVES,
            dying_animation_secs: DYING_ANIMATION_SECS,
            power_up_animation_pulses: POWER_UP_ANIMATION_PULSES,

            dot_size: DOT_SIZE,
            dot_speed: [DOT_SPEED_MIN, DOT_SPEED_MAX],
            dot_spawn_ticks: [DOT_SPAWN_MIN_TICKS, DOT_SPAWN_MAX_TICKS],
            final_blitz_multiplier: FINAL_BLITZ_MULTIPLIER,

            point_size: POINT_SIZE,
            point_spawn_min_ticks: POINT_SPAWN_MIN_TICKS,
            point_values: [POINT_VALUE_BASIC, POINT_VALUE_MID, POINT_VALUE_MAX],

            power_up_size: POWER_UP_SIZE,
            power_up_speed: [POWER_UP_SPEED_MIN, POWER_UP_SPEED_MAX],
            power_up_spawn_ticks: [POWER_UP_SPAWN_MIN_TICKS, POWER_UP_SPAWN_MAX_TICKS],
            power_up_duration_secs: POWER_UP_DURATION_SECS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: arena {}x{}, {} lives",
            settings.arena_width,
            settings.arena_height,
            settings.player_lives
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| {
            log::warn!("Rejected settings: {}", reason);
            Err(SimError::InvalidSettings(reason))
        };

        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return fail(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            ));
        }
        if self.fast_tick_ms == 0 || self.wave_tick_ms < self.fast_tick_ms {
            return fail(format!(
                "tick periods must satisfy 0 < fast ({}) <= wave ({})",
                self.fast_tick_ms, self.wave_tick_ms
            ));
        }
        if self.player_lives == 0 {
            return fail("player must start with at least one life".into());
        }
        if self.player_speed <= 0.0 {
            return fail("player speed must be positive".into());
        }

        let min_side = self.arena_width.min(self.arena_height);
        for (name, size) in [
            ("player", self.player_size),
            ("dot", self.dot_size),
            ("point", self.point_size),
            ("power-up", self.power_up_size),
        ] {
            if !(size > 0.0 && size < min_side) {
                return fail(format!(
                    "{} size {} must be positive and smaller than the arena",
                    name, size
                ));
            }
        }

        let [speed_lo, speed_hi] = self.dot_speed;
        if speed_lo == 0 || speed_lo > speed_hi {
            return fail(format!("dot speed range [{}, {}] is invalid", speed_lo, speed_hi));
        }
        let [spawn_lo, spawn_hi] = self.dot_spawn_ticks;
        if spawn_lo >= spawn_hi {
            return fail(format!("dot spawn range [{}, {}) is empty", spawn_lo, spawn_hi));
        }
        if self.final_blitz_multiplier <= 0.0 {
            return fail("final blitz multiplier must be positive".into());
        }

        if self.point_spawn_min_ticks == 0 {
            return fail("point spawn lower bound must be positive".into());
        }
        if let Some(zero) = self.point_values.iter().position(|v| *v == 0) {
            return fail(format!("point value for tier {} must be positive", zero));
        }

        let [pu_speed_lo, pu_speed_hi] = self.power_up_speed;
        if pu_speed_lo == 0 || pu_speed_lo >= pu_speed_hi {
            return fail(format!(
                "power-up speed range [{}, {}) is invalid",
                pu_speed_lo, pu_speed_hi
            ));
        }
        let [pu_spawn_lo, pu_spawn_hi] = self.power_up_spawn_ticks;
        if pu_spawn_lo == 0 || pu_spawn_lo >= pu_spawn_hi {
            return fail(format!(
                "power-up spawn range [{}, {}) is invalid",
                pu_spawn_lo, pu_spawn_hi
            ));
        }

        Ok(())
    }

    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Fast ticks in one second of game time
    pub fn fast_ticks_per_second(&self) -> u32 {
        (1000 / self.fast_tick_ms).max(1)
    }

    pub fn power_up_duration_ticks(&self) -> u32 {
        self.power_up_duration_secs
            .saturating_mul(self.fast_ticks_per_second())
    }

    pub fn dying_animation_ticks(&self) -> u32 {
        self.dying_animation_secs
            .saturating_mul(self.fast_ticks_per_second())
    }

    /// Point value awarded by a pickup of `tier`
    pub fn point_value(&self, tier: PickupTier) -> u32 {
        match tier {
            PickupTier::Basic => self.point_values[0],
            PickupTier::Mid => self.point_values[1],
            PickupTier::Max => self.point_values[2],
        }
    }
}
