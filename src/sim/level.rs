//! Level definitions
//!
//! A level is immutable data: how long to survive, how often waves start,
//! which waves in which colors, and which pickups appear.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::palette::DotColor;
use crate::error::{Result, SimError};

/// Arena edge a spawn enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    North,
    West,
    South,
    East,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::West, Edge::South, Edge::East];

    /// Unit direction of travel for something entering from this edge
    pub fn heading(&self) -> Vec2 {
        match self {
            Edge::North => Vec2::new(0.0, 1.0),
            Edge::South => Vec2::new(0.0, -1.0),
            Edge::West => Vec2::new(1.0, 0.0),
            Edge::East => Vec2::new(-1.0, 0.0),
        }
    }

    /// Heading with an equal sideways component, rotating around the arena
    pub fn diagonal_heading(&self) -> Vec2 {
        match self {
            Edge::North => Vec2::new(1.0, 1.0),
            Edge::East => Vec2::new(-1.0, 1.0),
            Edge::South => Vec2::new(-1.0, -1.0),
            Edge::West => Vec2::new(1.0, -1.0),
        }
    }

    /// Edge runs horizontally (spawn slots are chosen along x)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Edge::North | Edge::South)
    }
}

impl TryFrom<u8> for Edge {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self> {
        Edge::ALL
            .get(value as usize)
            .copied()
            .ok_or(SimError::OutOfRange {
                what: "edge",
                value: value as u32,
            })
    }
}

/// The waves a level can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wave {
    North,
    West,
    South,
    East,
    /// From North and South at once, sped up
    NsFinalBlitz,
    /// From all four edges with diagonal motion, sped up
    DiagonalFinalBlitz,
}

impl Wave {
    pub fn is_final_blitz(&self) -> bool {
        matches!(self, Wave::NsFinalBlitz | Wave::DiagonalFinalBlitz)
    }
}

impl TryFrom<u8> for Wave {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Wave::North),
            1 => Ok(Wave::West),
            2 => Ok(Wave::South),
            3 => Ok(Wave::East),
            4 => Ok(Wave::NsFinalBlitz),
            5 => Ok(Wave::DiagonalFinalBlitz),
            _ => Err(SimError::OutOfRange {
                what: "wave",
                value: value as u32,
            }),
        }
    }
}

/// Pickup rarity/value class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupTier {
    Basic,
    Mid,
    Max,
}

impl PickupTier {
    /// Scales the upper bound of the spawn interval; rarer tiers spawn less often
    pub fn rarity_multiplier(&self) -> u32 {
        match self {
            PickupTier::Basic => 1,
            PickupTier::Mid => 2,
            PickupTier::Max => 3,
        }
    }

    /// Half-open spawn interval `[min, min + min * rarity)`
    pub fn spawn_interval(&self, min_ticks: u32) -> std::ops::Range<u32> {
        min_ticks..min_ticks + min_ticks * self.rarity_multiplier()
    }
}

impl TryFrom<u8> for PickupTier {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PickupTier::Basic),
            1 => Ok(PickupTier::Mid),
            2 => Ok(PickupTier::Max),
            _ => Err(SimError::OutOfRange {
                what: "pickup tier",
                value: value as u32,
            }),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Immutable per-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub title: String,
    /// Seconds the player must survive
    pub survival_time_secs: u32,
    /// Seconds between wave starts
    pub wave_interval_secs: u32,
    /// Started in order, one per interval
    pub waves: Vec<Wave>,
    /// Cycled across waves by index
    pub wave_colors: Vec<DotColor>,
    /// Replaces the cycled color for the last wave
    #[serde(default)]
    pub final_color: Option<DotColor>,
    /// One point group per entry
    #[serde(default)]
    pub pickup_tiers: Vec<PickupTier>,
    /// Inclusive lifetime range for points; `None` keeps them until collected
    #[serde(default)]
    pub pickup_lifetime_secs: Option<[u32; 2]>,
    #[serde(default = "default_true")]
    pub power_ups: bool,
    /// Overrides the settings multiplier for final-blitz waves
    #[serde(default)]
    pub final_blitz_multiplier: Option<f32>,
}

impl Level {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(SimError::InvalidLevel {
                title: self.title.clone(),
                reason: reason.to_string(),
            })
        };

        if self.survival_time_secs == 0 {
            return invalid("survival time must be positive");
        }
        if self.wave_interval_secs == 0 {
            return invalid("wave interval must be positive");
        }
        if self.waves.is_empty() {
            return invalid("at least one wave is required");
        }
        if self.wave_colors.is_empty() {
            return invalid("at least one wave color is required");
        }
        if let Some([lo, hi]) = self.pickup_lifetime_secs {
            if lo == 0 || lo > hi {
                return invalid("pickup lifetime range is invalid");
            }
        }
        if let Some(m) = self.final_blitz_multiplier {
            if !(m > 0.0) {
                return invalid("final blitz multiplier must be positive");
            }
        }
        Ok(())
    }

    /// Color for the 1-based `wave_number`
    pub fn wave_color(&self, wave_number: usize) -> DotColor {
        if let Some(final_color) = self.final_color {
            if wave_number == self.waves.len() {
                return final_color;
            }
        }
        let index = wave_number.saturating_sub(1) % self.wave_colors.len();
        self.wave_colors[index]
    }
}

/// The built-in three-level campaign
pub fn default_campaign() -> Vec<Level> {
    vec![
        Level {
            title: "Level 1".into(),
            survival_time_secs: 25,
            wave_interval_secs: 5,
            waves: vec![Wave::North, Wave::West, Wave::South, Wave::East],
            wave_colors: vec![DotColor::SpringGreen, DotColor::Violet],
            final_color: None,
            pickup_tiers: vec![PickupTier::Basic],
            pickup_lifetime_secs: None,
            power_ups: true,
            final_blitz_multiplier: None,
        },
        Level {
            title: "Level 2".into(),
            survival_time_secs: 30,
            wave_interval_secs: 5,
            waves: vec![
                Wave::North,
                Wave::West,
                Wave::South,
                Wave::East,
                Wave::NsFinalBlitz,
            ],
            wave_colors: vec![
                DotColor::SpringGreen,
                DotColor::Violet,
                DotColor::Chocolate,
                DotColor::Maroon,
            ],
            final_color: Some(DotColor::Yellow),
            pickup_tiers: vec![PickupTier::Basic, PickupTier::Mid],
            pickup_lifetime_secs: Some([6, 10]),
            power_ups: true,
            final_blitz_multiplier: None,
        },
        Level {
            title: "Level 3".into(),
            survival_time_secs: 35,
            wave_interval_secs: 5,
            waves: vec![
                Wave::North,
                Wave::West,
                Wave::South,
                Wave::East,
                Wave::DiagonalFinalBlitz,
            ],
            wave_colors: vec![
                DotColor::SpringGreen,
                DotColor::Violet,
                DotColor::Chocolate,
                DotColor::Maroon,
            ],
            final_color: Some(DotColor::Yellow),
            pickup_tiers: vec![PickupTier::Basic, PickupTier::Mid, PickupTier::Max],
            pickup_lifetime_secs: Some([3, 5]),
            power_ups: true,
            final_blitz_multiplier: None,
        },
    ]
}

/// Load a level catalog from JSON, validating every level
pub fn levels_from_json(json: &str) -> Result<Vec<Level>> {
    let levels: Vec<Level> = serde_json::from_str(json)?;
    for level in &levels {
        level.validate()?;
    }
    log::info!("Loaded {} levels", levels.len());
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_campaign_is_valid() {
        let levels = default_campaign();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            level.validate().unwrap();
        }
    }

    #[test]
    fn test_wave_colors_cycle_and_final_override() {
        let levels = default_campaign();

        // Level 1: two colors, no final override
        let one = &levels[0];
        assert_eq!(one.wave_color(1), DotColor::SpringGreen);
        assert_eq!(one.wave_color(2), DotColor::Violet);
        assert_eq!(one.wave_color(3), DotColor::SpringGreen);
        assert_eq!(one.wave_color(4), DotColor::Violet);

        // Level 2: last wave takes the final color
        let two = &levels[1];
        assert_eq!(two.wave_color(4), DotColor::Maroon);
        assert_eq!(two.wave_color(5), DotColor::Yellow);
    }

    #[test]
    fn test_enumerations_reject_out_of_range() {
        assert_eq!(Edge::try_from(2).unwrap(), Edge::South);
        assert!(matches!(
            Edge::try_from(4),
            Err(SimError::OutOfRange { what: "edge", value: 4 })
        ));
        assert_eq!(Wave::try_from(5).unwrap(), Wave::DiagonalFinalBlitz);
        assert!(Wave::try_from(6).is_err());
        assert!(PickupTier::try_from(3).is_err());
    }

    #[test]
    fn test_tier_spawn_intervals() {
        assert_eq!(PickupTier::Basic.spawn_interval(80), 80..160);
        assert_eq!(PickupTier::Mid.spawn_interval(80), 80..240);
        assert_eq!(PickupTier::Max.spawn_interval(80), 80..320);
    }

    #[test]
    fn test_validate_rejects_empty_waves() {
        let mut level = default_campaign().remove(0);
        level.waves.clear();
        let err = level.validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidLevel { .. }));
    }

    #[test]
    fn test_levels_from_json() {
        let json = r#"[{
            "title": "Custom",
            "survival_time_secs": 10,
            "wave_interval_secs": 2,
            "waves": ["North", "NsFinalBlitz"],
            "wave_colors": ["Red", "Blue"],
            "final_color": "Yellow"
        }]"#;
        let levels = levels_from_json(json).unwrap();
        assert_eq!(levels[0].waves, vec![Wave::North, Wave::NsFinalBlitz]);
        assert!(levels[0].power_ups);
        assert!(levels[0].pickup_tiers.is_empty());

        let bad = r#"[{ "title": "Bad", "survival_time_secs": 0, "wave_interval_secs": 2,
                       "waves": ["North"], "wave_colors": ["Red"] }]"#;
        assert!(levels_from_json(bad).is_err());
    }
}
