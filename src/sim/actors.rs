//! Actor kinds that move through the arena
//!
//! Hostile dots, point pickups and power-ups. Each wraps a `GameObject` and
//! exposes it through the `Body` trait; the kind-specific data sits beside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Edge, PickupTier};
use super::object::{Body, GameObject};
use super::palette::DotColor;
use super::state::SimContext;
use crate::error::{Result, SimError};

/// How a dot travels after entering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Straight across, perpendicular to the entry edge
    Straight,
    /// Both axes at once
    Diagonal,
}

/// A hostile dot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dot {
    pub id: u32,
    pub body: GameObject,
    /// Hit color, fixed at spawn
    color: DotColor,
    /// Display-only recolor (final blitz)
    pub tint: Option<DotColor>,
    /// Speed rolled at spawn, pixels per tick along each moving axis
    base_speed: u32,
    /// Unit components of travel direction
    heading: Vec2,
    multiplier: f32,
}

impl Dot {
    pub fn color(&self) -> DotColor {
        self.color
    }

    /// Color the view layer should draw
    pub fn display_color(&self) -> DotColor {
        self.tint.unwrap_or(self.color)
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Current per-axis speed magnitude
    pub fn speed(&self) -> f32 {
        self.base_speed as f32 * self.multiplier
    }

    /// Rescale velocity relative to the original rolled speed
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.multiplier = multiplier;
        self.body.vel = self.heading * self.speed();
    }
}

impl Body for Dot {
    fn body(&self) -> &GameObject {
        &self.body
    }

    fn body_mut(&mut self) -> &mut GameObject {
        &mut self.body
    }
}

/// What kind of dot to build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSpec {
    pub edge: Edge,
    pub motion: Motion,
    pub color: DotColor,
    pub multiplier: f32,
}

/// Build a dot at `pos` heading away from `spec.edge`, with a speed rolled
/// from the configured range
pub fn create_dot(ctx: &mut SimContext, spec: &DotSpec, pos: Vec2) -> Dot {
    let [lo, hi] = ctx.settings.dot_speed;
    let base_speed = ctx.roll_inclusive(lo, hi);
    let heading = match spec.motion {
        Motion::Straight => spec.edge.heading(),
        Motion::Diagonal => spec.edge.diagonal_heading(),
    };
    let mut dot = Dot {
        id: ctx.next_entity_id(),
        body: GameObject::square(pos, ctx.settings.dot_size),
        color: spec.color,
        tint: None,
        base_speed,
        heading,
        multiplier: 1.0,
    };
    dot.set_speed_multiplier(spec.multiplier);
    dot
}

/// A collectible worth points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointPickup {
    pub id: u32,
    pub body: GameObject,
    value: u32,
    tier: PickupTier,
    /// Remaining lifetime in fast ticks, if it expires
    pub ttl_ticks: Option<u32>,
}

impl PointPickup {
    /// Fails if `value` is zero
    pub fn new(id: u32, body: GameObject, value: u32, tier: PickupTier) -> Result<Self> {
        if value == 0 {
            return Err(SimError::InvalidPointValue(value));
        }
        Ok(Self {
            id,
            body,
            value,
            tier,
            ttl_ticks: None,
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn tier(&self) -> PickupTier {
        self.tier
    }
}

impl Body for PointPickup {
    fn body(&self) -> &GameObject {
        &self.body
    }

    fn body_mut(&mut self) -> &mut GameObject {
        &mut self.body
    }
}

/// A temporary-effect pickup that drifts across the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub body: GameObject,
}

impl Body for PowerUp {
    fn body(&self) -> &GameObject {
        &self.body
    }

    fn body_mut(&mut self) -> &mut GameObject {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_point_value_must_be_positive() {
        let body = GameObject::square(Vec2::ZERO, 15.0);
        let err = PointPickup::new(1, body, 0, PickupTier::Basic).unwrap_err();
        assert!(matches!(err, SimError::InvalidPointValue(0)));

        let point = PointPickup::new(2, body, 10, PickupTier::Mid).unwrap();
        assert_eq!(point.value(), 10);
        assert_eq!(point.tier(), PickupTier::Mid);
    }

    #[test]
    fn test_factory_speed_and_heading() {
        let mut ctx = SimContext::new(Settings::default(), 3);
        for edge in Edge::ALL {
            let spec = DotSpec {
                edge,
                motion: Motion::Straight,
                color: DotColor::Red,
                multiplier: 1.0,
            };
            let dot = create_dot(&mut ctx, &spec, Vec2::ZERO);
            assert!((1..=5).contains(&dot.base_speed()));
            assert_eq!(dot.body.vel, edge.heading() * dot.base_speed() as f32);
            assert_eq!(dot.body.size, Vec2::splat(ctx.settings.dot_size));
        }
    }

    #[test]
    fn test_diagonal_dot_moves_on_both_axes() {
        let mut ctx = SimContext::new(Settings::default(), 3);
        let spec = DotSpec {
            edge: Edge::North,
            motion: Motion::Diagonal,
            color: DotColor::Yellow,
            multiplier: 2.0,
        };
        let dot = create_dot(&mut ctx, &spec, Vec2::ZERO);
        let s = dot.base_speed() as f32 * 2.0;
        assert_eq!(dot.body.vel, Vec2::new(s, s));
    }

    #[test]
    fn test_multiplier_is_relative_to_original_speed() {
        let mut ctx = SimContext::new(Settings::default(), 9);
        let spec = DotSpec {
            edge: Edge::West,
            motion: Motion::Straight,
            color: DotColor::Blue,
            multiplier: 1.0,
        };
        let mut dot = create_dot(&mut ctx, &spec, Vec2::ZERO);
        let base = dot.base_speed() as f32;
        dot.set_speed_multiplier(2.0);
        assert_eq!(dot.body.vel.x, base * 2.0);
        dot.set_speed_multiplier(1.0);
        assert_eq!(dot.body.vel.x, base);
        assert_eq!(dot.color(), DotColor::Blue);
    }
}
