//! Point and power-up pickup spawning
//!
//! Same count-to-threshold pattern as hostile spawning, tuned for rarity.
//! Points sit still until collected or expired; a power-up drifts across
//! the arena and only one appears per level load.

use glam::Vec2;

use super::actors::{PointPickup, PowerUp};
use super::level::{Edge, PickupTier};
use super::object::{Body, GameObject};
use super::events::AudioCue;
use super::state::SimContext;

/// Random top-left position keeping a `size` box fully inside `arena`
fn random_inside(ctx: &mut SimContext, size: f32, arena: Vec2) -> Vec2 {
    let max_x = (arena.x - size).max(0.0) as u32;
    let max_y = (arena.y - size).max(0.0) as u32;
    let x = ctx.roll_inclusive(0, max_x);
    let y = ctx.roll_inclusive(0, max_y);
    Vec2::new(x as f32, y as f32)
}

/// Spawns point pickups of one tier
#[derive(Debug, Clone)]
pub struct PointGroup {
    tier: PickupTier,
    pickups: Vec<PointPickup>,
    tick_count: u32,
    spawn_threshold: u32,
    /// Inclusive lifetime range in fast ticks
    lifetime_ticks: Option<[u32; 2]>,
    stopped: bool,
}

impl PointGroup {
    pub fn new(tier: PickupTier, lifetime_secs: Option<[u32; 2]>, ticks_per_second: u32) -> Self {
        Self {
            tier,
            pickups: Vec::new(),
            tick_count: 0,
            spawn_threshold: 0,
            lifetime_ticks: lifetime_secs
                .map(|[lo, hi]| {
                    [
                        lo.saturating_mul(ticks_per_second),
                        hi.saturating_mul(ticks_per_second),
                    ]
                }),
            stopped: false,
        }
    }

    pub fn tier(&self) -> PickupTier {
        self.tier
    }

    pub fn pickups(&self) -> &[PointPickup] {
        &self.pickups
    }

    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }

    /// Sample the next spawn interval for this tier
    pub fn roll_interval(&self, ctx: &mut SimContext) -> u32 {
        ctx.roll(self.tier.spawn_interval(ctx.settings.point_spawn_min_ticks))
    }

    /// One fast tick: expire, then spawn or count
    pub fn tick(&mut self, ctx: &mut SimContext) {
        if self.stopped {
            return;
        }

        self.expire();

        if self.tick_count == self.spawn_threshold {
            // Threshold starts at 0: the first pass only schedules
            if self.tick_count != 0 {
                self.spawn(ctx);
            }
            self.tick_count = 0;
            self.spawn_threshold = self.roll_interval(ctx);
        } else {
            self.tick_count += 1;
        }
    }

    fn expire(&mut self) {
        for point in &mut self.pickups {
            if let Some(ttl) = point.ttl_ticks.as_mut() {
                *ttl = ttl.saturating_sub(1);
            }
        }
        self.pickups.retain(|p| p.ttl_ticks != Some(0));
    }

    fn spawn(&mut self, ctx: &mut SimContext) {
        let size = ctx.settings.point_size;
        let arena = ctx.settings.arena();
        let pos = random_inside(ctx, size, arena);
        let value = ctx.settings.point_value(self.tier);
        let id = ctx.next_entity_id();

        let mut point = match PointPickup::new(id, GameObject::square(pos, size), value, self.tier) {
            Ok(point) => point,
            Err(e) => {
                log::warn!("Skipping {:?} point spawn: {}", self.tier, e);
                return;
            }
        };
        point.ttl_ticks = self.lifetime_ticks.map(|[lo, hi]| ctx.roll_inclusive(lo, hi));

        log::debug!(
            "Point {} ({:?}, {}) at ({}, {})",
            id,
            self.tier,
            value,
            pos.x,
            pos.y
        );
        self.pickups.push(point);
        ctx.cue(AudioCue::PointAdded);
    }

    pub fn remove(&mut self, id: u32) -> Option<PointPickup> {
        let index = self.pickups.iter().position(|p| p.id == id)?;
        Some(self.pickups.remove(index))
    }

    /// Stop spawning and drop every live pickup
    pub fn stop(&mut self) {
        self.stopped = true;
        self.pickups.clear();
    }

    #[cfg(test)]
    pub(crate) fn push_pickup(&mut self, point: PointPickup) {
        self.pickups.push(point);
    }
}

/// Spawns at most one power-up per level load
#[derive(Debug, Clone)]
pub struct PowerUpGroup {
    power_up: Option<PowerUp>,
    tick_count: u32,
    spawn_at: u32,
    /// Collected, exited or stopped; dormant until replaced
    spent: bool,
}

impl PowerUpGroup {
    pub fn new(ctx: &mut SimContext) -> Self {
        let [lo, hi] = ctx.settings.power_up_spawn_ticks;
        Self {
            power_up: None,
            tick_count: 0,
            spawn_at: ctx.roll(lo..hi),
            spent: false,
        }
    }

    pub fn power_up(&self) -> Option<&PowerUp> {
        self.power_up.as_ref()
    }

    /// Fast tick the power-up is scheduled to appear on
    pub fn spawn_at(&self) -> u32 {
        self.spawn_at
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn tick(&mut self, ctx: &mut SimContext) {
        if self.spent {
            return;
        }

        let arena = ctx.settings.arena();
        if let Some(power_up) = self.power_up.as_mut() {
            power_up.advance();
            if !power_up.body.is_fully_inside(arena) {
                log::debug!("Power-up {} left the arena", power_up.id);
                self.power_up = None;
                self.spent = true;
            }
            return;
        }

        self.tick_count += 1;
        if self.tick_count == self.spawn_at {
            self.spawn(ctx);
        }
    }

    fn spawn(&mut self, ctx: &mut SimContext) {
        let arena = ctx.settings.arena();
        let size = ctx.settings.power_up_size;
        let inside = random_inside(ctx, size, arena);
        let edge = Edge::ALL[ctx.roll(0..4) as usize];
        let [lo, hi] = ctx.settings.power_up_speed;
        let speed = ctx.roll(lo..hi) as f32;

        let pos = match edge {
            Edge::North => Vec2::new(inside.x, -size),
            Edge::South => Vec2::new(inside.x, arena.y),
            Edge::West => Vec2::new(-size, inside.y),
            Edge::East => Vec2::new(arena.x, inside.y),
        };
        let mut body = GameObject::square(pos, size);
        body.vel = edge.heading() * speed;

        // Walk it in so the first frame shows it fully on-screen
        while !body.is_fully_inside(arena) {
            body.advance();
        }

        let power_up = PowerUp {
            id: ctx.next_entity_id(),
            body,
        };
        log::debug!(
            "Power-up {} from {:?} at ({}, {})",
            power_up.id,
            edge,
            body.pos.x,
            body.pos.y
        );
        self.power_up = Some(power_up);
        ctx.cue(AudioCue::PowerUpAppears);
    }

    /// Collect the live power-up, leaving the group dormant
    pub fn take(&mut self) -> Option<PowerUp> {
        let taken = self.power_up.take();
        if taken.is_some() {
            self.spent = true;
        }
        taken
    }

    pub fn stop(&mut self) {
        self.power_up = None;
        self.spent = true;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, power_up: PowerUp) {
        self.power_up = Some(power_up);
    }
}
