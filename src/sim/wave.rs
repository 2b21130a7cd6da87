//! Wave coordination and collision queries
//!
//! Owns every spawn and pickup group for the running level and answers
//! "what did the player touch" each tick. Queries never apply consequences;
//! the session decides what a hit means.

use super::actors::{Dot, Motion, PointPickup, PowerUp};
use super::collision::overlaps;
use super::events::AudioCue;
use super::level::{Edge, Level, Wave};
use super::palette::DotColor;
use super::pickup::{PointGroup, PowerUpGroup};
use super::player::Player;
use super::spawn::SpawnGroup;
use super::state::SimContext;

/// A point pickup the player is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupHit {
    /// Index of the owning point group
    pub group: usize,
    pub id: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Default)]
pub struct WaveCoordinator {
    spawn_groups: Vec<SpawnGroup>,
    point_groups: Vec<PointGroup>,
    power_ups: Option<PowerUpGroup>,
}

impl WaveCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh coordinator with the pickup groups `level` asks for
    pub fn for_level(ctx: &mut SimContext, level: &Level) -> Self {
        let ticks_per_second = ctx.settings.fast_ticks_per_second();
        let point_groups = level
            .pickup_tiers
            .iter()
            .map(|tier| PointGroup::new(*tier, level.pickup_lifetime_secs, ticks_per_second))
            .collect();
        let power_ups = level.power_ups.then(|| PowerUpGroup::new(ctx));
        Self {
            spawn_groups: Vec::new(),
            point_groups,
            power_ups,
        }
    }

    pub fn spawn_groups(&self) -> &[SpawnGroup] {
        &self.spawn_groups
    }

    pub fn point_groups(&self) -> &[PointGroup] {
        &self.point_groups
    }

    pub fn power_up(&self) -> Option<&PowerUp> {
        self.power_ups.as_ref().and_then(|g| g.power_up())
    }

    /// Every live hostile dot
    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.spawn_groups.iter().flat_map(|g| g.dots().iter())
    }

    pub fn dot_count(&self) -> usize {
        self.spawn_groups.iter().map(SpawnGroup::len).sum()
    }

    /// Every live point pickup
    pub fn pickups(&self) -> impl Iterator<Item = &PointPickup> {
        self.point_groups.iter().flat_map(|g| g.pickups().iter())
    }

    /// Start the spawn groups for `wave` in `color`. Final-blitz waves run at
    /// `blitz_multiplier` and also boost every group already running.
    pub fn start_wave(
        &mut self,
        ctx: &mut SimContext,
        wave: Wave,
        color: DotColor,
        blitz_multiplier: f32,
    ) {
        let groups: &[(Edge, Motion)] = match wave {
            Wave::North => &[(Edge::North, Motion::Straight)],
            Wave::West => &[(Edge::West, Motion::Straight)],
            Wave::South => &[(Edge::South, Motion::Straight)],
            Wave::East => &[(Edge::East, Motion::Straight)],
            Wave::NsFinalBlitz => &[
                (Edge::North, Motion::Straight),
                (Edge::South, Motion::Straight),
            ],
            Wave::DiagonalFinalBlitz => &[
                (Edge::North, Motion::Diagonal),
                (Edge::East, Motion::Diagonal),
                (Edge::South, Motion::Diagonal),
                (Edge::West, Motion::Diagonal),
            ],
        };

        let multiplier = if wave.is_final_blitz() {
            for group in &mut self.spawn_groups {
                group.set_speed_multiplier(blitz_multiplier, Some(color));
            }
            blitz_multiplier
        } else {
            1.0
        };

        log::info!(
            "Starting {:?} wave in {} ({} groups, x{})",
            wave,
            color,
            groups.len(),
            multiplier
        );
        for (edge, motion) in groups {
            self.spawn_groups
                .push(SpawnGroup::new(*edge, *motion, color, multiplier));
        }
        ctx.cue(AudioCue::NewWave);
    }

    /// Advance every group by one fast tick
    pub fn tick(&mut self, ctx: &mut SimContext) {
        for group in &mut self.spawn_groups {
            group.tick(ctx);
        }
        for group in &mut self.point_groups {
            group.tick(ctx);
        }
        if let Some(group) = self.power_ups.as_mut() {
            group.tick(ctx);
        }
    }

    /// Player overlaps a dot whose color differs from the shield
    pub fn has_player_hit_hostile(&self, player: &Player) -> bool {
        let shield = player.outer_color();
        self.dots()
            .any(|dot| dot.color() != shield && overlaps(player, dot))
    }

    /// First point pickup the player overlaps, if any
    pub fn player_hit_pickup(&self, player: &Player) -> Option<PickupHit> {
        self.point_groups
            .iter()
            .enumerate()
            .find_map(|(group, points)| {
                points
                    .pickups()
                    .iter()
                    .find(|p| overlaps(player, *p))
                    .map(|p| PickupHit {
                        group,
                        id: p.id,
                        value: p.value(),
                    })
            })
    }

    pub fn remove_pickup(&mut self, hit: &PickupHit) -> Option<PointPickup> {
        self.point_groups.get_mut(hit.group)?.remove(hit.id)
    }

    pub fn has_player_hit_power_up(&self, player: &Player) -> bool {
        self.power_up().is_some_and(|p| overlaps(player, p))
    }

    pub fn collect_power_up(&mut self) -> Option<PowerUp> {
        self.power_ups.as_mut()?.take()
    }

    /// Remove every dot overlapping the player regardless of color.
    /// Returns how many were destroyed.
    pub fn remove_destroyed_dots(&mut self, player: &Player) -> usize {
        self.spawn_groups
            .iter_mut()
            .map(|group| group.remove_where(|dot| overlaps(player, dot)))
            .sum()
    }

    /// Stop every group and drop all live actors. Safe to repeat.
    pub fn teardown(&mut self) {
        for group in &mut self.spawn_groups {
            group.stop();
        }
        for group in &mut self.point_groups {
            group.stop();
        }
        if let Some(group) = self.power_ups.as_mut() {
            group.stop();
        }
        self.spawn_groups.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.dot_count() == 0 && self.pickups().next().is_none() && self.power_up().is_none()
    }

    #[cfg(test)]
    pub(crate) fn spawn_groups_mut(&mut self) -> &mut Vec<SpawnGroup> {
        &mut self.spawn_groups
    }

    #[cfg(test)]
    pub(crate) fn point_groups_mut(&mut self) -> &mut Vec<PointGroup> {
        &mut self.point_groups
    }

    #[cfg(test)]
    pub(crate) fn power_up_group_mut(&mut self) -> Option<&mut PowerUpGroup> {
        self.power_ups.as_mut()
    }
}
