//! Hostile dot spawning for one wave edge
//!
//! A `SpawnGroup` feeds dots in from one edge at randomized intervals,
//! moves them every fast tick and retires the ones that leave the arena.

use glam::Vec2;

use super::actors::{Dot, DotSpec, Motion, create_dot};
use super::level::Edge;
use super::object::Body;
use super::palette::DotColor;
use super::state::SimContext;
use crate::grid_slots;

#[derive(Debug, Clone)]
pub struct SpawnGroup {
    edge: Edge,
    motion: Motion,
    color: DotColor,
    /// Applied to live dots and inherited by new ones
    multiplier: f32,
    /// Display recolor while boosted
    tint: Option<DotColor>,
    dots: Vec<Dot>,
    tick_count: u32,
    /// Spawn fires when `tick_count` reaches this; starts at 0 so the first
    /// dot appears on the first tick
    spawn_threshold: u32,
    stopped: bool,
}

impl SpawnGroup {
    pub fn new(edge: Edge, motion: Motion, color: DotColor, multiplier: f32) -> Self {
        Self {
            edge,
            motion,
            color,
            multiplier,
            tint: None,
            dots: Vec::new(),
            tick_count: 0,
            spawn_threshold: 0,
            stopped: false,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn color(&self) -> DotColor {
        self.color
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// One fast tick: spawn or count, move, retire
    pub fn tick(&mut self, ctx: &mut SimContext) {
        if self.stopped {
            return;
        }

        if self.tick_count == self.spawn_threshold {
            self.spawn(ctx);
            self.tick_count = 0;
            let [lo, hi] = ctx.settings.dot_spawn_ticks;
            self.spawn_threshold = ctx.roll(lo..hi);
        } else {
            self.tick_count += 1;
        }

        for dot in &mut self.dots {
            dot.advance();
        }
        self.retire_offscreen(ctx.settings.arena());
    }

    fn spawn(&mut self, ctx: &mut SimContext) {
        let arena = ctx.settings.arena();
        let size = ctx.settings.dot_size;
        let extent = if self.edge.is_horizontal() { arena.x } else { arena.y };
        let slot = ctx.roll(0..grid_slots(extent, size));
        let pos = entry_position(self.edge, slot as f32 * size, size, arena);

        let spec = DotSpec {
            edge: self.edge,
            motion: self.motion,
            color: self.color,
            multiplier: self.multiplier,
        };
        let mut dot = create_dot(ctx, &spec, pos);
        dot.tint = self.tint;
        log::debug!(
            "Dot {} spawned from {:?} at ({}, {}) speed {}",
            dot.id,
            self.edge,
            pos.x,
            pos.y,
            dot.speed()
        );
        self.dots.push(dot);
    }

    /// Drop dots that are entirely outside the arena
    fn retire_offscreen(&mut self, arena: Vec2) {
        self.dots.retain(|d| !d.body.is_fully_outside(arena));
    }

    /// Boost (or restore) every live dot and all future spawns
    pub fn set_speed_multiplier(&mut self, multiplier: f32, tint: Option<DotColor>) {
        self.multiplier = multiplier;
        self.tint = tint;
        for dot in &mut self.dots {
            dot.set_speed_multiplier(multiplier);
            dot.tint = tint;
        }
    }

    /// Remove dots matching `pred`, returning how many went
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Dot) -> bool,
    {
        let before = self.dots.len();
        self.dots.retain(|d| !pred(d));
        before - self.dots.len()
    }

    /// Stop spawning and drop every live dot
    pub fn stop(&mut self) {
        self.stopped = true;
        self.dots.clear();
    }

    #[cfg(test)]
    pub(crate) fn push_dot(&mut self, dot: Dot) {
        self.dots.push(dot);
    }
}

/// Off-screen start position one dot-size beyond `edge`, `offset` along it
pub fn entry_position(edge: Edge, offset: f32, size: f32, arena: Vec2) -> Vec2 {
    match edge {
        Edge::North => Vec2::new(offset, -size),
        Edge::South => Vec2::new(offset, arena.y),
        Edge::West => Vec2::new(-size, offset),
        Edge::East => Vec2::new(arena.x, offset),
    }
}
