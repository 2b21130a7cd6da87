//! Simulation context
//!
//! Settings, the seeded RNG, the outbound event queue and the entity id
//! counter. Built once by the host and passed by reference to every part of
//! the simulation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::events::{AudioCue, GameEvent};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct SimContext {
    pub settings: Settings,
    /// Run seed for reproducibility
    seed: u64,
    rng: Pcg32,
    /// Outbound notifications in emission order
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl SimContext {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Uniform sample from `[lo, hi)`; an empty range yields `lo`
    pub fn roll(&mut self, range: std::ops::Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    /// Uniform sample from `[lo, hi]`
    pub fn roll_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: AudioCue) {
        self.events.push(GameEvent::Cue(cue));
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = SimContext::new(Settings::default(), 42);
        let mut b = SimContext::new(Settings::default(), 42);
        for _ in 0..100 {
            assert_eq!(a.roll(20..40), b.roll(20..40));
        }
    }

    #[test]
    fn test_roll_bounds_and_empty_range() {
        let mut ctx = SimContext::new(Settings::default(), 7);
        for _ in 0..500 {
            let v = ctx.roll(20..40);
            assert!((20..40).contains(&v));
            let w = ctx.roll_inclusive(1, 5);
            assert!((1..=5).contains(&w));
        }
        assert_eq!(ctx.roll(5..5), 5);
        assert_eq!(ctx.roll_inclusive(3, 3), 3);
    }

    #[test]
    fn test_events_drain_in_order() {
        let mut ctx = SimContext::new(Settings::default(), 1);
        ctx.emit(GameEvent::CountdownChanged(3));
        ctx.cue(AudioCue::NewWave);
        let drained = ctx.drain_events();
        assert_eq!(
            drained,
            vec![GameEvent::CountdownChanged(3), GameEvent::Cue(AudioCue::NewWave)]
        );
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut ctx = SimContext::new(Settings::default(), 1);
        assert_eq!(ctx.next_entity_id(), 1);
        assert_eq!(ctx.next_entity_id(), 2);
    }
}
