//! Fixed timestep driver
//!
//! `Game` plays the host's role: it owns the player and the campaign, turns
//! wall-clock deltas into the two simulation cadences and hands queued
//! events back once per frame.

use super::campaign::CampaignController;
use super::events::GameEvent;
use super::level::Level;
use super::player::{Movement, Player};
use super::state::SimContext;
use crate::consts::MAX_SUBSTEPS;
use crate::error::Result;
use crate::settings::Settings;

/// Input commands for one frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held directions, applied every fast tick
    pub movement: Movement,
    /// Cycle the shield color (one-shot)
    pub swap_colors: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    ctx: SimContext,
    player: Player,
    campaign: CampaignController,
    /// Milliseconds not yet consumed by fast ticks
    fast_accumulator: f32,
    /// Milliseconds not yet consumed by wave ticks
    wave_accumulator: f32,
}

impl Game {
    pub fn new(settings: Settings, levels: Vec<Level>, seed: u64) -> Result<Self> {
        settings.validate()?;
        let campaign = CampaignController::new(levels)?;
        let player = Player::new(&settings);
        log::info!("New game with seed {}", seed);
        Ok(Self {
            ctx: SimContext::new(settings, seed),
            player,
            campaign,
            fast_accumulator: 0.0,
            wave_accumulator: 0.0,
        })
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn settings(&self) -> &Settings {
        &self.ctx.settings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn campaign(&self) -> &CampaignController {
        &self.campaign
    }

    pub fn is_over(&self) -> bool {
        self.campaign.is_over()
    }

    /// Start (or restart) the campaign from level 1
    pub fn start(&mut self) {
        self.fast_accumulator = 0.0;
        self.wave_accumulator = 0.0;
        self.player.center_in(self.ctx.settings.arena());
        self.campaign.start(&mut self.ctx, &mut self.player);
    }

    /// Advance by `elapsed_ms` of wall-clock time
    pub fn update(&mut self, elapsed_ms: f32, input: &TickInput) {
        if input.swap_colors {
            self.swap_colors();
        }

        let fast_ms = self.ctx.settings.fast_tick_ms as f32;
        let wave_ms = self.ctx.settings.wave_tick_ms as f32;
        // Never carry more than one bounded batch of backlog
        let elapsed_ms = elapsed_ms.clamp(0.0, fast_ms * MAX_SUBSTEPS as f32);
        self.fast_accumulator += elapsed_ms;
        self.wave_accumulator += elapsed_ms;

        let mut substeps = 0;
        while self.fast_accumulator >= fast_ms && substeps < MAX_SUBSTEPS {
            self.tick_fast(&input.movement);
            self.fast_accumulator -= fast_ms;
            substeps += 1;

            if self.wave_accumulator >= wave_ms {
                self.tick_wave();
                self.wave_accumulator -= wave_ms;
            }
        }
    }

    /// One fast tick: move the player, then the world
    pub fn tick_fast(&mut self, movement: &Movement) {
        if self.campaign.is_over() {
            return;
        }
        if !movement.is_idle() {
            let arena = self.ctx.settings.arena();
            self.player.apply_movement(movement, arena);
        }
        self.campaign.tick_fast(&mut self.ctx, &mut self.player);
    }

    /// One wave tick: schedule waves and count down
    pub fn tick_wave(&mut self) {
        if self.campaign.is_over() {
            return;
        }
        self.campaign.tick_wave(&mut self.ctx, &mut self.player);
    }

    pub fn swap_colors(&mut self) {
        self.player.swap_colors();
    }

    /// Stop the running level, clearing the arena
    pub fn stop(&mut self) {
        self.campaign.stop();
    }

    /// Queued events in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.ctx.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::campaign::CampaignPhase;
    use crate::sim::level::default_campaign;

    fn game(seed: u64) -> Game {
        let mut game = Game::new(Settings::default(), default_campaign(), seed).unwrap();
        game.start();
        game
    }

    /// Scripted input that wanders and swaps now and then
    fn scripted_input(frame: u32) -> TickInput {
        TickInput {
            movement: Movement {
                left: frame % 90 < 30,
                right: frame % 90 >= 60,
                up: frame % 70 < 20,
                down: frame % 70 >= 50,
            },
            swap_colors: frame % 45 == 0,
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            fast_tick_ms: 0,
            ..Default::default()
        };
        assert!(Game::new(settings, default_campaign(), 1).is_err());
    }

    #[test]
    fn test_update_runs_both_cadences() {
        let mut game = game(5);
        game.drain_events();
        // 50 frames of 20 ms: 50 fast ticks and one wave tick
        for _ in 0..50 {
            game.update(20.0, &TickInput::default());
        }
        let session = game.campaign().session().expect("level running");
        assert_eq!(session.elapsed_secs(), 1);
        assert_eq!(session.countdown(), 24);
        assert!(game
            .drain_events()
            .contains(&GameEvent::CountdownChanged(24)));
    }

    #[test]
    fn test_long_frames_are_bounded() {
        let mut game = game(6);
        game.update(10_000.0, &TickInput::default());
        let session = game.campaign().session().expect("level running");
        // One bounded batch never spans a full second
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_swap_is_one_shot() {
        let mut game = game(7);
        let first = game.player().outer_color();
        let input = TickInput {
            swap_colors: true,
            ..Default::default()
        };
        game.update(20.0, &input);
        assert_ne!(game.player().outer_color(), first);
        game.update(20.0, &TickInput::default());
        assert_ne!(game.player().outer_color(), first);
    }

    #[test]
    fn test_movement_moves_player() {
        let mut game = game(8);
        let start = game.player().body.pos;
        let input = TickInput {
            movement: Movement {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        game.update(100.0, &input);
        assert_eq!(game.player().body.pos.x, start.x + 15.0);
    }

    #[test]
    fn test_same_seed_same_events() {
        let mut a = game(42);
        let mut b = game(42);
        for frame in 0..3000 {
            let input = scripted_input(frame);
            a.update(20.0, &input);
            b.update(20.0, &input);
        }
        assert_eq!(a.drain_events(), b.drain_events());
        assert_eq!(a.campaign().score(), b.campaign().score());
        assert_eq!(a.player().lives, b.player().lives);
    }

    #[test]
    fn test_finished_game_ignores_ticks() {
        let mut game = game(9);
        for _ in 0..90 {
            game.tick_wave();
        }
        assert_eq!(game.campaign().phase(), CampaignPhase::Won);
        game.drain_events();
        game.tick_wave();
        game.tick_fast(&Movement::default());
        assert!(game.drain_events().is_empty());
    }
}
