//! One level's lifecycle
//!
//! A session runs the countdown, starts waves on the level's schedule, owns
//! the power-up window and resolves hits into exactly one terminal
//! transition. Hits are resolved before the win check, so a hit on the last
//! second is still a loss.

use serde::{Deserialize, Serialize};

use super::events::{AudioCue, GameEvent};
use super::level::Level;
use super::player::Player;
use super::state::SimContext;
use super::wave::WaveCoordinator;
use crate::error::Result;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Active,
    LevelWon,
    GameLost,
    /// Halted by the host without a result
    Stopped,
}

/// Terminal outcome reported to the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    LevelWon,
    /// A life was lost and the level restarted
    LifeLost,
    GameLost,
}

/// What one tick produced for the campaign to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStep {
    pub points_awarded: u32,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone)]
pub struct LevelSession {
    level: Level,
    phase: SessionPhase,
    coordinator: WaveCoordinator,
    /// Seconds left on the clock
    countdown: u32,
    /// Wave ticks since the level (re)started
    elapsed_secs: u32,
    /// Waves started so far; also the 1-based number of the latest
    current_wave: usize,
    /// Fast ticks left on an active power-up; 0 when inactive
    power_up_ticks_left: u32,
}

impl LevelSession {
    /// Validate `level` and start it
    pub fn load(ctx: &mut SimContext, player: &mut Player, level: &Level) -> Result<Self> {
        level.validate()?;
        Ok(Self::start(ctx, player, level))
    }

    /// Start an already validated level
    pub(crate) fn start(ctx: &mut SimContext, player: &mut Player, level: &Level) -> Self {
        let mut session = Self {
            level: level.clone(),
            phase: SessionPhase::Active,
            coordinator: WaveCoordinator::new(),
            countdown: level.survival_time_secs,
            elapsed_secs: 0,
            current_wave: 0,
            power_up_ticks_left: 0,
        };
        ctx.emit(GameEvent::LevelTitleChanged(level.title.clone()));
        session.begin(ctx, player);
        session
    }

    /// Reset timers and actors to the start of the level
    fn begin(&mut self, ctx: &mut SimContext, player: &mut Player) {
        self.coordinator.teardown();
        self.coordinator = WaveCoordinator::for_level(ctx, &self.level);
        self.phase = SessionPhase::Active;
        self.countdown = self.level.survival_time_secs;
        self.elapsed_secs = 0;
        self.current_wave = 0;
        self.power_up_ticks_left = 0;

        player.set_palette(&self.level.wave_colors);
        player.center_in(ctx.settings.arena());

        log::info!(
            "Loaded '{}': {} s, {} waves every {} s",
            self.level.title,
            self.level.survival_time_secs,
            self.level.waves.len(),
            self.level.wave_interval_secs
        );
        ctx.emit(GameEvent::CountdownChanged(self.countdown));
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn current_wave(&self) -> usize {
        self.current_wave
    }

    pub fn is_powered_up(&self) -> bool {
        self.power_up_ticks_left > 0
    }

    pub fn power_up_ticks_left(&self) -> u32 {
        self.power_up_ticks_left
    }

    pub fn coordinator(&self) -> &WaveCoordinator {
        &self.coordinator
    }

    #[cfg(test)]
    pub(crate) fn coordinator_mut(&mut self) -> &mut WaveCoordinator {
        &mut self.coordinator
    }

    /// Fast cadence: move actors, then resolve power-up, hits and pickups
    pub fn tick_fast(&mut self, ctx: &mut SimContext, player: &mut Player) -> SessionStep {
        let mut step = SessionStep::default();
        if !self.is_active() {
            return step;
        }

        self.coordinator.tick(ctx);
        player.tick_animation();

        if self.is_powered_up() {
            let destroyed = self.coordinator.remove_destroyed_dots(player);
            for _ in 0..destroyed {
                ctx.cue(AudioCue::DotDestroyed);
            }
            self.power_up_ticks_left -= 1;
            if self.power_up_ticks_left == 0 {
                log::debug!("Power-up expired");
                ctx.cue(AudioCue::PoweredDown);
            }
        } else if self.coordinator.has_player_hit_hostile(player) {
            step.transition = Some(self.lose_life(ctx, player));
            return step;
        }

        if let Some(hit) = self.coordinator.player_hit_pickup(player) {
            self.coordinator.remove_pickup(&hit);
            log::debug!("Collected point {} worth {}", hit.id, hit.value);
            ctx.emit(GameEvent::PointHit(hit.value));
            step.points_awarded = hit.value;
        }

        if !self.is_powered_up() && self.coordinator.has_player_hit_power_up(player) {
            if let Some(power_up) = self.coordinator.collect_power_up() {
                self.power_up_ticks_left = ctx.settings.power_up_duration_ticks();
                let pulses = ctx.settings.power_up_animation_pulses;
                let ticks_per_pulse = ctx.settings.fast_ticks_per_second() / 10;
                player.start_power_up(pulses, ticks_per_pulse);
                log::debug!(
                    "Power-up {} active for {} ticks",
                    power_up.id,
                    self.power_up_ticks_left
                );
                ctx.cue(AudioCue::PoweredUp);
            }
        }

        step
    }

    /// Wave cadence: start due waves, count down, check for a win
    pub fn tick_wave(&mut self, ctx: &mut SimContext, player: &mut Player) -> SessionStep {
        let mut step = SessionStep::default();
        if !self.is_active() {
            return step;
        }

        // A hit registering right now holds the wave back
        let hit_now = !self.is_powered_up() && self.coordinator.has_player_hit_hostile(player);
        if self.elapsed_secs % self.level.wave_interval_secs == 0 && !hit_now {
            self.start_next_wave(ctx);
        }

        self.elapsed_secs += 1;
        self.countdown = self
            .level
            .survival_time_secs
            .saturating_sub(self.elapsed_secs);
        ctx.emit(GameEvent::CountdownChanged(self.countdown));

        if self.elapsed_secs >= self.level.survival_time_secs {
            let hit = !self.is_powered_up() && self.coordinator.has_player_hit_hostile(player);
            step.transition = Some(if hit {
                self.lose_life(ctx, player)
            } else {
                self.win(ctx)
            });
        }

        step
    }

    fn start_next_wave(&mut self, ctx: &mut SimContext) {
        let Some(&wave) = self.level.waves.get(self.current_wave) else {
            return;
        };
        self.current_wave += 1;
        let color = self.level.wave_color(self.current_wave);
        let multiplier = self
            .level
            .final_blitz_multiplier
            .unwrap_or(ctx.settings.final_blitz_multiplier);
        self.coordinator.start_wave(ctx, wave, color, multiplier);
    }

    fn win(&mut self, ctx: &mut SimContext) -> Transition {
        self.coordinator.teardown();
        self.power_up_ticks_left = 0;
        self.phase = SessionPhase::LevelWon;
        log::info!("'{}' won", self.level.title);
        ctx.cue(AudioCue::LevelWon);
        ctx.emit(GameEvent::LevelWon);
        Transition::LevelWon
    }

    fn lose_life(&mut self, ctx: &mut SimContext, player: &mut Player) -> Transition {
        self.coordinator.teardown();
        self.power_up_ticks_left = 0;
        player.lives = player.lives.saturating_sub(1);
        player.start_dying(ctx.settings.dying_animation_ticks());
        log::info!(
            "Life lost on '{}' at {} s, {} left",
            self.level.title,
            self.elapsed_secs,
            player.lives
        );
        ctx.cue(AudioCue::LifeLost);
        ctx.emit(GameEvent::LivesChanged(player.lives));

        if player.lives == 0 {
            self.phase = SessionPhase::GameLost;
            ctx.cue(AudioCue::GameOver);
            ctx.emit(GameEvent::GameLost);
            return Transition::GameLost;
        }

        ctx.emit(GameEvent::LifeLost);
        self.begin(ctx, player);
        Transition::LifeLost
    }

    /// Halt the session and clear the arena. Emits nothing; safe to repeat.
    pub fn stop(&mut self) {
        self.coordinator.teardown();
        self.power_up_ticks_left = 0;
        if self.phase == SessionPhase::Active {
            self.phase = SessionPhase::Stopped;
        }
    }
}
