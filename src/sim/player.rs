//! The player's dot
//!
//! Owned by the host shell; sessions borrow it each tick. Its identity
//! (position, lives) persists across level loads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::object::{Body, GameObject};
use super::palette::DotColor;
use crate::centered_in;
use crate::settings::Settings;

/// Held movement intents for one fast tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Movement {
    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Transient visual state; never affects collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerAnimation {
    Idle,
    Dying { ticks_left: u32 },
    /// Size pulses while the power-up kicks in
    PoweredUp { ticks_left: u32, ticks_per_pulse: u32 },
}

/// Display scale while a power-up pulse is enlarged
pub const PULSE_SCALE: f32 = 1.25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: GameObject,
    pub lives: u32,
    /// Pixels per fast tick
    speed: f32,
    /// Colors the shield cycles through
    palette: Vec<DotColor>,
    color_index: usize,
    animation: PlayerAnimation,
}

impl Player {
    /// Centered in the arena with the configured lives
    pub fn new(settings: &Settings) -> Self {
        let size = Vec2::splat(settings.player_size);
        Self {
            body: GameObject::new(centered_in(settings.arena(), size), size),
            lives: settings.player_lives,
            speed: settings.player_speed,
            palette: vec![DotColor::Red, DotColor::Blue],
            color_index: 0,
            animation: PlayerAnimation::Idle,
        }
    }

    pub fn center_in(&mut self, arena: Vec2) {
        self.body.pos = centered_in(arena, self.body.size);
    }

    /// Shield color that passes safely through same-colored dots
    pub fn outer_color(&self) -> DotColor {
        self.palette[self.color_index]
    }

    /// The color the next swap will select
    pub fn inner_color(&self) -> DotColor {
        self.palette[(self.color_index + 1) % self.palette.len()]
    }

    pub fn palette(&self) -> &[DotColor] {
        &self.palette
    }

    /// Replace the palette and reset to its first color. Empty input is ignored.
    pub fn set_palette(&mut self, colors: &[DotColor]) {
        if colors.is_empty() {
            return;
        }
        self.palette = colors.to_vec();
        self.color_index = 0;
    }

    /// Cycle the outer color to the next palette entry
    pub fn swap_colors(&mut self) {
        self.color_index = (self.color_index + 1) % self.palette.len();
    }

    /// Step once per held direction, refusing steps that leave the arena
    pub fn apply_movement(&mut self, movement: &Movement, arena: Vec2) {
        let (pos, size, speed) = (self.body.pos, self.body.size, self.speed);
        let steps = [
            (movement.left && pos.x - speed >= 0.0, Vec2::new(-speed, 0.0)),
            (movement.right && pos.x + speed <= arena.x - size.x, Vec2::new(speed, 0.0)),
            (movement.up && pos.y - speed >= 0.0, Vec2::new(0.0, -speed)),
            (movement.down && pos.y + speed <= arena.y - size.y, Vec2::new(0.0, speed)),
        ];
        for (allowed, vel) in steps {
            if allowed {
                self.body.vel = vel;
                self.body.advance();
            }
        }
        self.body.vel = Vec2::ZERO;
    }

    pub fn animation(&self) -> PlayerAnimation {
        self.animation
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.animation, PlayerAnimation::Dying { .. })
    }

    pub fn start_dying(&mut self, ticks: u32) {
        self.animation = PlayerAnimation::Dying { ticks_left: ticks };
    }

    pub fn start_power_up(&mut self, pulses: u32, ticks_per_pulse: u32) {
        let ticks_per_pulse = ticks_per_pulse.max(1);
        self.animation = PlayerAnimation::PoweredUp {
            ticks_left: pulses * ticks_per_pulse,
            ticks_per_pulse,
        };
    }

    /// Advance animation by one fast tick
    pub fn tick_animation(&mut self) {
        self.animation = match self.animation {
            PlayerAnimation::Dying { ticks_left } if ticks_left > 1 => PlayerAnimation::Dying {
                ticks_left: ticks_left - 1,
            },
            PlayerAnimation::PoweredUp {
                ticks_left,
                ticks_per_pulse,
            } if ticks_left > 1 => PlayerAnimation::PoweredUp {
                ticks_left: ticks_left - 1,
                ticks_per_pulse,
            },
            _ => PlayerAnimation::Idle,
        };
    }

    /// Scale the view should draw the player at
    pub fn display_scale(&self) -> f32 {
        match self.animation {
            PlayerAnimation::PoweredUp {
                ticks_left,
                ticks_per_pulse,
            } if (ticks_left / ticks_per_pulse) % 2 == 1 => PULSE_SCALE,
            _ => 1.0,
        }
    }
}

impl Body for Player {
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

    #[test]
    fn test_new_player_centered() {
        let settings = Settings::default();
        let player = Player::new(&settings);
        assert_eq!(player.body.pos, Vec2::new(185.0, 185.0));
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_palette_and_swap() {
        let mut player = Player::new(&Settings::default());
        player.set_palette(&[DotColor::SpringGreen, DotColor::Violet, DotColor::Maroon]);
        assert_eq!(player.outer_color(), DotColor::SpringGreen);
        assert_eq!(player.inner_color(), DotColor::Violet);

        player.swap_colors();
        assert_eq!(player.outer_color(), DotColor::Violet);
        assert_eq!(player.inner_color(), DotColor::Maroon);

        player.swap_colors();
        player.swap_colors();
        assert_eq!(player.outer_color(), DotColor::SpringGreen);

        // Single color: inner mirrors outer
        player.set_palette(&[DotColor::Red]);
        assert_eq!(player.inner_color(), DotColor::Red);
        player.swap_colors();
        assert_eq!(player.outer_color(), DotColor::Red);

        // Empty palette is ignored
        player.set_palette(&[]);
        assert_eq!(player.outer_color(), DotColor::Red);
    }

    #[test]
    fn test_movement_stays_in_arena() {
        let settings = Settings::default();
        let arena = settings.arena();
        let mut player = Player::new(&settings);
        player.body.pos = Vec2::new(1.0, 368.0);

        let movement = Movement {
            left: true,
            down: true,
            ..Default::default()
        };
        player.apply_movement(&movement, arena);
        // Left would go negative, down would cross 370
        assert_eq!(player.body.pos, Vec2::new(1.0, 368.0));

        let movement = Movement {
            right: true,
            up: true,
            ..Default::default()
        };
        player.apply_movement(&movement, arena);
        assert_eq!(player.body.pos, Vec2::new(4.0, 365.0));
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_power_up_pulse_then_idle() {
        let mut player = Player::new(&Settings::default());
        player.start_power_up(2, 3);
        let mut scales = Vec::new();
        for _ in 0..6 {
            scales.push(player.display_scale());
            player.tick_animation();
        }
        assert!(scales.contains(&PULSE_SCALE));
        assert!(scales.contains(&1.0));
        assert_eq!(player.animation(), PlayerAnimation::Idle);
    }

    #[test]
    fn test_dying_runs_out() {
        let mut player = Player::new(&Settings::default());
        player.start_dying(2);
        assert!(player.is_dying());
        player.tick_animation();
        assert!(player.is_dying());
        player.tick_animation();
        assert!(!player.is_dying());
    }
}
