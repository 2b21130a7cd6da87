//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadences only (fast tick and wave tick)
//! - Seeded RNG only, held in `SimContext`
//! - Outbound notifications queued as `GameEvent`s, never callbacks
//! - No rendering, audio or platform dependencies

pub mod actors;
pub mod campaign;
pub mod collision;
pub mod events;
pub mod level;
pub mod object;
pub mod palette;
pub mod pickup;
pub mod player;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wave;

pub use actors::{Dot, DotSpec, Motion, PointPickup, PowerUp, create_dot};
pub use campaign::{CampaignController, CampaignPhase};
pub use collision::{circle_overlap, overlaps};
pub use events::{AudioCue, GameEvent, GameOverText, ScoreRecord};
pub use level::{Edge, Level, PickupTier, Wave, default_campaign, levels_from_json};
pub use object::{Body, GameObject};
pub use palette::DotColor;
pub use pickup::{PointGroup, PowerUpGroup};
pub use player::{Movement, Player, PlayerAnimation};
pub use session::{LevelSession, SessionPhase, SessionStep, Transition};
pub use spawn::SpawnGroup;
pub use state::SimContext;
pub use tick::{Game, TickInput};
pub use wave::{PickupHit, WaveCoordinator};
