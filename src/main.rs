//! Dodge Dots headless runner
//!
//! Plays a seeded campaign with a simple autopilot and logs every event.
//!
//! Usage: `dodge-dots [seed] [levels.json] [settings.json]`
//! Set `RUST_LOG=debug` to see spawns and pickups.

use std::error::Error;

use glam::Vec2;

use dodge_dots::Settings;
use dodge_dots::sim::{Game, GameEvent, Movement, TickInput, default_campaign, levels_from_json};

/// Frames to simulate before giving up (20 minutes at 50 fps)
const MAX_FRAMES: u32 = 60_000;

/// Dots closer than this are worth reacting to
const DANGER_RADIUS: f32 = 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => 0xD0D6_E5,
    };
    let levels = match args.next() {
        Some(path) => levels_from_json(&std::fs::read_to_string(path)?)?,
        None => default_campaign(),
    };
    let settings = match args.next() {
        Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };

    log::info!("Dodge Dots (headless) starting...");
    let frame_ms = settings.fast_tick_ms as f32;
    let mut game = Game::new(settings, levels, seed)?;
    game.start();

    let mut frame = 0;
    while !game.is_over() && frame < MAX_FRAMES {
        let input = autopilot(&game, frame);
        game.update(frame_ms, &input);
        for event in game.drain_events() {
            report(&event);
        }
        frame += 1;
    }

    if !game.is_over() {
        log::warn!("Stopped after {} frames without a result", frame);
        game.stop();
    }
    let record = game.campaign().score_record("autopilot");
    println!("{}", record);
    Ok(())
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::Cue(cue) => log::debug!("cue: {}", cue.name()),
        GameEvent::CountdownChanged(secs) => log::debug!("countdown: {}", secs),
        GameEvent::GameOver(text) => log::info!("{}", text.as_str()),
        other => log::info!("{:?}", other),
    }
}

/// Demo player: swaps to match the closest threat, otherwise chases points
/// and drifts back toward the middle
fn autopilot(game: &Game, frame: u32) -> TickInput {
    let player = game.player();
    let center = player.body.pos + player.body.size / 2.0;
    let Some(session) = game.campaign().session() else {
        return TickInput::default();
    };
    let coordinator = session.coordinator();

    let threat = coordinator
        .dots()
        .map(|dot| (dot, (dot.body.pos + dot.body.size / 2.0).distance(center)))
        .filter(|(_, dist)| *dist < DANGER_RADIUS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut input = TickInput::default();
    if let Some((dot, _)) = threat {
        if dot.color() != player.outer_color() {
            // Only swap when it helps, and not every frame
            input.swap_colors = dot.color() == player.inner_color() && frame % 5 == 0;
            let away = center - (dot.body.pos + dot.body.size / 2.0);
            input.movement = steer(away);
        }
        return input;
    }

    let target = coordinator
        .pickups()
        .map(|p| p.body.pos + p.body.size / 2.0)
        .min_by(|a, b| {
            a.distance(center)
                .partial_cmp(&b.distance(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(game.settings().arena() / 2.0);
    input.movement = steer(target - center);
    input
}

fn steer(toward: Vec2) -> Movement {
    const DEADZONE: f32 = 3.0;
    Movement {
        left: toward.x < -DEADZONE,
        right: toward.x > DEADZONE,
        up: toward.y < -DEADZONE,
        down: toward.y > DEADZONE,
    }
}
