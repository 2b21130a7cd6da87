//! Level sequencing, score and lives
//!
//! Runs the levels in order, folds session results into the campaign score
//! and reports how the campaign ended.

use serde::{Deserialize, Serialize};

use super::events::{AudioCue, GameEvent, GameOverText, ScoreRecord};
use super::level::Level;
use super::player::Player;
use super::session::{LevelSession, SessionStep, Transition};
use super::state::SimContext;
use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignPhase {
    NotStarted,
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct CampaignController {
    levels: Vec<Level>,
    level_index: usize,
    score: u64,
    phase: CampaignPhase,
    session: Option<LevelSession>,
}

impl CampaignController {
    /// Validates every level up front so level changes never fail mid-game
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        if levels.is_empty() {
            return Err(SimError::EmptyCampaign);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self {
            levels,
            level_index: 0,
            score: 0,
            phase: CampaignPhase::NotStarted,
            session: None,
        })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// 0-based index of the current level
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> CampaignPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, CampaignPhase::Won | CampaignPhase::Lost)
    }

    pub fn session(&self) -> Option<&LevelSession> {
        self.session.as_ref()
    }

    /// Start (or restart) from the first level with full lives and no score
    pub fn start(&mut self, ctx: &mut SimContext, player: &mut Player) {
        if let Some(session) = self.session.as_mut() {
            session.stop();
        }
        self.level_index = 0;
        self.score = 0;
        self.phase = CampaignPhase::Playing;
        player.lives = ctx.settings.player_lives;

        log::info!("Campaign started: {} levels", self.levels.len());
        ctx.emit(GameEvent::ScoreChanged(self.score));
        ctx.emit(GameEvent::LivesChanged(player.lives));
        self.load_current(ctx, player);
    }

    fn load_current(&mut self, ctx: &mut SimContext, player: &mut Player) {
        let level = &self.levels[self.level_index];
        self.session = Some(LevelSession::start(ctx, player, level));
    }

    /// Move to the next level, or finish the campaign after the last
    pub fn advance_level(&mut self, ctx: &mut SimContext, player: &mut Player) {
        if let Some(session) = self.session.as_mut() {
            session.stop();
        }
        self.level_index += 1;
        if self.level_index >= self.levels.len() {
            self.level_index = self.levels.len() - 1;
            self.finish(ctx, GameOverText::YouWin);
        } else {
            self.load_current(ctx, player);
        }
    }

    fn finish(&mut self, ctx: &mut SimContext, text: GameOverText) {
        self.session = None;
        self.phase = match text {
            GameOverText::YouWin => CampaignPhase::Won,
            GameOverText::GameOver => CampaignPhase::Lost,
        };
        log::info!(
            "Campaign over: {} with {} points on level {}",
            text.as_str(),
            self.score,
            self.level_index + 1
        );
        if text == GameOverText::YouWin {
            ctx.cue(AudioCue::YouWin);
        }
        ctx.emit(GameEvent::GameOver(text));
    }

    pub fn tick_fast(&mut self, ctx: &mut SimContext, player: &mut Player) {
        if let Some(step) = self.session.as_mut().map(|s| s.tick_fast(ctx, player)) {
            self.apply(ctx, player, step);
        }
    }

    pub fn tick_wave(&mut self, ctx: &mut SimContext, player: &mut Player) {
        if let Some(step) = self.session.as_mut().map(|s| s.tick_wave(ctx, player)) {
            self.apply(ctx, player, step);
        }
    }

    fn apply(&mut self, ctx: &mut SimContext, player: &mut Player, step: SessionStep) {
        if step.points_awarded > 0 {
            self.score += u64::from(step.points_awarded);
            ctx.emit(GameEvent::ScoreChanged(self.score));
        }
        match step.transition {
            Some(Transition::LevelWon) => self.advance_level(ctx, player),
            Some(Transition::GameLost) => self.finish(ctx, GameOverText::GameOver),
            Some(Transition::LifeLost) | None => {}
        }
    }

    /// Halt the running level without ending the campaign
    pub fn stop(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.stop();
        }
    }

    /// Values for the score-recording collaborator
    pub fn score_record(&self, username: &str) -> ScoreRecord {
        ScoreRecord {
            score: self.score,
            level: self.level_index as u32 + 1,
            username: username.to_string(),
        }
    }
}
