//! Run controller
//!
//! Owns the simulation state plus the bits that outlive a run (high score and
//! its store). The host calls `start` on the start trigger, `advance` once per
//! animation frame, and drains events to drive audio and the HUD.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::{HighScore, HighScoreStore};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, start_run, tick};
use crate::tuning::Tuning;

/// Which overlay panels should be visible; a pure function of the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub start_screen: bool,
    pub game_over_screen: bool,
}

impl Panels {
    pub fn for_phase(phase: GamePhase) -> Self {
        Self {
            start_screen: phase == GamePhase::Idle,
            game_over_screen: phase == GamePhase::GameOver,
        }
    }
}

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn high_score_text(high_score: u64) -> String {
    format!("High Score: {}", high_score)
}

pub struct Session<S: HighScoreStore> {
    state: GameState,
    high_score: HighScore,
    store: S,
    accumulator: f32,
    /// Whether the last finished run set a new best
    new_best: bool,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(seed, tuning),
            high_score,
            store,
            accumulator: 0.0,
            new_best: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn new_best(&self) -> bool {
        self.new_best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn panels(&self) -> Panels {
        Panels::for_phase(self.state.phase)
    }

    /// Start trigger from Idle or GameOver. Returns true if a run began, in
    /// which case the host must (re)arm its frame loop.
    pub fn start(&mut self) -> bool {
        if !start_run(&mut self.state) {
            return false;
        }
        self.accumulator = 0.0;
        self.new_best = false;
        true
    }

    /// Run exactly one simulation tick
    pub fn step(&mut self, input: &TickInput) {
        if !self.state.is_running() {
            return;
        }
        tick(&mut self.state, input);
        if self.state.phase == GamePhase::GameOver {
            self.finish_run();
        }
    }

    /// Feed elapsed wall time (seconds) and run as many fixed ticks as fit.
    ///
    /// Stops early on game over so the caller renders the terminal frame.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> u32 {
        if !self.state.is_running() {
            return 0;
        }

        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            if !self.state.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Settle the high score after a run ends
    fn finish_run(&mut self) {
        let score = self.state.score;
        self.new_best = self.high_score.record(score);
        if self.new_best {
            log::info!("New high score: {}", score);
            if !self.store.save(score) {
                log::warn!("High score kept in memory only");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::{Item, ItemKind};
    use glam::Vec2;

    fn drop_rock_on_player(session: &mut Session<MemoryStore>) {
        let player = &session.state.player;
        let rock = Item {
            pos: Vec2::new(player.pos.x, player.pos.y - 10.0),
            size: Vec2::splat(32.0),
            kind: ItemKind::Hazardous,
            speed: 3.0,
        };
        session.state.items.push(rock);
        session.step(&TickInput::default());
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_panels_follow_phase() {
        assert_eq!(
            Panels::for_phase(GamePhase::Idle),
            Panels {
                start_screen: true,
                game_over_screen: false
            }
        );
        let running = Panels::for_phase(GamePhase::Running);
        assert!(!running.start_screen && !running.game_over_screen);
        assert!(Panels::for_phase(GamePhase::GameOver).game_over_screen);
    }

    #[test]
    fn test_hud_text() {
        assert_eq!(score_text(30), "Score: 30");
        assert_eq!(high_score_text(120), "High Score: 120");
    }

    #[test]
    fn test_high_score_saved_on_game_over() {
        let mut session = Session::new(1, Tuning::default(), MemoryStore::with_value(20));
        assert_eq!(session.high_score(), 20);

        session.start();
        session.state.score = 50;
        drop_rock_on_player(&mut session);
        assert!(session.new_best());
        assert_eq!(session.high_score(), 50);
        assert_eq!(session.store().value, Some(50));

        // A worse run leaves the best alone and does not write
        session.start();
        session.state.score = 10;
        drop_rock_on_player(&mut session);
        assert!(!session.new_best());
        assert_eq!(session.high_score(), 50);
        assert_eq!(session.store().writes, 1);
    }

    #[test]
    fn test_store_failure_is_not_fatal() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut session = Session::new(1, Tuning::default(), store);
        session.start();
        session.state.score = 70;
        drop_rock_on_player(&mut session);
        assert_eq!(session.high_score(), 70);
        assert_eq!(session.store().value, None);

        // Still restartable
        assert!(session.start());
        assert!(session.is_running());
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let mut session = Session::new(1, Tuning::default(), MemoryStore::default());
        assert_eq!(session.advance(1.0, &TickInput::default()), 0);

        session.start();
        assert_eq!(session.advance(SIM_DT * 2.5, &TickInput::default()), 2);
        assert_eq!(session.state().frame_count, 2);
        // Leftover half tick carries into the next frame
        assert_eq!(session.advance(SIM_DT * 0.6, &TickInput::default()), 1);
        // Long stalls are capped
        assert_eq!(session.advance(5.0, &TickInput::default()), MAX_SUBSTEPS);
    }

    #[test]
    fn test_advance_stops_on_game_over() {
        let mut session = Session::new(1, Tuning::default(), MemoryStore::default());
        session.start();
        let player = &session.state.player;
        session.state.items.push(Item {
            pos: Vec2::new(player.pos.x, player.pos.y - 10.0),
            size: Vec2::splat(32.0),
            kind: ItemKind::Hazardous,
            speed: 3.0,
        });
        assert_eq!(session.advance(SIM_DT * 3.5, &TickInput::default()), 1);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::RunStarted, GameEvent::GameOver { score: 0 }]
        );
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut session = Session::new(1, Tuning::default(), MemoryStore::default());
        assert!(session.start());
        assert!(!session.start());
    }
}
