//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one owned `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start trigger
    Idle,
    /// Active gameplay, ticking every frame
    Running,
    /// Run ended by a rock, waiting for restart
    GameOver,
}

/// Something the host should react to (audio, HUD, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (score reset)
    RunStarted,
    /// A carrot was eaten; carries the new score
    Collected { score: u64 },
    /// A rock hit the bunny; carries the final score
    GameOver { score: u64 },
}

/// Falling item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Carrot: +points
    Beneficial,
    /// Rock: ends the run
    Hazardous,
}

/// A falling item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Top-left corner; x never changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ItemKind,
    /// Pixels per tick, fixed at creation
    pub speed: f32,
}

impl Item {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The bunny
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; y is fixed for the whole game
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick per held direction
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x(), tuning.player_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            speed: tuning.player_speed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Keep the bunny fully on screen
    pub fn clamp_to(&mut self, canvas_width: f32) {
        let max_x = canvas_width - self.size.x;
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, also the draw opacity
    pub life: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Monotonic tick counter; drives spawn cadence and hop phase.
    /// Not reset between runs.
    pub frame_count: u64,
    pub player: Player,
    /// Active items in spawn order
    pub items: Vec<Item>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle game with the given seed.
    ///
    /// `tuning` must pass `Tuning::is_valid`; a zero spawn interval or a bunny
    /// wider than the canvas would panic mid-tick.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        debug_assert!(tuning.is_valid(), "invalid tuning: {:?}", tuning);
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            frame_count: 0,
            player: Player::new(&tuning),
            items: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Hand pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(4, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.pos, Vec2::new(224.0, 600.0));
        assert!(state.items.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid tuning")]
    fn test_rejects_zero_spawn_interval() {
        let tuning = Tuning {
            spawn_interval: 0,
            ..Tuning::default()
        };
        GameState::new(4, tuning);
    }
}
