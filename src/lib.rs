//! Bunny Hop - a falling-items arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, particles)
//! - `session`: Run controller (start/restart, frame stepping, high score)
//! - `renderer`: Draw list and WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScore, HighScoreStore, MemoryStore};
pub use session::{Panels, Session};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Play field dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Bunny defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// Distance from the canvas bottom to the bunny's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Falling item defaults
    pub const ITEM_WIDTH: f32 = 32.0;
    pub const ITEM_HEIGHT: f32 = 32.0;
    pub const BASE_ITEM_SPEED: f32 = 3.0;
    /// Ticks between spawns
    pub const SPAWN_INTERVAL: u64 = 60;
    /// Random draws above this become carrots (70/30 split)
    pub const BENEFICIAL_THRESHOLD: f32 = 0.3;
    /// Score points per extra pixel/tick of fall speed
    pub const SPEED_SCORE_DIVISOR: f32 = 100.0;
    pub const COLLECT_POINTS: u64 = 10;

    /// Hop animation: offset = sin(frame * frequency) * amplitude
    pub const HOP_FREQUENCY: f32 = 0.2;
    pub const HOP_AMPLITUDE: f32 = 3.0;

    /// Particle bursts
    pub const BURST_SIZE: usize = 8;
    /// Full spread of each velocity component, centered on zero
    pub const PARTICLE_SPREAD: f32 = 4.0;
    pub const PARTICLE_DECAY: f32 = 0.05;
    pub const PARTICLE_SIZE: f32 = 4.0;

    /// Burst colors (0xRRGGBB)
    pub const COLLECT_COLOR: u32 = 0xffa500;
    pub const IMPACT_COLOR: u32 = 0xff0000;
}
