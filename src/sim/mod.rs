//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_box, player_hits_item};
pub use state::{GameEvent, GamePhase, GameState, Item, ItemKind, Particle, Player};
pub use tick::{TickInput, hop_at, hop_offset, start_run, tick};
