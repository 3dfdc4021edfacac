//! Periodic item spawning
//!
//! Advances the frame counter once per tick and drops a new item every
//! `spawn_interval` frames.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Item, ItemKind};
use crate::tuning::Tuning;

/// Pick an item type from a uniform draw in [0, 1)
pub fn kind_for_roll(roll: f32, threshold: f32) -> ItemKind {
    if roll > threshold {
        ItemKind::Beneficial
    } else {
        ItemKind::Hazardous
    }
}

/// Build a new item just above the visible area.
///
/// Speed is locked in from the score at creation time.
pub fn spawn_item<R: Rng>(rng: &mut R, tuning: &Tuning, score: u64) -> Item {
    let kind = kind_for_roll(rng.random::<f32>(), tuning.beneficial_threshold);
    let x = rng.random::<f32>() * (tuning.canvas_width - tuning.item_width);
    Item {
        pos: Vec2::new(x, -tuning.item_height),
        size: Vec2::new(tuning.item_width, tuning.item_height),
        kind,
        speed: tuning.item_speed_for_score(score),
    }
}

/// Count this tick and spawn when the cadence lines up.
/// Returns true if an item was added.
pub fn advance(state: &mut GameState) -> bool {
    state.frame_count += 1;
    if state.frame_count % state.tuning.spawn_interval != 0 {
        return false;
    }

    let item = spawn_item(&mut state.rng, &state.tuning, state.score);
    log::debug!(
        "Spawned {:?} at x={:.1} speed={:.2} (frame {})",
        item.kind,
        item.pos.x,
        item.speed,
        state.frame_count
    );
    state.items.push(item);
    true
}
