//! Per-frame simulation tick
//!
//! Order within a tick: input -> spawner -> item motion/collisions/scoring ->
//! particles. The tick is a no-op unless the run is `Running`.

use super::collision::player_hits_item;
use super::particles;
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState, ItemKind};
use crate::consts::{COLLECT_COLOR, IMPACT_COLOR};
use crate::tuning::Tuning;

/// Held-key state sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Hop displacement for a given frame, ignoring phase
pub fn hop_at(frame_count: u64, tuning: &Tuning) -> f32 {
    (frame_count as f32 * tuning.hop_frequency).sin() * tuning.hop_amplitude
}

/// Current hop displacement; zero unless a run is in progress
pub fn hop_offset(state: &GameState) -> f32 {
    if state.is_running() {
        hop_at(state.frame_count, &state.tuning)
    } else {
        0.0
    }
}

/// Begin (or restart) a run. Ignored while a run is already going.
///
/// The frame counter carries over so spawn cadence and hop phase continue
/// from the previous run.
pub fn start_run(state: &mut GameState) -> bool {
    if state.is_running() {
        return false;
    }

    state.score = 0;
    state.items.clear();
    state.particles.clear();
    state.player.pos.x = state.tuning.player_start_x();
    state.phase = GamePhase::Running;
    state.events.push(GameEvent::RunStarted);
    log::info!("Run started (frame {})", state.frame_count);
    true
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Sampled before the frame counter moves, and used for collisions below
    let hop = hop_at(state.frame_count, &state.tuning);

    // Independent deltas: holding both directions cancels out
    let player = &mut state.player;
    if input.move_left {
        player.pos.x -= player.speed;
    }
    if input.move_right {
        player.pos.x += player.speed;
    }
    player.clamp_to(state.tuning.canvas_width);

    spawner::advance(state);

    update_items(state, hop);

    let decay = state.tuning.particle_decay;
    if state.phase == GamePhase::Running {
        particles::advance(&mut state.particles, decay);
    } else {
        // The terminal frame shows the impact burst where it was emitted;
        // everything older still moves this tick.
        let split = state.particles.len().saturating_sub(state.tuning.burst_size);
        let impact = state.particles.split_off(split);
        particles::advance(&mut state.particles, decay);
        state.particles.extend(impact);
    }
}

/// Move items, resolve collisions, and cull items that fell off screen
fn update_items(state: &mut GameState, hop: f32) {
    let tuning = &state.tuning;
    let mut pending = std::mem::take(&mut state.items).into_iter();
    let mut kept = Vec::with_capacity(pending.len());

    for mut item in pending.by_ref() {
        item.pos.y += item.speed;

        // Collision wins over off-screen culling
        if player_hits_item(&state.player, hop, &item) {
            match item.kind {
                ItemKind::Beneficial => {
                    state.score += tuning.collect_points;
                    particles::emit(
                        &mut state.particles,
                        &mut state.rng,
                        item.center(),
                        COLLECT_COLOR,
                        tuning.burst_size,
                        tuning.particle_spread,
                    );
                    state.events.push(GameEvent::Collected { score: state.score });
                    log::debug!("Carrot collected, score {}", state.score);
                    continue;
                }
                ItemKind::Hazardous => {
                    particles::emit(
                        &mut state.particles,
                        &mut state.rng,
                        state.player.center(),
                        IMPACT_COLOR,
                        tuning.burst_size,
                        tuning.particle_spread,
                    );
                    state.phase = GamePhase::GameOver;
                    state.events.push(GameEvent::GameOver { score: state.score });
                    log::info!("Hit a rock, final score {}", state.score);
                    kept.push(item);
                    break;
                }
            }
        }

        if item.pos.y > tuning.canvas_height {
            continue;
        }
        kept.push(item);
    }

    // Items after a fatal hit are left untouched
    kept.extend(pending);
    state.items = kept;
}
