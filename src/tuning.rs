//! Data-driven game balance
//!
//! Defaults mirror `crate::consts`; a JSON file can override any subset.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    /// Pixels per tick per held direction
    pub player_speed: f32,

    pub item_width: f32,
    pub item_height: f32,
    /// Fall speed (pixels/tick) of items spawned at score 0
    pub base_item_speed: f32,
    pub spawn_interval: u64,
    pub beneficial_threshold: f32,
    pub speed_score_divisor: f32,
    pub collect_points: u64,

    pub hop_frequency: f32,
    pub hop_amplitude: f32,

    pub burst_size: usize,
    pub particle_spread: f32,
    pub particle_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_speed: PLAYER_SPEED,

            item_width: ITEM_WIDTH,
            item_height: ITEM_HEIGHT,
            base_item_speed: BASE_ITEM_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            beneficial_threshold: BENEFICIAL_THRESHOLD,
            speed_score_divisor: SPEED_SCORE_DIVISOR,
            collect_points: COLLECT_POINTS,

            hop_frequency: HOP_FREQUENCY,
            hop_amplitude: HOP_AMPLITUDE,

            burst_size: BURST_SIZE,
            particle_spread: PARTICLE_SPREAD,
            particle_decay: PARTICLE_DECAY,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning file. Returns `None` on malformed
    /// JSON or values that would break the simulation.
    pub fn from_json(json: &str) -> Option<Self> {
        let tuning: Tuning = match serde_json::from_str(json) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Ignoring tuning file: {}", e);
                return None;
            }
        };
        if !tuning.is_valid() {
            log::warn!("Ignoring tuning file: values out of range");
            return None;
        }
        Some(tuning)
    }

    /// Sanity checks the simulation relies on
    pub fn is_valid(&self) -> bool {
        self.spawn_interval > 0
            && self.speed_score_divisor > 0.0
            && self.canvas_width > self.player_width
            && self.canvas_width > self.item_width
            && self.particle_decay > 0.0
    }

    /// Fixed y of the bunny's top edge
    pub fn player_y(&self) -> f32 {
        self.canvas_height - self.player_bottom_margin
    }

    /// Bunny x when centered on the canvas
    pub fn player_start_x(&self) -> f32 {
        self.canvas_width / 2.0 - self.player_width / 2.0
    }

    /// Rightmost legal bunny x
    pub fn player_max_x(&self) -> f32 {
        self.canvas_width - self.player_width
    }

    /// Fall speed for an item created at the given score
    pub fn item_speed_for_score(&self, score: u64) -> f32 {
        self.base_item_speed + score as f32 / self.speed_score_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout() {
        let t = Tuning::default();
        assert_eq!(t.player_y(), 600.0);
        assert_eq!(t.player_start_x(), 224.0);
        assert_eq!(t.player_max_x(), 448.0);
    }

    #[test]
    fn test_item_speed_scales_with_score() {
        let t = Tuning::default();
        assert_eq!(t.item_speed_for_score(0), 3.0);
        assert!((t.item_speed_for_score(250) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "spawn_interval": 30 }"#).unwrap();
        assert_eq!(t.spawn_interval, 30);
        assert_eq!(t.canvas_width, CANVAS_WIDTH);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(Tuning::from_json("not json").is_none());
        assert!(Tuning::from_json(r#"{ "spawn_interval": 0 }"#).is_none());
    }
}
