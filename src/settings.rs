//! Player preferences
//!
//! Read from LocalStorage at startup, separately from the high score, and
//! written back whenever a toggle key changes them.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Draw particle bursts (simulation is unaffected)
    pub particles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "bunny_hop_settings";

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Flip particle drawing on or off
    pub fn toggle_particles(&mut self) {
        self.particles = !self.particles;
    }

    /// Flip mute; returns the volume to hand to the audio manager
    pub fn toggle_mute(&mut self) -> f32 {
        self.muted = !self.muted;
        self.effective_volume()
    }

    /// Serialized form written under `STORAGE_KEY`
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self)
            .map_err(|e| log::warn!("Failed to serialize settings: {}", e))
            .ok()
    }

    /// Parse stored settings, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Discarding stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Some(json)) = (storage, self.to_json()) {
            match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(_) => log::warn!("Could not write {}", Self::STORAGE_KEY),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Not persisting {} outside the browser", Self::STORAGE_KEY);
    }
}
