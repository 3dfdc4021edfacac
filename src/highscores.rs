//! High score tracking
//!
//! Persisted to LocalStorage as a plain decimal string under a stable key, so
//! saves from earlier builds keep working. Storage problems never reach the
//! game loop: reads fall back to 0, failed writes are logged and ignored.

/// LocalStorage key for the best score
pub const STORAGE_KEY: &str = "bunnyHopHighScore";

/// Where the best score lives between page loads
pub trait HighScoreStore {
    /// Stored best score, or `None` if absent or unreadable
    fn load(&self) -> Option<u64>;
    /// Persist the best score. Returns false if the write failed.
    fn save(&mut self, score: u64) -> bool;
}

/// Parse a stored value. Older saves may hold a JS number like "120" or "1.2e2".
pub fn parse_stored(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(score) = raw.parse::<u64>() {
        return Some(score);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v as u64),
        _ => None,
    }
}

/// Best score seen so far; never decreases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Load from a store, defaulting to 0
    pub fn load(store: &dyn HighScoreStore) -> Self {
        match store.load() {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self::new(best)
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a final score. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    /// Simulate an unavailable backend
    pub fail_writes: bool,
    pub writes: u32,
}

impl MemoryStore {
    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Option<u64> {
        self.value
    }

    fn save(&mut self, score: u64) -> bool {
        if self.fail_writes {
            return false;
        }
        self.value = Some(score);
        self.writes += 1;
        true
    }
}

/// Browser LocalStorage backend (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> Option<u64> {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable - high score not loaded");
            return None;
        };
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        let parsed = parse_stored(&raw);
        if parsed.is_none() {
            log::warn!("Ignoring unreadable high score {:?}", raw);
        }
        parsed
    }

    fn save(&mut self, score: u64) -> bool {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable - high score not saved");
            return false;
        };
        match storage.set_item(STORAGE_KEY, &score.to_string()) {
            Ok(()) => {
                log::info!("High score saved ({})", score);
                true
            }
            Err(_) => {
                log::warn!("Failed to save high score");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored("120"), Some(120));
        assert_eq!(parse_stored(" 40\n"), Some(40));
        assert_eq!(parse_stored("1.2e2"), Some(120));
        assert_eq!(parse_stored("-5"), None);
        assert_eq!(parse_stored("carrots"), None);
        assert_eq!(parse_stored(""), None);
    }

    #[test]
    fn test_record_only_raises() {
        let mut hs = HighScore::new(50);
        assert!(!hs.record(30));
        assert!(!hs.record(50));
        assert_eq!(hs.best(), 50);
        assert!(hs.record(60));
        assert_eq!(hs.best(), 60);
    }

    #[test]
    fn test_load_defaults_to_zero() {
        let store = MemoryStore::default();
        assert_eq!(HighScore::load(&store).best(), 0);
        let store = MemoryStore::with_value(90);
        assert_eq!(HighScore::load(&store).best(), 90);
    }
}
