// Game timing & sound settings, persisted in localStorage as JSON.
use serde::{Deserialize, Serialize};
use web_sys::Storage;

use crate::error::{js_message, Error, Result};

const STORAGE_KEY: &str = "pt_config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the fingers must stay down before one is picked.
    pub pick_delay_ms: u32,
    /// How long the chosen finger stays lit before the surface resets.
    pub reveal_ms: u32,
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pick_delay_ms: 2000,
            reveal_ms: 4000,
            sound: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pick_delay_ms == 0 {
            return Err(Error::Invalid("pick_delay_ms must be positive"));
        }
        if self.reveal_ms == 0 {
            return Err(Error::Invalid("reveal_ms must be positive"));
        }
        Ok(())
    }

    /// Stored config, or defaults when nothing usable is stored.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("using default config: {}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Option<Self>> {
        let store = storage()?;
        let raw = store
            .get_item(STORAGE_KEY)
            .map_err(|e| Error::Storage(js_message(&e)))?;
        raw.map(|r| Self::from_json(&r)).transpose()
    }

    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| Error::Storage(js_message(&e)))
    }
}

fn storage() -> Result<Storage> {
    let win = web_sys::window().ok_or(Error::NoWindow)?;
    match win.local_storage() {
        Ok(Some(store)) => Ok(store),
        _ => Err(Error::NoStorage),
    }
}
