//! RON data loader
//!
//! Loads the move catalog and engine tuning from external RON files, with
//! fallback to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{DataError, Result};
use super::moves::{default_move_catalog, MoveCatalog};

/// Default location of the data files
pub const DATA_DIR: &str = "assets/data";
pub const MOVES_FILE: &str = "moves.ron";
pub const ENGINE_FILE: &str = "engine.ron";

/// Everything the engine reads from disk
#[derive(Debug, Clone)]
pub struct DataManager {
    pub moves: MoveCatalog,
    pub engine: EngineConfig,
}

impl DataManager {
    /// Load from `assets/data/`, falling back to defaults per file
    pub fn new() -> Self {
        Self::load_from_dir(Path::new(DATA_DIR))
    }

    /// Load each file from `dir`. A missing file silently uses the default;
    /// an unreadable or invalid one logs a warning and uses the default.
    pub fn load_from_dir(dir: &Path) -> Self {
        let moves = MoveCatalog::load_from(&dir.join(MOVES_FILE));
        let engine = EngineConfig::load_or_default(&dir.join(ENGINE_FILE));
        Self { moves, engine }
    }

    pub fn move_catalog(&self) -> &MoveCatalog {
        &self.moves
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            moves: default_move_catalog(),
            engine: EngineConfig::default(),
        }
    }
}

impl MoveCatalog {
    /// Load a validated catalog from RON, or the built-in moves
    pub fn load_from(path: &Path) -> Self {
        load_or_default(path, "moves", |catalog: &MoveCatalog| catalog.validate())
            .unwrap_or_else(default_move_catalog)
    }
}

/// Read and parse a RON file
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    ron::from_str(&content).map_err(|e| DataError::parse(path, e))
}

/// Pretty-print a value to a RON file
pub fn write_ron<T: Serialize>(path: &Path, value: &T, what: &'static str) -> Result<()> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|e| DataError::Serialize { what, message: e.to_string() })?;
    fs::write(path, text).map_err(|e| DataError::io(path, e))
}

fn load_or_default<T, V>(path: &Path, what: &str, validate: V) -> Option<T>
where
    T: DeserializeOwned,
    V: Fn(&T) -> Result<()>,
{
    if !path.exists() {
        return None;
    }
    match load_ron::<T>(path).and_then(|value| validate(&value).map(|_| value)) {
        Ok(value) => {
            log::info!("Loaded {} from {}", what, path.display());
            Some(value)
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", what, e);
            None
        }
    }
}

/// Write the built-in move catalog to `path`
pub fn export_default_moves(path: &Path) -> Result<()> {
    write_ron(path, &default_move_catalog(), "moves")
}

/// Write the built-in moves and engine tuning to `dir` for easy editing
pub fn export_default_data(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| DataError::io(dir, e))?;
    }
    export_default_moves(&dir.join(MOVES_FILE))?;
    write_ron(&dir.join(ENGINE_FILE), &EngineConfig::default(), "engine config")?;
    Ok(())
}
