//! Save/load for on-disk game state (".mfg" files).
//!
//! The file is a versioned JSON envelope around [`GameState`]. Nothing
//! outside this module inspects the bytes; the contract is that loading a
//! saved state reproduces it exactly (positions, sizes, mine order).

use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use minefield_core::state::GameState;

/// Save file format version (increment when the format changes).
pub const SAVE_VERSION: u32 = 1;

/// Conventional save file extension.
pub const SAVE_EXTENSION: &str = "mfg";

/// Full save data written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version.
    pub version: u32,
    /// Unix seconds at save time. Informational only.
    pub timestamp: u64,
    /// The persisted game state.
    pub state: GameState,
}

/// Write the given state to `path`, creating parent directories as needed.
pub fn save_to_file(path: &Path, state: &GameState) -> Result<(), SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        timestamp: unix_timestamp(),
        state: state.clone(),
    };

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a game state back from `path`.
pub fn load_from_file(path: &Path) -> Result<GameState, LoadError> {
    let json = fs::read_to_string(path)?;
    let data: SaveData = serde_json::from_str(&json)?;

    if data.version != SAVE_VERSION {
        return Err(LoadError::VersionMismatch {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }
    Ok(data.state)
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Errors that can occur while saving.
#[derive(Debug)]
pub enum SaveError {
    /// No game state exists to persist.
    NoActiveGame,
    Io(io::Error),
    Serialize(serde_json::Error),
}

/// Errors that can occur while loading.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<io::Error> for SaveError {
    fn from(e: io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Serialize(e)
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::NoActiveGame => write!(f, "no active game to save"),
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Serialize(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Parse(e) => write!(f, "parse error: {}", e),
            LoadError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
impl std::error::Error for LoadError {}
