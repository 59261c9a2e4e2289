//! Visualizer settings: which algorithm, heuristic and maze to use.

use std::fmt;
use std::path::Path;

use pathviz_core::DEFAULT_SIZE;
use pathviz_maze::MazeKind;
use pathviz_paths::{Algorithm, Heuristic};
use serde::{Deserialize, Serialize};

/// Smallest grid that still holds a maze room.
pub const MIN_GRID_SIZE: i32 = 3;
/// Largest accepted grid side; every cell owns a neighbour list.
pub const MAX_GRID_SIZE: i32 = 512;

/// The operator's selections, passed to every engine entry point.
///
/// Missing fields in a config file fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    pub maze: MazeKind,
    pub grid_size: i32,
    /// Seed for maze generation; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            heuristic: Heuristic::Manhattan,
            maze: MazeKind::Custom,
            grid_size: DEFAULT_SIZE,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    GridSize(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Json(e) => write!(f, "invalid config: {e}"),
            Self::GridSize(n) => {
                write!(
                    f,
                    "grid size {n} is outside {MIN_GRID_SIZE}..={MAX_GRID_SIZE}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::GridSize(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
