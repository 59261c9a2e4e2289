use std::fmt;
use std::str::FromStr;

use pathviz_core::ParseKindError;

/// The selectable maze generators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MazeKind {
    RecursiveBacktracker,
    GrowingTree,
    BinaryTree,
    Sidewinder,
    /// No generation: the grid is cleared for hand placement.
    #[default]
    Custom,
}

impl MazeKind {
    pub const ALL: [MazeKind; 5] = [
        Self::RecursiveBacktracker,
        Self::GrowingTree,
        Self::BinaryTree,
        Self::Sidewinder,
        Self::Custom,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::RecursiveBacktracker => "Recursive Backtracker",
            Self::GrowingTree => "Growing Tree",
            Self::BinaryTree => "Binary Tree",
            Self::Sidewinder => "Sidewinder",
            Self::Custom => "Custom",
        }
    }

    /// Name accepted by [`FromStr`] and used in config files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::RecursiveBacktracker => "recursive-backtracker",
            Self::GrowingTree => "growing-tree",
            Self::BinaryTree => "binary-tree",
            Self::Sidewinder => "sidewinder",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(t) || k.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseKindError::new("maze", s))
    }
}
