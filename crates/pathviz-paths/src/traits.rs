use pathviz_core::{Grid, Point};

use crate::outcome::{SearchError, SearchOutcome};

/// A search that runs over a [`Grid`] in place, tagging cells as it goes.
///
/// `on_step` is called synchronously after every frontier expansion and
/// after every cell of the reconstructed path is tagged, so a renderer can
/// show intermediate states. It cannot cancel the search.
pub trait PathfindingAlgorithm {
    /// Label shown to the operator ("A*", "BFS", ...).
    fn name(&self) -> &'static str;

    /// Search from `start` to `end`.
    ///
    /// Refreshes the grid's neighbour lists first. Cells other than the two
    /// endpoints and barriers may be retagged `Open`, `Closed`, `Path` or
    /// `Jump`.
    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        on_step: &mut dyn FnMut(&Grid),
    ) -> Result<SearchOutcome, SearchError>;
}
