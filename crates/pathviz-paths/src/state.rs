//! Per-search bookkeeping shared by the priority-queue searches, plus the
//! endpoint checks and path tracing every algorithm uses.

use std::collections::BinaryHeap;

use pathviz_core::{CellState, Grid, Point};

use crate::outcome::{SearchError, SearchOutcome};

/// Parent of a root cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Entry in the open heap, ordered by `f` then by insertion sequence.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, oldest first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for OpenEntry {}

/// g/f scores, predecessors and the open heap of one search direction.
///
/// A cell whose score improves while it is queued is pushed again; the
/// outdated entry is dropped when it surfaces.
pub(crate) struct SearchState {
    pub(crate) g: Vec<f64>,
    f: Vec<f64>,
    pub(crate) parent: Vec<usize>,
    open: Vec<bool>,
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
    pub(crate) nbuf: Vec<Point>,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            g: vec![f64::INFINITY; len],
            f: vec![f64::INFINITY; len],
            parent: vec![NO_PARENT; len],
            open: vec![false; len],
            heap: BinaryHeap::new(),
            seq: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Make `idx` the root of the search.
    pub(crate) fn seed(&mut self, idx: usize, f: f64) {
        self.g[idx] = 0.0;
        self.push(idx, f);
    }

    /// Queue `idx` with priority `f`.
    pub(crate) fn push(&mut self, idx: usize, f: f64) {
        self.f[idx] = f;
        self.open[idx] = true;
        self.heap.push(OpenEntry {
            idx,
            f,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop the best queued cell, skipping outdated entries.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            if !self.open[e.idx] || e.f > self.f[e.idx] {
                continue;
            }
            self.open[e.idx] = false;
            return Some(e.idx);
        }
        None
    }

    #[inline]
    pub(crate) fn is_open(&self, idx: usize) -> bool {
        self.open[idx]
    }

    /// Whether this direction has discovered `idx` (queued or expanded).
    #[inline]
    pub(crate) fn reached(&self, idx: usize) -> bool {
        self.g[idx].is_finite()
    }
}

/// Validate the endpoints and refresh neighbour lists.
///
/// Returns the flat indices of `start` and `end`.
pub(crate) fn prepare(
    name: &str,
    grid: &mut Grid,
    start: Point,
    end: Point,
) -> Result<(usize, usize), SearchError> {
    let si = grid.idx(start).ok_or(SearchError::OutOfBounds(start))?;
    let ei = grid.idx(end).ok_or(SearchError::OutOfBounds(end))?;
    for p in [start, end] {
        if !grid.is_walkable(p) {
            return Err(SearchError::BlockedEndpoint(p));
        }
    }
    if si == ei {
        return Err(SearchError::CoincidentEndpoints(start));
    }
    grid.update_neighbors();
    log::debug!("{name}: searching {start} -> {end}");
    Ok((si, ei))
}

/// Log the summary and hand it back.
pub(crate) fn finish(name: &str, outcome: SearchOutcome) -> SearchOutcome {
    if !outcome.found() {
        log::debug!("{name}: frontier exhausted");
    }
    log::info!("{name}: {outcome}");
    outcome
}

/// Walk predecessors back from `from`, tagging each cell `Path`.
///
/// Calls `on_step` once per hop and returns the number of hops. Endpoints
/// keep their tags.
pub(crate) fn trace_path(
    grid: &mut Grid,
    parent: &[usize],
    from: usize,
    on_step: &mut dyn FnMut(&Grid),
) -> usize {
    let mut hops = 0;
    let mut cur = from;
    while parent[cur] != NO_PARENT {
        cur = parent[cur];
        let p = grid.point(cur);
        grid.mark(p, CellState::Path);
        hops += 1;
        on_step(grid);
    }
    hops
}
