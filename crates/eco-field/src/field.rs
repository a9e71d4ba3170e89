//! The occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in a dense `Vec<Occupant>`:
//!
//! ```text
//! cells[row * width + col]
//! ```
//!
//! A reverse index (`Occupant → Location`) is kept alongside so that placing
//! an agent that already sits somewhere vacates its previous cell, and so
//! that the grid can answer "where is this agent?" in O(1).  Both maps are
//! updated together by every mutating method; at no point does a handle
//! appear in more than one cell.

use eco_core::{EcoError, EcoResult, Location, SimRng, Species};

use rustc_hash::FxHashMap;

use crate::Occupant;

/// Row/column offsets of the Moore neighbourhood, in row-major scan order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A rectangular grid holding at most one agent per cell.
///
/// Dimensions are fixed at construction.  Do not mutate a field owned by a
/// running simulator directly; go through the simulator so the populations
/// stay consistent with it.
#[derive(Clone, Debug)]
pub struct Field {
    depth: usize,
    width: usize,
    cells: Vec<Occupant>,
    positions: FxHashMap<Occupant, Location>,
}

impl Field {
    /// Create an empty `depth` x `width` field.
    ///
    /// Fails with [`EcoError::InvalidConfiguration`] if either dimension is
    /// zero.
    pub fn new(depth: usize, width: usize) -> EcoResult<Self> {
        if depth == 0 || width == 0 {
            return Err(EcoError::InvalidConfiguration(format!(
                "field dimensions must be positive, got {depth}x{width}"
            )));
        }
        Ok(Self {
            depth,
            width,
            cells: vec![Occupant::Empty; depth * width],
            positions: FxHashMap::default(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `true` if `location` lies inside the grid.
    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        location.row < self.depth && location.col < self.width
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` at `location`.
    ///
    /// If the occupant was already placed elsewhere, its previous cell is
    /// vacated first.  Whatever was at `location` is evicted.  Placing
    /// [`Occupant::Empty`] is the same as [`clear`](Self::clear).
    pub fn place(&mut self, occupant: Occupant, location: Location) -> EcoResult<()> {
        let slot = self.slot(location)?;
        if occupant.is_empty() {
            self.clear(location);
            return Ok(());
        }

        if let Some(previous) = self.positions.get(&occupant).copied() {
            if previous != location {
                let prev_slot = self.unchecked_slot(previous);
                self.cells[prev_slot] = Occupant::Empty;
            }
        }

        let evicted = std::mem::replace(&mut self.cells[slot], occupant);
        if !evicted.is_empty() && evicted != occupant {
            self.positions.remove(&evicted);
        }
        self.positions.insert(occupant, location);
        Ok(())
    }

    /// Vacate `location`.  No-op if it is already empty or off the grid.
    pub fn clear(&mut self, location: Location) {
        if !self.contains(location) {
            return;
        }
        let slot = self.unchecked_slot(location);
        let previous = std::mem::take(&mut self.cells[slot]);
        if !previous.is_empty() {
            self.positions.remove(&previous);
        }
    }

    /// Vacate every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(Occupant::Empty);
        self.positions.clear();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Contents of `location`.  Cells off the grid read as empty.
    #[inline]
    pub fn occupant_at(&self, location: Location) -> Occupant {
        if self.contains(location) {
            self.cells[self.unchecked_slot(location)]
        } else {
            Occupant::Empty
        }
    }

    /// Where `occupant` currently sits, if it is placed.
    #[inline]
    pub fn locate(&self, occupant: Occupant) -> Option<Location> {
        self.positions.get(&occupant).copied()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of cells holding `species`.
    pub fn count(&self, species: Species) -> usize {
        self.positions
            .keys()
            .filter(|occ| occ.species() == Some(species))
            .count()
    }

    /// Every cell in row-major order with its contents.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Occupant)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &occ)| (Location::new(i / width, i % width), occ))
    }

    // ── Neighbourhood ─────────────────────────────────────────────────────

    /// In-bounds Moore neighbours of `location` in fixed row-major order.
    ///
    /// Edges and corners yield fewer than eight cells.  `location` itself is
    /// never included.
    pub fn adjacent_locations(&self, location: Location) -> Vec<Location> {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = location.row.checked_add_signed(dr)?;
                let col = location.col.checked_add_signed(dc)?;
                let candidate = Location::new(row, col);
                self.contains(candidate).then_some(candidate)
            })
            .collect()
    }

    /// In-bounds Moore neighbours of `location`, shuffled once with `rng`.
    ///
    /// Callers consume neighbours greedily from the front, so the shuffle is
    /// what keeps agents from drifting in one spatial direction.
    pub fn neighbors(&self, location: Location, rng: &mut SimRng) -> Vec<Location> {
        let mut adjacent = self.adjacent_locations(location);
        rng.shuffle(&mut adjacent);
        adjacent
    }

    /// All unoccupied neighbours of `location`, in shuffled order.
    pub fn free_neighbors(&self, location: Location, rng: &mut SimRng) -> Vec<Location> {
        let mut free = self.neighbors(location, rng);
        free.retain(|&loc| self.occupant_at(loc).is_empty());
        free
    }

    /// One unoccupied neighbour of `location`, or `None` if all are taken.
    pub fn free_neighbor(&self, location: Location, rng: &mut SimRng) -> Option<Location> {
        self.free_neighbors(location, rng).into_iter().next()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn slot(&self, location: Location) -> EcoResult<usize> {
        if self.contains(location) {
            Ok(self.unchecked_slot(location))
        } else {
            Err(EcoError::OutOfBounds {
                location,
                width: self.width,
                depth: self.depth,
            })
        }
    }

    #[inline]
    fn unchecked_slot(&self, location: Location) -> usize {
        location.row * self.width + location.col
    }
}
