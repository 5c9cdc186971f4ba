//! Deterministic seeding and turn-based state transition

use super::Grid;
use crate::error::LifeError;
use itertools::iproduct;
use rand::Rng;
use rayon::prelude::*;

/// Drives a [`Grid`] from a deterministically seeded initial state through
/// successive generations.
///
/// The engine exclusively owns its grid. Each [`advance`](Self::advance)
/// swaps in a freshly computed generation and retains the displaced one,
/// so the period-1 stability check needs no extra copying.
pub struct SimulationEngine {
    seed: u64,
    grid: Grid,
    previous: Option<Grid>,
    generation: u64,
}

impl SimulationEngine {
    /// Create an engine, drawing a seed from the thread-local generator
    /// when none is supplied.
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<Self, LifeError> {
        match seed {
            Some(seed) => Self::from_seed(width, height, seed),
            None => Self::with_rng(width, height, &mut rand::thread_rng()),
        }
    }

    /// Create an engine with a fixed seed. For a fixed
    /// `(width, height, seed)` triple the initial grid is always
    /// identical.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Result<Self, LifeError> {
        let mut grid = Grid::new(width, height)?;
        grid.cells = seeded_cells(width, height, seed);
        Ok(Self {
            seed,
            grid,
            previous: None,
            generation: 0,
        })
    }

    /// Create an engine with a seed drawn from the supplied generator,
    /// uniform over the seed space capped at `width * height` bits.
    pub fn with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        let cell_count = width.saturating_mul(height);
        let seed = if cell_count >= u64::BITS as usize {
            rng.gen::<u64>()
        } else {
            rng.gen::<u64>() & ((1u64 << cell_count) - 1)
        };
        Self::from_seed(width, height, seed)
    }

    /// The seed the grid was populated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current generation, read-only. The buffer is overwritten by
    /// the next [`advance`](Self::advance); callers wanting to compare
    /// states across ticks must clone first.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the simulation by one generation.
    pub fn advance(&mut self) {
        let next = next_generation(&self.grid);
        self.previous = Some(std::mem::replace(&mut self.grid, next));
        self.generation += 1;
    }

    /// True iff every cell is dead.
    pub fn is_completed(&self) -> bool {
        self.grid.all_dead()
    }

    /// True iff the current generation is identical to the previous one.
    /// Always false before the first [`advance`](Self::advance).
    pub fn is_stable(&self) -> bool {
        self.previous.as_ref().map_or(false, |prev| *prev == self.grid)
    }
}

/// Expand a seed into row-major cell values.
///
/// The seed's minimal binary representation (most significant bit first;
/// a single `0` digit for seed zero) is right-padded with zero bits to
/// the cell count and consumed with the outer loop over rows. A zero bit
/// yields a live cell, a one bit a dead cell. Seeds longer than the cell
/// count are silently truncated to their leading bits.
fn seeded_cells(width: usize, height: usize, seed: u64) -> Vec<bool> {
    let bits = if seed == 0 {
        1
    } else {
        (u64::BITS - seed.leading_zeros()) as usize
    };

    iproduct!(0..height, 0..width)
        .map(|(row, col)| {
            let idx = row * width + col;
            let bit = if idx < bits {
                (seed >> (bits - 1 - idx)) & 1
            } else {
                0
            };
            bit == 0
        })
        .collect()
}

/// Compute the next generation of `current` into a fresh grid.
///
/// Every cell is evaluated against a snapshot of the pre-update state, so
/// the rule applies simultaneously across the grid.
pub fn next_generation(current: &Grid) -> Grid {
    let next_cells: Vec<bool> = (0..current.height)
        .into_par_iter()
        .flat_map(|row| {
            (0..current.width).into_par_iter().map(move |col| {
                let neighbors = current.count_neighbors(row, col);
                let alive = current.cells[current.index(row, col)];

                match (alive, neighbors) {
                    (true, 2) | (true, 3) | (false, 3) => true, // survive or birth
                    _ => false,                                 // death
                }
            })
        })
        .collect();

    Grid {
        width: current.width,
        height: current.height,
        cells: next_cells,
    }
}
