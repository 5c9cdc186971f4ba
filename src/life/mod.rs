//! Simulation core: grid storage, the seeded engine, and run reports

pub mod engine;
pub mod grid;
pub mod report;

pub use engine::{next_generation, SimulationEngine};
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use report::{RunReport, Termination};
