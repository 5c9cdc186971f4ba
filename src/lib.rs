//! Seeded Game of Life Simulator
//!
//! This library expands an integer seed into a deterministic initial grid
//! and advances it generation by generation until every cell is dead, the
//! state stops changing, or a configured generation cap is reached.

pub mod config;
pub mod error;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use life::{Grid, RunReport, SimulationEngine, Termination};

use anyhow::Result;
use std::time::Instant;

/// Drive a simulation to termination.
///
/// `observe` is invoked with the engine once per generation, including the
/// initial and terminal states, so a caller can render each frame. The
/// loop stops when every cell is dead, when a generation equals the one
/// before it, or when the configured generation cap is hit.
pub fn run_simulation<F>(settings: &Settings, mut observe: F) -> Result<RunReport>
where
    F: FnMut(&SimulationEngine),
{
    settings.validate()?;

    let mut engine = SimulationEngine::new(
        settings.grid.width,
        settings.grid.height,
        settings.simulation.seed,
    )?;

    let start = Instant::now();
    let termination = loop {
        observe(&engine);

        if engine.is_completed() {
            break Termination::AllDead;
        }
        if engine.is_stable() {
            break Termination::Stable;
        }
        if let Some(limit) = settings.simulation.max_generations {
            if engine.generation() >= limit {
                break Termination::GenerationLimit;
            }
        }

        engine.advance();
    };

    Ok(RunReport::new(&engine, termination, start.elapsed()))
}

/// Headless form of [`run_simulation`].
pub fn run_to_completion(settings: &Settings) -> Result<RunReport> {
    run_simulation(settings, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(width: usize, height: usize, seed: u64) -> Settings {
        let mut settings = Settings::default();
        settings.grid.width = width;
        settings.grid.height = height;
        settings.simulation.seed = Some(seed);
        settings
    }

    #[test]
    fn test_lone_cell_run_ends_all_dead() {
        // 495 seeds a single live center cell on 3x3.
        let report = run_to_completion(&settings(3, 3, 495)).unwrap();
        assert_eq!(report.termination, Termination::AllDead);
        assert_eq!(report.generations, 1);
        assert_eq!(report.final_population, 0);
    }

    #[test]
    fn test_block_run_ends_stable() {
        // 63903 seeds a 2x2 block centered in a 4x4 grid.
        let report = run_to_completion(&settings(4, 4, 63_903)).unwrap();
        assert_eq!(report.termination, Termination::Stable);
        assert_eq!(report.generations, 1);
        assert_eq!(report.final_population, 4);
    }

    #[test]
    fn test_oscillator_run_hits_generation_cap() {
        // 455 seeds a blinker; it never dies out or stabilizes.
        let mut settings = settings(3, 3, 455);
        settings.simulation.max_generations = Some(10);

        let report = run_to_completion(&settings).unwrap();
        assert_eq!(report.termination, Termination::GenerationLimit);
        assert_eq!(report.generations, 10);
        assert_eq!(report.final_population, 3);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let mut settings = settings(3, 3, 455);
        settings.simulation.max_generations = Some(4);

        let mut observed = Vec::new();
        run_simulation(&settings, |engine| observed.push(engine.generation())).unwrap();

        // Initial state plus one call per advance, including the terminal one.
        assert_eq!(observed, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = settings(0, 3, 1);
        assert!(run_to_completion(&settings).is_err());
    }
}
