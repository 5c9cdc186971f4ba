//! Run summaries for finished simulations

use super::SimulationEngine;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every cell died.
    AllDead,
    /// The grid stopped changing between generations.
    Stable,
    /// The configured generation cap was reached.
    GenerationLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Termination::AllDead => "all cells are dead",
            Termination::Stable => "the grid is in a stable state",
            Termination::GenerationLimit => "the generation limit was reached",
        };
        f.write_str(message)
    }
}

/// Summary of a finished run, suitable for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Grid width (columns).
    pub width: usize,
    /// Grid height (rows).
    pub height: usize,
    /// Seed the initial grid was expanded from.
    pub seed: u64,
    /// Generations advanced before termination.
    pub generations: u64,
    /// Why the run stopped.
    pub termination: Termination,
    /// Living cells in the final generation.
    pub final_population: usize,
    /// Wall time of the run.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunReport {
    /// Snapshot a finished engine into a report.
    pub fn new(engine: &SimulationEngine, termination: Termination, elapsed: Duration) -> Self {
        Self {
            width: engine.grid().width,
            height: engine.grid().height,
            seed: engine.seed(),
            generations: engine.generation(),
            termination,
            final_population: engine.grid().living_count(),
            elapsed,
        }
    }

    /// Convert to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as JSON, creating parent directories as needed.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json().context("Failed to serialize run report")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write report to {}", path.as_ref().display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn finished_engine() -> SimulationEngine {
        // Lone center cell on 3x3; dies after one generation.
        let mut engine = SimulationEngine::from_seed(3, 3, 495).unwrap();
        engine.advance();
        engine
    }

    #[test]
    fn test_report_snapshots_engine_state() {
        let engine = finished_engine();
        let report = RunReport::new(&engine, Termination::AllDead, Duration::from_millis(5));

        assert_eq!(report.width, 3);
        assert_eq!(report.height, 3);
        assert_eq!(report.seed, 495);
        assert_eq!(report.generations, 1);
        assert_eq!(report.final_population, 0);
    }

    #[test]
    fn test_report_round_trips_through_file() {
        let engine = finished_engine();
        let report = RunReport::new(&engine, Termination::AllDead, Duration::ZERO);

        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/run.json");
        report.save_to_file(&path).unwrap();

        let loaded: RunReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.seed, report.seed);
        assert_eq!(loaded.termination, Termination::AllDead);
    }

    #[test]
    fn test_termination_messages() {
        assert_eq!(Termination::Stable.to_string(), "the grid is in a stable state");
        assert_eq!(Termination::AllDead.to_string(), "all cells are dead");
    }
}
