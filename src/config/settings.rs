//! Configuration settings for the simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for the initial grid; drawn at random when absent.
    pub seed: Option<u64>,
    /// Seconds to pause between rendered generations.
    pub tick_seconds: f64,
    /// Hard cap on generations. Oscillating states never trip the
    /// stability check, so unbounded runs may not terminate without one.
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub charset: CellCharset,
    /// Where to write the JSON run report, if anywhere.
    pub report_file: Option<PathBuf>,
}

/// Glyph set used when rendering a grid to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellCharset {
    /// Block glyphs: `█` live, `·` dead.
    Blocks,
    /// `0` live, `1` dead, matching the seed bit convention.
    Digits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 20,
                height: 20,
            },
            simulation: SimulationConfig {
                seed: None,
                tick_seconds: 1.0,
                max_generations: None,
            },
            output: OutputConfig {
                charset: CellCharset::Blocks,
                report_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if !self.simulation.tick_seconds.is_finite() || self.simulation.tick_seconds < 0.0 {
            anyhow::bail!(
                "Tick interval must be a non-negative number of seconds, got {}",
                self.simulation.tick_seconds
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(tick_seconds) = cli_overrides.tick_seconds {
            self.simulation.tick_seconds = tick_seconds;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(ref report_file) = cli_overrides.report_file {
            self.output.report_file = Some(report_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
    pub tick_seconds: Option<f64>,
    pub max_generations: Option<u64>,
    pub report_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.tick_seconds = -0.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.tick_seconds = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 8;
        settings.simulation.seed = Some(42);
        settings.output.charset = CellCharset::Digits;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.width, 8);
        assert_eq!(loaded.simulation.seed, Some(42));
        assert_eq!(loaded.output.charset, CellCharset::Digits);
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut settings = Settings::default();
        settings.simulation.seed = Some(1);

        let overrides = CliOverrides {
            width: Some(5),
            seed: Some(99),
            max_generations: Some(200),
            ..CliOverrides::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.width, 5);
        assert_eq!(settings.grid.height, 20);
        assert_eq!(settings.simulation.seed, Some(99));
        assert_eq!(settings.simulation.max_generations, Some(200));
    }
}
