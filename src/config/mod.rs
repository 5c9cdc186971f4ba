//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CellCharset, CliOverrides, GridConfig, OutputConfig, Settings, SimulationConfig,
};
