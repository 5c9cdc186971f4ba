//! Main CLI application for the seeded Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seeded_life::{
    config::{CliOverrides, Settings},
    life::SimulationEngine,
    run_simulation,
    utils::{ColorOutput, GridRenderer, CLEAR_SCREEN},
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "seeded_life")]
#[command(about = "Seed-driven Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until it terminates
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in columns (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in rows (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Seed for the initial grid (overrides config; random if unset)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Seconds between rendered generations (overrides config)
        #[arg(short, long)]
        tick: Option<f64>,

        /// Stop after this many generations (overrides config)
        #[arg(short = 'g', long)]
        max_generations: Option<u64>,

        /// Write a JSON run report to this path (overrides config)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Skip frame rendering and pacing
        #[arg(short, long)]
        quiet: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the seeded initial grid without advancing it
    Preview {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in columns (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in rows (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Seed for the initial grid (overrides config; random if unset)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            seed,
            tick,
            max_generations,
            report,
            quiet,
            verbose,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                seed,
                tick_seconds: tick,
                max_generations,
                report_file: report,
            };
            run_command(config, overrides, quiet, verbose)
        }
        Commands::Preview {
            config,
            width,
            height,
            seed,
        } => preview_command(config, width, height, seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from a file, falling back to defaults with a warning.
fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.width, settings.grid.height);
        println!(
            "  Seed: {}",
            settings
                .simulation
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string())
        );
        println!("  Tick: {:.3}s", settings.simulation.tick_seconds);
        match settings.simulation.max_generations {
            Some(limit) => println!("  Generation cap: {}", limit),
            None => println!("  Generation cap: none"),
        }
        println!();
    }

    let renderer = GridRenderer::new(settings.output.charset);
    let tick = Duration::from_secs_f64(settings.simulation.tick_seconds);

    let report = run_simulation(&settings, |engine| {
        if quiet {
            return;
        }
        print!("{}", CLEAR_SCREEN);
        print!("{}", renderer.render(engine.grid()));
        println!(
            "seed {} | generation {} | {} live",
            engine.seed(),
            engine.generation(),
            engine.grid().living_count()
        );
        thread::sleep(tick);
    })
    .context("Simulation failed")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Simulation finished after {} generation(s): {} (seed {})",
            report.generations, report.termination, report.seed
        ))
    );

    if let Some(ref path) = settings.output.report_file {
        report
            .save_to_file(path)
            .context("Failed to save run report")?;
        println!(
            "{}",
            ColorOutput::info(&format!("Report saved to {}", path.display()))
        );
    }

    Ok(())
}

fn preview_command(
    config_path: PathBuf,
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    let overrides = CliOverrides {
        width,
        height,
        seed,
        ..CliOverrides::default()
    };
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let engine = SimulationEngine::new(
        settings.grid.width,
        settings.grid.height,
        settings.simulation.seed,
    )?;
    let grid = engine.grid();

    println!(
        "Initial grid ({}x{}), seed {}:",
        grid.width,
        grid.height,
        engine.seed()
    );
    let renderer = GridRenderer::new(settings.output.charset);
    println!("{}", renderer.render_with_coords(grid));

    println!("Grid statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!(
        "  Density: {:.1}%",
        (grid.living_count() as f64 / (grid.width * grid.height) as f64) * 100.0
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let variants_dir = config_dir.join("examples");

    // Small grid, fast ticks: good for watching patterns by hand.
    let mut quick = Settings::default();
    quick.grid.width = 8;
    quick.grid.height = 8;
    quick.simulation.tick_seconds = 0.25;
    quick.to_file(&variants_dir.join("quick.yaml"))?;

    // Large bounded run with a report, for headless use.
    let mut bounded = Settings::default();
    bounded.grid.width = 40;
    bounded.grid.height = 20;
    bounded.simulation.tick_seconds = 0.05;
    bounded.simulation.max_generations = Some(500);
    bounded.output.report_file = Some(PathBuf::from("output/run_report.json"));
    bounded.to_file(&variants_dir.join("bounded.yaml"))?;

    println!("Created example configurations in: {}", variants_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Reproduce a run by passing its seed: cargo run -- run --seed <seed>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "seeded_life",
            "run",
            "--width",
            "10",
            "--height",
            "6",
            "--seed",
            "12345",
            "--quiet",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_rejects_non_integer_seed() {
        let cli = Cli::try_parse_from(["seeded_life", "run", "--seed", "not-a-number"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_tick() {
        let cli = Cli::try_parse_from(["seeded_life", "run", "--tick", "fast"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/quick.yaml").exists());
        assert!(temp_dir.path().join("config/examples/bounded.yaml").exists());
    }
}
