use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use soil_dem::container::{pair_count, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "soil-dem")]
#[command(about = "Particle generation and contact detection for clay/sand DEM containers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the configured particles and report the contacts
    Generate {
        /// JSON container configuration
        #[arg(short, long)]
        config: PathBuf,

        /// RNG seed, overrides the one in the configuration
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print the grids a configuration leads to without generating anything
    Inspect {
        /// JSON container configuration
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting soil-dem v{}", soil_dem::VERSION);

    match cli.command {
        Commands::Generate { config, seed } => generate(&config, seed),
        Commands::Inspect { config } => inspect(&config),
    }
}

fn load_config(path: &Path) -> Result<ContainerConfig> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = ContainerConfig::from_json_str(&json).with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

fn generate(path: &Path, seed: Option<u64>) -> Result<()> {
    let mut config = load_config(path)?;
    if seed.is_some() {
        config.seed = seed;
    }

    let mut container = Container::new(config).context("Failed to build the container")?;
    let placed = container.generate_particles().context("Particle generation failed")?;
    container.refresh();

    println!("Placed {} particles", placed.len());
    println!("Mechanical contact pairs: {}", pair_count(container.mechanical_contacts()));
    println!("Chemical contact pairs: {}", pair_count(container.chemical_contacts()));
    println!("Wall contacts: {}", container.wall_contacts().len());
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    let container = Container::new(config).context("Failed to build the container")?;

    println!(
        "Container {} x {} nm, {:?}",
        container.config().length,
        container.config().width,
        container.config().simulation_type
    );
    for (hierarchy, group) in container.groups().iter().enumerate() {
        let mechanical = &container.mechanical_grids()[hierarchy];
        let chemical = &container.chemical_grids()[hierarchy];
        println!(
            "Group {} {}: {} particles of {}-{} nm, mechanical grid {}x{} ({} nm), chemical grid {}x{} ({:.1} nm)",
            hierarchy,
            group.mineral,
            group.quantity,
            group.size_lower_bound,
            group.size_upper_bound,
            mechanical.number_of_columns,
            mechanical.number_of_rows,
            mechanical.box_length,
            chemical.number_of_columns,
            chemical.number_of_rows,
            chemical.box_length
        );
    }
    Ok(())
}
