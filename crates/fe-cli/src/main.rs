//! Future Engineers field randomizer
//!
//! Usage:
//!   fe-field obstacle            - Draw an obstacle challenge field and render it
//!   fe-field open                - Draw an open challenge field
//!   fe-field example-config      - Print a config file with all defaults

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fe_layout::project;
use fe_randomizer::{CardTable, FieldRandomizer};
use fe_render::render_to_file;

use crate::config::FieldConfig;

#[derive(Parser)]
#[command(name = "fe-field", version, about = "Future Engineers field randomizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for a reproducible draw
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Print each toss
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the draw as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw an obstacle challenge field and render the layout image
    Obstacle {
        /// Playfield image to draw on
        #[arg(short, long)]
        base_image: Option<PathBuf>,

        /// Output PNG
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the playfield orientation instead of turning parking to the bottom
        #[arg(long)]
        no_rotate: bool,

        /// Do not open the written image
        #[arg(long)]
        no_open: bool,

        /// Only draw, skip the image
        #[arg(long)]
        no_render: bool,
    },
    /// Draw an open challenge field
    Open,
    /// Print a config file with all defaults
    ExampleConfig,
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = FieldConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(seed) = cli.seed {
        config.randomizer = config.randomizer.with_seed(seed);
    }

    match cli.command {
        Commands::ExampleConfig => {
            println!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Open => run_open(&config, cli.json),
        Commands::Obstacle {
            base_image,
            output,
            no_rotate,
            no_open,
            no_render,
        } => {
            if let Some(path) = base_image {
                config.render.base_image = path;
            }
            if let Some(path) = output {
                config.render.output_image = path;
            }
            config.render.rotate_to_start &= !no_rotate;
            config.render.open_viewer &= !no_open;
            run_obstacle(&config, cli.json, !no_render)
        }
    }
}

fn run_open(config: &FieldConfig, json: bool) -> Result<()> {
    let mut randomizer = FieldRandomizer::with_config(&config.randomizer);
    let draw = randomizer.open().context("Open challenge draw failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draw)?);
    } else {
        println!("--- WRO Future Engineers 2025: Open Challenge ---");
        println!("{draw}");
    }
    Ok(())
}

fn run_obstacle(config: &FieldConfig, json: bool, render: bool) -> Result<()> {
    let mut randomizer = FieldRandomizer::with_config(&config.randomizer);
    let draw = randomizer.obstacle();

    if json {
        println!("{}", serde_json::to_string_pretty(&draw)?);
    } else {
        println!("--- WRO Future Engineers 2025: Obstacle Challenge ---");
        println!("{draw}");
    }

    if !render {
        return Ok(());
    }

    let layout = project(&draw, &CardTable::standard());
    match render_to_file(&config.render, &layout) {
        Ok(path) => {
            log::info!("Successfully generated layout image '{}'", path.display());
            Ok(())
        }
        Err(e) if e.is_base_image_error() => {
            log::error!("{e}");
            log::error!("Place the playfield image at the configured path or pass --base-image");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to render layout image"),
    }
}
