//! Habitable Zone Explorer CLI
//!
//! Usage:
//!   hz-explorer list
//!   hz-explorer show --system "TRAPPIST-1" --planet 4
//!   hz-explorer custom --luminosity 1.7 --exoplanets 0.074,1.01 --labels b,h -o custom.png
//!   hz-explorer interactive

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use habitable_zone::{HabitableZone, Scene};
use hz_explorer::details::format_planet_summary;
use hz_explorer::render::{export_scene_json, DEFAULT_IMAGE_SIZE};
use hz_explorer::{session, Controller, ExplorerError, FileRenderer, RenderConfig};
use star_catalog::Catalog;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "hz-explorer",
    about = "Plot exoplanet orbits against their star's habitable zone"
)]
#[command(version)]
struct Args {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Diagram output file (.svg or .png)
    #[arg(short, long, global = true, default_value = "habitable_zone.svg")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_IMAGE_SIZE)]
    width: u32,

    /// Image height in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_IMAGE_SIZE)]
    height: u32,

    /// Also write the plotted scene as JSON
    #[arg(long, global = true)]
    scene_json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog systems
    List,

    /// Show a catalog system and plot its habitable zone
    Show {
        /// Catalog index or system name
        #[arg(short, long)]
        system: String,

        /// Planet index within the system
        #[arg(short, long)]
        planet: Option<usize>,
    },

    /// Plot a custom system
    Custom {
        /// Star luminosity in solar luminosities
        #[arg(short, long, allow_hyphen_values = true)]
        luminosity: String,

        /// Comma-separated semi-major axes in AU
        #[arg(short, long, allow_hyphen_values = true)]
        exoplanets: String,

        /// Comma-separated planet labels
        #[arg(long)]
        labels: String,
    },

    /// Read commands from standard input
    Interactive,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin()?,
    };
    info!("Catalog ready: {} systems", catalog.len());

    let renderer = FileRenderer::new(RenderConfig {
        output: args.output.clone(),
        width: args.width,
        height: args.height,
    });
    let mut controller = Controller::new(catalog, renderer);

    match args.command {
        Command::List => {
            for (i, system) in controller.catalog().iter().enumerate() {
                println!(
                    "{:>3}  {:<24} L={:<10} {} planets",
                    i,
                    system.name,
                    system.luminosity,
                    system.planets.len()
                );
            }
        }
        Command::Show { system, planet } => {
            let index = controller
                .catalog()
                .resolve(&system)
                .ok_or(ExplorerError::SystemNotFound(system))?;
            let scene = controller.select_system(Some(index))?;

            println!("{}", controller.display().system_details);
            if let Some(current) = controller.current_system() {
                let zone = HabitableZone::from_luminosity(current.luminosity)?;
                println!("\nExoplanets:\n{}", format_planet_summary(current, &zone));
            }
            if planet.is_some() {
                println!("\n{}", controller.select_planet(planet)?);
            }
            write_scene_json(&scene, args.scene_json.as_ref())?;
        }
        Command::Custom {
            luminosity,
            exoplanets,
            labels,
        } => {
            let scene = controller.plot_custom(&luminosity, &exoplanets, &labels)?;
            println!(
                "Habitable zone: {:.3} - {:.3} AU",
                scene.habitable_zone.inner_radius_au, scene.habitable_zone.outer_radius_au
            );
            write_scene_json(&scene, args.scene_json.as_ref())?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            session::run(&mut controller, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn write_scene_json(scene: &Scene, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        export_scene_json(scene, path)?;
    }
    Ok(())
}
