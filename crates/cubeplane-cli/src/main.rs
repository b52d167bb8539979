//! cubeplane CLI - intersect an axis-aligned box with planes
//!
//! Reads a TOML scene describing one box and a list of planes, and prints
//! the intersection polygons or the box edges as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubeplane_cuboid::Cuboid;
use cubeplane_geom::Plane;
use serde::Serialize;
use std::path::{Path, PathBuf};

mod config;
mod report;

use config::SceneSettings;
use report::{describe_section, EdgeReport, SectionReport};

#[derive(Parser)]
#[command(name = "cubeplane")]
#[command(about = "Cross-sections of an axis-aligned box by planes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the intersection points of every plane with the box
    Section {
        /// Scene file (.toml)
        scene: PathBuf,
        /// Keep discovery order instead of boundary order
        #[arg(long)]
        unsorted: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the 12 edges of the box
    Edges {
        /// Scene file (.toml)
        scene: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Summarize each cross-section
    Info {
        /// Scene file (.toml)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Section {
            scene,
            unsorted,
            pretty,
        } => {
            let (cuboid, planes) = load_scene(&scene)?;
            let reports: Vec<SectionReport> = planes
                .iter()
                .map(|plane| SectionReport::new(&cuboid, plane, !unsorted))
                .collect();
            print_json(&reports, pretty)?;
        }
        Commands::Edges { scene, pretty } => {
            let (cuboid, _) = load_scene(&scene)?;
            let edges: Vec<EdgeReport> = cuboid.sides().iter().map(EdgeReport::from).collect();
            print_json(&edges, pretty)?;
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

fn load_scene(path: &Path) -> Result<(Cuboid, Vec<Plane>)> {
    let scene = SceneSettings::load(path)?;
    scene
        .build()
        .with_context(|| format!("Invalid scene {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let (cuboid, planes) = load_scene(path)?;
    let (min, max) = cuboid.bounds();

    println!("Scene: {}", path.display());
    println!(
        "Box: ({}, {}, {}) to ({}, {}, {})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
    println!("Planes: {}", planes.len());

    for (i, plane) in planes.iter().enumerate() {
        let section = cuboid.cross_section(plane);
        if !section.is_simple() {
            log::warn!("section {i} is not a simple polygon");
        }
        println!("  {}", describe_section(i, &section));
    }

    Ok(())
}
