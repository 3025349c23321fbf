//! Command-line front end: fit icon cameras, print the options schema and
//! plan icon batches.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use boundsfit::geometry::Aabb;
use boundsfit::icons::{clear_icon_dir, IconBatch, IconFramer};
use boundsfit::options::Options;
use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "boundsfit", about = "Frame bounding boxes for icon cameras")]
struct Cli {
    /// Options preset (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fit an icon camera to one box and print the pose as JSON.
    Fit {
        /// Box center as X,Y,Z.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        center: Vec3,
        /// Box half-size as X,Y,Z.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        extents: Vec3,
        /// Object yaw in degrees (rotates the preview direction).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        yaw: f32,
        /// Override the padding from the options.
        #[arg(long)]
        padding: Option<f32>,
        /// Force an orthographic projection.
        #[arg(long)]
        orthographic: bool,
    },
    /// Print the JSON schema of the options file.
    Schema,
    /// Show which icons of a batch need rendering.
    Plan {
        /// Icon directory.
        #[arg(long)]
        root: PathBuf,
        /// Ignore icons already on disk.
        #[arg(long)]
        regenerate: bool,
        /// Delete existing icons first (implies --regenerate).
        #[arg(long)]
        clear: bool,
        /// Asset ids.
        ids: Vec<String>,
    },
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected X,Y,Z, got {s:?}")),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn load_options(path: Option<&PathBuf>) -> Result<Options> {
    path.map_or_else(
        || Ok(Options::default()),
        |p| {
            Options::load(p).with_context(|| {
                format!("loading options from {}", p.display())
            })
        },
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut options = load_options(cli.options.as_ref())?;

    match cli.command {
        Command::Fit {
            center,
            extents,
            yaw,
            padding,
            orthographic,
        } => {
            if let Some(padding) = padding {
                options.camera.padding = padding;
            }
            options.camera.orthographic |= orthographic;
            options.validate()?;

            let framer = IconFramer::new(&options);
            let orientation = Quat::from_rotation_y(yaw.to_radians());
            let Some(framed) =
                framer.frame([Aabb::new(center, extents)], orientation)
            else {
                bail!("nothing to frame");
            };
            print_json(&framed)
        }
        Command::Schema => print_json(&Options::json_schema()),
        Command::Plan {
            root,
            regenerate,
            clear,
            ids,
        } => print_json(&plan(root, &ids, regenerate, clear)?),
    }
}

fn plan(
    root: PathBuf,
    ids: &[String],
    regenerate: bool,
    clear: bool,
) -> Result<IconBatch> {
    if clear {
        let deleted = clear_icon_dir(&root)
            .with_context(|| format!("clearing {}", root.display()))?;
        info!("removed {deleted} icons before planning");
    }
    Ok(IconBatch::plan(root, ids, regenerate || clear))
}
