//! terrain-raster - draw a scene onto a height field and save it as PNG.
//!
//! Without `--scene` the default session is rendered: a 2048 x 2048 field at
//! height 0.5 with one hexagon outline (size 512, stroke radius 10, height 0.8).

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use terrain_raster::scene::Scene;

/// Rasterize lines, points and hexagons onto a 16-bit height field
#[derive(Parser, Debug)]
#[command(name = "terrain-raster")]
#[command(version)]
#[command(about = "Rasterize thick lines and hexagons onto a 16-bit grayscale heightmap", long_about = None)]
struct Cli {
    /// YAML scene file
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output PNG path (overrides the scene)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field width (overrides the scene)
    #[arg(long)]
    width: Option<u32>,

    /// Field height (overrides the scene)
    #[arg(long)]
    height: Option<u32>,

    /// Print min/max/mean height after rendering
    #[arg(long)]
    stats: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Stderr logger with level tags and elapsed milliseconds.
struct StderrLogger {
    level: LevelFilter,
    start: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let elapsed = self.start.elapsed().as_millis();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{elapsed:>6}ms] {tag} {}: {}",
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_boxed_logger(Box::new(StderrLogger {
        level,
        start: Instant::now(),
    }))
    .context("logger already installed")?;
    log::set_max_level(level);
    Ok(())
}

fn build_scene(cli: &Cli) -> Result<Scene> {
    let mut scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => Scene::default(),
    };

    // CLI > scene file > defaults
    if let Some(output) = &cli.output {
        scene.output.clone_from(output);
    }
    if let Some(width) = cli.width {
        scene.width = width;
    }
    if let Some(height) = cli.height {
        scene.height = height;
    }
    Ok(scene)
}

fn run(cli: &Cli) -> Result<()> {
    let scene = build_scene(cli)?;
    info!(
        "rendering {} shapes onto {}x{} field",
        scene.shapes.len(),
        scene.width,
        scene.height
    );

    let field = scene
        .render_to_file()
        .with_context(|| format!("rendering to {}", scene.output.display()))?;

    if cli.stats {
        let (min, max, mean) = field.stats();
        println!("min {min:.5}  max {max:.5}  mean {mean:.5}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_scene_defaults() {
        let cli = Cli::parse_from(["terrain-raster", "-o", "x.png", "--width", "64", "--height", "32"]);
        let scene = build_scene(&cli).expect("default scene");
        assert_eq!(scene.output, PathBuf::from("x.png"));
        assert_eq!(scene.width, 64);
        assert_eq!(scene.height, 32);
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::parse_from(["terrain-raster", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.scene.is_none());
    }

    #[test]
    fn test_missing_scene_is_error() {
        let cli = Cli::parse_from(["terrain-raster", "--scene", "/nonexistent/scene.yaml"]);
        assert!(build_scene(&cli).is_err());
    }
}
