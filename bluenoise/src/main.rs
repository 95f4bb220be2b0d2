use std::error::Error;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use poisson::{poisson_disc_distribution, Config, Point, RngSource};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing_subscriber::EnvFilter;

mod raster;

use crate::raster::Raster;

/// Scatter blue noise over a text grid
#[derive(Parser, Debug)]
#[command(name = "bluenoise")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid width in characters
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Grid height in characters
    #[arg(long, default_value_t = 40)]
    height: usize,

    /// Smallest distance between two points
    #[arg(short = 'd', long, default_value_t = 4.0)]
    min_distance: f32,

    /// Candidates tried around each point
    #[arg(short = 'k', long, default_value_t = 30)]
    max_attempts: u32,

    /// Generator seed, defaults to the system clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start point x coordinate
    #[arg(long, requires = "start_y")]
    start_x: Option<f32>,

    /// Start point y coordinate
    #[arg(long, requires = "start_x")]
    start_y: Option<f32>,

    /// Print "x, y" lines instead of the grid
    #[arg(long)]
    points: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "generating blue noise");

    let mut config = Config::new(cli.width as f32, cli.height as f32, cli.min_distance)
        .with_max_attempts(cli.max_attempts);
    if let (Some(x), Some(y)) = (cli.start_x, cli.start_y) {
        config = config.with_start(Point::new(x, y));
    }
    let bounds = config.clone();

    let mut points = Vec::new();
    let summary = poisson_disc_distribution(
        config,
        RngSource(Pcg64Mcg::seed_from_u64(seed)),
        |p| bounds.contains(p),
        |p| points.push(p),
    )?;
    tracing::info!(
        points = summary.points,
        candidates = summary.candidates,
        "done"
    );

    let mut out = io::stdout().lock();
    if cli.points {
        for point in &points {
            writeln!(out, "{}, {}", point.x, point.y)?;
        }
        return Ok(());
    }

    let mut raster = Raster::new(cli.width, cli.height)
        .ok_or_else(|| format!("a {} x {} grid is too large to draw", cli.width, cli.height))?;
    for point in points {
        raster.plot(point);
    }
    tracing::debug!(plotted = raster.count(), "rasterized");
    write!(out, "{raster}")?;
    Ok(())
}
