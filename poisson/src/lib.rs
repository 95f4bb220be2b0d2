//! Poisson-disc sampling over a bounded 2D domain.
//!
//! Produces blue-noise point sets: no two points are closer than
//! `min_distance`, and every point but the first lies within
//! `2 * min_distance` of the point that spawned it.
//!
//! ```
//! use poisson::{poisson_disc_distribution, Config, RngSource};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let config = Config::new(80.0, 40.0, 4.0);
//! let bounds = config.clone();
//! let mut points = Vec::new();
//!
//! poisson_disc_distribution(
//!     config,
//!     RngSource(SmallRng::seed_from_u64(10)),
//!     |p| bounds.contains(p),
//!     |p| points.push(p),
//! )
//! .unwrap();
//!
//! assert!(points.len() > 1);
//! ```

mod config;
mod error;
mod grid;
mod point;
mod sampler;

pub use config::Config;
pub use error::PoissonError;
pub use grid::Grid;
pub use point::Point;
pub use sampler::{
    generate, poisson_disc_distribution, RandomSource, RngSource, Sample, Sampler, Summary,
};
