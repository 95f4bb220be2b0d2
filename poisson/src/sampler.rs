//! Bridson's fast Poisson-disc sampling.
//!
//! See 'Fast Poisson Disk Sampling in Arbitrary Dimensions' by Robert
//! Bridson. Runs in O(n) time for n emitted points.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::Config;
use crate::error::PoissonError;
use crate::grid::Grid;
use crate::point::Point;

/// Source of uniform random values.
pub trait RandomSource {
    /// Returns a value in `[0, limit)`.
    fn random(&mut self, limit: f32) -> f32;
}

impl<F> RandomSource for F
where
    F: FnMut(f32) -> f32,
{
    fn random(&mut self, limit: f32) -> f32 {
        self(limit)
    }
}

/// Adapts a [`rand::Rng`] into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn random(&mut self, limit: f32) -> f32 {
        self.0.gen_range(0.0..limit)
    }
}

/// An emitted point together with the active point that spawned it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub point: Point,
    /// `None` for the seed.
    pub parent: Option<Point>,
}

/// Totals of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Points emitted, seed included.
    pub points: usize,
    /// Candidates generated around active points.
    pub candidates: usize,
}

#[derive(Clone, Copy, Debug)]
enum State {
    Seeding,
    Exploring { parent: Point, remaining: u32 },
    Done,
}

/// Lazily emits a Poisson-disc distribution in acceptance order.
///
/// The area predicate must reject every point outside
/// `[0, width) x [0, height)`. Accepting one ends the run with
/// [`PoissonError::OutOfDomain`]. If the predicate rejects the whole domain
/// and no `max_seed_attempts` is configured, seeding never finishes.
///
/// Iteration stops after the first error.
pub struct Sampler<R, A> {
    config: Config,
    random: R,
    in_area: A,
    grid: Grid,
    active: Vec<Point>,
    state: State,
    candidates: usize,
}

impl<R, A> Sampler<R, A>
where
    R: RandomSource,
    A: FnMut(Point) -> bool,
{
    /// # Errors
    ///
    /// Returns an error if `config` fails [`Config::validate`].
    pub fn new(config: Config, random: R, in_area: A) -> Result<Self, PoissonError> {
        config.validate()?;
        let grid = Grid::new(&config)?;

        tracing::debug!(
            width = config.width,
            height = config.height,
            min_distance = config.min_distance,
            columns = grid.columns(),
            rows = grid.rows(),
            cell_size = grid.cell_size(),
            "starting poisson disc sampling"
        );

        Ok(Self {
            config,
            random,
            in_area,
            grid,
            active: Vec::new(),
            state: State::Seeding,
            candidates: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Acceleration grid holding every point emitted so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn summary(&self) -> Summary {
        Summary {
            points: self.grid.len(),
            candidates: self.candidates,
        }
    }

    fn seed(&mut self) -> Result<Point, PoissonError> {
        if let Some(start) = self.config.start {
            return Ok(start);
        }

        let mut attempts: u32 = 0;
        loop {
            if self.config.max_seed_attempts == Some(attempts) {
                tracing::warn!(attempts, "no seed point found inside the area");
                return Err(PoissonError::DomainEmpty { attempts });
            }
            attempts = attempts.saturating_add(1);

            let x = self.random.random(self.config.width);
            let y = self.random.random(self.config.height);
            let p = Point::new(x, y);
            if (self.in_area)(p) {
                return Ok(p);
            }
        }
    }

    /// Candidate uniformly distributed over the annulus of radii
    /// `[min_distance, 2 * min_distance)` around `p`.
    fn point_around(&mut self, p: Point) -> Point {
        let radius = self.config.min_distance * (self.random.random(3.0) + 1.0).sqrt();
        let angle = self.random.random(TAU);
        Point::new(p.x + angle.cos() * radius, p.y + angle.sin() * radius)
    }

    fn accept(&mut self, p: Point) -> Result<(), PoissonError> {
        self.grid.record(p)?;
        self.active.push(p);
        tracing::trace!(x = p.x, y = p.y, "accepted point");
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<Sample>, PoissonError> {
        loop {
            match self.state {
                State::Seeding => {
                    let seed = self.seed()?;
                    self.accept(seed)?;
                    self.state = State::Exploring {
                        parent: seed,
                        remaining: 0,
                    };
                    return Ok(Some(Sample {
                        point: seed,
                        parent: None,
                    }));
                }
                State::Exploring { remaining: 0, .. } => {
                    self.state = match self.active.pop() {
                        Some(parent) => State::Exploring {
                            parent,
                            remaining: self.config.max_attempts,
                        },
                        None => State::Done,
                    };
                }
                State::Exploring { parent, remaining } => {
                    self.state = State::Exploring {
                        parent,
                        remaining: remaining - 1,
                    };
                    self.candidates += 1;

                    let candidate = self.point_around(parent);
                    if (self.in_area)(candidate) && !self.grid.is_too_close(candidate)? {
                        self.accept(candidate)?;
                        return Ok(Some(Sample {
                            point: candidate,
                            parent: Some(parent),
                        }));
                    }
                }
                State::Done => {
                    return Ok(None);
                }
            }
        }
    }
}

impl<R, A> Iterator for Sampler<R, A>
where
    R: RandomSource,
    A: FnMut(Point) -> bool,
{
    type Item = Result<Sample, PoissonError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Done) {
            return None;
        }
        match self.advance() {
            Ok(Some(sample)) => Some(Ok(sample)),
            Ok(None) => {
                let summary = self.summary();
                tracing::debug!(
                    points = summary.points,
                    candidates = summary.candidates,
                    "poisson disc sampling complete"
                );
                None
            }
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl<R, A> std::iter::FusedIterator for Sampler<R, A>
where
    R: RandomSource,
    A: FnMut(Point) -> bool,
{
}

/// Generates a Poisson-disc distribution, passing each accepted point to
/// `output` exactly once, seed first.
///
/// `random(limit)` must return uniform values in `[0, limit)`. `in_area`
/// decides which points are valid and must reject anything outside
/// `[0, width) x [0, height)`. It can carve shapes other than rectangles.
///
/// # Errors
///
/// Fails if the configuration is invalid, if `in_area` accepts an
/// out-of-domain point, or if no seed is found within
/// [`Config::max_seed_attempts`]. Points emitted before the failure have
/// already been passed to `output`.
pub fn poisson_disc_distribution<R, A, O>(
    config: Config,
    random: R,
    in_area: A,
    mut output: O,
) -> Result<Summary, PoissonError>
where
    R: RandomSource,
    A: FnMut(Point) -> bool,
    O: FnMut(Point),
{
    let mut sampler = Sampler::new(config, random, in_area)?;
    for sample in sampler.by_ref() {
        output(sample?.point);
    }
    Ok(sampler.summary())
}

/// Collects a distribution drawn from `rng`.
pub fn generate<G, A>(config: Config, rng: G, in_area: A) -> Result<Vec<Point>, PoissonError>
where
    G: Rng,
    A: FnMut(Point) -> bool,
{
    Sampler::new(config, RngSource(rng), in_area)?
        .map(|sample| sample.map(|s| s.point))
        .collect()
}
