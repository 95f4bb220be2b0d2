/// Errors reported by configuration checks and sampling runs.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum PoissonError {
    /// Width or height is not a finite positive number.
    #[error("Invalid domain extent {width} x {height}: both sides must be finite and positive")]
    InvalidExtent {
        /// Configured width
        width: f32,
        /// Configured height
        height: f32,
    },
    /// Minimum distance is not a finite positive number.
    #[error("Invalid minimum distance {min_distance}: must be finite and positive")]
    InvalidMinDistance {
        /// Configured minimum distance
        min_distance: f32,
    },
    /// `max_attempts` was zero.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    /// The explicit start point lies outside the domain.
    #[error("Start point ({x}, {y}) lies outside the domain")]
    StartOutOfDomain {
        /// Start x coordinate
        x: f32,
        /// Start y coordinate
        y: f32,
    },
    /// The acceleration grid would need more cells than can be addressed.
    #[error("Acceleration grid of {columns} x {rows} cells is too large")]
    GridTooLarge {
        /// Grid columns
        columns: usize,
        /// Grid rows
        rows: usize,
    },
    /// A point outside `[0, width) x [0, height)` reached the grid.
    ///
    /// This happens when the area predicate accepts a point outside the domain.
    #[error("Point ({x}, {y}) lies outside the sampling domain; the area predicate must reject it")]
    OutOfDomain {
        /// Offending x coordinate
        x: f32,
        /// Offending y coordinate
        y: f32,
    },
    /// No seed point satisfying the area predicate was found.
    #[error("No seed point accepted by the area predicate after {attempts} attempts")]
    DomainEmpty {
        /// Number of random seed draws made
        attempts: u32,
    },
}
