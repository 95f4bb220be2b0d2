use crate::error::PoissonError;
use crate::grid::Grid;
use crate::point::Point;

/// Parameters of one sampling run.
///
/// * `width`, `height` - extent of the domain. Points lie in
///   `[0, width) x [0, height)`.
/// * `min_distance` - smallest allowed distance between two points. No point
///   is ever further than twice this from the point that spawned it.
/// * `max_attempts` - candidates tried around each active point. Fewer
///   attempts run faster but leave visible gaps.
/// * `start` - optional first point. `None` picks one at random inside the
///   area predicate.
/// * `max_seed_attempts` - optional cap on random seed draws. `None` keeps
///   drawing until the area predicate accepts one.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub min_distance: f32,
    pub max_attempts: u32,
    pub start: Option<Point>,
    pub max_seed_attempts: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            min_distance: 0.05,
            max_attempts: 30,
            start: None,
            max_seed_attempts: None,
        }
    }
}

impl Config {
    pub fn new(width: f32, height: f32, min_distance: f32) -> Self {
        Self {
            width,
            height,
            min_distance,
            ..Default::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Start from `start`. Passing [`Point::UNSET`] clears any start point.
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start.is_set().then_some(start);
        self
    }

    pub fn with_max_seed_attempts(mut self, attempts: u32) -> Self {
        self.max_seed_attempts = Some(attempts);
        self
    }

    /// Side length of one acceleration grid cell.
    pub fn cell_size(&self) -> f32 {
        self.min_distance / std::f32::consts::SQRT_2
    }

    /// Rectangular bounds test, the minimal valid area predicate.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Checks every constraint a sampling run relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), PoissonError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(PoissonError::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.min_distance) {
            return Err(PoissonError::InvalidMinDistance {
                min_distance: self.min_distance,
            });
        }
        if self.max_attempts == 0 {
            return Err(PoissonError::ZeroAttempts);
        }
        if let Some(start) = self.start {
            if !start.is_finite() || !self.contains(start) {
                return Err(PoissonError::StartOutOfDomain {
                    x: start.x,
                    y: start.y,
                });
            }
        }
        Grid::dimensions(self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.width, 1.0);
        assert_eq!(config.height, 1.0);
        assert_eq!(config.min_distance, 0.05);
        assert_eq!(config.max_attempts, 30);
        assert_eq!(config.start, None);
        assert_eq!(config.max_seed_attempts, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unset_start_means_random() {
        let config = Config::new(10.0, 10.0, 1.0).with_start(Point::new(2.0, 3.0));
        assert_eq!(config.start, Some(Point::new(2.0, 3.0)));

        let config = config.with_start(Point::UNSET);
        assert_eq!(config.start, None);
    }

    #[test]
    fn half_infinite_start_is_rejected_not_randomised() {
        let start = Point::new(f32::INFINITY, 3.0);
        let config = Config::new(10.0, 10.0, 1.0).with_start(start);
        assert_eq!(config.start, Some(start));
        assert!(matches!(
            config.validate(),
            Err(PoissonError::StartOutOfDomain { .. })
        ));
    }

    #[test]
    fn rejects_bad_extent() {
        for (w, h) in [(0.0, 1.0), (1.0, -1.0), (f32::NAN, 1.0), (1.0, f32::INFINITY)] {
            let err = Config::new(w, h, 0.1).validate().unwrap_err();
            assert!(matches!(err, PoissonError::InvalidExtent { .. }), "{w} x {h}");
        }
    }

    #[test]
    fn rejects_bad_min_distance() {
        for d in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let err = Config::new(10.0, 10.0, d).validate().unwrap_err();
            assert!(matches!(err, PoissonError::InvalidMinDistance { .. }));
        }
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = Config::new(10.0, 10.0, 1.0).with_max_attempts(0);
        assert_eq!(config.validate(), Err(PoissonError::ZeroAttempts));
    }

    #[test]
    fn rejects_start_outside_domain() {
        let base = Config::new(10.0, 5.0, 1.0);
        for start in [
            Point::new(10.0, 1.0),
            Point::new(1.0, 5.0),
            Point::new(-0.1, 1.0),
            Point::new(f32::NAN, 1.0),
        ] {
            let err = base.clone().with_start(start).validate().unwrap_err();
            assert!(matches!(err, PoissonError::StartOutOfDomain { .. }));
        }
        assert!(base.with_start(Point::new(0.0, 0.0)).validate().is_ok());
    }

    #[test]
    fn rejects_huge_grid() {
        let err = Config::new(1.0e30, 1.0e30, 1.0e-6).validate().unwrap_err();
        assert!(matches!(err, PoissonError::GridTooLarge { .. }));
    }

    #[test]
    fn contains_is_half_open() {
        let config = Config::new(4.0, 2.0, 1.0);
        assert!(config.contains(Point::new(0.0, 0.0)));
        assert!(config.contains(Point::new(3.999, 1.999)));
        assert!(!config.contains(Point::new(4.0, 1.0)));
        assert!(!config.contains(Point::new(1.0, 2.0)));
        assert!(!config.contains(Point::new(-0.001, 1.0)));
        assert!(!config.contains(Point::new(f32::NAN, 1.0)));
    }
}
