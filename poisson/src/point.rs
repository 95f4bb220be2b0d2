/// A position in the sampling domain.
///
/// [`Point::UNSET`] (infinity on both axes) is reserved to mean "no point".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const UNSET: Point = Point {
        x: f32::INFINITY,
        y: f32::INFINITY,
    };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether this is anything other than [`Point::UNSET`].
    ///
    /// Both axes must be infinite for a point to count as unset.
    pub fn is_set(&self) -> bool {
        *self != Point::UNSET
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn squared_distance(&self, other: &Point) -> f32 {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;
        delta_x * delta_x + delta_y * delta_y
    }

    pub fn distance(&self, other: &Point) -> f32 {
        self.squared_distance(other).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
