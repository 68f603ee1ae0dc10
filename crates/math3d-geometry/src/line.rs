use math3d_algebra::{Scalar, Vector3};

/// Infinite line through two points.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T> {
    /// First point on the line.
    pub start: Vector3<T>,
    /// Second point on the line.
    pub end: Vector3<T>,
}

/// Line (single precision).
pub type LineF32 = Line<f32>;

/// Line (double precision).
pub type LineF64 = Line<f64>;

impl<T: Scalar> Line<T> {
    /// Create a line through `start` and `end`.
    #[inline]
    pub fn new(start: Vector3<T>, end: Vector3<T>) -> Self {
        Self { start, end }
    }

    /// Direction `end - start`, not normalized.
    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        self.end - self.start
    }

    /// Perpendicular distance from `point` to the line.
    ///
    /// When `start == end` the line degenerates to a point and the distance to
    /// `start` is returned.
    pub fn distance_to(&self, point: Vector3<T>) -> T {
        let direction = self.direction();
        let length = direction.length();
        let offset = point - self.start;

        if length > T::zero() {
            offset.cross(direction).length() / length
        } else {
            offset.length()
        }
    }
}

impl<T: Scalar> PartialEq for Line<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T: Scalar> std::fmt::Display for Line<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line(start={}, end={})", self.start, self.end)
    }
}
