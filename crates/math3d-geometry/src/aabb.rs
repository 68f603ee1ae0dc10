use math3d_algebra::{Scalar, Vector3};

/// Axis-aligned bounding box.
///
/// The default box spans all of space (`min = -inf`, `max = +inf`).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T> {
    /// Corner with the smallest coordinates.
    pub min: Vector3<T>,
    /// Corner with the largest coordinates.
    pub max: Vector3<T>,
}

/// Axis-aligned bounding box (single precision).
pub type AabbF32 = Aabb<f32>;

/// Axis-aligned bounding box (double precision).
pub type AabbF64 = Aabb<f64>;

impl<T: Scalar> Default for Aabb<T> {
    fn default() -> Self {
        Self::new(
            Vector3::splat(T::neg_infinity()),
            Vector3::splat(T::infinity()),
        )
    }
}

impl<T: Scalar> Aabb<T> {
    /// Create a box from its extreme corners.
    #[inline]
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self { min, max }
    }

    /// Center of the box. Infinite for the unbounded box.
    #[inline]
    pub fn compute_center(&self) -> Vector3<T> {
        (self.min + self.max) * T::lit(0.5)
    }

    /// The 8 corners, choosing min or max per axis with z varying fastest.
    ///
    /// Corner `i` takes `max` on x if bit 2 of `i` is set, on y for bit 1 and on z
    /// for bit 0, so the first corner is `min` and the last one is `max`.
    pub fn compute_corners(&self) -> [Vector3<T>; 8] {
        let pick = |bit: bool, lo: T, hi: T| if bit { hi } else { lo };
        std::array::from_fn(|i| {
            Vector3::new(
                pick(i & 0b100 != 0, self.min.x, self.max.x),
                pick(i & 0b010 != 0, self.min.y, self.max.y),
                pick(i & 0b001 != 0, self.min.z, self.max.z),
            )
        })
    }

    /// Check if the two boxes overlap, touching boxes included.
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
            || other.max.z < self.min.z
            || other.min.z > self.max.z)
    }

    /// Check if `point` lies inside the box or on its boundary.
    pub fn contains(&self, point: Vector3<T>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

impl<T: Scalar> PartialEq for Aabb<T> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<T: Scalar> std::fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aabb(min={}, max={})", self.min, self.max)
    }
}
