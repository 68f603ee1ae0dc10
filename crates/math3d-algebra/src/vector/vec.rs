//! Macro to define a vector type.
//!
//! The generated types are plain `#[repr(C)]` structs generic over the [`Scalar`]
//! type, so the same code path serves `f32` and `f64`. Arithmetic is implemented
//! component-wise on the fields.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `dim` - The number of components.
//! * `label` - The label used by `Display` (the precision suffix is appended).
//! * `fields` - The components as `index => field` pairs.
//!
//! [`Scalar`]: crate::Scalar
macro_rules! define_vector_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $dim:literal,
        $label:literal,
        [$($idx:literal => $field:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: T,
            )+
        }

        impl<T: Scalar> $name<T> {
            /// Number of components.
            pub const DIM: usize = $dim;

            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector with all components set to `value`.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Vector with all components set to zero.
            #[inline]
            pub fn zeros() -> Self {
                Self::splat(T::zero())
            }

            /// Vector with all components set to one.
            #[inline]
            pub fn ones() -> Self {
                Self::splat(T::one())
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: [T; $dim]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> [T; $dim] {
                [$(self.$field),+]
            }

            /// Create a vector from a flat buffer.
            ///
            /// The buffer must hold at least as many elements as the vector; extra
            /// trailing elements are ignored.
            pub fn from_slice(data: &[T]) -> Result<Self, AlgebraError> {
                if data.len() < $dim {
                    return Err(AlgebraError::DimensionMismatch {
                        expected: $dim,
                        got: data.len(),
                    });
                }

                if data.len() > $dim {
                    log::debug!(
                        "{}: using the first {} of {} buffer elements",
                        stringify!($name),
                        $dim,
                        data.len()
                    );
                }

                let mut arr = [T::zero(); $dim];
                arr.copy_from_slice(&data[..$dim]);
                Ok(Self::from_array(arr))
            }

            /// Create a vector from a buffer with a 2d shape.
            ///
            /// Both row `(1, N)` and column `(N, 1)` layouts are accepted.
            pub fn from_shaped(data: &[T], rows: usize, cols: usize) -> Result<Self, AlgebraError> {
                if rows * cols != data.len() {
                    return Err(AlgebraError::DimensionMismatch {
                        expected: rows * cols,
                        got: data.len(),
                    });
                }

                if rows != 1 && cols != 1 {
                    return Err(AlgebraError::InvalidShape { rows, cols });
                }

                Self::from_slice(data)
            }

            /// Get the component at `index`, if any.
            #[inline]
            pub fn get(&self, index: usize) -> Option<T> {
                match index {
                    $($idx => Some(self.$field),)+
                    _ => None,
                }
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                T::zero() $(+ self.$field * rhs.$field)+
            }

            /// Squared euclidean length of the vector.
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Euclidean length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Return the vector scaled to unit length.
            ///
            /// A zero vector yields NaN components, use [`Self::try_normalize`] to
            /// get an error instead.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            /// Return the vector scaled to unit length, failing on a zero vector.
            pub fn try_normalize(self) -> Result<Self, AlgebraError> {
                let unit = self.normalize();
                if !unit.is_finite() {
                    return Err(AlgebraError::ZeroLength("normalize"));
                }
                Ok(unit)
            }

            /// Scale the vector to unit length in place.
            ///
            /// Same degenerate behavior as [`Self::normalize`].
            #[inline]
            pub fn normalize_mut(&mut self) {
                *self = self.normalize();
            }

            /// Linear interpolation between `self` (at `t = 0`) and `rhs` (at `t = 1`).
            #[inline]
            pub fn lerp(self, rhs: Self, t: T) -> Self {
                self + (rhs - self) * t
            }

            /// Check if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }

        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($name), index),
                }
            }
        }

        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($name), index),
                }
            }
        }

        // Conversions to and from arrays.
        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            #[inline]
            fn from(arr: [T; $dim]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Scalar> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field.approx_eq(other.$field))+
            }
        }

        impl<T: Scalar> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                T::EPS
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& T::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl<T: Scalar> approx::RelativeEq for $name<T> {
            #[inline]
            fn default_max_relative() -> T {
                T::EPS
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& T::relative_eq(&self.$field, &other.$field, epsilon, max_relative))+
            }
        }

        impl<T: Scalar> approx::UlpsEq for $name<T> {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                true $(&& T::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))+
            }
        }

        impl<T: Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(self.$field.to_string()),+];
                write!(f, "{}{}({})", $label, T::SUFFIX, parts.join(", "))
            }
        }

        // Component-wise arithmetic.
        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        // Element-wise (Hadamard) product.
        impl<T: Scalar> std::ops::Mul for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            #[inline]
            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            #[inline]
            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }
    };
}

/// Implement lossless conversions between a vector type and its glam counterparts.
///
/// # Arguments
///
/// * `name` - The name of the vector type.
/// * `dim` - The number of components.
/// * `glam_f32` - The single precision glam type.
/// * `glam_f64` - The double precision glam type.
#[cfg(feature = "glam")]
macro_rules! impl_glam_vector {
    ($name:ident, $dim:literal, $glam_f32:ty, $glam_f64:ty) => {
        impl From<$glam_f32> for $name<f32> {
            #[inline]
            fn from(v: $glam_f32) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$name<f32>> for $glam_f32 {
            #[inline]
            fn from(v: $name<f32>) -> Self {
                <$glam_f32>::from_array(v.to_array())
            }
        }

        impl From<$glam_f64> for $name<f64> {
            #[inline]
            fn from(v: $glam_f64) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$name<f64>> for $glam_f64 {
            #[inline]
            fn from(v: $name<f64>) -> Self {
                <$glam_f64>::from_array(v.to_array())
            }
        }
    };
}
