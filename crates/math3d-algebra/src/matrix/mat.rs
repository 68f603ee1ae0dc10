//! Macro to define a matrix type.
//!
//! Matrices are stored column-major as an array of column vectors, so a single
//! index returns a column and `(row, col)` returns an entry. Everything that does
//! not depend on the size (products, transposition, buffer conversions) is
//! generated here; determinant, inverse and the named factories live next to each
//! concrete type.
//!
//! # Arguments
//!
//! * `name`     - The name of the matrix type.
//! * `dim`      - The number of rows and columns.
//! * `len`      - The number of entries (`dim * dim`).
//! * `vec_type` - The column vector type.
//! * `label`    - The label used by `Display`.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $dim:literal,
        $len:literal,
        $vec_type:ident,
        $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T> {
            cols: [$vec_type<T>; $dim],
        }

        impl<T: Scalar> $name<T> {
            /// Number of rows and columns.
            pub const DIM: usize = $dim;

            /// Matrix with every entry set to zero.
            #[inline]
            pub fn zeros() -> Self {
                Self {
                    cols: [$vec_type::<T>::zeros(); $dim],
                }
            }

            /// Identity matrix.
            #[inline]
            pub fn identity() -> Self {
                Self::from_diagonal($vec_type::<T>::ones())
            }

            /// Diagonal matrix, all off-diagonal entries are zero.
            pub fn from_diagonal(diag: $vec_type<T>) -> Self {
                let mut m = Self::zeros();
                for i in 0..$dim {
                    m.cols[i][i] = diag[i];
                }
                m
            }

            /// Create a new matrix from column vectors.
            #[inline]
            pub fn from_cols(cols: [$vec_type<T>; $dim]) -> Self {
                Self { cols }
            }

            /// Create a new matrix from a column-major array.
            pub fn from_cols_array(arr: [T; $len]) -> Self {
                let mut m = Self::zeros();
                for (c, col) in m.cols.iter_mut().enumerate() {
                    for r in 0..$dim {
                        col[r] = arr[c * $dim + r];
                    }
                }
                m
            }

            /// Convert the matrix to a column-major array.
            pub fn to_cols_array(&self) -> [T; $len] {
                let mut arr = [T::zero(); $len];
                for (c, col) in self.cols.iter().enumerate() {
                    for r in 0..$dim {
                        arr[c * $dim + r] = col[r];
                    }
                }
                arr
            }

            /// Create a new matrix from a row-major array.
            #[inline]
            pub fn from_rows_array(arr: [T; $len]) -> Self {
                Self::from_cols_array(arr).transpose()
            }

            /// Convert the matrix to a row-major array.
            #[inline]
            pub fn to_rows_array(&self) -> [T; $len] {
                self.transpose().to_cols_array()
            }

            /// Convert the matrix to nested rows, `m[row][col]`.
            pub fn to_rows_array_2d(&self) -> [[T; $dim]; $dim] {
                let mut rows = [[T::zero(); $dim]; $dim];
                for (r, row) in rows.iter_mut().enumerate() {
                    for (c, entry) in row.iter_mut().enumerate() {
                        *entry = self.cols[c][r];
                    }
                }
                rows
            }

            /// Create a matrix from a flat row-major buffer.
            ///
            /// Only the first `DIM * DIM` elements are read.
            pub fn from_slice(data: &[T]) -> Result<Self, AlgebraError> {
                if data.len() < $len {
                    return Err(AlgebraError::DimensionMismatch {
                        expected: $len,
                        got: data.len(),
                    });
                }

                if data.len() > $len {
                    log::debug!(
                        "{}: using the first {} of {} buffer elements",
                        stringify!($name),
                        $len,
                        data.len()
                    );
                }

                let mut arr = [T::zero(); $len];
                arr.copy_from_slice(&data[..$len]);
                Ok(Self::from_rows_array(arr))
            }

            /// Create a matrix from a row-major buffer of shape `(rows, cols)`.
            ///
            /// When the buffer is larger than the matrix its top-left block is copied.
            ///
            /// # Errors
            ///
            /// * [`AlgebraError::DimensionMismatch`] if `data.len() != rows * cols`.
            /// * [`AlgebraError::InvalidShape`] if the buffer has fewer than `DIM` rows
            ///   or columns.
            pub fn from_rows_slice(
                data: &[T],
                rows: usize,
                cols: usize,
            ) -> Result<Self, AlgebraError> {
                if data.len() != rows * cols {
                    return Err(AlgebraError::DimensionMismatch {
                        expected: rows * cols,
                        got: data.len(),
                    });
                }

                if rows < $dim || cols < $dim {
                    return Err(AlgebraError::InvalidShape { rows, cols });
                }

                if rows > $dim || cols > $dim {
                    log::debug!(
                        "{}: copying the top-left block of a ({}, {}) buffer",
                        stringify!($name),
                        rows,
                        cols
                    );
                }

                let mut m = Self::zeros();
                for (c, col) in m.cols.iter_mut().enumerate() {
                    for r in 0..$dim {
                        col[r] = data[r * cols + c];
                    }
                }
                Ok(m)
            }

            /// Get the column at `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= DIM`.
            #[inline]
            pub fn col(&self, index: usize) -> $vec_type<T> {
                self.cols[index]
            }

            /// Get the row at `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= DIM`.
            pub fn row(&self, index: usize) -> $vec_type<T> {
                let mut row = $vec_type::<T>::zeros();
                for (c, col) in self.cols.iter().enumerate() {
                    row[c] = col[index];
                }
                row
            }

            /// Replace the column at `index`.
            #[inline]
            pub fn set_col(&mut self, index: usize, col: $vec_type<T>) {
                self.cols[index] = col;
            }

            /// Return the transposed matrix.
            pub fn transpose(&self) -> Self {
                let mut m = Self::zeros();
                for (c, col) in m.cols.iter_mut().enumerate() {
                    *col = self.row(c);
                }
                m
            }

            /// Transpose the matrix in place.
            #[inline]
            pub fn transpose_mut(&mut self) {
                *self = self.transpose();
            }

            /// Sum of the diagonal entries.
            pub fn trace(&self) -> T {
                (0..$dim).fold(T::zero(), |acc, i| acc + self.cols[i][i])
            }

            /// Element-wise product of two matrices.
            pub fn hadamard(&self, rhs: &Self) -> Self {
                let mut m = *self;
                for (col, rhs_col) in m.cols.iter_mut().zip(rhs.cols.iter()) {
                    *col = *col * *rhs_col;
                }
                m
            }

            /// Check if all entries are finite.
            pub fn is_finite(&self) -> bool {
                self.cols.iter().all(|col| col.is_finite())
            }

            /// Largest absolute entry.
            pub fn max_abs(&self) -> T {
                self.cols
                    .iter()
                    .flat_map(|col| col.to_array())
                    .fold(T::zero(), |acc, v| acc.max(v.abs()))
            }

            // |det| scales with the N-th power of the entries
            pub(crate) fn is_negligible_determinant(&self, det: T) -> bool {
                !det.is_finite() || det.abs() <= T::epsilon() * self.max_abs().powi($dim as i32)
            }
        }

        // Single index: a whole column.
        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = $vec_type<T>;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.cols[index]
            }
        }

        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.cols[index]
            }
        }

        // Pair index: the entry at (row, col).
        impl<T: Scalar> std::ops::Index<(usize, usize)> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &T {
                &self.cols[col][row]
            }
        }

        impl<T: Scalar> std::ops::IndexMut<(usize, usize)> for $name<T> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                &mut self.cols[col][row]
            }
        }

        impl<T: Scalar> From<[$vec_type<T>; $dim]> for $name<T> {
            #[inline]
            fn from(cols: [$vec_type<T>; $dim]) -> Self {
                Self::from_cols(cols)
            }
        }

        impl<T: Scalar> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.cols == other.cols
            }
        }

        impl<T: Scalar> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                T::EPS
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<T: Scalar> approx::RelativeEq for $name<T> {
            #[inline]
            fn default_max_relative() -> T {
                T::EPS
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl<T: Scalar> approx::UlpsEq for $name<T> {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }

        // Printed row by row, one row per line.
        impl<T: Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let rows = self
                    .to_rows_array_2d()
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>();
                write!(f, "{}{}(", $label, T::SUFFIX)?;
                write!(f, "{}", rows.join(",\n  "))?;
                write!(f, ")")
            }
        }

        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                let mut m = self;
                m += rhs;
                m
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                let mut m = self;
                m -= rhs;
                m
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                let mut m = self;
                for col in m.cols.iter_mut() {
                    *col = -*col;
                }
                m
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (col, rhs_col) in self.cols.iter_mut().zip(rhs.cols.iter()) {
                    *col += *rhs_col;
                }
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (col, rhs_col) in self.cols.iter_mut().zip(rhs.cols.iter()) {
                    *col -= *rhs_col;
                }
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                let mut m = self;
                m *= rhs;
                m
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                for col in self.cols.iter_mut() {
                    *col *= rhs;
                }
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

        // Matrix-vector multiplication.
        impl<T: Scalar> std::ops::Mul<$vec_type<T>> for $name<T> {
            type Output = $vec_type<T>;

            fn mul(self, rhs: $vec_type<T>) -> Self::Output {
                self.cols
                    .iter()
                    .enumerate()
                    .fold($vec_type::<T>::zeros(), |acc, (c, col)| acc + *col * rhs[c])
            }
        }

        // Matrix-matrix multiplication.
        impl<T: Scalar> std::ops::Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                let mut m = Self::zeros();
                for (col, rhs_col) in m.cols.iter_mut().zip(rhs.cols.iter()) {
                    *col = self * *rhs_col;
                }
                m
            }
        }

        impl<T: Scalar> std::ops::MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}

/// Implement lossless conversions between a matrix type and its glam counterparts.
///
/// Both sides are column-major so the conversion goes through the column array.
#[cfg(feature = "glam")]
macro_rules! impl_glam_matrix {
    ($name:ident, $glam_f32:ty, $glam_f64:ty) => {
        impl From<$glam_f32> for $name<f32> {
            #[inline]
            fn from(m: $glam_f32) -> Self {
                Self::from_cols_array(m.to_cols_array())
            }
        }

        impl From<$name<f32>> for $glam_f32 {
            #[inline]
            fn from(m: $name<f32>) -> Self {
                <$glam_f32>::from_cols_array(&m.to_cols_array())
            }
        }

        impl From<$glam_f64> for $name<f64> {
            #[inline]
            fn from(m: $glam_f64) -> Self {
                Self::from_cols_array(m.to_cols_array())
            }
        }

        impl From<$name<f64>> for $glam_f64 {
            #[inline]
            fn from(m: $name<f64>) -> Self {
                <$glam_f64>::from_cols_array(&m.to_cols_array())
            }
        }
    };
}
