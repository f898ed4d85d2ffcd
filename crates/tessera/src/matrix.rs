//! Square matrices.
//!
//! [`Mat2`], [`Mat3`] and [`Mat4`] store their `N * N` elements in a flat, column-major array: the
//! element in row `r` and column `c` lives at index `r + c * N`. The closed-form determinant and
//! inverse of each size are written directly against that layout, so every constructor and
//! accessor documents which order it expects.

use std::{array, fmt};

use crate::{
    error::{check_index, Result},
    scalar::{Number, ScalarCast},
    Vector, Zero,
};

mod mat2;
mod mat3;
mod mat4;
mod ops;

/// Maps an index of an `N-1`-sized minor back to the index it had before `removed` was dropped.
#[inline]
fn skip(index: usize, removed: usize) -> usize {
    if index < removed {
        index
    } else {
        index + 1
    }
}

macro_rules! square_matrix {
    ($(#[$attr:meta])* $name:ident, $n:literal, $len:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Hash)]
        #[repr(transparent)]
        pub struct $name<T = f32>([T; $len]);

        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}

        impl<T: Zero> $name<T> {
            /// The matrix with every element set to 0.
            ///
            /// This is also the [`Default`] value.
            pub const ZERO: Self = Self([T::ZERO; $len]);
        }

        impl<T: Zero> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<T> $name<T> {
            /// The number of rows and columns.
            pub const DIMENSION: usize = $n;

            /// Creates a matrix from its elements in column-major order.
            #[inline]
            pub const fn from_array(elements: [T; $len]) -> Self {
                Self(elements)
            }

            /// Creates a matrix by invoking a closure with the position (row and column) of each
            /// element.
            pub fn from_fn<F>(mut cb: F) -> Self
            where
                F: FnMut(usize, usize) -> T,
            {
                Self(array::from_fn(|i| cb(i % $n, i / $n)))
            }

            /// Creates a matrix whose columns are the given vectors.
            pub fn from_columns<U: Into<Vector<T, $n>>>(columns: [U; $n]) -> Self
            where
                T: Copy,
            {
                let columns = columns.map(Into::into);
                Self::from_fn(|row, col| columns[col][row])
            }

            /// Creates a matrix whose rows are the given vectors.
            pub fn from_rows<U: Into<Vector<T, $n>>>(rows: [U; $n]) -> Self
            where
                T: Copy,
            {
                let rows = rows.map(Into::into);
                Self::from_fn(|row, col| rows[row][col])
            }

            /// Creates a matrix from a list of column-major values of any scalar kind.
            ///
            /// Missing trailing elements are set to zero, excess values are ignored.
            pub fn from_slice<S: ScalarCast>(values: &[S]) -> Self
            where
                T: Number,
            {
                Self(array::from_fn(|i| {
                    values.get(i).map_or(T::ZERO, |&v| T::from_scalar(v))
                }))
            }

            /// Creates a matrix with `value` on its diagonal and 0 everywhere else.
            pub fn diagonal(value: T) -> Self
            where
                T: Zero + Copy,
            {
                Self::from_fn(|row, col| if row == col { value } else { T::ZERO })
            }

            /// Applies a closure to each element, returning a new matrix.
            pub fn map<F, U>(self, f: F) -> $name<U>
            where
                F: FnMut(T) -> U,
            {
                $name(self.0.map(f))
            }

            /// Converts every element to the scalar kind `U`, using [`ScalarCast`] semantics.
            pub fn cast<U: ScalarCast>(self) -> $name<U>
            where
                T: ScalarCast,
            {
                self.map(U::from_scalar)
            }

            /// Converts every element to the promoted floating-point type [`Number::Real`].
            pub fn promote(self) -> $name<T::Real>
            where
                T: Number,
            {
                self.map(T::promote)
            }

            /// Returns the elements in column-major order.
            #[inline]
            pub const fn as_array(&self) -> &[T; $len] {
                &self.0
            }

            /// Returns the elements in column-major order.
            #[inline]
            pub const fn as_slice(&self) -> &[T] {
                &self.0
            }

            /// Converts this matrix into its column-major elements.
            #[inline]
            pub fn into_array(self) -> [T; $len] {
                self.0
            }

            /// Returns the element at `(row, col)`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IndexOutOfBounds`][crate::Error::IndexOutOfBounds] if either index
            /// is not less than the dimension.
            pub fn get(&self, row: usize, col: usize) -> Result<T>
            where
                T: Copy,
            {
                let row = check_index(row, $n)?;
                let col = check_index(col, $n)?;
                Ok(self.0[row + col * $n])
            }

            /// Returns row `index` as a vector.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IndexOutOfBounds`][crate::Error::IndexOutOfBounds] if `index` is
            /// not less than the dimension.
            pub fn row(&self, index: usize) -> Result<Vector<T, $n>>
            where
                T: Copy,
            {
                let row = check_index(index, $n)?;
                Ok(Vector::from_fn(|col| self.0[row + col * $n]))
            }

            /// Returns column `index` as a vector.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IndexOutOfBounds`][crate::Error::IndexOutOfBounds] if `index` is
            /// not less than the dimension.
            pub fn col(&self, index: usize) -> Result<Vector<T, $n>>
            where
                T: Copy,
            {
                let col = check_index(index, $n)?;
                Ok(Vector::from_fn(|row| self.0[row + col * $n]))
            }

            /// Returns all rows of this matrix.
            pub fn rows(&self) -> [Vector<T, $n>; $n]
            where
                T: Copy,
            {
                array::from_fn(|row| Vector::from_fn(|col| self.0[row + col * $n]))
            }

            /// Returns all columns of this matrix.
            pub fn columns(&self) -> [Vector<T, $n>; $n]
            where
                T: Copy,
            {
                array::from_fn(|col| Vector::from_fn(|row| self.0[row + col * $n]))
            }

            /// Swaps the rows and columns of this matrix.
            pub fn transpose(self) -> Self
            where
                T: Copy,
            {
                Self::from_fn(|row, col| self.0[col + row * $n])
            }

            /// Multiplies each element with a scalar of any kind, converting it to `T` first.
            pub fn mul_scalar<S: ScalarCast>(self, factor: S) -> Self
            where
                T: Number,
            {
                self * T::from_scalar(factor)
            }

            /// Divides each element by a scalar of any kind, converting it to `T` first.
            pub fn div_scalar<S: ScalarCast>(self, divisor: S) -> Self
            where
                T: ScalarCast + std::ops::Div<Output = T>,
            {
                self / T::from_scalar(divisor)
            }
        }

        impl<T> From<[T; $len]> for $name<T> {
            #[inline]
            fn from(elements: [T; $len]) -> Self {
                Self(elements)
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            #[inline]
            fn from(mat: $name<T>) -> Self {
                mat.0
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                struct FormatRow<'a, T>(&'a [T; $len], usize);

                impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "[")?;
                        for col in 0..$n {
                            if col != 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{:?}", self.0[self.1 + col * $n])?;
                        }
                        write!(f, "]")
                    }
                }

                let mut list = f.debug_list();
                for row in 0..$n {
                    list.entry(&FormatRow(&self.0, row));
                }
                list.finish()
            }
        }
    };
}

square_matrix!(
    /// A 2x2 matrix with column-major storage (defaults to [`f32`] elements).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let m = Mat2::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(m.into_array(), [1, 3, 2, 4]);
    /// assert_eq!(m[(0, 1)], 2);
    /// ```
    Mat2, 2, 4
);
square_matrix!(
    /// A 3x3 matrix with column-major storage (defaults to [`f32`] elements).
    Mat3, 3, 9
);
square_matrix!(
    /// A 4x4 matrix with column-major storage (defaults to [`f32`] elements).
    ///
    /// The determinant and inverse use a closed-form expansion over twelve 2x2 minors, see
    /// [`Mat4::determinant`].
    Mat4, 4, 16
);

/// A 2x2 matrix with [`i32`] elements.
pub type Mat2i = Mat2<i32>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat3i = Mat3<i32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat4i = Mat4<i32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;
