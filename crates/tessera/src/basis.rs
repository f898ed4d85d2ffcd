//! Coordinate bases.
//!
//! A basis is a set of `N` linearly independent vectors, stored as the columns of a regular
//! matrix. Regularity is verified when the basis is created, so every [`Basis2`], [`Basis3`] and
//! [`Basis4`] value is guaranteed to be invertible for its entire lifetime.

use crate::{
    error::{Error, Result},
    scalar::{Number, Sqrt},
    Mat2, Mat3, Mat4, One, Vector, Zero,
};

macro_rules! basis {
    ($(#[$attr:meta])* $name:ident, $mat:ident, $n:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
        pub struct $name<T = f32> {
            matrix: $mat<T>,
        }

        impl<T: Zero + One> $name<T> {
            /// Returns the standard basis, whose vectors are the columns of the identity matrix.
            pub const fn standard() -> Self {
                Self {
                    matrix: $mat::IDENTITY,
                }
            }
        }

        impl<T: Zero + One> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::standard()
            }
        }

        impl<T: Number> $name<T> {
            /// Creates a basis from `N` vectors.
            ///
            /// # Errors
            ///
            /// Returns [`Error::DegenerateBasis`] if the vectors are linearly dependent.
            pub fn new(vectors: [Vector<T, $n>; $n]) -> Result<Self> {
                Self::from_matrix($mat::from_columns(vectors))
            }

            /// Creates a basis from the columns of `matrix`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::DegenerateBasis`] if the determinant of `matrix` is zero.
            pub fn from_matrix(matrix: $mat<T>) -> Result<Self> {
                if matrix.determinant() == T::ZERO {
                    log::trace!("rejecting degenerate basis {:?}", matrix);
                    return Err(Error::DegenerateBasis);
                }
                Ok(Self { matrix })
            }

            /// Converts the basis to another scalar kind.
            ///
            /// # Errors
            ///
            /// The conversion is lossy and may collapse the vectors into a dependent set, in which
            /// case [`Error::DegenerateBasis`] is returned.
            pub fn cast<U: Number>(self) -> Result<$name<U>> {
                $name::from_matrix(self.matrix.cast())
            }

            /// Returns the vector with index `index`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::IndexOutOfBounds`] if `index` is not less than the dimension.
            pub fn vector(&self, index: usize) -> Result<Vector<T, $n>> {
                self.matrix.col(index)
            }

            /// Returns the vectors making up this basis.
            pub fn vectors(&self) -> [Vector<T, $n>; $n] {
                self.matrix.columns()
            }

            /// Returns the matrix whose columns are the basis vectors.
            #[inline]
            pub fn matrix(&self) -> $mat<T> {
                self.matrix
            }

            /// Computes the matrix converting coordinates expressed in `self` into coordinates
            /// expressed in `to`.
            ///
            /// The result is `to.matrix().invert() * self.matrix()`. Integral bases produce
            /// [`f32`] matrices.
            pub fn transformation_to(&self, to: &Self) -> $mat<T::Real> {
                match to.matrix.invert() {
                    Ok(inverse) => inverse * self.matrix.promote(),
                    Err(error) => {
                        // Unreachable: `to` was checked for regularity when it was created and
                        // `invert` uses the same determinant.
                        log::error!("failed to invert basis {:?}: {}", to, error);
                        panic!("basis {:?} is not invertible: {}", to, error);
                    }
                }
            }

            /// Orthogonalizes the basis vectors with the Gram–Schmidt process.
            ///
            /// The first vector is kept, every following vector has its projections onto the
            /// previous (already orthogonalized) vectors removed. If `normalize` is `true`, the
            /// resulting vectors are also scaled to unit length, producing an orthonormal basis.
            ///
            /// # Errors
            ///
            /// Returns [`Error::DegenerateBasis`] if rounding leaves the resulting vectors
            /// linearly dependent.
            pub fn orthogonalize(&self, normalize: bool) -> Result<$name<T::Real>> {
                let mut vectors = self.vectors().map(Vector::promote);
                for i in 0..$n {
                    for j in 0..i {
                        let u = vectors[j];
                        let projection = vectors[i].dot(u) / u.dot(u);
                        vectors[i] -= u * projection;
                    }
                }
                if normalize {
                    vectors = vectors.map(|v| v / v.dot(v).sqrt());
                }
                $name::new(vectors)
            }
        }
    };
}

basis!(
    /// A basis of the 2-dimensional vector space (defaults to [`f32`] elements).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let from = Basis2i::standard();
    /// let to = Basis2i::new([vec2(1, 1), vec2(0, 1)])?;
    ///
    /// // (2, 3) = 2 * (1, 1) + 1 * (0, 1)
    /// let change = from.transformation_to(&to);
    /// assert_eq!(change * vec2(2.0, 3.0), vec2(2.0, 1.0));
    ///
    /// assert_eq!(
    ///     Basis2i::new([vec2(1, 2), vec2(2, 4)]),
    ///     Err(Error::DegenerateBasis),
    /// );
    /// # Ok::<_, Error>(())
    /// ```
    Basis2, Mat2, 2
);
basis!(
    /// A basis of the 3-dimensional vector space (defaults to [`f32`] elements).
    Basis3, Mat3, 3
);
basis!(
    /// A basis of the 4-dimensional vector space (defaults to [`f32`] elements).
    Basis4, Mat4, 4
);

/// A 2-dimensional basis with [`i32`] elements.
pub type Basis2i = Basis2<i32>;
/// A 2-dimensional basis with [`f32`] elements.
pub type Basis2f = Basis2<f32>;
/// A 2-dimensional basis with [`f64`] elements.
pub type Basis2d = Basis2<f64>;
/// A 3-dimensional basis with [`i32`] elements.
pub type Basis3i = Basis3<i32>;
/// A 3-dimensional basis with [`f32`] elements.
pub type Basis3f = Basis3<f32>;
/// A 3-dimensional basis with [`f64`] elements.
pub type Basis3d = Basis3<f64>;
/// A 4-dimensional basis with [`i32`] elements.
pub type Basis4i = Basis4<i32>;
/// A 4-dimensional basis with [`f32`] elements.
pub type Basis4f = Basis4<f32>;
/// A 4-dimensional basis with [`f64`] elements.
pub type Basis4d = Basis4<f64>;
