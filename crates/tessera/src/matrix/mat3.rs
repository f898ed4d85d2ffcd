use crate::{
    error::{check_index, Error, Result},
    scalar::{Number, One, Zero},
};

use super::{skip, Mat2, Mat3};

impl<T: Zero + One> Mat3<T> {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
    ]);
}

impl<T> Mat3<T> {
    /// Returns the 2x2 matrix that remains after removing row `row` and column `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is not less than 3.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let m = Mat3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(m.submatrix(1, 0)?, Mat2::from_rows([[2, 3], [8, 9]]));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Mat2<T>>
    where
        T: Copy,
    {
        let row = check_index(row, 3)?;
        let col = check_index(col, 3)?;
        let minor = Mat2::from_fn(|r, c| self.0[skip(r, row) + skip(c, col) * 3]);
        Ok(minor)
    }
}

impl<T: Number> Mat3<T> {
    /// Computes the determinant of this matrix with Sarrus' rule.
    pub fn determinant(&self) -> T {
        let [m00, m10, m20, m01, m11, m21, m02, m12, m22] = self.0;

        m00 * m11 * m22 + m01 * m12 * m20 + m02 * m10 * m21
            - m02 * m11 * m20
            - m00 * m12 * m21
            - m01 * m10 * m22
    }

    /// Computes the inverse of this matrix.
    ///
    /// The adjugate is assembled from the nine 2x2 minors and divided by the determinant.
    /// Integral matrices are inverted into [`f32`] matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonRegularMatrix`] if the determinant is exactly zero.
    pub fn invert(&self) -> Result<Mat3<T::Real>> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("cannot invert singular matrix {:?}", self);
            return Err(Error::NonRegularMatrix);
        }

        let [m00, m10, m20, m01, m11, m21, m02, m12, m22] = self.0;

        let i00 = m11 * m22 - m12 * m21;
        let i01 = m02 * m21 - m01 * m22;
        let i02 = m01 * m12 - m02 * m11;
        let i10 = m12 * m20 - m10 * m22;
        let i11 = m00 * m22 - m02 * m20;
        let i12 = m02 * m10 - m00 * m12;
        let i20 = m10 * m21 - m11 * m20;
        let i21 = m01 * m20 - m00 * m21;
        let i22 = m00 * m11 - m01 * m10;

        let adjugate = Mat3([i00, i10, i20, i01, i11, i21, i02, i12, i22]);
        Ok(adjugate.promote() * (<T::Real as One>::ONE / det.promote()))
    }
}
