use crate::{
    error::{Error, Result},
    scalar::{Number, One, Zero},
};

use super::Mat2;

impl<T: Zero + One> Mat2<T> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Number> Mat2<T> {
    /// Computes the determinant `a·d - b·c` of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let m = Mat2::from_rows([
    ///     [1, 2],
    ///     [0, 4],
    /// ]);
    /// assert_eq!(m.determinant(), 4);
    /// ```
    pub fn determinant(&self) -> T {
        let [a, c, b, d] = self.0;
        a * d - b * c
    }

    /// Computes the inverse of this matrix.
    ///
    /// The adjugate swaps the diagonal and negates the off-diagonal elements, and is then
    /// divided by the determinant. Integral matrices are inverted into [`f32`] matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonRegularMatrix`] if the determinant is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let m = Mat2::from_rows([
    ///     [1, 2],
    ///     [0, 4],
    /// ]);
    /// let inv: Mat2f = m.invert()?;
    /// assert_eq!(inv * m.promote(), Mat2f::IDENTITY);
    ///
    /// assert_eq!(Mat2i::ZERO.invert(), Err(Error::NonRegularMatrix));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn invert(&self) -> Result<Mat2<T::Real>> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("cannot invert singular matrix {:?}", self);
            return Err(Error::NonRegularMatrix);
        }

        let [a, c, b, d] = self.0;
        let adjugate = Mat2([d, -c, -b, a]);
        Ok(adjugate.promote() * (<T::Real as One>::ONE / det.promote()))
    }
}
