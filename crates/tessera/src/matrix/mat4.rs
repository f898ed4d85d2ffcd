use crate::{
    error::{check_index, Error, Result},
    scalar::{Number, One, Zero},
};

use super::{skip, Mat3, Mat4};

impl<T: Zero + One> Mat4<T> {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    ]);
}

impl<T> Mat4<T> {
    /// Returns the 3x3 matrix that remains after removing row `row` and column `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is not less than 4.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Mat3<T>>
    where
        T: Copy,
    {
        let row = check_index(row, 4)?;
        let col = check_index(col, 4)?;
        let minor = Mat3::from_fn(|r, c| self.0[skip(r, row) + skip(c, col) * 4]);
        Ok(minor)
    }
}

/// The 2x2 minors of the left (`a`) and right (`b`) column pairs of a 4x4 matrix.
struct BlockMinors<T> {
    a: [T; 6],
    b: [T; 6],
}

impl<T: Number> Mat4<T> {
    /// Computes the twelve 2x2 minors shared by [`Mat4::determinant`] and [`Mat4::invert`].
    ///
    /// `a` holds the minors of columns 0 and 1 for the row pairs (0,1), (0,2), (0,3), (1,2),
    /// (1,3), (2,3) in that order, `b` holds the same for columns 2 and 3.
    fn block_minors(&self) -> BlockMinors<T> {
        #[rustfmt::skip]
        let [
            m00, m10, m20, m30,
            m01, m11, m21, m31,
            m02, m12, m22, m32,
            m03, m13, m23, m33,
        ] = self.0;

        BlockMinors {
            a: [
                m00 * m11 - m10 * m01,
                m00 * m21 - m20 * m01,
                m00 * m31 - m30 * m01,
                m10 * m21 - m20 * m11,
                m10 * m31 - m30 * m11,
                m20 * m31 - m30 * m21,
            ],
            b: [
                m02 * m13 - m12 * m03,
                m02 * m23 - m22 * m03,
                m02 * m33 - m32 * m03,
                m12 * m23 - m22 * m13,
                m12 * m33 - m32 * m13,
                m22 * m33 - m32 * m23,
            ],
        }
    }

    /// Computes the determinant of this matrix.
    ///
    /// Rather than recursing into four 3x3 cofactors, the determinant is expanded over the six
    /// 2x2 minors `a0..a5` of the two left columns and the six complementary minors `b0..b5` of
    /// the two right columns:
    ///
    /// `det = a0·b5 - a1·b4 + a2·b3 + a3·b2 - a4·b1 + a5·b0`
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let m = Mat4::from_rows([
    ///     [2, 0, 0, 1],
    ///     [0, 3, 0, 1],
    ///     [0, 0, 4, 1],
    ///     [0, 0, 0, 5],
    /// ]);
    /// assert_eq!(m.determinant(), 120);
    /// ```
    pub fn determinant(&self) -> T {
        let BlockMinors { a, b } = self.block_minors();
        let [a0, a1, a2, a3, a4, a5] = a;
        let [b0, b1, b2, b3, b4, b5] = b;

        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }

    /// Computes the inverse of this matrix.
    ///
    /// All sixteen cofactors are assembled from the same twelve 2x2 minors used by
    /// [`Mat4::determinant`]. Integral matrices are inverted into [`f32`] matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonRegularMatrix`] if the determinant is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let scale = Mat4::diagonal(2.0);
    /// assert_eq!(scale.invert()?, Mat4::diagonal(0.5));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn invert(&self) -> Result<Mat4<T::Real>> {
        let BlockMinors { a, b } = self.block_minors();
        let [a0, a1, a2, a3, a4, a5] = a;
        let [b0, b1, b2, b3, b4, b5] = b;

        let det = a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0;
        if det == T::ZERO {
            log::trace!("cannot invert singular matrix {:?}", self);
            return Err(Error::NonRegularMatrix);
        }

        #[rustfmt::skip]
        let [
            m00, m10, m20, m30,
            m01, m11, m21, m31,
            m02, m12, m22, m32,
            m03, m13, m23, m33,
        ] = self.0;

        #[rustfmt::skip]
        let adjugate = Mat4([
            m11 * b5 - m21 * b4 + m31 * b3,
            -m10 * b5 + m20 * b4 - m30 * b3,
            m13 * a5 - m23 * a4 + m33 * a3,
            -m12 * a5 + m22 * a4 - m32 * a3,

            -m01 * b5 + m21 * b2 - m31 * b1,
            m00 * b5 - m20 * b2 + m30 * b1,
            -m03 * a5 + m23 * a2 - m33 * a1,
            m02 * a5 - m22 * a2 + m32 * a1,

            m01 * b4 - m11 * b2 + m31 * b0,
            -m00 * b4 + m10 * b2 - m30 * b0,
            m03 * a4 - m13 * a2 + m33 * a0,
            -m02 * a4 + m12 * a2 - m32 * a0,

            -m01 * b3 + m11 * b1 - m21 * b0,
            m00 * b3 - m10 * b1 + m20 * b0,
            -m03 * a3 + m13 * a1 - m23 * a0,
            m02 * a3 - m12 * a1 + m22 * a0,
        ]);
        Ok(adjugate.promote() * (<T::Real as One>::ONE / det.promote()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec4, Error, Mat3i, Mat4d, Mat4f, Mat4i, Vec4i};

    fn upper_unit() -> Mat4i {
        Mat4i::from_rows([[1, 2, 3, 4], [0, 1, 5, 6], [0, 0, 1, 7], [0, 0, 0, 1]])
    }

    /// Laplace expansion along the first row, as an independent reference.
    fn laplace(m: &Mat4i) -> i32 {
        (0..4)
            .map(|col| {
                let sign = if col % 2 == 0 { 1 } else { -1 };
                sign * m[(0, col)] * m.submatrix(0, col).unwrap().determinant()
            })
            .sum()
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat4i::IDENTITY.determinant(), 1);
        assert_eq!(Mat4i::ZERO.determinant(), 0);
        assert_eq!(Mat4i::diagonal(3).determinant(), 81);
        assert_eq!(upper_unit().determinant(), 1);

        // Permutation matrix swapping the first two axes.
        let swap = Mat4i::from_columns([Vec4i::Y, Vec4i::X, Vec4i::Z, Vec4i::W]);
        assert_eq!(swap.determinant(), -1);
    }

    #[test]
    fn determinant_matches_laplace() {
        let matrices = [
            Mat4i::from_rows([[3, 2, 0, 1], [4, 0, 1, 2], [3, 0, 2, 1], [9, 2, 3, 1]]),
            Mat4i::from_rows([[1, -2, 0, 5], [7, 3, -1, 2], [0, 4, 6, -3], [2, 2, 1, 8]]),
            Mat4i::from_rows([
                [1, 2, 3, 4],
                [5, 6, 7, 8],
                [9, 10, 11, 12],
                [13, 14, 15, 16],
            ]),
            upper_unit().transpose(),
        ];
        for m in matrices {
            assert_eq!(m.determinant(), laplace(&m), "{m:?}");
        }
        assert_eq!(matrices[0].determinant(), 24);
        assert_eq!(matrices[2].determinant(), 0);
    }

    #[test]
    fn submatrix() {
        let m = Mat4i::from_fn(|row, col| (row * 4 + col) as i32);
        assert_eq!(
            m.submatrix(1, 2),
            Ok(Mat3i::from_rows([[0, 1, 3], [8, 9, 11], [12, 13, 15]]))
        );
        assert_eq!(
            m.submatrix(3, 3),
            Ok(Mat3i::from_rows([[0, 1, 2], [4, 5, 6], [8, 9, 10]]))
        );
        assert_eq!(
            m.submatrix(4, 0),
            Err(Error::IndexOutOfBounds {
                index: 4,
                dimension: 4
            })
        );
    }

    #[test]
    fn invert_unimodular() {
        let m = upper_unit();
        let inv: Mat4f = m.invert().unwrap();
        assert_eq!(inv * m.promote(), Mat4f::IDENTITY);
        assert_eq!(m.promote() * inv, Mat4f::IDENTITY);

        let mt = m.transpose();
        assert_eq!(mt.invert().unwrap(), inv.transpose());
    }

    #[test]
    fn invert_floating() {
        let m = Mat4d::from_rows([
            [1.0, -2.0, 0.0, 5.0],
            [7.0, 3.0, -1.0, 2.0],
            [0.0, 4.0, 6.0, -3.0],
            [2.0, 2.0, 1.0, 8.0],
        ]);
        let inv = m.invert().unwrap();
        assert_relative_eq!(inv * m, Mat4d::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(m * inv, Mat4d::IDENTITY, epsilon = 1e-12);

        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(inv * (m * v), v, epsilon = 1e-12);
    }

    #[test]
    fn invert_singular() {
        let m = Mat4i::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        assert_eq!(m.invert(), Err(Error::NonRegularMatrix));
        assert_eq!(Mat4f::ZERO.invert(), Err(Error::NonRegularMatrix));

        let mut rank3 = Mat4d::IDENTITY;
        rank3[(3, 3)] = 0.0;
        assert_eq!(rank3.invert(), Err(Error::NonRegularMatrix));
    }
}
