//! Implementations of `std::ops`.
//!
//! Products are computed directly on the column-major storage: `(A * B)[r + c*N]` is the dot
//! product of row `r` of `A` (stride `N`) with column `c` of `B` (contiguous).

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{scalar::Number, Vector};

use super::{Mat2, Mat3, Mat4};

macro_rules! matrix_ops {
    ($($name:ident, $n:literal;)+) => {
        $(
            /// Indexing with a `(row, column)` pair. Panics when out of bounds.
            impl<T> Index<(usize, usize)> for $name<T> {
                type Output = T;

                #[inline]
                fn index(&self, (row, col): (usize, usize)) -> &T {
                    assert!(row < $n && col < $n, "index ({row}, {col}) out of bounds");
                    &self.0[row + col * $n]
                }
            }

            impl<T> IndexMut<(usize, usize)> for $name<T> {
                #[inline]
                fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                    assert!(row < $n && col < $n, "index ({row}, {col}) out of bounds");
                    &mut self.0[row + col * $n]
                }
            }

            impl<T, U> PartialEq<$name<U>> for $name<T>
            where
                T: PartialEq<U>,
            {
                fn eq(&self, other: &$name<U>) -> bool {
                    self.0 == other.0
                }
            }

            impl<T: Eq> Eq for $name<T> {}

            /// Element-wise negation.
            impl<T: Neg<Output = T>> Neg for $name<T> {
                type Output = Self;

                fn neg(self) -> Self {
                    self.map(T::neg)
                }
            }

            /// Element-wise addition.
            impl<T: Add<Output = T> + Copy> Add for $name<T> {
                type Output = Self;

                fn add(self, rhs: Self) -> Self {
                    Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
                }
            }

            impl<T: AddAssign + Copy> AddAssign for $name<T> {
                fn add_assign(&mut self, rhs: Self) {
                    self.0.iter_mut().zip(rhs.0).for_each(|(l, r)| *l += r);
                }
            }

            /// Element-wise subtraction.
            impl<T: Sub<Output = T> + Copy> Sub for $name<T> {
                type Output = Self;

                fn sub(self, rhs: Self) -> Self {
                    Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
                }
            }

            impl<T: SubAssign + Copy> SubAssign for $name<T> {
                fn sub_assign(&mut self, rhs: Self) {
                    self.0.iter_mut().zip(rhs.0).for_each(|(l, r)| *l -= r);
                }
            }

            /// Matrix multiplication.
            impl<T: Number> Mul for $name<T> {
                type Output = Self;

                fn mul(self, rhs: Self) -> Self {
                    Self::from_fn(|row, col| {
                        (0..$n).fold(T::ZERO, |acc, k| {
                            acc + self.0[row + k * $n] * rhs.0[k + col * $n]
                        })
                    })
                }
            }

            impl<T: Number> MulAssign for $name<T> {
                fn mul_assign(&mut self, rhs: Self) {
                    *self = *self * rhs;
                }
            }

            /// Matrix times column vector.
            impl<T: Number> Mul<Vector<T, $n>> for $name<T> {
                type Output = Vector<T, $n>;

                fn mul(self, rhs: Vector<T, $n>) -> Vector<T, $n> {
                    Vector::from_fn(|row| {
                        (0..$n).fold(T::ZERO, |acc, col| acc + self.0[row + col * $n] * rhs[col])
                    })
                }
            }

            /// Row vector times matrix.
            impl<T: Number> Mul<$name<T>> for Vector<T, $n> {
                type Output = Vector<T, $n>;

                fn mul(self, rhs: $name<T>) -> Vector<T, $n> {
                    Vector::from_fn(|col| {
                        (0..$n).fold(T::ZERO, |acc, row| acc + self[row] * rhs.0[row + col * $n])
                    })
                }
            }

            /// Matrix-scalar multiplication.
            impl<T: Mul<Output = T> + Copy> Mul<T> for $name<T> {
                type Output = Self;

                fn mul(self, rhs: T) -> Self {
                    self.map(|e| e * rhs)
                }
            }

            impl<T: MulAssign + Copy> MulAssign<T> for $name<T> {
                fn mul_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|e| *e *= rhs);
                }
            }

            /// Matrix-scalar division.
            impl<T: Div<Output = T> + Copy> Div<T> for $name<T> {
                type Output = Self;

                fn div(self, rhs: T) -> Self {
                    self.map(|e| e / rhs)
                }
            }

            impl<T: DivAssign + Copy> DivAssign<T> for $name<T> {
                fn div_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|e| *e /= rhs);
                }
            }
        )+
    };
}

matrix_ops! {
    Mat2, 2;
    Mat3, 3;
    Mat4, 4;
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Mat2i, Mat3i, Mat4i, Vec2i, Vec3i};

    #[test]
    fn matrix_vector_uses_rows() {
        let m = Mat2i::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m * vec2(1, 0), vec2(1, 3));
        assert_eq!(m * vec2(0, 1), vec2(2, 4));
        assert_eq!(m * vec2(5, 6), vec2(17, 39));

        let m = Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m * vec3(1, 1, 1), vec3(6, 15, 24));
        assert_eq!(m * Vec3i::Z, vec3(3, 6, 9));
    }

    #[test]
    fn vector_matrix_uses_columns() {
        let m = Mat2i::from_rows([[1, 2], [3, 4]]);
        assert_eq!(vec2(1, 0) * m, vec2(1, 2));
        assert_eq!(vec2(0, 1) * m, vec2(3, 4));
        assert_eq!(vec2(5, 6) * m, vec2(23, 34));

        let m = Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(vec3(1, 1, 1) * m, vec3(12, 15, 18));
        assert_eq!(Vec3i::Z * m, vec3(7, 8, 9));
    }

    #[test]
    fn row_vector_is_transposed_product() {
        let m = Mat4i::from_fn(|row, col| (row * 4 + col) as i32 - 5);
        let v = vec4(3, -1, 4, 1);
        assert_eq!(v * m, m.transpose() * v);
        assert_ne!(v * m, m * v);
    }

    #[test]
    fn matrix_product() {
        let a = Mat2i::from_rows([[1, 2], [3, 4]]);
        let b = Mat2i::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a * b, Mat2i::from_rows([[19, 22], [43, 50]]));
        assert_eq!(b * a, Mat2i::from_rows([[23, 34], [31, 46]]));
        assert_eq!(a * Mat2i::IDENTITY, a);
        assert_eq!(Mat2i::IDENTITY * a, a);

        let m = Mat3i::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m * Mat3i::ZERO, Mat3i::ZERO);
        // Composition applies the right operand first.
        let v = vec3(1, -2, 3);
        assert_eq!((m * m.transpose()) * v, m * (m.transpose() * v));
    }

    #[test]
    fn elementwise() {
        let a = Mat2i::from_rows([[1, 2], [3, 4]]);
        assert_eq!(a + a, a * 2);
        assert_eq!(a - a, Mat2i::ZERO);
        assert_eq!(-a, Mat2i::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!((a * 6) / 3, a * 2);

        let mut m = Mat2i::IDENTITY;
        m += a;
        assert_eq!(m, Mat2i::from_rows([[2, 2], [3, 5]]));
        m -= Mat2i::IDENTITY;
        assert_eq!(m, a);
        m *= Mat2i::IDENTITY * 2;
        assert_eq!(m, a * 2);
        m /= 2;
        assert_eq!(m, a);
        m *= 3;
        assert_eq!(m[(1, 1)], 12);
    }

    #[test]
    fn index() {
        let mut m = Mat3i::ZERO;
        m[(2, 0)] = 7;
        assert_eq!(m.into_array(), [0, 0, 7, 0, 0, 0, 0, 0, 0]);
        assert_eq!(m[(2, 0)], 7);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Mat2i::IDENTITY;
        let _ = m[(0, 2)];
    }

    #[test]
    fn unit_vectors_select_columns() {
        let m = Mat4i::from_fn(|row, col| (row * 4 + col) as i32);
        for (i, unit) in [Vec2i::X, Vec2i::Y].into_iter().enumerate() {
            let m2 = Mat2i::from_rows([[1, 2], [3, 4]]);
            assert_eq!(Ok(m2 * unit), m2.col(i));
            assert_eq!(Ok(unit * m2), m2.row(i));
        }
        assert_eq!(Ok(m * vec4(0, 0, 1, 0)), m.col(2));
    }
}
