//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add + Copy,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub + Copy,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise multiplication (Hadamard product).
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip_with(rhs, |l, r| l * r)
    }
}

/// Element-wise multiplication (Hadamard product).
impl<T, const N: usize> MulAssign<Vector<T, N>> for Vector<T, N>
where
    T: MulAssign,
{
    fn mul_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Vector-scalar multiplication.
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|l| l * rhs)
    }
}

/// Vector-scalar multiplication.
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-scalar division.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|l| l / rhs)
    }
}

/// Vector-scalar division.
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}
