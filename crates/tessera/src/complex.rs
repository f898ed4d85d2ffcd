use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    scalar::{Number, Real, ScalarCast, Sqrt},
    vec2, One, Vec2, Vector, Zero,
};

/// A complex number with [`i32`] parts.
pub type Complexi = Complex<i32>;
/// A complex number with [`f32`] parts.
pub type Complexf = Complex<f32>;
/// A complex number with [`f64`] parts.
pub type Complexd = Complex<f64>;

/// A complex number `re + im·i` (defaults to [`f32`] parts).
///
/// The real and imaginary parts are stored like a 2-dimensional vector, in that order.
///
/// # Division
///
/// Dividing by a complex number requires the reciprocal of `c² + d²`, which is not an integer in
/// general. `Complex<T>` therefore only implements [`Div`] when `T` implements [`Real`].
/// Integral complex numbers have to be converted first:
///
/// ```
/// # use tessera::*;
/// let a = Complex::new(-5, 10);
/// let b = Complex::new(3, 4);
/// assert_eq!(a.promote() / b.promote(), Complex::new(1.0f32, 2.0));
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Complex<T = f32> {
    vec: Vec2<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

impl<T: Zero> Complex<T> {
    /// The complex number `0 + 0i`.
    pub const ZERO: Self = Self { vec: Vector::ZERO };
}

impl<T: Zero> Default for Complex<T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One> Complex<T> {
    /// The complex number `1 + 0i`.
    pub const ONE: Self = Self { vec: Vec2::X };

    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self { vec: Vec2::Y };
}

impl<T> Complex<T> {
    /// Creates a complex number from its real and imaginary parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { vec: vec2(re, im) }
    }

    /// Creates a complex number with no imaginary part.
    pub fn from_real(re: T) -> Self
    where
        T: Zero,
    {
        Self::new(re, T::ZERO)
    }

    /// Creates a complex number with no real part.
    pub fn from_imaginary(im: T) -> Self
    where
        T: Zero,
    {
        Self::new(T::ZERO, im)
    }

    /// Creates a complex number from `[re, im]`, converting from any scalar kind.
    ///
    /// Missing parts are zero, excess values are ignored.
    pub fn from_slice<S: ScalarCast>(values: &[S]) -> Self
    where
        T: Number,
    {
        Self {
            vec: Vector::from_slice(values),
        }
    }

    /// Returns the real part.
    #[inline]
    pub fn re(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    /// Returns the imaginary part.
    #[inline]
    pub fn im(&self) -> T
    where
        T: Copy,
    {
        self.vec[1]
    }

    /// Returns the `(re, im)` pair as a vector.
    #[inline]
    pub fn into_vec(self) -> Vec2<T> {
        self.vec
    }

    /// Converts both parts to the scalar kind `U`, using [`ScalarCast`] semantics.
    pub fn cast<U: ScalarCast>(self) -> Complex<U>
    where
        T: ScalarCast,
    {
        Complex {
            vec: self.vec.cast(),
        }
    }

    /// Converts both parts to the promoted floating-point type [`Number::Real`].
    pub fn promote(self) -> Complex<T::Real>
    where
        T: Number,
    {
        Complex {
            vec: self.vec.promote(),
        }
    }

    /// Returns the complex conjugate `re - im·i`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(Complex::new(3, 4).conjugate(), Complex::new(3, -4));
    /// ```
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::new(self.re(), -self.im())
    }

    /// Returns the squared magnitude `re² + im²`.
    pub fn norm(&self) -> T
    where
        T: Number,
    {
        self.vec.magnitude_squared()
    }

    /// Returns the magnitude (absolute value) `sqrt(re² + im²)`.
    ///
    /// Integral complex numbers are promoted to [`f32`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let abs: f32 = Complex::new(3, 4).magnitude();
    /// assert_eq!(abs, 5.0);
    /// ```
    #[doc(alias = "abs")]
    pub fn magnitude(&self) -> T::Real
    where
        T: Number,
    {
        self.norm().promote().sqrt()
    }
}

impl<T> From<Vec2<T>> for Complex<T> {
    #[inline]
    fn from(vec: Vec2<T>) -> Self {
        Self { vec }
    }
}

impl<T: fmt::Debug> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [re, im] = self.vec.as_array();
        write!(f, "{:?} + {:?}i", re, im)
    }
}

impl<T: Number> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

impl<T: Number> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Number> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl<T: Number> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

impl<T: Number> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Complex multiplication `(ac - bd) + (ad + bc)i`.
impl<T: Number> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [a, b] = self.vec.into_array();
        let [c, d] = rhs.vec.into_array();
        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl<T: Number> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Scales both parts.
impl<T: Number> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

impl<T: Number> MulAssign<T> for Complex<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.vec *= rhs;
    }
}

/// Complex division `((ac + bd) + (bc - ad)i) / (c² + d²)`.
///
/// Dividing by zero yields non-finite parts.
impl<T: Real> Div for Complex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let [a, b] = self.vec.into_array();
        let [c, d] = rhs.vec.into_array();
        let denom = c * c + d * d;
        Self::new((a * c + b * d) / denom, (b * c - a * d) / denom)
    }
}

impl<T: Real> DivAssign for Complex<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Complexi::default(), Complexi::ZERO);
        assert_eq!(Complexi::from_real(2), Complex::new(2, 0));
        assert_eq!(Complexf::from_imaginary(1.0), Complexf::I);
        assert_eq!(Complexi::from_slice(&[7.9f64]), Complex::new(7, 0));
        assert_eq!(Complexi::from_slice(&[1, 2, 3]), Complex::new(1, 2));
        let c = Complex::new(1.5f32, -2.5);
        assert_eq!(c.cast::<i16>(), Complex::new(1, -2));
        assert_eq!(Complex::from(vec2(3, 4)).im(), 4);
    }

    #[test]
    fn magnitude_and_conjugate() {
        let c = Complex::new(3, 4);
        let magnitude: f32 = c.magnitude();
        assert_eq!(magnitude, 5.0);
        assert_eq!(c.norm(), 25);
        assert_eq!(c.conjugate(), Complex::new(3, -4));
        assert_eq!(c * c.conjugate(), Complex::from_real(c.norm()));

        let magnitude: f64 = Complexd::new(-5.0, 12.0).magnitude();
        assert_eq!(magnitude, 13.0);
    }

    #[test]
    fn arithmetic() {
        let a = Complex::new(1, 2);
        let b = Complex::new(3, 4);
        assert_eq!(a + b, Complex::new(4, 6));
        assert_eq!(a - b, Complex::new(-2, -2));
        assert_eq!(-a, Complex::new(-1, -2));
        assert_eq!(a * b, Complex::new(-5, 10));
        assert_eq!(a * 3, Complex::new(3, 6));
        assert_eq!(Complexi::I * Complexi::I, -Complexi::ONE);

        let mut c = a;
        c += b;
        c -= Complex::ONE;
        c *= Complex::I;
        assert_eq!(c, Complex::new(-6, 3));
        c *= 2;
        assert_eq!(c, Complex::new(-12, 6));
    }

    #[test]
    fn division() {
        let quotient = Complexd::new(-5.0, 10.0) / Complexd::new(3.0, 4.0);
        assert_eq!(quotient, Complex::new(1.0, 2.0));

        let a = Complexf::new(0.5, -1.25);
        let b = Complexf::new(-2.0, 0.75);
        assert_relative_eq!((a / b) * b, a, max_relative = 1e-6);

        let mut c = Complexf::ONE;
        c /= Complexf::I;
        assert_eq!(c, Complex::new(0.0, -1.0));

        let inf = Complexf::ONE / Complexf::ZERO;
        assert!(!inf.re().is_finite());
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Complex::new(1, -2)), "1 + -2i");
    }
}
