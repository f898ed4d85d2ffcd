use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    scalar::{Number, ScalarCast},
    vec3, One, Vec3, Vec4, Vector, Zero,
};

/// A quaternion with [`i32`] components.
pub type Quaternioni = Quaternion<i32>;
/// A quaternion with [`f32`] components.
pub type Quaternionf = Quaternion<f32>;
/// A quaternion with [`f64`] components.
pub type Quaterniond = Quaternion<f64>;

/// A quaternion `re + i·im.x + j·im.y + k·im.z` (defaults to [`f32`] components).
///
/// The quaternion is stored as a real part and an imaginary 3-dimensional vector. Wherever a
/// quaternion is converted to or from a flat list of components, the order is `[re, i, j, k]`.
///
/// Multiplication (`*`) is the Hamilton product:
///
/// ```
/// # use tessera::*;
/// let (i, j, k) = (Quaternioni::I, Quaternioni::J, Quaternioni::K);
/// assert_eq!(i * j, k);
/// assert_eq!(j * i, -k);
/// assert_eq!(i * i, -Quaternioni::IDENTITY);
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(C)]
pub struct Quaternion<T = f32> {
    re: T,
    im: Vec3<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: Zero> Quaternion<T> {
    /// The quaternion with every component set to 0.
    pub const ZERO: Self = Self {
        re: T::ZERO,
        im: Vector::ZERO,
    };
}

impl<T: Zero + One> Quaternion<T> {
    /// The multiplicative identity `1`.
    pub const IDENTITY: Self = Self {
        re: T::ONE,
        im: Vector::ZERO,
    };

    /// The first imaginary unit.
    pub const I: Self = Self {
        re: T::ZERO,
        im: Vec3::X,
    };

    /// The second imaginary unit.
    pub const J: Self = Self {
        re: T::ZERO,
        im: Vec3::Y,
    };

    /// The third imaginary unit.
    pub const K: Self = Self {
        re: T::ZERO,
        im: Vec3::Z,
    };
}

impl<T: Zero> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Quaternion<T> {
    /// Creates a quaternion from its real part and imaginary vector.
    #[inline]
    pub const fn new(re: T, im: Vec3<T>) -> Self {
        Self { re, im }
    }

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn from_components(re: T, i: T, j: T, k: T) -> Self {
        Self {
            re,
            im: vec3(i, j, k),
        }
    }

    /// Creates a quaternion from `[re, i, j, k]`, converting from any scalar kind.
    ///
    /// Missing components are zero, excess values are ignored.
    pub fn from_slice<S: ScalarCast>(values: &[S]) -> Self
    where
        T: Number,
    {
        let [re, i, j, k] = Vec4::<T>::from_slice(values).into_array();
        Self::from_components(re, i, j, k)
    }

    /// Returns the real part.
    #[inline]
    pub fn re(&self) -> T
    where
        T: Copy,
    {
        self.re
    }

    /// Returns the imaginary vector `(i, j, k)`.
    #[inline]
    pub fn im(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.im
    }

    /// Returns the components as `[re, i, j, k]`.
    pub fn into_array(self) -> [T; 4] {
        let [i, j, k] = self.im.into_array();
        [self.re, i, j, k]
    }

    /// Converts every component to the scalar kind `U`, using [`ScalarCast`] semantics.
    pub fn cast<U: ScalarCast>(self) -> Quaternion<U>
    where
        T: ScalarCast,
    {
        Quaternion {
            re: U::from_scalar(self.re),
            im: self.im.cast(),
        }
    }

    /// Converts every component to the promoted floating-point type [`Number::Real`].
    pub fn promote(self) -> Quaternion<T::Real>
    where
        T: Number,
    {
        Quaternion {
            re: self.re.promote(),
            im: self.im.promote(),
        }
    }

    /// Returns the conjugate, which negates the imaginary vector.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Sums the products of the four corresponding components.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.re * other.re + self.im.dot(other.im)
    }

    /// Returns the quaternion whose imaginary part is the cross product of both imaginary parts
    /// and whose real part is zero.
    ///
    /// This is a convenience for working with pure quaternions. It is *not* the Hamilton product
    /// (use `*` for that) and does not form a group operation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let a = Quaternion::from_components(5, 1, 0, 0);
    /// let b = Quaternion::from_components(7, 0, 1, 0);
    /// assert_eq!(a.cross(b), Quaternion::K);
    /// assert_ne!(a.cross(b), a * b);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        Self {
            re: T::ZERO,
            im: self.im.cross(other.im),
        }
    }

    /// Returns the squared magnitude, `self.dot(self)`.
    pub fn norm(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the magnitude of this quaternion.
    ///
    /// Integral quaternions are promoted to [`f32`].
    pub fn magnitude(&self) -> T::Real
    where
        T: Number,
    {
        Vector::from(self.into_array()).magnitude()
    }

    /// Divides this quaternion by its magnitude.
    ///
    /// Integral quaternions are promoted to [`f32`] quaternions. The zero quaternion normalizes
    /// to NaNs.
    pub fn normalize(self) -> Quaternion<T::Real>
    where
        T: Number,
    {
        let magnitude = self.magnitude();
        self.promote() / magnitude
    }
}

impl<T: fmt::Debug> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k] = self.im.as_array();
        write!(f, "{:?} + {:?}i + {:?}j + {:?}k", self.re, i, j, k)
    }
}

impl<T: Number> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Number> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: Number> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: Number> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// The Hamilton product.
///
/// With `p = (r1, v1)` and `q = (r2, v2)`, the product is
/// `(r1·r2 - v1·v2, r1·v2 + r2·v1 + v1 × v2)`. It is not commutative.
impl<T: Number> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (r1, v1) = (self.re, self.im);
        let (r2, v2) = (rhs.re, rhs.im);
        Self {
            re: r1 * r2 - v1.dot(v2),
            im: v2 * r1 + v1 * r2 + v1.cross(v2),
        }
    }
}

impl<T: Number> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Scales every component.
impl<T: Number> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl<T: Number> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Divides every component by a scalar.
impl<T: Number + Div<Output = T>> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

impl<T: Number + Div<Output = T>> DivAssign<T> for Quaternion<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
