use std::{array, fmt, ops::Div};

use crate::{
    scalar::{Number, ScalarCast, Sqrt, Trig},
    Mat4, One, Zero,
};

mod ops;

/// A 2-dimensional vector (defaults to [`f32`] elements).
pub type Vec2<T = f32> = Vector<T, 2>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector (defaults to [`f32`] elements).
pub type Vec3<T = f32> = Vector<T, 3>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector (defaults to [`f32`] elements).
pub type Vec4<T = f32> = Vector<T, 4>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// Vectors are plain values: every operation returns a new vector, and equality compares the
/// elements exactly (use the [`approx`] traits for tolerant comparisons).
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a single value into each element.
/// - [`Vector::ZERO`] (and [`Default`] for numeric types) is the all-zero vector.
/// - The `X`, `Y`, `Z` and `W` constants (such as `Vec3::X`) are the standard basis vectors.
/// - [`Vector::from_slice`] converts a list of values of any scalar kind, padding missing
///   elements with zero and ignoring excess ones.
/// - [`Vector::cast`] converts a vector of another scalar kind.
///
/// # Element Order
///
/// Elements are stored in `x`, `y`, `z`, `w` order. This is also the order in which a matrix
/// column is laid out in the column-major storage of [`Mat2`][crate::Mat2],
/// [`Mat3`][crate::Mat3] and [`Mat4`].
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// The first standard basis vector.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The second standard basis vector.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// The first standard basis vector.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The second standard basis vector.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The third standard basis vector.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// The first standard basis vector.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// The second standard basis vector.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// The third standard basis vector.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// The fourth standard basis vector.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a list of values of any scalar kind.
    ///
    /// Each value is converted with [`ScalarCast::from_scalar`]. Elements without a corresponding
    /// value are set to zero, values beyond the vector's dimension are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(Vec3i::from_slice(&[1.5f32, 2.5]), vec3(1, 2, 0));
    /// assert_eq!(Vec2i::from_slice(&[1, 2, 3, 4]), vec2(1, 2));
    /// ```
    pub fn from_slice<S: ScalarCast>(values: &[S]) -> Self
    where
        T: Number,
    {
        Self::from_fn(|i| values.get(i).map_or(T::ZERO, |&v| T::from_scalar(v)))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise with a closure.
    pub fn zip_with<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        T: Copy,
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        Vector::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Converts every element to the scalar kind `U`.
    ///
    /// The conversion is lossy in the same way [`ScalarCast`] is: floats are truncated toward
    /// zero when converted to integers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(vec2(1.75f32, -2.5).cast::<i32>(), vec2(1, -2));
    /// assert_eq!(vec2(1, 2).cast::<f64>(), vec2(1.0, 2.0));
    /// ```
    pub fn cast<U: ScalarCast>(self) -> Vector<U, N>
    where
        T: ScalarCast,
    {
        self.map(U::from_scalar)
    }

    /// Converts every element to the promoted floating-point type [`Number::Real`].
    pub fn promote(self) -> Vector<T::Real, N>
    where
        T: Number,
    {
        self.map(T::promote)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Multiplies each element with a scalar of any kind.
    ///
    /// `factor` is converted to `T` *before* multiplying, so scaling an integer vector by `2.9`
    /// scales it by `2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(vec2(1, 2).mul_scalar(2.9f32), vec2(2, 4));
    /// assert_eq!(vec2(1.0, 2.0).mul_scalar(3i8), vec2(3.0, 6.0));
    /// ```
    pub fn mul_scalar<S: ScalarCast>(self, factor: S) -> Self
    where
        T: Number,
    {
        self * T::from_scalar(factor)
    }

    /// Divides each element by a scalar of any kind.
    ///
    /// `divisor` is converted to `T` before dividing. For integral vectors this is an integer
    /// division; use [`Vector::normalize`] or [`Vector::promote`] to get a floating result.
    pub fn div_scalar<S: ScalarCast>(self, divisor: S) -> Self
    where
        T: ScalarCast + Div<Output = T>,
    {
        self / T::from_scalar(divisor)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The result has the vector's own scalar type and is exact for integral vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared magnitude of this vector, `self.dot(self)`.
    pub fn magnitude_squared(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// Integral vectors are promoted: the result is an [`f32`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let len: f32 = vec2(3, 4).magnitude();
    /// assert_eq!(len, 5.0);
    ///
    /// let len: f64 = vec2(3.0f64, 4.0).magnitude();
    /// assert_eq!(len, 5.0);
    /// ```
    #[doc(alias = "length")]
    pub fn magnitude(&self) -> T::Real
    where
        T: Number,
    {
        self.magnitude_squared().promote().sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// Integral vectors are promoted to [`f32`] vectors. The zero vector has no direction; its
    /// normalization consists of NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// let z: Vec3f = vec3(0, 0, 4).normalize();
    /// assert_eq!(z, Vec3f::Z);
    /// ```
    pub fn normalize(self) -> Vector<T::Real, N>
    where
        T: Number,
    {
        let magnitude = self.magnitude();
        self.promote() / magnitude
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// This is `acos(dot / (|self| * |other|))`, with the cosine clamped to `[-1, 1]` so that
    /// rounding cannot push it out of the domain of `acos` for (anti)parallel vectors. Both vectors
    /// must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let angle: f32 = vec2(2, 0).angle_to(vec2(0, -3));
    /// assert!((angle - FRAC_PI_2).abs() < 1e-6);
    /// ```
    pub fn angle_to(self, other: Self) -> T::Real
    where
        T: Number,
    {
        // A single square root keeps the ratio exact for parallel vectors with integral lengths.
        let lengths = self.magnitude_squared().promote() * other.magnitude_squared().promote();
        let cos = self.dot(other).promote() / lengths.sqrt();

        let one = <T::Real as One>::ONE;
        let cos = if cos > one {
            one
        } else if cos < -one {
            -one
        } else {
            cos
        };
        cos.acos()
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, z].into()
    }

    /// Computes the determinant of the 2x2 matrix with columns `self` and `other`.
    ///
    /// This is the *perpendicular dot product* `x1 * y2 - y1 * x2`. It is zero exactly when the
    /// vectors are collinear, and positive when `other` lies counterclockwise of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(Vec2i::X.determinant(Vec2i::Y), 1);
    /// assert_eq!(Vec2i::Y.determinant(Vec2i::X), -1);
    /// assert_eq!(vec2(2, 4).determinant(vec2(-1, -2)), 0);
    /// ```
    #[doc(alias = "perp_dot")]
    pub fn determinant(self, other: Self) -> T
    where
        T: Number,
    {
        let [x1, y1] = self.into_array();
        let [x2, y2] = other.into_array();
        x1 * y2 - y1 * x2
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, w].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
    /// assert_eq!(Vec3i::Y.cross(Vec3i::X), -Vec3i::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the determinant of the 3x3 matrix with columns `self`, `b` and `c`.
    ///
    /// This is the scalar triple product `self · (b × c)`, expanded along the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::*;
    /// assert_eq!(Vec3i::X.determinant(Vec3i::Y, Vec3i::Z), 1);
    /// assert_eq!(vec3(1, 2, 3).determinant(vec3(2, 4, 6), vec3(0, 1, 0)), 0);
    /// ```
    #[doc(alias = "triple_product")]
    pub fn determinant(self, b: Self, c: Self) -> T
    where
        T: Number,
    {
        let [ax, ay, az] = self.into_array();
        let [bx, by, bz] = b.into_array();
        let [cx, cy, cz] = c.into_array();

        ax * (by * cz - cy * bz) - bx * (ay * cz - cy * az) + cx * (ay * bz - by * az)
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }

    /// Computes the determinant of the 4x4 matrix with columns `self`, `b`, `c` and `d`.
    ///
    /// See [`Mat4::determinant`] for the expansion used.
    pub fn determinant(self, b: Self, c: Self, d: Self) -> T
    where
        T: Number,
    {
        Mat4::from_columns([self, b, c, d]).determinant()
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Vec3i::default(), vec3(0, 0, 0));
        assert_eq!(Vec4f::ZERO, [0.0; 4]);
        assert_eq!(Vec2d::splat(1.5), vec2(1.5, 1.5));
        assert_eq!(Vec4i::from_fn(|i| i as i32 * 2), vec4(0, 2, 4, 6));
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }

    #[test]
    fn from_slice_pads_and_truncates() {
        assert_eq!(Vec4i::from_slice::<i32>(&[]), Vec4i::ZERO);
        assert_eq!(Vec4i::from_slice(&[7i64]), vec4(7, 0, 0, 0));
        assert_eq!(Vec3f::from_slice(&[1, 2, 3, 4, 5]), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vec2i::from_slice(&[-1.9f64, 2.9]), vec2(-1, 2));
    }

    #[test]
    fn cast() {
        assert_eq!(vec3(1.5f32, -2.5, 3.0).cast::<i32>(), vec3(1, -2, 3));
        assert_eq!(vec2(300i32, 1).cast::<i8>(), vec2(44, 1));
        let wide: Vec2d = vec2(1i16, -2).cast();
        assert_eq!(wide, vec2(1.0, -2.0));
    }

    #[test]
    fn foreign_scalars() {
        assert_eq!(vec2(1, 2).mul_scalar(2.9f32), vec2(2, 4));
        assert_eq!(vec2(4.0f32, 8.0).div_scalar(2i32), vec2(2.0, 4.0));
        assert_eq!(vec3(7, 8, 9).div_scalar(2.0f64), vec3(3, 4, 4));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec2(1.5, 2.0).dot(vec2(2.0, 0.25)), 3.5);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn dot4_uses_every_component() {
        assert_eq!(Vec4i::X.dot(Vec4i::X), 1);
        assert_eq!(Vec4i::Y.dot(Vec4i::Y), 1);
        assert_eq!(Vec4i::Z.dot(Vec4i::Z), 1);
        assert_eq!(Vec4i::W.dot(Vec4i::W), 1);
        assert_eq!(Vec4i::Z.dot(Vec4i::W), 0);
        assert_eq!(vec4(1, 2, 3, 4).dot(vec4(5, 6, 7, 8)), 70);
    }

    #[test]
    fn integral_magnitude_promotes() {
        let v = vec2(1, 2);
        let magnitude: f32 = v.magnitude();
        assert_eq!(magnitude, 5.0f32.sqrt());

        let unit: Vec2f = v.normalize();
        assert_relative_eq!(unit, vec2(1.0 / 5.0f32.sqrt(), 2.0 / 5.0f32.sqrt()));
        assert_relative_eq!(unit.magnitude(), 1.0);

        // Callers wanting another precision cast first.
        let precise: f64 = v.cast::<f64>().magnitude();
        assert_eq!(precise, 5.0f64.sqrt());
    }

    #[test]
    fn floating_magnitude_keeps_type() {
        let v = vec3(2.0f64, -3.0, 6.0);
        let magnitude: f64 = v.magnitude();
        assert_eq!(magnitude, 7.0);
        let unit: Vec3d = v.normalize();
        assert_relative_eq!(unit, vec3(2.0 / 7.0, -3.0 / 7.0, 6.0 / 7.0));
        assert_eq!(Vec4f::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn normalized_magnitude_is_one() {
        for v in [vec3(1i32, 1, 1), vec3(-4, 0, 3), vec3(100, -250, 7)] {
            assert_relative_eq!(v.normalize().magnitude(), 1.0, max_relative = 1e-6);
        }
        for v in [vec4(0.5f64, -0.25, 8.0, 1e-3), vec4(-3.0, 2.0, 1.0, 0.0)] {
            assert_relative_eq!(v.normalize().magnitude(), 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn zero_vector_normalizes_to_nan() {
        let unit = Vec3f::ZERO.normalize();
        assert!(unit.as_slice().iter().all(|e| e.is_nan()));
    }

    #[test]
    fn angle() {
        assert_relative_eq!(Vec3f::Y.angle_to(Vec3f::X), FRAC_PI_2);
        assert_relative_eq!(Vec3f::Y.angle_to(-Vec3f::Y), PI);
        assert_abs_diff_eq!(Vec3f::Y.angle_to(Vec3f::Y), 0.0);
        assert_relative_eq!(vec2(1.0f32, 1.0).angle_to(vec2(1.0, -1.0)), FRAC_PI_2);

        let angle: f32 = vec2(1, 0).angle_to(vec2(0, 3));
        assert_relative_eq!(angle, FRAC_PI_2);
        let angle: f32 = vec4(1, 0, 0, 0).angle_to(vec4(1, 1, 0, 0));
        assert_relative_eq!(angle, PI / 4.0, max_relative = 1e-6);
    }

    #[test]
    fn angle_between_parallel_vectors() {
        for a in [vec3(1i32, 1, 1), vec3(1, 1, 0), vec3(1, 2, 3), vec3(2, -1, 5)] {
            for k in 1..50i32 {
                let same: f32 = a.angle_to(a * k);
                assert_eq!(same, 0.0, "{a:?} * {k}");
                let opposite: f32 = a.angle_to(a * -k);
                assert_relative_eq!(opposite, PI);
            }
        }

        let a = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(a.angle_to(a), 0.0);
        assert_relative_eq!(a.angle_to(-a), PI);

        // Lengths that are not exactly representable still stay within the domain of `acos`.
        let a = vec3(0.1f32, -0.7, 0.3);
        for k in [0.3f32, 1.0, 2.5, 7.1] {
            let same = a.angle_to(a * k);
            assert!(!same.is_nan());
            assert_abs_diff_eq!(same, 0.0, epsilon = 2e-3);
            let opposite = a.angle_to(a * -k);
            assert!(!opposite.is_nan());
            assert_abs_diff_eq!(opposite, PI, epsilon = 2e-3);
        }
        let a = vec4(0.1f64, 0.2, -0.3, 0.4);
        assert!(!a.angle_to(a * 3.0).is_nan());
        assert!(!a.angle_to(-a).is_nan());
    }

    #[test]
    fn determinant2() {
        assert_eq!(Vec2i::X.determinant(Vec2i::Y), 1);
        assert_eq!(Vec2i::Y.determinant(Vec2i::X), -1);
        assert_eq!(vec2(2, 4).determinant(vec2(1, 2)), 0);
        assert_eq!(vec2(3, 1).determinant(vec2(2, 5)), 13);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::Y.cross(Vec3i::Z), Vec3i::X);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);
        assert_eq!(Vec3i::Y.cross(Vec3i::X), -Vec3i::Z);

        let a = vec3(3, -1, 7);
        let b = vec3(-2, 5, 4);
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
        assert_eq!(a.cross(a), Vec3i::ZERO);
    }

    #[test]
    fn determinant3() {
        assert_eq!(Vec3i::X.determinant(Vec3i::Y, Vec3i::Z), 1);
        assert_eq!(Vec3i::Y.determinant(Vec3i::X, Vec3i::Z), -1);

        let a = vec3(-2, 2, -3);
        let b = vec3(-1, 1, 3);
        let c = vec3(2, 4, -1);
        assert_eq!(a.determinant(b, c), 54);
        assert_eq!(a.determinant(b, c), a.dot(b.cross(c)));
        assert_eq!(a.determinant(a, c), 0);
    }

    #[test]
    fn determinant4() {
        assert_eq!(Vec4i::X.determinant(Vec4i::Y, Vec4i::Z, Vec4i::W), 1);
        assert_eq!(Vec4i::Y.determinant(Vec4i::X, Vec4i::Z, Vec4i::W), -1);
        assert_eq!(
            vec4(2, 0, 0, 0).determinant(vec4(0, 3, 0, 0), vec4(0, 0, 4, 0), vec4(1, 1, 1, 5)),
            120
        );
        assert_eq!(
            vec4(1, 2, 3, 4).determinant(vec4(2, 4, 6, 8), Vec4i::Z, Vec4i::W),
            0
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(1, -2)), "(1, -2)");
    }
}
