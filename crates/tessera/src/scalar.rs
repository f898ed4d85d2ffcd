//! Scalar capability traits.
//!
//! Every algorithm in this crate is written against one of two capability sets:
//!
//! - [`Number`] ("basic arithmetic") is implemented by every supported scalar kind, integral or
//!   floating. It covers negation, addition, subtraction, multiplication, comparison and
//!   conversion to and from every other scalar kind.
//! - [`Real`] ("full arithmetic") additionally requires division, square roots and the
//!   trigonometric functions. Only [`f32`] and [`f64`] implement it.
//!
//! Operations that need full arithmetic (magnitudes, normalization, angles, inversion, complex
//! division) return [`Number::Real`]. For floating scalars that is the scalar type itself, for
//! integral scalars it is [`f32`]. Callers that want a different precision for integral data
//! convert explicitly first, for example with [`Vector::cast`][crate::Vector::cast].

use std::{f64::consts::PI, fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions and their inverses.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
}

/// Explicit conversion between the supported scalar kinds.
///
/// Conversions never fail. They follow the semantics of Rust's `as` casts, which makes them lossy
/// on purpose:
///
/// - narrowing an integer keeps the low bits (`300i32.to_i8() == 44`),
/// - converting a float to an integer truncates toward zero and saturates at the bounds of the
///   target type (`NaN` becomes 0),
/// - converting an integer to a float rounds to the nearest representable value.
///
/// # Examples
///
/// ```
/// # use tessera::*;
/// assert_eq!(300i32.to_i8(), 44);
/// assert_eq!((-2.75f32).to_i16(), -2);
/// assert_eq!(i32::from_scalar(1e20f64), i32::MAX);
/// assert_eq!(f64::from_scalar(3i8), 3.0);
/// ```
pub trait ScalarCast: Copy {
    fn to_i8(self) -> i8;
    fn to_i16(self) -> i16;
    fn to_i32(self) -> i32;
    fn to_i64(self) -> i64;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;

    /// Converts a value of any other scalar kind into `Self`.
    fn from_scalar<S: ScalarCast>(value: S) -> Self;
}

/// Scalars supporting *basic arithmetic*.
///
/// This is implemented for [`i8`], [`i16`], [`i32`], [`i64`], [`f32`] and [`f64`].
///
/// The `real_*` methods are the promoted versions of the full-arithmetic operations: they convert
/// `self` to [`Number::Real`] first, so `4i32.real_sqrt()` returns `2.0f32`.
pub trait Number:
    Zero
    + One
    + ScalarCast
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
{
    /// The floating-point type that results of full-arithmetic operations are promoted to.
    type Real: Real;

    /// Converts `self` to its promoted floating-point type.
    #[inline]
    fn promote(self) -> Self::Real {
        <Self::Real as ScalarCast>::from_scalar(self)
    }

    #[inline]
    fn real_sqrt(self) -> Self::Real {
        self.promote().sqrt()
    }

    #[inline]
    fn real_sin(self) -> Self::Real {
        self.promote().sin()
    }

    #[inline]
    fn real_cos(self) -> Self::Real {
        self.promote().cos()
    }

    #[inline]
    fn real_tan(self) -> Self::Real {
        self.promote().tan()
    }

    #[inline]
    fn real_asin(self) -> Self::Real {
        self.promote().asin()
    }

    #[inline]
    fn real_acos(self) -> Self::Real {
        self.promote().acos()
    }

    #[inline]
    fn real_atan(self) -> Self::Real {
        self.promote().atan()
    }
}

/// Scalars supporting *full arithmetic*: division, square roots and trigonometry.
///
/// A [`Real`] type is its own promotion target, so algorithms returning [`Number::Real`] keep the
/// scalar type unchanged for these types.
pub trait Real:
    Number<Real = Self> + ops::Div<Output = Self> + ops::DivAssign + Sqrt + Trig
{
}

macro_rules! scalar_cast {
    ($($types:ty => $to:ident),+ $(,)?) => {
        $(
            impl ScalarCast for $types {
                #[inline]
                fn to_i8(self) -> i8 {
                    self as i8
                }

                #[inline]
                fn to_i16(self) -> i16 {
                    self as i16
                }

                #[inline]
                fn to_i32(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_scalar<S: ScalarCast>(value: S) -> Self {
                    value.$to()
                }
            }
        )+
    };
}
scalar_cast!(
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    f32 => to_f32,
    f64 => to_f64,
);

macro_rules! integral {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl Number for $types {
                type Real = f32;
            }
        )+
    };
}
integral!(i8, i16, i32, i64);

macro_rules! floating {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }
            }

            impl Number for $types {
                type Real = Self;
            }

            impl Real for $types {}
        )+
    };
}
floating!(f32, f64);

/// Converts an angle in radians to degrees, keeping the scalar width.
///
/// # Examples
///
/// ```
/// # use tessera::*;
/// use std::f64::consts::PI;
///
/// assert!((degrees(PI) - 180.0).abs() < 1e-12);
/// assert!((degrees(std::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
/// ```
pub fn degrees<T: Real>(radians: T) -> T {
    radians * (T::from_scalar(180.0) / T::from_scalar(PI))
}

/// Converts an angle in degrees to radians, keeping the scalar width.
pub fn radians<T: Real>(degrees: T) -> T {
    degrees * (T::from_scalar(PI) / T::from_scalar(180.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn narrowing_casts() {
        assert_eq!(300i32.to_i8(), 44);
        assert_eq!((-129i16).to_i8(), 127);
        assert_eq!(i64::MAX.to_i32(), -1);
        assert_eq!(i8::from_scalar(256i64), 0);
    }

    #[test]
    fn float_to_int_casts() {
        assert_eq!(7.9f64.to_i32(), 7);
        assert_eq!((-7.9f32).to_i32(), -7);
        assert_eq!(f32::NAN.to_i16(), 0);
        assert_eq!(1e10f64.to_i32(), i32::MAX);
        assert_eq!(f32::NEG_INFINITY.to_i64(), i64::MIN);
    }

    #[test]
    fn widening_casts() {
        assert_eq!(f64::from_scalar(-3i8), -3.0);
        assert_eq!(f32::from_scalar(0.5f64), 0.5);
        assert_eq!(i64::from_scalar(i32::MIN), i64::from(i32::MIN));
    }

    #[test]
    fn integral_promotes_to_f32() {
        let root: f32 = 4i32.real_sqrt();
        assert_eq!(root, 2.0);
        let root: f32 = 2i64.real_sqrt();
        assert_relative_eq!(root, std::f32::consts::SQRT_2);
        let angle: f32 = 1i8.real_acos();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn floating_stays_floating() {
        let root: f64 = 2.0f64.real_sqrt();
        assert_eq!(root, std::f64::consts::SQRT_2);
        let promoted: f64 = 0.25f64.promote();
        assert_eq!(promoted, 0.25);
        let sine: f32 = 0.0f32.real_sin();
        assert_eq!(sine, 0.0);
    }

    #[test]
    fn angle_units() {
        assert_relative_eq!(degrees(std::f64::consts::PI), 180.0, max_relative = 1e-12);
        assert_relative_eq!(
            radians(90.0f64),
            std::f64::consts::FRAC_PI_2,
            max_relative = 1e-12
        );
        assert_relative_eq!(radians(degrees(1.25f32)), 1.25, max_relative = 1e-5);
    }
}
