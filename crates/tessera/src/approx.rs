//! Approximate equality via the [`approx`] crate.
//!
//! Vectors, matrices, complex numbers and quaternions implement [`AbsDiffEq`], [`RelativeEq`] and
//! [`UlpsEq`] whenever their scalar does. Compound values are approximately equal if all of their
//! elements are, using the same tolerance for every element.
//!
//! ```
//! # use tessera::*;
//! use approx::assert_relative_eq;
//!
//! let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
//! assert_relative_eq!(m.invert()? * m, Mat2::IDENTITY, epsilon = 1e-12);
//! # Ok::<_, Error>(())
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Complex, Mat2, Mat3, Mat4, Quaternion, Vector};

fn slice_abs_diff_eq<T>(a: &[T], b: &[T], epsilon: T::Epsilon) -> bool
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    a.iter().zip(b).all(|(a, b)| a.abs_diff_eq(b, epsilon))
}

fn slice_relative_eq<T>(a: &[T], b: &[T], epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    a.iter()
        .zip(b)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
}

fn slice_ulps_eq<T>(a: &[T], b: &[T], epsilon: T::Epsilon, max_ulps: u32) -> bool
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    a.iter().zip(b).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
}

/// Implements the approx traits for a type with an `as_slice` view of its elements.
macro_rules! approx_via_slice {
    ($([$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<T, $($generics)*> AbsDiffEq for $ty
            where
                T: AbsDiffEq,
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> T::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                    slice_abs_diff_eq(self.as_slice(), other.as_slice(), epsilon)
                }
            }

            impl<T, $($generics)*> RelativeEq for $ty
            where
                T: RelativeEq,
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> T::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: T::Epsilon,
                    max_relative: T::Epsilon,
                ) -> bool {
                    slice_relative_eq(self.as_slice(), other.as_slice(), epsilon, max_relative)
                }
            }

            impl<T, $($generics)*> UlpsEq for $ty
            where
                T: UlpsEq,
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
                    slice_ulps_eq(self.as_slice(), other.as_slice(), epsilon, max_ulps)
                }
            }
        )+
    };
}

approx_via_slice! {
    [const N: usize] Vector<T, N>;
    [] Mat2<T>;
    [] Mat3<T>;
    [] Mat4<T>;
}

impl<T> AbsDiffEq for Complex<T>
where
    T: AbsDiffEq + Copy,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.into_vec().abs_diff_eq(&other.into_vec(), epsilon)
    }
}

impl<T> RelativeEq for Complex<T>
where
    T: RelativeEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.into_vec()
            .relative_eq(&other.into_vec(), epsilon, max_relative)
    }
}

impl<T> UlpsEq for Complex<T>
where
    T: UlpsEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.into_vec().ulps_eq(&other.into_vec(), epsilon, max_ulps)
    }
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: AbsDiffEq + Copy,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        slice_abs_diff_eq(&self.into_array(), &other.into_array(), epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: RelativeEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        slice_relative_eq(
            &self.into_array(),
            &other.into_array(),
            epsilon,
            max_relative,
        )
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: UlpsEq + Copy,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        slice_ulps_eq(&self.into_array(), &other.into_array(), epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::{
        abs_diff_eq, assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        relative_eq,
    };

    use crate::{vec3, Complexf, Mat3f, Quaterniond, Vec3f};

    #[test]
    fn vectors() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = a + Vec3f::splat(1e-7);
        assert_ne!(a, b);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert_relative_ne!(a, vec3(1.0, 2.0, 3.01));
        assert!(abs_diff_eq!(a, vec3(1.05, 2.0, 3.0), epsilon = 0.1));
        assert!(!abs_diff_eq!(a, vec3(1.5, 2.0, 3.0), epsilon = 0.1));
    }

    #[test]
    fn matrices() {
        let m = Mat3f::diagonal(2.0);
        assert_abs_diff_eq!(m, Mat3f::diagonal(2.0 + 1e-6), epsilon = 1e-5);
        assert!(!relative_eq!(m, Mat3f::IDENTITY));
    }

    #[test]
    fn complex_and_quaternion() {
        assert_relative_eq!(Complexf::new(0.1 + 0.2, 1.0), Complexf::new(0.3, 1.0));
        let q = Quaterniond::from_components(0.1 + 0.2, 0.0, -1.0, 2.0);
        assert_relative_eq!(q, Quaterniond::from_components(0.3, 0.0, -1.0, 2.0));
        assert!(!relative_eq!(q, Quaterniond::IDENTITY));
    }
}
