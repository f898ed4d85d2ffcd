//! Small, generic linear algebra over integral and floating-point scalars.
//!
//! This crate provides 2-, 3- and 4-dimensional [vectors](Vector), square [matrices](Mat3),
//! [complex numbers](Complex), [quaternions](Quaternion) and coordinate [bases](Basis3). All of
//! them are generic over their scalar type, which may be any of [`i8`], [`i16`], [`i32`],
//! [`i64`], [`f32`] and [`f64`].
//!
//! # Exact and Promoted Results
//!
//! Algorithms that only need addition, subtraction and multiplication (dot and cross products,
//! determinants, matrix products) are exact for integral scalars and return the scalar type
//! itself. Algorithms that need division, square roots or trigonometry (magnitudes, normalization,
//! angles, matrix inversion) return the scalar's [`Number::Real`] type instead: [`f32`] for
//! integral scalars, the scalar itself for floating-point scalars.
//!
//! ```
//! # use tessera::*;
//! let v = vec2(1, 2);
//! assert_eq!(v.dot(v), 5);
//!
//! let len: f32 = v.magnitude();
//! assert_eq!(len, 5.0f32.sqrt());
//!
//! let unit: Vec2f = v.normalize();
//! # let _ = unit;
//! ```
//!
//! Conversions between scalar kinds are always explicit, see [`ScalarCast`] and the `cast` methods
//! of every value type.
//!
//! # Layout
//!
//! - Matrices are stored column-major, without padding.
//! - Vectors and matrices are laid out like arrays of their scalar type and implement
//!   [`bytemuck::Pod`] when the scalar does.
//!
//! # Errors
//!
//! Operations that can fail return [`Result`] with the crate's [`Error`] type: inverting a
//! singular matrix, accessing rows, columns or basis vectors out of bounds, and building a basis
//! from linearly dependent vectors.
//!
//! # Approximate Comparisons
//!
//! `==` compares exactly. For floating-point values, every type implements the traits of the
//! [`approx`](::approx) crate, see the `approx` module for details.

mod approx;
mod basis;
mod complex;
mod error;
mod matrix;
mod quaternion;
mod scalar;
mod vector;

pub use basis::*;
pub use complex::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use quaternion::*;
pub use scalar::*;
pub use vector::*;
