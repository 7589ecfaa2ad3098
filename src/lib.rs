//! Quaternion algebra over `w + xi + yj + zk`, with conversions to and from
//! **3×3 rotation matrices** and **Euler angles**, and vector rotation by
//! conjugation.
//!
//! Quaternions here are plain four-component values. Nothing constrains them
//! to unit norm: the rotation conversions stay total over non-unit input and
//! yield a scaled linear map in that case. Callers that need rotation
//! semantics normalize first; [`Quaternion::is_unit`] is the advisory check.
//! The only failing operations are [`Quaternion::normalize`] and
//! [`Quaternion::inverse`] (and [`Quaternion::rotate_vector`] through it),
//! which reject the exactly-zero quaternion.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod euler;
pub mod float_types;
pub mod io;
pub mod quaternion;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use euler::EulerAngles;
pub use quaternion::Quaternion;
