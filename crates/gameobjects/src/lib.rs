//! # gameobjects
//!
//! Small value types for real-time games and simulations.
//!
//! This crate provides:
//!
//! - [`matrix44`]: a row-major 4×4 transform using the row-vector
//!   convention (`v' = v · M`, `A * B` applies `A` then `B`).
//! - [`vector3`] and [`vector2`]: 3D and 2D vectors.
//! - [`color`]: RGBA colors, with named colors in [`palette`].
//! - [`numeric`]: the [`FixedArityNumeric`] trait that lets arrays and
//!   tuples stand in for vectors.
//! - [`interop`]: conversions to and from [`glam`]'s `f64` types.
//! - [`util`]: number formatting and small numeric helpers.
//! - [`error`]: the crate's error type.
//!
//! ## Usage
//!
//! ```rust
//! use gameobjects::{Matrix44, Vector3};
//!
//! let m = Matrix44::scale(2.0) * Matrix44::translation(1.0, 0.0, 0.0);
//! let p = m.transform_vec3(Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vector3::new(3.0, 2.0, 2.0));
//!
//! let back = m.inverse_transform(p).unwrap();
//! assert!((back - Vector3::new(1.0, 1.0, 1.0)).length() < 1e-12);
//! ```
//!
//! The library emits [`tracing`] events (rejected inputs at `debug`,
//! recoverable oddities at `trace`) but never installs a subscriber.

pub mod color;
pub mod error;
pub mod interop;
pub mod matrix44;
pub mod numeric;
pub mod palette;
pub mod util;
pub mod vector2;
pub mod vector3;

pub use color::Color;
pub use error::{ArgumentKind, ErrorKind, IndexKind, MathError, MathKind, Result};
pub use matrix44::Matrix44;
pub use numeric::FixedArityNumeric;
pub use vector2::Vector2;
pub use vector3::Vector3;

// Re-export glam so callers can name the interop types without a direct
// dependency.
pub use glam;
