//! Three component vector.
//!
//! [`Vector3`] is the point and direction type consumed and produced by
//! [`Matrix44`](crate::Matrix44).

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MathError, Result};
use crate::numeric::{FixedArityNumeric, impl_vector_ops};
use crate::util::{DEFAULT_PRECISION, format_number};

/// A 3D vector or point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit x axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the vector that goes from `p1` to `p2`.
    #[must_use]
    pub fn from_points(p1: impl FixedArityNumeric<3>, p2: impl FixedArityNumeric<3>) -> Self {
        Self::from_array(p2.to_array()) - p1
    }

    /// Creates a vector from the first three values of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arity`] if fewer than three values are given.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(MathError::Arity {
                expected: 3,
                got: values.len(),
            }),
        }
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterates the components in order.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.as_array().into_iter()
    }

    /// Applies `f` to each component.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Returns component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `index` is 0, 1 or 2.
    pub fn get(&self, index: usize) -> Result<f64> {
        MathError::check_index(index, 3)?;
        Ok(self[index])
    }

    /// Sets component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `index` is 0, 1 or 2.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        MathError::check_index(index, 3)?;
        self[index] = value;
        Ok(())
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Scales the vector to `length`. A zero vector stays zero.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if current == 0.0 {
            *self = Self::ZERO;
            return;
        }
        *self *= length / current;
    }

    /// Normalises in place. A zero vector stays zero.
    pub fn normalise(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0.0 {
            trace!("normalising a zero length vector");
            *self = Self::ZERO;
        } else {
            *self /= length;
        }
        self
    }

    /// Returns a normalised copy. A zero vector stays zero.
    #[must_use]
    pub fn get_normalised(&self) -> Self {
        let mut v = *self;
        v.normalise();
        v
    }

    /// Distance to the point `p`.
    #[must_use]
    pub fn distance_to(&self, p: impl FixedArityNumeric<3>) -> f64 {
        Self::from_points(*self, p).length()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: impl FixedArityNumeric<3>) -> f64 {
        let [x, y, z] = other.to_array();
        self.x * x + self.y * y + self.z * z
    }

    /// Cross product, `self × other`.
    #[must_use]
    pub fn cross(&self, other: impl FixedArityNumeric<3>) -> Self {
        let [x, y, z] = other.to_array();
        Self::new(
            self.y * z - self.z * y,
            self.z * x - self.x * z,
            self.x * y - self.y * x,
        )
    }

    /// Picks components by name, e.g. `"zyx"` or `"xxy"`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] for a letter other than x, y or z.
    pub fn swizzle(&self, keys: &str) -> Result<Vec<f64>> {
        keys.chars()
            .map(|c| self.get((c as usize).wrapping_sub('x' as usize)))
            .collect()
    }
}

impl FixedArityNumeric<3> for Vector3 {
    fn to_array(self) -> [f64; 3] {
        self.as_array()
    }

    fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(values: [f64; 3]) -> Self {
        Self::from_array(values)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.as_array()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 has 3 values, index should be 0, 1 or 2 (got {index})"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 has 3 values, index should be 0, 1 or 2 (got {index})"),
        }
    }
}

impl_vector_ops!(Vector3, 3);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "({}, {}, {})",
            format_number(self.x, precision),
            format_number(self.y, precision),
            format_number(self.z, precision)
        )
    }
}
