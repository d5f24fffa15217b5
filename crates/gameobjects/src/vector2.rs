//! Two component vector.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MathError, Result};
use crate::numeric::{FixedArityNumeric, impl_vector_ops};
use crate::util::{DEFAULT_PRECISION, format_number};

/// A 2D vector or point. Also used for texture coordinates (see [`Vector2::u`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the vector that goes from `p1` to `p2`.
    #[must_use]
    pub fn from_points(p1: impl FixedArityNumeric<2>, p2: impl FixedArityNumeric<2>) -> Self {
        Self::from_array(p2.to_array()) - p1
    }

    /// Creates a vector from the first two values of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arity`] if fewer than two values are given.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(MathError::Arity {
                expected: 2,
                got: values.len(),
            }),
        }
    }

    /// The `u` texture coordinate, an alias for `x`.
    #[must_use]
    pub const fn u(&self) -> f64 {
        self.x
    }

    /// The `v` texture coordinate, an alias for `y`.
    #[must_use]
    pub const fn v(&self) -> f64 {
        self.y
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Iterates the components in order.
    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        self.as_array().into_iter()
    }

    /// Applies `f` to each component.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Returns component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `index` is 0 or 1.
    pub fn get(&self, index: usize) -> Result<f64> {
        MathError::check_index(index, 2)?;
        Ok(self[index])
    }

    /// Sets component `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `index` is 0 or 1.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        MathError::check_index(index, 2)?;
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
    pub fn distance_to(&self, p: impl FixedArityNumeric<2>) -> f64 {
        Self::from_points(*self, p).length()
    }

    #[must_use]
    pub fn dot(&self, other: impl FixedArityNumeric<2>) -> f64 {
        let [x, y] = other.to_array();
        self.x * x + self.y * y
    }

    /// Picks components by name, e.g. `"yx"`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] for a letter other than x or y.
    pub fn swizzle(&self, keys: &str) -> Result<Vec<f64>> {
        keys.chars()
            .map(|c| self.get((c as usize).wrapping_sub('x' as usize)))
            .collect()
    }
}

impl FixedArityNumeric<2> for Vector2 {
    fn to_array(self) -> [f64; 2] {
        self.as_array()
    }

    fn from_array([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(values: [f64; 2]) -> Self {
        Self::from_array(values)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 has 2 values, index should be 0 or 1 (got {index})"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 has 2 values, index should be 0 or 1 (got {index})"),
        }
    }
}

impl_vector_ops!(Vector2, 2);

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "({}, {})",
            format_number(self.x, precision),
            format_number(self.y, precision)
        )
    }
}
