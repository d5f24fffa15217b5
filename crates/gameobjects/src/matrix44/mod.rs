//! 4×4 homogeneous transform.
//!
//! [`Matrix44`] stores 16 values in row-major order and follows the
//! **row-vector convention**: a point is a 1×4 row and is transformed as
//! `v' = v · M`. Consequently:
//!
//! - rows 0, 1 and 2 are the transformed x, y and z axes
//!   ([`right`](Matrix44::right), [`up`](Matrix44::up),
//!   [`heading`](Matrix44::heading)),
//! - row 3 holds the translation ([`translate`](Matrix44::translate)),
//! - column 3 holds projective coefficients, `(0, 0, 0, 1)` for any affine
//!   transform,
//! - `A * B` applies `A` first, then `B`.
//!
//! The operations are spread over submodules: [`compose`] (products),
//! [`inverse`], [`rotation`] and [`projection`] builders, and [`apply`]
//! (transforming vectors).

pub mod apply;
pub mod compose;
pub mod inverse;
pub mod projection;
pub mod rotation;

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::numeric::FixedArityNumeric;
use crate::util::{DEFAULT_PRECISION, format_number};
use crate::vector3::Vector3;

const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// A 4×4 transform matrix, row-major, row-vector convention.
///
/// Always holds exactly 16 values. Fallible setters validate before
/// writing, so a rejected call leaves the matrix untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix44 {
    m: [f64; 16],
}

impl Matrix44 {
    /// The multiplicative identity.
    pub const IDENTITY: Self = Self::from_array(IDENTITY);

    /// Creates an identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix with every value zero.
    ///
    /// This is not a usable transform; it is a starting point for filling in
    /// values by hand.
    #[must_use]
    pub const fn blank() -> Self {
        Self::from_array([0.0; 16])
    }

    /// Wraps 16 row-major values as they are, without checking that they
    /// are finite.
    #[must_use]
    pub const fn from_array(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Creates a matrix from exactly 16 row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arity`] if `values` does not hold 16 values, and
    /// [`MathError::Domain`] if any of them is NaN or infinite.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let m: [f64; 16] = values.try_into().map_err(|_| MathError::Arity {
            expected: 16,
            got: values.len(),
        })?;
        check_finite(&m)?;
        Ok(Self::from_array(m))
    }

    /// Creates a matrix from four rows of up to four values each.
    ///
    /// Missing trailing values are taken from the identity matrix, so
    /// three-component axis vectors can be passed directly.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arity`] if any row holds more than four values,
    /// and [`MathError::Domain`] for a NaN or infinite value.
    pub fn from_rows(rows: [&[f64]; 4]) -> Result<Self> {
        let mut ret = Self::identity();
        for (i, row) in rows.into_iter().enumerate() {
            ret.m[i * 4..i * 4 + 4].copy_from_slice(&Self::pad_from_identity(i, row)?);
        }
        Ok(ret)
    }

    /// Creates a scale matrix, uniform on every axis.
    #[must_use]
    pub fn scale(factor: f64) -> Self {
        Self::scale_xyz(factor, factor, factor)
    }

    /// Creates a scale matrix with a separate factor per axis.
    #[must_use]
    pub fn scale_xyz(x: f64, y: f64, z: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_scale(x, y, z);
        ret
    }

    /// Creates a translation to `(x, y, z)`.
    #[must_use]
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_translation(x, y, z);
        ret
    }

    /// Resets to the identity.
    pub fn make_identity(&mut self) -> &mut Self {
        self.m = IDENTITY;
        self
    }

    /// Copies every value from `other`.
    pub fn make_copy(&mut self, other: &Matrix44) -> &mut Self {
        self.m = other.m;
        self
    }

    /// Makes a scale matrix.
    pub fn make_scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.m = [
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Makes a translation matrix.
    pub fn make_translation(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.m = [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0,
        ];
        self
    }

    /// The 16 values, row-major.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 16] {
        self.m
    }

    /// The 16 values, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.m
    }

    /// Returns row `row`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `row` is 0 to 3.
    pub fn get_row(&self, row: usize) -> Result<[f64; 4]> {
        MathError::check_index(row, 4)?;
        Ok(self.row(row))
    }

    /// Returns the first three values of row `row` as a vector.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `row` is 0 to 3.
    pub fn get_row_vec3(&self, row: usize) -> Result<Vector3> {
        MathError::check_index(row, 4)?;
        Ok(self.row_vec3(row))
    }

    /// Replaces row `row` with up to four values.
    ///
    /// Trailing values that are not supplied are taken from the same row of
    /// the identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `row` is 0 to 3, and
    /// [`MathError::Arity`] if more than four values are given, and
    /// [`MathError::Domain`] for a NaN or infinite value. The matrix is
    /// unchanged on error.
    pub fn set_row(&mut self, row: usize, values: &[f64]) -> Result<()> {
        MathError::check_index(row, 4)?;
        let padded = Self::pad_from_identity(row, values)?;
        self.m[row * 4..row * 4 + 4].copy_from_slice(&padded);
        Ok(())
    }

    /// Returns column `col`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `col` is 0 to 3.
    pub fn get_column(&self, col: usize) -> Result<[f64; 4]> {
        MathError::check_index(col, 4)?;
        Ok(self.column(col))
    }

    /// Replaces column `col` with up to four values, padding from the
    /// identity like [`set_row`](Self::set_row).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless `col` is 0 to 3, and
    /// [`MathError::Arity`] if more than four values are given, and
    /// [`MathError::Domain`] for a NaN or infinite value. The matrix is
    /// unchanged on error.
    pub fn set_column(&mut self, col: usize, values: &[f64]) -> Result<()> {
        MathError::check_index(col, 4)?;
        let padded = Self::pad_from_identity(col, values)?;
        for (row, value) in padded.into_iter().enumerate() {
            self.m[row * 4 + col] = value;
        }
        Ok(())
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless both indices are 0 to 3.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        MathError::check_index(row, 4)?;
        MathError::check_index(col, 4)?;
        Ok(self.m[row * 4 + col])
    }

    /// Sets the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] unless both indices are 0 to 3, and
    /// [`MathError::Domain`] if `value` is NaN or infinite.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        MathError::check_index(row, 4)?;
        MathError::check_index(col, 4)?;
        check_finite(&[value])?;
        self.m[row * 4 + col] = value;
        Ok(())
    }

    /// Replaces all four rows at once.
    pub fn set_rows(&mut self, rows: [[f64; 4]; 4]) {
        self.m = std::array::from_fn(|i| rows[i / 4][i % 4]);
    }

    /// Row 0, the transformed x axis.
    #[must_use]
    pub fn right(&self) -> Vector3 {
        self.row_vec3(0)
    }

    /// Alias for [`right`](Self::right).
    #[must_use]
    pub fn x_axis(&self) -> Vector3 {
        self.right()
    }

    /// Row 1, the transformed y axis.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.row_vec3(1)
    }

    /// Alias for [`up`](Self::up).
    #[must_use]
    pub fn y_axis(&self) -> Vector3 {
        self.up()
    }

    /// Row 2, the transformed z axis.
    #[must_use]
    pub fn heading(&self) -> Vector3 {
        self.row_vec3(2)
    }

    /// Alias for [`heading`](Self::heading).
    #[must_use]
    pub fn z_axis(&self) -> Vector3 {
        self.heading()
    }

    /// Row 3, the translation.
    #[must_use]
    pub fn translate(&self) -> Vector3 {
        self.row_vec3(3)
    }

    /// Sets row 0 to `(x, y, z, 0)`.
    pub fn set_right(&mut self, axis: impl FixedArityNumeric<3>) {
        self.write_row_vec3(0, axis);
    }

    /// Sets row 1 to `(x, y, z, 0)`.
    pub fn set_up(&mut self, axis: impl FixedArityNumeric<3>) {
        self.write_row_vec3(1, axis);
    }

    /// Sets row 2 to `(x, y, z, 0)`.
    pub fn set_heading(&mut self, axis: impl FixedArityNumeric<3>) {
        self.write_row_vec3(2, axis);
    }

    /// Sets row 3 to `(x, y, z, 1)`.
    pub fn set_translate(&mut self, position: impl FixedArityNumeric<3>) {
        self.write_row_vec3(3, position);
    }

    /// Moves the matrix along direction vectors.
    ///
    /// `forward` is added to the translation row, `right` to the right row
    /// and `up` to the up row. `None` leaves that row alone. To move back,
    /// left or down, negate the vector first.
    ///
    /// Only the first three values of each row change; column 3 is kept.
    pub fn move_by(
        &mut self,
        forward: Option<Vector3>,
        right: Option<Vector3>,
        up: Option<Vector3>,
    ) {
        if let Some(forward) = forward {
            self.add_row_vec3(3, forward);
        }
        if let Some(right) = right {
            self.add_row_vec3(0, right);
        }
        if let Some(up) = up {
            self.add_row_vec3(1, up);
        }
    }

    /// Swaps rows and columns in place.
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.get_transpose();
        self
    }

    /// Returns a transposed copy, leaving `self` unchanged.
    #[must_use]
    pub fn get_transpose(&self) -> Self {
        let [c0, c1, c2, c3] = [0, 1, 2, 3].map(|col| self.column(col));
        Self::from_array([
            c0[0], c0[1], c0[2], c0[3], //
            c1[0], c1[1], c1[2], c1[3], //
            c2[0], c2[1], c2[2], c2[3], //
            c3[0], c3[1], c3[2], c3[3],
        ])
    }

    /// Iterates the four rows.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        (0..4).map(|row| self.row(row))
    }

    /// Iterates the four columns.
    pub fn columns(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        (0..4).map(|col| self.column(col))
    }

    /// Iterates all 16 values, row-major.
    pub fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.m.iter().copied()
    }

    /// Iterates all 16 values in transposed (column-major) order.
    pub fn transposed_components(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns().flatten()
    }

    /// Returns `true` when every value is within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix44, epsilon: f64) -> bool {
        self.m.iter().zip(&other.m).all(|(a, b)| (a - b).abs() <= epsilon)
    }

    fn row(&self, row: usize) -> [f64; 4] {
        let r = row * 4;
        [self.m[r], self.m[r + 1], self.m[r + 2], self.m[r + 3]]
    }

    fn row_vec3(&self, row: usize) -> Vector3 {
        let r = row * 4;
        Vector3::new(self.m[r], self.m[r + 1], self.m[r + 2])
    }

    fn column(&self, col: usize) -> [f64; 4] {
        [self.m[col], self.m[col + 4], self.m[col + 8], self.m[col + 12]]
    }

    fn write_row_vec3(&mut self, row: usize, values: impl FixedArityNumeric<3>) {
        let [x, y, z] = values.to_array();
        let r = row * 4;
        self.m[r..r + 4].copy_from_slice(&[x, y, z, IDENTITY[r + 3]]);
    }

    fn add_row_vec3(&mut self, row: usize, offset: Vector3) {
        let r = row * 4;
        for (cell, delta) in self.m[r..r + 3].iter_mut().zip(offset.as_array()) {
            *cell += delta;
        }
    }

    /// Pads up to four values with the tail of identity row `index`.
    fn pad_from_identity(index: usize, values: &[f64]) -> Result<[f64; 4]> {
        if values.len() > 4 {
            return Err(MathError::Arity {
                expected: 4,
                got: values.len(),
            });
        }
        check_finite(values)?;
        let mut padded = [0.0; 4];
        padded.copy_from_slice(&IDENTITY[index * 4..index * 4 + 4]);
        padded[..values.len()].copy_from_slice(values);
        Ok(padded)
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(MathError::Domain(format!("matrix values should be finite, got {bad}"))),
        None => Ok(()),
    }
}

impl Default for Matrix44 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 16]> for Matrix44 {
    fn from(m: [f64; 16]) -> Self {
        Self::from_array(m)
    }
}

impl From<[[f64; 4]; 4]> for Matrix44 {
    fn from(rows: [[f64; 4]; 4]) -> Self {
        let mut ret = Self::blank();
        ret.set_rows(rows);
        ret
    }
}

/// Indexes by `(row, col)`. Panics if either index is past 3.
impl Index<(usize, usize)> for Matrix44 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < 4 && col < 4, "row and column should be 0, 1, 2 or 3");
        &self.m[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix44 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < 4 && col < 4, "row and column should be 0, 1, 2 or 3");
        &mut self.m[row * 4 + col]
    }
}

/// Pretty prints as an aligned grid, one `[ ... ]` line per row.
impl fmt::Display for Matrix44 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let cells = self.m.map(|v| format_number(v, precision));
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        let rows: Vec<String> = cells
            .chunks(4)
            .map(|row| {
                let padded: Vec<String> = row.iter().map(|c| format!("{c:<width$}")).collect();
                padded.join(" ").trim_end().to_string()
            })
            .collect();
        let row_width = rows.iter().map(String::len).max().unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[ {row:<row_width$} ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix44 {
        Matrix44::from_array(std::array::from_fn(|i| i as f64 + 1.0))
    }

    #[test]
    fn test_identity_and_blank() {
        assert_eq!(Matrix44::identity(), Matrix44::default());
        assert!(Matrix44::blank().components().all(|v| v == 0.0));
        assert_eq!(Matrix44::identity().get(3, 3), Ok(1.0));
    }

    #[test]
    fn test_from_values_arity() {
        let values: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let m = Matrix44::from_values(&values).unwrap();
        assert_eq!(m.get(1, 2), Ok(6.0));
        assert_eq!(
            Matrix44::from_values(&values[..15]),
            Err(MathError::Arity { expected: 16, got: 15 })
        );
        let mut long = values.clone();
        long.push(0.0);
        assert_eq!(
            Matrix44::from_values(&long).unwrap_err().kind(),
            crate::error::ErrorKind::Argument(crate::error::ArgumentKind::Arity)
        );
    }

    #[test]
    fn test_from_rows_pads_from_identity() {
        let m = Matrix44::from_rows([&[2.0, 0.0, 0.0], &[0.0, 3.0, 0.0], &[], &[5.0, 6.0, 7.0]])
            .unwrap();
        assert_eq!(m.get_row(0), Ok([2.0, 0.0, 0.0, 0.0]));
        assert_eq!(m.get_row(2), Ok([0.0, 0.0, 1.0, 0.0]));
        assert_eq!(m.get_row(3), Ok([5.0, 6.0, 7.0, 1.0]));
    }

    #[test]
    fn test_row_column_access() {
        let m = sample();
        assert_eq!(m.get_row(1), Ok([5.0, 6.0, 7.0, 8.0]));
        assert_eq!(m.get_column(1), Ok([2.0, 6.0, 10.0, 14.0]));
        assert_eq!(m.get_row_vec3(3), Ok(Vector3::new(13.0, 14.0, 15.0)));
        assert_eq!(m.get_row(4), Err(MathError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(m.get_column(7), Err(MathError::OutOfRange { index: 7, len: 4 }));
        assert_eq!(m[(2, 3)], 12.0);
    }

    #[test]
    fn test_failed_setters_leave_matrix_unchanged() {
        let mut m = sample();
        assert!(m.set_row(4, &[1.0, 2.0, 3.0, 4.0]).is_err());
        assert!(m.set_row(0, &[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
        assert!(m.set_column(9, &[1.0]).is_err());
        assert!(m.set_column(1, &[0.0; 5]).is_err());
        assert!(m.set(0, 4, 1.0).is_err());
        assert!(m.set(4, 0, 1.0).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_set_row_and_column() {
        let mut m = Matrix44::blank();
        m.set_row(3, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.get_row(3), Ok([1.0, 2.0, 3.0, 1.0]));
        m.set_column(0, &[9.0, 8.0]).unwrap();
        assert_eq!(m.get_column(0), Ok([9.0, 8.0, 0.0, 0.0]));
        m.set_column(2, &[4.0]).unwrap();
        assert_eq!(m.get_column(2), Ok([4.0, 0.0, 1.0, 0.0]));
        m.set(1, 1, -1.0).unwrap();
        assert_eq!(m[(1, 1)], -1.0);
    }

    #[test]
    fn test_axis_accessors() {
        let mut m = Matrix44::identity();
        m.set_right((0.0, 1.0, 0.0));
        m.set_up(Vector3::new(-1.0, 0.0, 0.0));
        m.set_translate([4.0, 5.0, 6.0]);
        assert_eq!(m.x_axis(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(m.y_axis(), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(m.z_axis(), Vector3::Z);
        assert_eq!(m.translate(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.get_row(3), Ok([4.0, 5.0, 6.0, 1.0]));
        assert_eq!(m.get_row(0), Ok([0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_move_by() {
        let mut m = Matrix44::translation(1.0, 2.0, 3.0);
        m.move_by(Some(Vector3::new(1.0, 1.0, 1.0)), None, None);
        assert_eq!(m.translate(), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.right(), Vector3::X);

        m.move_by(None, Some(Vector3::Y), Some(Vector3::X));
        assert_eq!(m.right(), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(m.up(), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(m.translate(), Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_move_by_keeps_column_3() {
        let projection = Matrix44::perspective_projection(-1.0, 1.0, 1.0, -1.0, 1.0, 3.0).unwrap();
        let mut m = projection;
        m.move_by(Some(Vector3::ZERO), Some(Vector3::ZERO), Some(Vector3::ZERO));
        assert_eq!(m, projection);

        let mut m = Matrix44::identity();
        m.set(0, 3, 0.5).unwrap();
        m.set(1, 3, 0.25).unwrap();
        m.set(3, 3, 2.0).unwrap();
        m.move_by(Some(Vector3::X), Some(Vector3::Y), Some(Vector3::Z));
        assert_eq!(m.get_row(0), Ok([1.0, 1.0, 0.0, 0.5]));
        assert_eq!(m.get_row(1), Ok([0.0, 1.0, 1.0, 0.25]));
        assert_eq!(m.get_row(3), Ok([1.0, 0.0, 0.0, 2.0]));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut values = [0.0; 16];
        values[5] = f64::NAN;
        let err = Matrix44::from_values(&values).unwrap_err();
        assert_eq!(
            err.kind(),
            crate::error::ErrorKind::Argument(crate::error::ArgumentKind::Domain)
        );
        assert!(Matrix44::from_rows([&[f64::INFINITY], &[], &[], &[]]).is_err());

        let mut m = sample();
        assert!(m.set(1, 1, f64::NAN).is_err());
        assert!(m.set_row(2, &[1.0, f64::NEG_INFINITY]).is_err());
        assert!(m.set_column(0, &[f64::NAN]).is_err());
        assert_eq!(m, sample());
    }

    #[test]
    fn test_transpose_involution() {
        let m = sample();
        let t = m.get_transpose();
        assert_eq!(m, sample());
        assert_eq!(t.get_row(0), m.get_column(0));
        assert_eq!(t.get_transpose(), m);

        let mut n = m;
        n.transpose().transpose();
        assert_eq!(n, m);
    }

    #[test]
    fn test_component_iterators() {
        let m = sample();
        assert_eq!(m.components().count(), 16);
        let transposed: Vec<f64> = m.transposed_components().collect();
        assert_eq!(transposed, m.get_transpose().components().collect::<Vec<_>>());
        assert_eq!(m.rows().nth(2), Some([9.0, 10.0, 11.0, 12.0]));
        assert_eq!(m.columns().last(), Some([4.0, 8.0, 12.0, 16.0]));
    }

    #[test]
    fn test_make_setters() {
        let mut m = sample();
        m.make_identity();
        assert_eq!(m, Matrix44::IDENTITY);
        m.make_scale(2.0, 3.0, 4.0);
        assert_eq!(m, Matrix44::scale_xyz(2.0, 3.0, 4.0));
        m.make_copy(&sample());
        assert_eq!(m, sample());
        assert_eq!(Matrix44::scale(2.0), Matrix44::scale_xyz(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_display_grid() {
        let m = Matrix44::translation(10.0, -2.5, 0.0);
        let expected = "[ 1    0    0    0 ]\n\
                        [ 0    1    0    0 ]\n\
                        [ 0    0    1    0 ]\n\
                        [ 10   -2.5 0    1 ]";
        assert_eq!(m.to_string(), expected);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = sample();
        let bytes = rmp_serde::to_vec(&m).unwrap();
        let restored: Matrix44 = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(m, restored);
    }
}
