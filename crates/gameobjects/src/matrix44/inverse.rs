//! Matrix inversion.
//!
//! [`Matrix44::get_inverse`] handles any invertible affine transform;
//! [`Matrix44::get_inverse_rot_trans`] is a much cheaper path for rigid
//! transforms (rotation plus translation, no scale or shear).

use tracing::debug;

use super::Matrix44;
use crate::error::{MathError, Result};
use crate::numeric::FixedArityNumeric;
use crate::util::SINGULAR_EPSILON;

/// Determinant of the upper-left 3×3 block, split by sign.
///
/// The six triple products of the cofactor expansion are summed into a
/// positive and a negative accumulator. Comparing the final determinant to
/// the spread between the two exposes catastrophic cancellation that a
/// single running sum would hide.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SplitDeterminant {
    pos: f64,
    neg: f64,
}

impl SplitDeterminant {
    fn of(i: &[f64; 16]) -> Self {
        let terms = [
            i[0] * i[5] * i[10],
            i[1] * i[6] * i[8],
            i[2] * i[4] * i[9],
            -i[2] * i[5] * i[8],
            -i[1] * i[4] * i[10],
            -i[0] * i[6] * i[9],
        ];
        let mut split = Self { pos: 0.0, neg: 0.0 };
        for term in terms {
            if term > 0.0 {
                split.pos += term;
            } else {
                split.neg += term;
            }
        }
        split
    }

    fn value(&self) -> f64 {
        self.neg + self.pos
    }

    fn is_singular(&self) -> bool {
        let det = self.value();
        det == 0.0 || !det.is_finite() || (det / (self.pos - self.neg)).abs() < SINGULAR_EPSILON
    }
}

impl Matrix44 {
    /// Returns the inverse of an affine transform.
    ///
    /// The upper-left 3×3 block is inverted through its adjugate, the
    /// translation row is pushed through the inverted block, and the last
    /// column is forced back to `(0, 0, 0, 1)`. Any projective coefficients
    /// in the original are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Singular`] when the determinant is zero or is
    /// lost to cancellation (see [`SINGULAR_EPSILON`]).
    pub fn get_inverse(&self) -> Result<Matrix44> {
        let i = &self.m;
        let split = SplitDeterminant::of(i);
        if split.is_singular() {
            debug!(
                det = split.value(),
                pos = split.pos,
                neg = split.neg,
                "matrix inverse rejected as singular"
            );
            return Err(MathError::Singular);
        }
        let d = 1.0 / split.value();

        let mut m = [0.0; 16];
        m[0] = (i[5] * i[10] - i[6] * i[9]) * d;
        m[1] = -(i[1] * i[10] - i[2] * i[9]) * d;
        m[2] = (i[1] * i[6] - i[2] * i[5]) * d;

        m[4] = -(i[4] * i[10] - i[6] * i[8]) * d;
        m[5] = (i[0] * i[10] - i[2] * i[8]) * d;
        m[6] = -(i[0] * i[6] - i[2] * i[4]) * d;

        m[8] = (i[4] * i[9] - i[5] * i[8]) * d;
        m[9] = -(i[0] * i[9] - i[1] * i[8]) * d;
        m[10] = (i[0] * i[5] - i[1] * i[4]) * d;

        Self::fill_inverse_translation(&mut m, i);
        Ok(Matrix44::from_array(m))
    }

    /// Returns the inverse of a rigid transform.
    ///
    /// The rotation block is transposed rather than inverted, which is only
    /// correct when it is orthonormal. That precondition is not checked; for
    /// anything with scale or shear use [`get_inverse`](Self::get_inverse).
    #[must_use]
    pub fn get_inverse_rot_trans(&self) -> Matrix44 {
        let i = &self.m;
        let mut m = [0.0; 16];
        m[0] = i[0];
        m[1] = i[4];
        m[2] = i[8];

        m[4] = i[1];
        m[5] = i[5];
        m[6] = i[9];

        m[8] = i[2];
        m[9] = i[6];
        m[10] = i[10];

        Self::fill_inverse_translation(&mut m, i);
        Matrix44::from_array(m)
    }

    /// Applies the inverse transform to a point.
    ///
    /// This inverts the matrix on every call; keep an inverse around when
    /// transforming more than one point.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Singular`] if the matrix can not be inverted.
    pub fn inverse_transform<V: FixedArityNumeric<3>>(&self, v: V) -> Result<V> {
        Ok(self.get_inverse()?.transform(v))
    }

    /// Writes `-(t · R⁻¹)` into row 3 of `m` and clears column 3, given the
    /// inverted block `R⁻¹` already in `m` and the original translation `t`.
    fn fill_inverse_translation(m: &mut [f64; 16], original: &[f64; 16]) {
        let [tx, ty, tz] = [original[12], original[13], original[14]];
        m[12] = -(tx * m[0] + ty * m[4] + tz * m[8]);
        m[13] = -(tx * m[1] + ty * m[5] + tz * m[9]);
        m[14] = -(tx * m[2] + ty * m[6] + tz * m[10]);

        m[3] = 0.0;
        m[7] = 0.0;
        m[11] = 0.0;
        m[15] = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use super::*;
    use crate::error::{ErrorKind, MathKind};
    use crate::vector3::Vector3;

    const EPS: f64 = 1e-12;

    fn affine() -> Matrix44 {
        Matrix44::scale_xyz(2.0, 0.5, 3.0)
            * Matrix44::xyz_rotation(0.4, -1.2, 2.5)
            * Matrix44::translation(7.0, -3.0, 11.0)
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = affine();
        let inv = m.get_inverse().unwrap();
        assert!((m * inv).approx_eq(&Matrix44::IDENTITY, EPS));
        assert!((inv * m).approx_eq(&Matrix44::IDENTITY, EPS));
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let m = affine();
        let p = Vector3::new(1.0, 2.0, 3.0);
        let back = m.inverse_transform(m.transform(p)).unwrap();
        assert!((back - p).length() < 1e-10);
    }

    #[test]
    fn test_inverse_translation_uses_every_axis() {
        // Non-uniform scale makes a wrong column pick in the translation row
        // visible.
        let m = Matrix44::scale_xyz(2.0, 4.0, 8.0) * Matrix44::translation(1.0, 2.0, 3.0);
        let inv = m.get_inverse().unwrap();
        assert_eq!(inv.translate(), Vector3::new(-0.5, -0.5, -0.375));
    }

    #[test]
    fn test_inverse_matches_glam() {
        let m = affine();
        let ours = m.get_inverse().unwrap();
        let theirs = Matrix44::from(glam::DMat4::from(m).inverse());
        assert!(ours.approx_eq(&theirs, 1e-10));
    }

    #[test]
    fn test_singular_scale() {
        let err = Matrix44::scale(0.0).get_inverse().unwrap_err();
        assert_eq!(err, MathError::Singular);
        assert_eq!(err.kind(), ErrorKind::Math(MathKind::Singular));
    }

    #[test]
    fn test_singular_rank_deficient() {
        // Row 2 is the sum of rows 0 and 1.
        let m = Matrix44::from_rows([&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[5.0, 7.0, 9.0], &[]])
            .unwrap();
        assert_eq!(m.get_inverse(), Err(MathError::Singular));
    }

    #[test]
    fn test_singular_when_terms_round_to_zero() {
        // The exact determinant is 1e-9, but the large products round to the
        // same value and cancel to exactly zero.
        let big = 1.0e9;
        let m = Matrix44::from_rows([
            &[big, big + 1.0, 0.0],
            &[big - 1.0, big, 0.0],
            &[0.0, 0.0, 1.0e-9],
            &[],
        ])
        .unwrap();
        assert_eq!(m.get_inverse(), Err(MathError::Singular));
    }

    #[test]
    fn test_blank_is_singular() {
        assert_eq!(Matrix44::blank().get_inverse(), Err(MathError::Singular));
    }

    #[test]
    fn test_inverse_forces_affine_column() {
        let mut m = affine();
        m.set_column(3, &[0.5, 0.5, 0.5, 2.0]).unwrap();
        let inv = m.get_inverse().unwrap();
        assert_eq!(inv.get_column(3), Ok([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_rot_trans_inverse_matches_general() {
        let axis = Vector3::new(1.0, 1.0, 0.0).get_normalised();
        let m = Matrix44::rotation_about_axis(axis, FRAC_PI_3)
            * Matrix44::translation(-4.0, 9.0, 0.25);
        let fast = m.get_inverse_rot_trans();
        let general = m.get_inverse().unwrap();
        assert!(fast.approx_eq(&general, EPS));
        assert!((m * fast).approx_eq(&Matrix44::IDENTITY, EPS));
    }

    #[test]
    fn test_inverse_leaves_receiver_unchanged() {
        let m = affine();
        let copy = m;
        let _ = m.get_inverse();
        let _ = m.get_inverse_rot_trans();
        assert_eq!(m, copy);
    }
}
