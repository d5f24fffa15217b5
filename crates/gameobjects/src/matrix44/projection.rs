//! Perspective projection builders.
//!
//! The matrices follow the OpenGL frustum layout, transposed for row
//! vectors: column 3 carries the `-1` that copies `-z` into `w`, so these
//! are the only non-affine matrices the crate builds.

use std::f64::consts::PI;

use tracing::debug;

use super::Matrix44;
use crate::error::{MathError, Result};

impl Matrix44 {
    /// Creates an off-axis perspective projection.
    ///
    /// `left`, `right`, `top` and `bottom` are the extents of the near
    /// clipping plane; `near` and `far` are the clipping plane distances.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] for a non-finite input or a frustum
    /// with zero width, height or depth.
    pub fn perspective_projection(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        let mut ret = Self::blank();
        ret.make_perspective_projection(left, right, top, bottom, near, far)?;
        Ok(ret)
    }

    /// Creates a symmetric perspective projection.
    ///
    /// `fov` is the horizontal field of view in radians and `aspect` the
    /// width / height ratio of the screen.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `fov` is not less than π, or if the
    /// derived frustum is degenerate.
    pub fn perspective_projection_fov(fov: f64, aspect: f64, near: f64, far: f64) -> Result<Self> {
        let mut ret = Self::blank();
        ret.make_perspective_projection_fov(fov, aspect, near, far)?;
        Ok(ret)
    }

    /// Makes an off-axis perspective projection.
    ///
    /// # Errors
    ///
    /// See [`perspective_projection`](Self::perspective_projection). The
    /// matrix is unchanged on error.
    pub fn make_perspective_projection(
        &mut self,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> Result<&mut Self> {
        let extents = [left, right, top, bottom, near, far];
        if extents.iter().any(|v| !v.is_finite()) || right == left || top == bottom || far == near {
            debug!(left, right, top, bottom, near, far, "degenerate frustum rejected");
            return Err(MathError::Domain(format!(
                "degenerate frustum: left {left}, right {right}, top {top}, \
                 bottom {bottom}, near {near}, far {far}"
            )));
        }

        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        self.m = [
            (2.0 * near) / width, 0.0, 0.0, 0.0, //
            0.0, (2.0 * near) / height, 0.0, 0.0, //
            (right + left) / width, (top + bottom) / height, -((far + near) / depth), -1.0, //
            0.0, 0.0, -((2.0 * far * near) / depth), 0.0,
        ];
        Ok(self)
    }

    /// Makes a symmetric perspective projection from a field of view.
    ///
    /// # Errors
    ///
    /// See [`perspective_projection_fov`](Self::perspective_projection_fov).
    /// The matrix is unchanged on error.
    pub fn make_perspective_projection_fov(
        &mut self,
        fov: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<&mut Self> {
        if fov.is_nan() || fov >= PI {
            debug!(fov, "field of view rejected");
            return Err(MathError::Domain(format!(
                "field of view should be less than pi radians (180 degrees), got {fov}"
            )));
        }
        let right = (fov / 2.0).tan() * near;
        let left = -right;
        let top = right / aspect;
        let bottom = -top;
        self.make_perspective_projection(left, right, top, bottom, near, far)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::error::{ArgumentKind, ErrorKind};

    #[test]
    fn test_frustum_layout() {
        let m = Matrix44::perspective_projection(-1.0, 1.0, 1.0, -1.0, 1.0, 3.0).unwrap();
        assert_eq!(m.get_row(0), Ok([1.0, 0.0, 0.0, 0.0]));
        assert_eq!(m.get_row(1), Ok([0.0, 1.0, 0.0, 0.0]));
        assert_eq!(m.get_row(2), Ok([0.0, 0.0, -2.0, -1.0]));
        assert_eq!(m.get_row(3), Ok([0.0, 0.0, -3.0, 0.0]));
        assert_eq!(m[(2, 3)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
    }

    #[test]
    fn test_off_axis_frustum() {
        let m = Matrix44::perspective_projection(0.0, 2.0, 4.0, 0.0, 1.0, 2.0).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 0.5);
        assert_eq!(m[(2, 0)], 1.0);
        assert_eq!(m[(2, 1)], 1.0);
    }

    #[test]
    fn test_near_and_far_planes_map_to_clip_range() {
        let (near, far) = (0.5, 10.0);
        let m = Matrix44::perspective_projection(-1.0, 1.0, 1.0, -1.0, near, far).unwrap();
        let ndc_z = |z: f64| {
            let row = [0.0, 0.0, z, 1.0];
            let clip: Vec<f64> = m
                .columns()
                .map(|col| row.iter().zip(col).map(|(a, b)| a * b).sum())
                .collect();
            clip[2] / clip[3]
        };
        assert!((ndc_z(-near) + 1.0).abs() < 1e-12);
        assert!((ndc_z(-far) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fov_builds_symmetric_frustum() {
        let m = Matrix44::perspective_projection_fov(FRAC_PI_2, 2.0, 1.0, 100.0).unwrap();
        let expected = Matrix44::perspective_projection(-1.0, 1.0, 0.5, -0.5, 1.0, 100.0).unwrap();
        assert!(m.approx_eq(&expected, 1e-12));
        assert!((m[(1, 1)] - 2.0).abs() < 1e-12);
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);
    }

    #[test]
    fn test_fov_domain() {
        for fov in [PI, 4.0, f64::NAN] {
            let err = Matrix44::perspective_projection_fov(fov, 1.0, 1.0, 10.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Argument(ArgumentKind::Domain));
        }
    }

    #[test]
    fn test_degenerate_frustum() {
        assert!(Matrix44::perspective_projection(1.0, 1.0, 1.0, -1.0, 1.0, 2.0).is_err());
        assert!(Matrix44::perspective_projection(-1.0, 1.0, 1.0, 1.0, 1.0, 2.0).is_err());
        assert!(Matrix44::perspective_projection(-1.0, 1.0, 1.0, -1.0, 2.0, 2.0).is_err());
        assert!(Matrix44::perspective_projection_fov(1.0, 0.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn test_failed_make_leaves_matrix_unchanged() {
        let mut m = Matrix44::translation(1.0, 2.0, 3.0);
        assert!(m.make_perspective_projection_fov(PI, 1.0, 1.0, 2.0).is_err());
        assert!(m.make_perspective_projection(0.0, 0.0, 1.0, -1.0, 1.0, 2.0).is_err());
        assert_eq!(m, Matrix44::translation(1.0, 2.0, 3.0));
    }
}
