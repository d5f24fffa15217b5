//! Rotation builders.
//!
//! Angles are in radians. Every builder places the 2×2 block
//! `(cos, sin; -sin, cos)` so that, with row vectors, a positive angle turns
//! counter-clockwise when looking down the axis towards the origin:
//! `z_rotation(π/2)` takes `(1, 0, 0)` to `(0, 1, 0)`.

use super::Matrix44;
use crate::numeric::FixedArityNumeric;

impl Matrix44 {
    /// Creates a rotation about the x axis.
    #[must_use]
    pub fn x_rotation(angle: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_x_rotation(angle);
        ret
    }

    /// Creates a rotation about the y axis.
    #[must_use]
    pub fn y_rotation(angle: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_y_rotation(angle);
        ret
    }

    /// Creates a rotation about the z axis.
    #[must_use]
    pub fn z_rotation(angle: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_z_rotation(angle);
        ret
    }

    /// Creates a rotation of `angle` about `axis`.
    ///
    /// `axis` must already be unit length; it is not normalised here, and a
    /// longer or shorter axis produces a matrix that also scales.
    #[must_use]
    pub fn rotation_about_axis(axis: impl FixedArityNumeric<3>, angle: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_rotation_about_axis(axis, angle);
        ret
    }

    /// Creates the combined rotation about all three axes.
    ///
    /// Equal to `z_rotation(az) * y_rotation(ay) * x_rotation(ax)`, built in
    /// closed form instead of with two matrix products.
    #[must_use]
    pub fn xyz_rotation(ax: f64, ay: f64, az: f64) -> Self {
        let mut ret = Self::blank();
        ret.make_xyz_rotation(ax, ay, az);
        ret
    }

    /// Makes a rotation about the x axis.
    pub fn make_x_rotation(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.m = [
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Makes a rotation about the y axis.
    pub fn make_y_rotation(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.m = [
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Makes a rotation about the z axis.
    pub fn make_z_rotation(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.m = [
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Makes a rotation of `angle` about the unit vector `axis`.
    pub fn make_rotation_about_axis(
        &mut self,
        axis: impl FixedArityNumeric<3>,
        angle: f64,
    ) -> &mut Self {
        let [x, y, z] = axis.to_array();
        let (s, c) = angle.sin_cos();
        let omc = 1.0 - c;
        self.m = [
            x * x * omc + c, y * x * omc + z * s, x * z * omc - y * s, 0.0, //
            x * y * omc - z * s, y * y * omc + c, y * z * omc + x * s, 0.0, //
            x * z * omc + y * s, y * z * omc - x * s, z * z * omc + c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }

    /// Makes the combined rotation about all three axes.
    pub fn make_xyz_rotation(&mut self, ax: f64, ay: f64, az: f64) -> &mut Self {
        let (sx, cx) = ax.sin_cos();
        let (sy, cy) = ay.sin_cos();
        let (sz, cz) = az.sin_cos();
        let sxsy = sx * sy;
        let cxsy = cx * sy;
        self.m = [
            cy * cz, sxsy * cz + cx * sz, -cxsy * cz + sx * sz, 0.0, //
            -cy * sz, -sxsy * sz + cx * cz, cxsy * sz + sx * cz, 0.0, //
            sy, -sx * cy, cx * cy, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        self
    }
}
