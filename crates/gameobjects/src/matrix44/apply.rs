//! Applying a transform to points and directions.
//!
//! Inputs are any [`FixedArityNumeric<3>`] (a [`Vector3`], an array or a
//! tuple). The input is taken by value and never modified.

use super::Matrix44;
use crate::numeric::FixedArityNumeric;
use crate::vector3::Vector3;

impl Matrix44 {
    /// Transforms a point, returning the same type that was passed in.
    ///
    /// Computes `v · M` with an implied `w` of 1, so the translation row
    /// applies. Projective coefficients are ignored (no divide by `w`).
    #[must_use]
    pub fn transform<V: FixedArityNumeric<3>>(&self, v: V) -> V {
        let m = &self.m;
        let [x, y, z] = v.to_array();
        V::from_array([
            x * m[0] + y * m[4] + z * m[8] + m[12],
            x * m[1] + y * m[5] + z * m[9] + m[13],
            x * m[2] + y * m[6] + z * m[10] + m[14],
        ])
    }

    /// Transforms a point and returns it as a [`Vector3`].
    #[must_use]
    pub fn transform_vec3(&self, v: impl FixedArityNumeric<3>) -> Vector3 {
        self.transform(Vector3::from_array(v.to_array()))
    }

    /// Rotates a direction, ignoring the translation row.
    #[must_use]
    pub fn rotate(&self, v: impl FixedArityNumeric<3>) -> Vector3 {
        Vector3::from_array(self.rotate_array(v.to_array()))
    }

    /// Rotates a direction and returns it as a tuple.
    #[must_use]
    pub fn rotate_tuple(&self, v: impl FixedArityNumeric<3>) -> (f64, f64, f64) {
        <(f64, f64, f64)>::from_array(self.rotate_array(v.to_array()))
    }

    /// Lazily transforms a sequence of points, in order.
    pub fn iter_transform<I>(&self, points: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: FixedArityNumeric<3>,
    {
        points.into_iter().map(|p| self.transform(p))
    }

    /// Lazily transforms a sequence of points into [`Vector3`]s, in order.
    pub fn iter_transform_vec3<I>(&self, points: I) -> impl Iterator<Item = Vector3>
    where
        I: IntoIterator,
        I::Item: FixedArityNumeric<3>,
    {
        points.into_iter().map(|p| self.transform_vec3(p))
    }

    /// Lazily rotates a sequence of directions, in order.
    pub fn iter_rotate<I>(&self, directions: I) -> impl Iterator<Item = Vector3>
    where
        I: IntoIterator,
        I::Item: FixedArityNumeric<3>,
    {
        directions.into_iter().map(|d| self.rotate(d))
    }

    fn rotate_array(&self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        // Every output axis reads all three original inputs.
        let rx = x * m[0] + y * m[4] + z * m[8];
        let ry = x * m[1] + y * m[5] + z * m[9];
        let rz = x * m[2] + y * m[6] + z * m[10];
        [rx, ry, rz]
    }
}
