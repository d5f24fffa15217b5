//! Conversions to and from [`glam`]'s double precision types.
//!
//! [`Matrix44`] is row-major with row vectors; `glam` is column-major with
//! column vectors. The two conventions are transposes of each other, so the
//! 16 values carry over in the same order and no shuffling is needed. Keep
//! in mind that the product order flips: `a * b` here is
//! `DMat4::from(b) * DMat4::from(a)` in `glam`.

use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::color::Color;
use crate::matrix44::Matrix44;
use crate::vector2::Vector2;
use crate::vector3::Vector3;

impl From<Matrix44> for DMat4 {
    fn from(m: Matrix44) -> Self {
        DMat4::from_cols_array(&m.to_array())
    }
}

impl From<DMat4> for Matrix44 {
    fn from(m: DMat4) -> Self {
        Matrix44::from_array(m.to_cols_array())
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Color> for DVec4 {
    fn from(c: Color) -> Self {
        DVec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<DVec4> for Color {
    fn from(v: DVec4) -> Self {
        Color::rgba(v.x, v.y, v.z, v.w)
    }
}
