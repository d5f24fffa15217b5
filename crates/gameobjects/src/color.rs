//! RGBA color.
//!
//! Components are nominally in `0.0..=1.0` but are not clamped until
//! [`Color::saturate`] is called; arithmetic can overshoot freely. Operators
//! act on red, green and blue only and carry alpha over from the left
//! operand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::numeric::{FixedArityNumeric, zip_with};
use crate::util::{DEFAULT_PRECISION, format_number};

/// A red, green, blue color with an alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha (opacity) component, 1 for opaque.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Opaque 25% grey.
    pub const GREY25: Self = Self::new(0.25, 0.25, 0.25);
    /// Opaque 50% grey.
    pub const GREY50: Self = Self::new(0.5, 0.5, 0.5);
    /// Opaque 75% grey.
    pub const GREY75: Self = Self::new(0.75, 0.75, 0.75);

    /// Creates an opaque color.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color with an explicit alpha.
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// Parses an html style `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidHex`] if the string is not `#` followed by
    /// six hex digits.
    pub fn from_html(text: &str, alpha: f64) -> Result<Self> {
        let invalid = || MathError::InvalidHex(text.to_string());
        let digits = text
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|v| f64::from(v) / 255.0)
                .ok_or_else(invalid)
        };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    /// Formats as an html style `#RRGGBB` string (saturated, alpha dropped).
    #[must_use]
    pub fn as_html(&self) -> String {
        let [r, g, b, _] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Packs the saturated color as `0xAARRGGBB`.
    #[must_use]
    pub fn to_argb_u32(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
    }

    /// Saturated components scaled to bytes, truncating, in r, g, b, a order.
    fn to_bytes(self) -> [u8; 4] {
        self.saturated().as_tuple_rgba().map(|c| (c * 255.0) as u8)
    }

    /// Clamps every component (alpha included) into `min..=max`, in place.
    pub fn saturate(&mut self, min: f64, max: f64) -> &mut Self {
        *self = Self::from_rgba_array(self.as_tuple_rgba().map(|c| c.max(min).min(max)));
        self
    }

    /// Returns a copy clamped into `0.0..=1.0`.
    #[must_use]
    pub fn saturated(&self) -> Self {
        let mut c = *self;
        c.saturate(0.0, 1.0);
        c
    }

    /// Red, green and blue as an array.
    #[must_use]
    pub const fn as_tuple_rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Red, green, blue and alpha as an array.
    #[must_use]
    pub const fn as_tuple_rgba(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    const fn from_rgba_array([r, g, b, a]: [f64; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }

    /// Returns component `index` (0 red, 1 green, 2 blue, 3 alpha).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] if `index > 3`.
    pub fn get(&self, index: usize) -> Result<f64> {
        MathError::check_index(index, 4)?;
        Ok(self.as_tuple_rgba()[index])
    }

    /// Sets component `index` (0 red, 1 green, 2 blue, 3 alpha).
    ///
    /// # Errors
    ///
    /// Returns [`MathError::OutOfRange`] if `index > 3`; the color is left
    /// unchanged.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        MathError::check_index(index, 4)?;
        let mut values = self.as_tuple_rgba();
        values[index] = value;
        *self = Self::from_rgba_array(values);
        Ok(())
    }

    fn map_rgb(self, f: impl Fn(f64) -> f64) -> Self {
        Self::rgba(f(self.r), f(self.g), f(self.b), self.a)
    }

    fn zip_rgb(self, rhs: [f64; 3], op: impl Fn(f64, f64) -> f64) -> Self {
        let [r, g, b] = zip_with(self.as_tuple_rgb(), rhs, op);
        Self::rgba(r, g, b, self.a)
    }
}

impl Default for Color {
    /// Opaque white.
    fn default() -> Self {
        Self::WHITE
    }
}

/// The opaque red, green, blue view of a color.
impl FixedArityNumeric<3> for Color {
    fn to_array(self) -> [f64; 3] {
        self.as_tuple_rgb()
    }

    fn from_array([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FixedArityNumeric<4> for Color {
    fn to_array(self) -> [f64; 4] {
        self.as_tuple_rgba()
    }

    fn from_array(values: [f64; 4]) -> Self {
        Self::from_rgba_array(values)
    }
}

macro_rules! impl_color_ops {
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, $op:tt) => {
        impl<T: FixedArityNumeric<3>> std::ops::$tr<T> for Color {
            type Output = Color;

            fn $method(self, rhs: T) -> Color {
                self.zip_rgb(FixedArityNumeric::<3>::to_array(rhs), |a, b| a $op b)
            }
        }

        impl<T: FixedArityNumeric<3>> std::ops::$tr_assign<T> for Color {
            fn $method_assign(&mut self, rhs: T) {
                *self = std::ops::$tr::$method(*self, rhs);
            }
        }
    };
    (@scalar $tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident, $op:tt) => {
        impl std::ops::$tr<f64> for Color {
            type Output = Color;

            fn $method(self, rhs: f64) -> Color {
                self.map_rgb(|c| c $op rhs)
            }
        }

        impl std::ops::$tr_assign<f64> for Color {
            fn $method_assign(&mut self, rhs: f64) {
                *self = std::ops::$tr::$method(*self, rhs);
            }
        }
    };
}

impl_color_ops!(Add, add, AddAssign, add_assign, +);
impl_color_ops!(Sub, sub, SubAssign, sub_assign, -);
impl_color_ops!(Mul, mul, MulAssign, mul_assign, *);
impl_color_ops!(Div, div, DivAssign, div_assign, /);
impl_color_ops!(@scalar Mul, mul, MulAssign, mul_assign, *);
impl_color_ops!(@scalar Div, div, DivAssign, div_assign, /);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "( red {}, green {}, blue {}, alpha {} )",
            format_number(self.r, p),
            format_number(self.g, p),
            format_number(self.b, p),
            format_number(self.a, p)
        )
    }
}
