//! Small numeric helpers and crate-wide constants.

/// Number of decimal places used when a formatter supplies no precision.
pub const DEFAULT_PRECISION: usize = 6;

/// Relative threshold below which a determinant is treated as cancelled out.
///
/// Compared against `|det / (pos - neg)|`, where `pos` and `neg` are the
/// separately accumulated positive and negative parts of the determinant.
pub const SINGULAR_EPSILON: f64 = 2.0e-17;

/// Formats a number with `precision` decimal places, then strips trailing
/// zeros and a trailing decimal point.
///
/// A result of `-0` is normalised to `0`.
///
/// ```
/// use gameobjects::util::format_number;
///
/// assert_eq!(format_number(1.5, 6), "1.5");
/// assert_eq!(format_number(2.0, 6), "2");
/// assert_eq!(format_number(-0.0000001, 3), "0");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Lazily iterates a 2D range, `x` varying fastest.
///
/// `xs` is collected once up front; `ys` is consumed lazily.
pub fn range2d<X, Y>(xs: X, ys: Y) -> impl Iterator<Item = (X::Item, Y::Item)>
where
    X: IntoIterator,
    X::Item: Clone,
    Y: IntoIterator,
    Y::Item: Clone,
{
    let xs: Vec<X::Item> = xs.into_iter().collect();
    ys.into_iter()
        .flat_map(move |y| xs.clone().into_iter().map(move |x| (x, y.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_trims_zeros() {
        assert_eq!(format_number(1.25, 6), "1.25");
        assert_eq!(format_number(3.0, 6), "3");
        assert_eq!(format_number(-4.5, 2), "-4.5");
        assert_eq!(format_number(1.0 / 3.0, 3), "0.333");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0, 6), "0");
        assert_eq!(format_number(-1e-9, 6), "0");
        assert_eq!(format_number(-0.2, 0), "0");
    }

    #[test]
    fn test_format_number_zero_precision() {
        assert_eq!(format_number(10.0, 0), "10");
        assert_eq!(format_number(2.6, 0), "3");
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn test_range2d_order() {
        let cells: Vec<_> = range2d(0..3, 0..2).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_range2d_empty() {
        assert_eq!(range2d(0..0, 0..5).count(), 0);
        assert_eq!(range2d(0..5, 0..0).count(), 0);
    }
}
