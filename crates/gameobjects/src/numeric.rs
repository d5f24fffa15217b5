//! The [`FixedArityNumeric`] capability.
//!
//! Anything that is "N floats in a row" implements this trait: plain arrays,
//! tuples, [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3) and
//! [`Color`](crate::Color). Operators and matrix application are written
//! once against the trait instead of once per operand type.

/// A value made of exactly `N` scalar components.
pub trait FixedArityNumeric<const N: usize>: Copy {
    /// Returns the components in order.
    fn to_array(self) -> [f64; N];

    /// Builds a value from its components.
    fn from_array(values: [f64; N]) -> Self;
}

impl<const N: usize> FixedArityNumeric<N> for [f64; N] {
    fn to_array(self) -> [f64; N] {
        self
    }

    fn from_array(values: [f64; N]) -> Self {
        values
    }
}

impl FixedArityNumeric<2> for (f64, f64) {
    fn to_array(self) -> [f64; 2] {
        [self.0, self.1]
    }

    fn from_array([x, y]: [f64; 2]) -> Self {
        (x, y)
    }
}

impl FixedArityNumeric<3> for (f64, f64, f64) {
    fn to_array(self) -> [f64; 3] {
        [self.0, self.1, self.2]
    }

    fn from_array([x, y, z]: [f64; 3]) -> Self {
        (x, y, z)
    }
}

impl FixedArityNumeric<4> for (f64, f64, f64, f64) {
    fn to_array(self) -> [f64; 4] {
        [self.0, self.1, self.2, self.3]
    }

    fn from_array([x, y, z, w]: [f64; 4]) -> Self {
        (x, y, z, w)
    }
}

/// Applies `op` component-wise to two values of the same arity.
pub(crate) fn zip_with<const N: usize>(
    lhs: [f64; N],
    rhs: [f64; N],
    op: impl Fn(f64, f64) -> f64,
) -> [f64; N] {
    std::array::from_fn(|i| op(lhs[i], rhs[i]))
}

/// Implements the arithmetic operators for a vector type of arity `$n`.
///
/// Binary operators return new values; only the `*Assign` forms mutate.
/// The right-hand side may be any [`FixedArityNumeric`] of the same arity,
/// or an `f64` scalar for `*` and `/`.
macro_rules! impl_vector_ops {
    ($ty:ident, $n:literal) => {
        impl_vector_ops!(@binary $ty, $n, Add, add, AddAssign, add_assign, +);
        impl_vector_ops!(@binary $ty, $n, Sub, sub, SubAssign, sub_assign, -);
        impl_vector_ops!(@binary $ty, $n, Mul, mul, MulAssign, mul_assign, *);
        impl_vector_ops!(@binary $ty, $n, Div, div, DivAssign, div_assign, /);
        impl_vector_ops!(@scalar $ty, Mul, mul, MulAssign, mul_assign, *);
        impl_vector_ops!(@scalar $ty, Div, div, DivAssign, div_assign, /);

        impl std::ops::Mul<$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                self * -1.0
            }
        }
    };

    (@binary $ty:ident, $n:literal, $tr:ident, $method:ident,
     $tr_assign:ident, $method_assign:ident, $op:tt) => {
        impl<T: $crate::numeric::FixedArityNumeric<$n>> std::ops::$tr<T> for $ty {
            type Output = $ty;

            fn $method(self, rhs: T) -> $ty {
                let values = $crate::numeric::zip_with(
                    $crate::numeric::FixedArityNumeric::<$n>::to_array(self),
                    $crate::numeric::FixedArityNumeric::<$n>::to_array(rhs),
                    |a, b| a $op b,
                );
                <$ty as $crate::numeric::FixedArityNumeric<$n>>::from_array(values)
            }
        }

        impl<T: $crate::numeric::FixedArityNumeric<$n>> std::ops::$tr_assign<T> for $ty {
            fn $method_assign(&mut self, rhs: T) {
                *self = std::ops::$tr::$method(*self, rhs);
            }
        }
    };

    (@scalar $ty:ident, $tr:ident, $method:ident,
     $tr_assign:ident, $method_assign:ident, $op:tt) => {
        impl std::ops::$tr<f64> for $ty {
            type Output = $ty;

            fn $method(self, rhs: f64) -> $ty {
                self.map(|c| c $op rhs)
            }
        }

        impl std::ops::$tr_assign<f64> for $ty {
            fn $method_assign(&mut self, rhs: f64) {
                *self = std::ops::$tr::$method(*self, rhs);
            }
        }
    };
}

pub(crate) use impl_vector_ops;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_arrays() {
        assert_eq!((1.0, 2.0).to_array(), [1.0, 2.0]);
        assert_eq!((1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(
            <(f64, f64, f64, f64)>::from_array([1.0, 2.0, 3.0, 4.0]),
            (1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_zip_with() {
        assert_eq!(zip_with([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], |a, b| a * b), [4.0, 10.0, 18.0]);
    }
}
