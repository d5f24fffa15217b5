//! Matrix products.
//!
//! `A * B` is the textbook product `A · B`. Under the row-vector convention
//! that means "apply `A`, then `B`": `v · (A · B) == (v · A) · B`.

use std::ops::{Mul, MulAssign};

use super::Matrix44;

/// Textbook 4×4 product of two row-major arrays, every cell written out.
#[rustfmt::skip]
fn product(a: &[f64; 16], b: &[f64; 16]) -> [f64; 16] {
    [
        a[0] * b[0] + a[1] * b[4] + a[2] * b[8] + a[3] * b[12],
        a[0] * b[1] + a[1] * b[5] + a[2] * b[9] + a[3] * b[13],
        a[0] * b[2] + a[1] * b[6] + a[2] * b[10] + a[3] * b[14],
        a[0] * b[3] + a[1] * b[7] + a[2] * b[11] + a[3] * b[15],

        a[4] * b[0] + a[5] * b[4] + a[6] * b[8] + a[7] * b[12],
        a[4] * b[1] + a[5] * b[5] + a[6] * b[9] + a[7] * b[13],
        a[4] * b[2] + a[5] * b[6] + a[6] * b[10] + a[7] * b[14],
        a[4] * b[3] + a[5] * b[7] + a[6] * b[11] + a[7] * b[15],

        a[8] * b[0] + a[9] * b[4] + a[10] * b[8] + a[11] * b[12],
        a[8] * b[1] + a[9] * b[5] + a[10] * b[9] + a[11] * b[13],
        a[8] * b[2] + a[9] * b[6] + a[10] * b[10] + a[11] * b[14],
        a[8] * b[3] + a[9] * b[7] + a[10] * b[11] + a[11] * b[15],

        a[12] * b[0] + a[13] * b[4] + a[14] * b[8] + a[15] * b[12],
        a[12] * b[1] + a[13] * b[5] + a[14] * b[9] + a[15] * b[13],
        a[12] * b[2] + a[13] * b[6] + a[14] * b[10] + a[15] * b[14],
        a[12] * b[3] + a[13] * b[7] + a[14] * b[11] + a[15] * b[15],
    ]
}

impl Matrix44 {
    /// Returns `self · rhs`, the transform that applies `self` then `rhs`.
    #[must_use]
    pub fn multiply(&self, rhs: &Matrix44) -> Matrix44 {
        Matrix44::from_array(product(&self.m, &rhs.m))
    }

    /// Replaces `self` with `self · rhs`.
    ///
    /// Every output cell is computed from a copy of the original values, so
    /// no cell reads a value this call has already overwritten.
    pub fn multiply_assign(&mut self, rhs: &Matrix44) -> &mut Self {
        let lhs = self.m;
        self.m = product(&lhs, &rhs.m);
        self
    }
}

impl Mul for Matrix44 {
    type Output = Matrix44;

    fn mul(self, rhs: Matrix44) -> Matrix44 {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix44> for &Matrix44 {
    type Output = Matrix44;

    fn mul(self, rhs: &Matrix44) -> Matrix44 {
        self.multiply(rhs)
    }
}

impl MulAssign for Matrix44 {
    fn mul_assign(&mut self, rhs: Matrix44) {
        self.multiply_assign(&rhs);
    }
}

impl MulAssign<&Matrix44> for Matrix44 {
    fn mul_assign(&mut self, rhs: &Matrix44) {
        self.multiply_assign(rhs);
    }
}
