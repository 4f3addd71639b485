//! The two elementary 2×2 unitary families of Quantum Signal Processing.
//!
//! A QSP sequence alternates the **signal operator**
//!
//!   W(a) = [[a, i√(1−a²)], [i√(1−a²), a]]
//!
//! (an X-rotation by −2·arccos(a)) with the **phase operator**
//!
//!   S(φ) = diag(e^{iφ}, e^{−iφ})
//!
//! (a Z-rotation by −2φ). Both are pure functions of their scalar
//! parameter; composition lives in [`crate::sequence`].

use num_complex::Complex64;

use crate::error::{QspError, QspResult};

/// A 2×2 complex matrix in row-major order.
///
/// Values are immutable: every operation returns a new matrix. The name
/// reflects how the type is used — all constructors produce unitaries, and
/// products of unitaries stay unitary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2 {
    /// Create a matrix from its row-major elements.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// The signal operator `W(a)`.
    ///
    /// Symmetric and unitary for `a ∈ [-1, 1]`; squaring it doubles the
    /// rotation angle, so the diagonal of `W(a)²` is `2a² − 1 = T₂(a)`.
    /// At `a = ±1` the off-diagonal vanishes and the matrix is purely real.
    ///
    /// # Errors
    /// [`QspError::SignalOutOfRange`] if `|a| > 1` (the square root would
    /// leave the reals and the result would not be unitary).
    pub fn signal(a: f64) -> QspResult<Self> {
        if !(-1.0..=1.0).contains(&a) {
            return Err(QspError::SignalOutOfRange(a));
        }
        let off = Complex64::new(0.0, (1.0 - a * a).sqrt());
        let diag = Complex64::new(a, 0.0);
        Ok(Self::new(diag, off, off, diag))
    }

    /// The phase operator `S(φ) = diag(e^{iφ}, e^{−iφ})`.
    ///
    /// Unitary for every real φ; no domain restriction.
    pub fn phase(phi: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, phi),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, -phi),
        )
    }

    /// Matrix element at (row, col). Panics if either index exceeds 1.
    pub fn entry(&self, row: usize, col: usize) -> Complex64 {
        assert!(row < 2 && col < 2, "Unitary2 index out of range");
        self.data[2 * row + col]
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// The conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Probability that a |0⟩ input is preserved: `|u₀₀|²`.
    ///
    /// For a unitary matrix this equals 1 minus the bit-flip probability
    /// and lies in `[0, 1]` up to floating-point error.
    pub fn prob(&self) -> f64 {
        self.data[0].norm_sqr()
    }

    /// Check `U·U† = I` within the given tolerance.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let p = self.mul(&self.dagger());
        let eye = Self::identity();
        p.data
            .iter()
            .zip(eye.data.iter())
            .all(|(x, y)| (x - y).norm() < tol)
    }
}

impl Default for Unitary2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn signal_is_symmetric_unitary() {
        // W(a) is symmetric (equal imaginary off-diagonals), not Hermitian;
        // squaring doubles the rotation angle, so (W²)₀₀ = 2a² − 1 = T₂(a)
        // rather than W² = I.
        for i in -10..=10 {
            let a = f64::from(i) / 10.0;
            let w = Unitary2::signal(a).unwrap();
            assert!(w.is_unitary(1e-9), "W({a}) not unitary");
            assert!(approx_eq(w.entry(0, 1), w.entry(1, 0)), "W({a}) not symmetric");
            let w2 = w * w;
            let t2 = Complex64::new(2.0 * a * a - 1.0, 0.0);
            assert!(approx_eq(w2.entry(0, 0), t2), "W({a})² diagonal != T₂({a})");
            assert!(approx_eq(w2.entry(1, 1), t2));
        }
    }

    #[test]
    fn signal_rejects_out_of_range() {
        assert_eq!(
            Unitary2::signal(1.0 + 1e-12),
            Err(QspError::SignalOutOfRange(1.0 + 1e-12))
        );
        assert!(Unitary2::signal(-1.5).is_err());
        assert!(Unitary2::signal(f64::NAN).is_err());
    }

    #[test]
    fn signal_boundary_is_real() {
        for a in [1.0, -1.0] {
            let w = Unitary2::signal(a).unwrap();
            for x in w.data {
                assert_eq!(x.im, 0.0, "W({a}) has imaginary part");
            }
            assert!(approx_eq(w.entry(0, 1), Complex64::new(0.0, 0.0)));
            assert!(approx_eq(w.entry(1, 0), Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn phase_is_unitary_and_diagonal() {
        for i in -8..=8 {
            let phi = f64::from(i) * 0.7;
            let s = Unitary2::phase(phi);
            assert!(s.is_unitary(1e-12));
            assert!(approx_eq(s.entry(0, 1), Complex64::new(0.0, 0.0)));
            assert!(approx_eq(s.entry(1, 0), Complex64::new(0.0, 0.0)));
            assert!(approx_eq(s.entry(0, 0), s.entry(1, 1).conj()));
        }
    }

    #[test]
    fn dagger_is_involutive() {
        let u = Unitary2::phase(0.3) * Unitary2::signal(0.5).unwrap();
        assert_eq!(u.dagger().dagger(), u);
    }

    #[test]
    fn prob_of_identity_is_one() {
        assert!((Unitary2::identity().prob() - 1.0).abs() < 1e-15);
    }
}
