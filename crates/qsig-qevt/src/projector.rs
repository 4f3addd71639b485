//! Projector-controlled phase gates.
//!
//! The multi-dimensional analogue of the QSP phase operator: with
//! Π the projector onto the first n of 2n coordinates,
//!
//!   Π_φ = exp(iφ·(2Π − I))
//!
//! applies `e^{iφ}` on the projected subspace and `e^{−iφ}` on its
//! complement. The gate is an operator exponential and is built with the
//! general [`expm`] primitive; it does not assume the projector is
//! axis-aligned, even though the fixed Π used here is.

use ndarray::Array2;
use num_complex::Complex64;

use crate::linalg::expm;

/// The reflection `2Π − I`: +1 on the first n of 2n coordinates, −1 on
/// the rest.
pub fn reflection(n: usize) -> Array2<Complex64> {
    let mut r = Array2::zeros((2 * n, 2 * n));
    for i in 0..n {
        r[[i, i]] = Complex64::new(1.0, 0.0);
        r[[n + i, n + i]] = Complex64::new(-1.0, 0.0);
    }
    r
}

/// The projector-phase gate `Π_φ = exp(iφ·(2Π − I))` on 2n dimensions.
///
/// Unitary for every real φ. At `φ = π/2` this is `i·(2Π − I)` — the
/// reflection itself up to a global phase, which is what makes the
/// Chebyshev sequences in [`crate::sequence`] tick.
pub fn projector_phase(phi: f64, n: usize) -> Array2<Complex64> {
    let generator = reflection(n) * Complex64::new(0.0, phi);
    expm(&generator)
}
