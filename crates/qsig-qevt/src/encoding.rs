//! Block encoding of a Hermitian operator into a larger unitary.
//!
//! For a Hermitian H with spectral norm ≤ 1 the completion
//!
//!   U_H = [[H, M], [M, −H]],   M = √(I − H²)
//!
//! is a 2n×2n unitary whose top-left block is exactly H. The square root
//! is the principal root on the PSD branch, so U_H is also Hermitian — an
//! involution (`U_H² = I`), which shapes which polynomials the alternating
//! sequence in [`crate::sequence`] can reach.

use ndarray::{Array2, s};
use num_complex::Complex64;
use tracing::debug;

use crate::error::{QevtError, QevtResult};
use crate::linalg::{hermitian_deviation, identity, spectral_norm, sqrtm_psd};

/// Tolerance for the Hermiticity and norm preconditions.
pub const INPUT_TOL: f64 = 1e-9;

/// Embed a Hermitian matrix into the top-left block of a 2n×2n unitary.
///
/// # Errors
/// - [`QevtError::NotSquare`] for a rectangular input;
/// - [`QevtError::NotHermitian`] if `|H − H†|` exceeds [`INPUT_TOL`];
/// - [`QevtError::SpectralNormExceeded`] if any eigenvalue magnitude is
///   above `1 + INPUT_TOL`.
///
/// All three are local precondition violations surfaced eagerly; a
/// violating input would otherwise yield a silently non-unitary result.
pub fn block_encode(h: &Array2<Complex64>) -> QevtResult<Array2<Complex64>> {
    let (rows, cols) = h.dim();
    if rows != cols {
        return Err(QevtError::NotSquare { rows, cols });
    }
    let deviation = hermitian_deviation(h);
    if deviation > INPUT_TOL {
        return Err(QevtError::NotHermitian { deviation });
    }
    let norm = spectral_norm(h);
    if norm > 1.0 + INPUT_TOL {
        return Err(QevtError::SpectralNormExceeded { norm });
    }

    let n = rows;
    debug!(n, norm, "building block encoding");
    let m = sqrtm_psd(&(identity(n) - h.dot(h)));

    let mut u = Array2::zeros((2 * n, 2 * n));
    u.slice_mut(s![..n, ..n]).assign(h);
    u.slice_mut(s![..n, n..]).assign(&m);
    u.slice_mut(s![n.., ..n]).assign(&m);
    u.slice_mut(s![n.., n..]).assign(&h.mapv(|x| -x));
    Ok(u)
}
