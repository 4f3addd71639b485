//! QEVT sequence composition.
//!
//! Alternates the block encoding `U_H`, its conjugate transpose, and
//! projector-phase gates according to the parity of the phase list:
//!
//!   odd d:   Π_{φ0}·U_H · ∏_{k=1,3,…} Π_{φk}·U_H†·Π_{φk+1}·U_H
//!   even d:  ∏_{k=0,2,…} Π_{φk}·U_H†·Π_{φk+1}·U_H
//!
//! The top-left n×n block of the result, `Poly(H)`, shares H's
//! eigenvectors; each eigenvalue λ maps through the scalar function the
//! same composition produces on the 1×1 matrix [λ] — a complex-scaled
//! polynomial of degree ≤ d with d's parity.
//!
//! Because this block encoding is an involution, the all-zero phase list
//! collapses to `U_H` (odd d) or the identity (even d). The Chebyshev
//! family `T_d(H)` appears at φ = [π/2; d] instead, up to the global
//! phase i^d contributed by `Π_{π/2} = i·(2Π − I)`.

use ndarray::{Array2, s};
use num_complex::Complex64;
use tracing::debug;

use crate::encoding::block_encode;
use crate::error::{QevtError, QevtResult};
use crate::linalg::{dagger, identity};
use crate::projector::projector_phase;

/// A QEVT phase program: an ordered list of projector-phase angles.
///
/// Length d drives d applications of the block encoding and a polynomial
/// response of degree ≤ d. Stateless: each [`Self::transform`] call builds
/// everything fresh from its input.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvalueTransform {
    phases: Vec<f64>,
}

impl EigenvalueTransform {
    /// Wrap a phase list.
    ///
    /// # Errors
    /// [`QevtError::EmptyPhaseSequence`] if the list is empty (the d = 0
    /// composite is undefined).
    pub fn new(phases: Vec<f64>) -> QevtResult<Self> {
        if phases.is_empty() {
            return Err(QevtError::EmptyPhaseSequence);
        }
        Ok(Self { phases })
    }

    /// The Chebyshev program of degree d: `[π/2; d]`, whose transform is
    /// `i^d·T_d(H)`.
    pub fn chebyshev(degree: usize) -> QevtResult<Self> {
        Self::new(vec![std::f64::consts::FRAC_PI_2; degree])
    }

    /// The phase angles, in application order.
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Maximum polynomial degree this program can produce.
    pub fn degree(&self) -> usize {
        self.phases.len()
    }

    /// Build the full 2n×2n composite unitary for a Hermitian input.
    ///
    /// # Errors
    /// Propagates the block-encoding precondition failures
    /// ([`QevtError::NotSquare`], [`QevtError::NotHermitian`],
    /// [`QevtError::SpectralNormExceeded`]).
    pub fn unitary(&self, h: &Array2<Complex64>) -> QevtResult<Array2<Complex64>> {
        let u = block_encode(h)?;
        let u_dag = dagger(&u);
        let n = h.nrows();
        let d = self.phases.len();
        debug!(n, d, "composing QEVT sequence");

        // Parity decides the seed; the paired tail is shared.
        let (mut acc, mut k) = if d % 2 == 1 {
            (projector_phase(self.phases[0], n).dot(&u), 1)
        } else {
            (identity(2 * n), 0)
        };
        while k + 1 < d {
            acc = acc
                .dot(&projector_phase(self.phases[k], n))
                .dot(&u_dag)
                .dot(&projector_phase(self.phases[k + 1], n))
                .dot(&u);
            k += 2;
        }
        Ok(acc)
    }

    /// The polynomial-transformed operator `Poly(H)`: the top-left n×n
    /// block of [`Self::unitary`].
    ///
    /// # Errors
    /// Same as [`Self::unitary`].
    pub fn transform(&self, h: &Array2<Complex64>) -> QevtResult<Array2<Complex64>> {
        let n = h.nrows();
        let composite = self.unitary(h)?;
        Ok(composite.slice(s![..n, ..n]).to_owned())
    }
}

/// One-shot QEVT: apply the phase program `phases` to `h` and return
/// `Poly(H)`.
///
/// # Errors
/// [`QevtError::EmptyPhaseSequence`] for an empty program, plus the
/// block-encoding precondition failures.
pub fn qevt(h: &Array2<Complex64>, phases: &[f64]) -> QevtResult<Array2<Complex64>> {
    EigenvalueTransform::new(phases.to_vec())?.transform(h)
}
