//! QSP sequence composition.
//!
//! A phase list `φ = [φ₀, …, φ_d]` and a signal value `a` define the
//! composite unitary
//!
//!   U(a, φ) = S(φ₀) · W(a) · S(φ₁) · W(a) · … · S(φ_d)
//!
//! whose (0,0) entry is a degree-≤d polynomial in `a`. With all phases
//! zero the real part of that entry is the Chebyshev polynomial `T_d(a)`;
//! other phase lists carve out other polynomials (the BB1 robust-rotation
//! response among them).

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QspError, QspResult};
use crate::unitary::Unitary2;

/// An ordered list of QSP phase angles.
///
/// Order is semantically significant: angles are consumed left-to-right in
/// the composed product. A sequence of length `d + 1` drives `d`
/// applications of the signal operator and yields a degree-≤d response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSequence {
    angles: Vec<f64>,
}

impl PhaseSequence {
    /// Wrap a list of phase angles.
    ///
    /// # Errors
    /// [`QspError::EmptyPhaseSequence`] if the list is empty.
    pub fn new(angles: Vec<f64>) -> QspResult<Self> {
        if angles.is_empty() {
            return Err(QspError::EmptyPhaseSequence);
        }
        Ok(Self { angles })
    }

    /// The trivial phase list of `d + 1` zeros.
    ///
    /// Its composite reproduces the degree-d Chebyshev polynomial:
    /// `Re U(a, φ)[0][0] = T_d(a)`.
    pub fn chebyshev(degree: usize) -> Self {
        Self {
            angles: vec![0.0; degree + 1],
        }
    }

    /// The BB1 robust-rotation phase set `[π/2, −n, 2n, 0, −2n, n]` with
    /// `n = ½·arccos(−¼)`.
    ///
    /// For `a = cos(θ/2)` the survival probability of the composite is
    /// `1 − (5/8)(θ/2)⁶ + O(θ⁸)` — flat to sixth order around θ = 0.
    pub fn bb1() -> Self {
        let n = 0.5 * (-0.25f64).acos();
        Self {
            angles: vec![FRAC_PI_2, -n, 2.0 * n, 0.0, -2.0 * n, n],
        }
    }

    /// The phase angles, in application order.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Number of angles (`d + 1` for a degree-d sequence).
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The polynomial degree this sequence drives: `len() − 1`.
    pub fn degree(&self) -> usize {
        self.angles.len() - 1
    }
}

/// Compose the QSP unitary `U(a, φ)`.
///
/// The accumulator starts at `S(φ₀)`; each later angle right-multiplies by
/// `W(a)` then `S(φ_k)`, in that fixed order. Matrix multiplication does
/// not commute, so the operand order is fixed.
///
/// Stateless and reentrant — callers may sweep `(a, φ)` grids in parallel.
///
/// # Errors
/// [`QspError::SignalOutOfRange`] if `|a| > 1`.
pub fn compose(a: f64, phases: &PhaseSequence) -> QspResult<Unitary2> {
    let w = Unitary2::signal(a)?;
    debug!(a, n_phases = phases.len(), "composing QSP sequence");

    let mut acc = Unitary2::phase(phases.angles()[0]);
    for &phi in &phases.angles()[1..] {
        acc = acc * w * Unitary2::phase(phi);
    }
    Ok(acc)
}

/// The real part of the composite's (0,0) entry — the polynomial response
/// the sequence was designed for.
///
/// # Errors
/// [`QspError::SignalOutOfRange`] if `|a| > 1`.
pub fn signal_response(a: f64, phases: &PhaseSequence) -> QspResult<f64> {
    Ok(compose(a, phases)?.entry(0, 0).re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{bb1_response, chebyshev};

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            PhaseSequence::new(Vec::new()),
            Err(QspError::EmptyPhaseSequence)
        );
    }

    #[test]
    fn single_phase_is_pure_phase_gate() {
        let phases = PhaseSequence::new(vec![0.4]).unwrap();
        let u = compose(0.9, &phases).unwrap();
        let s = Unitary2::phase(0.4);
        assert_eq!(u, s);
    }

    #[test]
    fn chebyshev_identities_hold_on_grid() {
        for d in 1..=3 {
            let phases = PhaseSequence::chebyshev(d);
            for i in -10..=10 {
                let a = f64::from(i) / 10.0;
                let got = signal_response(a, &phases).unwrap();
                let want = chebyshev(d, a);
                assert!(
                    (got - want).abs() < 1e-9,
                    "T_{d}({a}): got {got}, want {want}"
                );
            }
        }
    }

    #[test]
    fn chebyshev_entry_is_purely_real() {
        // With all phases zero U(a, φ) = W(a)^d, whose (0,0) entry is real.
        let phases = PhaseSequence::chebyshev(3);
        for i in -10..=10 {
            let a = f64::from(i) / 10.0;
            let u = compose(a, &phases).unwrap();
            assert!(u.entry(0, 0).im.abs() < 1e-12);
        }
    }

    #[test]
    fn bb1_survival_probability_is_flat_to_sixth_order() {
        let phases = PhaseSequence::bb1();

        // Exactly on resonance the population transfer vanishes.
        let u0 = compose(1.0, &phases).unwrap();
        assert!((u0.prob() - 1.0).abs() < 1e-9);

        // Near θ = 0 the composite tracks 1 − (5/8)(θ/2)⁶; the next
        // correction is O(θ⁸), so the bound widens with |θ|.
        for i in -8..=8 {
            let theta = f64::from(i) / 10.0;
            let a = (theta / 2.0).cos();
            let got = compose(a, &phases).unwrap().prob();
            let want = bb1_response(theta);
            assert!(
                (got - want).abs() < 5e-3,
                "BB1 at θ={theta}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn bb1_error_grows_away_from_resonance() {
        // The approximation is only asymptotic: far from θ = 0 the
        // polynomial overshoots, but the QSP probability stays physical.
        let phases = PhaseSequence::bb1();
        for i in [-20, -15, 15, 20] {
            let theta = f64::from(i) / 10.0;
            let a = (theta / 2.0).cos();
            let p = compose(a, &phases).unwrap().prob();
            assert!((-1e-9..=1.0 + 1e-9).contains(&p), "p={p} unphysical");
        }
    }

    #[test]
    fn composite_is_unitary() {
        let phases = PhaseSequence::new(vec![0.1, -0.7, 2.3, 0.0, 1.1]).unwrap();
        for i in -5..=5 {
            let a = f64::from(i) / 5.0;
            let u = compose(a, &phases).unwrap();
            assert!(u.is_unitary(1e-9));
            let p = u.prob();
            assert!((-1e-12..=1.0 + 1e-12).contains(&p));
        }
    }

    #[test]
    fn out_of_range_signal_propagates() {
        let phases = PhaseSequence::chebyshev(2);
        assert!(matches!(
            compose(1.2, &phases),
            Err(QspError::SignalOutOfRange(_))
        ));
    }
}
