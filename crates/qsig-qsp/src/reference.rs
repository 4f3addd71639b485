//! Closed-form target polynomials that QSP sequences approximate.
//!
//! These are the comparison curves: a caller sweeps a sample grid, runs
//! [`crate::sequence::compose`], and checks the response against one of
//! these functions.

/// Chebyshev polynomial of the first kind, `T_d(x)`, by the three-term
/// recurrence `T_{k+1} = 2x·T_k − T_{k−1}`.
pub fn chebyshev(degree: usize, x: f64) -> f64 {
    match degree {
        0 => 1.0,
        1 => x,
        _ => {
            let mut prev = 1.0;
            let mut curr = x;
            for _ in 1..degree {
                let next = 2.0 * x * curr - prev;
                prev = curr;
                curr = next;
            }
            curr
        }
    }
}

/// Sixth-order BB1 survival-probability approximation,
/// `1 − (5/8)(θ/2)⁶`.
///
/// Valid near θ = 0; the true BB1 response departs from this curve at
/// O(θ⁸).
pub fn bb1_response(theta: f64) -> f64 {
    1.0 - (5.0 / 8.0) * (theta / 2.0).powi(6)
}
