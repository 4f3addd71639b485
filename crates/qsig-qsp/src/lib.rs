//! `qsig-qsp` — Quantum Signal Processing over 2×2 unitaries.
//!
//! Builds the alternating product
//!
//!   U(a, φ) = S(φ₀) · W(a) · S(φ₁) · … · S(φ_d)
//!
//! of the signal operator `W(a)` and the phase operator `S(φ)`, and reads
//! off the (0,0) entry as a polynomial response in the signal value `a`.
//! Phase lists are supplied by the caller as literal constants — this
//! crate evaluates sequences, it does not synthesise angles.
//!
//! # Quick start
//!
//! ```rust
//! use qsig_qsp::{PhaseSequence, compose, signal_response};
//!
//! // Three zero phases drive two signal applications: T₂(a) = 2a² − 1.
//! let phases = PhaseSequence::chebyshev(2);
//! let a = 0.6;
//! let response = signal_response(a, &phases).unwrap();
//! assert!((response - (2.0 * a * a - 1.0)).abs() < 1e-9);
//!
//! // The full composite is available when the entry alone is not enough.
//! let u = compose(a, &phases).unwrap();
//! assert!(u.is_unitary(1e-9));
//! ```

pub mod error;
pub mod reference;
pub mod sequence;
pub mod unitary;

pub use error::{QspError, QspResult};
pub use sequence::{PhaseSequence, compose, signal_response};
pub use unitary::Unitary2;
