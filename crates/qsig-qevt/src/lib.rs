//! `qsig-qevt` — Quantum Eigenvalue Transformation via block encodings.
//!
//! Lifts QSP from scalars to Hermitian operators: a Hermitian H with
//! spectral norm ≤ 1 is embedded into the 2n×2n unitary
//! `U_H = [[H, √(I−H²)], [√(I−H²), −H]]`, and an alternating sequence of
//! `U_H`, `U_H†` and projector-phase gates produces `Poly(H)` — an
//! operator with H's eigenvectors and polynomially transformed
//! eigenvalues — in its top-left block.
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use num_complex::Complex64;
//! use qsig_qevt::qevt;
//!
//! let z = |x: f64| Complex64::new(x, 0.0);
//! let h = array![[z(0.5), z(0.0)], [z(0.0), z(-0.25)]];
//!
//! // A single zero-angle step reproduces H itself.
//! let p = qevt(&h, &[0.0]).unwrap();
//! assert!((p[[0, 0]] - h[[0, 0]]).norm() < 1e-9);
//! assert!((p[[1, 1]] - h[[1, 1]]).norm() < 1e-9);
//! ```

pub mod encoding;
pub mod error;
pub mod linalg;
pub mod projector;
pub mod sequence;

pub use encoding::block_encode;
pub use error::{QevtError, QevtResult};
pub use projector::projector_phase;
pub use sequence::{EigenvalueTransform, qevt};
