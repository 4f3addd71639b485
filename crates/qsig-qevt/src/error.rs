//! Error types for the QEVT crate.

use thiserror::Error;

/// Errors produced by block-encoding construction and QEVT composition.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QevtError {
    /// Phase sequence contains no angles — nothing to compose.
    #[error("phase sequence is empty; a QEVT sequence needs at least one angle")]
    EmptyPhaseSequence,

    /// Input operator is not a square matrix.
    #[error("operator must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// Input operator deviates from Hermiticity beyond tolerance.
    ///
    /// `√(I − H²)` is only well-defined on the Hermitian PSD branch; a
    /// non-Hermitian input would silently produce NaN entries instead.
    #[error("operator is not Hermitian (max deviation {deviation:.3e})")]
    NotHermitian {
        /// Largest entry-wise deviation |H − H†|.
        deviation: f64,
    },

    /// Input operator has spectral norm above 1.
    ///
    /// `I − H²` must stay positive semidefinite for the block encoding to
    /// be unitary.
    #[error("operator spectral norm {norm} exceeds 1; block encoding would not be unitary")]
    SpectralNormExceeded {
        /// The computed spectral norm.
        norm: f64,
    },
}

/// Result type for QEVT operations.
pub type QevtResult<T> = Result<T, QevtError>;
