//! Error types for the QSP crate.

use thiserror::Error;

/// Errors produced by QSP sequence construction and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QspError {
    /// Signal value outside the domain of the signal operator.
    ///
    /// `W(a)` contains `√(1−a²)`; outside `[-1, 1]` the operator is no
    /// longer unitary, so callers get an error instead of silent garbage.
    #[error("signal value {0} outside [-1, 1]")]
    SignalOutOfRange(f64),

    /// Phase sequence contains no angles — nothing to compose.
    #[error("phase sequence is empty; a QSP sequence needs at least one angle")]
    EmptyPhaseSequence,
}

/// Result type for QSP operations.
pub type QspResult<T> = Result<T, QspError>;
