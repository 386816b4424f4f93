use crate::register::Qubit;
use thiserror::Error;

/// An error from operating on a register.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    /// The qubit handle was not allocated by this register.
    #[error("unknown qubit {qubit}")]
    UnknownQubit {
        /// The offending handle.
        qubit: Qubit,
    },
    /// A controlled gate was given the same qubit as control and target.
    #[error("qubit {qubit} cannot control itself")]
    SameQubit {
        /// The qubit used twice.
        qubit: Qubit,
    },
    /// Allocation would grow the register past its configured size.
    #[error("cannot grow register to {requested} qubits, maximum is {max}")]
    CapacityExceeded {
        /// Number of qubits the allocation would have produced.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A gate matrix failed the unitarity check.
    #[error("matrix is not unitary")]
    NonUnitaryMatrix,
    /// Initial amplitudes were not a valid qubit state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A register configuration was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl QubitError {
    /// Construct an `InvalidState` error.
    pub fn invalid_state<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidState(msg.into())
    }

    /// Construct an `InvalidConfig` error.
    pub fn invalid_config<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidConfig(msg.into())
    }
}

/// A result which may contain a qubit error.
pub type QubitResult<T> = Result<T, QubitError>;
