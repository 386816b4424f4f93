use crate::errors::{QubitError, QubitResult};

/// Largest register the simulator will ever build. 2^30 amplitudes of `Complex<f64>` is 16GiB.
pub const MAX_SUPPORTED_QUBITS: usize = 30;

/// Default qubit limit, 2^24 amplitudes of `Complex<f64>` is 256MiB.
pub const DEFAULT_MAX_QUBITS: usize = 24;

/// Default tolerance used for unitarity and normalization checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Settings which govern a `Register`.
///
/// # Example
/// ```
/// use telesim::config::RegisterConfig;
///
/// let config = RegisterConfig::default()
///     .max_qubits(4)
///     .validate_unitary(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.get_max_qubits(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisterConfig {
    max_qubits: usize,
    validate_unitary: bool,
    tolerance: f64,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            validate_unitary: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RegisterConfig {
    /// Set the maximum number of qubits a register may allocate.
    pub fn max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Whether gate matrices are checked for unitarity before being applied.
    pub fn validate_unitary(mut self, validate: bool) -> Self {
        self.validate_unitary = validate;
        self
    }

    /// Set the tolerance for unitarity and normalization checks.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Maximum number of qubits.
    pub fn get_max_qubits(&self) -> usize {
        self.max_qubits
    }

    /// Whether unitarity is checked.
    pub fn get_validate_unitary(&self) -> bool {
        self.validate_unitary
    }

    /// Numerical tolerance.
    pub fn get_tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> QubitResult<()> {
        if self.max_qubits > MAX_SUPPORTED_QUBITS {
            Err(QubitError::invalid_config(format!(
                "max_qubits {} is above the supported maximum of {}",
                self.max_qubits, MAX_SUPPORTED_QUBITS
            )))
        } else if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            Err(QubitError::invalid_config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )))
        } else {
            Ok(())
        }
    }
}
