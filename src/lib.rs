#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! A small state-vector quantum simulator.
//!
//! A `Register` holds the `2^n` complex amplitudes of `n` qubits. Qubits are allocated one at a
//! time in `|0>`, gates are applied in place, and the state can be read back or measured.
//!
//! # Example (Bell pair)
//! ```
//! use telesim::prelude::*;
//!
//! # fn main() -> QubitResult<()> {
//! let mut reg: Register = Register::new();
//! let q0 = reg.allocate()?;
//! let q1 = reg.allocate()?;
//!
//! // (|00> + |11>)/sqrt(2)
//! reg.h(q0)?;
//! reg.cnot(q0, q1)?;
//!
//! // Both qubits always agree.
//! let bits = reg.measure(&[q0, q1])?;
//! assert_eq!(bits[0], bits[1]);
//! # Ok(())
//! # }
//! ```
//!
//! # Arbitrary controlled rotations
//! ```
//! use telesim::prelude::*;
//! use telesim::gates::rotate;
//!
//! # fn main() -> QubitResult<()> {
//! let mut reg: Register = Register::new();
//! let q0 = reg.allocate_one()?;
//! let q1 = reg.allocate()?;
//!
//! reg.apply_controlled(&rotate(0.3), q0, q1)?;
//! assert!((reg.norm_sqr() - 1.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

/// Settings for registers.
pub mod config;
/// Register error types.
pub mod errors;
/// Named single-qubit gate matrices.
pub mod gates;
/// Born rule probabilities, sampling and collapse on raw state vectors.
pub mod measurement_ops;
/// Helpers for converting from synchronous to parallel iterators.
pub mod rayon_helper;
/// The quantum register.
pub mod register;
/// Gate application and tensor extension on raw state vectors.
pub mod state_ops;
/// Reusable types.
pub mod types;
/// Utility functions for bit and index manipulation
pub mod utils;

pub use num_complex::Complex;
pub use rand;
pub use types::*;

/// Commonly used types and traits.
/// ```
/// use telesim::prelude::*;
/// ```
pub mod prelude {
    pub use super::*;
    pub use crate::config::RegisterConfig;
    pub use crate::errors::*;
    pub use crate::gates::Matrix2;
    pub use crate::register::{Qubit, Register};
}
