use crate::config::RegisterConfig;
use crate::errors::{QubitError, QubitResult};
use crate::gates::{self, Matrix2};
use crate::measurement_ops::{measure, measure_prob, measure_probs, prob_magnitude};
use crate::state_ops::{apply_controlled_matrix, apply_matrix, kron_qubit, to_representation};
use crate::utils::{format_bits, get_bit};
use crate::{Complex, Precision, Representation};
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};

static NEXT_REGISTER_ID: AtomicU64 = AtomicU64::new(0);

/// A handle to a single qubit of a `Register`.
///
/// Handles are only valid for the register which allocated them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Qubit {
    register: u64,
    index: usize,
}

impl Qubit {
    /// Position of the qubit in allocation order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}@r{}", self.index, self.register)
    }
}

/// A quantum register: a state vector of `2^n` amplitudes for `n` allocated qubits.
///
/// Qubits are big-endian: the first allocated qubit is the most significant bit of a basis
/// index, so `|abc>` means `q0=a`, `q1=b`, `q2=c`.
///
/// # Example
/// ```
/// use telesim::prelude::*;
///
/// # fn main() -> QubitResult<()> {
/// let mut reg: Register = Register::new();
/// let q0 = reg.allocate()?;
/// let q1 = reg.allocate()?;
///
/// reg.h(q0)?;
/// reg.cnot(q0, q1)?;
///
/// let nonzero: Vec<usize> = reg
///     .state()
///     .filter(|(_, amp)| amp.norm() > 1e-12)
///     .map(|(index, _)| index)
///     .collect();
/// assert_eq!(nonzero, vec![0b00, 0b11]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Register<P: Precision = f64> {
    id: u64,
    n: usize,
    state: Vec<Complex<P>>,
    config: RegisterConfig,
}

impl<P: Precision> Default for Register<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Precision> Register<P> {
    /// Make an empty register with the default config.
    pub fn new() -> Self {
        Self::build(RegisterConfig::default())
    }

    /// Make an empty register with `config`.
    pub fn with_config(config: RegisterConfig) -> QubitResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegisterConfig) -> Self {
        Self {
            id: NEXT_REGISTER_ID.fetch_add(1, Ordering::Relaxed),
            n: 0,
            state: vec![Complex::one()],
            config,
        }
    }

    /// Unique id of this register.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of allocated qubits.
    pub fn num_qubits(&self) -> usize {
        self.n
    }

    /// Settings of this register.
    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    /// Handles for all allocated qubits, in allocation order.
    pub fn qubits(&self) -> impl Iterator<Item = Qubit> + '_ {
        (0..self.n).map(move |index| Qubit {
            register: self.id,
            index,
        })
    }

    /// Allocate a qubit in `|0>`.
    pub fn allocate(&mut self) -> QubitResult<Qubit> {
        self.allocate_with([Complex::one(), Complex::zero()])
    }

    /// Allocate a qubit in `|1>`.
    pub fn allocate_one(&mut self) -> QubitResult<Qubit> {
        self.allocate_with([Complex::zero(), Complex::one()])
    }

    /// Allocate a qubit in `a0|0> + a1|1>`, the amplitudes must be normalized.
    pub fn allocate_with(&mut self, amplitudes: [Complex<P>; 2]) -> QubitResult<Qubit> {
        self.check_capacity(1)?;
        let norm = amplitudes[0].norm_sqr() + amplitudes[1].norm_sqr();
        if (norm - P::one()).abs() > self.tolerance() {
            return Err(QubitError::invalid_state(format!(
                "qubit amplitudes have total probability {}, expected 1",
                norm
            )));
        }
        Ok(self.push_qubit(&amplitudes))
    }

    /// Allocate `count` qubits in `|0>`. Either all are allocated or none are.
    pub fn allocate_many(&mut self, count: usize) -> QubitResult<Vec<Qubit>> {
        self.check_capacity(count)?;
        let zero = [Complex::one(), Complex::zero()];
        Ok((0..count).map(|_| self.push_qubit(&zero)).collect())
    }

    fn check_capacity(&self, count: usize) -> QubitResult<()> {
        let max = self.config.get_max_qubits();
        let requested = self.n.checked_add(count).unwrap_or(usize::MAX);
        if requested > max {
            Err(QubitError::CapacityExceeded { requested, max })
        } else {
            Ok(())
        }
    }

    fn push_qubit(&mut self, amplitudes: &[Complex<P>; 2]) -> Qubit {
        self.state = kron_qubit(&self.state, amplitudes);
        let qubit = Qubit {
            register: self.id,
            index: self.n,
        };
        self.n += 1;
        debug!(register = self.id, qubits = self.n, "allocated qubit");
        qubit
    }

    fn resolve(&self, qubit: Qubit) -> QubitResult<usize> {
        if qubit.register == self.id && qubit.index < self.n {
            Ok(qubit.index)
        } else {
            Err(QubitError::UnknownQubit { qubit })
        }
    }

    /// Configured tolerance, never tighter than the rounding error of `P`.
    fn tolerance(&self) -> P {
        let floor = P::epsilon() * P::from(16.0).unwrap_or_else(P::one);
        P::from(self.config.get_tolerance())
            .unwrap_or_else(P::epsilon)
            .max(floor)
    }

    fn check_matrix(&self, mat: &Matrix2<P>) -> QubitResult<()> {
        if self.config.get_validate_unitary() && !gates::is_unitary(mat, self.tolerance()) {
            warn!(register = self.id, matrix = ?mat, "rejected non-unitary matrix");
            Err(QubitError::NonUnitaryMatrix)
        } else {
            Ok(())
        }
    }

    /// Apply the single qubit gate `mat` to `qubit`.
    pub fn apply(&mut self, mat: &Matrix2<P>, qubit: Qubit) -> QubitResult<()> {
        let index = self.resolve(qubit)?;
        self.check_matrix(mat)?;
        trace!(register = self.id, %qubit, "apply");
        apply_matrix(self.n, index, mat, &mut self.state);
        Ok(())
    }

    /// Apply `mat` to `target` on the part of the state where `control` is `|1>`.
    pub fn apply_controlled(
        &mut self,
        mat: &Matrix2<P>,
        control: Qubit,
        target: Qubit,
    ) -> QubitResult<()> {
        let c = self.resolve(control)?;
        let t = self.resolve(target)?;
        if c == t {
            return Err(QubitError::SameQubit { qubit: control });
        }
        self.check_matrix(mat)?;
        trace!(register = self.id, %control, %target, "apply controlled");
        apply_controlled_matrix(self.n, c, t, mat, &mut self.state);
        Ok(())
    }

    /// Same as `apply_controlled`.
    pub fn controlled(
        &mut self,
        mat: &Matrix2<P>,
        control: Qubit,
        target: Qubit,
    ) -> QubitResult<()> {
        self.apply_controlled(mat, control, target)
    }

    /// Apply the identity.
    pub fn i(&mut self, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::identity(), qubit)
    }

    /// Apply the Hadamard gate.
    pub fn h(&mut self, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::hadamard(), qubit)
    }

    /// Apply the pauli X (NOT) gate.
    pub fn x(&mut self, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::pauli_x(), qubit)
    }

    /// Apply the pauli Y gate.
    pub fn y(&mut self, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::pauli_y(), qubit)
    }

    /// Apply the pauli Z gate.
    pub fn z(&mut self, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::pauli_z(), qubit)
    }

    /// Rotate `qubit` by `theta` about the Y axis.
    pub fn ry(&mut self, theta: P, qubit: Qubit) -> QubitResult<()> {
        self.apply(&gates::ry(theta), qubit)
    }

    /// Flip `target` where `control` is `|1>`.
    pub fn cnot(&mut self, control: Qubit, target: Qubit) -> QubitResult<()> {
        self.apply_controlled(&gates::pauli_x(), control, target)
    }

    /// Swap the states of `a` and `b`.
    pub fn swap(&mut self, a: Qubit, b: Qubit) -> QubitResult<()> {
        self.cnot(a, b)?;
        self.cnot(b, a)?;
        self.cnot(a, b)
    }

    /// Iterate over `(basis index, amplitude)` for all `2^n` basis states in ascending order.
    pub fn state(&self) -> impl Iterator<Item = (usize, Complex<P>)> + '_ {
        self.state.iter().copied().enumerate()
    }

    /// The raw big-endian amplitudes.
    pub fn amplitudes(&self) -> &[Complex<P>] {
        &self.state
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<P> {
        self.state.iter().map(Complex::norm_sqr).collect()
    }

    /// Total probability, `1` up to rounding for any unitary evolution.
    pub fn norm_sqr(&self) -> P {
        prob_magnitude(&self.state)
    }

    /// Consume the register and return its amplitudes in the given qubit order.
    pub fn into_state(self, representation: Representation) -> Vec<Complex<P>> {
        to_representation(self.n, self.state, representation)
    }

    fn resolve_all(&self, qubits: &[Qubit]) -> QubitResult<Vec<usize>> {
        qubits.iter().map(|q| self.resolve(*q)).collect()
    }

    /// Born probability of measuring `measured` on `qubits`, without collapsing the state.
    /// Bit `i` of `measured` is the value of `qubits[i]`.
    pub fn probability_of(&self, qubits: &[Qubit], measured: usize) -> QubitResult<P> {
        let indices = self.resolve_all(qubits)?;
        Ok(measure_prob(self.n, measured, &indices, &self.state))
    }

    /// Probability of every joint outcome of `qubits`, indexed as in `probability_of`.
    pub fn outcome_probabilities(&self, qubits: &[Qubit]) -> QubitResult<Vec<P>> {
        let indices = self.resolve_all(qubits)?;
        Ok(measure_probs(self.n, &indices, &self.state))
    }

    /// Measure `qubits` and collapse the state, see `measure_with_rng`.
    pub fn measure(&mut self, qubits: &[Qubit]) -> QubitResult<Vec<bool>> {
        self.measure_with_rng(qubits, &mut rand::thread_rng())
    }

    /// Measure `qubits` using `rng` for sampling. Returns one bit per requested qubit, in the
    /// order requested. Inconsistent amplitudes are zeroed and the rest renormalized.
    pub fn measure_with_rng<R: Rng + ?Sized>(
        &mut self,
        qubits: &[Qubit],
        rng: &mut R,
    ) -> QubitResult<Vec<bool>> {
        let indices = self.resolve_all(qubits)?;
        if indices.is_empty() {
            return Ok(vec![]);
        }
        let (measured, p) = measure(self.n, &indices, &mut self.state, rng);
        let bits: Vec<bool> = (0..indices.len()).map(|i| get_bit(measured, i)).collect();
        debug!(register = self.id, measured = ?bits, probability = %p, "measured");
        Ok(bits)
    }
}

impl<P: Precision> fmt::Display for Register<P> {
    /// One line per nonzero amplitude: `[bits](re im): probability`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state()
            .filter(|(_, amp)| !amp.is_zero())
            .try_for_each(|(index, amp)| {
                writeln!(
                    f,
                    "[{}]({:.4} {:.4}): {:.4}",
                    format_bits(self.n, index),
                    amp.re,
                    amp.im,
                    amp.norm_sqr()
                )
            })
    }
}
