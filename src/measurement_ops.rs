#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::utils::{extract_bits, get_bit, qubit_bit};
use crate::{iter, iter_mut, Complex, Precision};
use num_traits::Zero;
use rand::Rng;
use smallvec::SmallVec;

/// Bit positions (inside a basis index) of a list of qubits.
pub type BitPositions = SmallVec<[usize; 8]>;

/// Map qubit `indices` of an `n` qubit state to their bit positions, keeping the order.
pub fn bit_positions(n: usize, indices: &[usize]) -> BitPositions {
    indices.iter().map(|index| qubit_bit(n, *index)).collect()
}

/// Build the `(mask, value)` pair a basis index must match to be consistent with `measured`.
/// Returns `None` when a qubit listed twice is given two different values.
fn outcome_mask(positions: &[usize], measured: usize) -> Option<(usize, usize)> {
    positions
        .iter()
        .enumerate()
        .try_fold((0usize, 0usize), |(mask, value), (i, pos)| {
            let bit = get_bit(measured, i);
            let pos_mask = 1 << pos;
            if mask & pos_mask != 0 && ((value & pos_mask) != 0) != bit {
                None
            } else if bit {
                Some((mask | pos_mask, value | pos_mask))
            } else {
                Some((mask | pos_mask, value))
            }
        })
}

/// Get total magnitude of state.
pub fn prob_magnitude<P: Precision>(input: &[Complex<P>]) -> P {
    iter!(input).map(Complex::<P>::norm_sqr).sum()
}

/// Calculate the probability of a given measurement. `measured` gives the bits (as a usize) which
/// have been measured from the qubits at `indices` in the order supplied by `indices`. `input`
/// gives the state from which to measure, representing a total of `n` qubits.
///
/// Keep in mind that qubits are big-endian to match kron product standards.
/// `|abc>` means `q0=a`, `q1=b`, `q2=c`
///
/// # Examples
/// ```
/// use telesim::gates::from_reals;
/// use telesim::measurement_ops::measure_prob;
///
/// // Make the state |10>, index 0 is always |1> and index 1 is always |0>
/// let input = from_reals(&[0.0, 0.0, 1.0, 0.0]);
///
/// let p = measure_prob(2, 0, &[0], &input);
/// assert_eq!(p, 0.0);
///
/// let p = measure_prob(2, 1, &[0], &input);
/// assert_eq!(p, 1.0);
///
/// let p = measure_prob(2, 1, &[0, 1], &input);
/// assert_eq!(p, 1.0);
///
/// let p = measure_prob(2, 2, &[1, 0], &input);
/// assert_eq!(p, 1.0);
/// ```
pub fn measure_prob<P: Precision>(
    n: usize,
    measured: usize,
    indices: &[usize],
    input: &[Complex<P>],
) -> P {
    let positions = bit_positions(n, indices);
    match outcome_mask(&positions, measured) {
        None => P::zero(),
        Some((mask, value)) => iter!(input)
            .enumerate()
            .filter(|(i, _)| i & mask == value)
            .map(|(_, amp)| amp.norm_sqr())
            .sum(),
    }
}

/// Get probability for each possible measurement of `indices` on `input`.
pub fn measure_probs<P: Precision>(n: usize, indices: &[usize], input: &[Complex<P>]) -> Vec<P> {
    (0usize..1 << indices.len())
        .map(|measured| measure_prob(n, measured, indices, input))
        .collect()
}

/// Sample a measurement from a state `input`.
/// Sample from qubits at `indices` and return bits in order given by `indices`. See
/// `measure_prob` for details.
///
/// # Examples
/// ```
/// use telesim::gates::from_reals;
/// use telesim::measurement_ops::soft_measure;
///
/// // Make the state |10>, index 0 is always |1> and index 1 is always |0>
/// let input = from_reals(&[0.0, 0.0, 1.0, 0.0]);
/// let mut rng = rand::thread_rng();
///
/// let m = soft_measure(2, &[0], &input, &mut rng);
/// assert_eq!(m, 1);
/// let m = soft_measure(2, &[1], &input, &mut rng);
/// assert_eq!(m, 0);
/// let m = soft_measure(2, &[0, 1], &input, &mut rng);
/// assert_eq!(m, 0b01);
/// let m = soft_measure(2, &[1, 0], &input, &mut rng);
/// assert_eq!(m, 0b10);
/// ```
pub fn soft_measure<P: Precision, R: Rng + ?Sized>(
    n: usize,
    indices: &[usize],
    input: &[Complex<P>],
    rng: &mut R,
) -> usize {
    let total = prob_magnitude(input);
    let mut r = P::from(rng.gen::<f64>()).unwrap_or_else(P::zero) * total;
    // Rounding can leave `r` above zero after the last entry, fall back to the last
    // index which could actually have been measured.
    let mut measured_indx = input
        .iter()
        .rposition(|c| !c.is_zero())
        .unwrap_or(0);
    for (i, c) in input.iter().enumerate() {
        let p = c.norm_sqr();
        if p.is_zero() {
            continue;
        }
        r -= p;
        if r <= P::zero() {
            measured_indx = i;
            break;
        }
    }
    extract_bits(measured_indx, &bit_positions(n, indices))
}

/// Normalize the state such that it matches only states which produce the `measured`
/// result and has the same magnitude.
/// This is done by zeroing out the states which cannot give `measured`, and dividing the remaining
/// by `sqrt(p)` for p=`measured_prob`. See `measure_prob` for details.
pub fn measure_state<P: Precision>(
    n: usize,
    indices: &[usize],
    measured: (usize, P),
    state: &mut [Complex<P>],
) {
    let (measured, measured_prob) = measured;
    if measured_prob.is_zero() {
        return;
    }
    let positions = bit_positions(n, indices);
    if let Some((mask, value)) = outcome_mask(&positions, measured) {
        let p_mult = measured_prob.sqrt().recip();
        iter_mut!(state).enumerate().for_each(|(i, amp)| {
            if i & mask != value {
                *amp = Complex::zero();
            } else {
                *amp = *amp * p_mult;
            }
        });
    }
}

/// Selects a measured state from `state` with `rng`, then calls `measure_state` to collapse it.
/// Returns the measured bits and their probability.
pub fn measure<P: Precision, R: Rng + ?Sized>(
    n: usize,
    indices: &[usize],
    state: &mut [Complex<P>],
    rng: &mut R,
) -> (usize, P) {
    let m = soft_measure(n, indices, state, rng);
    let p = measure_prob(n, m, indices, state);
    measure_state(n, indices, (m, p), state);
    (m, p)
}
