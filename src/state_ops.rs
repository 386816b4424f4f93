#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::gates::Matrix2;
use crate::utils::{flip_bits, qubit_bit};
use crate::{chunks_mut, iter, Complex, Precision, Representation};
use num_traits::Zero;

/// Update one amplitude pair `(|..0..>, |..1..>)` with `mat`, reading both before writing either.
#[inline]
fn apply_pair<P: Precision>(mat: &Matrix2<P>, zero: &mut Complex<P>, one: &mut Complex<P>) {
    let (a0, a1) = (*zero, *one);
    *zero = mat[0] * a0 + mat[1] * a1;
    *one = mat[2] * a0 + mat[3] * a1;
}

/// Apply `mat` to qubit `index` of the `n` qubit `state`, in place.
///
/// The state is walked in blocks of `2 * stride` where `stride` is the weight of the qubit's
/// bit: the lower half of every block has the bit clear and the upper half has it set, so the
/// two halves zipped together are exactly the amplitude pairs the gate mixes.
///
/// # Example
/// ```
/// use telesim::gates::{from_reals, pauli_x};
/// use telesim::state_ops::apply_matrix;
///
/// // |00> -> |10>
/// let mut state = from_reals(&[1.0, 0.0, 0.0, 0.0]);
/// apply_matrix(2, 0, &pauli_x(), &mut state);
/// assert_eq!(state, from_reals(&[0.0, 0.0, 1.0, 0.0]));
/// ```
pub fn apply_matrix<P: Precision>(
    n: usize,
    index: usize,
    mat: &Matrix2<P>,
    state: &mut [Complex<P>],
) {
    let stride = 1 << qubit_bit(n, index);
    chunks_mut!(state, 2 * stride).for_each(|block| {
        let (zeros, ones) = block.split_at_mut(stride);
        zeros
            .iter_mut()
            .zip(ones.iter_mut())
            .for_each(|(zero, one)| apply_pair(mat, zero, one));
    });
}

/// Apply `mat` to qubit `target` of the `n` qubit `state` wherever qubit `control` is `|1>`.
/// Amplitudes with the control bit clear are never touched.
///
/// # Example
/// ```
/// use telesim::gates::{from_reals, pauli_x};
/// use telesim::state_ops::apply_controlled_matrix;
///
/// // CNOT |10> -> |11>
/// let mut state = from_reals(&[0.0, 0.0, 1.0, 0.0]);
/// apply_controlled_matrix(2, 0, 1, &pauli_x(), &mut state);
/// assert_eq!(state, from_reals(&[0.0, 0.0, 0.0, 1.0]));
/// ```
pub fn apply_controlled_matrix<P: Precision>(
    n: usize,
    control: usize,
    target: usize,
    mat: &Matrix2<P>,
    state: &mut [Complex<P>],
) {
    let stride = 1 << qubit_bit(n, target);
    let control_mask = 1 << qubit_bit(n, control);
    chunks_mut!(state, 2 * stride)
        .enumerate()
        .for_each(|(block_index, block)| {
            let base = block_index * 2 * stride;
            let (zeros, ones) = block.split_at_mut(stride);
            zeros
                .iter_mut()
                .zip(ones.iter_mut())
                .enumerate()
                .filter(|(i, _)| (base + i) & control_mask != 0)
                .for_each(|(_, (zero, one))| apply_pair(mat, zero, one));
        });
}

/// Tensor `state` with a single qubit in `amplitudes`, the new qubit becomes the least
/// significant bit: `state (x) (a0|0> + a1|1>)`.
///
/// # Example
/// ```
/// use telesim::gates::from_reals;
/// use telesim::state_ops::kron_qubit;
/// use telesim::Complex;
///
/// let state = from_reals(&[0.0, 1.0]);
/// let zero = [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)];
/// assert_eq!(kron_qubit(&state, &zero), from_reals(&[0.0, 0.0, 1.0, 0.0]));
/// ```
pub fn kron_qubit<P: Precision>(
    state: &[Complex<P>],
    amplitudes: &[Complex<P>; 2],
) -> Vec<Complex<P>> {
    let mut output = vec![Complex::zero(); state.len() * 2];
    chunks_mut!(output, 2)
        .zip(iter!(state))
        .for_each(|(pair, amp)| {
            pair[0] = amp * amplitudes[0];
            pair[1] = amp * amplitudes[1];
        });
    output
}

/// Reorder an `n` qubit big-endian `state` into the requested `representation`.
pub fn to_representation<P: Precision>(
    n: usize,
    state: Vec<Complex<P>>,
    representation: Representation,
) -> Vec<Complex<P>> {
    match representation {
        Representation::BigEndian => state,
        Representation::LittleEndian => {
            let mut output = vec![Complex::zero(); state.len()];
            state
                .into_iter()
                .enumerate()
                .for_each(|(i, amp)| output[flip_bits(n, i)] = amp);
            output
        }
    }
}
