/// Set the `bit_index` bit in `num` to `value`.
///
/// # Example
/// ```
/// use telesim::utils::set_bit;
/// assert_eq!(set_bit(0, 1, true), 2);
/// assert_eq!(set_bit(1, 1, true), 3);
/// assert_eq!(set_bit(1, 0, false), 0);
/// ```
#[inline]
pub fn set_bit(num: usize, bit_index: usize, value: bool) -> usize {
    let v = 1 << bit_index;
    if value {
        num | v
    } else {
        num & !v
    }
}

/// Get the `bit_index` bit value from `num`.
///
/// # Example
/// ```
/// use telesim::utils::get_bit;
/// let n = get_bit(2, 1);
/// assert_eq!(n, true);
/// ```
#[inline]
pub fn get_bit(num: usize, bit_index: usize) -> bool {
    ((num >> bit_index) & 1) != 0
}

/// Flips the bits in `num` from `i`th position to `(n-i)`th position.
///
/// # Example
///
/// ```
/// use telesim::utils::flip_bits;
///
/// assert_eq!(flip_bits(3, 0b100), 0b001);
/// assert_eq!(flip_bits(3, 0b010), 0b010);
/// assert_eq!(flip_bits(4, 0b1010), 0b0101);
/// assert_eq!(flip_bits(0, 0), 0);
/// ```
#[inline]
pub fn flip_bits(n: usize, num: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let leading_zeros = 8 * size_of::<usize>() - n;
    num.reverse_bits() >> leading_zeros
}

/// Extracts bits from a number in a particular order.
///
/// # Example
///
/// ```
/// use telesim::utils::extract_bits;
///
/// assert_eq!(extract_bits(0b1010, &[3, 0]), 0b01);
/// ```
#[inline]
pub fn extract_bits(num: usize, indices: &[usize]) -> usize {
    indices.iter().enumerate().fold(0, |acc, (i, index)| {
        let bit = (num >> index) & 1;
        acc | (bit << i)
    })
}

/// Position of qubit `index` inside a basis index of an `n` qubit state.
///
/// Qubits are big-endian to match kron product standards:
/// `|abc>` means `q0=a`, `q1=b`, `q2=c`, so `q0` is the most significant bit.
///
/// # Example
/// ```
/// use telesim::utils::qubit_bit;
///
/// assert_eq!(qubit_bit(3, 0), 2);
/// assert_eq!(qubit_bit(3, 2), 0);
/// ```
#[inline]
pub fn qubit_bit(n: usize, index: usize) -> usize {
    n - 1 - index
}

/// Format the low `n` bits of `num`, most significant first.
///
/// # Example
/// ```
/// use telesim::utils::format_bits;
///
/// assert_eq!(format_bits(3, 0b011), "011");
/// assert_eq!(format_bits(0, 0), "");
/// ```
pub fn format_bits(n: usize, num: usize) -> String {
    (0..n)
        .rev()
        .map(|i| if get_bit(num, i) { '1' } else { '0' })
        .collect()
}
