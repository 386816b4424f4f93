use crate::{Complex, Precision};
use num_traits::{One, Zero};

/// A single-qubit gate stored row-major: `[m00, m01, m10, m11]`.
pub type Matrix2<P> = [Complex<P>; 4];

/// Make a vector of complex numbers whose reals are given by `data`
pub fn from_reals<P: Precision>(data: &[P]) -> Vec<Complex<P>> {
    data.iter().map(|x| Complex::new(*x, P::zero())).collect()
}

/// Make a `Matrix2` from four real entries, row-major.
///
/// # Example
/// ```
/// use telesim::gates::{real_matrix, pauli_x};
/// assert_eq!(real_matrix(0.0f64, 1.0, 1.0, 0.0), pauli_x());
/// ```
pub fn real_matrix<P: Precision>(m00: P, m01: P, m10: P, m11: P) -> Matrix2<P> {
    [
        Complex::new(m00, P::zero()),
        Complex::new(m01, P::zero()),
        Complex::new(m10, P::zero()),
        Complex::new(m11, P::zero()),
    ]
}

fn two<P: Precision>() -> P {
    P::one() + P::one()
}

/// The identity.
pub fn identity<P: Precision>() -> Matrix2<P> {
    real_matrix(P::one(), P::zero(), P::zero(), P::one())
}

/// The Hadamard gate, `(|0><0| + |0><1| + |1><0| - |1><1|)/sqrt(2)`.
pub fn hadamard<P: Precision>() -> Matrix2<P> {
    let m = two::<P>().sqrt().recip();
    real_matrix(m, m, m, -m)
}

/// The pauli X (bit flip or NOT) gate.
pub fn pauli_x<P: Precision>() -> Matrix2<P> {
    real_matrix(P::zero(), P::one(), P::one(), P::zero())
}

/// The pauli Y gate.
pub fn pauli_y<P: Precision>() -> Matrix2<P> {
    [
        Complex::zero(),
        -Complex::i(),
        Complex::i(),
        Complex::zero(),
    ]
}

/// The pauli Z gate.
pub fn pauli_z<P: Precision>() -> Matrix2<P> {
    real_matrix(P::one(), P::zero(), P::zero(), -P::one())
}

/// Phase shift by `theta` on `|1>`.
pub fn phase<P: Precision>(theta: P) -> Matrix2<P> {
    [
        Complex::one(),
        Complex::zero(),
        Complex::zero(),
        Complex::from_polar(P::one(), theta),
    ]
}

/// Rotation by `theta` about the X axis.
pub fn rx<P: Precision>(theta: P) -> Matrix2<P> {
    let (s, c) = (theta / two()).sin_cos();
    let c = Complex::new(c, P::zero());
    let s = Complex::new(P::zero(), -s);
    [c, s, s, c]
}

/// Rotation by `theta` about the Y axis: `[[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]`.
///
/// # Example
/// ```
/// use telesim::gates::ry;
///
/// let m = ry(std::f64::consts::PI);
/// assert!((m[1].re + 1.0).abs() < 1e-12);
/// assert!((m[2].re - 1.0).abs() < 1e-12);
/// assert!(m[0].norm() < 1e-12);
/// ```
pub fn ry<P: Precision>(theta: P) -> Matrix2<P> {
    rotate(theta / two())
}

/// Rotation by `theta` about the Z axis.
pub fn rz<P: Precision>(theta: P) -> Matrix2<P> {
    let half = theta / two();
    [
        Complex::from_polar(P::one(), -half),
        Complex::zero(),
        Complex::zero(),
        Complex::from_polar(P::one(), half),
    ]
}

/// Plane rotation `[[cos v, -sin v], [sin v, cos v]]`, equal to `ry(2v)`.
pub fn rotate<P: Precision>(v: P) -> Matrix2<P> {
    let (s, c) = v.sin_cos();
    real_matrix(c, -s, s, c)
}

/// Check `m^dagger m == 1` within `tolerance`.
///
/// # Example
/// ```
/// use telesim::gates::{is_unitary, hadamard, real_matrix};
///
/// assert!(is_unitary(&hadamard::<f64>(), 1e-9));
/// assert!(!is_unitary(&real_matrix(1.0, 1.0, 0.0, 1.0), 1e-9));
/// ```
pub fn is_unitary<P: Precision>(m: &Matrix2<P>, tolerance: P) -> bool {
    let [a, b, c, d] = *m;
    let col0 = a.norm_sqr() + c.norm_sqr();
    let col1 = b.norm_sqr() + d.norm_sqr();
    let cross = a.conj() * b + c.conj() * d;
    (col0 - P::one()).abs() <= tolerance
        && (col1 - P::one()).abs() <= tolerance
        && cross.norm() <= tolerance
}
