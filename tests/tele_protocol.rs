extern crate telesim;

mod utils;

use telesim::gates::{hadamard, rotate, ry};
use telesim::prelude::*;
use utils::*;

const K: f64 = 1.0;
const H: f64 = 1.5;

fn alpha(k: f64, h: f64) -> f64 {
    -((1.0 / 2f64.sqrt()) * (1.0 + h / (h * h + k * k).sqrt()).sqrt()).asin()
}

fn phi(k: f64, h: f64) -> f64 {
    let a = h * h + 2.0 * k * k;
    let b = h * k;
    0.5 * (b / (a * a + b * b).sqrt()).asin()
}

/// `H ry(theta) |0>` as a pair of amplitudes.
fn rotated_then_hadamard(theta: f64) -> [Complex<f64>; 2] {
    let r = ry(theta);
    let h = hadamard::<f64>();
    let (a0, a1) = (r[0], r[2]);
    [h[0] * a0 + h[1] * a1, h[2] * a0 + h[3] * a1]
}

#[test]
fn receive_only() -> QubitResult<()> {
    let (alpha, phi) = (alpha(K, H), phi(K, H));
    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    reg.ry(2.0 * alpha, q0)?;
    reg.i(q0)?;
    reg.ry(2.0 * phi, q0)?;
    reg.h(q0)?;

    let expected = rotated_then_hadamard(2.0 * alpha + 2.0 * phi);
    assert_state_almost_eq(reg.amplitudes(), &expected, 12);
    assert_almost_eq(reg.norm_sqr(), 1.0, 12);
    Ok(())
}

#[test]
fn split_is_product_state() -> QubitResult<()> {
    let (alpha, phi) = (alpha(K, H), phi(K, H));
    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    let q1 = reg.allocate()?;

    reg.ry(2.0 * alpha, q0)?;
    reg.i(q0)?;
    reg.ry(2.0 * phi, q0)?;
    reg.h(q0)?;
    reg.ry(2.0 * alpha, q1)?;
    reg.i(q1)?;
    reg.ry(-2.0 * phi, q1)?;
    reg.h(q1)?;

    let a = rotated_then_hadamard(2.0 * alpha + 2.0 * phi);
    let b = rotated_then_hadamard(2.0 * alpha - 2.0 * phi);
    let expected = [a[0] * b[0], a[0] * b[1], a[1] * b[0], a[1] * b[1]];
    assert_state_almost_eq(reg.amplitudes(), &expected, 12);
    Ok(())
}

#[test]
fn send_receive_rotations_cancel() -> QubitResult<()> {
    let (alpha, phi) = (alpha(K, H), phi(K, H));

    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    let q1 = reg.allocate()?;
    reg.ry(2.0 * alpha, q0)?;
    reg.cnot(q0, q1)?;
    reg.h(q0)?;
    reg.controlled(&rotate(-2.0 * phi), q0, q1)?;
    reg.i(q0)?;
    reg.controlled(&rotate(2.0 * phi), q0, q1)?;
    reg.i(q0)?;
    reg.h(q1)?;

    // Opposite controlled rotations on the same pair undo each other.
    let mut plain: Register = Register::new();
    let p0 = plain.allocate()?;
    let p1 = plain.allocate()?;
    plain.ry(2.0 * alpha, p0)?;
    plain.cnot(p0, p1)?;
    plain.h(p0)?;
    plain.h(p1)?;

    assert_state_almost_eq(reg.amplitudes(), plain.amplitudes(), 12);
    assert_almost_eq(reg.norm_sqr(), 1.0, 12);
    Ok(())
}

#[test]
fn ground_state_preparation() -> QubitResult<()> {
    let alpha = alpha(K, H);
    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    let q1 = reg.allocate()?;
    reg.ry(2.0 * alpha, q0)?;
    reg.cnot(q0, q1)?;

    // cos(alpha)|00> + sin(alpha)|11>
    let (s, c) = alpha.sin_cos();
    let expected = [
        Complex::new(c, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(s, 0.0),
    ];
    assert_state_almost_eq(reg.amplitudes(), &expected, 12);
    Ok(())
}
