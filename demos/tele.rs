extern crate telesim;

use telesim::gates::rotate;
use telesim::prelude::*;
use tracing_subscriber::EnvFilter;

// Coupling and transverse field of the two-site Ising model.
const K: f64 = 1.0;
const H: f64 = 1.5;

/// Angle which prepares the two-site ground state.
fn alpha(k: f64, h: f64) -> f64 {
    -((1.0 / 2f64.sqrt()) * (1.0 + h / (h * h + k * k).sqrt()).sqrt()).asin()
}

fn sin(k: f64, h: f64) -> f64 {
    let a = h * h + 2.0 * k * k;
    let b = h * k;
    b / (a * a + b * b).sqrt()
}

fn phi(k: f64, h: f64) -> f64 {
    0.5 * sin(k, h).asin()
}

fn print_state(reg: &Register) {
    print!("{}", reg);
}

/// Sender and receiver share the ground state, the receiver's half is rotated remotely.
fn send_receive() -> QubitResult<Register> {
    let mut reg = Register::new();
    let q0 = reg.allocate()?;
    let q1 = reg.allocate()?;

    let alpha = alpha(K, H);
    reg.ry(2.0 * alpha, q0)?;
    reg.cnot(q0, q1)?;
    println!("2*alpha= {}", 2.0 * alpha);

    reg.h(q0)?;

    let phi = phi(K, H);
    reg.controlled(&rotate(-2.0 * phi), q0, q1)?;
    reg.i(q0)?;
    reg.controlled(&rotate(2.0 * phi), q0, q1)?;
    println!("2*phi= {}", 2.0 * phi);

    reg.i(q0)?;
    reg.h(q1)?;

    print_state(&reg);
    Ok(reg)
}

/// Receiver only.
fn receive() -> QubitResult<Register> {
    let mut reg = Register::new();
    let q0 = reg.allocate()?;

    let alpha = alpha(K, H);
    reg.ry(2.0 * alpha, q0)?;
    reg.i(q0)?;
    println!("2*alpha= {}", 2.0 * alpha);

    let phi = phi(K, H);
    reg.ry(2.0 * phi, q0)?;
    println!("2*phi= {}", 2.0 * phi);

    reg.h(q0)?;

    print_state(&reg);
    Ok(reg)
}

/// Each side prepares and rotates its own qubit.
fn split() -> QubitResult<Register> {
    let mut reg = Register::new();
    let q0 = reg.allocate()?;
    let q1 = reg.allocate()?;

    let alpha = alpha(K, H);
    reg.ry(2.0 * alpha, q0)?;
    reg.i(q0)?;
    println!("2*alpha= {}", 2.0 * alpha);

    let phi = phi(K, H);
    reg.ry(2.0 * phi, q0)?;
    println!("2*phi= {}", 2.0 * phi);

    reg.h(q0)?;

    reg.ry(2.0 * alpha, q1)?;
    reg.i(q1)?;
    reg.ry(-2.0 * phi, q1)?;
    reg.h(q1)?;

    print_state(&reg);
    Ok(reg)
}

fn main() -> QubitResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Split:");
    split()?;
    println!("\nR:");
    receive()?;
    println!("\nSR:");
    send_receive()?;
    Ok(())
}
