extern crate telesim;

mod utils;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use telesim::gates::*;
use telesim::prelude::*;
use utils::*;

fn random_gate<R: Rng>(rng: &mut R) -> Matrix2<f64> {
    let theta = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
    match rng.gen_range(0..8) {
        0 => identity(),
        1 => hadamard(),
        2 => pauli_x(),
        3 => pauli_y(),
        4 => pauli_z(),
        5 => ry(theta),
        6 => rz(theta),
        _ => rx(theta),
    }
}

#[test]
fn norm_is_preserved_by_random_circuits() -> QubitResult<()> {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let mut reg: Register = Register::new();
        let n = rng.gen_range(1..7);
        let qubits = reg.allocate_many(n)?;
        assert_almost_eq(reg.norm_sqr(), 1.0, 9);

        for _ in 0..40 {
            let gate = random_gate(&mut rng);
            let target = qubits[rng.gen_range(0..n)];
            if n > 1 && rng.gen_bool(0.5) {
                let control = qubits[rng.gen_range(0..n)];
                if control != target {
                    reg.apply_controlled(&gate, control, target)?;
                }
            } else {
                reg.apply(&gate, target)?;
            }
            assert_almost_eq(reg.norm_sqr(), 1.0, 9);
        }
    }
    Ok(())
}

#[test]
fn identity_is_exact() -> QubitResult<()> {
    let mut reg: Register = Register::new();
    let qubits = reg.allocate_many(3)?;
    reg.h(qubits[0])?;
    reg.ry(0.37, qubits[1])?;
    reg.apply(&rz(1.1), qubits[2])?;
    reg.cnot(qubits[0], qubits[2])?;
    let before = reg.amplitudes().to_vec();

    for q in qubits.iter() {
        reg.i(*q)?;
        assert_eq!(reg.amplitudes(), &before[..]);
    }
    Ok(())
}

#[test]
fn hadamard_twice_restores_state() -> QubitResult<()> {
    let mut reg: Register = Register::new();
    let qubits = reg.allocate_many(3)?;
    reg.ry(0.9, qubits[0])?;
    reg.apply(&phase(0.4), qubits[1])?;
    reg.cnot(qubits[0], qubits[1])?;
    let before = reg.amplitudes().to_vec();

    for q in qubits.iter() {
        reg.h(*q)?;
        reg.h(*q)?;
        assert_state_almost_eq(reg.amplitudes(), &before, 12);
    }
    Ok(())
}

#[test]
fn allocation_keeps_existing_amplitudes() -> QubitResult<()> {
    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    reg.ry(1.2, q0)?;
    let before = reg.amplitudes().to_vec();

    let q1 = reg.allocate()?;
    // New qubit is the least significant bit and starts in |0>.
    let after = reg.amplitudes();
    assert_eq!(after[0b00], before[0]);
    assert_eq!(after[0b10], before[1]);
    assert_eq!(after[0b01], Complex::new(0.0, 0.0));
    assert_eq!(after[0b11], Complex::new(0.0, 0.0));
    assert_almost_eq(reg.probability_of(&[q1], 0)?, 1.0, 12);
    Ok(())
}

#[test]
fn little_endian_readout() -> QubitResult<()> {
    let mut reg: Register = Register::new();
    let q0 = reg.allocate()?;
    let _q1 = reg.allocate()?;
    let _q2 = reg.allocate()?;
    reg.x(q0)?;
    // |100> big endian is |001> little endian.
    let state = reg.into_state(Representation::LittleEndian);
    assert_eq!(state[0b001], Complex::new(1.0, 0.0));
    Ok(())
}

#[test]
fn state_is_requeryable() -> QubitResult<()> {
    let mut reg: Register = Register::new();
    let q = reg.allocate()?;
    reg.h(q)?;
    let first: Vec<_> = reg.state().collect();
    let second: Vec<_> = reg.state().collect();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
        vec![0, 1]
    );
    Ok(())
}
