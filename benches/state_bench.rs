#[macro_use]
extern crate bencher;
extern crate telesim;

use bencher::Bencher;

use telesim::gates::*;
use telesim::state_ops::*;
use telesim::Complex;

fn zero_state(n: usize) -> Vec<Complex<f64>> {
    let mut state = vec![Complex::new(0.0, 0.0); 1 << n];
    state[0] = Complex::new(1.0, 0.0);
    state
}

fn bench_identity(b: &mut Bencher) {
    let n = 10;
    let mat = identity();
    let mut state = zero_state(n);
    b.iter(|| (0..n).for_each(|i| apply_matrix(n, i, &mat, &mut state)));
}

fn bench_hadamard(b: &mut Bencher) {
    let n = 10;
    let mat = hadamard();
    let mut state = zero_state(n);
    b.iter(|| (0..n).for_each(|i| apply_matrix(n, i, &mat, &mut state)));
}

fn bench_cnot_chain(b: &mut Bencher) {
    let n = 10;
    let mat = pauli_x();
    let mut state = zero_state(n);
    apply_matrix(n, 0, &hadamard(), &mut state);
    b.iter(|| (1..n).for_each(|i| apply_controlled_matrix(n, i - 1, i, &mat, &mut state)));
}

fn bench_controlled_rotation(b: &mut Bencher) {
    let n = 12;
    let mat = rotate(0.3);
    let mut state = zero_state(n);
    b.iter(|| apply_controlled_matrix(n, 0, n - 1, &mat, &mut state));
}

fn bench_kron(b: &mut Bencher) {
    let state = zero_state(12);
    let zero = [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)];
    b.iter(|| kron_qubit(&state, &zero));
}

benchmark_group!(
    benches,
    bench_identity,
    bench_hadamard,
    bench_cnot_chain,
    bench_controlled_rotation,
    bench_kron
);
benchmark_main!(benches);
