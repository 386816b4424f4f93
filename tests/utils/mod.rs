#![allow(dead_code)]

use telesim::Complex;

pub fn assert_almost_eq(a: f64, b: f64, prec: i32) {
    let tol = 10.0f64.powi(-prec);
    assert!((a - b).abs() < tol, "{} != {} (tolerance {})", a, b, tol);
}

pub fn assert_state_almost_eq(a: &[Complex<f64>], b: &[Complex<f64>], prec: i32) {
    assert_eq!(a.len(), b.len());
    let tol = 10.0f64.powi(-prec);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x - y).norm() < tol,
            "amplitude {} differs: {:?} != {:?}",
            i,
            x,
            y
        );
    }
}
