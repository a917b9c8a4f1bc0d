//! 8×8 discrete cosine transform.
//!
//! Both directions use one orthonormal basis matrix, computed once per process
//! and shared read-only afterwards:
//!
//! `basis[i][j] = c(i) * sqrt(2/8) * cos((2j + 1) * i * π / 16)`, with
//! `c(0) = 1/√2` and `c(i > 0) = 1`.
//!
//! The forward transform is `basis · B · basisᵀ`, the inverse is
//! `basisᵀ · C · basis`.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::block::{Block, BLOCK_SIZE};

/// Output of the forward transform, `[0][0]` is the DC coefficient.
pub type CoefficientMatrix = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

type Matrix = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

static BASIS: OnceLock<Matrix> = OnceLock::new();

/// The DCT-II basis matrix, rows are frequencies and columns are samples.
pub fn basis() -> &'static Matrix {
    BASIS.get_or_init(|| {
        let n = BLOCK_SIZE as f64;
        let mut m = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in m.iter_mut().enumerate() {
            let ci = if i == 0 { 1.0 / 2.0f64.sqrt() } else { 1.0 };
            for (j, v) in row.iter_mut().enumerate() {
                *v = ci
                    * (2.0 / n).sqrt()
                    * ((2 * j + 1) as f64 * i as f64 * PI / (2.0 * n)).cos();
            }
        }
        m
    })
}

/// Forward DCT of a luminance block.
pub fn forward(block: &Block) -> CoefficientMatrix {
    let b = basis();
    multiply(&multiply(b, block), &transpose(b))
}

/// Inverse DCT, turns coefficients back into a luminance block.
pub fn inverse(coefficients: &CoefficientMatrix) -> Block {
    let b = basis();
    multiply(&multiply(&transpose(b), coefficients), b)
}

fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let mut result = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = (0..BLOCK_SIZE).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    result
}

fn transpose(m: &Matrix) -> Matrix {
    let mut t = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in m.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            t[j][i] = *v;
        }
    }
    t
}
