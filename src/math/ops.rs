//! Vector and matrix primitives used by the forward and backward passes.
//!
//! Every function allocates its result and leaves its operands untouched.
//! Dimension contracts are checked up front and reported as
//! `NetError::ShapeMismatch`.

use crate::error::{check_len, Result};
use crate::math::matrix::Matrix;

/// `M · v`. Requires `cols(M) == len(v)`; the result has `rows(M)` entries.
pub fn mat_vec(m: &Matrix, v: &[f64]) -> Result<Vec<f64>> {
    m.check_consistent("mat_vec")?;
    check_len("mat_vec", m.cols, v.len())?;
    Ok(m.data
        .iter()
        .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
        .collect())
}

/// `Mᵗ · v` without materialising the transpose. Requires `rows(M) == len(v)`;
/// the result has `cols(M)` entries.
pub fn mat_vec_transposed(m: &Matrix, v: &[f64]) -> Result<Vec<f64>> {
    m.check_consistent("mat_vec_transposed")?;
    check_len("mat_vec_transposed", m.rows, v.len())?;
    let mut res = vec![0.0; m.cols];
    for (row, &x) in m.data.iter().zip(v) {
        for (acc, w) in res.iter_mut().zip(row) {
            *acc += w * x;
        }
    }
    Ok(res)
}

/// Element-wise (Hadamard) product.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("hadamard", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// `a · bᵗ`: entry `[i][j]` is `a[i] * b[j]`. Any lengths are accepted.
pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
    Matrix {
        rows: a.len(),
        cols: b.len(),
        data: a.iter()
            .map(|&x| b.iter().map(|&y| x * y).collect())
            .collect(),
    }
}

pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("add", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// `a - b`.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len("sub", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

pub fn scale(x: f64, v: &[f64]) -> Vec<f64> {
    v.iter().map(|&e| x * e).collect()
}

/// Sums two sequences of vectors pairwise (one vector per layer, as with
/// biases). Both the sequence lengths and each pair of vectors must agree.
pub fn add_matrix_sequences(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    check_len("add_matrix_sequences", a.len(), b.len())?;
    a.iter().zip(b).map(|(x, y)| add(x, y)).collect()
}

/// Sums two sequences of matrices pairwise (one matrix per layer, as with
/// weights).
pub fn add_weight_sequences(a: &[Matrix], b: &[Matrix]) -> Result<Vec<Matrix>> {
    check_len("add_weight_sequences", a.len(), b.len())?;
    a.iter().zip(b).map(|(x, y)| x.add(y)).collect()
}
