use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Serialize, Deserialize};

use crate::error::{check_len, NetError, Result};

/// A dense row-major matrix. Row `i` holds the incoming weights of output
/// neuron `i`, so a layer mapping `n` inputs to `m` outputs is `m x n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from explicit rows. Every row must have the same
    /// length; an empty row list yields a `0 x 0` matrix.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        for row in &data {
            check_len("Matrix::from_rows", cols, row.len())?;
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Overwrites every entry with an independent N(0, 1) sample.
    pub fn fill_standard_normal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.data {
            for x in row.iter_mut() {
                *x = rng.sample(StandardNormal);
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Element-wise sum. Fails if the shapes differ in any row.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_consistent("Matrix::add")?;
        rhs.check_consistent("Matrix::add")?;
        check_len("Matrix::add", self.rows, rhs.rows)?;
        check_len("Matrix::add", self.cols, rhs.cols)?;
        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
            .collect();
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    /// Confirms `data` really holds `rows` rows of `cols` entries each, so
    /// that zipping over it never drops values.
    pub(crate) fn check_consistent(&self, op: &'static str) -> Result<()> {
        check_len(op, self.rows, self.data.len())?;
        for row in &self.data {
            check_len(op, self.cols, row.len())?;
        }
        Ok(())
    }

    /// Confirms the matrix is exactly `rows x cols`.
    pub(crate) fn check_shape(&self, rows: usize, cols: usize) -> Result<()> {
        if self.rows != rows || self.cols != cols || self.data.len() != rows {
            return Err(NetError::InvalidLayout(format!(
                "expected a {}x{} matrix, found {}x{}",
                rows, cols, self.data.len(), self.cols
            )));
        }
        if let Some(row) = self.data.iter().find(|r| r.len() != cols) {
            return Err(NetError::InvalidLayout(format!(
                "expected rows of length {}, found one of length {}",
                cols,
                row.len()
            )));
        }
        Ok(())
    }
}
