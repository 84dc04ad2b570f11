//! Parallel dense multiplication kernel.

use rayon::prelude::*;

use crate::error::Error;
use crate::matrix::Matrix;

/// Computes C = A × B for square inputs of equal size.
///
/// Standard triple loop: C[i][j] = Σ_k A[i][k]·B[k][j], with k ascending and
/// the integer products accumulated in `f64`. Output rows are partitioned
/// across the rayon pool; each worker writes a disjoint chunk of the result
/// buffer, so the kernel needs no locks. A cell is written only once its full
/// sum is known.
pub fn multiply_parallel(a: &Matrix<i64>, b: &Matrix<i64>) -> Result<Matrix<f64>, Error> {
    if a.size() != b.size() {
        return Err(Error::DimensionMismatch(a.size(), b.size()));
    }

    let n = a.size();
    let mut cells = vec![0.0f64; n * n];

    cells
        .par_chunks_mut(n.max(1))
        .enumerate()
        .for_each(|(i, out_row)| {
            let row_a = a.row(i);
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += (row_a[k] * b.get(k, j)) as f64;
                }
                out_row[j] = sum;
            }
        });

    Ok(Matrix::from_cells(n, cells))
}
