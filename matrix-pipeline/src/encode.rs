//! Canonical serialization of the result matrix.

use crate::matrix::Matrix;

/// Serializes the matrix to its canonical string: every cell's text in
/// row-major order, no delimiters.
///
/// Cell text is `f64`'s shortest round-trip `Display`, which is locale
/// independent and prints integer-valued cells without a decimal point
/// (`19`, not `19.0`). The validation service hashes exactly this form, so
/// the format is a wire contract and must not change.
pub fn canonical_string(matrix: &Matrix<f64>) -> String {
    let mut out = String::with_capacity(matrix.element_count() * 4);
    for row in matrix.rows() {
        for cell in row {
            out.push_str(&cell.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_row_major_without_delimiters() {
        let c = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        assert_eq!(canonical_string(&c), "19224350");
    }

    #[test]
    fn encoding_is_idempotent() {
        let c = Matrix::from_rows(vec![vec![1.5, -2.0], vec![0.25, 7.0]]);
        assert_eq!(canonical_string(&c), canonical_string(&c));
    }

    #[test]
    fn single_cell_change_changes_the_string() {
        let c = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
        let d = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 51.0]]);
        assert_ne!(canonical_string(&c), canonical_string(&d));
    }

    #[test]
    fn single_zero_cell() {
        let c = Matrix::from_rows(vec![vec![0.0]]);
        assert_eq!(canonical_string(&c), "0");
    }
}
