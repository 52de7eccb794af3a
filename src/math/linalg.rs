/// Determinant of a square matrix given as Vec<Vec<f64>>, computed by
/// Gaussian elimination with partial pivoting on a working copy.
pub fn determinant(a: &[Vec<f64>]) -> f64 {
    let n = a.len();
    assert!(n > 0 && a.iter().all(|row| row.len() == n), "Matrix must be square");

    let mut m = a.to_vec();
    let mut det = 1.0;

    for col in 0..n {
        // largest |entry| at or below the diagonal becomes the pivot
        let mut pivot = col;
        for row in (col + 1)..n {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col] == 0.0 {
            return 0.0;
        }
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }

        let pivot_row = m[col].clone();
        det *= pivot_row[col];
        for row in (col + 1)..n {
            let factor = m[row][col] / pivot_row[col];
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                m[row][j] -= factor * pivot_row[j];
            }
        }
    }

    det
}
