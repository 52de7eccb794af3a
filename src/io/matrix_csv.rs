use anyhow::Context;

/// Load a square matrix from CSV. Rows whose cells contain no numbers
/// (e.g. a header line) are skipped; every remaining row must hold one
/// numeric cell per matrix column.
pub fn load_matrix_csv(path: &str) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open matrix CSV: {}", path))?;

    let mut matrix: Vec<Vec<f64>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Vec<f64> = record
            .iter()
            .filter_map(|field| field.trim().parse::<f64>().ok())
            .collect();
        if !row.is_empty() {
            matrix.push(row);
        }
    }

    let n = matrix.len();
    anyhow::ensure!(n > 0, "matrix CSV empty or unparsable");
    anyhow::ensure!(
        matrix.iter().all(|r| r.len() == n),
        "matrix CSV must be square (n x n)"
    );
    Ok(matrix)
}
