use std::io::{BufRead, Write};

use anyhow::Context;

/// Write a square matrix in the plain text exchange format: the size on the
/// first line, then one line per row with entries separated by single
/// spaces, using the default float rendering.
pub fn write_matrix(mut w: impl Write, m: &[Vec<f64>]) -> anyhow::Result<()> {
    writeln!(w, "{}", m.len()).context("write matrix size failed")?;
    for row in m {
        let line = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(w, "{}", line).context("write matrix row failed")?;
    }
    Ok(())
}

/// Read a matrix written by [`write_matrix`]. Tokens are whitespace
/// separated; the first must be the size, followed by exactly size*size
/// entries.
pub fn read_matrix(mut r: impl BufRead) -> anyhow::Result<Vec<Vec<f64>>> {
    let mut text = String::new();
    r.read_to_string(&mut text).context("read matrix input failed")?;

    let mut tokens = text.split_whitespace();
    let size_tok = tokens.next().context("empty matrix input")?;
    let n: usize = size_tok
        .parse()
        .with_context(|| format!("invalid matrix size: {}", size_tok))?;
    anyhow::ensure!(n >= 1, "matrix size must be >= 1");

    let mut m = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let tok = tokens
                .next()
                .with_context(|| format!("matrix input ended at row {} col {}", i, j))?;
            let v: f64 = tok
                .parse()
                .with_context(|| format!("invalid matrix entry at row {} col {}: {}", i, j, tok))?;
            row.push(v);
        }
        m.push(row);
    }
    Ok(m)
}
