use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

use matgen::io::matrix_csv::load_matrix_csv;
use matgen::io::matrix_text::read_matrix;
use matgen::math::linalg::determinant;

/// Read a matrix (text format on stdin, or from a file given as the single
/// argument; a .csv suffix selects the CSV loader) and print its
/// determinant.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        println!("Usage: det_check [matrix-file]");
        std::process::exit(1);
    }

    let matrix = match args.get(1) {
        Some(path) if path.ends_with(".csv") => load_matrix_csv(path)?,
        Some(path) => {
            let f = File::open(path).with_context(|| format!("failed to open {}", path))?;
            read_matrix(BufReader::new(f))?
        }
        None => read_matrix(std::io::stdin().lock())?,
    };

    println!("{}", determinant(&matrix));
    Ok(())
}
