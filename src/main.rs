use std::io::Write;

use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use matgen::io::matrix_text::write_matrix;
use matgen::io::run_log::write_run_log;
use matgen::{GeneratorConfig, MatrixGenerator};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        println!("Usage: matgen <size> <determinant> [seed]");
        std::process::exit(1);
    }

    let size: usize = args[1]
        .parse()
        .with_context(|| format!("invalid size: {}", args[1]))?;
    let target_det: f64 = args[2]
        .parse()
        .with_context(|| format!("invalid determinant: {}", args[2]))?;
    let seed: Option<u64> = match args.get(3) {
        Some(s) => Some(s.parse().with_context(|| format!("invalid seed: {}", s))?),
        None => None,
    };

    let generator = MatrixGenerator::new(GeneratorConfig::new(size, target_det))?;

    let mut rng = match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_entropy(),
    };

    let out = generator.generate(&mut rng)?;

    if let Ok(dir) = std::env::var("MATGEN_LOG_DIR") {
        write_run_log(&dir, &run_id(), &generator.cfg, &out)?;
    }

    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    write_matrix(&mut w, &out.matrix)?;
    w.flush()?;

    Ok(())
}

fn run_id() -> String {
    // avoid a chrono dependency just for an id
    use std::time::{SystemTime, UNIX_EPOCH};
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    millis.to_string()
}
