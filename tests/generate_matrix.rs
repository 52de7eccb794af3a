use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use matgen::math::approx::approx_eq;
use matgen::math::linalg::determinant;
use matgen::{GeneratorConfig, MatrixGenerator};

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[test]
fn determinant_magnitude_and_sign_match_target() {
    let cases = [(2, 5.0), (3, 5.0), (4, 123.75), (5, 0.5), (3, 1e6)];
    for (seed, (size, target)) in cases.into_iter().enumerate() {
        let generator = MatrixGenerator::new(GeneratorConfig::new(size, target)).unwrap();
        let out = generator.generate(&mut rng(seed as u64)).unwrap();

        assert_eq!(out.matrix.len(), size);
        assert!(out.matrix.iter().all(|row| row.len() == size));
        assert!(out.attempts >= 1 && out.attempts <= 10);

        let det = determinant(&out.matrix);
        assert!(det > 0.0, "size={} target={} det={}", size, target, det);
        assert!(
            approx_eq(det, target, 1e-6),
            "size={} target={} det={}",
            size,
            target,
            det
        );
    }
}

#[test]
fn negative_target_sign_preserved() {
    let generator = MatrixGenerator::new(GeneratorConfig::new(2, -10.0)).unwrap();
    let out = generator.generate(&mut rng(7)).unwrap();
    let det = determinant(&out.matrix);
    assert!(det < 0.0);
    assert!(approx_eq(det, -10.0, 1e-6), "det={}", det);
}

#[test]
fn one_by_one_entry_is_the_determinant() {
    let generator = MatrixGenerator::new(GeneratorConfig::new(1, 7.0)).unwrap();
    let out = generator.generate(&mut rng(1)).unwrap();
    assert_eq!(out.matrix.len(), 1);
    assert_eq!(out.matrix[0].len(), 1);
    assert!(approx_eq(out.matrix[0][0], 7.0, 1e-9));
}

#[test]
fn zero_target_returns_zero_matrix() {
    let generator = MatrixGenerator::new(GeneratorConfig::new(4, 0.0)).unwrap();
    let out = generator.generate(&mut rng(3)).unwrap();
    assert_eq!(out.attempts, 0);
    assert!(out.matrix.iter().flatten().all(|v| *v == 0.0));
    assert_eq!(out.det, 0.0);
    assert_eq!(determinant(&out.matrix), 0.0);
}

#[test]
fn same_seed_same_matrix() {
    let generator = MatrixGenerator::new(GeneratorConfig::new(3, 42.0)).unwrap();
    let a = generator.generate(&mut rng(99)).unwrap();
    let b = generator.generate(&mut rng(99)).unwrap();
    assert_eq!(a.matrix, b.matrix);
    assert_eq!(a.attempts, b.attempts);
}

#[test]
fn exhausted_retry_budget_is_an_error() {
    // with an absurd singularity threshold every sample is rejected
    let mut cfg = GeneratorConfig::new(3, 5.0);
    cfg.singular_eps = f64::MAX;
    let generator = MatrixGenerator::new(cfg).unwrap();
    let err = generator.generate(&mut rng(11)).unwrap_err();
    assert!(err.to_string().contains("10 attempts"), "{}", err);
}

#[test]
fn config_check_rejects_bad_inputs() {
    assert!(MatrixGenerator::new(GeneratorConfig::new(0, 1.0)).is_err());
    assert!(MatrixGenerator::new(GeneratorConfig::new(2, f64::NAN)).is_err());

    let mut cfg = GeneratorConfig::new(2, 1.0);
    cfg.max_attempts = 0;
    assert!(MatrixGenerator::new(cfg).is_err());

    let mut cfg = GeneratorConfig::new(2, 1.0);
    cfg.max_entry = 0.0;
    assert!(MatrixGenerator::new(cfg).is_err());

    let mut cfg = GeneratorConfig::new(2, 1.0);
    cfg.singular_eps = 0.0;
    assert!(MatrixGenerator::new(cfg).is_err());
}
