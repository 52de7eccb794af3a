use anyhow::bail;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::linalg::determinant;
use crate::math::matrix::{negate_row, scale_in_place, zeros};

/// Retry budget for drawing a well-conditioned sample.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
/// Entries are drawn uniformly from [-DEFAULT_MAX_ENTRY, DEFAULT_MAX_ENTRY).
pub const DEFAULT_MAX_ENTRY: f64 = 100.0;
/// Samples with |det| below this are treated as numerically singular.
pub const DEFAULT_SINGULAR_EPS: f64 = 1e-8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub size: usize,
    pub target_det: f64,

    // Sampling knobs
    pub max_attempts: usize,
    pub max_entry: f64,
    pub singular_eps: f64,
}

impl GeneratorConfig {
    pub fn new(size: usize, target_det: f64) -> Self {
        Self {
            size,
            target_det,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_entry: DEFAULT_MAX_ENTRY,
            singular_eps: DEFAULT_SINGULAR_EPS,
        }
    }

    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.size >= 1, "size must be >= 1");
        anyhow::ensure!(self.target_det.is_finite(), "target determinant must be finite");
        anyhow::ensure!(self.max_attempts >= 1, "max_attempts must be >= 1");
        anyhow::ensure!(
            self.max_entry > 0.0 && self.max_entry.is_finite(),
            "max_entry must be positive and finite"
        );
        anyhow::ensure!(self.singular_eps > 0.0, "singular_eps must be > 0");
        Ok(())
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct Generated {
    pub matrix: Vec<Vec<f64>>,
    /// Determinant of the returned matrix as computed, not the target.
    pub det: f64,
    /// Samples drawn; 0 when the zero-target short-circuit fired.
    pub attempts: usize,
}

pub struct MatrixGenerator {
    pub cfg: GeneratorConfig,
}

impl MatrixGenerator {
    pub fn new(cfg: GeneratorConfig) -> anyhow::Result<Self> {
        cfg.check()?;
        Ok(Self { cfg })
    }

    /// Draw random matrices until one is far enough from singular, then
    /// rescale it so its determinant magnitude matches the target, flipping
    /// the first row if the sign came out wrong.
    ///
    /// A zero target skips sampling entirely: uniform scaling drives every
    /// sample to the zero matrix, so that matrix is returned directly.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> anyhow::Result<Generated> {
        let cfg = &self.cfg;
        let n = cfg.size;

        if cfg.target_det == 0.0 {
            return Ok(Generated { matrix: zeros(n), det: 0.0, attempts: 0 });
        }

        for attempt in 1..=cfg.max_attempts {
            let mut m = self.sample(rng);
            let current_det = determinant(&m);
            if current_det.abs() < cfg.singular_eps {
                continue;
            }

            // Scaling every entry by s scales the determinant by s^n.
            let ratio = (cfg.target_det / current_det).abs();
            let scale_factor = ratio.powf(1.0 / n as f64);
            scale_in_place(&mut m, scale_factor);

            if determinant(&m).signum() != cfg.target_det.signum() {
                negate_row(&mut m, 0);
            }

            let det = determinant(&m);
            return Ok(Generated { matrix: m, det, attempts: attempt });
        }

        bail!("no well-conditioned sample after {} attempts", cfg.max_attempts);
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Vec<Vec<f64>> {
        let hi = self.cfg.max_entry;
        let mut m = zeros(self.cfg.size);
        for row in m.iter_mut() {
            for v in row.iter_mut() {
                *v = rng.gen_range(-hi..hi);
            }
        }
        m
    }
}
