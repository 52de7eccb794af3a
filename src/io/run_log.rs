use anyhow::Context;

use crate::model::generator::{Generated, GeneratorConfig};

/// Write a plain-text run log: the generator parameters as key=value lines,
/// a blank separator, then the matrix rows. Returns the path written.
pub fn write_run_log(
    out_dir: impl AsRef<std::path::Path>,
    run_id: &str,
    cfg: &GeneratorConfig,
    out: &Generated,
) -> anyhow::Result<std::path::PathBuf> {
    use std::io::Write;

    std::fs::create_dir_all(out_dir.as_ref()).context("create log dir failed")?;
    let path = out_dir.as_ref().join(format!("matgen_{}.txt", run_id));
    let mut f = std::fs::File::create(&path)
        .with_context(|| format!("create run log file failed (path={:?})", path))?;

    writeln!(f, "run_id={}", run_id)?;
    writeln!(f, "size={}", cfg.size)?;
    writeln!(f, "target_det={:.6}", cfg.target_det)?;
    writeln!(f, "max_attempts={}", cfg.max_attempts)?;
    writeln!(f, "attempts={}", out.attempts)?;
    writeln!(f, "det={:.6}", out.det)?;
    writeln!(f)?;
    for row in &out.matrix {
        let line = row
            .iter()
            .map(|v| format!("{:.6}", v))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "{}", line)?;
    }

    Ok(path)
}
