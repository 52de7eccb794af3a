/// Relative floating-point comparison, scaled by the larger magnitude and
/// clamped below at 1 so values near zero compare absolutely.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() < eps * scale
}
