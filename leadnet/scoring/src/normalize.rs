//! Min-max rescaling to `[0, 100]`, used after both the structural base
//! score and the final (base minus penalty) score.

/// Rescale `values` to `[0, 100]`. If every value is equal, every result is
/// `50` (there's no dynamic range to map onto).
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return vec![50.0; values.len()];
    }
    values.iter().map(|v| (v - min) / (max - min) * 100.0).collect()
}
