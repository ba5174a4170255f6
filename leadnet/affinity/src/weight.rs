//! The path-score-to-weight mapping (§4.5).

/// `weight = minW + round((pathScore / 100) * (maxW − minW))`. Returns
/// `None` when the mapped weight is `<= 0` — such a term carries no useful
/// preference and is dropped rather than emitted.
pub fn map_weight(path_score: f64, min_weight: i32, max_weight: i32) -> Option<i32> {
    let span = (max_weight - min_weight) as f64;
    let weight = min_weight as f64 + (path_score / 100.0 * span).round();
    let weight = weight as i32;
    (weight > 0).then_some(weight)
}
