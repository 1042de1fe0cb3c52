use crate::{Error, Result};
use studykit_types::CategoryVector;

/// Tolerance for comparing sums that went through floating addition.
pub const TOLERANCE: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Scale the vector so its entries sum to 1.0.
///
/// A zero-sum vector comes back unchanged so callers can show the zero total.
pub fn normalize(vector: &CategoryVector) -> CategoryVector {
    let total = vector.sum();
    if total == 0.0 {
        return vector.clone();
    }
    vector.map_values(|value| value / total)
}

/// All entries, largest value first; equal values in category order.
pub fn ranked(vector: &CategoryVector) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = vector.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// The `n` largest entries. `n` must be within `1..=vector.len()`.
pub fn top_n(vector: &CategoryVector, n: usize) -> Result<Vec<(String, f64)>> {
    if n == 0 || n > vector.len() {
        return Err(Error::InvalidRange {
            requested: n,
            available: vector.len(),
        });
    }
    let mut entries = ranked(vector);
    entries.truncate(n);
    Ok(entries)
}
