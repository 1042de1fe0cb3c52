//! Assertions over the `{"content": ...}` JSON envelope.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Ordered `(category, value)` pairs from a `dist show` result.
pub fn ranking(json: &Value) -> Result<Vec<(String, f64)>> {
    let entries = json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let category = entry["category"]
                .as_str()
                .with_context(|| format!("Entry {} missing category", i))?;
            let value = entry["value"]
                .as_f64()
                .with_context(|| format!("Entry {} missing value", i))?;
            Ok((category.to_string(), value))
        })
        .collect()
}

/// Assert that the entries of a `dist show` result sum to `expected`.
pub fn assert_ranking_sum(json: &Value, expected: f64, tolerance: f64) -> Result<()> {
    let sum: f64 = ranking(json)?.iter().map(|(_, v)| v).sum();
    if (sum - expected).abs() > tolerance {
        bail!("Expected entries to sum to {}, got {}", expected, sum);
    }
    Ok(())
}

/// Assert the number of sessions in a `schedule` result.
pub fn assert_session_count(json: &Value, expected: usize) -> Result<()> {
    let sessions = json["content"]["sessions"]
        .as_array()
        .context("Expected 'content.sessions' array in JSON")?;

    if sessions.len() != expected {
        bail!("Expected {} sessions, got {}", expected, sessions.len());
    }
    Ok(())
}

/// Assert the badge level of a result (`success`, `info` or `warning`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}
