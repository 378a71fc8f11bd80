//! Custom assertions over `--format json` output.
//!
//! Every command prints a `CommandResultViewModel`: `{ badge, content,
//! suggestions }`. These helpers dig into it with readable failures.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse command stdout as JSON.
pub fn parse_json(stdout: &[u8]) -> Result<Value> {
    serde_json::from_slice(stdout).context("Expected command output to be JSON")
}

/// Assert the badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' string in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}

/// Assert the number of rows in the `content.results` table.
pub fn assert_result_count(json: &Value, expected: usize) -> Result<()> {
    let results = json["content"]["results"]
        .as_array()
        .context("Expected 'content.results' array in JSON")?;

    if results.len() != expected {
        anyhow::bail!("Expected {} results, got {}", expected, results.len());
    }
    Ok(())
}

/// Assert the labels of `content.results`, in order.
pub fn assert_result_labels(json: &Value, expected: &[&str]) -> Result<()> {
    let results = json["content"]["results"]
        .as_array()
        .context("Expected 'content.results' array in JSON")?;

    let labels: Vec<&str> = results
        .iter()
        .filter_map(|r| r["label"].as_str())
        .collect();

    if labels != expected {
        anyhow::bail!("Expected labels {:?}, got {:?}", expected, labels);
    }
    Ok(())
}

/// Assert that `content.issues` holds the given issue kinds, in order.
pub fn assert_issue_kinds(json: &Value, expected: &[&str]) -> Result<()> {
    let issues = json["content"]["issues"]
        .as_array()
        .context("Expected 'content.issues' array in JSON")?;

    let kinds: Vec<&str> = issues.iter().filter_map(|i| i["kind"].as_str()).collect();

    if kinds != expected {
        anyhow::bail!("Expected issue kinds {:?}, got {:?}", expected, kinds);
    }
    Ok(())
}
