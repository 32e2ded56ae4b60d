//! Assertions over the CLI's `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a leaderboard page holds `expected` rows.
pub fn assert_row_count(json: &Value, expected: usize) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert the addresses of the rows, in display order.
pub fn assert_row_addresses(json: &Value, expected: &[&str]) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    let addresses: Vec<&str> = rows
        .iter()
        .map(|row| row["address"].as_str().unwrap_or_default())
        .collect();

    if addresses != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}", expected, addresses);
    }

    Ok(())
}

/// Assert that no row belongs to `wallet` (case-insensitive).
pub fn assert_wallet_absent(json: &Value, wallet: &str) -> Result<()> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    for (i, row) in rows.iter().enumerate() {
        let address = row["address"]
            .as_str()
            .with_context(|| format!("Row {} missing address", i))?;
        if address.eq_ignore_ascii_case(wallet) {
            anyhow::bail!("Row {} is the reference wallet {}", i, wallet);
        }
    }

    Ok(())
}

/// Assert the per-tier counts of the distribution.
pub fn assert_distribution(
    json: &Value,
    high: u64,
    medium: u64,
    low: u64,
    unknown: u64,
) -> Result<()> {
    let distribution = &json["content"]["distribution"];
    let actual = (
        distribution["high"].as_u64(),
        distribution["medium"].as_u64(),
        distribution["low"].as_u64(),
        distribution["unknown"].as_u64(),
    );
    let expected = (Some(high), Some(medium), Some(low), Some(unknown));

    if actual != expected {
        anyhow::bail!("Expected distribution {:?}, got {:?}", expected, actual);
    }

    Ok(())
}
