use anyhow::{Context, Result};
use copytrace_runtime::CopyTrace;
use copytrace_types::{ScoreRecord, SortDirection, SortField};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::HandlerContext;
use crate::args::{DirectionArg, SortArg};
use crate::presentation::presenters;

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    address: &'a str,
    tier: &'a str,
    score: f64,
    hits: u64,
    breadth: u64,
    avg_delay: f64,
    median_delay: f64,
    freq_norm: f64,
    speed_norm: f64,
    breadth_norm: f64,
}

pub fn handle(
    workspace: &CopyTrace,
    output: &Path,
    sort: Option<SortArg>,
    direction: Option<DirectionArg>,
    ctx: &HandlerContext,
) -> Result<()> {
    let mut controller = workspace.last_result()?;
    if sort.is_some() || direction.is_some() {
        controller.set_sort(
            sort.map(SortField::from).unwrap_or_default(),
            direction.map(SortDirection::from).unwrap_or_default(),
        );
    }

    let records = controller.sorted();
    write_csv(output, &records)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(rows = records.len(), path = %output.display(), "exported leaderboard");

    let reference = controller
        .result()
        .map(|result| result.reference_wallet.clone())
        .unwrap_or_default();

    ctx.render(presenters::present_export(
        reference,
        output,
        records.len(),
        controller.state(),
    ))
}

fn write_csv(path: &Path, records: &[ScoreRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (i, record) in records.iter().enumerate() {
        writer.serialize(CsvRow {
            rank: i + 1,
            address: &record.address,
            tier: record.tier.as_str(),
            score: record.score,
            hits: record.hits,
            breadth: record.breadth,
            avg_delay: record.avg_delay,
            median_delay: record.median_delay,
            freq_norm: record.freq_norm,
            speed_norm: record.speed_norm,
            breadth_norm: record.breadth_norm,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_testing::fixtures::RecordBuilder;
    use copytrace_types::Tier;

    #[test]
    fn test_write_csv_header_and_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        let records = vec![
            RecordBuilder::new("A1").score(0.9).hits(7).tier(Tier::High).build(),
            RecordBuilder::new("B2").score(0.4).tier(Tier::Unknown).build(),
        ];

        write_csv(&path, &records)?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "rank,address,tier,score,hits,breadth,avg_delay,median_delay,freq_norm,speed_norm,breadth_norm"
        );
        assert!(lines[1].starts_with("1,A1,high,0.9,7,"));
        assert!(lines[2].starts_with("2,B2,unknown,0.4,"));
        assert_eq!(lines.len(), 3);
        Ok(())
    }
}
