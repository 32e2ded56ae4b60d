use chrono::{DateTime, Utc};

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Unix seconds as a UTC timestamp; out-of-range values are shown raw.
pub fn format_unix(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(ts) => format_timestamp(ts),
        None => secs.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix() {
        assert_eq!(format_unix(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_unix(i64::MAX), i64::MAX.to_string());
    }
}
