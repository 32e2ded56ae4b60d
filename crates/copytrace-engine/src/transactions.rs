use chrono::{DateTime, Utc};
use copytrace_types::{CopyTransaction, DelayClass};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DelayBreakdown {
    pub very_fast: usize,
    pub fast: usize,
    pub average: usize,
    pub slow: usize,
}

impl DelayBreakdown {
    pub fn count(&self, class: DelayClass) -> usize {
        match class {
            DelayClass::VeryFast => self.very_fast,
            DelayClass::Fast => self.fast,
            DelayClass::Average => self.average,
            DelayClass::Slow => self.slow,
        }
    }
}

/// Headline numbers for a leader/follower drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub count: usize,
    /// Leader timestamp of the first pair, in the order the backend returned them
    pub last_copy_at: Option<DateTime<Utc>>,
    pub average_delay_slots: Option<f64>,
    pub delays: DelayBreakdown,
}

pub fn summarize_transactions(transactions: &[CopyTransaction]) -> TransactionSummary {
    let mut delays = DelayBreakdown::default();
    for tx in transactions {
        match tx.delay_class() {
            DelayClass::VeryFast => delays.very_fast += 1,
            DelayClass::Fast => delays.fast += 1,
            DelayClass::Average => delays.average += 1,
            DelayClass::Slow => delays.slow += 1,
        }
    }

    let average_delay_slots = if transactions.is_empty() {
        None
    } else {
        let total: i64 = transactions.iter().map(|tx| tx.delay_slots).sum();
        Some(total as f64 / transactions.len() as f64)
    };

    let last_copy_at = transactions
        .first()
        .and_then(|tx| DateTime::from_timestamp(tx.leader_transaction.timestamp, 0));

    TransactionSummary {
        count: transactions.len(),
        last_copy_at,
        average_delay_slots,
        delays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_testing::fixtures::copy_transaction;

    #[test]
    fn test_summary_of_empty_list() {
        let summary = summarize_transactions(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.last_copy_at.is_none());
        assert!(summary.average_delay_slots.is_none());
        assert_eq!(summary.delays, DelayBreakdown::default());
    }

    #[test]
    fn test_summary_counts_delay_classes() {
        let transactions = vec![
            copy_transaction("BONK", 1_700_000_500, 2),
            copy_transaction("WIF", 1_700_000_100, 5),
            copy_transaction("BONK", 1_700_000_000, 14),
            copy_transaction("POPCAT", 1_699_999_000, 3),
        ];

        let summary = summarize_transactions(&transactions);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.delays.count(DelayClass::VeryFast), 2);
        assert_eq!(summary.delays.count(DelayClass::Fast), 1);
        assert_eq!(summary.delays.count(DelayClass::Average), 0);
        assert_eq!(summary.delays.count(DelayClass::Slow), 1);
        assert_eq!(summary.average_delay_slots, Some(6.0));
        assert_eq!(
            summary.last_copy_at.map(|ts| ts.timestamp()),
            Some(1_700_000_500)
        );
    }
}
