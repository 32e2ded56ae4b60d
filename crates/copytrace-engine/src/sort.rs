use copytrace_types::{ScoreRecord, SortDirection, SortField};
use std::cmp::Ordering;

/// Ascending comparison of two records on one field.
///
/// Tiers compare by rank, reals by `total_cmp` so NaN never breaks the ordering.
pub fn compare(a: &ScoreRecord, b: &ScoreRecord, field: SortField) -> Ordering {
    match field {
        SortField::Tier => a.tier.rank().cmp(&b.tier.rank()),
        SortField::Score => a.score.total_cmp(&b.score),
        SortField::Hits => a.hits.cmp(&b.hits),
        SortField::Breadth => a.breadth.cmp(&b.breadth),
        SortField::AvgDelay => a.avg_delay.total_cmp(&b.avg_delay),
    }
}

pub fn compare_directed(
    a: &ScoreRecord,
    b: &ScoreRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ordering = compare(a, b, field);
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable sort into a new vector; equal keys keep their input order in both directions.
pub fn sort_records(
    records: &[ScoreRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<ScoreRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_directed(a, b, field, direction));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_testing::fixtures::{RecordBuilder, record};
    use copytrace_types::Tier;

    fn addresses(records: &[ScoreRecord]) -> Vec<&str> {
        records.iter().map(|r| r.address.as_str()).collect()
    }

    #[test]
    fn test_score_desc() {
        let records = vec![record("A", 0.2), record("B", 0.9), record("C", 0.6)];
        let sorted = sort_records(&records, SortField::Score, SortDirection::Desc);
        assert_eq!(addresses(&sorted), ["B", "C", "A"]);
    }

    #[test]
    fn test_tier_uses_rank_not_label() {
        let records = vec![
            RecordBuilder::new("A").tier(Tier::Low).build(),
            RecordBuilder::new("B").tier(Tier::High).build(),
            RecordBuilder::new("C").tier(Tier::Unknown).build(),
            RecordBuilder::new("D").tier(Tier::Medium).build(),
        ];

        let sorted = sort_records(&records, SortField::Tier, SortDirection::Desc);
        assert_eq!(addresses(&sorted), ["B", "D", "A", "C"]);

        let sorted = sort_records(&records, SortField::Tier, SortDirection::Asc);
        assert_eq!(addresses(&sorted), ["C", "A", "D", "B"]);
    }

    #[test]
    fn test_stable_for_equal_keys_in_both_directions() {
        let records = vec![
            RecordBuilder::new("A").hits(5).build(),
            RecordBuilder::new("B").hits(7).build(),
            RecordBuilder::new("C").hits(5).build(),
            RecordBuilder::new("D").hits(5).build(),
        ];

        let desc = sort_records(&records, SortField::Hits, SortDirection::Desc);
        assert_eq!(addresses(&desc), ["B", "A", "C", "D"]);

        let asc = sort_records(&records, SortField::Hits, SortDirection::Asc);
        assert_eq!(addresses(&asc), ["A", "C", "D", "B"]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let records = vec![
            record("A", 0.6),
            record("B", 0.9),
            record("C", 0.6),
            record("D", 0.2),
            record("E", 0.6),
        ];

        let desc = sort_records(&records, SortField::Score, SortDirection::Desc);
        assert_eq!(addresses(&desc), ["B", "A", "C", "E", "D"]);

        let asc = sort_records(&records, SortField::Score, SortDirection::Asc);
        assert_eq!(addresses(&asc), ["D", "A", "C", "E", "B"]);
    }

    #[test]
    fn test_toggle_cycle_reproduces_order() {
        let records = vec![
            RecordBuilder::new("A").avg_delay(3.0).build(),
            RecordBuilder::new("B").avg_delay(1.0).build(),
            RecordBuilder::new("C").avg_delay(3.0).build(),
            RecordBuilder::new("D").avg_delay(9.5).build(),
        ];

        let first = sort_records(&records, SortField::AvgDelay, SortDirection::Desc);
        let middle = sort_records(&records, SortField::AvgDelay, SortDirection::Asc);
        let last = sort_records(&records, SortField::AvgDelay, SortDirection::Desc);

        assert_eq!(addresses(&middle), ["B", "A", "C", "D"]);
        assert_eq!(first, last);
    }

    #[test]
    fn test_breadth_ascending() {
        let records = vec![
            RecordBuilder::new("A").breadth(9).build(),
            RecordBuilder::new("B").breadth(2).build(),
        ];
        let sorted = sort_records(&records, SortField::Breadth, SortDirection::Asc);
        assert_eq!(addresses(&sorted), ["B", "A"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let records = vec![record("A", 0.1), record("B", 0.9)];
        let _ = sort_records(&records, SortField::Score, SortDirection::Desc);
        assert_eq!(addresses(&records), ["A", "B"]);
    }
}
