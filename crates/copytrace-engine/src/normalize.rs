use copytrace_types::{ResultSet, ScoreRecord, Tier};
use tracing::warn;

use crate::tier::TierClassifier;

/// Build the working set for a reference wallet.
///
/// Drops the reference wallet itself, re-derives every tier from its score and
/// applies the below-threshold policy. Input order is preserved, and running the
/// result back through `normalize` changes nothing.
pub fn normalize(
    raw: &[ScoreRecord],
    reference_wallet: &str,
    classifier: &TierClassifier,
) -> ResultSet {
    let reference_wallet = reference_wallet.trim();

    let records = raw
        .iter()
        .filter(|record| !record.is_wallet(reference_wallet))
        .map(|record| {
            let mut record = record.clone();
            record.tier = tier_for(&record, classifier);
            record
        })
        .filter(|record| classifier.retains(record.tier))
        .collect();

    ResultSet {
        reference_wallet: reference_wallet.to_string(),
        records,
    }
}

fn tier_for(record: &ScoreRecord, classifier: &TierClassifier) -> Tier {
    if !(0.0..=1.0).contains(&record.score) {
        warn!(
            address = %record.address,
            score = record.score,
            "score outside [0, 1], marking as unknown"
        );
        return Tier::Unknown;
    }

    match classifier.classify(record.score) {
        Ok(tier) => tier,
        Err(err) => {
            warn!(address = %record.address, error = %err, "unclassifiable score");
            Tier::Unknown
        }
    }
}
