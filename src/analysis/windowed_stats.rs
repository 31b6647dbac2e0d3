//! Hash-power statistics over a window of earning records.
//!
//! All sums and averages stay in `Decimal`. Hash powers arrive as many small
//! fractional values and repeated binary float addition drifts visibly in the
//! displayed averages.
//!
//! The window itself is chosen by the caller (see `EarningsWindow`); records
//! handed in here are used as-is.

use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::domain::EarningRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowedStats {
    /// Mean of the miner's own hash power across its records
    pub avg_miner_hashpower: Decimal,
    pub miner_record_count: usize,
    /// Mean of the winning hash power per record
    pub avg_best_hashpower: Decimal,
    pub distinct_challenge_count: usize,
}

impl WindowedStats {
    /// Whole-number display value, halves rounded away from zero.
    pub fn rounded_avg_miner_hashpower(&self) -> Decimal {
        round_for_display(self.avg_miner_hashpower)
    }

    pub fn rounded_avg_best_hashpower(&self) -> Decimal {
        round_for_display(self.avg_best_hashpower)
    }
}

impl fmt::Display for WindowedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg Personal H/s: {} on {} submissions - Avg Pool H/s: {} on {} submissions",
            self.rounded_avg_miner_hashpower(),
            self.miner_record_count,
            self.rounded_avg_best_hashpower(),
            self.distinct_challenge_count
        )
    }
}

fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `None` when the running total leaves the `Decimal` range.
fn mean(mut values: impl Iterator<Item = Decimal>, count: usize) -> Option<Decimal> {
    let total = values.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))?;
    total
        .checked_div(Decimal::from(count))
        .map(|avg| avg.normalize())
}

/// Aggregates `records`. Returns `None` when there are no records, so "no
/// data" never shows up as a zero or NaN average. Totals too large for a
/// `Decimal` also yield `None`.
pub fn aggregate(records: &[EarningRecord]) -> Option<WindowedStats> {
    if records.is_empty() {
        return None;
    }
    let count = records.len();

    let averages = mean(records.iter().map(|r| r.miner_hashpower), count).zip(mean(
        records.iter().map(|r| r.best_challenge_hashpower),
        count,
    ));
    let Some((avg_miner_hashpower, avg_best_hashpower)) = averages else {
        log::warn!("Hash power total of {count} records overflowed; no statistics computed");
        return None;
    };

    Some(WindowedStats {
        avg_miner_hashpower,
        miner_record_count: count,
        avg_best_hashpower,
        distinct_challenge_count: records.iter().map(|r| r.challenge_id.as_str()).unique().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(id: &str, miner: &str, best: &str) -> EarningRecord {
        EarningRecord {
            challenge_id: id.to_string(),
            miner_hashpower: d(miner),
            best_challenge_hashpower: d(best),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_input_is_no_data() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn integer_average_is_exact() {
        let records = vec![
            record("A", "10", "100"),
            record("A", "20", "200"),
            record("B", "30", "300"),
        ];
        let stats = aggregate(&records).unwrap();

        assert_eq!(stats.avg_miner_hashpower, Decimal::from(20));
        assert_eq!(stats.avg_best_hashpower, Decimal::from(200));
        assert_eq!(stats.miner_record_count, 3);
        assert_eq!(stats.distinct_challenge_count, 2);
    }

    #[test]
    fn fractional_values_do_not_drift() {
        // 0.1 summed ten times in f64 is 0.9999999999999999
        let records: Vec<_> = (0..10)
            .map(|i| record(&format!("c{i}"), "0.1", "0.3"))
            .collect();
        let stats = aggregate(&records).unwrap();

        assert_eq!(stats.avg_miner_hashpower, d("0.1"));
        assert_eq!(stats.avg_best_hashpower, d("0.3"));
        assert_eq!(stats.distinct_challenge_count, 10);
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        let records = vec![record("A", "1", "2"), record("B", "2", "3")];
        let stats = aggregate(&records).unwrap();

        assert_eq!(stats.avg_miner_hashpower, d("1.5"));
        assert_eq!(stats.rounded_avg_miner_hashpower(), Decimal::from(2));
        assert_eq!(stats.rounded_avg_best_hashpower(), Decimal::from(3));
        assert_eq!(
            stats.to_string(),
            "Avg Personal H/s: 2 on 2 submissions - Avg Pool H/s: 3 on 2 submissions"
        );
    }

    #[test]
    fn overflowing_total_is_no_data() {
        let mut huge = record("A", "1", "1");
        huge.miner_hashpower = Decimal::MAX;
        assert_eq!(aggregate(&[huge.clone(), huge.clone()]), None);

        // A lone maximum value still averages fine
        let stats = aggregate(&[huge]).unwrap();
        assert_eq!(stats.avg_miner_hashpower, Decimal::MAX);
    }

    #[test]
    fn single_record() {
        let stats = aggregate(&[record("only", "7.25", "9")]).unwrap();
        assert_eq!(stats.avg_miner_hashpower, d("7.25"));
        assert_eq!(stats.distinct_challenge_count, 1);
    }
}
