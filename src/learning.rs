// File: src/learning.rs
use crate::core::types::{ReviewStat, StatsMap};
use chrono::{Local, NaiveDateTime};

/// Records one answer for `id`, creating a zeroed entry the first time the word
/// is seen, and stamps it with the current local time.
pub fn record_review<'a>(stats: &'a mut StatsMap, id: &str, was_correct: bool) -> &'a ReviewStat {
    record_review_at(stats, id, was_correct, Local::now().naive_local())
}

/// [`record_review`] with an explicit review time.
pub fn record_review_at<'a>(
    stats: &'a mut StatsMap,
    id: &str,
    was_correct: bool,
    reviewed_at: NaiveDateTime,
) -> &'a ReviewStat {
    let stat = stats.entry(id.to_string()).or_default();

    if was_correct {
        stat.correct_count = stat.correct_count.saturating_add(1);
    } else {
        stat.incorrect_count = stat.incorrect_count.saturating_add(1);
    }
    stat.last_reviewed = Some(reviewed_at);

    stat
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn first_miss_creates_entry() {
        let mut stats = StatsMap::new();
        record_review_at(&mut stats, "word-1", false, noon());

        assert_eq!(stats.len(), 1);
        assert_eq!(
            stats["word-1"],
            ReviewStat {
                correct_count: 0,
                incorrect_count: 1,
                last_reviewed: Some(noon()),
            }
        );
    }

    #[test]
    fn hits_and_misses_accumulate() {
        let mut stats = StatsMap::new();
        record_review(&mut stats, "猫", true);
        record_review(&mut stats, "猫", true);
        let stat = record_review(&mut stats, "猫", false).clone();

        assert_eq!(stat.correct_count, 2);
        assert_eq!(stat.incorrect_count, 1);
        assert!(stat.last_reviewed.is_some());
    }

    #[test]
    fn other_entries_are_left_alone() {
        let mut stats = StatsMap::new();
        record_review_at(&mut stats, "a", true, noon());
        let before = stats["a"].clone();
        record_review(&mut stats, "b", false);
        assert_eq!(stats["a"], before);
    }

    proptest! {
        #[test]
        fn counters_never_decrease(answers in prop::collection::vec(any::<bool>(), 0..50)) {
            let mut stats = StatsMap::new();
            for was_correct in answers {
                let before = stats.get("w").cloned().unwrap_or_default();
                let after = record_review_at(&mut stats, "w", was_correct, noon()).clone();
                if was_correct {
                    prop_assert_eq!(after.correct_count, before.correct_count + 1);
                    prop_assert_eq!(after.incorrect_count, before.incorrect_count);
                } else {
                    prop_assert_eq!(after.incorrect_count, before.incorrect_count + 1);
                    prop_assert_eq!(after.correct_count, before.correct_count);
                }
                prop_assert_eq!(after.last_reviewed, Some(noon()));
            }
        }
    }
}
