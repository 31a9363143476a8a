// File: src/core/selector.rs
use crate::core::types::{StatsMap, VocabularyItem};
use rand::Rng;
use tracing::debug;

/// How many of the lowest-scored words compete for the next slot.
pub const POOL_SIZE: usize = 10;

/// Score of a word given the current statistics; unseen words score 0.
pub fn priority_score(stats: &StatsMap, item: &VocabularyItem) -> i64 {
    stats.get(&item.id).map_or(0, |stat| stat.priority_score())
}

/// Picks the next word to drill, uniformly at random from the
/// [`POOL_SIZE`] least-mastered candidates.
pub fn select_next<'a, R: Rng>(
    candidates: &'a [VocabularyItem],
    stats: &StatsMap,
    rng: &mut R,
) -> Option<&'a VocabularyItem> {
    select_next_with(candidates, stats, |pool_len| rng.random_range(0..pool_len))
}

/// Like [`select_next`], with the random draw supplied by `choose`, which is
/// called once with the pool length and must return an index below it.
/// Out-of-range answers are clamped to the last pool entry.
///
/// Returns `None` only for an empty candidate list.
pub fn select_next_with<'a, F>(
    candidates: &'a [VocabularyItem],
    stats: &StatsMap,
    choose: F,
) -> Option<&'a VocabularyItem>
where
    F: FnOnce(usize) -> usize,
{
    if candidates.is_empty() {
        return None;
    }

    let mut scored: Vec<(i64, &VocabularyItem)> = candidates
        .iter()
        .map(|item| (priority_score(stats, item), item))
        .collect();
    // Stable: ties keep input order, so the pool boundary is deterministic.
    scored.sort_by_key(|&(score, _)| score);
    scored.truncate(POOL_SIZE);

    let index = choose(scored.len()).min(scored.len() - 1);
    let (score, chosen) = scored[index];
    debug!(pool = scored.len(), index, score, id = %chosen.id, "selected next word");
    Some(chosen)
}
