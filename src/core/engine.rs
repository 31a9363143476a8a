use crate::config::JlptLevel;
use crate::core::converter::Romanizer;
use crate::core::normalize::normalize_romaji;
use crate::core::selector::select_next;
use crate::core::types::{StatsMap, VocabularyItem, WordId};
use crate::error::QuizError;
use crate::learning::record_review;
use crate::persistence::VocabularyStore;
use rand::Rng;
use tracing::{info, warn};

/// One word put to the user, with the answer it expects.
#[derive(Debug, Clone)]
pub struct Question {
    pub item: VocabularyItem,
    /// Romaji generated from the reading, shown when the user gives up.
    pub expected_romaji: String,
    expected_key: String,
}

impl Question {
    pub fn new(item: VocabularyItem, romanizer: &Romanizer) -> Self {
        let expected_romaji = romanizer.transliterate(&item.reading);
        let expected_key = normalize_romaji(&expected_romaji);
        Self {
            item,
            expected_romaji,
            expected_key,
        }
    }

    /// Whether a typed answer matches once both sides are normalized.
    pub fn accepts(&self, answer: &str) -> bool {
        normalize_romaji(answer) == self.expected_key
    }
}

/// Answers given during the current run only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionTally {
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Percentage of correct answers, `None` before the first answer.
    pub fn accuracy(&self) -> Option<f64> {
        match self.answered() {
            0 => None,
            total => Some(f64::from(self.correct) / f64::from(total) * 100.0),
        }
    }
}

// Owns the cached words and stats for one level and writes every answer
// straight back to the store.
pub struct QuizEngine<S: VocabularyStore> {
    level: JlptLevel,
    store: S,
    words: Vec<VocabularyItem>,
    stats: StatsMap,
    romanizer: Romanizer,
    tally: SessionTally,
}

impl<S: VocabularyStore> QuizEngine<S> {
    /// Loads the level's cache. Unreadable cache files are logged and treated
    /// as empty so a damaged cache never blocks a session.
    pub fn open(store: S, level: JlptLevel) -> Self {
        let words = store.load_words(level).unwrap_or_else(|e| {
            warn!(%level, error = %e, "could not read word cache, starting empty");
            Vec::new()
        });
        let stats = store.load_stats(level).unwrap_or_else(|e| {
            warn!(%level, error = %e, "could not read quiz stats, starting empty");
            StatsMap::new()
        });
        info!(%level, words = words.len(), reviewed = stats.len(), "quiz engine ready");

        Self {
            level,
            store,
            words,
            stats,
            romanizer: Romanizer::new(),
            tally: SessionTally::default(),
        }
    }

    pub fn level(&self) -> JlptLevel {
        self.level
    }

    pub fn words(&self) -> &[VocabularyItem] {
        &self.words
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Caches freshly fetched words and reloads the word list. If the cache
    /// still cannot be read back, the current list is kept.
    pub fn merge_words(&mut self, fetched: Vec<VocabularyItem>) -> Result<usize, QuizError> {
        let added = self.store.add_words(self.level, fetched)?;
        match self.store.load_words(self.level) {
            Ok(words) => self.words = words,
            Err(e) => warn!(level = %self.level, error = %e, "word cache unreadable after merge"),
        }
        info!(level = %self.level, added, total = self.words.len(), "merged fetched words");
        Ok(added)
    }

    pub fn next_question<R: Rng>(&self, rng: &mut R) -> Option<Question> {
        select_next(&self.words, &self.stats, rng)
            .map(|item| Question::new(item.clone(), &self.romanizer))
    }

    /// Counts the answer for this run, updates the word's stats and saves them.
    pub fn record(&mut self, id: &WordId, correct: bool) -> Result<(), QuizError> {
        if correct {
            self.tally.correct += 1;
        } else {
            self.tally.incorrect += 1;
        }
        record_review(&mut self.stats, id, correct);
        self.store.save_stats(self.level, &self.stats)
    }
}
