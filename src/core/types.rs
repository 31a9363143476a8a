// src/core/types.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identity of a vocabulary word; the jisho.org slug.
pub type WordId = String;

/// Per-word review statistics, keyed by [`WordId`].
pub type StatsMap = HashMap<WordId, ReviewStat>;

/// A single word that can be drilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: WordId,
    /// What is shown to the user, usually kanji.
    pub headword: String,
    /// Kana pronunciation; empty when the source had none.
    pub reading: String,
    pub glosses: Vec<String>,
    pub part_of_speech: Option<String>,
}

impl VocabularyItem {
    pub fn new(
        id: impl Into<String>,
        headword: impl Into<String>,
        reading: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            headword: headword.into(),
            reading: reading.into(),
            glosses: Vec::new(),
            part_of_speech: None,
        }
    }

    pub fn with_glosses<I, S>(mut self, glosses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.glosses = glosses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Glosses joined for display, e.g. "school, academy".
    pub fn meaning_line(&self) -> String {
        self.glosses.join(", ")
    }
}

/// Cumulative answer counts for one word.
/// Counters only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStat {
    #[serde(rename = "correct")]
    pub correct_count: u32,
    #[serde(rename = "incorrect")]
    pub incorrect_count: u32,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDateTime>,
}

impl ReviewStat {
    /// Lower means less mastered and therefore more likely to be drilled.
    pub fn priority_score(&self) -> i64 {
        i64::from(self.correct_count) * 10 - i64::from(self.incorrect_count) * 2
    }
}
