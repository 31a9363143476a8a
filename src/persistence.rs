// File: src/persistence.rs
use crate::config::JlptLevel;
use crate::core::types::{StatsMap, VocabularyItem};
use crate::error::QuizError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Where cached words and review statistics live, per JLPT level.
pub trait VocabularyStore {
    fn load_words(&self, level: JlptLevel) -> Result<Vec<VocabularyItem>, QuizError>;
    fn save_words(&mut self, level: JlptLevel, words: &[VocabularyItem]) -> Result<(), QuizError>;
    fn load_stats(&self, level: JlptLevel) -> Result<StatsMap, QuizError>;
    fn save_stats(&mut self, level: JlptLevel, stats: &StatsMap) -> Result<(), QuizError>;

    /// Appends words whose id is not cached yet and returns how many were added.
    /// Existing entries keep their position and content. An unreadable cache
    /// is replaced by the new words.
    fn add_words(
        &mut self,
        level: JlptLevel,
        new_words: Vec<VocabularyItem>,
    ) -> Result<usize, QuizError> {
        let mut words = self.load_words(level).unwrap_or_else(|e| {
            warn!(%level, error = %e, "word cache unreadable, rebuilding it");
            Vec::new()
        });
        let mut known: HashSet<String> = words.iter().map(|w| w.id.clone()).collect();
        let before = words.len();

        for word in new_words {
            if known.insert(word.id.clone()) {
                words.push(word);
            }
        }

        let added = words.len() - before;
        if added > 0 {
            self.save_words(level, &words)?;
        }
        Ok(added)
    }
}

/// Pretty-printed JSON files under one cache directory:
/// `words_<LEVEL>.json` and `quiz_stats_<LEVEL>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn words_path(&self, level: JlptLevel) -> PathBuf {
        self.root.join(format!("words_{level}.json"))
    }

    pub fn stats_path(&self, level: JlptLevel) -> PathBuf {
        self.root.join(format!("quiz_stats_{level}.json"))
    }
}

impl VocabularyStore for JsonFileStore {
    fn load_words(&self, level: JlptLevel) -> Result<Vec<VocabularyItem>, QuizError> {
        read_json_or_default(&self.words_path(level))
    }

    fn save_words(&mut self, level: JlptLevel, words: &[VocabularyItem]) -> Result<(), QuizError> {
        write_json_atomically(&self.words_path(level), words)
    }

    fn load_stats(&self, level: JlptLevel) -> Result<StatsMap, QuizError> {
        read_json_or_default(&self.stats_path(level))
    }

    fn save_stats(&mut self, level: JlptLevel, stats: &StatsMap) -> Result<(), QuizError> {
        write_json_atomically(&self.stats_path(level), stats)
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, QuizError> {
    if !path.exists() {
        debug!(path = %path.display(), "no cache file yet");
        return Ok(T::default());
    }
    let reader = BufReader::new(File::open(path)?);
    let value = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), "loaded cache file");
    Ok(value)
}

fn write_json_atomically<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), QuizError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;

    info!(path = %path.display(), "saved cache file");
    Ok(())
}

/// Keeps everything in memory; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    words: HashMap<JlptLevel, Vec<VocabularyItem>>,
    stats: HashMap<JlptLevel, StatsMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(level: JlptLevel, words: Vec<VocabularyItem>) -> Self {
        let mut store = Self::new();
        store.words.insert(level, words);
        store
    }
}

impl VocabularyStore for MemoryStore {
    fn load_words(&self, level: JlptLevel) -> Result<Vec<VocabularyItem>, QuizError> {
        Ok(self.words.get(&level).cloned().unwrap_or_default())
    }

    fn save_words(&mut self, level: JlptLevel, words: &[VocabularyItem]) -> Result<(), QuizError> {
        self.words.insert(level, words.to_vec());
        Ok(())
    }

    fn load_stats(&self, level: JlptLevel) -> Result<StatsMap, QuizError> {
        Ok(self.stats.get(&level).cloned().unwrap_or_default())
    }

    fn save_stats(&mut self, level: JlptLevel, stats: &StatsMap) -> Result<(), QuizError> {
        self.stats.insert(level, stats.clone());
        Ok(())
    }
}
