// File: src/config.rs
use crate::error::QuizError;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const CACHE_DIR_NAME: &str = "jlpt-quiz";

/// A JLPT difficulty level, N5 being the easiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// The tag jisho.org uses for this level, e.g. `jlpt-n5`.
    pub fn jisho_tag(self) -> String {
        format!("jlpt-{}", self.as_str().to_ascii_lowercase())
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&JlptLevel::N5)
    }
}

impl fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JlptLevel {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuizError::UnknownLevel(s.to_string()))
    }
}

/// Everything the drill loop needs to know about how it was started.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub level: JlptLevel,
    pub offline: bool,
    pub cache_dir: PathBuf,
    pub color: bool,
}

pub fn default_cache_dir() -> PathBuf {
    match dirs::cache_dir() {
        Some(dir) => dir.join(CACHE_DIR_NAME),
        None => PathBuf::from(".").join(CACHE_DIR_NAME),
    }
}
