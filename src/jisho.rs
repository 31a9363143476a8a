// File: src/jisho.rs
//! Fetches JLPT-tagged words from the jisho.org search API.

use crate::config::JlptLevel;
use crate::core::types::VocabularyItem;
use crate::error::QuizError;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const SEARCH_URL: &str = "https://jisho.org/api/v1/search/words";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Pages are picked at random from `1..=MAX_PAGE` to vary the cached words.
pub const MAX_PAGE: u32 = 10;

const MISSING_HEADWORD: &str = "N/A";
const GLOSSES_PER_SENSE: usize = 3;
const MAX_GLOSSES: usize = 5;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<JishoWord>,
}

/// One search hit as returned by jisho.org; every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct JishoWord {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub japanese: Vec<JapaneseForm>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JapaneseForm {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
}

impl JishoWord {
    /// Resolves the optional jisho fields into a drill item.
    /// Hits without a slug have no stable identity and are dropped.
    pub fn into_item(self) -> Option<VocabularyItem> {
        let id = self.slug.filter(|slug| !slug.is_empty())?;

        let form = self.japanese.into_iter().next().unwrap_or_default();
        let reading = form.reading.unwrap_or_default();
        let headword = form
            .word
            .filter(|word| !word.is_empty())
            .or_else(|| Some(reading.clone()).filter(|r| !r.is_empty()))
            .unwrap_or_else(|| MISSING_HEADWORD.to_string());

        let glosses = self
            .senses
            .iter()
            .flat_map(|sense| sense.english_definitions.iter().take(GLOSSES_PER_SENSE))
            .take(MAX_GLOSSES)
            .cloned()
            .collect();
        let part_of_speech = self
            .senses
            .first()
            .and_then(|sense| sense.parts_of_speech.first())
            .filter(|pos| !pos.is_empty())
            .cloned();

        Some(VocabularyItem {
            id,
            headword,
            reading,
            glosses,
            part_of_speech,
        })
    }
}

impl SearchResponse {
    pub fn into_items(self) -> Vec<VocabularyItem> {
        self.data.into_iter().filter_map(JishoWord::into_item).collect()
    }
}

pub struct JishoClient {
    client: Client,
    base_url: String,
}

impl JishoClient {
    pub fn new() -> Result<Self, QuizError> {
        Self::with_base_url(SEARCH_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, QuizError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches one result page of words tagged with `level`.
    pub fn fetch_page(
        &self,
        level: JlptLevel,
        page: u32,
    ) -> Result<Vec<VocabularyItem>, QuizError> {
        let keyword = format!("#{}", level.jisho_tag());
        debug!(%level, page, "fetching jisho page");

        let response = self
            .client
            .get(&self.base_url)
            .header(USER_AGENT, concat!("jlpt_quiz/", env!("CARGO_PKG_VERSION")))
            .query(&[("keyword", keyword), ("page", page.to_string())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuizError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let items = response.json::<SearchResponse>()?.into_items();
        info!(%level, page, count = items.len(), "fetched words");
        Ok(items)
    }

    pub fn fetch_random_page<R: Rng>(
        &self,
        level: JlptLevel,
        rng: &mut R,
    ) -> Result<Vec<VocabularyItem>, QuizError> {
        let page = rng.random_range(1..=MAX_PAGE);
        self.fetch_page(level, page)
    }
}
