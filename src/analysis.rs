//! Payloads for the morpheme and insight services.
//!
//! The language-model calls themselves live outside this crate. This module
//! builds their request bodies from parsed records, computes word frequencies
//! from the words the morpheme service returns, and reads replies that come
//! wrapped in Markdown code fences.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::result::AdRecord;

/// Text of every ad, space-joined: brand name, title, description,
/// promotion, site links, map tags and thumbnail captions. Empty fields are
/// skipped.
#[must_use]
pub fn corpus_text(ads: &[AdRecord]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for ad in ads {
        parts.push(&ad.brand.name);
        parts.push(&ad.ad_text.title);
        parts.push(&ad.ad_text.desc);
        parts.push(&ad.assets.promotion_text);
        parts.extend(ad.assets.sitelink_text.iter().map(String::as_str));
        parts.extend(ad.assets.naver_map_tag.iter().map(String::as_str));
        parts.extend(ad.assets.thumb_nail_text.iter().map(String::as_str));
    }
    parts.retain(|part| !part.trim().is_empty());
    parts.join(" ")
}

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Count words, most frequent first. Ties keep first-appearance order;
/// blank words are ignored.
#[must_use]
pub fn word_frequencies<S: AsRef<str>>(words: &[S]) -> Vec<WordCount> {
    let mut counts: Vec<WordCount> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        match slots.get(word) {
            Some(&slot) => {
                if let Some(entry) = counts.get_mut(slot) {
                    entry.count += 1;
                }
            }
            None => {
                slots.insert(word, counts.len());
                counts.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }
    // stable sort keeps first appearance among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Body of a morpheme analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphemeRequest {
    pub data: Vec<AdRecord>,
}

impl MorphemeRequest {
    /// Fails with [`Error::EmptyInput`] for no ads and [`Error::EmptyText`]
    /// when the ads carry no text.
    pub fn new(ads: Vec<AdRecord>) -> Result<Self> {
        if ads.is_empty() {
            return Err(Error::EmptyInput);
        }
        if corpus_text(&ads).is_empty() {
            return Err(Error::EmptyText);
        }
        Ok(Self { data: ads })
    }

    /// Text sent to the morpheme service.
    #[must_use]
    pub fn text(&self) -> String {
        corpus_text(&self.data)
    }
}

/// Reply shape of the morpheme service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphemeResponse {
    pub morpheme_counts: Vec<WordCount>,
    pub total_words: usize,
}

impl MorphemeResponse {
    /// Build from the word list extracted by the service.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let morpheme_counts = word_frequencies(words);
        let total_words = morpheme_counts.iter().map(|entry| entry.count).sum();
        Self {
            morpheme_counts,
            total_words,
        }
    }
}

/// Body of an insight request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub ads: Vec<AdRecord>,
    pub morpheme_counts: Vec<WordCount>,
}

impl InsightRequest {
    /// Both the ads and the word counts must be non-empty.
    pub fn new(ads: Vec<AdRecord>, morpheme_counts: Vec<WordCount>) -> Result<Self> {
        if ads.is_empty() || morpheme_counts.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self {
            ads,
            morpheme_counts,
        })
    }

    /// The top `limit` words as `word: N회` lines.
    #[must_use]
    pub fn morpheme_digest(&self, limit: usize) -> String {
        self.morpheme_counts
            .iter()
            .take(limit)
            .map(|entry| format!("{}: {}회", entry.word, entry.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Strip a surrounding ```` ```json ```` / ```` ``` ```` fence.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse a JSON reply that may be wrapped in a code fence.
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```  "), "[1]");
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn frequencies_sort_by_count_then_first_seen() {
        let counts = word_frequencies(&["치과", "임플란트", "", "치과", "강남", "임플란트", "치과"]);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.word.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("치과", 3), ("임플란트", 2), ("강남", 1)]);
    }
}
