//! Bilingual document model.
//!
//! A [`Book`] is read-only input to the deck. Replacing the whole book is the
//! only supported document change.

use serde::{Deserialize, Serialize};

/// A bilingual word pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    /// Target-language text.
    pub l2: String,
    /// Native-language gloss.
    pub l1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl Word {
    pub fn new(id: impl Into<String>, l2: impl Into<String>, l1: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            l2: l2.into(),
            l1: l1.into(),
            pronunciation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub id: String,
    /// 1-based. Expected to increase within a chapter but not validated.
    pub paragraph_number: u32,
    pub words: Vec<Word>,
    /// Full-sentence gloss.
    #[serde(rename = "translationL1")]
    pub translation_l1: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub language_code: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Every paragraph in chapter order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.chapters.iter().flat_map(|c| c.paragraphs.iter())
    }

    /// Every word in traversal order: chapter, then paragraph, then word.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.paragraphs().flat_map(|p| p.words.iter())
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs().map(|p| p.words.len()).sum()
    }

    pub fn find_word(&self, id: &str) -> Option<&Word> {
        self.words().find(|w| w.id == id)
    }
}
