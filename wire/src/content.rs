//! Content drafts, AI-generation payloads and editor text helpers.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of characters the editor accepts.
pub const CHARACTER_LIMIT: usize = 1000;

/// Number of characters shown in the saved-list preview.
pub const PREVIEW_CHARS: usize = 50;

pub const EMPTY_CONTENT: &str = "Editor content is empty.";

/// Voice requested from the generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Casual, Tone::Friendly, Tone::Formal];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Friendly => "Friendly",
            Self::Formal => "Formal",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Kind of marketing copy being written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    SocialPost,
    BlogPost,
    Email,
    AdCopy,
    ProductDescription,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::SocialPost,
        ContentType::BlogPost,
        ContentType::Email,
        ContentType::AdCopy,
        ContentType::ProductDescription,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SocialPost => "social_post",
            Self::BlogPost => "blog_post",
            Self::Email => "email",
            Self::AdCopy => "ad_copy",
            Self::ProductDescription => "product_description",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SocialPost => "Social post",
            Self::BlogPost => "Blog post",
            Self::Email => "Email",
            Self::AdCopy => "Ad copy",
            Self::ProductDescription => "Product description",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Body of `POST /api/v1/content/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub tone: Tone,
    pub content_type: ContentType,
    pub industry: String,
    pub keywords: Vec<String>,
}

/// Generated copy returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(alias = "generated_text", alias = "generated_content", alias = "text")]
    pub content: String,
}

/// A saved (or about to be saved) piece of content.
///
/// Also the body of `POST /api/v1/content/save`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDraft {
    pub content: String,
    pub tone: Tone,
    pub content_type: ContentType,
    pub industry: String,
    pub keywords: Vec<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub word_count: usize,
    pub character_count: usize,
}

impl ContentDraft {
    /// Build a draft, deriving the counts from `content`.
    #[must_use]
    pub fn new(
        content: String,
        tone: Tone,
        content_type: ContentType,
        industry: String,
        keywords: Vec<String>,
        scheduled_date: Option<NaiveDate>,
    ) -> Self {
        let stats = TextStats::of(&content);
        Self {
            content,
            tone,
            content_type,
            industry,
            keywords,
            scheduled_date,
            word_count: stats.words,
            character_count: stats.characters,
        }
    }

    /// Reject drafts with no visible text.
    ///
    /// # Errors
    ///
    /// Returns [`EMPTY_CONTENT`] when the content is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.content.trim().is_empty() {
            Err(EMPTY_CONTENT)
        } else {
            Ok(())
        }
    }

    /// First [`PREVIEW_CHARS`] characters followed by `...`.
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

/// Word and character counts shown under the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
}

impl TextStats {
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

/// Split a comma-separated keyword field into trimmed, non-empty keywords.
#[must_use]
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Truncate `text` to [`CHARACTER_LIMIT`] characters.
#[must_use]
pub fn clamp_to_limit(text: &str) -> String {
    if text.chars().count() <= CHARACTER_LIMIT {
        text.to_owned()
    } else {
        text.chars().take(CHARACTER_LIMIT).collect()
    }
}

/// Insert `insert` at a cursor expressed in UTF-16 code units.
///
/// Browser text controls report selection offsets in UTF-16 units. An
/// offset past the end appends. The result is clamped to the character
/// limit; the returned cursor sits after the inserted text.
#[must_use]
pub fn insert_at_utf16(content: &str, cursor: usize, insert: &str) -> (String, usize) {
    let byte_idx = utf16_to_byte_index(content, cursor);
    let mut out = String::with_capacity(content.len() + insert.len());
    out.push_str(&content[..byte_idx]);
    out.push_str(insert);
    let new_cursor = out.encode_utf16().count();
    out.push_str(&content[byte_idx..]);

    let clamped = clamp_to_limit(&out);
    let max_cursor = clamped.encode_utf16().count();
    (clamped, new_cursor.min(max_cursor))
}

fn utf16_to_byte_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in text.char_indices() {
        if units >= utf16_offset {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    text.len()
}
