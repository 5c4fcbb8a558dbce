//! Content editor form state and saved-draft list.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use chrono::NaiveDate;
use wire::ApiError;
use wire::DraftList;
use wire::content::{self, ContentDraft, ContentType, GenerateContentRequest, TextStats, Tone};

pub const SAVED_MESSAGE: &str = "Content saved.";
pub const GENERATE_FAILED: &str = "AI generation failed.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentEditorState {
    /// Markdown source.
    pub content: String,
    /// Caret position in UTF-16 units, as reported by the textarea.
    pub cursor: usize,
    pub tone: Tone,
    pub content_type: ContentType,
    pub industry: String,
    pub keywords: String,
    pub prompt: String,
    pub scheduled_date: Option<NaiveDate>,
    pub drafts: DraftList<ContentDraft>,
    pub busy: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl ContentEditorState {
    /// Replace the document, truncating at the character limit.
    pub fn set_content(&mut self, text: &str) {
        self.content = content::clamp_to_limit(text);
    }

    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.content)
    }

    pub fn generate_request(&self) -> GenerateContentRequest {
        let prompt = self.prompt.trim();
        GenerateContentRequest {
            prompt: (!prompt.is_empty()).then(|| prompt.to_owned()),
            tone: self.tone,
            content_type: self.content_type,
            industry: self.industry.trim().to_owned(),
            keywords: content::parse_keywords(&self.keywords),
        }
    }

    /// Insert generated copy at the caret.
    pub fn apply_generated(&mut self, generated: &str) {
        let (next, cursor) = content::insert_at_utf16(&self.content, self.cursor, generated.trim());
        self.set_content(&next);
        self.cursor = cursor;
    }

    /// Snapshot of the form as a draft.
    pub fn draft(&self) -> ContentDraft {
        ContentDraft::new(
            self.content.clone(),
            self.tone,
            self.content_type,
            self.industry.trim().to_owned(),
            content::parse_keywords(&self.keywords),
            self.scheduled_date,
        )
    }

    /// Validate and mark busy. Returns the draft to send.
    pub fn begin_save(&mut self) -> Option<ContentDraft> {
        if self.busy {
            return None;
        }
        let draft = self.draft();
        if let Err(msg) = draft.validate() {
            self.error = Some(msg.to_owned());
            self.notice = None;
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(draft)
    }

    /// Record the saved draft and reset the editor.
    pub fn finish_save(&mut self, draft: ContentDraft, result: Result<(), ApiError>) {
        self.busy = false;
        match result {
            Ok(()) => {
                self.drafts.save(draft);
                self.content.clear();
                self.cursor = 0;
                self.scheduled_date = None;
                self.notice = Some(SAVED_MESSAGE.to_owned());
                self.error = None;
            }
            Err(e) => {
                self.notice = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn finish_generate(&mut self, result: Result<String, ApiError>) {
        self.busy = false;
        match result {
            Ok(text) => {
                self.apply_generated(&text);
                self.error = None;
            }
            Err(ApiError::MissingToken) => self.error = Some(ApiError::MissingToken.to_string()),
            Err(_) => self.error = Some(GENERATE_FAILED.to_owned()),
        }
    }

    /// Load saved entry `idx` back into the form.
    pub fn edit(&mut self, idx: usize) {
        if let Some(draft) = self.drafts.begin_edit(idx) {
            self.cursor = draft.content.encode_utf16().count();
            self.content = draft.content;
            self.tone = draft.tone;
            self.content_type = draft.content_type;
            self.industry = draft.industry;
            self.keywords = draft.keywords.join(", ");
            self.scheduled_date = draft.scheduled_date;
            self.notice = None;
        }
    }

    pub fn delete(&mut self, idx: usize) {
        self.drafts.remove(idx);
    }

    pub fn save_label(&self) -> &'static str {
        if self.drafts.is_editing() {
            "Update Content"
        } else {
            "Save Content"
        }
    }
}
