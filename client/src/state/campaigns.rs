//! Campaign scheduler and scheduled-campaign listing state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scheduler posts each validated form to the backend and keeps the
//! echoed record in a local draft list. Editing replaces the local entry
//! after the next successful post; deleting never calls the backend. The
//! listing page reads the backend's scheduled set independently.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use chrono::NaiveDate;
use wire::ApiError;
use wire::DraftList;
use wire::campaign::{Campaign, CampaignForm};

pub const SAVED_MESSAGE: &str = "Campaign scheduled.";
pub const LIST_LOAD_FAILED: &str = "Failed to load scheduled campaigns.";
pub const LIST_EMPTY: &str = "No scheduled campaigns found.";

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignSchedulerState {
    pub form: CampaignForm,
    pub drafts: DraftList<Campaign>,
    pub saving: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    today: NaiveDate,
}

impl CampaignSchedulerState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: CampaignForm::new(today),
            drafts: DraftList::new(),
            saving: false,
            notice: None,
            error: None,
            today,
        }
    }

    /// Validate the form and mark saving. Returns the record to post.
    pub fn begin_save(&mut self) -> Option<Campaign> {
        if self.saving {
            return None;
        }
        match self.form.to_campaign() {
            Ok(campaign) => {
                self.saving = true;
                self.error = None;
                self.notice = None;
                Some(campaign)
            }
            Err(msg) => {
                self.error = Some(msg.to_owned());
                self.notice = None;
                None
            }
        }
    }

    /// Store the backend's echo and reset the form.
    pub fn finish_save(&mut self, result: Result<Campaign, ApiError>) {
        self.saving = false;
        match result {
            Ok(saved) => {
                self.drafts.save(saved);
                self.form = CampaignForm::new(self.today);
                self.notice = Some(SAVED_MESSAGE.to_owned());
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn edit(&mut self, idx: usize) {
        if let Some(campaign) = self.drafts.begin_edit(idx) {
            self.form = CampaignForm::from_campaign(&campaign);
            self.notice = None;
            self.error = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.drafts.cancel_edit();
        self.form = CampaignForm::new(self.today);
    }

    pub fn delete(&mut self, idx: usize) {
        self.drafts.remove(idx);
    }

    pub fn submit_label(&self) -> &'static str {
        if self.drafts.is_editing() {
            "Update Campaign"
        } else {
            "Schedule Campaign"
        }
    }
}

/// Load state of the scheduled-campaigns listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScheduledCampaignsState {
    #[default]
    Loading,
    Loaded(Vec<Campaign>),
    Failed(String),
}

impl ScheduledCampaignsState {
    pub fn from_result(result: Result<Vec<Campaign>, ApiError>) -> Self {
        match result {
            Ok(campaigns) => Self::Loaded(campaigns),
            Err(ApiError::MissingToken) => Self::Failed(ApiError::MissingToken.to_string()),
            Err(_) => Self::Failed(LIST_LOAD_FAILED.to_owned()),
        }
    }
}
