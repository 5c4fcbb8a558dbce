//! Lead-scoring dashboard state.
//!
//! DESIGN
//! ======
//! Validation runs before any request: a missing or non-CSV selection and a
//! missing token are reported here and never reach the network. Only the
//! file's name is tracked; the `File` handle itself stays in the input
//! element until upload.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use wire::ApiError;
use wire::leads::{self, Lead, ScoringMode};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadScoringState {
    pub file_name: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub leads: Vec<Lead>,
    pub mode: ScoringMode,
}

impl LeadScoringState {
    /// Record a file chosen in the picker.
    ///
    /// Returns `true` when the selection is a CSV and was kept.
    pub fn select_file(&mut self, selection: Option<(&str, &str)>) -> bool {
        match selection {
            None => {
                self.file_name = None;
                self.error = Some(leads::NO_FILE_SELECTED.to_owned());
                false
            }
            Some((name, mime)) if !leads::is_csv_upload(name, mime) => {
                self.file_name = None;
                self.error = Some(leads::INVALID_CSV_FILE.to_owned());
                false
            }
            Some((name, _)) => {
                self.file_name = Some(name.to_owned());
                self.error = None;
                true
            }
        }
    }

    /// Gate an upload press. Returns `true` when the chain may start.
    pub fn begin_upload(&mut self, has_token: bool) -> bool {
        if self.loading {
            return false;
        }
        if self.file_name.is_none() {
            self.error = Some(leads::NO_FILE_SELECTED.to_owned());
            return false;
        }
        if !has_token {
            self.error = Some(ApiError::MissingToken.to_string());
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply the outcome of the upload/score/fetch chain.
    pub fn finish_upload(&mut self, result: Result<Vec<Lead>, ApiError>) {
        self.loading = false;
        match result {
            Ok(leads) => {
                self.leads = leads;
                self.error = None;
            }
            Err(ApiError::MissingToken) => {
                self.error = Some(ApiError::MissingToken.to_string());
            }
            Err(_) => {
                self.error = Some(leads::PROCESSING_FAILED.to_owned());
            }
        }
    }

    pub fn has_results(&self) -> bool {
        !self.leads.is_empty()
    }
}
