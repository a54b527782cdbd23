use super::report;
use super::{AnalysisMode, ClientConfig, RelayApi};
use crate::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Observable client states. Success and failure both land in `Result`; only
/// the stored text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ImageSelected,
    Analyzing,
    Result,
}

#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub name: String,
    pub size: usize,
    pub data_uri: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub mode: String,
    pub analysis: String,
    pub timestamp: DateTime<Utc>,
    pub model: String,
}

/// One user's analysis flow: select an image, pick a mode, run at most one
/// relay request at a time, keep the latest result. No cross-request history.
pub struct Session<A: RelayApi> {
    api: A,
    config: ClientConfig,
    state: SessionState,
    image: Option<SelectedImage>,
    mode: AnalysisMode,
    custom_prompt: String,
    result: Option<AnalysisOutcome>,
}

impl<A: RelayApi> Session<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            state: SessionState::Idle,
            image: None,
            mode: AnalysisMode::General,
            custom_prompt: String::new(),
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn result(&self) -> Option<&AnalysisOutcome> {
        self.result.as_ref()
    }

    /// Accepts an image for analysis. Oversized files are rejected and the
    /// state is left unchanged.
    pub fn select_image(
        &mut self,
        name: impl Into<String>,
        size: usize,
        data_uri: impl Into<String>,
    ) -> bool {
        if self.state == SessionState::Analyzing {
            warn!("Ignoring image selection while a request is in flight");
            return false;
        }
        if size > self.config.max_image_bytes {
            warn!(
                "Rejecting image of {} bytes (limit {})",
                size, self.config.max_image_bytes
            );
            return false;
        }

        self.image = Some(SelectedImage {
            name: name.into(),
            size,
            data_uri: data_uri.into(),
        });
        self.result = None;
        self.transition(SessionState::ImageSelected);
        true
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    pub fn set_custom_prompt(&mut self, prompt: impl Into<String>) {
        self.custom_prompt = prompt.into();
    }

    /// The prompt the next analysis would send: the mode's canned prompt, or
    /// the custom text when the custom mode is selected. `None` blocks analysis.
    pub fn effective_prompt(&self) -> Option<String> {
        match self.mode.prompt() {
            Some(canned) => Some(canned.to_string()),
            None if !self.custom_prompt.is_empty() => Some(self.custom_prompt.clone()),
            None => None,
        }
    }

    /// Whether the analysis trigger is enabled: an image is selected, no
    /// request is in flight, and the effective prompt is non-empty.
    pub fn can_analyze(&self) -> bool {
        self.image.is_some()
            && self.state != SessionState::Analyzing
            && self.effective_prompt().is_some()
    }

    /// Claims the in-flight slot and returns the prompt to send, or `None`
    /// when triggering is currently disallowed (a no-op, state unchanged).
    pub fn begin_analysis(&mut self) -> Option<String> {
        if !self.can_analyze() {
            debug!("Analysis trigger ignored in state {:?}", self.state);
            return None;
        }
        let prompt = self.effective_prompt()?;
        self.result = None;
        self.transition(SessionState::Analyzing);
        Some(prompt)
    }

    /// Records the outcome of a finished request.
    pub fn finish_analysis(&mut self, outcome: AnalysisOutcome) {
        self.result = Some(outcome);
        self.transition(SessionState::Result);
    }

    /// Runs one analysis round trip. A disallowed trigger is a no-op; any
    /// relay failure becomes an error result, never a panic or lost state.
    pub async fn analyze(&mut self) {
        let Some(prompt) = self.begin_analysis() else {
            return;
        };
        // begin_analysis only succeeds with an image present
        let image = self
            .image
            .as_ref()
            .map(|img| img.data_uri.clone())
            .unwrap_or_default();

        let outcome = match self.api.analyze(&image, &prompt).await {
            Ok(analysis) => {
                info!("Analysis succeeded ({} chars)", analysis.len());
                AnalysisOutcome {
                    mode: self.mode.label().to_string(),
                    analysis,
                    timestamp: Utc::now(),
                    model: self.config.model_label.clone(),
                }
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                AnalysisOutcome {
                    mode: "Error".to_string(),
                    analysis: format!(
                        "Error: {}\n\nTroubleshooting:\n\
                         1. Is the relay server running? ({})\n\
                         2. Is the API credential configured?\n\
                         3. Is the network connection up?",
                        e, self.config.relay_url
                    ),
                    timestamp: Utc::now(),
                    model: self.config.model_label.clone(),
                }
            }
        };

        self.finish_analysis(outcome);
    }

    /// Drops the current result but keeps the image, so the user can trigger
    /// another analysis of the same file.
    pub fn clear_result(&mut self) {
        if self.state == SessionState::Result {
            self.result = None;
            self.transition(SessionState::ImageSelected);
        }
    }

    /// Back to a blank session.
    pub fn reset(&mut self) {
        self.image = None;
        self.result = None;
        self.custom_prompt.clear();
        self.transition(SessionState::Idle);
    }

    /// Writes the current result as a plain-text report under `dir`. Returns
    /// `None` without touching the filesystem when there is no result.
    pub fn download_report(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(outcome) = self.result.as_ref() else {
            return Ok(None);
        };
        let file_name = self.image.as_ref().map(|img| img.name.as_str());
        let path = dir.join(report::report_file_name(outcome.timestamp));
        std::fs::write(&path, report::render_report(outcome, file_name))?;
        info!("Wrote analysis report to {}", path.display());
        Ok(Some(path))
    }

    fn transition(&mut self, new_state: SessionState) {
        if self.state != new_state {
            debug!("Session state: {:?} -> {:?}", self.state, new_state);
        }
        self.state = new_state;
    }
}
