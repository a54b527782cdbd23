mod http;
mod modes;
mod report;
mod session;

pub use http::{HttpRelayClient, RelayApi};
pub use modes::AnalysisMode;
pub use report::render_report;
pub use session::{AnalysisOutcome, SelectedImage, Session, SessionState};

/// Settings for the client side of the relay, read once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay service.
    pub relay_url: String,
    /// Ceiling on accepted image files.
    pub max_image_bytes: usize,
    /// Display label attached to results.
    pub model_label: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://localhost:5000".to_string(),
            max_image_bytes: 5 * 1024 * 1024,
            model_label: "Llama 4 Scout Vision".to_string(),
        }
    }
}
