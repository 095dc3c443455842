use crate::data::model::SampleBuffer;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded buffer (None until a file is opened from the window).
    pub buffer: Option<SampleBuffer>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            buffer: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded buffer and clear any stale status.
    pub fn set_buffer(&mut self, buffer: SampleBuffer) {
        self.buffer = Some(buffer);
        self.status_message = None;
    }
}
