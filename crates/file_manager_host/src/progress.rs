//! Upload progress reporting.

#[derive(Debug, Clone, Copy, PartialEq)]
/// Raw progress sample reported by the transport while the request body is sent.
pub struct UploadProgress {
    /// Bytes sent so far.
    pub loaded: f64,
    /// Total bytes to send, meaningful only when `length_computable` is set.
    pub total: f64,
    /// Whether the total length is known.
    pub length_computable: bool,
}

impl UploadProgress {
    /// Builds a progress sample.
    pub fn new(loaded: f64, total: f64, length_computable: bool) -> Self {
        Self {
            loaded,
            total,
            length_computable,
        }
    }

    /// Completed percentage (`loaded / total * 100`), or `None` if the length is unknown.
    pub fn percent(&self) -> Option<f64> {
        if !self.length_computable || self.total <= 0.0 {
            return None;
        }
        Some((self.loaded / self.total * 100.0).clamp(0.0, 100.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Visible state of the upload progress bar.
pub enum ProgressIndicator {
    /// Bar is not shown.
    #[default]
    Hidden,
    /// Bar is shown with the given percentage.
    Visible(f64),
}

impl ProgressIndicator {
    /// Current bar value, `0` while hidden.
    pub fn value(self) -> f64 {
        match self {
            Self::Hidden => 0.0,
            Self::Visible(percent) => percent,
        }
    }

    /// Returns `true` when the bar is shown.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible(_))
    }
}
