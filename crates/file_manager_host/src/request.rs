//! Mutating action requests and their observed outcomes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Server-side mutation issued from the directory view.
pub enum ActionKind {
    /// Remove a file or directory.
    Delete,
    /// Multipart upload into the current directory.
    Upload,
    /// Rename an entry.
    Rename,
    /// Create a directory.
    NewFolder,
}

impl ActionKind {
    /// Verb used in console messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Upload => "Upload",
            Self::Rename => "Rename",
            Self::NewFolder => "Create",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single HTTP request for one action.
pub struct ActionRequest {
    /// Action being performed.
    pub kind: ActionKind,
    /// Fully built request URL, query included.
    pub url: String,
}

impl ActionRequest {
    /// HTTP method. Every action endpoint is a `POST`.
    pub fn method(&self) -> &'static str {
        "POST"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status line observed for a finished request.
pub struct ActionOutcome {
    /// HTTP status, or `0` when no response was received.
    pub status: u16,
    /// HTTP status text, empty when no response was received.
    pub status_text: String,
}

impl ActionOutcome {
    /// Builds an outcome from a received status line.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    /// Outcome reported when the request never produced a response.
    pub fn no_response() -> Self {
        Self::new(0, "")
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message shown to the user, e.g. `200 OK`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_matches_browser_format() {
        assert_eq!(ActionOutcome::new(200, "OK").status_line(), "200 OK");
        assert_eq!(ActionOutcome::no_response().status_line(), "0 ");
        assert!(ActionOutcome::new(204, "No Content").is_success());
        assert!(!ActionOutcome::new(404, "Not Found").is_success());
        assert!(!ActionOutcome::no_response().is_success());
    }
}
