//! Server-injected page bootstrap payload.
//!
//! The server renders the listing and route configuration into the page as
//! `<script id="file-manager-data" type="application/json">` so the view can start without an
//! extra round trip.

use serde::Deserialize;

use crate::error::BootstrapError;
use crate::listing::Listing;
use crate::path::CurrentPath;
use crate::routes::FileManagerRoutes;

/// Id of the element carrying the bootstrap JSON.
pub const BOOTSTRAP_ELEMENT_ID: &str = "file-manager-data";

#[derive(Debug, Deserialize)]
struct RawBootstrap {
    #[serde(default)]
    list: Listing,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    routes: FileManagerRoutes,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Everything the directory view needs to render one page.
pub struct PageBootstrap {
    /// Sorted directory entries.
    pub listing: Listing,
    /// Directory being shown.
    pub current_path: CurrentPath,
    /// Server route configuration.
    pub routes: FileManagerRoutes,
}

impl PageBootstrap {
    /// Parses the bootstrap JSON. `location_path` is used when the payload has no `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::InvalidPayload`] when `raw` is not a valid payload.
    pub fn parse(raw: &str, location_path: &str) -> Result<Self, BootstrapError> {
        let raw: RawBootstrap = serde_json::from_str(raw)?;
        let current_path = raw
            .path
            .as_deref()
            .map(CurrentPath::from_decoded)
            .unwrap_or_else(|| CurrentPath::from_location(location_path));
        Ok(Self {
            listing: raw.list,
            current_path,
            routes: raw.routes,
        })
    }

    /// Empty page at `location_path`, used when no usable payload is present.
    pub fn empty(location_path: &str) -> Self {
        Self {
            current_path: CurrentPath::from_location(location_path),
            ..Self::default()
        }
    }
}
