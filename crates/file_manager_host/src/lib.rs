//! Typed contracts and target-independent logic for the browser file manager.
//!
//! This crate is the API-first boundary for the directory view. It owns the listing model,
//! current-path helpers, route configuration and request building, upload progress math, and
//! the service traits used to reach the server and the page. Concrete browser adapters live in
//! `file_manager_web`; the Leptos component tree lives in `directory_view`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bootstrap;
pub mod dispatch;
pub mod error;
pub mod listing;
pub mod page;
pub mod path;
pub mod progress;
pub mod request;
pub mod routes;
pub mod service;

pub use bootstrap::{PageBootstrap, BOOTSTRAP_ELEMENT_ID};
pub use dispatch::{ActionDispatcher, ActionReport, IndicatorCallback, NEW_FOLDER_DEFAULT_NAME};
pub use error::{BootstrapError, TransportError};
pub use listing::{Entry, EntryKind, Listing};
pub use page::{MemoryPageHost, PageEvent, PageHost};
pub use path::{breadcrumb_segments, directory_redirect_target, Crumb, CurrentPath};
pub use progress::{ProgressIndicator, UploadProgress};
pub use request::{ActionKind, ActionOutcome, ActionRequest};
pub use routes::FileManagerRoutes;
pub use service::{FileActionFuture, FileActionService, MemoryFileActionService, ProgressCallback};
