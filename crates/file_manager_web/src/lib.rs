//! Browser (`wasm32`) implementations of [`file_manager_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring for the directory view:
//! - `transport`: `XMLHttpRequest`-backed [`FileActionService`] with upload progress
//! - `page`: `window.alert` / `window.prompt` / `location` backed [`PageHost`]
//! - `bootstrap`: reading the server-injected page payload
//!
//! Non-wasm builds compile to inert fallbacks so the workspace still builds and tests natively.
//!
//! [`FileActionService`]: file_manager_host::FileActionService
//! [`PageHost`]: file_manager_host::PageHost

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bootstrap;
mod interop;
pub mod page;
pub mod transport;

use file_manager_host::ActionDispatcher;

pub use bootstrap::{load_page_bootstrap, redirect_to_directory_location};
pub use page::WebPageHost;
pub use transport::WebFileActionService;

/// Dispatcher wired to the browser transport and page.
pub type WebActionDispatcher = ActionDispatcher<WebFileActionService, WebPageHost>;

/// Builds the browser dispatcher for `routes`.
pub fn web_action_dispatcher(routes: file_manager_host::FileManagerRoutes) -> WebActionDispatcher {
    ActionDispatcher::new(routes, WebFileActionService, WebPageHost)
}
