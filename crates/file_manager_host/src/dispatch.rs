//! Mutating actions of the directory view.
//!
//! Every action sends at most one request and then ends the same way whatever happened: the
//! status line is shown in a blocking alert and the page reloads, so the next render reflects
//! the server's state. There is no retry and no client-side reconciliation.

use std::rc::Rc;

use leptos::logging;

use crate::listing::Entry;
use crate::page::PageHost;
use crate::path::CurrentPath;
use crate::progress::{ProgressIndicator, UploadProgress};
use crate::request::{ActionOutcome, ActionRequest};
use crate::routes::FileManagerRoutes;
use crate::service::FileActionService;

/// Default value offered by the new-folder prompt.
pub const NEW_FOLDER_DEFAULT_NAME: &str = "New Folder";

/// Receives progress bar updates during an upload.
pub type IndicatorCallback = Rc<dyn Fn(ProgressIndicator)>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What an action sent and what came back.
pub struct ActionReport {
    /// Request that was sent.
    pub request: ActionRequest,
    /// Observed status line (`0` when no response arrived).
    pub outcome: ActionOutcome,
}

/// Runs navigation and mutating actions against a transport and a page host.
pub struct ActionDispatcher<S, P> {
    routes: FileManagerRoutes,
    service: S,
    page: P,
}

impl<S, P> ActionDispatcher<S, P>
where
    S: FileActionService,
    P: PageHost,
{
    /// Creates a dispatcher for the given routes and adapters.
    pub fn new(routes: FileManagerRoutes, service: S, page: P) -> Self {
        Self {
            routes,
            service,
            page,
        }
    }

    /// Route configuration in use.
    pub fn routes(&self) -> &FileManagerRoutes {
        &self.routes
    }

    /// Transport adapter.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Page adapter.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Follows an entry's relative link.
    pub fn open_entry(&self, entry: &Entry) {
        self.page.navigate(&entry.href());
    }

    /// Moves to the parent directory.
    pub fn go_back(&self) {
        self.page.navigate("../");
    }

    /// Deletes the file or directory at `path`.
    pub async fn delete_entry(&self, path: &str) -> ActionReport {
        let request = self.routes.delete_request(path);
        let result = self.service.post(&request).await;
        self.finish(request, result)
    }

    /// Uploads `file` into `dir`, mirroring byte progress into `indicator`.
    ///
    /// Samples without a computable length leave the bar untouched. A transport failure hides
    /// the bar before the alert.
    pub async fn upload_file(
        &self,
        dir: &CurrentPath,
        file: S::Upload,
        indicator: IndicatorCallback,
    ) -> ActionReport {
        let request = self.routes.upload_request(dir);
        let sink = indicator.clone();
        let on_progress = Rc::new(move |sample: UploadProgress| {
            if let Some(percent) = sample.percent() {
                sink(ProgressIndicator::Visible(percent));
            }
        });
        let result = self.service.upload(&request, file, on_progress).await;
        if result.is_err() {
            indicator(ProgressIndicator::Hidden);
        }
        self.finish(request, result)
    }

    /// Prompts for a new name for `entry` in `dir` and renames it.
    ///
    /// The name is sent as typed. Returns `None` when the prompt is cancelled.
    pub async fn rename_entry(&self, dir: &CurrentPath, entry: &Entry) -> Option<ActionReport> {
        let new_name = self
            .page
            .prompt("Please enter the new name", entry.name())?;
        let request = self
            .routes
            .rename_request(&dir.entry_path(entry), &new_name);
        let result = self.service.post(&request).await;
        Some(self.finish(request, result))
    }

    /// Prompts for a folder name and creates it in `dir`.
    ///
    /// Returns `None` when the prompt is cancelled.
    pub async fn create_folder(&self, dir: &CurrentPath) -> Option<ActionReport> {
        let name = self
            .page
            .prompt("Please enter the folder name", NEW_FOLDER_DEFAULT_NAME)?;
        let request = self.routes.new_folder_request(dir, &name);
        let result = self.service.post(&request).await;
        Some(self.finish(request, result))
    }

    fn finish(
        &self,
        request: ActionRequest,
        result: Result<ActionOutcome, crate::error::TransportError>,
    ) -> ActionReport {
        let label = request.kind.label();
        let outcome = match result {
            Ok(outcome) if outcome.is_success() => {
                logging::log!("{label} successfully.");
                outcome
            }
            Ok(outcome) => {
                logging::warn!("{label} failed: {}", outcome.status_line());
                outcome
            }
            Err(err) => {
                logging::error!("{label} failed: {err}");
                ActionOutcome::no_response()
            }
        };
        self.page.alert(&outcome.status_line());
        self.page.reload();
        ActionReport { request, outcome }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::TransportError;
    use crate::page::{MemoryPageHost, PageEvent};
    use crate::request::ActionKind;
    use crate::service::MemoryFileActionService;

    fn dispatcher(
        service: MemoryFileActionService,
        page: MemoryPageHost,
    ) -> ActionDispatcher<MemoryFileActionService, MemoryPageHost> {
        ActionDispatcher::new(FileManagerRoutes::default(), service, page)
    }

    fn docs() -> CurrentPath {
        CurrentPath::from_location("/docs/")
    }

    fn recorder() -> (Rc<RefCell<Vec<ProgressIndicator>>>, IndicatorCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (
            seen,
            Rc::new(move |indicator: ProgressIndicator| sink.borrow_mut().push(indicator)),
        )
    }

    #[test]
    fn delete_alerts_status_then_reloads() {
        let fm = dispatcher(MemoryFileActionService::default(), MemoryPageHost::default());

        let report = block_on(fm.delete_entry("/docs/old.txt"));

        assert_eq!(report.request.kind, ActionKind::Delete);
        assert_eq!(report.request.url, "/api/delete?path=/docs/old.txt");
        assert_eq!(
            fm.page().events(),
            vec![PageEvent::Alert("200 OK".to_string()), PageEvent::Reload]
        );
    }

    #[test]
    fn every_action_reloads_on_error_status() {
        let fm = dispatcher(
            MemoryFileActionService::responding(ActionOutcome::new(500, "Internal Server Error")),
            MemoryPageHost::with_answers([Some("b.txt".to_string()), Some("tmp".to_string())]),
        );
        let (_, indicator) = recorder();

        block_on(fm.delete_entry("/docs/a.txt"));
        block_on(fm.upload_file(&docs(), "c.bin".to_string(), indicator));
        block_on(fm.rename_entry(&docs(), &Entry::new("a.txt"))).expect("rename prompted");
        block_on(fm.create_folder(&docs())).expect("folder prompted");

        assert_eq!(fm.page().reload_count(), 4);
        assert_eq!(fm.service().sent().len(), 4);
    }

    #[test]
    fn transport_failure_still_alerts_and_reloads() {
        let fm = dispatcher(
            MemoryFileActionService::failing(TransportError::Network),
            MemoryPageHost::default(),
        );

        let report = block_on(fm.delete_entry("/docs/a.txt"));

        assert_eq!(report.outcome, ActionOutcome::no_response());
        assert_eq!(
            fm.page().events(),
            vec![PageEvent::Alert("0 ".to_string()), PageEvent::Reload]
        );
    }

    #[test]
    fn rename_prompts_with_current_name_and_sends_raw_answer() {
        let fm = dispatcher(
            MemoryFileActionService::default(),
            MemoryPageHost::with_answers([Some("../escape".to_string())]),
        );

        let report = block_on(fm.rename_entry(&docs(), &Entry::new("a.txt"))).expect("renamed");

        assert_eq!(
            report.request.url,
            "/api/rename?path=/docs/a.txt&rename=../escape"
        );
        assert_eq!(
            fm.page().events()[0],
            PageEvent::Prompt {
                message: "Please enter the new name".to_string(),
                default: "a.txt".to_string(),
            }
        );
    }

    #[test]
    fn cancelled_prompts_send_nothing() {
        let fm = dispatcher(
            MemoryFileActionService::default(),
            MemoryPageHost::with_answers([None, None]),
        );

        assert_eq!(block_on(fm.rename_entry(&docs(), &Entry::new("a.txt"))), None);
        assert_eq!(block_on(fm.create_folder(&docs())), None);
        assert!(fm.service().sent().is_empty());
        assert_eq!(fm.page().reload_count(), 0);
    }

    #[test]
    fn create_folder_joins_name_onto_current_directory() {
        let fm = dispatcher(
            MemoryFileActionService::default(),
            MemoryPageHost::with_answers([Some("drafts".to_string())]),
        );

        let report = block_on(fm.create_folder(&docs())).expect("created");

        assert_eq!(report.request.kind, ActionKind::NewFolder);
        assert_eq!(report.request.url, "/api/new_folder?path=/docs/drafts");
        assert_eq!(
            fm.page().events()[0],
            PageEvent::Prompt {
                message: "Please enter the folder name".to_string(),
                default: NEW_FOLDER_DEFAULT_NAME.to_string(),
            }
        );
    }

    #[test]
    fn upload_maps_computable_progress_to_indicator() {
        let service = MemoryFileActionService::default().with_progress(vec![
            UploadProgress::new(10.0, 40.0, true),
            UploadProgress::new(20.0, 0.0, false),
            UploadProgress::new(40.0, 40.0, true),
        ]);
        let fm = dispatcher(service, MemoryPageHost::default());
        let (seen, indicator) = recorder();

        let report = block_on(fm.upload_file(&docs(), "photo.png".to_string(), indicator));

        assert_eq!(report.request.url, "/api/upload?path=/docs/");
        assert_eq!(
            *seen.borrow(),
            vec![
                ProgressIndicator::Visible(25.0),
                ProgressIndicator::Visible(100.0)
            ]
        );
        assert_eq!(
            fm.service().sent()[0].1.as_deref(),
            Some("photo.png")
        );
        assert_eq!(fm.page().reload_count(), 1);
    }

    #[test]
    fn upload_transport_failure_hides_indicator() {
        let fm = dispatcher(
            MemoryFileActionService::failing(TransportError::Network),
            MemoryPageHost::default(),
        );
        let (seen, indicator) = recorder();

        block_on(fm.upload_file(&docs(), "photo.png".to_string(), indicator));

        assert_eq!(*seen.borrow(), vec![ProgressIndicator::Hidden]);
        assert_eq!(fm.page().reload_count(), 1);
    }

    #[test]
    fn navigation_uses_relative_links() {
        let fm = dispatcher(MemoryFileActionService::default(), MemoryPageHost::default());

        fm.open_entry(&Entry::new("img/"));
        fm.go_back();

        assert_eq!(
            fm.page().events(),
            vec![
                PageEvent::Navigate("./img/".to_string()),
                PageEvent::Navigate("../".to_string())
            ]
        );
    }
}
