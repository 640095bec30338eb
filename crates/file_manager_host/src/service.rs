//! Transport service contracts for file manager actions.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::error::TransportError;
use crate::progress::UploadProgress;
use crate::request::{ActionOutcome, ActionRequest};

/// Object-safe boxed future used by [`FileActionService`] async methods.
pub type FileActionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Receives upload progress samples as the request body is sent.
pub type ProgressCallback = Rc<dyn Fn(UploadProgress)>;

/// Host service that delivers action requests to the server.
///
/// Implementations report the status line of whatever response arrives; a non-2xx status is
/// still `Ok`. `Err` is reserved for requests that never produced a response.
pub trait FileActionService {
    /// File handle accepted by [`FileActionService::upload`].
    type Upload;

    /// Sends a body-less `POST`.
    fn post<'a>(
        &'a self,
        request: &'a ActionRequest,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>>;

    /// Sends `file` as multipart field `file`, reporting progress along the way.
    fn upload<'a>(
        &'a self,
        request: &'a ActionRequest,
        file: Self::Upload,
        on_progress: ProgressCallback,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>>;
}

#[derive(Debug, Clone)]
/// In-memory transport that records requests and answers with a scripted result.
///
/// Uploads take the file name as their handle and replay `progress` before answering.
pub struct MemoryFileActionService {
    response: Result<ActionOutcome, TransportError>,
    progress: Vec<UploadProgress>,
    sent: RefCell<Vec<(ActionRequest, Option<String>)>>,
}

impl Default for MemoryFileActionService {
    fn default() -> Self {
        Self::responding(ActionOutcome::new(200, "OK"))
    }
}

impl MemoryFileActionService {
    /// Answers every request with `outcome`.
    pub fn responding(outcome: ActionOutcome) -> Self {
        Self {
            response: Ok(outcome),
            progress: Vec::new(),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Fails every request with `err`.
    pub fn failing(err: TransportError) -> Self {
        Self {
            response: Err(err),
            progress: Vec::new(),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Replays `samples` to the progress callback of each upload.
    pub fn with_progress(mut self, samples: Vec<UploadProgress>) -> Self {
        self.progress = samples;
        self
    }

    /// Requests sent so far, paired with the uploaded file name for uploads.
    pub fn sent(&self) -> Vec<(ActionRequest, Option<String>)> {
        self.sent.borrow().clone()
    }
}

impl FileActionService for MemoryFileActionService {
    type Upload = String;

    fn post<'a>(
        &'a self,
        request: &'a ActionRequest,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>> {
        Box::pin(async move {
            self.sent.borrow_mut().push((request.clone(), None));
            self.response.clone()
        })
    }

    fn upload<'a>(
        &'a self,
        request: &'a ActionRequest,
        file: String,
        on_progress: ProgressCallback,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>> {
        Box::pin(async move {
            self.sent.borrow_mut().push((request.clone(), Some(file)));
            for sample in &self.progress {
                on_progress(*sample);
            }
            self.response.clone()
        })
    }
}
