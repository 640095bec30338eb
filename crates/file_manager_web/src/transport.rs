//! `XMLHttpRequest` transport for directory view actions.
//!
//! `XMLHttpRequest` is used instead of `fetch` because only it reports upload progress.

use file_manager_host::{
    ActionOutcome, ActionRequest, FileActionFuture, FileActionService, ProgressCallback,
    TransportError,
};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::interop::js_error_to_string;

/// Multipart form field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, Copy, Default)]
/// Browser transport backed by `XMLHttpRequest`.
pub struct WebFileActionService;

impl FileActionService for WebFileActionService {
    type Upload = web_sys::File;

    fn post<'a>(
        &'a self,
        request: &'a ActionRequest,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>> {
        Box::pin(async move { send(request, None, None).await })
    }

    fn upload<'a>(
        &'a self,
        request: &'a ActionRequest,
        file: web_sys::File,
        on_progress: ProgressCallback,
    ) -> FileActionFuture<'a, Result<ActionOutcome, TransportError>> {
        Box::pin(async move { send(request, Some(file), Some(on_progress)).await })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(
    _request: &ActionRequest,
    _file: Option<web_sys::File>,
    _on_progress: Option<ProgressCallback>,
) -> Result<ActionOutcome, TransportError> {
    Err(TransportError::Unavailable(crate::interop::unsupported(
        "XMLHttpRequest",
    )))
}

#[cfg(target_arch = "wasm32")]
async fn send(
    request: &ActionRequest,
    file: Option<web_sys::File>,
    on_progress: Option<ProgressCallback>,
) -> Result<ActionOutcome, TransportError> {
    use file_manager_host::UploadProgress;

    let xhr = web_sys::XmlHttpRequest::new()
        .map_err(|err| TransportError::Unavailable(js_error_to_string(err)))?;
    xhr.open_with_async(request.method(), &request.url, true)
        .map_err(|err| TransportError::Open {
            url: request.url.clone(),
            reason: js_error_to_string(err),
        })?;

    let (tx, rx) = oneshot::channel::<Result<ActionOutcome, TransportError>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let xhr_for_load = xhr.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let outcome = ActionOutcome::new(
            xhr_for_load.status().unwrap_or(0),
            xhr_for_load.status_text().unwrap_or_default(),
        );
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(Ok(outcome));
        }
    }));
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err(TransportError::Network));
        }
    }));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let on_upload_progress = match on_progress {
        Some(callback) => {
            let closure = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(
                move |ev: web_sys::ProgressEvent| {
                    callback(UploadProgress::new(
                        ev.loaded(),
                        ev.total(),
                        ev.length_computable(),
                    ));
                },
            ));
            let upload = xhr
                .upload()
                .map_err(|err| TransportError::Unavailable(js_error_to_string(err)))?;
            upload.set_onprogress(Some(closure.as_ref().unchecked_ref()));
            Some(closure)
        }
        None => None,
    };

    match file {
        Some(file) => {
            let form = web_sys::FormData::new()
                .map_err(|err| TransportError::Send(js_error_to_string(err)))?;
            form.append_with_blob(UPLOAD_FIELD_NAME, &file)
                .map_err(|err| TransportError::Send(js_error_to_string(err)))?;
            xhr.send_with_opt_form_data(Some(&form))
        }
        None => xhr.send(),
    }
    .map_err(|err| TransportError::Send(js_error_to_string(err)))?;

    let result = rx.await.map_err(|_| TransportError::Interrupted)?;
    on_load.forget();
    on_error.forget();
    if let Some(closure) = on_upload_progress {
        closure.forget();
    }
    result
}
