//! Event handlers that hand work to the dispatcher on the local executor.

use std::rc::Rc;

use file_manager_host::{Entry, IndicatorCallback, ProgressIndicator};
use leptos::*;

use crate::Shared;

pub(crate) fn delete(shared: Shared, entry: &Entry) {
    let dispatcher = shared.dispatcher.get_value();
    let path = shared.current_path.with_value(|dir| dir.entry_path(entry));
    spawn_local(async move {
        dispatcher.delete_entry(&path).await;
    });
}

pub(crate) fn rename(shared: Shared, entry: Entry) {
    let dispatcher = shared.dispatcher.get_value();
    let dir = shared.current_path.get_value();
    spawn_local(async move {
        dispatcher.rename_entry(&dir, &entry).await;
    });
}

pub(crate) fn create_folder(shared: Shared) {
    let dispatcher = shared.dispatcher.get_value();
    let dir = shared.current_path.get_value();
    spawn_local(async move {
        dispatcher.create_folder(&dir).await;
    });
}

/// Opens the hidden file picker.
pub(crate) fn pick_file(shared: Shared) {
    if let Some(input) = shared.file_input.get_untracked() {
        input.click();
    }
}

/// Uploads the first file chosen in the picker into the current directory.
pub(crate) fn upload_selected(shared: Shared) {
    let Some(input) = shared.file_input.get_untracked() else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let dispatcher = shared.dispatcher.get_value();
    let dir = shared.current_path.get_value();
    let progress = shared.progress;
    spawn_local(async move {
        let indicator: IndicatorCallback =
            Rc::new(move |state: ProgressIndicator| progress.set(state));
        dispatcher.upload_file(&dir, file, indicator).await;
    });
}
