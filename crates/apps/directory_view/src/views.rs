//! Toolbar plus the icon and list renderings of the listing.

use file_manager_host::{Entry, EntryKind, Listing};
use leptos::*;

use crate::{actions, menu, Shared, ViewMode};

/// Icon font classes for an entry kind.
pub fn icon_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "iconfont icon-folder",
        EntryKind::File => "iconfont icon-file",
    }
}

/// Icon font classes for the inline delete button of the list view.
pub const DELETE_ICON_CLASS: &str = "iconfont icon-shanchu";

fn entries(listing: StoredValue<Listing>) -> Vec<Entry> {
    listing.with_value(|listing| listing.iter().cloned().collect())
}

#[component]
pub(crate) fn Toolbar(shared: Shared, view_mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="toolbar">
            <button
                type="button"
                id="backButton"
                on:click=move |_| shared.dispatcher.get_value().go_back()
            >
                "Back"
            </button>
            <button
                type="button"
                id="newFolderButton"
                on:click=move |_| actions::create_folder(shared)
            >
                "New Folder"
            </button>
            <button
                type="button"
                id="uploadButton"
                on:click=move |_| actions::pick_file(shared)
            >
                "Upload"
            </button>
            <button
                type="button"
                id="toggleViewButton"
                on:click=move |_| view_mode.update(|mode| *mode = mode.toggled())
            >
                {move || view_mode.get().toggle_label()}
            </button>
        </div>
    }
}

#[component]
pub(crate) fn IconView(listing: StoredValue<Listing>, shared: Shared) -> impl IntoView {
    view! {
        {entries(listing)
            .into_iter()
            .map(|entry| view! { <IconTile entry=entry shared=shared /> })
            .collect_view()}
        <UploadTile shared=shared />
    }
}

#[component]
fn IconTile(entry: Entry, shared: Shared) -> impl IntoView {
    let label = entry.display_name().to_string();
    let open_target = entry.clone();
    let menu_target = entry.clone();

    view! {
        <div
            class="file_icon_panel"
            on:click=move |_| shared.dispatcher.get_value().open_entry(&open_target)
            on:contextmenu=move |ev| menu::open_entry_menu(shared.menu, menu_target.clone(), &ev)
        >
            <i class=icon_class(entry.kind())></i>
            <p title=label.clone()>{label}</p>
        </div>
    }
}

#[component]
fn UploadTile(shared: Shared) -> impl IntoView {
    let progress = shared.progress;
    view! {
        <div class="upload_icon_panel" on:click=move |_| actions::pick_file(shared)>
            <i class="iconfont icon-plus"></i>
            <progress
                id="uploadProgress"
                max="100"
                value=move || progress.get().value().to_string()
                style:display=move || if progress.get().is_visible() { "block" } else { "none" }
            ></progress>
        </div>
    }
}

#[component]
pub(crate) fn ListView(listing: StoredValue<Listing>, shared: Shared) -> impl IntoView {
    view! {
        <ul class="icon-list">
            {entries(listing)
                .into_iter()
                .map(|entry| view! { <ListRow entry=entry shared=shared /> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ListRow(entry: Entry, shared: Shared) -> impl IntoView {
    let label = entry.display_name().to_string();
    let kind_class = match entry.kind() {
        EntryKind::Directory => "folder-icon",
        EntryKind::File => "file-icon",
    };
    let open_target = entry.clone();
    let delete_target = entry.clone();

    view! {
        <li style="display:flex">
            <i
                class=format!("{} {kind_class}", icon_class(entry.kind()))
                style="font-size:16px"
                on:click=move |_| shared.dispatcher.get_value().open_entry(&open_target)
            ></i>
            <h5>{label}</h5>
            <i
                class=DELETE_ICON_CLASS
                style="font-size:16px"
                title="Delete"
                on:click=move |_| actions::delete(shared, &delete_target)
            ></i>
        </li>
    }
}
