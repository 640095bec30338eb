//! Directory view app: breadcrumb, icon and list views, entry context menu, and the upload
//! affordance.
//!
//! The view renders once per page load. Every mutating action ends in a full page reload (see
//! [`file_manager_host::ActionDispatcher`]), so no client-side listing state is kept in sync.

mod actions;
mod menu;
mod views;

use std::rc::Rc;

use file_manager_host::{CurrentPath, FileManagerRoutes, Listing, ProgressIndicator};
use file_manager_web::{web_action_dispatcher, WebActionDispatcher};
use leptos::*;

pub use menu::{clamp_menu_position, ContextMenuState, MENU_HEIGHT_PX, MENU_WIDTH_PX};
pub use views::icon_class;

use menu::EntryContextMenu;
use views::{IconView, ListView, Toolbar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How entries are laid out.
pub enum ViewMode {
    /// Grid of icon tiles with the upload tile at the end.
    #[default]
    Icons,
    /// Compact rows with an inline delete button.
    List,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Icons => Self::List,
            Self::List => Self::Icons,
        }
    }

    /// Label of the toolbar button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Icons => "List View",
            Self::List => "Icon View",
        }
    }
}

/// Handles shared by every widget of one page.
#[derive(Clone, Copy)]
pub(crate) struct Shared {
    dispatcher: StoredValue<Rc<WebActionDispatcher>>,
    current_path: StoredValue<CurrentPath>,
    menu: RwSignal<Option<ContextMenuState>>,
    progress: RwSignal<ProgressIndicator>,
    file_input: NodeRef<html::Input>,
}

/// Directory page: toolbar, breadcrumb, the listing in icon or list form, and the entry menu.
///
/// Every mutating action goes through the browser dispatcher and ends in a page reload.
#[component]
pub fn DirectoryView(
    listing: Listing,
    current_path: CurrentPath,
    routes: FileManagerRoutes,
) -> impl IntoView {
    let shared = Shared {
        dispatcher: store_value(Rc::new(web_action_dispatcher(routes))),
        current_path: store_value(current_path.clone()),
        menu: create_rw_signal(None),
        progress: create_rw_signal(ProgressIndicator::Hidden),
        file_input: create_node_ref::<html::Input>(),
    };
    let listing = store_value(listing);
    let view_mode = create_rw_signal(ViewMode::default());

    let outside_click_listener = window_event_listener(ev::click, move |_| {
        if shared.menu.get_untracked().is_some() {
            shared.menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let crumbs = current_path.breadcrumb();
    let file_input = shared.file_input;

    view! {
        <div class="file_manager">
            <Toolbar shared=shared view_mode=view_mode />

            <nav class="bread_crumb" aria-label="Breadcrumb">
                <ul class="path_elements">
                    {crumbs
                        .into_iter()
                        .map(|crumb| view! { <li><a href=crumb.href>{crumb.name}</a></li> })
                        .collect_view()}
                </ul>
                <span class="current_path">{current_path.to_string()}</span>
            </nav>

            <form id="uploadForm" on:change=move |_| actions::upload_selected(shared)>
                <input type="file" id="fileInput" hidden=true node_ref=file_input />
            </form>

            <div class="file_list">
                {move || match view_mode.get() {
                    ViewMode::Icons => view! { <IconView listing=listing shared=shared /> }.into_view(),
                    ViewMode::List => view! { <ListView listing=listing shared=shared /> }.into_view(),
                }}
            </div>

            <EntryContextMenu shared=shared />
        </div>
    }
}
