//! Right-click menu for a single entry.
//!
//! The menu is pinned to a fixed size so the viewport clamp works from known dimensions.

use file_manager_host::Entry;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::actions;
use crate::Shared;

/// Width of the entry context menu. The menu is rendered at exactly this width.
pub const MENU_WIDTH_PX: i32 = 140;
/// Height of the entry context menu. The menu is rendered at exactly this height.
pub const MENU_HEIGHT_PX: i32 = 92;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Open context menu and the entry it acts on.
pub struct ContextMenuState {
    /// Entry the menu items act on.
    pub entry: Entry,
    /// Left edge in viewport pixels, already clamped.
    pub x: i32,
    /// Top edge in viewport pixels, already clamped.
    pub y: i32,
}

/// Places a popup at the cursor, shifted left/up when it would overflow the viewport.
pub fn clamp_menu_position(
    cursor: (i32, i32),
    menu: (i32, i32),
    viewport: (i32, i32),
) -> (i32, i32) {
    let place = |cursor: i32, size: i32, limit: i32| {
        if cursor + size > limit {
            (limit - size).max(0)
        } else {
            cursor.max(0)
        }
    };
    (
        place(cursor.0, menu.0, viewport.0),
        place(cursor.1, menu.1, viewport.1),
    )
}

/// Inline style for a menu at `(x, y)`. Overflow is hidden so the box never outgrows the size
/// used by [`clamp_menu_position`].
pub fn menu_style(x: i32, y: i32) -> String {
    format!(
        "left:{x}px;top:{y}px;width:{MENU_WIDTH_PX}px;height:{MENU_HEIGHT_PX}px;\
         box-sizing:border-box;overflow:hidden;display:block;"
    )
}

pub(crate) fn open_entry_menu(
    menu: RwSignal<Option<ContextMenuState>>,
    entry: Entry,
    ev: &web_sys::MouseEvent,
) {
    ev.prevent_default();
    ev.stop_propagation();
    let (x, y) = clamp_menu_position(
        (ev.client_x(), ev.client_y()),
        (MENU_WIDTH_PX, MENU_HEIGHT_PX),
        viewport_size(),
    );
    menu.set(Some(ContextMenuState { entry, x, y }));
}

fn viewport_size() -> (i32, i32) {
    let window = leptos::window();
    (px(window.inner_width()), px(window.inner_height()))
}

fn px(value: Result<JsValue, JsValue>) -> i32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32
}

#[component]
pub(crate) fn EntryContextMenu(shared: Shared) -> impl IntoView {
    let menu = shared.menu;
    view! {
        <Show when=move || menu.get().is_some() fallback=|| ()>
            {move || {
                let Some(state) = menu.get() else {
                    return ().into_view();
                };
                let style = menu_style(state.x, state.y);
                let open_entry = state.entry.clone();
                let rename_entry = state.entry.clone();
                let delete_entry = state.entry;

                view! {
                    <ul class="rc_menu" role="menu" style=style>
                        <li
                            role="menuitem"
                            on:click=move |_| {
                                menu.set(None);
                                shared.dispatcher.get_value().open_entry(&open_entry);
                            }
                        >
                            "Open"
                        </li>
                        <li
                            role="menuitem"
                            on:click=move |_| {
                                menu.set(None);
                                actions::rename(shared, rename_entry.clone());
                            }
                        >
                            "Rename"
                        </li>
                        <li
                            role="menuitem"
                            on:click=move |_| {
                                menu.set(None);
                                actions::delete(shared, &delete_entry);
                            }
                        >
                            "Delete"
                        </li>
                    </ul>
                }
                .into_view()
            }}
        </Show>
    }
}
