//! Reading the server-injected page payload.

use file_manager_host::{directory_redirect_target, BootstrapError, PageBootstrap, PageHost};
use leptos::logging;

use crate::page::{location_pathname, WebPageHost};

/// Sends the browser to the `/`-terminated form of the current location.
///
/// Returns `true` when a redirect was issued and rendering should stop.
pub fn redirect_to_directory_location() -> bool {
    match directory_redirect_target(&location_pathname()) {
        Some(target) => {
            WebPageHost.navigate(&target);
            true
        }
        None => false,
    }
}

/// Loads the page payload, falling back to an empty listing at the current location.
pub fn load_page_bootstrap() -> PageBootstrap {
    let location = location_pathname();
    match read_bootstrap_text().and_then(|raw| PageBootstrap::parse(&raw, &location)) {
        Ok(page) => page,
        Err(err) => {
            logging::error!("file manager bootstrap failed: {err}");
            PageBootstrap::empty(&location)
        }
    }
}

fn read_bootstrap_text() -> Result<String, BootstrapError> {
    #[cfg(target_arch = "wasm32")]
    {
        use file_manager_host::BOOTSTRAP_ELEMENT_ID;

        let missing = || BootstrapError::MissingElement(BOOTSTRAP_ELEMENT_ID.to_string());
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .and_then(|element| element.text_content())
            .ok_or_else(missing)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(BootstrapError::MissingElement(
            file_manager_host::BOOTSTRAP_ELEMENT_ID.to_string(),
        ))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_build_falls_back_to_empty_root_page() {
        let page = load_page_bootstrap();
        assert!(page.listing.is_empty());
        assert_eq!(page.current_path.as_str(), "/");
        assert!(!redirect_to_directory_location());
    }
}
