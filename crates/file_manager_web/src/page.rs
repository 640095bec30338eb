//! Page host backed by the browser window.

use file_manager_host::PageHost;
use leptos::logging;

#[derive(Debug, Clone, Copy, Default)]
/// Page host using `window.alert`, `window.prompt` and `window.location`.
pub struct WebPageHost;

impl PageHost for WebPageHost {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = crate::interop::window()
                .and_then(|window| window.alert_with_message(message).map_err(js_err))
            {
                logging::warn!("alert failed: {err}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        logging::log!("alert: {message}");
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            match crate::interop::window().and_then(|window| {
                window
                    .prompt_with_message_and_default(message, default)
                    .map_err(js_err)
            }) {
                Ok(answer) => answer,
                Err(err) => {
                    logging::warn!("prompt failed: {err}");
                    None
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (message, default);
            None
        }
    }

    fn reload(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = crate::interop::window()
                .and_then(|window| window.location().reload().map_err(js_err))
            {
                logging::warn!("page reload failed: {err}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        logging::log!("reload requested");
    }

    fn navigate(&self, href: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = crate::interop::window()
                .and_then(|window| window.location().set_href(href).map_err(js_err))
            {
                logging::warn!("navigate to `{href}` failed: {err}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        logging::log!("navigate requested: {href}");
    }
}

/// Current `location.pathname`, or `/` when unavailable.
pub fn location_pathname() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        crate::interop::window()
            .and_then(|window| window.location().pathname().map_err(js_err))
            .unwrap_or_else(|err| {
                logging::warn!("reading location failed: {err}");
                "/".to_string()
            })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn js_err(err: wasm_bindgen::JsValue) -> String {
    crate::interop::js_error_to_string(err)
}
