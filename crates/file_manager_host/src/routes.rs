//! Server route configuration and action request building.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::path::CurrentPath;
use crate::request::{ActionKind, ActionRequest};

/// Characters escaped inside a query value. `/` stays readable.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Route prefixes the server injects into the page. Missing fields fall back to defaults.
pub struct FileManagerRoutes {
    /// Static resource prefix (icons, stylesheets).
    pub res_route: String,
    /// Prefix for `rename` and `new_folder` endpoints.
    pub api_route: String,
    /// Raw file download prefix.
    pub fetch_route: String,
    /// Upload endpoint.
    pub upload_route: String,
    /// Delete endpoint.
    pub delete_route: String,
}

impl Default for FileManagerRoutes {
    fn default() -> Self {
        Self {
            res_route: "/res".to_string(),
            api_route: "/api".to_string(),
            fetch_route: "/fetch".to_string(),
            upload_route: "/api/upload".to_string(),
            delete_route: "/api/delete".to_string(),
        }
    }
}

impl FileManagerRoutes {
    /// `POST {delete_route}?path=<path>`.
    pub fn delete_request(&self, path: &str) -> ActionRequest {
        ActionRequest {
            kind: ActionKind::Delete,
            url: format!("{}?path={}", self.delete_route, encode(path)),
        }
    }

    /// `POST {upload_route}?path=<dir>`; the file travels as multipart field `file`.
    pub fn upload_request(&self, dir: &CurrentPath) -> ActionRequest {
        ActionRequest {
            kind: ActionKind::Upload,
            url: format!("{}?path={}", self.upload_route, encode(dir.as_str())),
        }
    }

    /// `POST {api_route}/rename?path=<path>&rename=<new_name>`.
    pub fn rename_request(&self, path: &str, new_name: &str) -> ActionRequest {
        ActionRequest {
            kind: ActionKind::Rename,
            url: format!(
                "{}/rename?path={}&rename={}",
                self.api_route,
                encode(path),
                encode(new_name)
            ),
        }
    }

    /// `POST {api_route}/new_folder?path=<dir><name>`.
    pub fn new_folder_request(&self, dir: &CurrentPath, name: &str) -> ActionRequest {
        ActionRequest {
            kind: ActionKind::NewFolder,
            url: format!(
                "{}/new_folder?path={}",
                self.api_route,
                encode(&dir.join(name))
            ),
        }
    }

    /// Resource URL under the static prefix.
    pub fn resource(&self, name: &str) -> String {
        format!("{}/{}", self.res_route.trim_end_matches('/'), name)
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builds_action_urls_from_routes() {
        let routes = FileManagerRoutes::default();
        let dir = CurrentPath::from_location("/docs/");

        assert_eq!(
            routes.delete_request("/docs/old.txt").url,
            "/api/delete?path=/docs/old.txt"
        );
        assert_eq!(routes.upload_request(&dir).url, "/api/upload?path=/docs/");
        assert_eq!(
            routes.rename_request("/docs/a.txt", "b.txt").url,
            "/api/rename?path=/docs/a.txt&rename=b.txt"
        );
        assert_eq!(
            routes.new_folder_request(&dir, "New Folder").url,
            "/api/new_folder?path=/docs/New%20Folder"
        );
    }

    #[test]
    fn query_values_escape_separators() {
        let routes = FileManagerRoutes::default();
        let request = routes.rename_request("/a&b/c?.txt", "x=1#y");

        assert_eq!(
            request.url,
            "/api/rename?path=/a%26b/c%3F.txt&rename=x%3D1%23y"
        );
        assert_eq!(request.kind, ActionKind::Rename);
        assert_eq!(request.method(), "POST");
    }

    #[test]
    fn browser_location_paths_are_encoded_exactly_once() {
        let routes = FileManagerRoutes::default();
        let dir = CurrentPath::from_location("/my%20dir/");

        assert_eq!(
            routes.delete_request(&dir.join("a.txt")).url,
            "/api/delete?path=/my%20dir/a.txt"
        );
        assert_eq!(routes.upload_request(&dir).url, "/api/upload?path=/my%20dir/");
        assert_eq!(
            routes.new_folder_request(&dir, "x").url,
            "/api/new_folder?path=/my%20dir/x"
        );
    }

    #[test]
    fn partial_route_config_keeps_defaults() {
        let routes: FileManagerRoutes =
            serde_json::from_str(r#"{"api_route": "/fm/api"}"#).expect("routes");

        assert_eq!(routes.api_route, "/fm/api");
        assert_eq!(routes.delete_route, "/api/delete");
        assert_eq!(routes.resource("icons.css"), "/res/icons.css");
    }
}
