//! Current-directory path helpers.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::listing::Entry;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Directory path of the page being shown. Always starts and ends with `/`.
pub struct CurrentPath(String);

impl CurrentPath {
    /// Normalizes a browser `location.pathname` into a directory path.
    ///
    /// The pathname arrives percent-encoded and is decoded first, so the stored path holds the
    /// real directory names. See [`CurrentPath::from_decoded`] for the remaining rules.
    pub fn from_location(pathname: &str) -> Self {
        Self::from_decoded(&percent_decode_str(pathname).decode_utf8_lossy())
    }

    /// Normalizes an already-decoded path, such as the one the server embeds in the page.
    ///
    /// Whitespace is trimmed, a leading `/` is ensured and a trailing `/` is appended when
    /// missing. Empty input maps to `/`.
    pub fn from_decoded(path: &str) -> Self {
        let trimmed = path.trim();
        let mut out = String::with_capacity(trimmed.len() + 2);
        if !trimmed.starts_with('/') {
            out.push('/');
        }
        out.push_str(trimmed);
        if !out.ends_with('/') {
            out.push('/');
        }
        Self(out)
    }

    /// Filesystem root.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute path of a child entry.
    pub fn join(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }

    /// Absolute path of a listed entry.
    pub fn entry_path(&self, entry: &Entry) -> String {
        self.join(entry.name())
    }

    /// Breadcrumb trail of ancestor directories.
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        let mut href = String::from("/");
        breadcrumb_segments(&self.0)
            .into_iter()
            .map(|name| {
                href.push_str(&name);
                href.push('/');
                Crumb {
                    name,
                    href: href.clone(),
                }
            })
            .collect()
    }
}

impl Default for CurrentPath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<String> for CurrentPath {
    fn from(value: String) -> Self {
        Self::from_decoded(&value)
    }
}

impl From<CurrentPath> for String {
    fn from(value: CurrentPath) -> Self {
        value.0
    }
}

impl std::fmt::Display for CurrentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One breadcrumb segment.
pub struct Crumb {
    /// Directory name.
    pub name: String,
    /// Absolute link to the directory.
    pub href: String,
}

/// Returns the ancestor directory names of `path`, excluding the current directory.
///
/// `/a/b/c/` yields `["a", "b"]`; `/` and `/a/` yield nothing.
pub fn breadcrumb_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    segments.pop();
    segments
}

/// Location the page must move to before rendering, if `pathname` is not a directory URL.
pub fn directory_redirect_target(pathname: &str) -> Option<String> {
    if pathname.ends_with('/') {
        None
    } else {
        Some(format!("{pathname}/"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_location_always_ends_with_separator() {
        let cases = [
            ("", "/"),
            ("   ", "/"),
            ("/", "/"),
            ("/a", "/a/"),
            ("/a/b/", "/a/b/"),
            ("a/b", "/a/b/"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                CurrentPath::from_location(input).as_str(),
                expected,
                "input={input:?}"
            );
        }
    }

    #[test]
    fn breadcrumb_drops_current_directory() {
        assert_eq!(breadcrumb_segments("/a/b/c/"), vec!["a", "b"]);
        assert_eq!(breadcrumb_segments("/a/"), Vec::<String>::new());
        assert_eq!(breadcrumb_segments("/"), Vec::<String>::new());
        assert_eq!(breadcrumb_segments("/a//b/c/"), vec!["a", "b"]);
    }

    #[test]
    fn breadcrumb_links_point_at_ancestors() {
        let crumbs = CurrentPath::from_location("/a/b/c/").breadcrumb();

        assert_eq!(
            crumbs,
            vec![
                Crumb {
                    name: "a".to_string(),
                    href: "/a/".to_string(),
                },
                Crumb {
                    name: "b".to_string(),
                    href: "/a/b/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn encoded_location_is_decoded_once() {
        let dir = CurrentPath::from_location("/my%20dir/%C3%A9t%C3%A9/");

        assert_eq!(dir.as_str(), "/my dir/\u{e9}t\u{e9}/");
        assert_eq!(dir.join("a.txt"), "/my dir/\u{e9}t\u{e9}/a.txt");
        assert_eq!(
            CurrentPath::from_location("/my%20dir/sub/").breadcrumb(),
            vec![Crumb {
                name: "my dir".to_string(),
                href: "/my dir/".to_string(),
            }]
        );
    }

    #[test]
    fn decoded_paths_keep_literal_percent_signs() {
        assert_eq!(CurrentPath::from_decoded("/100%20/").as_str(), "/100%20/");
    }

    #[test]
    fn join_appends_entry_name() {
        let path = CurrentPath::from_location("/docs/");
        assert_eq!(path.join("readme.md"), "/docs/readme.md");
        assert_eq!(path.entry_path(&Entry::new("img/")), "/docs/img/");
    }

    #[test]
    fn redirect_only_for_non_directory_locations() {
        assert_eq!(directory_redirect_target("/docs"), Some("/docs/".to_string()));
        assert_eq!(directory_redirect_target("/docs/"), None);
        assert_eq!(directory_redirect_target("/"), None);
    }
}
