//! Directory listing model.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Directory entry kind, derived from the entry name.
pub enum EntryKind {
    /// Name ends with `/`.
    Directory,
    /// Anything else.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// One file or directory name within a listing. A trailing `/` marks a directory.
pub struct Entry {
    name: String,
}

impl Entry {
    /// Wraps a raw entry name as sent by the server.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Raw name, including the trailing `/` for directories.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry kind derived from the trailing separator.
    pub fn kind(&self) -> EntryKind {
        if self.name.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// Returns `true` for directory entries.
    pub fn is_dir(&self) -> bool {
        self.kind() == EntryKind::Directory
    }

    /// Name shown to the user (directories lose their trailing `/`).
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix('/').unwrap_or(&self.name)
    }

    /// Relative href used for navigation from the current directory.
    pub fn href(&self) -> String {
        format!("./{}", self.name)
    }
}

/// Orders directories before files, then by name.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Entry>", into = "Vec<Entry>")]
/// Entries of one directory, always kept directories-first and name-ordered.
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    /// Builds a sorted listing from raw names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Entry::new).collect::<Vec<_>>().into()
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Listing {
    fn from(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(compare_entries);
        Self { entries }
    }
}

impl From<Listing> for Vec<Entry> {
    fn from(listing: Listing) -> Self {
        listing.entries
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(listing: &Listing) -> Vec<&str> {
        listing.iter().map(Entry::name).collect()
    }

    #[test]
    fn listing_puts_directories_first_then_sorts_by_name() {
        let listing = Listing::from_names(["b.txt", "zeta/", "a.txt", "alpha/", "B.txt", "mid/"]);

        assert_eq!(
            names(&listing),
            vec!["alpha/", "mid/", "zeta/", "B.txt", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn every_directory_precedes_every_file() {
        let listing = Listing::from_names([
            "z", "y/", "x", "w/", "v", "u/", "t", "s/", "r", "q/", ".hidden", ".config/",
        ]);

        let first_file = listing
            .iter()
            .position(|entry| !entry.is_dir())
            .expect("has files");
        assert!(listing.entries()[..first_file].iter().all(Entry::is_dir));
        assert!(listing.entries()[first_file..].iter().all(|e| !e.is_dir()));
        for pair in listing.entries().windows(2) {
            if pair[0].is_dir() == pair[1].is_dir() {
                assert!(pair[0].name() < pair[1].name(), "{pair:?}");
            }
        }
    }

    #[test]
    fn entry_helpers_strip_trailing_separator() {
        let dir = Entry::new("photos/");
        let file = Entry::new("notes.md");

        assert_eq!(dir.kind(), EntryKind::Directory);
        assert_eq!(dir.display_name(), "photos");
        assert_eq!(dir.href(), "./photos/");
        assert_eq!(file.kind(), EntryKind::File);
        assert_eq!(file.display_name(), "notes.md");
        assert_eq!(file.href(), "./notes.md");
    }

    #[test]
    fn listing_deserializes_from_name_array_and_sorts() {
        let listing: Listing =
            serde_json::from_str(r#"["readme.md", "src/", "Cargo.toml"]"#).expect("listing");

        assert_eq!(names(&listing), vec!["src/", "Cargo.toml", "readme.md"]);
    }

    #[test]
    fn empty_listing_is_empty() {
        let listing = Listing::from_names(Vec::<String>::new());
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }
}
