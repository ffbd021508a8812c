//! Wire-level records describing the remote file hierarchy.
//!
//! Both types are deserialised straight from the notebook server's JSON, so
//! field names follow its camelCase convention on the wire.

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────── entry ─────────────

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FsEntry {
    /// Absolute path on the server; unique within its parent.
    pub path: String,
    /// Path of the directory that contains this entry.
    pub parent_path: String,
    /// Display label.
    pub name: String,
    pub is_directory: bool,
}

#[cfg(test)]
impl FsEntry {
    pub fn directory(path: impl Into<String>, parent_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parent_path: parent_path.into(),
            name: name.into(),
            is_directory: true,
        }
    }

    pub fn file(path: impl Into<String>, parent_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parent_path: parent_path.into(),
            name: name.into(),
            is_directory: false,
        }
    }
}

// ───────────────────────────────────────── listing ───────────

/// Result of listing a single directory.
///
/// `path` echoes the requested directory but may have been normalised by the
/// server. `entries` keep the server's order, which is only meaningful for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub path: String,
    pub entries: Vec<FsEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_uses_camel_case_on_the_wire() {
        let json = r#"{"path":"/root/a.md","parentPath":"/root","name":"a.md","isDirectory":false}"#;
        let entry: FsEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, FsEntry::file("/root/a.md", "/root", "a.md"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["parentPath"], "/root");
        assert_eq!(back["isDirectory"], false);
    }

    #[test]
    fn test_listing_preserves_entry_order() {
        let json = r#"{
            "path": "/root",
            "entries": [
                {"path":"/root/z","parentPath":"/root","name":"z","isDirectory":true},
                {"path":"/root/a","parentPath":"/root","name":"a","isDirectory":false}
            ]
        }"#;
        let listing: DirectoryListing = serde_json::from_str(json).unwrap();
        let names: Vec<_> = listing.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["z", "a"]);
    }
}
