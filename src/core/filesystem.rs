use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TREE;
use crate::core::error::TreeError;
use crate::models::VirtualPath;

/// Children of a directory, keyed by unique entry name.
pub type Directory = BTreeMap<String, FsNode>;

/// A node of the virtual tree.
///
/// In the TOML definition a string value is a file and a table is a
/// directory, so the untagged representation maps one to one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FsNode {
    File(String),
    Directory(Directory),
}

impl FsNode {
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(children) => Some(children),
            Self::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&str> {
        match self {
            Self::File(content) => Some(content),
            Self::Directory(_) => None,
        }
    }
}

/// Directory entry returned by list_entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only virtual filesystem browsed by `ls`, `cd` and `cat`.
///
/// # Path Convention
///
/// Targets typed by the visitor are resolved lexically against the current
/// [`VirtualPath`] before the tree is consulted:
///
/// - `""`, `/` and `~` mean the root
/// - a leading `/` (or `~/`) makes the target absolute
/// - `..` goes up one level (no-op at the root), `.` stays put
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualFs {
    root: Directory,
}

impl VirtualFs {
    pub fn new(root: Directory) -> Self {
        Self { root }
    }

    /// Create filesystem with an empty root (fallback when the definition fails to load).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a tree definition written as TOML.
    pub fn from_toml(source: &str) -> Result<Self, TreeError> {
        toml::from_str::<Directory>(source)
            .map(Self::new)
            .map_err(|e| TreeError(e.to_string()))
    }

    /// The tree shipped with the site.
    pub fn bundled() -> Self {
        Self::from_toml(DEFAULT_TREE).unwrap_or_else(|e| {
            log::warn!("{}; starting with an empty tree", e);
            Self::empty()
        })
    }

    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Resolve a path to the directory it names.
    ///
    /// Returns `None` if any segment is missing or names a file.
    pub fn resolve(&self, path: &VirtualPath) -> Option<&Directory> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current.get(segment)?.as_directory()?;
        }
        Some(current)
    }

    /// List a directory's entries.
    ///
    /// Directories come first, then files; each group is alphabetical, so
    /// the order is the same on every call.
    pub fn list_entries(dir: &Directory) -> Vec<DirEntry> {
        let mut entries: Vec<DirEntry> = dir
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                is_dir: node.is_directory(),
            })
            .collect();
        // BTreeMap already yields names in order; a stable sort keeps it within groups.
        entries.sort_by_key(|entry| !entry.is_dir);
        entries
    }

    /// Content of the file `name` directly inside `dir`.
    pub fn read_file<'a>(dir: &'a Directory, name: &str) -> Option<&'a str> {
        dir.get(name)?.as_file()
    }

    /// List the directory at `path`.
    pub fn list_dir(&self, path: &VirtualPath) -> Option<Vec<DirEntry>> {
        self.resolve(path).map(Self::list_entries)
    }

    /// Work out where `cd target` leads from `current`.
    ///
    /// Returns the new path only if the whole target resolves to a directory.
    pub fn navigate(&self, current: &VirtualPath, target: &str) -> Option<VirtualPath> {
        let resolved = Self::resolve_target(current, target);
        self.resolve(&resolved).map(|_| resolved)
    }

    /// Read the file `target` names relative to `current`.
    pub fn read_path(&self, current: &VirtualPath, target: &str) -> Option<&str> {
        let resolved = Self::resolve_target(current, target);
        let name = resolved.name()?;
        let dir = self.resolve(&resolved.parent())?;
        Self::read_file(dir, name)
    }

    /// Resolve a target string against `current` without consulting the tree.
    pub fn resolve_target(current: &VirtualPath, target: &str) -> VirtualPath {
        let target = target.trim();
        let (mut segments, rest) = if target == "~" {
            (Vec::new(), "")
        } else if let Some(rest) = target.strip_prefix("~/") {
            (Vec::new(), rest)
        } else if let Some(rest) = target.strip_prefix('/') {
            (Vec::new(), rest)
        } else {
            (current.segments().to_vec(), target)
        };

        for part in rest.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }

        VirtualPath::from_segments(segments)
    }
}
