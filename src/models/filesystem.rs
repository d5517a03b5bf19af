use std::fmt;

// =============================================================================
// Virtual Path
// =============================================================================

/// Location of the console's working directory inside the virtual tree.
///
/// Stored as an ordered list of segments; the root is the empty list.
/// A `VirtualPath` says nothing about whether the location exists. The
/// console only ever stores paths that were resolved against the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The root directory.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments, skipping empty ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path one level down.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Path one level up. The parent of the root is the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Last segment, if any.
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(VirtualPath::root().to_string(), "/");
        assert!(VirtualPath::root().is_root());
    }

    #[test]
    fn test_join_and_parent() {
        let path = VirtualPath::root().join("projects").join("archive");
        assert_eq!(path.to_string(), "/projects/archive");
        assert_eq!(path.parent().to_string(), "/projects");
        assert_eq!(path.name(), Some("archive"));
    }

    #[test]
    fn test_parent_of_root_is_root() {
        assert_eq!(VirtualPath::root().parent(), VirtualPath::root());
    }

    #[test]
    fn test_from_segments_skips_empty() {
        let path = VirtualPath::from_segments(["", "projects", ""]);
        assert_eq!(path.segments(), &["projects".to_string()]);
    }
}
