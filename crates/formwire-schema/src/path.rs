//! Paths for addressing nodes within a schema tree
//!
//! Provides [`SchemaPath`] for reporting where in a schema a problem was found.

use std::fmt::{self, Display, Formatter};

/// Path from the schema root to a nested node
///
/// Segments are field names for object members and `[n]` for union options.
///
/// # Examples
/// - `["venue", "city"]` → `venue.city`
/// - `["status", "[1]"]` → `status.[1]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SchemaPath(Vec<String>);

impl SchemaPath {
    /// Empty path (root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if path is empty (root)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a field segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Append a union option index, returning new path
    #[inline]
    #[must_use]
    pub fn option(&self, index: usize) -> Self {
        self.child(format!("[{index}]"))
    }
}

impl Display for SchemaPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_root() {
        let path = SchemaPath::root();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "<root>");
    }

    #[test]
    fn path_child_and_option() {
        let path = SchemaPath::root().child("status").option(1);
        assert_eq!(path.segments(), &["status", "[1]"]);
        assert_eq!(path.to_string(), "status.[1]");
    }
}
