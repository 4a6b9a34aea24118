// SPDX-License-Identifier: GPL-3.0-only

//! Lightweight element identifiers.
//!
//! `ElementId` stands in for a host-toolkit element handle: the popover uses
//! it to find its anchor, and the menu uses it for accessibility linkage
//! (`aria-labelledby`-style references). Identifiers are either supplied by
//! the host or generated process-unique.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_UNIQUE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier for an element in the host view tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(Internal);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Internal {
    Unique(u64),
    Custom(String),
}

impl ElementId {
    /// Create an identifier from a host-supplied name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(Internal::Custom(id.into()))
    }

    /// Generate a process-unique identifier.
    pub fn unique() -> Self {
        let id = NEXT_UNIQUE_ID.fetch_add(1, Ordering::Relaxed);
        Self(Internal::Unique(id))
    }

    /// Generate a process-unique identifier rendered as `<prefix>-<n>`.
    pub fn unique_with_prefix(prefix: &str) -> Self {
        let id = NEXT_UNIQUE_ID.fetch_add(1, Ordering::Relaxed);
        Self(Internal::Custom(format!("{}-{}", prefix, id)))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Internal::Unique(id) => write!(f, "element-{}", id),
            Internal::Custom(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_ids_compare_by_name() {
        assert_eq!(ElementId::new("trigger"), ElementId::new("trigger"));
        assert_ne!(ElementId::new("trigger"), ElementId::new("menu"));
    }

    #[test]
    fn test_unique_ids_are_distinct() {
        assert_ne!(
            ElementId::unique(),
            ElementId::unique(),
            "Generated identifiers must never collide"
        );
    }

    #[test]
    fn test_unique_with_prefix_renders_prefix_and_counter() {
        let id = ElementId::unique_with_prefix("menu");
        let rendered = id.to_string();
        let suffix = rendered
            .strip_prefix("menu-")
            .expect("Prefix should lead the rendered id");
        assert!(
            !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()),
            "The raw counter must follow the prefix, got {:?}",
            rendered
        );
        assert_ne!(ElementId::unique_with_prefix("menu"), id);
    }

    #[test]
    fn test_display() {
        assert_eq!(ElementId::new("menu-1").to_string(), "menu-1");
        assert!(ElementId::unique().to_string().starts_with("element-"));
    }
}
