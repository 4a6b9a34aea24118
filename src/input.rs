// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard input parsing for dropdown navigation.
//!
//! The dropdown listens for `keydown` events on its root scope and
//! interprets `event.key` values case-insensitively. Exactly three keys are
//! recognized:
//!
//! 1. **Enter**: `"enter"`
//! 2. **Arrow down**: `"down"` (legacy value) or `"arrowdown"`
//!
//! Every other key parses to `None` and passes through to the host
//! unhandled, so default browser/toolkit behavior is retained.

/// A navigation key recognized by the dropdown controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// The enter/return key.
    Enter,
    /// The down-arrow key, in either its legacy (`"down"`) or standard
    /// (`"arrowdown"`) spelling.
    ArrowDown,
}

impl NavKey {
    /// Parses a raw `key` value into a navigation key.
    ///
    /// Matching is case-insensitive. Returns `None` for every key the
    /// dropdown does not handle.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "enter" => Some(Self::Enter),
            "down" | "arrowdown" => Some(Self::ArrowDown),
            _ => None,
        }
    }
}

/// What the host should do with a key event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The controller consumed the key; suppress the default behavior
    /// (e.g. page scroll on arrow-down).
    SuppressDefault,
    /// Let the event continue with its default behavior.
    PassThrough,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: recognized keys parse case-insensitively
    #[test]
    fn test_recognized_keys() {
        assert_eq!(NavKey::parse("enter"), Some(NavKey::Enter));
        assert_eq!(NavKey::parse("Enter"), Some(NavKey::Enter));
        assert_eq!(NavKey::parse("ENTER"), Some(NavKey::Enter));
        assert_eq!(NavKey::parse("down"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::parse("Down"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::parse("arrowdown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::parse("ArrowDown"), Some(NavKey::ArrowDown));
    }

    /// Test: unrelated keys fall through unhandled
    #[test]
    fn test_unrelated_keys_pass_through() {
        for key in ["escape", "tab", "arrowup", "up", "a", " ", ""] {
            assert_eq!(
                NavKey::parse(key),
                None,
                "Key {:?} should not be recognized",
                key
            );
        }
    }
}
