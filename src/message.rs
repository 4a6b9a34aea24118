// SPDX-License-Identifier: GPL-3.0-only

//! Dropdown command message types.
//!
//! This module defines the closed set of command messages carried on the
//! dropdown's broadcast channel. Messages flow in both directions: the
//! controller publishes them in response to keyboard input and overlay
//! transitions, and external orchestrators publish them to drive the
//! dropdown without calling methods on it directly.

/// Commands carried on the dropdown message channel.
///
/// The set is closed: receivers match exhaustively and treat variants they
/// have no business handling as explicit no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownMessage {
    /// Open the popover, positioned below the trigger button.
    Open,
    /// Close the popover.
    Close,
    /// Recompute the popover position. Only honored while the popover is
    /// open, after a deferred tick so layout can settle first.
    Reposition,
    /// Move input focus to the first menu item. Consumed by the menu
    /// component; the controller emits it but does not act on it.
    FocusFirstItem,
    /// Move input focus back to the trigger button.
    FocusTriggerButton,
}

// ============================================================================
// Tests
// ============================================================================
