// SPDX-License-Identifier: GPL-3.0-only

//! Popover collaborator contracts.
//!
//! The popover itself is a sibling component supplied by the host; the
//! dropdown controller only drives it through the [`Popover`] trait and
//! reacts to the opened/closed transitions the popover reports back via
//! [`crate::controller::DropdownController::on_popover_opened`] and
//! [`crate::controller::DropdownController::on_popover_closed`].

use crate::element::ElementId;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of the popover relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverAlignment {
    /// Align the popover's left edge with the anchor's left edge.
    #[default]
    Left,
    /// Center the popover on the anchor.
    Center,
    /// Align the popover's right edge with the anchor's right edge.
    Right,
}

/// Which side of the anchor the popover is placed on.
///
/// The dropdown controller always places its menu [`Below`][Self::Below] the
/// trigger button; the other placements exist for hosts reusing the popover
/// contract elsewhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverPlacement {
    /// Above the anchor.
    Above,
    /// Below the anchor.
    #[default]
    Below,
    /// To the left of the anchor.
    Left,
    /// To the right of the anchor.
    Right,
}

/// The interaction that makes the popover open itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopoverTriggerMode {
    /// Open on pointer click.
    #[default]
    Click,
    /// Open when the pointer enters the trigger.
    MouseEnter,
}

/// The popover overlay driven by the dropdown controller.
///
/// Implementations must invoke the controller's opened/closed callbacks when
/// the corresponding transition completes; the controller never flips its
/// open flag on its own.
pub trait Popover {
    /// Open the popover and position it next to the anchor element.
    fn position_next_to(
        &mut self,
        anchor: &ElementId,
        placement: PopoverPlacement,
        alignment: PopoverAlignment,
    );

    /// Close the popover.
    fn close(&mut self);

    /// Recompute the popover position against its current anchor.
    fn reposition(&mut self);
}

/// An element that can receive input focus.
pub trait Focusable {
    /// Move input focus to this element.
    fn focus(&mut self);
}

// ============================================================================
// Tests
// ============================================================================
