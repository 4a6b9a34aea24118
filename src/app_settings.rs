// SPDX-License-Identifier: GPL-3.0-only

//! Centralized crate settings and constants.

/// Effective button style when none is configured.
pub const DEFAULT_BUTTON_STYLE: &str = "default";

/// Effective button type when none is configured.
pub const DEFAULT_BUTTON_TYPE: &str = "select";

/// Button types whose configured label is returned verbatim (no localized
/// fallback).
pub const LABEL_VERBATIM_BUTTON_TYPES: &[&str] = &["select", "tab"];

/// Fluent resource key for the default context-menu label.
pub const DEFAULT_LABEL_RESOURCE_KEY: &str = "dropdown-context-menu-default-label";

/// Fixed locale used for the synchronous default-label lookup.
pub const DEFAULT_LABEL_LOCALE: &str = "en-US";

/// Capacity of the broadcast message channel.
///
/// Command traffic is sparse (a handful of messages per user interaction),
/// so a small buffer is enough to absorb bursts before subscribers drain.
pub const CHANNEL_CAPACITY: usize = 16;

/// Minimal deferred-tick delay in milliseconds.
///
/// Deferred work only needs to run after the current event handler has
/// completed ("next tick"); any positive delay satisfies that contract.
pub const DEFER_TICK_MS: u64 = 1;

/// Prefix used for generated menu identifiers (accessibility linkage).
pub const MENU_ID_PREFIX: &str = "dropdown-menu";
