// SPDX-License-Identifier: GPL-3.0-only

//! Dropkit - a dropdown trigger controller coordinating a popover overlay
//!
//! This crate provides the interaction logic for a dropdown/menu trigger
//! button bound to a popover overlay: open/close state, keyboard
//! navigation, focus return, and message-based coordination with the
//! overlay and with external orchestrators.
//!
//! # Architecture
//!
//! Three parties cooperate around one broadcast channel:
//!
//! 1. **Controller** ([`DropdownController`]): interprets keyboard input,
//!    maintains the open/keyboard-active state machine, and drives the
//!    popover.
//!
//! 2. **Popover** (host-supplied, via the [`Popover`] trait): the floating
//!    menu surface. It is authoritative for the open state and reports
//!    transitions back through the controller's opened/closed callbacks.
//!
//! 3. **External orchestrators**: anything holding a clone of the
//!    [`MessageChannel`] can open, close, reposition, or refocus the
//!    dropdown by publishing [`DropdownMessage`] values. Sharing a channel
//!    between several dropdowns drives them in sync.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants and defaults
//! - `channel`: Broadcast message channel (publish/subscribe)
//! - `config`: Configuration with explicit effective-value accessors
//! - `controller`: The dropdown interaction controller
//! - `element`: Lightweight element identifiers
//! - `i18n`: Localization support using fluent translations
//! - `input`: Keyboard parsing for the navigation keys
//! - `message`: The closed set of dropdown command messages
//! - `overlay`: Popover and focus collaborator contracts

pub mod app_settings;
pub mod channel;
pub mod config;
pub mod controller;
pub mod element;
pub mod i18n;
pub mod input;
pub mod message;
pub mod overlay;

pub use channel::{ChannelError, ChannelResult, MessageChannel, Subscription};
pub use config::{DropdownConfig, DropdownTriggerType};
pub use controller::DropdownController;
pub use element::ElementId;
pub use input::{KeyDisposition, NavKey};
pub use message::DropdownMessage;
pub use overlay::{Focusable, Popover, PopoverAlignment, PopoverPlacement, PopoverTriggerMode};

// Re-export the fl! macro's loader for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Test Support
// ============================================================================


// ============================================================================
// Integration Tests
// ============================================================================
