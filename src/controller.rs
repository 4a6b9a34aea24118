// SPDX-License-Identifier: GPL-3.0-only

//! The dropdown controller.
//!
//! The controller owns the open/closed interaction state of a dropdown
//! trigger button and coordinates a popover overlay through two paths:
//!
//! - **Keyboard input** from the host's `keydown` events, translated into
//!   channel messages and state changes.
//! - **Channel messages**, published either by the controller itself or by
//!   external orchestrators, drained with [`pump`][DropdownController::pump]
//!   and turned into popover calls.
//!
//! The popover is authoritative for the open flag: the controller only
//! flips `is_open` inside the opened/closed callbacks the popover invokes.
//!
//! # Deferred work
//!
//! Two operations run "on the next tick" rather than inline: refocusing the
//! trigger after an enter press (so the selected item's handler runs first)
//! and repositioning after a [`Reposition`][DropdownMessage::Reposition]
//! message (so layout settles before measuring). Deferred actions queue up
//! until the host calls [`fire_deferred`][DropdownController::fire_deferred]
//! on its next tick, or awaits [`settle`][DropdownController::settle]. A
//! torn-down controller discards its queue, so deferred work can never touch
//! a dead component.

use crate::app_settings;
use crate::channel::{MessageChannel, Subscription};
use crate::config::DropdownConfig;
use crate::element::ElementId;
use crate::input::{KeyDisposition, NavKey};
use crate::message::DropdownMessage;
use crate::overlay::{Focusable, Popover, PopoverPlacement, PopoverTriggerMode};
use std::time::Duration;

/// Work scheduled to run on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    /// Publish [`DropdownMessage::FocusTriggerButton`] on the channel.
    PublishFocusTrigger,
    /// Invoke the popover's reposition routine.
    Reposition,
}

/// Interaction controller for a dropdown trigger bound to a popover.
///
/// `P` is the popover overlay collaborator and `B` the focusable trigger
/// button element, both supplied by the host.
pub struct DropdownController<P: Popover, B: Focusable> {
    config: DropdownConfig,
    channel: MessageChannel,
    inbox: Option<Subscription>,
    popover: P,
    trigger: B,
    trigger_id: ElementId,
    menu_id: ElementId,
    is_open: bool,
    is_keyboard_active: bool,
    pending: Vec<DeferredAction>,
}

impl<P: Popover, B: Focusable> DropdownController<P, B> {
    /// Create a controller and subscribe it to the given channel.
    ///
    /// The subscription is live from this point on; messages published
    /// earlier are never replayed.
    pub fn new(config: DropdownConfig, channel: MessageChannel, popover: P, trigger: B) -> Self {
        let inbox = channel.subscribe();
        Self {
            config,
            channel,
            inbox: Some(inbox),
            popover,
            trigger,
            trigger_id: ElementId::unique(),
            menu_id: ElementId::unique_with_prefix(app_settings::MENU_ID_PREFIX),
            is_open: false,
            is_keyboard_active: false,
            pending: Vec::new(),
        }
    }

    /// Use a host-supplied identifier for the trigger anchor element.
    pub fn with_trigger_id(mut self, id: ElementId) -> Self {
        self.trigger_id = id;
        self
    }

    /// Use a host-supplied identifier for the menu (accessibility linkage).
    pub fn with_menu_id(mut self, id: ElementId) -> Self {
        self.menu_id = id;
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: DropdownConfig) {
        self.config = config;
    }

    /// The channel this controller is bound to.
    ///
    /// Clone it to publish messages from outside the controller.
    pub fn channel(&self) -> &MessageChannel {
        &self.channel
    }

    /// Whether the popover is currently open, as last reported by the
    /// popover itself.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the current interaction sequence was started via keyboard.
    pub fn is_keyboard_active(&self) -> bool {
        self.is_keyboard_active
    }

    /// Identifier of the trigger anchor element.
    pub fn trigger_id(&self) -> &ElementId {
        &self.trigger_id
    }

    /// Identifier of the menu element.
    pub fn menu_id(&self) -> &ElementId {
        &self.menu_id
    }

    /// The effective trigger-button label (see
    /// [`DropdownConfig::effective_label`]).
    pub fn label(&self) -> Option<String> {
        self.config.effective_label()
    }

    /// The trigger mode to configure the popover with (see
    /// [`DropdownConfig::popover_trigger_mode`]).
    pub fn popover_trigger_mode(&self) -> PopoverTriggerMode {
        self.config.popover_trigger_mode()
    }

    /// Whether deferred work is queued for the next tick.
    pub fn has_deferred_work(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether the controller has been torn down.
    pub fn is_torn_down(&self) -> bool {
        self.inbox.is_none()
    }

    /// Handle a `keydown` event from the widget's root scope.
    ///
    /// Returns whether the host must suppress the key's default behavior.
    /// Keys other than enter and arrow-down are ignored and pass through.
    pub fn handle_key_down(&mut self, key: &str) -> KeyDisposition {
        let Some(key) = NavKey::parse(key) else {
            return KeyDisposition::PassThrough;
        };

        if self.is_open {
            match key {
                // Wait a tick before returning focus to the trigger, so the
                // active menu item's selection handler runs first.
                NavKey::Enter => {
                    self.defer(DeferredAction::PublishFocusTrigger);
                    KeyDisposition::PassThrough
                }

                // Arrow-down enters keyboard mode even when the menu was
                // first opened with the pointer.
                NavKey::ArrowDown => {
                    if self.is_keyboard_active {
                        KeyDisposition::PassThrough
                    } else {
                        self.is_keyboard_active = true;
                        self.send_message(DropdownMessage::FocusFirstItem);
                        KeyDisposition::SuppressDefault
                    }
                }
            }
        } else {
            match key {
                // Arm keyboard mode without opening; if the popover opens by
                // other means next, focus will land on the first item.
                NavKey::Enter => {
                    self.is_keyboard_active = true;
                    KeyDisposition::PassThrough
                }

                NavKey::ArrowDown => {
                    self.is_keyboard_active = true;
                    self.send_message(DropdownMessage::Open);
                    KeyDisposition::SuppressDefault
                }
            }
        }
    }

    /// Drain and handle every pending inbound message.
    ///
    /// The host calls this after publishing, after input events, and after
    /// [`fire_deferred`][Self::fire_deferred]. No-op once torn down.
    pub fn pump(&mut self) {
        loop {
            let Some(inbox) = self.inbox.as_mut() else {
                return;
            };
            let Some(message) = inbox.try_next() else {
                return;
            };
            self.handle_incoming(message);
        }
    }

    /// Run the deferred actions queued before this tick.
    ///
    /// Actions scheduled while firing (none today) would wait for the next
    /// tick. No-op once torn down.
    pub fn fire_deferred(&mut self) {
        if self.is_torn_down() {
            self.pending.clear();
            return;
        }

        for action in std::mem::take(&mut self.pending) {
            match action {
                DeferredAction::PublishFocusTrigger => {
                    self.send_message(DropdownMessage::FocusTriggerButton);
                }
                DeferredAction::Reposition => {
                    tracing::debug!("Repositioning popover after deferred tick");
                    self.popover.reposition();
                }
            }
        }
    }

    /// Wait one minimal tick, then fire deferred work and pump the channel.
    ///
    /// Convenience driver for hosts running on a tokio executor; hosts with
    /// their own scheduler can call [`fire_deferred`][Self::fire_deferred]
    /// and [`pump`][Self::pump] directly instead.
    pub async fn settle(&mut self) {
        tokio::time::sleep(Duration::from_millis(app_settings::DEFER_TICK_MS)).await;
        self.fire_deferred();
        self.pump();
    }

    /// Callback for the popover: it finished opening.
    pub fn on_popover_opened(&mut self) {
        self.is_open = true;
        // Focus the first item if the menu was opened with the keyboard.
        if self.is_keyboard_active {
            self.send_message(DropdownMessage::FocusFirstItem);
        }
    }

    /// Callback for the popover: it finished closing.
    pub fn on_popover_closed(&mut self) {
        self.is_open = false;
        self.is_keyboard_active = false;
    }

    /// Unsubscribe from the channel and discard pending deferred work.
    ///
    /// After teardown the controller is inert: pumping and deferred firing
    /// are no-ops. Publishing on the shared channel keeps working for the
    /// remaining subscribers.
    pub fn teardown(&mut self) {
        tracing::debug!("Dropdown controller torn down");
        self.inbox = None;
        self.pending.clear();
    }

    fn defer(&mut self, action: DeferredAction) {
        self.pending.push(action);
    }

    fn send_message(&mut self, message: DropdownMessage) {
        tracing::debug!("Publishing {:?}", message);
        if let Err(e) = self.channel.publish(message) {
            tracing::error!("Failed to publish {:?}: {}", message, e);
        }
    }

    fn handle_incoming(&mut self, message: DropdownMessage) {
        if self.config.disabled {
            // Disabled dropdowns ignore every inbound message wholesale,
            // state-changing or not.
            tracing::debug!("Ignoring {:?}: dropdown is disabled", message);
            return;
        }

        match message {
            DropdownMessage::Open => self.position_popover(),

            DropdownMessage::Close => self.popover.close(),

            // Only reposition the popover if it is already open. The check
            // happens here, at schedule time; the deferred body runs
            // unconditionally.
            DropdownMessage::Reposition => {
                if self.is_open {
                    self.defer(DeferredAction::Reposition);
                }
            }

            // Consumed by the menu component; ignored here.
            DropdownMessage::FocusFirstItem => {}

            DropdownMessage::FocusTriggerButton => self.trigger.focus(),
        }
    }

    fn position_popover(&mut self) {
        tracing::debug!("Positioning popover below trigger '{}'", self.trigger_id);
        self.popover.position_next_to(
            &self.trigger_id,
            PopoverPlacement::Below,
            self.config.alignment,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
