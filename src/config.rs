// SPDX-License-Identifier: GPL-3.0-only

//! Dropdown configuration.
//!
//! Configuration values are plain fields; every default substitution goes
//! through an explicit `effective_*` accessor so the fallback logic stays
//! visible and testable. Matching the component this mirrors, an empty
//! string counts as "not configured" at every fallback site.

use crate::app_settings;
use crate::i18n;
use crate::overlay::{PopoverAlignment, PopoverTriggerMode};
use serde::{Deserialize, Serialize};

/// The interaction style that opens the dropdown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownTriggerType {
    /// Open on click.
    #[default]
    Click,
    /// Open on pointer hover.
    Hover,
}

/// Externally settable configuration for a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Horizontal alignment of the popover menu relative to the trigger.
    pub alignment: PopoverAlignment,
    /// Visual style of the trigger button. `None` (or empty) falls back to
    /// `"default"`.
    pub button_style: Option<String>,
    /// Kind of trigger button. `None` (or empty) falls back to `"select"`.
    /// The `"select"` and `"tab"` types suppress the label fallback.
    pub button_type: Option<String>,
    /// Accessible label for the trigger button.
    pub label: Option<String>,
    /// Whether the popover dismisses when focus leaves it. Consumed by the
    /// host view layer.
    pub dismiss_on_blur: bool,
    /// Tooltip title for the trigger button. Consumed by the host view
    /// layer.
    pub title: Option<String>,
    /// When set, every inbound channel message is ignored.
    pub disabled: bool,
    /// The interaction that opens the dropdown. `None` falls back to click.
    pub trigger: Option<DropdownTriggerType>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            alignment: PopoverAlignment::default(),
            button_style: None,
            button_type: None,
            label: None,
            dismiss_on_blur: true,
            title: None,
            disabled: false,
            trigger: None,
        }
    }
}

impl DropdownConfig {
    /// The effective button style, substituting the default when none (or
    /// an empty string) is configured.
    pub fn effective_button_style(&self) -> &str {
        self.button_style
            .as_deref()
            .filter(|style| !style.is_empty())
            .unwrap_or(app_settings::DEFAULT_BUTTON_STYLE)
    }

    /// The effective button type, substituting the default when none (or an
    /// empty string) is configured.
    pub fn effective_button_type(&self) -> &str {
        self.button_type
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .unwrap_or(app_settings::DEFAULT_BUTTON_TYPE)
    }

    /// The effective trigger type, substituting click when none is
    /// configured.
    pub fn effective_trigger(&self) -> DropdownTriggerType {
        self.trigger.unwrap_or_default()
    }

    /// Maps the configured trigger type to the popover's trigger mode.
    ///
    /// Click maps to the popover's click mode; everything else maps to its
    /// pointer-enter mode.
    pub fn popover_trigger_mode(&self) -> PopoverTriggerMode {
        match self.effective_trigger() {
            DropdownTriggerType::Click => PopoverTriggerMode::Click,
            DropdownTriggerType::Hover => PopoverTriggerMode::MouseEnter,
        }
    }

    /// The effective trigger-button label.
    ///
    /// For the `"select"` and `"tab"` button types the configured label is
    /// returned verbatim, even when empty. For every other type, a missing
    /// or empty label falls back to the localized default context-menu
    /// label, looked up synchronously for the fixed `en-US` locale.
    pub fn effective_label(&self) -> Option<String> {
        let button_type = self.effective_button_type();
        if app_settings::LABEL_VERBATIM_BUTTON_TYPES.contains(&button_type) {
            return self.label.clone();
        }

        Some(
            self.label
                .clone()
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| {
                    i18n::get_string_for_locale(
                        &i18n::default_label_locale(),
                        app_settings::DEFAULT_LABEL_RESOURCE_KEY,
                    )
                }),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
