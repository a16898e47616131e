// SPDX-License-Identifier: MPL-2.0
//! Message kinds and their styling.

use crate::config::defaults::{
    DEFAULT_INFO_RESET_MS, DEFAULT_MESSAGE_CLASS, DEFAULT_SUCCESS_RESET_MS,
    DEFAULT_WARNING_RESET_MS,
};
use std::time::Duration;

/// Severity level determines the CSS class and how long a message lingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (`text-info`, 3s duration).
    #[default]
    Info,
    /// Operation completed successfully (`text-success`, 3s duration).
    Success,
    /// Warning that doesn't block operation (`text-warning`, 5s duration).
    Warning,
    /// Error requiring attention (`text-danger`, stays until replaced).
    Danger,
}

impl Severity {
    /// Returns the Bootstrap contextual text class for this severity.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => DEFAULT_MESSAGE_CLASS,
            Severity::Success => "text-success",
            Severity::Warning => "text-warning",
            Severity::Danger => "text-danger",
        }
    }

    /// Returns the auto-reset delay for this severity.
    /// Returns `None` for danger messages.
    #[must_use]
    pub fn auto_reset(&self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_millis(DEFAULT_INFO_RESET_MS)),
            Severity::Success => Some(Duration::from_millis(DEFAULT_SUCCESS_RESET_MS)),
            Severity::Warning => Some(Duration::from_millis(DEFAULT_WARNING_RESET_MS)),
            Severity::Danger => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_severity_uses_default_class() {
        assert_eq!(Severity::default().css_class(), "text-info");
    }

    #[test]
    fn severity_classes_are_distinct() {
        let classes = [
            Severity::Info.css_class(),
            Severity::Success.css_class(),
            Severity::Warning.css_class(),
            Severity::Danger.css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn danger_has_no_auto_reset() {
        assert!(Severity::Danger.auto_reset().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_reset().unwrap();
        let warning = Severity::Warning.auto_reset().unwrap();
        assert!(warning > success);
    }
}
