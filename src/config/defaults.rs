// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Styling**: CSS class applied when none is given
//! - **Auto-reset**: Per-severity delays before a flashed message clears
//! - **Storage**: Settings file location

// ==========================================================================
// Styling Defaults
// ==========================================================================

/// CSS class used whenever a message is shown without an explicit class,
/// and restored when a message resets.
pub const DEFAULT_MESSAGE_CLASS: &str = "text-info";

// ==========================================================================
// Auto-reset Defaults
// ==========================================================================

/// Delay before an info message clears (in milliseconds).
pub const DEFAULT_INFO_RESET_MS: u64 = 3_000;

/// Delay before a success message clears (in milliseconds).
pub const DEFAULT_SUCCESS_RESET_MS: u64 = 3_000;

/// Delay before a warning message clears (in milliseconds).
pub const DEFAULT_WARNING_RESET_MS: u64 = 5_000;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Settings file name inside the application config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config directory.
pub const APP_NAME: &str = "FlashMessage";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_lingers_longer_than_info() {
        assert!(DEFAULT_WARNING_RESET_MS > DEFAULT_INFO_RESET_MS);
    }

    #[test]
    fn default_class_is_bootstrap_info() {
        assert_eq!(DEFAULT_MESSAGE_CLASS, "text-info");
    }
}
