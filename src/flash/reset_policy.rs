// SPDX-License-Identifier: MPL-2.0
use serde::{Deserialize, Serialize};

/// How a new message treats resets scheduled by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// Every new message cancels pending resets; only the latest timer fires.
    #[default]
    LatestWins,
    /// Timers are never cancelled. An earlier timer may clear a newer message.
    Overlapping,
}

impl ResetPolicy {
    /// Returns true if a new message cancels previously scheduled resets.
    #[must_use]
    pub fn cancels_pending(self) -> bool {
        matches!(self, ResetPolicy::LatestWins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_latest_wins() {
        assert_eq!(ResetPolicy::default(), ResetPolicy::LatestWins);
        assert!(ResetPolicy::default().cancels_pending());
    }

    #[test]
    fn overlapping_keeps_timers() {
        assert!(!ResetPolicy::Overlapping.cancels_pending());
    }
}
