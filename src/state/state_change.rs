// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerState;

/// A transition of the cached player state.
///
/// # Examples
///
/// ```
/// use xgimi_lib::state::{PlayerState, StateChange};
///
/// let change = StateChange::new(PlayerState::On, PlayerState::Playing);
/// assert!(change.old.is_on() && change.new.is_on());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// State before the transition.
    pub old: PlayerState,
    /// State after the transition.
    pub new: PlayerState,
    /// When the transition was recorded.
    pub changed_at: DateTime<Utc>,
}

impl StateChange {
    /// Creates a change stamped with the current time.
    #[must_use]
    pub fn new(old: PlayerState, new: PlayerState) -> Self {
        Self::at(old, new, Utc::now())
    }

    /// Creates a change with an explicit timestamp.
    #[must_use]
    pub fn at(old: PlayerState, new: PlayerState, changed_at: DateTime<Utc>) -> Self {
        Self {
            old,
            new,
            changed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_current_time() {
        let before = Utc::now();
        let change = StateChange::new(PlayerState::Off, PlayerState::On);
        assert!(change.changed_at >= before);
        assert!(change.changed_at <= Utc::now());
    }

    #[test]
    fn serializes_with_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T20:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let change = StateChange::at(PlayerState::On, PlayerState::Playing, at);

        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["old"], "on");
        assert_eq!(json["new"], "playing");

        let back: StateChange = serde_json::from_value(json).unwrap();
        assert_eq!(back.changed_at, at);
    }
}
