// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The cached state of a media player entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Media player state as reported to the host.
///
/// The value is never confirmed by the projector. It reflects the last
/// command issued or the last poll, whichever came later. A poll only knows
/// about power, so it maps to `On` or `Off` through `From<bool>`.
///
/// # Examples
///
/// ```
/// use xgimi_lib::PlayerState;
///
/// assert_eq!(PlayerState::default(), PlayerState::Off);
/// assert_eq!(PlayerState::Playing.as_str(), "playing");
/// assert!(PlayerState::Paused.is_on());
/// assert_eq!(PlayerState::from(true), PlayerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    /// The projector is off.
    #[default]
    Off,
    /// The projector is on and idle.
    On,
    /// Playback is running.
    Playing,
    /// Playback is paused.
    Paused,
}

impl PlayerState {
    /// Returns the host state string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }

    /// Returns whether the projector is assumed to be powered.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "playing" => Ok(Self::Playing),
            "paused" => Ok(Self::Paused),
            _ => Err(ValueError::UnknownState(s.to_string())),
        }
    }
}

impl From<bool> for PlayerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
