// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The command vocabulary accepted by the projector client.
//!
//! Every command is a fixed lowercase token. Only these tokens are ever
//! forwarded to a [`DeviceClient`](crate::client::DeviceClient); anything
//! else is rejected before it reaches the client.
//!
//! | Group | Tokens |
//! |-------|--------|
//! | Navigation | `up`, `down`, `left`, `right`, `back`, `home`, `menu` |
//! | Playback | `play`, `pause` |
//! | Power | `power`, `poweron`, `poweroff` |
//! | Volume | `volumedown`, `volumeup`, `volumemute` |
//!
//! # Examples
//!
//! ```
//! use xgimi_lib::Command;
//!
//! let cmd: Command = "poweron".parse().unwrap();
//! assert_eq!(cmd, Command::PowerOn);
//! assert_eq!(cmd.as_str(), "poweron");
//!
//! assert!(Command::is_supported("volumemute"));
//! assert!(!Command::is_supported("reboot"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;
use crate::state::PlayerState;

/// A command token understood by the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Directional pad up.
    Up,
    /// Directional pad down.
    Down,
    /// Directional pad left.
    Left,
    /// Directional pad right.
    Right,
    /// Back button.
    Back,
    /// Home button.
    Home,
    /// Menu button.
    Menu,
    /// Start or resume playback.
    Play,
    /// Pause playback.
    Pause,
    /// Raw power key.
    Power,
    /// Lower the volume one step.
    VolumeDown,
    /// Raise the volume one step.
    VolumeUp,
    /// Power the projector on.
    PowerOn,
    /// Power the projector off.
    PowerOff,
    /// Toggle mute.
    VolumeMute,
}

impl Command {
    /// All commands, in vocabulary order.
    pub const ALL: [Self; 15] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Back,
        Self::Home,
        Self::Menu,
        Self::Play,
        Self::Pause,
        Self::Power,
        Self::VolumeDown,
        Self::VolumeUp,
        Self::PowerOn,
        Self::PowerOff,
        Self::VolumeMute,
    ];

    /// Returns the token sent to the client.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Back => "back",
            Self::Home => "home",
            Self::Menu => "menu",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Power => "power",
            Self::VolumeDown => "volumedown",
            Self::VolumeUp => "volumeup",
            Self::PowerOn => "poweron",
            Self::PowerOff => "poweroff",
            Self::VolumeMute => "volumemute",
        }
    }

    /// Returns whether `name` is an allow-listed token.
    ///
    /// The check is an exact, case-sensitive match.
    #[must_use]
    pub fn is_supported(name: &str) -> bool {
        Self::ALL.iter().any(|cmd| cmd.as_str() == name)
    }

    /// Returns the state the entity assumes once this command was sent.
    ///
    /// Commands that do not affect power or playback return `None`.
    #[must_use]
    pub const fn resulting_state(&self) -> Option<PlayerState> {
        match self {
            Self::PowerOn => Some(PlayerState::On),
            Self::PowerOff => Some(PlayerState::Off),
            Self::Play => Some(PlayerState::Playing),
            Self::Pause => Some(PlayerState::Paused),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| ValueError::UnknownCommand(s.to_string()))
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
