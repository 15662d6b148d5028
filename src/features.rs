// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supported media player features and device classes.
//!
//! The host decides which controls to offer from the feature bit set an
//! entity reports. Bit values follow the host's media player feature flags
//! so they can be passed through unchanged.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bit set of media player features.
///
/// # Examples
///
/// ```
/// use xgimi_lib::SupportedFeatures;
///
/// let features = SupportedFeatures::TURN_ON | SupportedFeatures::TURN_OFF;
/// assert!(features.contains(SupportedFeatures::TURN_ON));
/// assert!(!features.contains(SupportedFeatures::PLAY));
/// assert_eq!(features.bits(), 384);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    /// Pause playback.
    pub const PAUSE: Self = Self(1);
    /// Mute or unmute.
    pub const VOLUME_MUTE: Self = Self(8);
    /// Skip to the previous item.
    pub const PREVIOUS_TRACK: Self = Self(16);
    /// Skip to the next item.
    pub const NEXT_TRACK: Self = Self(32);
    /// Power on.
    pub const TURN_ON: Self = Self(128);
    /// Power off.
    pub const TURN_OFF: Self = Self(256);
    /// Play a specific media item.
    pub const PLAY_MEDIA: Self = Self(512);
    /// Step the volume up or down.
    pub const VOLUME_STEP: Self = Self(1024);
    /// Start playback.
    pub const PLAY: Self = Self(16384);

    /// Returns a set with no features.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns whether every feature in `other` is in this set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Features offered by an XGIMI projector.
    ///
    /// - Power on and off
    /// - Play and pause
    /// - Volume step and mute
    /// - Previous and next track (mapped to left and right)
    #[must_use]
    pub const fn projector() -> Self {
        Self::TURN_ON
            .union(Self::TURN_OFF)
            .union(Self::PLAY)
            .union(Self::PAUSE)
            .union(Self::VOLUME_STEP)
            .union(Self::VOLUME_MUTE)
            .union(Self::PREVIOUS_TRACK)
            .union(Self::NEXT_TRACK)
    }
}

impl BitOr for SupportedFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SupportedFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for SupportedFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SupportedFeatures({:#b})", self.0)
    }
}

/// Device class reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Television or projector.
    Tv,
}

impl DeviceClass {
    /// Returns the host device class string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
