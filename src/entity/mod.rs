// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Media player entity and the service calls it answers.
//!
//! # Command mapping
//!
//! | Operation | Token | State afterwards |
//! |-----------|-------|------------------|
//! | `turn_on` / `turn_off` | `poweron` / `poweroff` | `On` / `Off` |
//! | `toggle` | `poweron` if `Off`, else `poweroff` | `On` / `Off` |
//! | `media_play` / `media_pause` | `play` / `pause` | `Playing` / `Paused` |
//! | `media_play_pause` | `pause` if `Playing`, else `play` | `Paused` / `Playing` |
//! | `play_media` | `play` | `Playing` |
//! | `volume_up` / `volume_down` | `volumeup` / `volumedown` | unchanged |
//! | `mute_volume` | `volumemute` | unchanged |
//! | `media_previous_track` / `media_next_track` | `left` / `right` | unchanged |
//! | navigation keys, `power` | same token | unchanged |

mod media_player;
mod service;

pub use media_player::{DEFAULT_NAME, XgimiMediaPlayer};
pub use service::MediaPlayerService;
