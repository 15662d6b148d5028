// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host service calls answered by the media player.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValueError;

/// A service call routed to a media player entity.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use xgimi_lib::MediaPlayerService;
///
/// let service = MediaPlayerService::from_call("volume_mute", &json!({"is_volume_muted": true}))
///     .unwrap();
/// assert_eq!(service, MediaPlayerService::VolumeMute { mute: true });
/// assert_eq!(service.name(), "volume_mute");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPlayerService {
    /// Power on.
    TurnOn,
    /// Power off.
    TurnOff,
    /// Flip power based on the cached state.
    Toggle,
    /// Start playback.
    MediaPlay,
    /// Pause playback.
    MediaPause,
    /// Flip playback based on the cached state.
    MediaPlayPause,
    /// Volume one step up.
    VolumeUp,
    /// Volume one step down.
    VolumeDown,
    /// Mute or unmute.
    VolumeMute {
        /// Requested mute state. The projector only knows a mute toggle.
        mute: bool,
    },
    /// Previous item.
    MediaPreviousTrack,
    /// Next item.
    MediaNextTrack,
    /// Play a media item.
    PlayMedia {
        /// Content type, e.g. `"video"`.
        media_type: String,
        /// Content identifier.
        media_id: String,
    },
    /// Send raw command tokens, in order.
    SendCommand {
        /// Tokens to send. Unknown tokens are skipped.
        commands: Vec<String>,
    },
}

#[derive(Deserialize)]
struct MuteData {
    is_volume_muted: bool,
}

#[derive(Deserialize)]
struct PlayMediaData {
    media_content_type: String,
    media_content_id: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommandList {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct SendCommandData {
    command: CommandList,
}

impl MediaPlayerService {
    /// Returns the host service name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::Toggle => "toggle",
            Self::MediaPlay => "media_play",
            Self::MediaPause => "media_pause",
            Self::MediaPlayPause => "media_play_pause",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
            Self::VolumeMute { .. } => "volume_mute",
            Self::MediaPreviousTrack => "media_previous_track",
            Self::MediaNextTrack => "media_next_track",
            Self::PlayMedia { .. } => "play_media",
            Self::SendCommand { .. } => "send_command",
        }
    }

    /// Builds a service from a host call name and its data.
    ///
    /// Services without parameters ignore `data`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownService` for an unknown name and
    /// `ValueError::InvalidServiceData` when required data is missing.
    pub fn from_call(name: &str, data: &Value) -> Result<Self, ValueError> {
        let service = match name {
            "turn_on" => Self::TurnOn,
            "turn_off" => Self::TurnOff,
            "toggle" => Self::Toggle,
            "media_play" => Self::MediaPlay,
            "media_pause" => Self::MediaPause,
            "media_play_pause" => Self::MediaPlayPause,
            "volume_up" => Self::VolumeUp,
            "volume_down" => Self::VolumeDown,
            "media_previous_track" => Self::MediaPreviousTrack,
            "media_next_track" => Self::MediaNextTrack,
            "volume_mute" => {
                let MuteData { is_volume_muted } = parse_data(name, data)?;
                Self::VolumeMute {
                    mute: is_volume_muted,
                }
            }
            "play_media" => {
                let PlayMediaData {
                    media_content_type,
                    media_content_id,
                } = parse_data(name, data)?;
                Self::PlayMedia {
                    media_type: media_content_type,
                    media_id: media_content_id,
                }
            }
            "send_command" => {
                let SendCommandData { command } = parse_data(name, data)?;
                let commands = match command {
                    CommandList::One(cmd) => vec![cmd],
                    CommandList::Many(cmds) => cmds,
                };
                Self::SendCommand { commands }
            }
            _ => return Err(ValueError::UnknownService(name.to_string())),
        };
        Ok(service)
    }
}

fn parse_data<T: serde::de::DeserializeOwned>(
    service: &str,
    data: &Value,
) -> Result<T, ValueError> {
    T::deserialize(data).map_err(|e| ValueError::InvalidServiceData {
        service: service.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parameterless_services_ignore_data() {
        let service = MediaPlayerService::from_call("turn_on", &json!({"extra": 1})).unwrap();
        assert_eq!(service, MediaPlayerService::TurnOn);

        let service = MediaPlayerService::from_call("media_next_track", &Value::Null).unwrap();
        assert_eq!(service, MediaPlayerService::MediaNextTrack);
    }

    #[test]
    fn name_round_trips_through_from_call() {
        for service in [
            MediaPlayerService::TurnOn,
            MediaPlayerService::TurnOff,
            MediaPlayerService::Toggle,
            MediaPlayerService::MediaPlay,
            MediaPlayerService::MediaPause,
            MediaPlayerService::MediaPlayPause,
            MediaPlayerService::VolumeUp,
            MediaPlayerService::VolumeDown,
            MediaPlayerService::MediaPreviousTrack,
            MediaPlayerService::MediaNextTrack,
        ] {
            assert_eq!(
                MediaPlayerService::from_call(service.name(), &Value::Null).unwrap(),
                service
            );
        }
    }

    #[test]
    fn play_media_data() {
        let service = MediaPlayerService::from_call(
            "play_media",
            &json!({"media_content_type": "video", "media_content_id": "netflix"}),
        )
        .unwrap();
        assert_eq!(
            service,
            MediaPlayerService::PlayMedia {
                media_type: "video".to_string(),
                media_id: "netflix".to_string(),
            }
        );
    }

    #[test]
    fn send_command_accepts_string_or_list() {
        let one =
            MediaPlayerService::from_call("send_command", &json!({"command": "home"})).unwrap();
        assert_eq!(
            one,
            MediaPlayerService::SendCommand {
                commands: vec!["home".to_string()]
            }
        );

        let many =
            MediaPlayerService::from_call("send_command", &json!({"command": ["menu", "down"]}))
                .unwrap();
        assert_eq!(
            many,
            MediaPlayerService::SendCommand {
                commands: vec!["menu".to_string(), "down".to_string()]
            }
        );
    }

    #[test]
    fn missing_data_is_reported() {
        let err = MediaPlayerService::from_call("volume_mute", &json!({})).unwrap_err();
        assert!(matches!(
            err,
            ValueError::InvalidServiceData { ref service, .. } if service == "volume_mute"
        ));
    }

    #[test]
    fn unknown_service() {
        assert_eq!(
            MediaPlayerService::from_call("select_source", &Value::Null),
            Err(ValueError::UnknownService("select_source".to_string()))
        );
    }
}
