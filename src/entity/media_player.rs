// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The XGIMI media player entity.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::client::DeviceClient;
use crate::command::Command;
use crate::config::EntryId;
use crate::error::Result;
use crate::features::{DeviceClass, SupportedFeatures};
use crate::state::{PlayerState, StateChange};

use super::MediaPlayerService;

/// Name used when the config entry does not provide one.
pub const DEFAULT_NAME: &str = "Xgimi Projector";

#[derive(Debug, Clone, Copy)]
struct Tracked {
    state: PlayerState,
    last_changed: DateTime<Utc>,
}

/// A projector exposed as a media player entity.
///
/// Every operation forwards exactly one command token to the client. Once
/// the client accepted it, the cached state is updated optimistically; the
/// projector never confirms it. Client errors are returned unchanged and
/// leave the cached state untouched.
///
/// # Examples
///
/// ```
/// use xgimi_lib::client::DeviceClient;
/// use xgimi_lib::config::EntryId;
/// use xgimi_lib::error::ClientError;
/// use xgimi_lib::{PlayerState, XgimiMediaPlayer};
///
/// struct Silent;
///
/// impl DeviceClient for Silent {
///     async fn fetch_data(&self) -> Result<(), ClientError> { Ok(()) }
///     fn is_on(&self) -> bool { true }
///     async fn send_command(&self, _name: &str) -> Result<(), ClientError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() -> xgimi_lib::Result<()> {
///     let player = XgimiMediaPlayer::new(Silent, EntryId::new());
///     assert_eq!(player.state(), PlayerState::Off);
///
///     player.turn_on().await?;
///     player.media_play_pause().await?;
///     assert_eq!(player.state(), PlayerState::Playing);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct XgimiMediaPlayer<C> {
    client: C,
    entry_id: EntryId,
    name: String,
    tracked: RwLock<Tracked>,
}

impl<C: DeviceClient> XgimiMediaPlayer<C> {
    /// Creates an entity in the `Off` state with the default name.
    #[must_use]
    pub fn new(client: C, entry_id: EntryId) -> Self {
        Self {
            client,
            entry_id,
            name: DEFAULT_NAME.to_string(),
            tracked: RwLock::new(Tracked {
                state: PlayerState::Off,
                last_changed: Utc::now(),
            }),
        }
    }

    /// Sets the display name. An empty name keeps the default.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = name;
        }
        self
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the stable entity id, `xgimi_<entry id>`.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("xgimi_{}", self.entry_id.to_simple_string())
    }

    /// Returns the config entry this entity belongs to.
    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cached state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.tracked.read().state
    }

    /// Returns when the cached state last changed.
    #[must_use]
    pub fn last_changed(&self) -> DateTime<Utc> {
        self.tracked.read().last_changed
    }

    /// Returns the device class.
    #[must_use]
    pub const fn device_class(&self) -> DeviceClass {
        DeviceClass::Tv
    }

    /// Returns the features the host may offer for this entity.
    #[must_use]
    pub const fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::projector()
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    // =========================================================================
    // Polling
    // =========================================================================

    /// Polls the projector and refreshes the cached state.
    ///
    /// The poll result replaces the cached state with `On` or `Off`, so a
    /// playback state does not survive a poll.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the poll fails.
    pub async fn update(&self) -> Result<()> {
        self.client.fetch_data().await?;
        let is_on = self.client.is_on();
        let next = PlayerState::from(is_on);
        tracing::debug!(entity = %self.unique_id(), is_on, state = %next, "Polled projector");
        self.set_state(next);
        Ok(())
    }

    // =========================================================================
    // Power
    // =========================================================================

    /// Sends `poweron`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn turn_on(&self) -> Result<()> {
        self.execute(Command::PowerOn).await
    }

    /// Sends `poweroff`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn turn_off(&self) -> Result<()> {
        self.execute(Command::PowerOff).await
    }

    /// Sends `poweron` when the cached state is `Off`, `poweroff` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn toggle(&self) -> Result<()> {
        let command = if self.state() == PlayerState::Off {
            Command::PowerOn
        } else {
            Command::PowerOff
        };
        self.execute(command).await
    }

    /// Sends the raw `power` key. The cached state is left alone.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn power(&self) -> Result<()> {
        self.execute(Command::Power).await
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Sends `play`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn media_play(&self) -> Result<()> {
        self.execute(Command::Play).await
    }

    /// Sends `pause`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn media_pause(&self) -> Result<()> {
        self.execute(Command::Pause).await
    }

    /// Sends `pause` when the cached state is `Playing`, `play` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn media_play_pause(&self) -> Result<()> {
        let command = if self.state() == PlayerState::Playing {
            Command::Pause
        } else {
            Command::Play
        };
        self.execute(command).await
    }

    /// Sends `play`. The projector cannot select content, so the media
    /// arguments are only logged.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn play_media(&self, media_type: &str, media_id: &str) -> Result<()> {
        tracing::debug!(media_type, media_id, "Play media requested, sending play");
        self.execute(Command::Play).await
    }

    /// Sends `left`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn media_previous_track(&self) -> Result<()> {
        self.execute(Command::Left).await
    }

    /// Sends `right`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn media_next_track(&self) -> Result<()> {
        self.execute(Command::Right).await
    }

    // =========================================================================
    // Volume
    // =========================================================================

    /// Sends `volumeup`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn volume_up(&self) -> Result<()> {
        self.execute(Command::VolumeUp).await
    }

    /// Sends `volumedown`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn volume_down(&self) -> Result<()> {
        self.execute(Command::VolumeDown).await
    }

    /// Sends `volumemute`.
    ///
    /// The projector only has a mute toggle, so `mute` does not change the
    /// token that is sent.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn mute_volume(&self, mute: bool) -> Result<()> {
        tracing::trace!(mute, "Mute requested");
        self.execute(Command::VolumeMute).await
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Sends `up`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn up(&self) -> Result<()> {
        self.execute(Command::Up).await
    }

    /// Sends `down`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn down(&self) -> Result<()> {
        self.execute(Command::Down).await
    }

    /// Sends `left`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn left(&self) -> Result<()> {
        self.execute(Command::Left).await
    }

    /// Sends `right`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn right(&self) -> Result<()> {
        self.execute(Command::Right).await
    }

    /// Sends `back`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn back(&self) -> Result<()> {
        self.execute(Command::Back).await
    }

    /// Sends `home`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn home(&self) -> Result<()> {
        self.execute(Command::Home).await
    }

    /// Sends `menu`.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn menu(&self) -> Result<()> {
        self.execute(Command::Menu).await
    }

    // =========================================================================
    // Generic dispatch
    // =========================================================================

    /// Sends a command by token.
    ///
    /// Allow-listed tokens behave exactly like the dedicated method. Any
    /// other string is logged as a warning and dropped without contacting
    /// the client.
    ///
    /// # Errors
    ///
    /// Returns the client's error if an allow-listed command fails.
    pub async fn send_command(&self, name: &str) -> Result<()> {
        match name.parse::<Command>() {
            Ok(command) => self.execute(command).await,
            Err(_) => {
                tracing::warn!(
                    entity = %self.unique_id(),
                    command = name,
                    "Unsupported command, ignoring"
                );
                Ok(())
            }
        }
    }

    /// Sends several commands in order, stopping at the first client error.
    ///
    /// # Errors
    ///
    /// Returns the first client error.
    pub async fn send_commands<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        for name in names {
            self.send_command(name.as_ref()).await?;
        }
        Ok(())
    }

    /// Routes a host service call to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the command fails.
    pub async fn call_service(&self, service: &MediaPlayerService) -> Result<()> {
        match service {
            MediaPlayerService::TurnOn => self.turn_on().await,
            MediaPlayerService::TurnOff => self.turn_off().await,
            MediaPlayerService::Toggle => self.toggle().await,
            MediaPlayerService::MediaPlay => self.media_play().await,
            MediaPlayerService::MediaPause => self.media_pause().await,
            MediaPlayerService::MediaPlayPause => self.media_play_pause().await,
            MediaPlayerService::VolumeUp => self.volume_up().await,
            MediaPlayerService::VolumeDown => self.volume_down().await,
            MediaPlayerService::VolumeMute { mute } => self.mute_volume(*mute).await,
            MediaPlayerService::MediaPreviousTrack => self.media_previous_track().await,
            MediaPlayerService::MediaNextTrack => self.media_next_track().await,
            MediaPlayerService::PlayMedia {
                media_type,
                media_id,
            } => self.play_media(media_type, media_id).await,
            MediaPlayerService::SendCommand { commands } => {
                self.send_commands(commands.as_slice()).await
            }
        }
    }

    async fn execute(&self, command: Command) -> Result<()> {
        tracing::debug!(entity = %self.unique_id(), command = %command, "Sending command");
        self.client.send_command(command.as_str()).await?;
        if let Some(next) = command.resulting_state() {
            self.set_state(next);
        }
        Ok(())
    }

    fn set_state(&self, next: PlayerState) {
        let mut tracked = self.tracked.write();
        if tracked.state == next {
            return;
        }
        let change = StateChange::new(tracked.state, next);
        tracing::debug!(
            entity = %self.unique_id(),
            old = %change.old,
            new = %change.new,
            "State changed"
        );
        tracked.state = change.new;
        tracked.last_changed = change.changed_at;
    }
}
