// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Behaviour of the media player entity against a recording client.

mod support;

use support::RecordingClient;
use xgimi_lib::config::EntryId;
use xgimi_lib::{ClientError, Command, Error, PlayerState, XgimiMediaPlayer};

fn player() -> (XgimiMediaPlayer<RecordingClient>, RecordingClient) {
    let client = RecordingClient::new();
    let entity = XgimiMediaPlayer::new(client.clone(), EntryId::new());
    (entity, client)
}

/// Calls the dedicated entity method for `command`.
async fn invoke(
    entity: &XgimiMediaPlayer<RecordingClient>,
    command: Command,
) -> xgimi_lib::Result<()> {
    match command {
        Command::Up => entity.up().await,
        Command::Down => entity.down().await,
        Command::Left => entity.left().await,
        Command::Right => entity.right().await,
        Command::Back => entity.back().await,
        Command::Home => entity.home().await,
        Command::Menu => entity.menu().await,
        Command::Play => entity.media_play().await,
        Command::Pause => entity.media_pause().await,
        Command::Power => entity.power().await,
        Command::VolumeDown => entity.volume_down().await,
        Command::VolumeUp => entity.volume_up().await,
        Command::PowerOn => entity.turn_on().await,
        Command::PowerOff => entity.turn_off().await,
        Command::VolumeMute => entity.mute_volume(true).await,
    }
}

// ============================================================================
// Command forwarding
// ============================================================================

mod forwarding {
    use super::*;

    #[tokio::test]
    async fn each_method_sends_exactly_its_token() {
        for command in Command::ALL {
            let (entity, client) = player();
            invoke(&entity, command).await.unwrap();
            assert_eq!(client.sent(), [command.as_str()], "for {command}");
        }
    }

    #[tokio::test]
    async fn generic_dispatch_sends_exactly_its_token() {
        for command in Command::ALL {
            let (entity, client) = player();
            entity.send_command(command.as_str()).await.unwrap();
            assert_eq!(client.sent(), [command.as_str()], "for {command}");
        }
    }

    #[tokio::test]
    async fn unknown_token_never_reaches_client() {
        let (entity, client) = player();

        for name in ["", "reboot", "Play", "volume_up", "poweron "] {
            entity.send_command(name).await.unwrap();
        }

        assert!(client.sent().is_empty());
        assert_eq!(entity.state(), PlayerState::Off);
    }

    #[tokio::test]
    async fn track_skipping_uses_arrow_keys() {
        let (entity, client) = player();

        entity.media_previous_track().await.unwrap();
        entity.media_next_track().await.unwrap();

        assert_eq!(client.sent(), ["left", "right"]);
    }

    #[tokio::test]
    async fn mute_ignores_requested_value() {
        let (entity, client) = player();

        entity.mute_volume(true).await.unwrap();
        entity.mute_volume(false).await.unwrap();

        assert_eq!(client.sent(), ["volumemute", "volumemute"]);
    }
}

// ============================================================================
// Optimistic state
// ============================================================================

mod optimistic_state {
    use super::*;

    #[tokio::test]
    async fn power_commands_ignore_device() {
        let (entity, client) = player();
        client.set_powered(false);

        entity.turn_on().await.unwrap();
        assert_eq!(entity.state(), PlayerState::On);

        client.set_powered(true);
        entity.turn_off().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Off);
    }

    #[tokio::test]
    async fn playback_commands() {
        let (entity, _) = player();

        entity.media_play().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Playing);

        entity.media_pause().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Paused);
    }

    #[tokio::test]
    async fn toggle_from_off_turns_on() {
        let (entity, client) = player();

        entity.toggle().await.unwrap();

        assert_eq!(client.sent(), ["poweron"]);
        assert_eq!(entity.state(), PlayerState::On);
    }

    #[tokio::test]
    async fn toggle_from_any_other_state_turns_off() {
        for setup in [Command::PowerOn, Command::Play, Command::Pause] {
            let (entity, client) = player();
            entity.send_command(setup.as_str()).await.unwrap();

            entity.toggle().await.unwrap();

            assert_eq!(client.sent(), [setup.as_str(), "poweroff"]);
            assert_eq!(entity.state(), PlayerState::Off);
        }
    }

    #[tokio::test]
    async fn play_pause_uses_cached_state_not_device() {
        let (entity, client) = player();
        // Device claims to be off; the cached state still drives the choice.
        client.set_powered(false);

        entity.media_play().await.unwrap();
        entity.media_play_pause().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Paused);

        entity.media_play_pause().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Playing);

        assert_eq!(client.sent(), ["play", "pause", "play"]);
        assert_eq!(client.poll_count(), 0);
    }

    #[tokio::test]
    async fn other_keys_keep_state() {
        let (entity, _) = player();
        entity.media_play().await.unwrap();

        for name in ["up", "down", "back", "home", "menu", "volumeup", "power"] {
            entity.send_command(name).await.unwrap();
        }

        assert_eq!(entity.state(), PlayerState::Playing);
    }
}

// ============================================================================
// Polling and failures
// ============================================================================

mod polling {
    use super::*;

    #[tokio::test]
    async fn poll_reflects_is_on() {
        let (entity, client) = player();

        client.set_powered(true);
        entity.update().await.unwrap();
        assert_eq!(entity.state(), PlayerState::On);

        client.set_powered(false);
        entity.update().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Off);

        assert_eq!(client.poll_count(), 2);
    }

    #[tokio::test]
    async fn play_pause_after_poll_starts_playback() {
        let (entity, client) = player();
        client.set_powered(true);

        entity.media_play().await.unwrap();
        entity.update().await.unwrap();
        assert_eq!(entity.state(), PlayerState::On);

        entity.media_play_pause().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Playing);
        assert_eq!(client.sent(), ["play", "play"]);
    }

    #[tokio::test]
    async fn poll_overrides_optimistic_power_on() {
        let (entity, client) = player();

        entity.turn_on().await.unwrap();
        client.set_powered(false);
        entity.update().await.unwrap();

        assert_eq!(entity.state(), PlayerState::Off);
    }

    #[tokio::test]
    async fn failures_propagate_without_state_change() {
        let (entity, client) = player();
        client.fail_with(ClientError::Timeout(2000));

        assert!(matches!(
            entity.media_play().await,
            Err(Error::Client(ClientError::Timeout(2000)))
        ));
        assert!(matches!(entity.update().await, Err(Error::Client(_))));
        assert!(matches!(
            entity.send_command("home").await,
            Err(Error::Client(_))
        ));
        assert_eq!(entity.state(), PlayerState::Off);

        client.recover();
        entity.media_play().await.unwrap();
        assert_eq!(entity.state(), PlayerState::Playing);
    }

    #[tokio::test]
    async fn send_commands_stops_at_first_failure() {
        let (entity, client) = player();
        entity.send_commands(&["menu"]).await.unwrap();

        client.fail_with(ClientError::CommandRejected("busy".to_string()));
        assert!(entity.send_commands(&["down", "down"]).await.is_err());

        assert_eq!(client.sent(), ["menu"]);
    }
}
