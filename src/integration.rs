// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config entry lifecycle.
//!
//! The [`Integration`] owns one media player entity per loaded config entry.
//! The host calls [`setup_entry`](Integration::setup_entry) for each stored
//! entry at startup, routes service calls and polls through it, and calls
//! [`unload_entry`](Integration::unload_entry) when an entry is removed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::client::ClientFactory;
use crate::config::{ConfigEntry, ConfigFlow, EntryId};
use crate::entity::{MediaPlayerService, XgimiMediaPlayer};
use crate::error::{Error, Result};
use crate::event::{EventBus, PlayerEvent};
use crate::state::{PlayerState, StateChange};

/// Integration domain, used by the host to namespace entries and entities.
pub const DOMAIN: &str = "xgimi_media_player";

type Player<F> = XgimiMediaPlayer<<F as ClientFactory>::Client>;

struct LoadedEntry<F: ClientFactory> {
    entry: ConfigEntry,
    player: Arc<Player<F>>,
}

/// Registry of loaded config entries and their entities.
///
/// # Examples
///
/// ```
/// use xgimi_lib::client::{ConnectionParams, DeviceClient};
/// use xgimi_lib::config::{ConfigEntry, EntryConfig};
/// use xgimi_lib::error::ClientError;
/// use xgimi_lib::{Integration, MediaPlayerService, PlayerState};
///
/// struct Silent;
///
/// impl DeviceClient for Silent {
///     async fn fetch_data(&self) -> Result<(), ClientError> { Ok(()) }
///     fn is_on(&self) -> bool { false }
///     async fn send_command(&self, _name: &str) -> Result<(), ClientError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() -> xgimi_lib::Result<()> {
///     let integration = Integration::new(|_params: ConnectionParams| Silent);
///
///     let entry = ConfigEntry::new(EntryConfig::new("Cinema", "192.168.1.42", "token"));
///     let entry_id = entry.entry_id;
///     integration.setup_entry(entry).await?;
///
///     integration.call_service(entry_id, &MediaPlayerService::TurnOn).await?;
///     let player = integration.entity(entry_id).await.unwrap();
///     assert_eq!(player.state(), PlayerState::On);
///
///     assert!(integration.unload_entry(entry_id).await);
///     Ok(())
/// }
/// ```
pub struct Integration<F: ClientFactory> {
    factory: F,
    entries: RwLock<HashMap<EntryId, LoadedEntry<F>>>,
    event_bus: EventBus,
}

impl<F: ClientFactory> Integration<F> {
    /// Creates an integration building clients with `factory`.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            entries: RwLock::new(HashMap::new()),
            event_bus: EventBus::new(),
        }
    }

    /// Subscribes to entity events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.event_bus.subscribe()
    }

    // =========================================================================
    // Entry lifecycle
    // =========================================================================

    /// Creates the client and entity for a config entry.
    ///
    /// The client is built with the entry's host and token and the default
    /// command (16735), advance (16750) and alive (554) ports.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the entry host is invalid and
    /// `Error::AlreadySetUp` if the entry is already loaded.
    pub async fn setup_entry(&self, entry: ConfigEntry) -> Result<()> {
        entry.data.validate()?;

        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.entry_id) {
            return Err(Error::AlreadySetUp(entry.entry_id));
        }

        let client = self.factory.create(entry.data.connection_params());
        let player = XgimiMediaPlayer::new(client, entry.entry_id).with_name(&entry.data.name);
        tracing::info!(
            entry_id = %entry.entry_id,
            host = %entry.data.host,
            entity = %player.unique_id(),
            "Set up projector entry"
        );

        let entry_id = entry.entry_id;
        entries.insert(
            entry_id,
            LoadedEntry {
                entry,
                player: Arc::new(player),
            },
        );
        drop(entries);

        self.event_bus.publish(PlayerEvent::EntityAdded { entry_id });
        Ok(())
    }

    /// Drops the entity of a config entry.
    ///
    /// Returns `true` if the entry was loaded.
    pub async fn unload_entry(&self, entry_id: EntryId) -> bool {
        let removed = self.entries.write().await.remove(&entry_id).is_some();

        if removed {
            tracing::info!(entry_id = %entry_id, "Unloaded projector entry");
            self.event_bus.publish(PlayerEvent::EntityRemoved { entry_id });
        } else {
            tracing::debug!(entry_id = %entry_id, "Unload requested for unknown entry");
        }

        removed
    }

    /// Returns the entity of a loaded entry.
    pub async fn entity(&self, entry_id: EntryId) -> Option<Arc<Player<F>>> {
        self.entries
            .read()
            .await
            .get(&entry_id)
            .map(|loaded| Arc::clone(&loaded.player))
    }

    /// Returns the stored config entry of a loaded entry.
    pub async fn config_entry(&self, entry_id: EntryId) -> Option<ConfigEntry> {
        self.entries
            .read()
            .await
            .get(&entry_id)
            .map(|loaded| loaded.entry.clone())
    }

    /// Returns the ids of all loaded entries.
    pub async fn entry_ids(&self) -> Vec<EntryId> {
        self.entries.read().await.keys().copied().collect()
    }

    /// Returns the unique ids of all loaded entries.
    pub async fn configured_unique_ids(&self) -> Vec<String> {
        self.entries
            .read()
            .await
            .values()
            .map(|loaded| loaded.entry.unique_id.clone())
            .collect()
    }

    /// Starts a config flow that rejects projectors already loaded.
    pub async fn config_flow(&self) -> ConfigFlow {
        ConfigFlow::new(self.configured_unique_ids().await)
    }

    // =========================================================================
    // Entity operations
    // =========================================================================

    /// Polls one entity.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown entry, or the client's
    /// error if the poll fails.
    pub async fn update(&self, entry_id: EntryId) -> Result<()> {
        let player = self.require(entry_id).await?;
        let before = player.state();
        player.update().await?;
        self.publish_change(&player, before);
        Ok(())
    }

    /// Polls every entity, returning the entries whose poll failed.
    pub async fn update_all(&self) -> Vec<(EntryId, Error)> {
        let mut failures = Vec::new();
        for entry_id in self.entry_ids().await {
            if let Err(err) = self.update(entry_id).await {
                tracing::warn!(entry_id = %entry_id, error = %err, "Failed to poll projector");
                failures.push((entry_id, err));
            }
        }
        failures
    }

    /// Routes a service call to the entity of `entry_id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown entry, or the client's
    /// error if the command fails.
    pub async fn call_service(
        &self,
        entry_id: EntryId,
        service: &MediaPlayerService,
    ) -> Result<()> {
        let player = self.require(entry_id).await?;
        let before = player.state();
        tracing::debug!(entry_id = %entry_id, service = service.name(), "Calling service");
        player.call_service(service).await?;
        self.publish_change(&player, before);
        Ok(())
    }

    async fn require(&self, entry_id: EntryId) -> Result<Arc<Player<F>>> {
        self.entity(entry_id)
            .await
            .ok_or(Error::EntryNotFound(entry_id))
    }

    fn publish_change(&self, player: &Player<F>, before: PlayerState) {
        let after = player.state();
        if after != before {
            self.event_bus.publish(PlayerEvent::StateChanged {
                entry_id: player.entry_id(),
                change: StateChange::at(before, after, player.last_changed()),
            });
        }
    }
}

impl<F: ClientFactory> std::fmt::Debug for Integration<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integration")
            .field("domain", &DOMAIN)
            .field("subscribers", &self.event_bus.subscriber_count())
            .finish_non_exhaustive()
    }
}
