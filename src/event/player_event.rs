// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Player event types.

use serde::{Deserialize, Serialize};

use crate::config::EntryId;
use crate::state::StateChange;

/// Events emitted by the integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// An entity was created for a config entry.
    EntityAdded {
        /// The config entry.
        entry_id: EntryId,
    },

    /// The entity of a config entry was unloaded.
    EntityRemoved {
        /// The config entry.
        entry_id: EntryId,
    },

    /// The cached state of an entity changed.
    StateChanged {
        /// The config entry.
        entry_id: EntryId,
        /// The transition.
        change: StateChange,
    },
}

impl PlayerEvent {
    /// Returns the config entry this event refers to.
    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        match self {
            Self::EntityAdded { entry_id }
            | Self::EntityRemoved { entry_id }
            | Self::StateChanged { entry_id, .. } => *entry_id,
        }
    }
}
