// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events published by the integration.
//!
//! The host subscribes to learn when entities appear, disappear or change
//! state. The [`EventBus`] uses tokio's broadcast channel so several
//! subscribers receive the same events.
//!
//! # Examples
//!
//! ```
//! use xgimi_lib::config::EntryId;
//! use xgimi_lib::event::{EventBus, PlayerEvent};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(PlayerEvent::EntityAdded { entry_id: EntryId::new() });
//! assert!(rx.try_recv().is_ok());
//! ```

mod event_bus;
mod player_event;

pub use event_bus::EventBus;
pub use player_event::PlayerEvent;
