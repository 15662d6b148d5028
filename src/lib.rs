// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `xgimi_lib` - Expose XGIMI projectors as home-automation media players.
//!
//! The library sits between a home-automation host and a projector
//! device-control client. It turns host calls such as "turn on", "play" or
//! "volume up" into fixed command tokens, and keeps an optimistic
//! `off/on/playing/paused` state for the host to display.
//!
//! # Features
//!
//! - **Media player entity**: power, playback, volume, navigation keys
//! - **Generic dispatch**: send any allow-listed command token by name
//! - **Config flow**: validate user input and detect duplicate projectors
//! - **Entry lifecycle**: set up and unload one entity per config entry
//! - **Events**: subscribe to entity and state changes
//!
//! The projector's wire protocol is not part of this crate. Plug in a client
//! by implementing [`DeviceClient`](client::DeviceClient).
//!
//! # Quick Start
//!
//! ```
//! use xgimi_lib::client::{ConnectionParams, DeviceClient};
//! use xgimi_lib::config::{ConfigEntry, ConfigFlow, FlowResult, UserInput};
//! use xgimi_lib::error::ClientError;
//! use xgimi_lib::{Integration, MediaPlayerService};
//!
//! struct MyClient {
//!     params: ConnectionParams,
//! }
//!
//! impl DeviceClient for MyClient {
//!     async fn fetch_data(&self) -> Result<(), ClientError> {
//!         Ok(())
//!     }
//!
//!     fn is_on(&self) -> bool {
//!         false
//!     }
//!
//!     async fn send_command(&self, name: &str) -> Result<(), ClientError> {
//!         println!("{} <- {name}", self.params.ip);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> xgimi_lib::Result<()> {
//!     let integration = Integration::new(|params: ConnectionParams| MyClient { params });
//!
//!     let mut flow = integration.config_flow().await;
//!     let FlowResult::CreateEntry { data, .. } = flow.step_user(Some(UserInput {
//!         name: "Cinema".into(),
//!         host: "192.168.1.42".into(),
//!         token: "abcdef".into(),
//!     })) else {
//!         return Ok(());
//!     };
//!
//!     let entry = ConfigEntry::new(data);
//!     let entry_id = entry.entry_id;
//!     integration.setup_entry(entry).await?;
//!
//!     integration.call_service(entry_id, &MediaPlayerService::TurnOn).await?;
//!     integration.update(entry_id).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
mod command;
pub mod config;
mod entity;
pub mod error;
pub mod event;
mod features;
mod integration;
pub mod state;

pub use command::Command;
pub use entity::{DEFAULT_NAME, MediaPlayerService, XgimiMediaPlayer};
pub use error::{ClientError, ConfigError, Error, Result, ValueError};
pub use features::{DeviceClass, SupportedFeatures};
pub use integration::{DOMAIN, Integration};
pub use state::{PlayerState, StateChange};
