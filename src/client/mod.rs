// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device-control client seam.
//!
//! The wire protocol to the projector (command, advance and alive ports,
//! manufacturer-data authentication, connection lifecycle) belongs to the
//! client. This crate only consumes it through [`DeviceClient`] and builds
//! one per config entry through a [`ClientFactory`].
//!
//! # Examples
//!
//! ```
//! use xgimi_lib::client::{ConnectionParams, DeviceClient};
//! use xgimi_lib::error::ClientError;
//!
//! struct LoggingClient;
//!
//! impl DeviceClient for LoggingClient {
//!     async fn fetch_data(&self) -> Result<(), ClientError> {
//!         Ok(())
//!     }
//!
//!     fn is_on(&self) -> bool {
//!         false
//!     }
//!
//!     async fn send_command(&self, name: &str) -> Result<(), ClientError> {
//!         println!("sending {name}");
//!         Ok(())
//!     }
//! }
//!
//! let params = ConnectionParams::new("192.168.1.42", "token");
//! assert_eq!(params.command_port, 16735);
//! ```

#[cfg(test)]
pub(crate) mod mock;
mod params;

pub use params::{ConnectionParams, DEFAULT_ADVANCE_PORT, DEFAULT_ALIVE_PORT, DEFAULT_COMMAND_PORT};

use crate::error::ClientError;

/// A client able to talk to one projector.
#[allow(async_fn_in_trait)]
pub trait DeviceClient {
    /// Refreshes the client's view of the projector.
    ///
    /// After this returns, [`is_on`](Self::is_on) reflects the latest poll.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the projector could not be queried.
    async fn fetch_data(&self) -> Result<(), ClientError>;

    /// Returns whether the last poll saw the projector powered on.
    fn is_on(&self) -> bool;

    /// Transmits one command token.
    ///
    /// # Arguments
    ///
    /// * `name` - An allow-listed token such as `"poweron"`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the command could not be delivered.
    async fn send_command(&self, name: &str) -> Result<(), ClientError>;
}

/// Builds a [`DeviceClient`] from connection parameters.
///
/// Any `Fn(ConnectionParams) -> C` closure is a factory.
pub trait ClientFactory {
    /// The client type produced by this factory.
    type Client: DeviceClient;

    /// Creates a client for the given projector.
    fn create(&self, params: ConnectionParams) -> Self::Client;
}

impl<F, C> ClientFactory for F
where
    F: Fn(ConnectionParams) -> C,
    C: DeviceClient,
{
    type Client = C;

    fn create(&self, params: ConnectionParams) -> C {
        self(params)
    }
}
