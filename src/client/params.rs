// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection parameters handed to a client factory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Port receiving key commands.
pub const DEFAULT_COMMAND_PORT: u16 = 16735;

/// Port receiving advanced commands.
pub const DEFAULT_ADVANCE_PORT: u16 = 16750;

/// Port probed to decide whether the projector is on.
pub const DEFAULT_ALIVE_PORT: u16 = 554;

/// Parameters needed to reach one projector.
///
/// # Examples
///
/// ```
/// use xgimi_lib::client::ConnectionParams;
///
/// let params = ConnectionParams::new("192.168.1.42", "abcdef")
///     .with_alive_port(8554);
///
/// assert_eq!(params.ip, "192.168.1.42");
/// assert_eq!(params.advance_port, 16750);
/// assert_eq!(params.alive_port, 8554);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Projector host or IP address.
    pub ip: String,
    /// Port receiving key commands.
    pub command_port: u16,
    /// Port receiving advanced commands.
    pub advance_port: u16,
    /// Port probed for the power state.
    pub alive_port: u16,
    /// Manufacturer data used to authenticate and wake the projector.
    pub manufacturer_data: String,
}

impl ConnectionParams {
    /// Creates parameters with the default ports.
    #[must_use]
    pub fn new(ip: impl Into<String>, manufacturer_data: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            command_port: DEFAULT_COMMAND_PORT,
            advance_port: DEFAULT_ADVANCE_PORT,
            alive_port: DEFAULT_ALIVE_PORT,
            manufacturer_data: manufacturer_data.into(),
        }
    }

    /// Sets the command port.
    #[must_use]
    pub fn with_command_port(mut self, port: u16) -> Self {
        self.command_port = port;
        self
    }

    /// Sets the advance port.
    #[must_use]
    pub fn with_advance_port(mut self, port: u16) -> Self {
        self.advance_port = port;
        self
    }

    /// Sets the alive port.
    #[must_use]
    pub fn with_alive_port(mut self, port: u16) -> Self {
        self.alive_port = port;
        self
    }
}

// Keeps the manufacturer token out of logs.
impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("ip", &self.ip)
            .field("command_port", &self.command_port)
            .field("advance_port", &self.advance_port)
            .field("alive_port", &self.alive_port)
            .field("manufacturer_data", &"<redacted>")
            .finish()
    }
}
