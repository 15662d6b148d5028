// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `xgimi_lib` library.
//!
//! Failures fall into three groups: values that are not part of the command
//! or state vocabulary, errors reported by the device-control client, and
//! invalid configuration entries.

use thiserror::Error;

use crate::config::EntryId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A string could not be mapped to a known value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The device-control client failed.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// A configuration entry is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No entity is set up for the given config entry.
    #[error("config entry {0} is not set up")]
    EntryNotFound(EntryId),

    /// The config entry already has an entity.
    #[error("config entry {0} is already set up")]
    AlreadySetUp(EntryId),
}

/// Errors related to parsing vocabulary values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The string is not one of the allow-listed command tokens.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The string is not a media player state.
    #[error("unknown player state: {0}")]
    UnknownState(String),

    /// The string is not a media player service name.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// The data attached to a service call is malformed.
    #[error("invalid data for service {service}: {message}")]
    InvalidServiceData {
        /// The service that was called.
        service: String,
        /// Description of the problem.
        message: String,
    },
}

/// Errors reported by a [`DeviceClient`](crate::client::DeviceClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection to the projector failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The projector did not answer in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The projector rejected the command.
    #[error("command rejected: {0}")]
    CommandRejected(String),

    /// The manufacturer token was not accepted.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to configuration entries.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host is neither an IP address nor a valid hostname.
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// A persisted entry could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownCommand("reboot".to_string());
        assert_eq!(err.to_string(), "unknown command: reboot");
    }

    #[test]
    fn error_from_client_error() {
        let err: Error = ClientError::Timeout(500).into();
        assert!(matches!(err, Error::Client(ClientError::Timeout(500))));
        assert_eq!(err.to_string(), "client error: request timed out after 500 ms");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidHost("-bad-".to_string());
        assert_eq!(err.to_string(), "invalid host: -bad-");
    }

    #[test]
    fn entry_not_found_display() {
        let id = EntryId::from_uuid(uuid::Uuid::nil());
        let err = Error::EntryNotFound(id);
        assert_eq!(
            err.to_string(),
            "config entry 00000000-0000-0000-0000-000000000000 is not set up"
        );
    }
}
