// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config entry types.

use serde::{Deserialize, Serialize};

use crate::client::ConnectionParams;
use crate::error::ConfigError;

use super::EntryId;
use super::host::is_host_valid;

/// Data a user enters for one projector.
///
/// # Examples
///
/// ```
/// use xgimi_lib::config::EntryConfig;
///
/// let data = EntryConfig::new("Living Room", "192.168.1.42", "abcdef");
/// assert_eq!(data.unique_id(), "Living Room-abcdef");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Display name of the projector.
    pub name: String,
    /// Projector host or IP address.
    pub host: String,
    /// Manufacturer token.
    pub token: String,
}

impl EntryConfig {
    /// Creates entry data.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            token: token.into(),
        }
    }

    /// Returns the unique id used to detect duplicate entries.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("{}-{}", self.name, self.token)
    }

    /// Checks that the host is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHost` if the host is neither an IP
    /// address nor a valid hostname.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_host_valid(&self.host) {
            Ok(())
        } else {
            Err(ConfigError::InvalidHost(self.host.clone()))
        }
    }

    /// Returns the client connection parameters, using the default ports.
    #[must_use]
    pub fn connection_params(&self) -> ConnectionParams {
        ConnectionParams::new(self.host.clone(), self.token.clone())
    }
}

impl std::fmt::Debug for EntryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryConfig")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A configured projector, as persisted by the host.
///
/// # Examples
///
/// ```
/// use xgimi_lib::config::{ConfigEntry, EntryConfig};
///
/// let entry = ConfigEntry::new(EntryConfig::new("Cinema", "10.0.0.7", "token"));
/// assert_eq!(entry.title, "Cinema");
/// assert_eq!(entry.unique_id, "Cinema-token");
///
/// let json = entry.to_json().unwrap();
/// let restored = ConfigEntry::from_json(&json).unwrap();
/// assert_eq!(restored, entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Identifier of this entry.
    pub entry_id: EntryId,
    /// Entry title shown to the user.
    pub title: String,
    /// Unique id preventing duplicate entries.
    pub unique_id: String,
    /// Entry data.
    pub data: EntryConfig,
}

impl ConfigEntry {
    /// Creates an entry with a fresh id, titled after the projector name.
    #[must_use]
    pub fn new(data: EntryConfig) -> Self {
        Self::with_id(EntryId::new(), data)
    }

    /// Creates an entry with a known id.
    #[must_use]
    pub fn with_id(entry_id: EntryId, data: EntryConfig) -> Self {
        Self {
            entry_id,
            title: data.name.clone(),
            unique_id: data.unique_id(),
            data,
        }
    }

    /// Serializes the entry for storage.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Restores a stored entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is not a config entry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(Into::into)
    }
}
