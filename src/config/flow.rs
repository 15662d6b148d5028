// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The user config flow.
//!
//! The flow has a single `user` step. Called without input it asks for a
//! form; called with input it validates the host, rejects duplicates and
//! finally produces the data for a new config entry.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::EntryConfig;
use super::host::is_host_valid;

/// Step id of the only step in the flow.
pub const STEP_USER: &str = "user";

/// Error key reported against the host field.
pub const ERROR_INVALID_HOST: &str = "invalid_host";

/// Abort reason when the projector is already configured.
pub const ABORT_ALREADY_CONFIGURED: &str = "already_configured";

/// Form input submitted by the user.
///
/// Every field is required; a missing field fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// Projector name.
    pub name: String,
    /// Projector host or IP address.
    pub host: String,
    /// Manufacturer token.
    pub token: String,
}

impl From<UserInput> for EntryConfig {
    fn from(input: UserInput) -> Self {
        Self::new(input.name, input.host, input.token)
    }
}

/// Outcome of a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    /// Show (or re-show) the form.
    Form {
        /// Step to submit the form to.
        step_id: &'static str,
        /// Field errors, keyed by field name.
        errors: BTreeMap<String, String>,
        /// Values to prefill.
        defaults: UserInput,
    },
    /// Create a new config entry.
    CreateEntry {
        /// Entry title.
        title: String,
        /// Entry data.
        data: EntryConfig,
    },
    /// Stop the flow.
    Abort {
        /// Reason key.
        reason: &'static str,
    },
}

/// Config flow for adding a projector.
///
/// # Examples
///
/// ```
/// use xgimi_lib::config::{ConfigFlow, FlowResult, UserInput};
///
/// let mut flow = ConfigFlow::new(Vec::<String>::new());
///
/// let input = UserInput {
///     name: "Cinema".into(),
///     host: "192.168.1.42".into(),
///     token: "abcdef".into(),
/// };
///
/// match flow.step_user(Some(input)) {
///     FlowResult::CreateEntry { title, data } => {
///         assert_eq!(title, "Cinema");
///         assert_eq!(data.host, "192.168.1.42");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigFlow {
    configured: HashSet<String>,
    unique_id: Option<String>,
}

impl ConfigFlow {
    /// Flow schema version.
    pub const VERSION: u32 = 1;

    /// Creates a flow aware of the unique ids already configured.
    #[must_use]
    pub fn new<I, S>(configured: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            configured: configured.into_iter().map(Into::into).collect(),
            unique_id: None,
        }
    }

    /// Returns the unique id assigned by the last accepted submission.
    #[must_use]
    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    /// Runs the `user` step.
    pub fn step_user(&mut self, input: Option<UserInput>) -> FlowResult {
        let mut errors = BTreeMap::new();

        let Some(input) = input else {
            return Self::form(errors, UserInput::default());
        };

        if !is_host_valid(&input.host) {
            tracing::debug!(host = %input.host, "Rejecting invalid projector host");
            errors.insert("host".to_string(), ERROR_INVALID_HOST.to_string());
            return Self::form(errors, input);
        }

        let data = EntryConfig::from(input);
        let unique_id = data.unique_id();
        if self.configured.contains(&unique_id) {
            tracing::debug!(name = %data.name, "Projector already configured");
            return FlowResult::Abort {
                reason: ABORT_ALREADY_CONFIGURED,
            };
        }

        self.unique_id = Some(unique_id);
        FlowResult::CreateEntry {
            title: data.name.clone(),
            data,
        }
    }

    fn form(errors: BTreeMap<String, String>, defaults: UserInput) -> FlowResult {
        FlowResult::Form {
            step_id: STEP_USER,
            errors,
            defaults,
        }
    }
}
