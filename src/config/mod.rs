// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config entries and the flow that creates them.
//!
//! A config entry is one user-configured projector: a name, a host and the
//! manufacturer token. The [`ConfigFlow`] validates user input and turns it
//! into entry data; the host persists the resulting [`ConfigEntry`] and hands
//! it to [`Integration::setup_entry`](crate::Integration::setup_entry).
//!
//! # Examples
//!
//! ```
//! use xgimi_lib::config::{ConfigEntry, ConfigFlow, FlowResult, UserInput};
//!
//! let mut flow = ConfigFlow::new(Vec::<String>::new());
//! let result = flow.step_user(Some(UserInput {
//!     name: "Cinema".into(),
//!     host: "192.168.1.42".into(),
//!     token: "abcdef".into(),
//! }));
//!
//! if let FlowResult::CreateEntry { data, .. } = result {
//!     let entry = ConfigEntry::new(data);
//!     assert_eq!(entry.unique_id, "Cinema-abcdef");
//! }
//! ```

mod entry;
mod entry_id;
mod flow;
mod host;

pub use entry::{ConfigEntry, EntryConfig};
pub use entry_id::EntryId;
pub use flow::{
    ABORT_ALREADY_CONFIGURED, ConfigFlow, ERROR_INVALID_HOST, FlowResult, STEP_USER, UserInput,
};
pub use host::is_host_valid;
