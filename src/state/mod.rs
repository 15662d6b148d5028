// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Media player state types.
//!
//! The entity keeps a cached [`PlayerState`] that is updated optimistically
//! after each forwarded command and overwritten by polls. A [`StateChange`]
//! records one transition of that cached value.
//!
//! # Examples
//!
//! ```
//! use xgimi_lib::state::{PlayerState, StateChange};
//!
//! let change = StateChange::new(PlayerState::Off, PlayerState::On);
//! assert!(!change.old.is_on());
//! assert_eq!(change.new.as_str(), "on");
//! ```

mod player_state;
mod state_change;

pub use player_state::PlayerState;
pub use state_change::StateChange;
