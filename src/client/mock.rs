// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory client for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::DeviceClient;
use crate::error::ClientError;

/// Records every command and answers polls from a shared flag.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockClient {
    pub sent: Arc<Mutex<Vec<String>>>,
    pub powered: Arc<AtomicBool>,
    pub polls: Arc<AtomicUsize>,
    pub failure: Arc<Mutex<Option<ClientError>>>,
}

impl MockClient {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn set_powered(&self, on: bool) {
        self.powered.store(on, Ordering::SeqCst);
    }

    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock() = Some(error);
    }
}

impl DeviceClient for MockClient {
    async fn fetch_data(&self) -> Result<(), ClientError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn is_on(&self) -> bool {
        self.powered.load(Ordering::SeqCst)
    }

    async fn send_command(&self, name: &str) -> Result<(), ClientError> {
        if let Some(err) = self.failure.lock().clone() {
            return Err(err);
        }
        self.sent.lock().push(name.to_string());
        Ok(())
    }
}
