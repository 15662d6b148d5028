// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared test doubles.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use xgimi_lib::client::{ConnectionParams, DeviceClient};
use xgimi_lib::error::ClientError;

/// Client that records every call instead of talking to a projector.
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    sent: Arc<Mutex<Vec<String>>>,
    powered: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
    failure: Arc<Mutex<Option<ClientError>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    /// Sets what the next poll reports.
    pub fn set_powered(&self, on: bool) {
        self.powered.store(on, Ordering::SeqCst);
    }

    /// Makes every later call fail with `error`.
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock() = None;
    }
}

impl DeviceClient for RecordingClient {
    async fn fetch_data(&self) -> Result<(), ClientError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        self.failure.lock().clone().map_or(Ok(()), Err)
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

/// Builds a client factory that hands out clones of `client` and records
/// the parameters it was asked for.
pub fn recording_factory(
    client: &RecordingClient,
) -> (
    impl Fn(ConnectionParams) -> RecordingClient + use<>,
    Arc<Mutex<Vec<ConnectionParams>>>,
) {
    let client = client.clone();
    let params = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&params);
    let factory = move |p: ConnectionParams| {
        seen.lock().push(p);
        client.clone()
    };
    (factory, params)
}
