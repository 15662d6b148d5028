// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host validation for user-supplied addresses.

use std::net::{IpAddr, Ipv6Addr};

/// Longest accepted hostname.
const MAX_HOST_LEN: usize = 255;

/// Longest accepted hostname label.
const MAX_LABEL_LEN: usize = 63;

/// Returns whether `host` is an IP address or a valid hostname.
///
/// Hostnames may end with a single dot. Each label must be 1-63 ASCII
/// alphanumerics or hyphens, without a leading or trailing hyphen. A string
/// made only of digits and dots must parse as an IPv4 address. IPv6
/// addresses may carry a `%zone` scope suffix.
///
/// # Examples
///
/// ```
/// use xgimi_lib::config::is_host_valid;
///
/// assert!(is_host_valid("192.168.1.42"));
/// assert!(is_host_valid("fe80::1"));
/// assert!(is_host_valid("fe80::1%eth0"));
/// assert!(is_host_valid("projector.local"));
/// assert!(!is_host_valid("256.1.1.1"));
/// assert!(!is_host_valid("-projector"));
/// ```
#[must_use]
pub fn is_host_valid(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }
    if let Some((addr, zone)) = host.split_once('%') {
        return !zone.is_empty() && addr.parse::<Ipv6Addr>().is_ok();
    }
    if host.is_empty() || host.len() > MAX_HOST_LEN {
        return false;
    }
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }

    let host = host.strip_suffix('.').unwrap_or(host);
    host.split('.').all(is_label_valid)
}

fn is_label_valid(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
