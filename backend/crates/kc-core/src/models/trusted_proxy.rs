use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::net::IpAddr;
use std::panic::Location;

use error_location::ErrorLocation;

/// A peer allowed to assert identity headers: a single address or a CIDR range.
///
/// Addresses are canonicalized on both sides, so `::ffff:10.0.0.1` matches a
/// configured `10.0.0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustedProxy {
    Address(IpAddr),
    Network { base: IpAddr, prefix: u8 },
}

impl TrustedProxy {
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        let trimmed = value.trim();
        let (addr, prefix) = match trimmed.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (trimmed, None),
        };

        let ip = addr
            .parse::<IpAddr>()
            .map_err(|e| CoreError::InvalidTrustedProxy {
                value: value.to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_canonical();

        let Some(prefix) = prefix else {
            return Ok(Self::Address(ip));
        };

        let prefix: u8 = prefix.parse().map_err(|_| CoreError::InvalidTrustedProxy {
            value: value.to_string(),
            message: format!("prefix length '{prefix}' is not a number"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let width = address_width(ip);
        if prefix > width {
            return Err(CoreError::InvalidTrustedProxy {
                value: value.to_string(),
                message: format!("prefix length {prefix} exceeds {width} bits"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self::Network { base: ip, prefix })
    }

    /// Parse a list of entries, failing on the first invalid one
    #[track_caller]
    pub fn parse_all<S: AsRef<str>>(values: &[S]) -> CoreErrorResult<Vec<Self>> {
        values.iter().map(|v| Self::parse(v.as_ref())).collect()
    }

    pub fn contains(&self, peer: IpAddr) -> bool {
        let peer = peer.to_canonical();
        match *self {
            Self::Address(addr) => addr == peer,
            Self::Network { base, prefix } => match (base, peer) {
                (IpAddr::V4(b), IpAddr::V4(p)) => {
                    prefix_matches(u128::from(u32::from(b)), u128::from(u32::from(p)), prefix, 32)
                }
                (IpAddr::V6(b), IpAddr::V6(p)) => {
                    prefix_matches(u128::from(b), u128::from(p), prefix, 128)
                }
                _ => false,
            },
        }
    }
}

impl fmt::Display for TrustedProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => write!(f, "{addr}"),
            Self::Network { base, prefix } => write!(f, "{base}/{prefix}"),
        }
    }
}

fn address_width(ip: IpAddr) -> u8 {
    match ip {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn prefix_matches(base: u128, candidate: u128, prefix: u8, width: u8) -> bool {
    if prefix == 0 {
        return true;
    }
    // A prefix wider than the address compares every bit
    let shift = u32::from(width.saturating_sub(prefix));
    (base >> shift) == (candidate >> shift)
}
