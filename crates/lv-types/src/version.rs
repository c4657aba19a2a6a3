use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Client capability signal carried on each request (`X-App-Version`).
///
/// A `major.minor` pair with a total order. The intake protocol compares it
/// against [`ClientVersion::RANKED_VOTING_MIN`] to pick a validation
/// strategy before interpreting the submission body. A request without the
/// header is treated as [`ClientVersion::OLDEST_SUPPORTED`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientVersion {
    pub major: u16,
    pub minor: u16,
}

impl ClientVersion {
    /// The oldest version the server still speaks: single-choice voting.
    pub const OLDEST_SUPPORTED: Self = Self { major: 1, minor: 0 };

    /// First version that submits three-choice ranked votes.
    pub const RANKED_VOTING_MIN: Self = Self { major: 2, minor: 0 };

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Whether this client speaks the ranked three-choice protocol.
    pub fn supports_ranked_voting(&self) -> bool {
        *self >= Self::RANKED_VOTING_MIN
    }

    /// Resolve an optional header value: absent means oldest supported.
    pub fn from_header(value: Option<&str>) -> Result<Self, TypeError> {
        match value {
            None => Ok(Self::OLDEST_SUPPORTED),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for ClientVersion {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidVersion(s.to_string());
        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Debug for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientVersion({}.{})", self.major, self.minor)
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
