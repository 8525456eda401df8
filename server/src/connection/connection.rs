use std::fmt;

use planesync_shared::transport::AuthorityEndpoint;

/// Identifies one remote participant connected to the authority
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionKey(u64);

impl ConnectionKey {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection#{}", self.0)
    }
}

pub(crate) struct Connection {
    pub endpoint: AuthorityEndpoint,
    /// This remote drives the tracking hardware
    pub is_owner: bool,
    /// Has not yet been sent the current collection
    pub needs_push: bool,
}

impl Connection {
    pub fn new(endpoint: AuthorityEndpoint, is_owner: bool) -> Self {
        Self {
            endpoint,
            is_owner,
            needs_push: true,
        }
    }
}
