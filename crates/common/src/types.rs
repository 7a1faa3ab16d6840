use serde::{Deserialize, Serialize};

/// Opaque identifier for a checkout session.
///
/// Issued by the commerce backend and never generated locally. Wraps the
/// raw token to provide type safety and prevent mixing it up with other
/// string-based identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutId(String);

impl CheckoutId {
    /// Creates a checkout ID from a backend-issued token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CheckoutId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for CheckoutId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl AsRef<str> for CheckoutId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Monotonic sequence number for lookup requests.
///
/// Sequences start at 1 for the first lookup and increment by 1 for each
/// subsequent lookup. A result whose sequence has been superseded by a
/// newer request for the same stage is stale and must be discarded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Creates a sequence number from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the first sequence number (1) for the first lookup.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next sequence number.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw sequence value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestSeq {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RequestSeq> for u64 {
    fn from(seq: RequestSeq) -> Self {
        seq.0
    }
}
