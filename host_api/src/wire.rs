//! Envelope structure carried between guest binding and host dispatcher.
//!
//! Request envelopes are tagged with the import symbol they invoke; reply
//! envelopes carry a correlation ID pointing back at the request. Payloads
//! are type-erased JSON so the envelope layer stays generic over call shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one call crossing the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallId(Uuid);

impl CallId {
    /// Creates a new random call ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a call ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call({})", self.0)
    }
}

/// Schema version for envelope payloads.
///
/// Numeric constants and call layouts are a versioned wire contract shared
/// with the host; same major version means compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version (breaking changes)
    pub major: u32,
    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl SchemaVersion {
    /// Creates a new schema version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Checks if this version is compatible with another
    pub fn is_compatible_with(&self, other: &SchemaVersion) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Schema version of the current call surface.
pub const CALL_SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0);

/// Type-erased envelope payload (JSON bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPayload {
    data: Vec<u8>,
}

impl CallPayload {
    /// Serializes a value into a payload
    pub fn new<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        let data = serde_json::to_vec(value)?;
        Ok(Self { data })
    }

    /// Deserializes the payload into a specific type
    pub fn deserialize<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.data)
    }

    /// Returns the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Envelope for one request or reply crossing the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallEnvelope {
    /// Unique identifier for this envelope
    pub id: CallId,
    /// Import symbol being invoked (requests) or the reply marker
    pub symbol: String,
    /// Schema version of the payload
    pub schema_version: SchemaVersion,
    /// Correlation ID for request/reply matching
    pub correlation_id: Option<CallId>,
    /// Serialized payload
    pub payload: CallPayload,
}

impl CallEnvelope {
    /// Creates a new envelope
    pub fn new(symbol: impl Into<String>, schema_version: SchemaVersion, payload: CallPayload) -> Self {
        Self {
            id: CallId::new(),
            symbol: symbol.into(),
            schema_version,
            correlation_id: None,
            payload,
        }
    }

    /// Sets the correlation ID (for replies)
    pub fn with_correlation(mut self, correlation_id: CallId) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Checks if this envelope is a reply to another
    pub fn is_reply(&self) -> bool {
        self.correlation_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestPayload {
        value: i32,
    }

    #[test]
    fn test_call_id_uniqueness() {
        assert_ne!(CallId::new(), CallId::new());
    }

    #[test]
    fn test_schema_version_compatibility() {
        let v1_0 = SchemaVersion::new(1, 0);
        let v1_3 = SchemaVersion::new(1, 3);
        let v2_0 = SchemaVersion::new(2, 0);

        assert!(v1_0.is_compatible_with(&v1_3));
        assert!(!v1_0.is_compatible_with(&v2_0));
    }

    #[test]
    fn test_payload_round_trip() {
        let payload = CallPayload::new(&TestPayload { value: 7 }).unwrap();
        let decoded: TestPayload = payload.deserialize().unwrap();
        assert_eq!(decoded, TestPayload { value: 7 });
    }

    #[test]
    fn test_envelope_correlation() {
        let payload = CallPayload::new(&TestPayload { value: 7 }).unwrap();
        let request = CallEnvelope::new("setIO", CALL_SCHEMA_VERSION, payload.clone());
        assert!(!request.is_reply());

        let reply = CallEnvelope::new("hostReply", CALL_SCHEMA_VERSION, payload)
            .with_correlation(request.id);
        assert!(reply.is_reply());
        assert_eq!(reply.correlation_id, Some(request.id));
    }
}
