//! Encoding of typed calls into wire envelopes and back.
//!
//! Requests are tagged with the call's import symbol; replies carry the
//! fixed [`REPLY_SYMBOL`] marker plus a correlation ID. The codec checks
//! both directions: symbol agreement on decode, schema compatibility, and
//! correlation on replies.

use crate::calls::{HostCall, HostReply};
use crate::wire::{CallEnvelope, CallId, CallPayload, CALL_SCHEMA_VERSION};
use thiserror::Error;

/// Symbol used on every reply envelope.
pub const REPLY_SYMBOL: &str = "hostReply";

/// Errors produced while encoding or decoding envelopes.
///
/// These never cross the call surface; the guest binding collapses them
/// into the flat failure value of the call in flight.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("envelope symbol {actual:?} does not match expected {expected:?}")]
    SymbolMismatch { expected: String, actual: String },

    #[error("incompatible schema version: envelope {envelope}, supported {supported}")]
    IncompatibleSchema { envelope: String, supported: String },

    #[error("reply correlation {actual} does not match request {expected}")]
    CorrelationMismatch { expected: CallId, actual: CallId },

    #[error("envelope is not a reply")]
    NotAReply,
}

/// Stateless request/reply codec for the call surface.
pub struct HostCallCodec;

impl HostCallCodec {
    /// Encodes a call into a request envelope.
    pub fn encode_request(call: &HostCall) -> Result<CallEnvelope, CodecError> {
        let payload = CallPayload::new(call)?;
        Ok(CallEnvelope::new(call.symbol(), CALL_SCHEMA_VERSION, payload))
    }

    /// Decodes a request envelope back into a call, checking the schema
    /// version and that the envelope symbol matches the decoded call.
    pub fn decode_request(envelope: &CallEnvelope) -> Result<HostCall, CodecError> {
        Self::check_schema(envelope)?;
        let call: HostCall = envelope.payload.deserialize()?;
        if call.symbol() != envelope.symbol {
            return Err(CodecError::SymbolMismatch {
                expected: call.symbol().to_string(),
                actual: envelope.symbol.clone(),
            });
        }
        Ok(call)
    }

    /// Encodes a reply correlated to the request it answers.
    pub fn encode_reply(reply: &HostReply, request_id: CallId) -> Result<CallEnvelope, CodecError> {
        let payload = CallPayload::new(reply)?;
        Ok(CallEnvelope::new(REPLY_SYMBOL, CALL_SCHEMA_VERSION, payload)
            .with_correlation(request_id))
    }

    /// Decodes a reply envelope, checking schema, the reply marker, and
    /// that the correlation points at `request_id`.
    pub fn decode_reply(envelope: &CallEnvelope, request_id: CallId) -> Result<HostReply, CodecError> {
        Self::check_schema(envelope)?;
        if envelope.symbol != REPLY_SYMBOL {
            return Err(CodecError::SymbolMismatch {
                expected: REPLY_SYMBOL.to_string(),
                actual: envelope.symbol.clone(),
            });
        }
        match envelope.correlation_id {
            None => Err(CodecError::NotAReply),
            Some(actual) if actual != request_id => {
                Err(CodecError::CorrelationMismatch {
                    expected: request_id,
                    actual,
                })
            }
            Some(_) => Ok(envelope.payload.deserialize()?),
        }
    }

    fn check_schema(envelope: &CallEnvelope) -> Result<(), CodecError> {
        if !envelope.schema_version.is_compatible_with(&CALL_SCHEMA_VERSION) {
            return Err(CodecError::IncompatibleSchema {
                envelope: envelope.schema_version.to_string(),
                supported: CALL_SCHEMA_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::SchemaVersion;

    #[test]
    fn test_request_round_trip() {
        let call = HostCall::SetIo { io: 3, on: 1 };
        let envelope = HostCallCodec::encode_request(&call).unwrap();
        assert_eq!(envelope.symbol, "setIO");
        assert!(!envelope.is_reply());

        let decoded = HostCallCodec::decode_request(&envelope).unwrap();
        assert_eq!(decoded.symbol(), "setIO");
    }

    #[test]
    fn test_reply_round_trip() {
        let request = HostCallCodec::encode_request(&HostCall::Millis).unwrap();
        let envelope = HostCallCodec::encode_reply(&HostReply::Uint(1234), request.id).unwrap();
        assert_eq!(envelope.symbol, REPLY_SYMBOL);
        assert!(envelope.is_reply());

        let reply = HostCallCodec::decode_reply(&envelope, request.id).unwrap();
        assert_eq!(reply, HostReply::Uint(1234));
    }

    #[test]
    fn test_symbol_mismatch_detected() {
        let call = HostCall::Rand;
        let mut envelope = HostCallCodec::encode_request(&call).unwrap();
        envelope.symbol = "millis".to_string();
        assert!(matches!(
            HostCallCodec::decode_request(&envelope),
            Err(CodecError::SymbolMismatch { .. })
        ));
    }

    #[test]
    fn test_incompatible_schema_rejected() {
        let mut envelope = HostCallCodec::encode_request(&HostCall::Rand).unwrap();
        envelope.schema_version = SchemaVersion::new(99, 0);
        assert!(matches!(
            HostCallCodec::decode_request(&envelope),
            Err(CodecError::IncompatibleSchema { .. })
        ));
    }

    #[test]
    fn test_correlation_mismatch_rejected() {
        let request = HostCallCodec::encode_request(&HostCall::Rand).unwrap();
        let envelope = HostCallCodec::encode_reply(&HostReply::Int(7), request.id).unwrap();
        let other = CallId::new();
        assert!(matches!(
            HostCallCodec::decode_reply(&envelope, other),
            Err(CodecError::CorrelationMismatch { .. })
        ));
    }

    #[test]
    fn test_reply_without_correlation_rejected() {
        let request = HostCallCodec::encode_request(&HostCall::Rand).unwrap();
        let mut envelope = HostCallCodec::encode_reply(&HostReply::Int(7), request.id).unwrap();
        envelope.correlation_id = None;
        assert!(matches!(
            HostCallCodec::decode_reply(&envelope, request.id),
            Err(CodecError::NotAReply)
        ));
    }
}
