//! Event records read destructively from the host event queue.
//!
//! A record is a tag plus at most [`EVENT_DATA_MAX`] payload bytes. The
//! per-type payload length is not fixed; consumers must inspect the tag
//! before interpreting the bytes. Queue overflow is reported in-band with a
//! dedicated [`GuiEventType::EventFifoOverflow`] record, never as an error
//! return.

use crate::enums::GuiEventType;
use serde::{Deserialize, Serialize};

/// Maximum payload size of a single event record, in bytes.
pub const EVENT_DATA_MAX: usize = 34;

/// Numeric payload tag: signed 32-bit integer follows.
pub const EVENT_NUMTYPE_INT: u8 = 1;
/// Numeric payload tag: unsigned 32-bit integer follows.
pub const EVENT_NUMTYPE_UINT: u8 = 2;
/// Numeric payload tag: 32-bit float follows.
pub const EVENT_NUMTYPE_FLOAT: u8 = 3;

/// Decoded numeric event payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventNumber {
    Int(i32),
    Uint(u32),
    Float(f32),
}

/// One record from the event queue.
///
/// The payload never exceeds [`EVENT_DATA_MAX`] bytes; constructors truncate
/// rather than grow past the ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    event_type: GuiEventType,
    data: Vec<u8>,
}

impl EventRecord {
    /// Creates a record with no payload.
    pub fn empty(event_type: GuiEventType) -> Self {
        Self {
            event_type,
            data: Vec::new(),
        }
    }

    /// Creates a record with an arbitrary payload, truncated to the ceiling.
    pub fn with_payload(event_type: GuiEventType, payload: &[u8]) -> Self {
        let len = payload.len().min(EVENT_DATA_MAX);
        Self {
            event_type,
            data: payload[..len].to_vec(),
        }
    }

    /// Creates an `IrCode` record carrying a little-endian code.
    pub fn ir_code(code: u32) -> Self {
        Self::with_payload(GuiEventType::IrCode, &code.to_le_bytes())
    }

    /// Creates a record carrying a tagged signed integer.
    pub fn int(event_type: GuiEventType, value: i32) -> Self {
        let mut payload = vec![EVENT_NUMTYPE_INT];
        payload.extend_from_slice(&value.to_le_bytes());
        Self::with_payload(event_type, &payload)
    }

    /// Creates a record carrying a tagged unsigned integer.
    pub fn uint(event_type: GuiEventType, value: u32) -> Self {
        let mut payload = vec![EVENT_NUMTYPE_UINT];
        payload.extend_from_slice(&value.to_le_bytes());
        Self::with_payload(event_type, &payload)
    }

    /// Creates a record carrying a tagged float.
    pub fn float(event_type: GuiEventType, value: f32) -> Self {
        let mut payload = vec![EVENT_NUMTYPE_FLOAT];
        payload.extend_from_slice(&value.to_le_bytes());
        Self::with_payload(event_type, &payload)
    }

    /// Creates the in-band queue overflow marker.
    pub fn overflow() -> Self {
        Self::empty(GuiEventType::EventFifoOverflow)
    }

    pub fn event_type(&self) -> GuiEventType {
        self.event_type
    }

    pub fn payload(&self) -> &[u8] {
        &self.data
    }

    /// Copies the payload into `out` and returns the number of bytes written.
    ///
    /// Writes at most `out.len()` bytes and never more than
    /// [`EVENT_DATA_MAX`], regardless of event type.
    pub fn copy_payload_to(&self, out: &mut [u8]) -> usize {
        let len = self.data.len().min(out.len());
        out[..len].copy_from_slice(&self.data[..len]);
        len
    }

    /// Decodes an `IrCode` payload.
    pub fn as_ir_code(&self) -> Option<u32> {
        if self.event_type != GuiEventType::IrCode || self.data.len() < 4 {
            return None;
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[..4]);
        Some(u32::from_le_bytes(bytes))
    }

    /// Decodes a tagged numeric payload.
    pub fn as_number(&self) -> Option<EventNumber> {
        if self.data.len() < 5 {
            return None;
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[1..5]);
        match self.data[0] {
            EVENT_NUMTYPE_INT => Some(EventNumber::Int(i32::from_le_bytes(bytes))),
            EVENT_NUMTYPE_UINT => Some(EventNumber::Uint(u32::from_le_bytes(bytes))),
            EVENT_NUMTYPE_FLOAT => Some(EventNumber::Float(f32::from_le_bytes(bytes))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = EventRecord::empty(GuiEventType::Started);
        assert_eq!(record.event_type(), GuiEventType::Started);
        assert!(record.payload().is_empty());
    }

    #[test]
    fn test_payload_is_truncated_to_ceiling() {
        let oversized = vec![0xAA; EVENT_DATA_MAX + 10];
        let record = EventRecord::with_payload(GuiEventType::GuiAudioData, &oversized);
        assert_eq!(record.payload().len(), EVENT_DATA_MAX);
    }

    #[test]
    fn test_copy_payload_respects_destination_length() {
        let record = EventRecord::with_payload(GuiEventType::GuiFftData, &[1, 2, 3, 4, 5]);
        let mut small = [0u8; 3];
        let written = record.copy_payload_to(&mut small);
        assert_eq!(written, 3);
        assert_eq!(small, [1, 2, 3]);

        let mut large = [0u8; EVENT_DATA_MAX];
        let written = record.copy_payload_to(&mut large);
        assert_eq!(written, 5);
    }

    #[test]
    fn test_ir_code_round_trip() {
        let record = EventRecord::ir_code(0xDEAD_BEEF);
        assert_eq!(record.event_type(), GuiEventType::IrCode);
        assert_eq!(record.as_ir_code(), Some(0xDEAD_BEEF));
    }

    #[test]
    fn test_ir_code_rejects_other_types() {
        let record = EventRecord::with_payload(GuiEventType::GuiButton, &[1, 2, 3, 4]);
        assert_eq!(record.as_ir_code(), None);
    }

    #[test]
    fn test_tagged_int_round_trip() {
        let record = EventRecord::int(GuiEventType::GuiNumEdit, -42);
        assert_eq!(record.payload()[0], EVENT_NUMTYPE_INT);
        assert_eq!(record.as_number(), Some(EventNumber::Int(-42)));
    }

    #[test]
    fn test_tagged_uint_round_trip() {
        let record = EventRecord::uint(GuiEventType::GuiNumEdit, u32::MAX);
        assert_eq!(record.as_number(), Some(EventNumber::Uint(u32::MAX)));
    }

    #[test]
    fn test_tagged_float_round_trip() {
        let record = EventRecord::float(GuiEventType::GuiNumEdit, 3.5);
        assert_eq!(record.as_number(), Some(EventNumber::Float(3.5)));
    }

    #[test]
    fn test_number_rejects_unknown_tag() {
        let record = EventRecord::with_payload(GuiEventType::GuiNumEdit, &[9, 0, 0, 0, 0]);
        assert_eq!(record.as_number(), None);
    }

    #[test]
    fn test_overflow_marker() {
        let record = EventRecord::overflow();
        assert_eq!(record.event_type(), GuiEventType::EventFifoOverflow);
        assert!(record.payload().is_empty());
    }
}
