//! # Host API
//!
//! This crate defines the call surface between sandboxed guest scripts and
//! the device runtime: one stable, flat namespace of host capabilities,
//! grouped by subsystem.
//!
//! ## Philosophy
//!
//! The surface is a contract, not a framework:
//! - Every operation is a leaf call into the host; no state machine lives
//!   at this layer.
//! - Arguments are primitive numbers and borrowed buffers; the caller
//!   supplies storage and the callee writes within the given length only.
//! - Errors are flat: 1 success / 0 failure, or a count. No structured
//!   error taxonomy crosses the boundary. The error types in this crate
//!   (`CodecError`, `TransportError`) describe binding failures and stay on
//!   this side of the surface.
//!
//! ## Architecture
//!
//! - [`table`]: the static import table, one (symbol, signature, subsystem)
//!   entry per capability. This is the declaration surface itself.
//! - [`calls`]: typed [`HostCall`] / [`HostReply`] forms of every operation.
//! - [`api`]: the [`HostApi`] trait the host runtime implements. Multiple
//!   implementations are possible: a simulated device for tests, a real
//!   firmware backend, a remote device.
//! - [`wire`] + [`codec`]: the envelope format and request/reply codec.
//! - [`client`] / [`server`]: guest-side binding and host-side dispatcher,
//!   connected by a [`CallTransport`].

pub mod api;
pub mod calls;
pub mod client;
pub mod codec;
pub mod server;
pub mod table;
pub mod transport;
pub mod wire;

pub use api::HostApi;
pub use calls::{HostCall, HostReply, Subsystem};
pub use client::HostClient;
pub use codec::{CodecError, HostCallCodec, REPLY_SYMBOL};
pub use server::HostCallServer;
pub use table::{
    descriptor_for, AbiType, ImportDescriptor, IMPORT_MODULE, IMPORT_TABLE,
};
pub use transport::{CallTransport, LoopbackTransport, TransportError};
pub use wire::{CallEnvelope, CallId, CallPayload, SchemaVersion, CALL_SCHEMA_VERSION};
