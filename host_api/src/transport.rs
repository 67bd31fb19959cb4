//! Transport seam between the guest binding and the host dispatcher.
//!
//! [`CallTransport`] is synchronous request/reply: every request envelope
//! produces exactly one reply envelope. [`LoopbackTransport`] wires a
//! [`HostCallServer`] directly into the same process, which is how the
//! simulated device and the tests run.

use crate::api::HostApi;
use crate::codec::CodecError;
use crate::server::HostCallServer;
use crate::wire::CallEnvelope;
use thiserror::Error;

/// Errors surfaced by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport is closed")]
    Closed,

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] CodecError),
}

/// Carries one request envelope to the host and returns its reply.
pub trait CallTransport {
    fn call(&mut self, envelope: CallEnvelope) -> Result<CallEnvelope, TransportError>;
}

/// In-process transport around a [`HostCallServer`].
pub struct LoopbackTransport<H: HostApi> {
    server: HostCallServer<H>,
}

impl<H: HostApi> LoopbackTransport<H> {
    /// Creates a loopback transport around a host implementation
    pub fn new(host: H) -> Self {
        Self {
            server: HostCallServer::new(host),
        }
    }

    /// Returns a reference to the host behind the server
    pub fn host(&self) -> &H {
        self.server.host()
    }

    /// Returns a mutable reference to the host behind the server
    pub fn host_mut(&mut self) -> &mut H {
        self.server.host_mut()
    }
}

impl<H: HostApi> CallTransport for LoopbackTransport<H> {
    fn call(&mut self, envelope: CallEnvelope) -> Result<CallEnvelope, TransportError> {
        Ok(self.server.handle(&envelope)?)
    }
}
