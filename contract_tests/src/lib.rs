//! # Surface Contract Tests
//!
//! This crate provides "golden" tests for the host call surface to ensure
//! it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the surface contract is written as code
//! - **Testability first**: contract tests fail when the surface changes
//! - **Both sides at once**: flows run a real client against the real
//!   simulated device over the loopback transport, so every assertion
//!   covers encode, dispatch, behavior, and decode together
//!
//! ## Structure
//!
//! - [`surface`]: the declaration surface itself (symbols, signatures,
//!   constants, enum discriminants)
//! - [`flows`]: end-to-end behavior per subsystem
//! - [`gating`]: policy denial seen from the guest side

pub mod flows;
pub mod gating;
pub mod surface;

/// Common helpers for surface validation
pub mod test_helpers {
    use host_api::{HostClient, LoopbackTransport};
    use sim_device::SimulatedDevice;

    /// A client wired straight into a fresh simulated device.
    pub fn loopback_client() -> HostClient<LoopbackTransport<SimulatedDevice>> {
        HostClient::new(LoopbackTransport::new(SimulatedDevice::new()))
    }

    /// A client around a preconfigured device.
    pub fn client_for(device: SimulatedDevice) -> HostClient<LoopbackTransport<SimulatedDevice>> {
        HostClient::new(LoopbackTransport::new(device))
    }
}
