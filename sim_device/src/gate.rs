//! Policy gate in front of the dispatcher.
//!
//! The gate screens every decoded call against a policy before it reaches
//! the device. A denial produces the call's ordinary flat failure value;
//! the guest cannot tell refusal from hardware failure. The audit log is
//! the only place denials are visible, and it stays on the host side.

use host_api::{
    CallEnvelope, CallTransport, CodecError, HostApi, HostCall, HostCallCodec, HostCallServer,
    HostReply, Subsystem, TransportError,
};

/// Outcome of screening one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Deny { reason: String },
}

/// Decides whether a call may reach the device.
pub trait CallPolicy {
    fn check(&self, call: &HostCall) -> PolicyDecision;
}

/// Policy that admits everything.
#[derive(Debug, Default)]
pub struct AllowAllPolicy;

impl CallPolicy for AllowAllPolicy {
    fn check(&self, _call: &HostCall) -> PolicyDecision {
        PolicyDecision::Allow
    }
}

/// Policy that admits only calls belonging to the listed subsystems.
#[derive(Debug)]
pub struct SubsystemScopePolicy {
    allowed: Vec<Subsystem>,
}

impl SubsystemScopePolicy {
    pub fn new(allowed: Vec<Subsystem>) -> Self {
        Self { allowed }
    }
}

impl CallPolicy for SubsystemScopePolicy {
    fn check(&self, call: &HostCall) -> PolicyDecision {
        let subsystem = call.subsystem();
        if self.allowed.contains(&subsystem) {
            PolicyDecision::Allow
        } else {
            PolicyDecision::Deny {
                reason: format!("subsystem {subsystem:?} not in scope"),
            }
        }
    }
}

/// What happened to one screened call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Completed,
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub symbol: &'static str,
    pub subsystem: Subsystem,
    pub outcome: AuditOutcome,
}

/// Host-side record of every call that hit the gate.
#[derive(Debug, Default)]
pub struct CallAuditLog {
    entries: Vec<AuditEntry>,
}

impl CallAuditLog {
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn rejections(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, AuditOutcome::Rejected { .. }))
    }

    fn record(&mut self, call: &HostCall, outcome: AuditOutcome) {
        self.entries.push(AuditEntry {
            symbol: call.symbol(),
            subsystem: call.subsystem(),
            outcome,
        });
    }
}

/// Dispatcher wrapped in a policy gate.
pub struct GatedServer<H: HostApi> {
    server: HostCallServer<H>,
    policy: Box<dyn CallPolicy>,
    audit: CallAuditLog,
}

impl<H: HostApi> GatedServer<H> {
    pub fn new(host: H, policy: Box<dyn CallPolicy>) -> Self {
        Self {
            server: HostCallServer::new(host),
            policy,
            audit: CallAuditLog::default(),
        }
    }

    pub fn host(&self) -> &H {
        self.server.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.server.host_mut()
    }

    pub fn audit(&self) -> &CallAuditLog {
        &self.audit
    }

    /// Screens and handles one request envelope.
    pub fn handle(&mut self, envelope: &CallEnvelope) -> Result<CallEnvelope, CodecError> {
        let call = HostCallCodec::decode_request(envelope)?;
        let reply = self.screen_and_dispatch(call);
        HostCallCodec::encode_reply(&reply, envelope.id)
    }

    /// Screens one call; denials return the call's flat failure value.
    pub fn screen_and_dispatch(&mut self, call: HostCall) -> HostReply {
        match self.policy.check(&call) {
            PolicyDecision::Allow => {
                self.audit.record(&call, AuditOutcome::Completed);
                self.server.dispatch(call)
            }
            PolicyDecision::Deny { reason } => {
                let denied = call.denied_reply();
                self.audit.record(&call, AuditOutcome::Rejected { reason });
                denied
            }
        }
    }
}

/// In-process transport around a [`GatedServer`].
pub struct GatedTransport<H: HostApi> {
    server: GatedServer<H>,
}

impl<H: HostApi> GatedTransport<H> {
    pub fn new(host: H, policy: Box<dyn CallPolicy>) -> Self {
        Self {
            server: GatedServer::new(host, policy),
        }
    }

    pub fn host(&self) -> &H {
        self.server.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.server.host_mut()
    }

    pub fn audit(&self) -> &CallAuditLog {
        self.server.audit()
    }
}

impl<H: HostApi> CallTransport for GatedTransport<H> {
    fn call(&mut self, envelope: CallEnvelope) -> Result<CallEnvelope, TransportError> {
        Ok(self.server.handle(&envelope)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimulatedDevice;

    #[test]
    fn test_allow_all_admits_everything() {
        let policy = AllowAllPolicy;
        assert_eq!(policy.check(&HostCall::Rand), PolicyDecision::Allow);
        assert_eq!(
            policy.check(&HostCall::ExitToMainAppMenu),
            PolicyDecision::Allow
        );
    }

    #[test]
    fn test_scope_policy_denies_out_of_scope_subsystems() {
        let policy = SubsystemScopePolicy::new(vec![Subsystem::General, Subsystem::Gpio]);
        assert_eq!(policy.check(&HostCall::GetAllIo), PolicyDecision::Allow);
        assert!(matches!(
            policy.check(&HostCall::SendIrData { data: 1 }),
            PolicyDecision::Deny { .. }
        ));
    }

    #[test]
    fn test_denied_call_fails_flat_and_is_audited() {
        let policy = SubsystemScopePolicy::new(vec![Subsystem::General]);
        let mut server = GatedServer::new(SimulatedDevice::new(), Box::new(policy));

        let reply = server.screen_and_dispatch(HostCall::OpenFile {
            file_name: "secret.txt".to_string(),
            mode: 1,
        });
        assert_eq!(reply, HostReply::Int(0));

        let rejected: Vec<_> = server.audit().rejections().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].symbol, "OpenFile");
        assert_eq!(rejected[0].subsystem, Subsystem::FileIo);
    }

    #[test]
    fn test_allowed_call_is_dispatched_and_audited() {
        let mut server = GatedServer::new(SimulatedDevice::new(), Box::new(AllowAllPolicy));
        let reply = server.screen_and_dispatch(HostCall::Millis);
        assert_eq!(reply, HostReply::Uint(0));
        assert_eq!(server.audit().entries().len(), 1);
        assert_eq!(
            server.audit().entries()[0].outcome,
            AuditOutcome::Completed
        );
    }
}
