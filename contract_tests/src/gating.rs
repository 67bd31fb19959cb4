//! Policy denial as seen from the guest side.
//!
//! The gate promises that a denied call is indistinguishable from a
//! hardware failure: the guest gets the call's ordinary flat failure
//! value, the client records no binding fault, and the only trace lives
//! in the host-side audit log. These tests run a real client over a
//! [`sim_device::GatedTransport`] to hold that promise.

#[cfg(test)]
mod tests {
    use host_api::{HostApi, HostClient, Subsystem};
    use sim_device::{
        AuditOutcome, GatedTransport, SimulatedDevice, SubsystemScopePolicy,
    };

    fn scoped_client(
        allowed: Vec<Subsystem>,
    ) -> HostClient<GatedTransport<SimulatedDevice>> {
        HostClient::new(GatedTransport::new(
            SimulatedDevice::new(),
            Box::new(SubsystemScopePolicy::new(allowed)),
        ))
    }

    #[test]
    fn test_denied_open_looks_like_missing_file() {
        let mut client = scoped_client(vec![Subsystem::General, Subsystem::Gpio]);

        assert_eq!(client.open_file("/secrets.txt", 1), 0);
        // The denial came back as a well-formed reply, not a binding fault.
        assert_eq!(client.faults(), 0);

        let rejected: Vec<_> = client.transport().audit().rejections().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].symbol, "OpenFile");
        assert_eq!(rejected[0].subsystem, Subsystem::FileIo);
    }

    #[test]
    fn test_in_scope_calls_still_work() {
        let mut client = scoped_client(vec![Subsystem::General, Subsystem::Gpio]);

        client.set_io(2, 1);
        assert_eq!(client.get_io(2), 1);
        client.waitms(50);
        assert_eq!(client.millis(), 50);

        assert_eq!(client.transport().audit().rejections().count(), 0);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_denied_out_buffer_call_leaves_buffer_untouched() {
        let mut client = scoped_client(vec![Subsystem::General]);

        let mut data = [0xEEu8; 8];
        assert_eq!(client.uart_read(&mut data), 0);
        assert_eq!(data, [0xEE; 8]);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_denied_event_read_reports_empty_queue() {
        let mut device = SimulatedDevice::new();
        device.press_button(host_types::GuiEventType::BlueButton);
        let mut client = HostClient::new(GatedTransport::new(
            device,
            Box::new(SubsystemScopePolicy::new(vec![Subsystem::Gpio])),
        ));

        let mut buf = [0u8; host_types::EVENT_DATA_MAX];
        assert_eq!(client.get_event_data(&mut buf), -1);
        // The event is still pending on the device side.
        assert_eq!(client.transport().host().events.len(), 1);
    }

    #[test]
    fn test_audit_keeps_call_order() {
        let mut client = scoped_client(vec![Subsystem::General]);

        client.millis();
        client.set_io(1, 1);
        client.rand();

        let entries = client.transport().audit().entries();
        let outcomes: Vec<(&str, bool)> = entries
            .iter()
            .map(|e| {
                (
                    e.symbol,
                    matches!(e.outcome, AuditOutcome::Completed),
                )
            })
            .collect();
        assert_eq!(
            outcomes,
            [("millis", true), ("setIO", false), ("wilirand", true)]
        );
    }
}
