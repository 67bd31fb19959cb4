//! End-to-end subsystem flows.
//!
//! Every test drives a [`host_api::HostClient`] over the loopback
//! transport into a [`sim_device::SimulatedDevice`], so the full path is
//! exercised: typed call, envelope, dispatch, device behavior, reply.

#[cfg(test)]
mod tests {
    use crate::test_helpers::{client_for, loopback_client};
    use host_api::{HostApi, HostCall, HostCallServer, HostReply};
    use host_types::{
        EventNumber, EventRecord, GuiEventType, LedMode, PrintColor, PrintDataType,
        EVENT_DATA_MAX,
    };
    use script_sdk::{poll_event, wait_for_event, HostApiExt, ScriptFile};
    use sim_device::peripherals::RtcTime;
    use sim_device::{SimulatedDevice, EVENT_QUEUE_CAPACITY};

    #[test]
    fn test_timing_flow() {
        let mut client = loopback_client();
        assert_eq!(client.millis(), 0);
        client.waitms(120);
        assert_eq!(client.millis(), 120);
        assert!(client.rand() >= 0);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_gpio_flow() {
        let mut client = loopback_client();
        client.set_io(3, 1);
        client.set_io(7, 1);
        assert_eq!(client.get_io(3), 1);
        assert_eq!(client.get_all_io(), (1 << 3) | (1 << 7));

        client.set_io(3, 0);
        assert_eq!(client.get_all_io(), 1 << 7);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_pwm_flow() {
        let mut client = loopback_client();
        assert_eq!(client.pwm_set_freq_duty(5, 1000.0, 50.0), 1);
        assert_eq!(client.pwm_set_freq_duty(5, 1000.0, 150.0), 0);
        assert_eq!(client.pwm_stop(5), 1);
    }

    #[test]
    fn test_i2c_flow() {
        let mut device = SimulatedDevice::new();
        device.i2c.attach_device(0x68);
        let mut client = client_for(device);

        assert_eq!(client.i2c_write(0x68, 0x0F, &[0xA5]), 1);
        let mut reg = [0u8; 1];
        assert_eq!(client.i2c_read(0x68, 0x0F, &mut reg), 1);
        assert_eq!(reg, [0xA5]);

        // Unattached address fails flat.
        assert_eq!(client.i2c_read(0x42, 0, &mut reg), 0);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_spi_flow() {
        let mut device = SimulatedDevice::new();
        device.spi.queue_response(&[0x10, 0x20]);
        let mut client = client_for(device);

        let mut rx = [0u8; 2];
        assert_eq!(client.spi_read_write(&[0xAA, 0xBB], &mut rx), 1);
        assert_eq!(rx, [0x10, 0x20]);
        assert_eq!(client.transport().host().spi.sent(), &[vec![0xAA, 0xBB]]);
    }

    #[test]
    fn test_uart_flow() {
        let mut device = SimulatedDevice::new();
        device.uart.feed_rx(b"ok\r\n");
        let mut client = client_for(device);

        assert_eq!(client.uart_rx_count(), 4);
        let mut buf = [0u8; 8];
        assert_eq!(client.uart_read(&mut buf), 4);
        assert_eq!(&buf[..4], b"ok\r\n");
        assert_eq!(client.uart_rx_count(), 0);

        assert_eq!(client.uart_write(b"AT\r\n"), 4);
        assert_eq!(client.transport().host().uart.transmitted(), b"AT\r\n");
    }

    #[test]
    fn test_file_flow_through_sdk() {
        let mut client = loopback_client();
        {
            let mut file = ScriptFile::create(&mut client, "/log.txt").unwrap();
            file.write_all(b"reading one\nreading two\n").unwrap();
            file.close().unwrap();
        }
        {
            let mut file = ScriptFile::open(&mut client, "/log.txt").unwrap();
            assert_eq!(file.size(), 24);
            assert_eq!(file.read_line().as_deref(), Some("reading one"));
            assert_eq!(file.read_line().as_deref(), Some("reading two"));
            assert_eq!(file.read_line(), None);
        }
        assert_eq!(client.file_exists("/log.txt"), 1);
        assert_eq!(client.remove_file_or_directory("/log.txt"), 1);
        assert_eq!(client.file_exists("/log.txt"), 0);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_directory_flow() {
        let mut client = loopback_client();
        assert_eq!(client.make_directory("/captures"), 1);
        assert_eq!(client.change_directory("/captures"), 1);

        let handle = client.open_file("door.sub", 1);
        assert!(handle > 0);
        client.write_file(handle, b"raw");
        client.close_file(handle);

        let mut name = [0u8; 32];
        let (found, n) = client.get_directory_item_by_index("/captures", 1, 0, &mut name);
        assert_eq!((found, &name[..n as usize]), (1, &b"door.sub"[..]));

        let (free, total) = client.get_volume_info();
        assert!(total > 0 && free < total);

        assert_eq!(
            client.rename_file_or_directory("/captures/door.sub", "/captures/front.sub"),
            1
        );
        assert_eq!(client.file_exists("/captures/front.sub"), 1);
    }

    #[test]
    fn test_radio_receive_flow() {
        let mut client = loopback_client();
        assert_eq!(client.radio_load_config(1, &[0x01, 0x02]), 1);
        assert_eq!(client.radio_set_rx(1), 1);

        client
            .transport_mut()
            .host_mut()
            .radios
            .deliver(1, &[9, 9, 9], -72, 55);
        assert_eq!(client.radio_rx_count(1), 3);

        let mut frame = [0u8; 8];
        assert_eq!(client.radio_read(1, &mut frame), 3);
        assert_eq!(client.radio_rssi(1), -72);
        assert_eq!(client.radio_lqi(1), 55);
        assert_eq!(client.radio_set_idle(1), 1);
    }

    #[test]
    fn test_radio_sub_file_flow_is_asynchronous() {
        let mut client = loopback_client();
        {
            let mut file = ScriptFile::create(&mut client, "/door.sub").unwrap();
            file.write_all(b"capture data").unwrap();
        }
        assert_eq!(client.radio_tx_sub_file(2, "/door.sub"), 1);
        assert_eq!(client.radio_sub_file_is_transmitting(), 1);

        // A second transmission is refused while the first is on the air.
        assert_eq!(client.radio_tx_sub_file(1, "/door.sub"), 0);

        client.waitms(sim_device::radio::SUB_FILE_TX_MS as i32);
        assert_eq!(client.radio_sub_file_is_transmitting(), 0);
    }

    #[test]
    fn test_radio_sub_file_stop() {
        let mut client = loopback_client();
        {
            let mut file = ScriptFile::create(&mut client, "/gate.sub").unwrap();
            file.write_all(b"x").unwrap();
        }
        client.radio_tx_sub_file(1, "/gate.sub");
        client.radio_sub_file_stop();
        assert_eq!(client.radio_sub_file_is_transmitting(), 0);
    }

    #[test]
    fn test_event_flow() {
        let mut device = SimulatedDevice::new();
        device.press_button(GuiEventType::GreenButton);
        let mut client = client_for(device);

        assert_eq!(client.has_event(), 1);
        let mut buf = [0u8; EVENT_DATA_MAX];
        assert_eq!(
            client.get_event_data(&mut buf),
            GuiEventType::GreenButton.as_raw()
        );
        assert_eq!(client.has_event(), 0);
        assert_eq!(client.get_event_data(&mut buf), -1);
        assert_eq!(client.faults(), 0);
    }

    #[test]
    fn test_event_overflow_is_reported_in_band() {
        let mut device = SimulatedDevice::new();
        for _ in 0..EVENT_QUEUE_CAPACITY + 1 {
            device.press_button(GuiEventType::GrayButton);
        }
        let mut client = client_for(device);

        let mut last = -1;
        let mut buf = [0u8; EVENT_DATA_MAX];
        loop {
            let code = client.get_event_data(&mut buf);
            if code < 0 {
                break;
            }
            last = code;
        }
        assert_eq!(last, GuiEventType::EventFifoOverflow.as_raw());
    }

    #[test]
    fn test_ir_loopback_through_surface() {
        let mut client = client_for(SimulatedDevice::new().with_ir_loopback());
        client.send_ir_data(0x00FF_629D);
        let record = poll_event(&mut client).unwrap();
        assert_eq!(record.as_ir_code(), Some(0x00FF_629D));
    }

    #[test]
    fn test_panel_flow() {
        let mut client = loopback_client();
        client.add_panel(0, 0, 1, 0, 0, 0, 0, 0, 0);
        client.add_panel(1, 0, 1, 0, 0, 16, 16, 16, 1);
        client.show_panel(0);
        client.show_panel(1);

        let show0 = wait_for_event(&mut client, GuiEventType::PanelShow, 0).unwrap();
        assert_eq!(show0.as_number(), Some(EventNumber::Int(0)));
        let hide0 = wait_for_event(&mut client, GuiEventType::PanelHide, 0).unwrap();
        assert_eq!(hide0.as_number(), Some(EventNumber::Int(0)));
        let show1 = wait_for_event(&mut client, GuiEventType::PanelShow, 0).unwrap();
        assert_eq!(show1.as_number(), Some(EventNumber::Int(1)));
    }

    #[test]
    fn test_control_value_clamp_flow() {
        let mut client = loopback_client();
        client.add_panel(0, 1, 0, 0, 0, 0, 0, 0, 0);
        client.add_control_bargraph(0, 4, 1, 10, 10, 100, 20, 0, 100, 0, 200, 0);
        client.set_control_value_min_max(0, 4, 1, 0, 100);
        client.set_control_value(0, 4, 5000);

        let host = client.transport().host();
        assert_eq!(host.panels.control(0, 4).unwrap().value, 100);
    }

    #[test]
    fn test_log_and_plot_flow() {
        let mut client = loopback_client();
        client.set_log_data_text(0, "boot");
        client.set_log_data_text(0, "ready");
        client.set_list_item_text(0, 1, "armed");
        client.add_control_plot_data(1, 255, 0, 0);
        client.set_plot_data(1, 0, 42);

        let host = client.transport().host();
        assert_eq!(host.panels.log_items(0), &["boot", "armed"]);
        assert_eq!(host.panels.plot_series(1).unwrap().samples, vec![42]);
    }

    #[test]
    fn test_dialog_flow_with_staged_answer() {
        let mut device = SimulatedDevice::new();
        device
            .dialogs
            .stage_answer(EventRecord::int(GuiEventType::GuiNumEdit, 868));
        let mut client = client_for(device);

        client.show_dialog_num_edit("frequency (MHz)", 0, 0, 0, 433, 0, 0);
        let answer = wait_for_event(&mut client, GuiEventType::GuiNumEdit, 0).unwrap();
        assert_eq!(answer.as_number(), Some(EventNumber::Int(868)));
    }

    #[test]
    fn test_rtc_flow() {
        let mut device = SimulatedDevice::new();
        device.set_rtc_time(RtcTime {
            year: 2026,
            month: 8,
            day: 24,
            hour: 9,
            minute: 30,
            second: 0,
        });
        let mut client = client_for(device);

        client.get_rtc();
        let record = wait_for_event(&mut client, GuiEventType::GuiRtcResponse, 0).unwrap();
        let time = RtcTime::from_payload(record.payload()).unwrap();
        assert_eq!((time.year, time.month, time.day), (2026, 8, 24));
    }

    #[test]
    fn test_led_and_sound_flow() {
        let mut client = loopback_client();
        client.set_board_led(0, 255, 0, 0, 500, LedMode::Flash);
        client.set_led_show_mode(2);
        client.play_sound_from_frequency(440.0, 0.5, 0.8, b's');

        let host = client.transport().host();
        assert_eq!(host.leds.get(0).unwrap().mode, LedMode::Flash);
        assert_eq!(host.leds.show_mode(), 2);
        assert_eq!(host.sound.played().len(), 1);
    }

    #[test]
    fn test_print_flow() {
        let mut client = loopback_client();
        client.print_int("%08X\n", PrintColor::Cyan, PrintDataType::UInt32, 0x1234);
        client.print_decimal(2.5, PrintColor::Normal);

        let host = client.transport().host();
        assert_eq!(host.console.lines().len(), 2);
        assert_eq!(host.console.lines()[0].format_spec, "%08X\n");
    }

    #[test]
    fn test_sensor_settings_flow() {
        let mut client = loopback_client();
        client.set_audio_settings(1, 0, 1, 3, 0, 0);
        client.set_sensor_settings(1, 1, 100, 1, 0, 1, 1, 1, 2, 1, 3);
        client.set_app_log_settings(1, 0, 1, 0, 5);

        let host = client.transport().host();
        assert!(host.sensors.audio.stream_mic);
        assert_eq!(host.sensors.sensors.rate_milliseconds, 100);
        assert_eq!(host.sensors.app_log.log_index, 5);
    }

    #[test]
    fn test_fpga_and_zoom_flow() {
        let mut client = loopback_client();
        assert_eq!(client.load_fpga_from_file("/missing.bit"), 0);
        {
            let mut file = ScriptFile::create(&mut client, "/blink.bit").unwrap();
            file.write_all(&[0u8; 64]).unwrap();
        }
        assert_eq!(client.load_fpga_from_file("/blink.bit"), 1);
        assert_eq!(client.run_zoom_io_script("P1 H 10ms L"), 1);
        assert_eq!(client.run_zoom_io_script(""), 0);
    }

    #[test]
    fn test_absurd_requested_lengths_get_bounded_replies() {
        let mut device = SimulatedDevice::new();
        device.uart.feed_rx(b"ping");
        let mut server = HostCallServer::new(device);

        // A request for 4 GiB of scratch must not be honored literally;
        // the reply still carries exactly what the device produced.
        let reply = server.dispatch(HostCall::UartRead { length: u32::MAX });
        assert_eq!(
            reply,
            HostReply::Bytes {
                status: 4,
                data: b"ping".to_vec(),
            }
        );

        let reply = server.dispatch(HostCall::ReadFile {
            handle: 99,
            length: u32::MAX,
        });
        assert_eq!(
            reply,
            HostReply::Bytes {
                status: 0,
                data: Vec::new(),
            }
        );
    }

    #[test]
    fn test_no_binding_faults_across_full_session() {
        let mut client = loopback_client();
        client.waitms(10);
        client.set_io(1, 1);
        client.uart_write(b"x");
        client.set_log_data_text(0, "line");
        client.get_rtc();
        client.exit_to_main_app_menu();
        assert_eq!(client.faults(), 0);
        assert!(client.transport().host().panels.has_exited());
    }
}
