//! # Simulated Device
//!
//! This crate provides a simulated implementation of the host call surface.
//!
//! ## Purpose
//!
//! The simulated device allows testing scripts without hardware:
//! - Runs under `cargo test`
//! - Deterministic (controlled time, seeded randomness, no real I/O)
//! - Inspectable (all peripheral state is accessible)
//!
//! ## Philosophy
//!
//! **Testability is a first-class design constraint.**
//!
//! This is not a mock. Every operation behaves the way the contract says:
//! flat error values, destructive event reads, handle-based file IO,
//! in-band queue overflow. Tests drive the outside world (feed the UART,
//! deliver radio frames, press buttons) and scripts observe it through
//! the same calls they would make on hardware.

pub mod bus;
pub mod clock;
pub mod events;
pub mod gate;
pub mod gpio;
pub mod panels;
pub mod peripherals;
pub mod radio;
pub mod storage;

pub use events::{EventQueue, EVENT_QUEUE_CAPACITY};
pub use gate::{
    AllowAllPolicy, AuditEntry, AuditOutcome, CallAuditLog, CallPolicy, GatedServer,
    GatedTransport, PolicyDecision, SubsystemScopePolicy,
};

use bus::{I2cBus, SpiPort, Uart};
use clock::DeviceClock;
use gpio::GpioBank;
use host_api::HostApi;
use host_types::{
    EventRecord, GuiEventType, LedMode, PanelLedColor, PanelLedSize, PrintColor, PrintDataType,
};
use panels::{ControlKind, PanelRegistry, PlotXAxis, Rgb};
use peripherals::{
    BoardLeds, DebugConsole, DialogHost, Fpga, IrPort, LedCommand, PrintRecord, PrintValue, Rtc,
    RtcTime, SensorHub, SoundCommand, SoundPlayer, ZoomIo,
};
use radio::RadioBank;
use storage::Storage;

/// Full device state. Fields are public so tests can stage the outside
/// world and inspect what a script did.
#[derive(Debug, Default)]
pub struct SimulatedDevice {
    pub clock: DeviceClock,
    pub gpio: GpioBank,
    pub i2c: I2cBus,
    pub spi: SpiPort,
    pub uart: Uart,
    pub radios: RadioBank,
    pub storage: Storage,
    pub panels: PanelRegistry,
    pub leds: BoardLeds,
    pub ir: IrPort,
    pub sound: SoundPlayer,
    pub sensors: SensorHub,
    pub fpga: Fpga,
    pub zoom: ZoomIo,
    pub rtc: Rtc,
    pub dialogs: DialogHost,
    pub console: DebugConsole,
    pub events: EventQueue,
}

impl SimulatedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the random seed, builder style.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.clock = DeviceClock::with_seed(seed);
        self
    }

    /// Enables IR loopback, builder style.
    pub fn with_ir_loopback(mut self) -> Self {
        self.ir.set_loopback(true);
        self
    }

    /// Simulates a hardware button press.
    pub fn press_button(&mut self, button: GuiEventType) {
        self.events.push(EventRecord::empty(button));
    }

    /// Queues an arbitrary event record.
    pub fn push_event(&mut self, record: EventRecord) {
        self.events.push(record);
    }

    /// Simulates an IR code arriving from a remote.
    pub fn receive_ir(&mut self, code: u32) {
        self.ir.receive(code, &mut self.events);
    }

    /// Sets the wall-clock time reported by the RTC.
    pub fn set_rtc_time(&mut self, time: RtcTime) {
        self.rtc.set_time(time);
    }
}

impl HostApi for SimulatedDevice {
    fn waitms(&mut self, milliseconds: i32) {
        if milliseconds <= 0 {
            return;
        }
        self.clock.advance(milliseconds as u32);
        self.radios.advance(milliseconds as u32);
    }

    fn rand(&mut self) -> i32 {
        self.clock.rand()
    }

    fn millis(&mut self) -> u32 {
        self.clock.millis()
    }

    fn set_io(&mut self, io: i32, on: i32) {
        self.gpio.set(io, on != 0);
    }

    fn get_io(&mut self, io: i32) -> u32 {
        self.gpio.get(io)
    }

    fn get_all_io(&mut self) -> u32 {
        self.gpio.all()
    }

    fn i2c_read(&mut self, address: i32, reg: i32, data: &mut [u8]) -> i32 {
        self.i2c.read(address, reg, data)
    }

    fn i2c_write(&mut self, address: i32, reg: i32, data: &[u8]) -> i32 {
        self.i2c.write(address, reg, data)
    }

    fn spi_read_write(&mut self, data_in: &[u8], data_out: &mut [u8]) -> i32 {
        self.spi.transfer(data_in, data_out)
    }

    fn uart_rx_count(&mut self) -> i32 {
        self.uart.rx_count()
    }

    fn uart_read(&mut self, data: &mut [u8]) -> i32 {
        self.uart.read(data)
    }

    fn uart_write(&mut self, data: &[u8]) -> i32 {
        self.uart.write(data)
    }

    fn pwm_set_freq_duty(&mut self, io: i32, freq_hz: f32, duty: f32) -> i32 {
        self.gpio.pwm_start(io, freq_hz, duty)
    }

    fn pwm_stop(&mut self, io: i32) -> i32 {
        self.gpio.pwm_stop(io)
    }

    fn radio_write(&mut self, index: i32, data: &[u8]) -> i32 {
        self.radios.write(index, data)
    }

    fn radio_read(&mut self, index: i32, data: &mut [u8]) -> i32 {
        self.radios.read(index, data)
    }

    fn radio_rx_count(&mut self, index: i32) -> i32 {
        self.radios.rx_count(index)
    }

    fn radio_load_config(&mut self, index: i32, data: &[u8]) -> i32 {
        self.radios.load_config(index, data)
    }

    fn radio_tx_sub_file(&mut self, index: i32, sub_file: &str) -> i32 {
        // The capture file must exist on storage before it can go on air.
        if self.storage.exists(sub_file) == 0 {
            return 0;
        }
        self.radios.start_sub_file_tx(index, sub_file)
    }

    fn radio_set_tx(&mut self, index: i32) -> i32 {
        self.radios.set_tx(index)
    }

    fn radio_set_rx(&mut self, index: i32) -> i32 {
        self.radios.set_rx(index)
    }

    fn radio_set_idle(&mut self, index: i32) -> i32 {
        self.radios.set_idle(index)
    }

    fn radio_rssi(&mut self, index: i32) -> i32 {
        self.radios.rssi(index)
    }

    fn radio_lqi(&mut self, index: i32) -> i32 {
        self.radios.lqi(index)
    }

    fn radio_sub_file_is_transmitting(&mut self) -> i32 {
        self.radios.sub_file_is_transmitting()
    }

    fn radio_sub_file_stop(&mut self) {
        self.radios.stop_sub_file_tx();
    }

    fn send_ir_data(&mut self, data: u32) {
        self.ir.send(data, &mut self.events);
    }

    fn set_board_led(
        &mut self,
        led_index: i32,
        red: i32,
        green: i32,
        blue: i32,
        duration_ms: i32,
        mode: LedMode,
    ) {
        self.leds.set(
            led_index,
            LedCommand {
                red,
                green,
                blue,
                duration_ms,
                mode,
            },
        );
    }

    fn set_led_show_mode(&mut self, mode: i32) {
        self.leds.set_show_mode(mode);
    }

    fn play_sound_from_file(&mut self, file_name: &str) {
        self.sound.play(SoundCommand::File {
            file_name: file_name.to_string(),
        });
    }

    fn play_sound_from_name_or_id(&mut self, name: &str, id: i32) {
        self.sound.play(SoundCommand::NameOrId {
            name: name.to_string(),
            id,
        });
    }

    fn play_sound_from_number(
        &mut self,
        is_float: i32,
        int_value: i32,
        float_value: f32,
        float_digits: i32,
    ) {
        self.sound.play(SoundCommand::Number {
            is_float: is_float != 0,
            int_value,
            float_value,
            float_digits,
        });
    }

    fn play_sound_from_frequency(
        &mut self,
        frequency: f32,
        duration: f32,
        amplitude: f32,
        wavetype: u8,
    ) {
        self.sound.play(SoundCommand::Tone {
            frequency,
            duration,
            amplitude,
            wavetype,
        });
    }

    fn open_file(&mut self, file_name: &str, mode: i32) -> i32 {
        self.storage.open(file_name, mode)
    }

    fn close_file(&mut self, handle: i32) -> i32 {
        self.storage.close(handle)
    }

    fn write_file(&mut self, handle: i32, data: &[u8]) -> i32 {
        self.storage.write(handle, data)
    }

    fn pre_allocate_space_for_file(&mut self, handle: i32, size_in_bytes: i32) -> i32 {
        self.storage.pre_allocate(handle, size_in_bytes)
    }

    fn read_file(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        self.storage.read(handle, data)
    }

    fn read_file_line(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        self.storage.read_line(handle, data)
    }

    fn set_file_position(&mut self, handle: i32, position: i32) -> i32 {
        self.storage.set_position(handle, position)
    }

    fn get_file_position(&mut self, handle: i32) -> i32 {
        self.storage.position(handle)
    }

    fn get_file_size(&mut self, handle: i32) -> i32 {
        self.storage.size(handle)
    }

    fn rename_file_or_directory(&mut self, name: &str, new_name: &str) -> i32 {
        self.storage.rename(name, new_name)
    }

    fn file_exists(&mut self, file_name: &str) -> i32 {
        self.storage.exists(file_name)
    }

    fn make_directory(&mut self, file_name: &str) -> i32 {
        self.storage.make_directory(file_name)
    }

    fn change_directory(&mut self, file_name: &str) -> i32 {
        self.storage.change_directory(file_name)
    }

    fn get_directory_item_by_index(
        &mut self,
        directory: &str,
        include_extension: i32,
        index: i32,
        name_out: &mut [u8],
    ) -> (i32, i32) {
        self.storage
            .directory_item_by_index(directory, include_extension != 0, index, name_out)
    }

    fn get_volume_info(&mut self) -> (i32, i32) {
        self.storage.volume_info()
    }

    fn remove_file_or_directory(&mut self, file_name: &str) -> i32 {
        self.storage.remove(file_name)
    }

    fn get_event_data(&mut self, data: &mut [u8]) -> i32 {
        match self.events.pop() {
            Some(record) => {
                record.copy_payload_to(data);
                record.event_type().as_raw()
            }
            None => -1,
        }
    }

    fn has_event(&mut self) -> i32 {
        i32::from(!self.events.is_empty())
    }

    fn add_panel(
        &mut self,
        index: i32,
        visible: i32,
        in_rotation: i32,
        use_tile: i32,
        tile_id: i32,
        bg_red: i32,
        bg_green: i32,
        bg_blue: i32,
        show_menu: i32,
    ) {
        let _ = (use_tile, tile_id);
        self.panels.add_panel(
            index,
            visible != 0,
            in_rotation != 0,
            Rgb::new(bg_red, bg_green, bg_blue),
            show_menu != 0,
        );
    }

    fn add_panel_pick_list(
        &mut self,
        index: i32,
        caption: &str,
        tile_id: i32,
        icon_id: i32,
        back_red: u8,
        back_green: u8,
        back_blue: u32,
        fore_red: u8,
        fore_green: u8,
        fore_blue: u32,
        log_index: i32,
    ) {
        let _ = (
            tile_id, icon_id, back_red, back_green, back_blue, fore_red, fore_green, fore_blue,
        );
        self.panels.add_panel_pick_list(index, caption, log_index);
    }

    fn set_panel_menu_text(&mut self, panel: i32, button_gray_from_zero: i32, message: &str) {
        self.panels
            .set_panel_menu_text(panel, button_gray_from_zero, message);
    }

    fn add_control_led(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        color: PanelLedColor,
        size: PanelLedSize,
        initial_state: i32,
    ) {
        self.panels
            .add_control_led(panel, control, x, y, color, size, initial_state);
    }

    fn set_list_item_text(&mut self, log_index: i32, list_index: i32, text: &str) {
        self.panels.set_log_item(log_index, list_index, text);
    }

    fn clear_log_or_plot_data(&mut self, log_index_plus_one: i32, plot_index_plus_one: i32) {
        self.panels
            .clear_data(log_index_plus_one, plot_index_plus_one);
    }

    fn add_control_log_list(
        &mut self,
        panel: i32,
        control: i32,
        visible: i32,
        log: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        font_type: i32,
        font_size: i32,
        red: i32,
        green: i32,
        blue: i32,
        font_red: i32,
        font_green: i32,
        font_blue: i32,
        list_mode: i32,
    ) {
        let _ = (
            width, height, font_type, font_size, red, green, blue, font_red, font_green,
            font_blue, list_mode,
        );
        self.panels
            .add_control(panel, control, ControlKind::LogList { log }, x, y, visible != 0);
    }

    fn add_control_plot_x_axis(
        &mut self,
        panel: i32,
        control: i32,
        scroll_mode: i32,
        time_min: u64,
        time_max: u64,
    ) {
        self.panels.set_x_axis(
            panel,
            control,
            PlotXAxis {
                scroll_mode,
                time_min,
                time_max,
            },
        );
    }

    fn add_control_plot_data(&mut self, plot_data_index: i32, red: i32, green: i32, blue: i32) {
        self.panels
            .add_plot_series(plot_data_index, Rgb::new(red, green, blue));
    }

    fn add_control_plot(
        &mut self,
        panel: i32,
        control: i32,
        visible: i32,
        plot_data_index_bit_field: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        min: i32,
        max: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) {
        let _ = (width, height, red, green, blue);
        self.panels.add_control(
            panel,
            control,
            ControlKind::Plot {
                plot_data_index_bit_field,
                min,
                max,
            },
            x,
            y,
            visible != 0,
        );
    }

    fn add_control_number(
        &mut self,
        panel: i32,
        control: i32,
        visible: i32,
        x: i32,
        y: i32,
        width: i32,
        font_size: i32,
        font_type: i32,
        red: i32,
        green: i32,
        blue: i32,
        is_float: i32,
        float_digits: i32,
        is_hex_format: i32,
        is_unsigned: i32,
    ) {
        let _ = (width, font_size, font_type, red, green, blue);
        self.panels.add_control(
            panel,
            control,
            ControlKind::Number {
                is_float: is_float != 0,
                float_digits,
                is_hex_format: is_hex_format != 0,
                is_unsigned: is_unsigned != 0,
            },
            x,
            y,
            visible != 0,
        );
    }

    fn add_control_picture(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        picture_id: i32,
        visible: i32,
    ) {
        self.panels.add_control(
            panel,
            control,
            ControlKind::Picture { picture_id },
            x,
            y,
            visible != 0,
        );
    }

    fn add_control_text(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        font_type: i32,
        font_size: i32,
        red: i32,
        green: i32,
        blue: i32,
        text: &str,
    ) {
        let _ = (font_type, font_size, red, green, blue);
        self.panels.add_control(
            panel,
            control,
            ControlKind::Text {
                text: text.to_string(),
            },
            x,
            y,
            true,
        );
    }

    fn add_control_bargraph(
        &mut self,
        panel: i32,
        control: i32,
        visible: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        min: i32,
        max: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) {
        let _ = (width, height, red, green, blue);
        self.panels.add_control(
            panel,
            control,
            ControlKind::Bargraph { min, max },
            x,
            y,
            visible != 0,
        );
    }

    fn add_control_button(
        &mut self,
        panel: i32,
        control: i32,
        visible: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        red: i32,
        green: i32,
        blue: i32,
        fore_red: i32,
        fore_green: i32,
        fore_blue: i32,
        text: &str,
    ) {
        let _ = (width, height, red, green, blue, fore_red, fore_green, fore_blue);
        self.panels.add_control(
            panel,
            control,
            ControlKind::Button {
                text: text.to_string(),
            },
            x,
            y,
            visible != 0,
        );
    }

    fn set_control_value_min_max(
        &mut self,
        panel: i32,
        control: i32,
        enable: i32,
        min: i32,
        max: i32,
    ) {
        self.panels.set_clamp(panel, control, enable != 0, min, max);
    }

    fn set_control_value_min_max_f(
        &mut self,
        panel: i32,
        control: i32,
        enable: i32,
        min: f32,
        max: f32,
    ) {
        self.panels
            .set_clamp_float(panel, control, enable != 0, min, max);
    }

    fn set_log_data_text(&mut self, log_index: i32, text: &str) {
        self.panels.append_log_line(log_index, text);
    }

    fn set_plot_data(&mut self, plot_data: i32, settings: i32, new_value: i32) {
        let _ = settings;
        self.panels.push_plot_sample(plot_data, new_value);
    }

    fn set_control_value(&mut self, panel: i32, control: i32, new_value: i32) {
        self.panels.set_value(panel, control, new_value);
    }

    fn set_control_value_float(&mut self, panel: i32, control: i32, new_value: f32) {
        self.panels.set_value_float(panel, control, new_value);
    }

    fn exit_to_main_app_menu(&mut self) {
        self.panels.exit_to_main_menu(&mut self.events);
    }

    fn show_panel(&mut self, index: i32) {
        self.panels.show_panel(index, &mut self.events);
    }

    fn add_control_picture_from_file(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        file_name: &str,
        visible: i32,
    ) {
        self.panels.add_control(
            panel,
            control,
            ControlKind::PictureFile {
                file_name: file_name.to_string(),
            },
            x,
            y,
            visible != 0,
        );
    }

    fn print_int(
        &mut self,
        format_spec: &str,
        color: PrintColor,
        data_type: PrintDataType,
        value: i32,
    ) {
        self.console.print(PrintRecord {
            format_spec: format_spec.to_string(),
            color,
            value: PrintValue::Int { data_type, value },
        });
    }

    fn print_float(&mut self, format_spec: &str, color: PrintColor, value: f32) {
        self.console.print(PrintRecord {
            format_spec: format_spec.to_string(),
            color,
            value: PrintValue::Float(value),
        });
    }

    fn set_audio_settings(
        &mut self,
        stream_mic: i32,
        stream_fft: i32,
        enable_mic_plot: i32,
        mic_plot_index: i32,
        enable_fft_plot: i32,
        fft_plot_index: i32,
    ) {
        self.sensors.audio = peripherals::AudioSettings {
            stream_mic: stream_mic != 0,
            stream_fft: stream_fft != 0,
            enable_mic_plot: enable_mic_plot != 0,
            mic_plot_index,
            enable_fft_plot: enable_fft_plot != 0,
            fft_plot_index,
        };
    }

    fn set_sensor_settings(
        &mut self,
        stream_accel: i32,
        stream_temp: i32,
        rate_milliseconds: i32,
        enable_accel_x_plot: i32,
        accel_x_plot_index: i32,
        enable_accel_y_plot: i32,
        accel_y_plot_index: i32,
        enable_accel_z_plot: i32,
        accel_z_plot_index: i32,
        enable_temp_plot: i32,
        temp_plot_index: i32,
    ) {
        self.sensors.sensors = peripherals::SensorSettings {
            stream_accel: stream_accel != 0,
            stream_temp: stream_temp != 0,
            rate_milliseconds,
            enable_accel_x_plot: enable_accel_x_plot != 0,
            accel_x_plot_index,
            enable_accel_y_plot: enable_accel_y_plot != 0,
            accel_y_plot_index,
            enable_accel_z_plot: enable_accel_z_plot != 0,
            accel_z_plot_index,
            enable_temp_plot: enable_temp_plot != 0,
            temp_plot_index,
        };
    }

    fn set_app_log_settings(
        &mut self,
        log_ir_codes: i32,
        log_accel: i32,
        log_temp_c: i32,
        log_temp_f: i32,
        log_index: i32,
    ) {
        self.sensors.app_log = peripherals::AppLogSettings {
            log_ir_codes: log_ir_codes != 0,
            log_accel: log_accel != 0,
            log_temp_c: log_temp_c != 0,
            log_temp_f: log_temp_f != 0,
            log_index,
        };
    }

    fn load_fpga_from_file(&mut self, file_name: &str) -> i32 {
        if self.storage.exists(file_name) == 0 {
            return 0;
        }
        self.fpga.load(file_name);
        1
    }

    fn run_zoom_io_script(&mut self, script: &str) -> i32 {
        self.zoom.run(script)
    }

    fn get_rtc(&mut self) {
        self.rtc.request(&mut self.events);
    }

    fn show_dialog_msg_box(
        &mut self,
        message: &str,
        show_ok: i32,
        show_ok_cancel: i32,
        show_yes_no: i32,
        picture_index: i32,
        auto_close_half_sec: i32,
    ) {
        let _ = (show_ok, show_ok_cancel, show_yes_no, picture_index, auto_close_half_sec);
        self.dialogs.msg_box(message, &mut self.events);
    }

    fn show_dialog_progress_bar(
        &mut self,
        message: &str,
        picture_index: i32,
        value: i32,
        show_ok_to_close: i32,
    ) {
        let _ = (picture_index, show_ok_to_close);
        self.dialogs.progress_bar(message, value);
    }

    fn show_dialog_num_edit(
        &mut self,
        message: &str,
        unsigned_format: i32,
        hex_format: i32,
        use_min_max: i32,
        initial_value: i32,
        minimum: i32,
        maximum: i32,
    ) {
        let _ = (unsigned_format, hex_format);
        let initial = if use_min_max != 0 {
            initial_value.clamp(minimum, maximum)
        } else {
            initial_value
        };
        self.dialogs.num_edit(message, initial, &mut self.events);
    }

    fn show_dialog_num_edit_float(
        &mut self,
        message: &str,
        digits: i32,
        use_min_max: i32,
        initial_value: f32,
        minimum: i32,
        maximum: i32,
    ) {
        let _ = digits;
        let initial = if use_min_max != 0 {
            initial_value.clamp(minimum as f32, maximum as f32)
        } else {
            initial_value
        };
        self.dialogs
            .num_edit_float(message, initial, &mut self.events);
    }

    fn show_dialog_text_edit(&mut self, message: &str, initial_value: &str) {
        self.dialogs
            .text_edit(message, initial_value, &mut self.events);
    }

    fn show_dialog_pick_list(&mut self, message: &str, log_index: i32, default_item: i32) {
        self.dialogs
            .pick_list(message, log_index, default_item, &mut self.events);
    }
}
