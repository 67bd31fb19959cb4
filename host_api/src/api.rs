//! The host capability trait.
//!
//! [`HostApi`] is the full call surface as one trait: a simulated device
//! implements it directly, and [`crate::client::HostClient`] implements it
//! over a transport so guest code is written once against the trait.
//!
//! Signatures follow the declaration surface exactly. Out-parameters become
//! `&mut [u8]` slices; the implementation writes at most `data.len()` bytes
//! and reports how many it produced. Flat status values stay `i32`.

use host_types::{LedMode, PanelLedColor, PanelLedSize, PrintColor, PrintDataType};

/// Everything a guest script may ask the device to do.
#[allow(clippy::too_many_arguments)]
pub trait HostApi {
    // ---- General ----

    /// Blocks the calling script for the given number of milliseconds.
    fn waitms(&mut self, milliseconds: i32);

    /// Returns a pseudo random number.
    fn rand(&mut self) -> i32;

    /// Returns milliseconds since the device started.
    fn millis(&mut self) -> u32;

    // ---- GPIO ----

    /// Drives a GPIO pin high (nonzero `on`) or low.
    fn set_io(&mut self, io: i32, on: i32);

    /// Reads one GPIO pin; returns 1 or 0.
    fn get_io(&mut self, io: i32) -> u32;

    /// Reads all GPIO pins as a bitmask, bit N for pin N.
    fn get_all_io(&mut self) -> u32;

    // ---- I2C ----

    /// Reads `data.len()` bytes from a device register. Returns 1 on
    /// success, 0 on failure.
    fn i2c_read(&mut self, address: i32, reg: i32, data: &mut [u8]) -> i32;

    /// Writes bytes to a device register. Returns 1 on success, 0 on failure.
    fn i2c_write(&mut self, address: i32, reg: i32, data: &[u8]) -> i32;

    // ---- SPI ----

    /// Full-duplex transfer: shifts `data_in` out while filling `data_out`.
    /// Both slices must be the same length. Returns 1 on success.
    fn spi_read_write(&mut self, data_in: &[u8], data_out: &mut [u8]) -> i32;

    // ---- UART ----

    /// Returns the number of bytes waiting in the receive buffer.
    fn uart_rx_count(&mut self) -> i32;

    /// Drains up to `data.len()` received bytes. Returns the count read.
    fn uart_read(&mut self, data: &mut [u8]) -> i32;

    /// Transmits bytes. Returns the number of bytes written.
    fn uart_write(&mut self, data: &[u8]) -> i32;

    // ---- PWM ----

    /// Starts PWM output on a pin. Duty is a percentage (0..=100).
    /// Returns 1 on success, 0 on failure.
    fn pwm_set_freq_duty(&mut self, io: i32, freq_hz: f32, duty: f32) -> i32;

    /// Stops PWM output on a pin. Returns 1 on success, 0 on failure.
    fn pwm_stop(&mut self, io: i32) -> i32;

    // ---- Radio ----

    /// Queues bytes for transmission on radio `index` (1 or 2).
    fn radio_write(&mut self, index: i32, data: &[u8]) -> i32;

    /// Drains up to `data.len()` received bytes. Returns the count read.
    fn radio_read(&mut self, index: i32, data: &mut [u8]) -> i32;

    /// Returns the number of received bytes waiting on radio `index`.
    fn radio_rx_count(&mut self, index: i32) -> i32;

    /// Loads a register configuration blob into radio `index`.
    fn radio_load_config(&mut self, index: i32, data: &[u8]) -> i32;

    /// Starts transmitting a sub-GHz capture file. Returns 1 if the
    /// transmission was started.
    fn radio_tx_sub_file(&mut self, index: i32, sub_file: &str) -> i32;

    /// Puts radio `index` into transmit mode.
    fn radio_set_tx(&mut self, index: i32) -> i32;

    /// Puts radio `index` into receive mode.
    fn radio_set_rx(&mut self, index: i32) -> i32;

    /// Puts radio `index` into idle.
    fn radio_set_idle(&mut self, index: i32) -> i32;

    /// Returns the last RSSI reading for radio `index`.
    fn radio_rssi(&mut self, index: i32) -> i32;

    /// Returns the last link quality reading for radio `index`.
    fn radio_lqi(&mut self, index: i32) -> i32;

    /// Returns 1 while a sub-GHz file transmission is in progress.
    fn radio_sub_file_is_transmitting(&mut self) -> i32;

    /// Cancels an in-progress sub-GHz file transmission.
    fn radio_sub_file_stop(&mut self);

    // ---- IR ----

    /// Transmits a 32-bit IR code.
    fn send_ir_data(&mut self, data: u32);

    // ---- LEDs ----

    /// Sets one board LED. A zero duration latches the color; otherwise
    /// the effect runs for `duration_ms` in the given mode.
    fn set_board_led(
        &mut self,
        led_index: i32,
        red: i32,
        green: i32,
        blue: i32,
        duration_ms: i32,
        mode: LedMode,
    );

    /// Selects a whole-strip show mode.
    fn set_led_show_mode(&mut self, mode: i32);

    // ---- Sound ----

    /// Plays a sound file from storage.
    fn play_sound_from_file(&mut self, file_name: &str);

    /// Plays a built-in sound by name, or by ID when the name is empty.
    fn play_sound_from_name_or_id(&mut self, name: &str, id: i32);

    /// Speaks a number aloud.
    fn play_sound_from_number(
        &mut self,
        is_float: i32,
        int_value: i32,
        float_value: f32,
        float_digits: i32,
    );

    /// Plays a raw tone. `wavetype` selects the waveform shape.
    fn play_sound_from_frequency(&mut self, frequency: f32, duration: f32, amplitude: f32, wavetype: u8);

    // ---- File IO ----

    /// Opens a file; mode 0 read, 1 write, 2 append. Returns a handle,
    /// or 0 on failure.
    fn open_file(&mut self, file_name: &str, mode: i32) -> i32;

    /// Closes a handle. Returns 1 on success.
    fn close_file(&mut self, handle: i32) -> i32;

    /// Writes bytes at the current position. Returns 1 on success.
    fn write_file(&mut self, handle: i32, data: &[u8]) -> i32;

    /// Reserves space so later writes don't reallocate. Returns 1 on success.
    fn pre_allocate_space_for_file(&mut self, handle: i32, size_in_bytes: i32) -> i32;

    /// Reads up to `data.len()` bytes. Returns (success flag, bytes read).
    fn read_file(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32);

    /// Reads up to the next newline or `data.len()` bytes, whichever comes
    /// first. The newline is consumed but not stored. Returns
    /// (success flag, bytes read).
    fn read_file_line(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32);

    /// Seeks to an absolute byte position. Returns 1 on success.
    fn set_file_position(&mut self, handle: i32, position: i32) -> i32;

    /// Returns the current byte position, or -1 for a bad handle.
    fn get_file_position(&mut self, handle: i32) -> i32;

    /// Returns the file size in bytes, or -1 for a bad handle.
    fn get_file_size(&mut self, handle: i32) -> i32;

    // ---- File system ----

    /// Renames a file or directory. Returns 1 on success.
    fn rename_file_or_directory(&mut self, name: &str, new_name: &str) -> i32;

    /// Returns 1 if the path exists.
    fn file_exists(&mut self, file_name: &str) -> i32;

    /// Creates a directory. Returns 1 on success.
    fn make_directory(&mut self, file_name: &str) -> i32;

    /// Changes the working directory. Returns 1 on success.
    fn change_directory(&mut self, file_name: &str) -> i32;

    /// Copies the name of the `index`-th entry of `directory` into
    /// `name_out`. Returns (found flag, name length in bytes).
    fn get_directory_item_by_index(
        &mut self,
        directory: &str,
        include_extension: i32,
        index: i32,
        name_out: &mut [u8],
    ) -> (i32, i32);

    /// Returns (free, total) storage in kilobytes.
    fn get_volume_info(&mut self) -> (i32, i32);

    /// Removes a file or an empty directory. Returns 1 on success.
    fn remove_file_or_directory(&mut self, file_name: &str) -> i32;

    // ---- Events ----

    /// Dequeues the oldest pending event record into `data` (at most 34
    /// bytes). Returns the event type code, or -1 when the queue is empty.
    fn get_event_data(&mut self, data: &mut [u8]) -> i32;

    /// Returns 1 if at least one event is pending.
    fn has_event(&mut self) -> i32;

    // ---- Panels and controls ----

    /// Creates or replaces panel `index`.
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
    );

    /// Creates a full-screen pick list panel backed by log `log_index`.
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
    );

    /// Sets the label of one menu button on a panel.
    fn set_panel_menu_text(&mut self, panel: i32, button_gray_from_zero: i32, message: &str);

    /// Adds an LED widget to a panel.
    fn add_control_led(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        color: PanelLedColor,
        size: PanelLedSize,
        initial_state: i32,
    );

    /// Replaces the text of one list item in a log.
    fn set_list_item_text(&mut self, log_index: i32, list_index: i32, text: &str);

    /// Clears log or plot data. Indexes are one-based; zero skips.
    fn clear_log_or_plot_data(&mut self, log_index_plus_one: i32, plot_index_plus_one: i32);

    /// Adds a scrolling log list control.
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
    );

    /// Configures the time axis of a plot control.
    fn add_control_plot_x_axis(
        &mut self,
        panel: i32,
        control: i32,
        scroll_mode: i32,
        time_min: u64,
        time_max: u64,
    );

    /// Declares a plot data series and its trace color.
    fn add_control_plot_data(&mut self, plot_data_index: i32, red: i32, green: i32, blue: i32);

    /// Adds a plot control displaying the series named in the bit field.
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
    );

    /// Adds a numeric readout control.
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
    );

    /// Adds a built-in picture control.
    fn add_control_picture(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        picture_id: i32,
        visible: i32,
    );

    /// Adds a static text control.
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
    );

    /// Adds a bargraph control.
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
    );

    /// Adds a button control.
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
    );

    /// Enables or disables value clamping for a control.
    fn set_control_value_min_max(&mut self, panel: i32, control: i32, enable: i32, min: i32, max: i32);

    /// Float version of value clamping.
    fn set_control_value_min_max_f(
        &mut self,
        panel: i32,
        control: i32,
        enable: i32,
        min: f32,
        max: f32,
    );

    /// Appends a line of text to a log.
    fn set_log_data_text(&mut self, log_index: i32, text: &str);

    /// Pushes a new sample into a plot data series.
    fn set_plot_data(&mut self, plot_data: i32, settings: i32, new_value: i32);

    /// Sets the value shown by a control.
    fn set_control_value(&mut self, panel: i32, control: i32, new_value: i32);

    /// Float version of [`Self::set_control_value`].
    fn set_control_value_float(&mut self, panel: i32, control: i32, new_value: f32);

    /// Leaves the script and returns to the main application menu.
    fn exit_to_main_app_menu(&mut self);

    /// Brings panel `index` to the front, hiding the previously shown one.
    fn show_panel(&mut self, index: i32);

    /// Adds a picture control loaded from a file on storage.
    fn add_control_picture_from_file(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        file_name: &str,
        visible: i32,
    );

    // ---- Debug print ----

    /// Prints an integer through a printf-style format spec to the
    /// debug console.
    fn print_int(&mut self, format_spec: &str, color: PrintColor, data_type: PrintDataType, value: i32);

    /// Prints a float through a printf-style format spec.
    fn print_float(&mut self, format_spec: &str, color: PrintColor, value: f32);

    // ---- Sensors ----

    /// Configures microphone and FFT streaming and plotting.
    fn set_audio_settings(
        &mut self,
        stream_mic: i32,
        stream_fft: i32,
        enable_mic_plot: i32,
        mic_plot_index: i32,
        enable_fft_plot: i32,
        fft_plot_index: i32,
    );

    /// Configures accelerometer and temperature streaming and plotting.
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
    );

    /// Routes selected readings into an application log.
    fn set_app_log_settings(
        &mut self,
        log_ir_codes: i32,
        log_accel: i32,
        log_temp_c: i32,
        log_temp_f: i32,
        log_index: i32,
    );

    // ---- FPGA ----

    /// Loads an FPGA bitstream from a file. Returns 1 on success.
    fn load_fpga_from_file(&mut self, file_name: &str) -> i32;

    // ---- Zoom IO ----

    /// Runs a Zoom IO script string. Returns 1 on success.
    fn run_zoom_io_script(&mut self, script: &str) -> i32;

    // ---- RTC ----

    /// Requests the wall-clock time; the answer arrives as an RTC
    /// response event.
    fn get_rtc(&mut self);

    // ---- Dialogs ----

    /// Shows a message box; the button pressed arrives as a dialog event.
    fn show_dialog_msg_box(
        &mut self,
        message: &str,
        show_ok: i32,
        show_ok_cancel: i32,
        show_yes_no: i32,
        picture_index: i32,
        auto_close_half_sec: i32,
    );

    /// Shows or updates a progress bar dialog.
    fn show_dialog_progress_bar(
        &mut self,
        message: &str,
        picture_index: i32,
        value: i32,
        show_ok_to_close: i32,
    );

    /// Shows an integer entry dialog; the result arrives as an event.
    fn show_dialog_num_edit(
        &mut self,
        message: &str,
        unsigned_format: i32,
        hex_format: i32,
        use_min_max: i32,
        initial_value: i32,
        minimum: i32,
        maximum: i32,
    );

    /// Shows a float entry dialog; the result arrives as an event.
    fn show_dialog_num_edit_float(
        &mut self,
        message: &str,
        digits: i32,
        use_min_max: i32,
        initial_value: f32,
        minimum: i32,
        maximum: i32,
    );

    /// Shows a text entry dialog; the result arrives as an event.
    fn show_dialog_text_edit(&mut self, message: &str, initial_value: &str);

    /// Shows a pick list dialog fed from a log; the selection arrives as
    /// an event.
    fn show_dialog_pick_list(&mut self, message: &str, log_index: i32, default_item: i32);
}
