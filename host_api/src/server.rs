//! Host-side dispatcher.
//!
//! [`HostCallServer`] decodes request envelopes, invokes the wrapped
//! [`HostApi`] implementation, and encodes the reply. Out-buffer calls are
//! materialized here: the requested capacity becomes a scratch buffer, the
//! host writes into it, and the produced bytes travel back in the reply.

use crate::api::HostApi;
use crate::calls::{HostCall, HostReply};
use crate::codec::{CodecError, HostCallCodec};
use crate::wire::CallEnvelope;
use host_types::EVENT_DATA_MAX;

/// Ceiling on guest-requested scratch capacity for one out-buffer call.
pub const OUT_BUFFER_CEILING: usize = 64 * 1024;

fn scratch_buffer(length: u32) -> Vec<u8> {
    vec![0u8; (length as usize).min(OUT_BUFFER_CEILING)]
}

/// Dispatches decoded calls into a [`HostApi`] implementation.
pub struct HostCallServer<H: HostApi> {
    host: H,
}

impl<H: HostApi> HostCallServer<H> {
    /// Creates a server around a host implementation
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns a reference to the wrapped host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the wrapped host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the server, returning the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Handles one request envelope, producing the correlated reply.
    pub fn handle(&mut self, envelope: &CallEnvelope) -> Result<CallEnvelope, CodecError> {
        let call = HostCallCodec::decode_request(envelope)?;
        let reply = self.dispatch(call);
        HostCallCodec::encode_reply(&reply, envelope.id)
    }

    /// Invokes the host method for one call and shapes its result.
    pub fn dispatch(&mut self, call: HostCall) -> HostReply {
        use HostCall::*;
        let host = &mut self.host;
        match call {
            WaitMs { milliseconds } => {
                host.waitms(milliseconds);
                HostReply::Unit
            }
            Rand => HostReply::Int(host.rand()),
            Millis => HostReply::Uint(host.millis()),

            SetIo { io, on } => {
                host.set_io(io, on);
                HostReply::Unit
            }
            GetIo { io } => HostReply::Uint(host.get_io(io)),
            GetAllIo => HostReply::Uint(host.get_all_io()),

            I2cRead { address, reg, length } => {
                let mut buf = scratch_buffer(length);
                let status = host.i2c_read(address, reg, &mut buf);
                if status == 0 {
                    buf.clear();
                }
                HostReply::Bytes { status, data: buf }
            }
            I2cWrite { address, reg, data } => {
                HostReply::Int(host.i2c_write(address, reg, &data))
            }

            SpiReadWrite { data_in } => {
                let mut buf = vec![0u8; data_in.len()];
                let status = host.spi_read_write(&data_in, &mut buf);
                if status == 0 {
                    buf.clear();
                }
                HostReply::Bytes { status, data: buf }
            }

            UartRxCount => HostReply::Int(host.uart_rx_count()),
            UartRead { length } => {
                let mut buf = scratch_buffer(length);
                let count = host.uart_read(&mut buf);
                buf.truncate(count.max(0) as usize);
                HostReply::Bytes { status: count, data: buf }
            }
            UartWrite { data } => HostReply::Int(host.uart_write(&data)),

            PwmSetFreqDuty { io, freq_hz, duty } => {
                HostReply::Int(host.pwm_set_freq_duty(io, freq_hz, duty))
            }
            PwmStop { io } => HostReply::Int(host.pwm_stop(io)),

            RadioWrite { index, data } => HostReply::Int(host.radio_write(index, &data)),
            RadioRead { index, length } => {
                let mut buf = scratch_buffer(length);
                let count = host.radio_read(index, &mut buf);
                buf.truncate(count.max(0) as usize);
                HostReply::Bytes { status: count, data: buf }
            }
            RadioRxCount { index } => HostReply::Int(host.radio_rx_count(index)),
            RadioLoadConfig { index, data } => {
                HostReply::Int(host.radio_load_config(index, &data))
            }
            RadioTxSubFile { index, sub_file } => {
                HostReply::Int(host.radio_tx_sub_file(index, &sub_file))
            }
            RadioSetTx { index } => HostReply::Int(host.radio_set_tx(index)),
            RadioSetRx { index } => HostReply::Int(host.radio_set_rx(index)),
            RadioSetIdle { index } => HostReply::Int(host.radio_set_idle(index)),
            RadioRssi { index } => HostReply::Int(host.radio_rssi(index)),
            RadioLqi { index } => HostReply::Int(host.radio_lqi(index)),
            RadioSubFileIsTransmitting => {
                HostReply::Int(host.radio_sub_file_is_transmitting())
            }
            RadioSubFileStop => {
                host.radio_sub_file_stop();
                HostReply::Unit
            }

            SendIrData { data } => {
                host.send_ir_data(data);
                HostReply::Unit
            }

            SetBoardLed {
                led_index,
                red,
                green,
                blue,
                duration_ms,
                mode,
            } => {
                host.set_board_led(led_index, red, green, blue, duration_ms, mode);
                HostReply::Unit
            }
            SetLedShowMode { mode } => {
                host.set_led_show_mode(mode);
                HostReply::Unit
            }

            PlaySoundFromFile { file_name } => {
                host.play_sound_from_file(&file_name);
                HostReply::Unit
            }
            PlaySoundFromNameOrId { name, id } => {
                host.play_sound_from_name_or_id(&name, id);
                HostReply::Unit
            }
            PlaySoundFromNumber {
                is_float,
                int_value,
                float_value,
                float_digits,
            } => {
                host.play_sound_from_number(is_float, int_value, float_value, float_digits);
                HostReply::Unit
            }
            PlaySoundFromFrequency {
                frequency,
                duration,
                amplitude,
                wavetype,
            } => {
                host.play_sound_from_frequency(frequency, duration, amplitude, wavetype);
                HostReply::Unit
            }

            OpenFile { file_name, mode } => HostReply::Int(host.open_file(&file_name, mode)),
            CloseFile { handle } => HostReply::Int(host.close_file(handle)),
            WriteFile { handle, data } => HostReply::Int(host.write_file(handle, &data)),
            PreAllocateSpaceForFile { handle, size_in_bytes } => {
                HostReply::Int(host.pre_allocate_space_for_file(handle, size_in_bytes))
            }
            ReadFile { handle, length } => {
                let mut buf = scratch_buffer(length);
                let (status, count) = host.read_file(handle, &mut buf);
                buf.truncate(count.max(0) as usize);
                HostReply::Bytes { status, data: buf }
            }
            ReadFileLine { handle, length } => {
                let mut buf = scratch_buffer(length);
                let (status, count) = host.read_file_line(handle, &mut buf);
                buf.truncate(count.max(0) as usize);
                HostReply::Bytes { status, data: buf }
            }
            SetFilePosition { handle, position } => {
                HostReply::Int(host.set_file_position(handle, position))
            }
            GetFilePosition { handle } => HostReply::Int(host.get_file_position(handle)),
            GetFileSize { handle } => HostReply::Int(host.get_file_size(handle)),

            RenameFileOrDirectory { name, new_name } => {
                HostReply::Int(host.rename_file_or_directory(&name, &new_name))
            }
            FileExists { file_name } => HostReply::Int(host.file_exists(&file_name)),
            MakeDirectory { file_name } => HostReply::Int(host.make_directory(&file_name)),
            ChangeDirectory { file_name } => {
                HostReply::Int(host.change_directory(&file_name))
            }
            GetDirectoryItemByIndex {
                directory,
                length,
                include_extension,
                index,
            } => {
                let mut buf = scratch_buffer(length);
                let (found, count) =
                    host.get_directory_item_by_index(&directory, include_extension, index, &mut buf);
                buf.truncate(count.max(0) as usize);
                HostReply::Bytes { status: found, data: buf }
            }
            GetVolumeInfo => {
                let (free, total) = host.get_volume_info();
                HostReply::Volume { free, total }
            }
            RemoveFileOrDirectory { file_name } => {
                HostReply::Int(host.remove_file_or_directory(&file_name))
            }

            GetEventData => {
                let mut buf = vec![0u8; EVENT_DATA_MAX];
                let event_type = host.get_event_data(&mut buf);
                if event_type < 0 {
                    buf.clear();
                }
                HostReply::Event { event_type, data: buf }
            }
            HasEvent => HostReply::Int(host.has_event()),

            AddPanel {
                index,
                visible,
                in_rotation,
                use_tile,
                tile_id,
                bg_red,
                bg_green,
                bg_blue,
                show_menu,
            } => {
                host.add_panel(
                    index, visible, in_rotation, use_tile, tile_id, bg_red, bg_green, bg_blue,
                    show_menu,
                );
                HostReply::Unit
            }
            AddPanelPickList {
                index,
                caption,
                tile_id,
                icon_id,
                back_red,
                back_green,
                back_blue,
                fore_red,
                fore_green,
                fore_blue,
                log_index,
            } => {
                host.add_panel_pick_list(
                    index, &caption, tile_id, icon_id, back_red, back_green, back_blue, fore_red,
                    fore_green, fore_blue, log_index,
                );
                HostReply::Unit
            }
            SetPanelMenuText {
                panel,
                button_gray_from_zero,
                message,
            } => {
                host.set_panel_menu_text(panel, button_gray_from_zero, &message);
                HostReply::Unit
            }
            AddControlLed {
                panel,
                control,
                x,
                y,
                color,
                size,
                initial_state,
            } => {
                host.add_control_led(panel, control, x, y, color, size, initial_state);
                HostReply::Unit
            }
            SetListItemText {
                log_index,
                list_index,
                text,
            } => {
                host.set_list_item_text(log_index, list_index, &text);
                HostReply::Unit
            }
            ClearLogOrPlotData {
                log_index_plus_one,
                plot_index_plus_one,
            } => {
                host.clear_log_or_plot_data(log_index_plus_one, plot_index_plus_one);
                HostReply::Unit
            }
            AddControlLogList {
                panel,
                control,
                visible,
                log,
                x,
                y,
                width,
                height,
                font_type,
                font_size,
                red,
                green,
                blue,
                font_red,
                font_green,
                font_blue,
                list_mode,
            } => {
                host.add_control_log_list(
                    panel, control, visible, log, x, y, width, height, font_type, font_size, red,
                    green, blue, font_red, font_green, font_blue, list_mode,
                );
                HostReply::Unit
            }
            AddControlPlotXAxis {
                panel,
                control,
                scroll_mode,
                time_min,
                time_max,
            } => {
                host.add_control_plot_x_axis(panel, control, scroll_mode, time_min, time_max);
                HostReply::Unit
            }
            AddControlPlotData {
                plot_data_index,
                red,
                green,
                blue,
            } => {
                host.add_control_plot_data(plot_data_index, red, green, blue);
                HostReply::Unit
            }
            AddControlPlot {
                panel,
                control,
                visible,
                plot_data_index_bit_field,
                x,
                y,
                width,
                height,
                min,
                max,
                red,
                green,
                blue,
            } => {
                host.add_control_plot(
                    panel, control, visible, plot_data_index_bit_field, x, y, width, height, min,
                    max, red, green, blue,
                );
                HostReply::Unit
            }
            AddControlNumber {
                panel,
                control,
                visible,
                x,
                y,
                width,
                font_size,
                font_type,
                red,
                green,
                blue,
                is_float,
                float_digits,
                is_hex_format,
                is_unsigned,
            } => {
                host.add_control_number(
                    panel, control, visible, x, y, width, font_size, font_type, red, green, blue,
                    is_float, float_digits, is_hex_format, is_unsigned,
                );
                HostReply::Unit
            }
            AddControlPicture {
                panel,
                control,
                x,
                y,
                picture_id,
                visible,
            } => {
                host.add_control_picture(panel, control, x, y, picture_id, visible);
                HostReply::Unit
            }
            AddControlText {
                panel,
                control,
                x,
                y,
                font_type,
                font_size,
                red,
                green,
                blue,
                text,
            } => {
                host.add_control_text(
                    panel, control, x, y, font_type, font_size, red, green, blue, &text,
                );
                HostReply::Unit
            }
            AddControlBargraph {
                panel,
                control,
                visible,
                x,
                y,
                width,
                height,
                min,
                max,
                red,
                green,
                blue,
            } => {
                host.add_control_bargraph(
                    panel, control, visible, x, y, width, height, min, max, red, green, blue,
                );
                HostReply::Unit
            }
            AddControlButton {
                panel,
                control,
                visible,
                x,
                y,
                width,
                height,
                red,
                green,
                blue,
                fore_red,
                fore_green,
                fore_blue,
                text,
            } => {
                host.add_control_button(
                    panel, control, visible, x, y, width, height, red, green, blue, fore_red,
                    fore_green, fore_blue, &text,
                );
                HostReply::Unit
            }
            SetControlValueMinMax {
                panel,
                control,
                enable,
                min,
                max,
            } => {
                host.set_control_value_min_max(panel, control, enable, min, max);
                HostReply::Unit
            }
            SetControlValueMinMaxF {
                panel,
                control,
                enable,
                min,
                max,
            } => {
                host.set_control_value_min_max_f(panel, control, enable, min, max);
                HostReply::Unit
            }
            SetLogDataText { log_index, text } => {
                host.set_log_data_text(log_index, &text);
                HostReply::Unit
            }
            SetPlotData {
                plot_data,
                settings,
                new_value,
            } => {
                host.set_plot_data(plot_data, settings, new_value);
                HostReply::Unit
            }
            SetControlValue {
                panel,
                control,
                new_value,
            } => {
                host.set_control_value(panel, control, new_value);
                HostReply::Unit
            }
            SetControlValueFloat {
                panel,
                control,
                new_value,
            } => {
                host.set_control_value_float(panel, control, new_value);
                HostReply::Unit
            }
            ExitToMainAppMenu => {
                host.exit_to_main_app_menu();
                HostReply::Unit
            }
            ShowPanel { index } => {
                host.show_panel(index);
                HostReply::Unit
            }
            AddControlPictureFromFile {
                panel,
                control,
                x,
                y,
                file_name,
                visible,
            } => {
                host.add_control_picture_from_file(panel, control, x, y, &file_name, visible);
                HostReply::Unit
            }

            PrintInt {
                format_spec,
                color,
                data_type,
                value,
            } => {
                host.print_int(&format_spec, color, data_type, value);
                HostReply::Unit
            }
            PrintFloat {
                format_spec,
                color,
                value,
            } => {
                host.print_float(&format_spec, color, value);
                HostReply::Unit
            }

            SetAudioSettings {
                stream_mic,
                stream_fft,
                enable_mic_plot,
                mic_plot_index,
                enable_fft_plot,
                fft_plot_index,
            } => {
                host.set_audio_settings(
                    stream_mic,
                    stream_fft,
                    enable_mic_plot,
                    mic_plot_index,
                    enable_fft_plot,
                    fft_plot_index,
                );
                HostReply::Unit
            }
            SetSensorSettings {
                stream_accel,
                stream_temp,
                rate_milliseconds,
                enable_accel_x_plot,
                accel_x_plot_index,
                enable_accel_y_plot,
                accel_y_plot_index,
                enable_accel_z_plot,
                accel_z_plot_index,
                enable_temp_plot,
                temp_plot_index,
            } => {
                host.set_sensor_settings(
                    stream_accel,
                    stream_temp,
                    rate_milliseconds,
                    enable_accel_x_plot,
                    accel_x_plot_index,
                    enable_accel_y_plot,
                    accel_y_plot_index,
                    enable_accel_z_plot,
                    accel_z_plot_index,
                    enable_temp_plot,
                    temp_plot_index,
                );
                HostReply::Unit
            }
            SetAppLogSettings {
                log_ir_codes,
                log_accel,
                log_temp_c,
                log_temp_f,
                log_index,
            } => {
                host.set_app_log_settings(log_ir_codes, log_accel, log_temp_c, log_temp_f, log_index);
                HostReply::Unit
            }

            LoadFpgaFromFile { file_name } => {
                HostReply::Int(host.load_fpga_from_file(&file_name))
            }

            RunZoomIoScript { script } => HostReply::Int(host.run_zoom_io_script(&script)),

            GetRtc => {
                host.get_rtc();
                HostReply::Unit
            }

            ShowDialogMsgBox {
                message,
                show_ok,
                show_ok_cancel,
                show_yes_no,
                picture_index,
                auto_close_half_sec,
            } => {
                host.show_dialog_msg_box(
                    &message,
                    show_ok,
                    show_ok_cancel,
                    show_yes_no,
                    picture_index,
                    auto_close_half_sec,
                );
                HostReply::Unit
            }
            ShowDialogProgressBar {
                message,
                picture_index,
                value,
                show_ok_to_close,
            } => {
                host.show_dialog_progress_bar(&message, picture_index, value, show_ok_to_close);
                HostReply::Unit
            }
            ShowDialogNumEdit {
                message,
                unsigned_format,
                hex_format,
                use_min_max,
                initial_value,
                minimum,
                maximum,
            } => {
                host.show_dialog_num_edit(
                    &message,
                    unsigned_format,
                    hex_format,
                    use_min_max,
                    initial_value,
                    minimum,
                    maximum,
                );
                HostReply::Unit
            }
            ShowDialogNumEditFloat {
                message,
                digits,
                use_min_max,
                initial_value,
                minimum,
                maximum,
            } => {
                host.show_dialog_num_edit_float(
                    &message,
                    digits,
                    use_min_max,
                    initial_value,
                    minimum,
                    maximum,
                );
                HostReply::Unit
            }
            ShowDialogTextEdit {
                message,
                initial_value,
            } => {
                host.show_dialog_text_edit(&message, &initial_value);
                HostReply::Unit
            }
            ShowDialogPickList {
                message,
                log_index,
                default_item,
            } => {
                host.show_dialog_pick_list(&message, log_index, default_item);
                HostReply::Unit
            }
        }
    }
}
