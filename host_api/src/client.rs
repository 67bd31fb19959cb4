//! Guest-side binding.
//!
//! [`HostClient`] implements [`HostApi`] over any [`CallTransport`], so a
//! script talks to the trait and never sees envelopes. Binding failures
//! (codec, transport, wrong reply shape) cannot cross the flat surface;
//! they collapse into the call's failure value and bump a fault counter
//! the embedding can inspect.

use crate::api::HostApi;
use crate::calls::{HostCall, HostReply};
use crate::codec::HostCallCodec;
use crate::transport::{CallTransport, TransportError};
use host_types::{
    LedMode, PanelLedColor, PanelLedSize, PrintColor, PrintDataType, EVENT_DATA_MAX,
};

/// Binds the call surface to a transport.
pub struct HostClient<T: CallTransport> {
    transport: T,
    faults: u64,
}

impl<T: CallTransport> HostClient<T> {
    /// Creates a client over a transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            faults: 0,
        }
    }

    /// Number of binding failures collapsed into flat failure values so far
    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Returns a reference to the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Declared on the surface but never bound by the runtime; answered
    /// locally as a no-op.
    pub fn set_list_item_selected(&mut self, _log_index: i32, _item_index: i32) {}

    /// Declared on the surface but never bound by the runtime; answered
    /// locally as a no-op.
    pub fn set_list_item_top_index(&mut self, _log_index: i32, _top_index: i32) {}

    fn roundtrip(&mut self, call: HostCall) -> HostReply {
        let fallback = call.denied_reply();
        match self.try_roundtrip(&call) {
            Ok(reply) => reply,
            Err(_) => {
                self.faults += 1;
                fallback
            }
        }
    }

    fn try_roundtrip(&mut self, call: &HostCall) -> Result<HostReply, TransportError> {
        let request = HostCallCodec::encode_request(call)?;
        let request_id = request.id;
        let reply = self.transport.call(request)?;
        Ok(HostCallCodec::decode_reply(&reply, request_id)?)
    }

    fn expect_unit(&mut self, reply: HostReply) {
        if reply != HostReply::Unit {
            self.faults += 1;
        }
    }

    fn expect_int(&mut self, reply: HostReply) -> i32 {
        match reply {
            HostReply::Int(value) => value,
            _ => {
                self.faults += 1;
                0
            }
        }
    }

    fn expect_uint(&mut self, reply: HostReply) -> u32 {
        match reply {
            HostReply::Uint(value) => value,
            _ => {
                self.faults += 1;
                0
            }
        }
    }

    /// Copies reply bytes into the caller's buffer, returning the status.
    fn expect_bytes(&mut self, reply: HostReply, out: &mut [u8]) -> (i32, i32) {
        match reply {
            HostReply::Bytes { status, data } => {
                let n = data.len().min(out.len());
                out[..n].copy_from_slice(&data[..n]);
                (status, n as i32)
            }
            _ => {
                self.faults += 1;
                (0, 0)
            }
        }
    }
}

impl<T: CallTransport> HostApi for HostClient<T> {
    fn waitms(&mut self, milliseconds: i32) {
        let reply = self.roundtrip(HostCall::WaitMs { milliseconds });
        self.expect_unit(reply);
    }

    fn rand(&mut self) -> i32 {
        let reply = self.roundtrip(HostCall::Rand);
        self.expect_int(reply)
    }

    fn millis(&mut self) -> u32 {
        let reply = self.roundtrip(HostCall::Millis);
        self.expect_uint(reply)
    }

    fn set_io(&mut self, io: i32, on: i32) {
        let reply = self.roundtrip(HostCall::SetIo { io, on });
        self.expect_unit(reply);
    }

    fn get_io(&mut self, io: i32) -> u32 {
        let reply = self.roundtrip(HostCall::GetIo { io });
        self.expect_uint(reply)
    }

    fn get_all_io(&mut self) -> u32 {
        let reply = self.roundtrip(HostCall::GetAllIo);
        self.expect_uint(reply)
    }

    fn i2c_read(&mut self, address: i32, reg: i32, data: &mut [u8]) -> i32 {
        let reply = self.roundtrip(HostCall::I2cRead {
            address,
            reg,
            length: data.len() as u32,
        });
        self.expect_bytes(reply, data).0
    }

    fn i2c_write(&mut self, address: i32, reg: i32, data: &[u8]) -> i32 {
        let reply = self.roundtrip(HostCall::I2cWrite {
            address,
            reg,
            data: data.to_vec(),
        });
        self.expect_int(reply)
    }

    fn spi_read_write(&mut self, data_in: &[u8], data_out: &mut [u8]) -> i32 {
        let reply = self.roundtrip(HostCall::SpiReadWrite {
            data_in: data_in.to_vec(),
        });
        self.expect_bytes(reply, data_out).0
    }

    fn uart_rx_count(&mut self) -> i32 {
        let reply = self.roundtrip(HostCall::UartRxCount);
        self.expect_int(reply)
    }

    fn uart_read(&mut self, data: &mut [u8]) -> i32 {
        let reply = self.roundtrip(HostCall::UartRead {
            length: data.len() as u32,
        });
        self.expect_bytes(reply, data).0
    }

    fn uart_write(&mut self, data: &[u8]) -> i32 {
        let reply = self.roundtrip(HostCall::UartWrite {
            data: data.to_vec(),
        });
        self.expect_int(reply)
    }

    fn pwm_set_freq_duty(&mut self, io: i32, freq_hz: f32, duty: f32) -> i32 {
        let reply = self.roundtrip(HostCall::PwmSetFreqDuty { io, freq_hz, duty });
        self.expect_int(reply)
    }

    fn pwm_stop(&mut self, io: i32) -> i32 {
        let reply = self.roundtrip(HostCall::PwmStop { io });
        self.expect_int(reply)
    }

    fn radio_write(&mut self, index: i32, data: &[u8]) -> i32 {
        let reply = self.roundtrip(HostCall::RadioWrite {
            index,
            data: data.to_vec(),
        });
        self.expect_int(reply)
    }

    fn radio_read(&mut self, index: i32, data: &mut [u8]) -> i32 {
        let reply = self.roundtrip(HostCall::RadioRead {
            index,
            length: data.len() as u32,
        });
        self.expect_bytes(reply, data).0
    }

    fn radio_rx_count(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioRxCount { index });
        self.expect_int(reply)
    }

    fn radio_load_config(&mut self, index: i32, data: &[u8]) -> i32 {
        let reply = self.roundtrip(HostCall::RadioLoadConfig {
            index,
            data: data.to_vec(),
        });
        self.expect_int(reply)
    }

    fn radio_tx_sub_file(&mut self, index: i32, sub_file: &str) -> i32 {
        let reply = self.roundtrip(HostCall::RadioTxSubFile {
            index,
            sub_file: sub_file.to_string(),
        });
        self.expect_int(reply)
    }

    fn radio_set_tx(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioSetTx { index });
        self.expect_int(reply)
    }

    fn radio_set_rx(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioSetRx { index });
        self.expect_int(reply)
    }

    fn radio_set_idle(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioSetIdle { index });
        self.expect_int(reply)
    }

    fn radio_rssi(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioRssi { index });
        self.expect_int(reply)
    }

    fn radio_lqi(&mut self, index: i32) -> i32 {
        let reply = self.roundtrip(HostCall::RadioLqi { index });
        self.expect_int(reply)
    }

    fn radio_sub_file_is_transmitting(&mut self) -> i32 {
        let reply = self.roundtrip(HostCall::RadioSubFileIsTransmitting);
        self.expect_int(reply)
    }

    fn radio_sub_file_stop(&mut self) {
        let reply = self.roundtrip(HostCall::RadioSubFileStop);
        self.expect_unit(reply);
    }

    fn send_ir_data(&mut self, data: u32) {
        let reply = self.roundtrip(HostCall::SendIrData { data });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::SetBoardLed {
            led_index,
            red,
            green,
            blue,
            duration_ms,
            mode,
        });
        self.expect_unit(reply);
    }

    fn set_led_show_mode(&mut self, mode: i32) {
        let reply = self.roundtrip(HostCall::SetLedShowMode { mode });
        self.expect_unit(reply);
    }

    fn play_sound_from_file(&mut self, file_name: &str) {
        let reply = self.roundtrip(HostCall::PlaySoundFromFile {
            file_name: file_name.to_string(),
        });
        self.expect_unit(reply);
    }

    fn play_sound_from_name_or_id(&mut self, name: &str, id: i32) {
        let reply = self.roundtrip(HostCall::PlaySoundFromNameOrId {
            name: name.to_string(),
            id,
        });
        self.expect_unit(reply);
    }

    fn play_sound_from_number(
        &mut self,
        is_float: i32,
        int_value: i32,
        float_value: f32,
        float_digits: i32,
    ) {
        let reply = self.roundtrip(HostCall::PlaySoundFromNumber {
            is_float,
            int_value,
            float_value,
            float_digits,
        });
        self.expect_unit(reply);
    }

    fn play_sound_from_frequency(
        &mut self,
        frequency: f32,
        duration: f32,
        amplitude: f32,
        wavetype: u8,
    ) {
        let reply = self.roundtrip(HostCall::PlaySoundFromFrequency {
            frequency,
            duration,
            amplitude,
            wavetype,
        });
        self.expect_unit(reply);
    }

    fn open_file(&mut self, file_name: &str, mode: i32) -> i32 {
        let reply = self.roundtrip(HostCall::OpenFile {
            file_name: file_name.to_string(),
            mode,
        });
        self.expect_int(reply)
    }

    fn close_file(&mut self, handle: i32) -> i32 {
        let reply = self.roundtrip(HostCall::CloseFile { handle });
        self.expect_int(reply)
    }

    fn write_file(&mut self, handle: i32, data: &[u8]) -> i32 {
        let reply = self.roundtrip(HostCall::WriteFile {
            handle,
            data: data.to_vec(),
        });
        self.expect_int(reply)
    }

    fn pre_allocate_space_for_file(&mut self, handle: i32, size_in_bytes: i32) -> i32 {
        let reply = self.roundtrip(HostCall::PreAllocateSpaceForFile {
            handle,
            size_in_bytes,
        });
        self.expect_int(reply)
    }

    fn read_file(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        let reply = self.roundtrip(HostCall::ReadFile {
            handle,
            length: data.len() as u32,
        });
        self.expect_bytes(reply, data)
    }

    fn read_file_line(&mut self, handle: i32, data: &mut [u8]) -> (i32, i32) {
        let reply = self.roundtrip(HostCall::ReadFileLine {
            handle,
            length: data.len() as u32,
        });
        self.expect_bytes(reply, data)
    }

    fn set_file_position(&mut self, handle: i32, position: i32) -> i32 {
        let reply = self.roundtrip(HostCall::SetFilePosition { handle, position });
        self.expect_int(reply)
    }

    fn get_file_position(&mut self, handle: i32) -> i32 {
        let reply = self.roundtrip(HostCall::GetFilePosition { handle });
        self.expect_int(reply)
    }

    fn get_file_size(&mut self, handle: i32) -> i32 {
        let reply = self.roundtrip(HostCall::GetFileSize { handle });
        self.expect_int(reply)
    }

    fn rename_file_or_directory(&mut self, name: &str, new_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::RenameFileOrDirectory {
            name: name.to_string(),
            new_name: new_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn file_exists(&mut self, file_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::FileExists {
            file_name: file_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn make_directory(&mut self, file_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::MakeDirectory {
            file_name: file_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn change_directory(&mut self, file_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::ChangeDirectory {
            file_name: file_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn get_directory_item_by_index(
        &mut self,
        directory: &str,
        include_extension: i32,
        index: i32,
        name_out: &mut [u8],
    ) -> (i32, i32) {
        let reply = self.roundtrip(HostCall::GetDirectoryItemByIndex {
            directory: directory.to_string(),
            length: name_out.len() as u32,
            include_extension,
            index,
        });
        self.expect_bytes(reply, name_out)
    }

    fn get_volume_info(&mut self) -> (i32, i32) {
        match self.roundtrip(HostCall::GetVolumeInfo) {
            HostReply::Volume { free, total } => (free, total),
            _ => {
                self.faults += 1;
                (0, 0)
            }
        }
    }

    fn remove_file_or_directory(&mut self, file_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::RemoveFileOrDirectory {
            file_name: file_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn get_event_data(&mut self, data: &mut [u8]) -> i32 {
        match self.roundtrip(HostCall::GetEventData) {
            HostReply::Event {
                event_type,
                data: payload,
            } => {
                // The record ceiling holds even if the transport replies
                // with a longer payload.
                let n = payload.len().min(data.len()).min(EVENT_DATA_MAX);
                data[..n].copy_from_slice(&payload[..n]);
                event_type
            }
            _ => {
                self.faults += 1;
                -1
            }
        }
    }

    fn has_event(&mut self) -> i32 {
        let reply = self.roundtrip(HostCall::HasEvent);
        self.expect_int(reply)
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
        let reply = self.roundtrip(HostCall::AddPanel {
            index,
            visible,
            in_rotation,
            use_tile,
            tile_id,
            bg_red,
            bg_green,
            bg_blue,
            show_menu,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddPanelPickList {
            index,
            caption: caption.to_string(),
            tile_id,
            icon_id,
            back_red,
            back_green,
            back_blue,
            fore_red,
            fore_green,
            fore_blue,
            log_index,
        });
        self.expect_unit(reply);
    }

    fn set_panel_menu_text(&mut self, panel: i32, button_gray_from_zero: i32, message: &str) {
        let reply = self.roundtrip(HostCall::SetPanelMenuText {
            panel,
            button_gray_from_zero,
            message: message.to_string(),
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlLed {
            panel,
            control,
            x,
            y,
            color,
            size,
            initial_state,
        });
        self.expect_unit(reply);
    }

    fn set_list_item_text(&mut self, log_index: i32, list_index: i32, text: &str) {
        let reply = self.roundtrip(HostCall::SetListItemText {
            log_index,
            list_index,
            text: text.to_string(),
        });
        self.expect_unit(reply);
    }

    fn clear_log_or_plot_data(&mut self, log_index_plus_one: i32, plot_index_plus_one: i32) {
        let reply = self.roundtrip(HostCall::ClearLogOrPlotData {
            log_index_plus_one,
            plot_index_plus_one,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlLogList {
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
        });
        self.expect_unit(reply);
    }

    fn add_control_plot_x_axis(
        &mut self,
        panel: i32,
        control: i32,
        scroll_mode: i32,
        time_min: u64,
        time_max: u64,
    ) {
        let reply = self.roundtrip(HostCall::AddControlPlotXAxis {
            panel,
            control,
            scroll_mode,
            time_min,
            time_max,
        });
        self.expect_unit(reply);
    }

    fn add_control_plot_data(&mut self, plot_data_index: i32, red: i32, green: i32, blue: i32) {
        let reply = self.roundtrip(HostCall::AddControlPlotData {
            plot_data_index,
            red,
            green,
            blue,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlPlot {
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
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlNumber {
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
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlPicture {
            panel,
            control,
            x,
            y,
            picture_id,
            visible,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlText {
            panel,
            control,
            x,
            y,
            font_type,
            font_size,
            red,
            green,
            blue,
            text: text.to_string(),
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlBargraph {
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
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlButton {
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
            text: text.to_string(),
        });
        self.expect_unit(reply);
    }

    fn set_control_value_min_max(
        &mut self,
        panel: i32,
        control: i32,
        enable: i32,
        min: i32,
        max: i32,
    ) {
        let reply = self.roundtrip(HostCall::SetControlValueMinMax {
            panel,
            control,
            enable,
            min,
            max,
        });
        self.expect_unit(reply);
    }

    fn set_control_value_min_max_f(
        &mut self,
        panel: i32,
        control: i32,
        enable: i32,
        min: f32,
        max: f32,
    ) {
        let reply = self.roundtrip(HostCall::SetControlValueMinMaxF {
            panel,
            control,
            enable,
            min,
            max,
        });
        self.expect_unit(reply);
    }

    fn set_log_data_text(&mut self, log_index: i32, text: &str) {
        let reply = self.roundtrip(HostCall::SetLogDataText {
            log_index,
            text: text.to_string(),
        });
        self.expect_unit(reply);
    }

    fn set_plot_data(&mut self, plot_data: i32, settings: i32, new_value: i32) {
        let reply = self.roundtrip(HostCall::SetPlotData {
            plot_data,
            settings,
            new_value,
        });
        self.expect_unit(reply);
    }

    fn set_control_value(&mut self, panel: i32, control: i32, new_value: i32) {
        let reply = self.roundtrip(HostCall::SetControlValue {
            panel,
            control,
            new_value,
        });
        self.expect_unit(reply);
    }

    fn set_control_value_float(&mut self, panel: i32, control: i32, new_value: f32) {
        let reply = self.roundtrip(HostCall::SetControlValueFloat {
            panel,
            control,
            new_value,
        });
        self.expect_unit(reply);
    }

    fn exit_to_main_app_menu(&mut self) {
        let reply = self.roundtrip(HostCall::ExitToMainAppMenu);
        self.expect_unit(reply);
    }

    fn show_panel(&mut self, index: i32) {
        let reply = self.roundtrip(HostCall::ShowPanel { index });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::AddControlPictureFromFile {
            panel,
            control,
            x,
            y,
            file_name: file_name.to_string(),
            visible,
        });
        self.expect_unit(reply);
    }

    fn print_int(
        &mut self,
        format_spec: &str,
        color: PrintColor,
        data_type: PrintDataType,
        value: i32,
    ) {
        let reply = self.roundtrip(HostCall::PrintInt {
            format_spec: format_spec.to_string(),
            color,
            data_type,
            value,
        });
        self.expect_unit(reply);
    }

    fn print_float(&mut self, format_spec: &str, color: PrintColor, value: f32) {
        let reply = self.roundtrip(HostCall::PrintFloat {
            format_spec: format_spec.to_string(),
            color,
            value,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::SetAudioSettings {
            stream_mic,
            stream_fft,
            enable_mic_plot,
            mic_plot_index,
            enable_fft_plot,
            fft_plot_index,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::SetSensorSettings {
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
        });
        self.expect_unit(reply);
    }

    fn set_app_log_settings(
        &mut self,
        log_ir_codes: i32,
        log_accel: i32,
        log_temp_c: i32,
        log_temp_f: i32,
        log_index: i32,
    ) {
        let reply = self.roundtrip(HostCall::SetAppLogSettings {
            log_ir_codes,
            log_accel,
            log_temp_c,
            log_temp_f,
            log_index,
        });
        self.expect_unit(reply);
    }

    fn load_fpga_from_file(&mut self, file_name: &str) -> i32 {
        let reply = self.roundtrip(HostCall::LoadFpgaFromFile {
            file_name: file_name.to_string(),
        });
        self.expect_int(reply)
    }

    fn run_zoom_io_script(&mut self, script: &str) -> i32 {
        let reply = self.roundtrip(HostCall::RunZoomIoScript {
            script: script.to_string(),
        });
        self.expect_int(reply)
    }

    fn get_rtc(&mut self) {
        let reply = self.roundtrip(HostCall::GetRtc);
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::ShowDialogMsgBox {
            message: message.to_string(),
            show_ok,
            show_ok_cancel,
            show_yes_no,
            picture_index,
            auto_close_half_sec,
        });
        self.expect_unit(reply);
    }

    fn show_dialog_progress_bar(
        &mut self,
        message: &str,
        picture_index: i32,
        value: i32,
        show_ok_to_close: i32,
    ) {
        let reply = self.roundtrip(HostCall::ShowDialogProgressBar {
            message: message.to_string(),
            picture_index,
            value,
            show_ok_to_close,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::ShowDialogNumEdit {
            message: message.to_string(),
            unsigned_format,
            hex_format,
            use_min_max,
            initial_value,
            minimum,
            maximum,
        });
        self.expect_unit(reply);
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
        let reply = self.roundtrip(HostCall::ShowDialogNumEditFloat {
            message: message.to_string(),
            digits,
            use_min_max,
            initial_value,
            minimum,
            maximum,
        });
        self.expect_unit(reply);
    }

    fn show_dialog_text_edit(&mut self, message: &str, initial_value: &str) {
        let reply = self.roundtrip(HostCall::ShowDialogTextEdit {
            message: message.to_string(),
            initial_value: initial_value.to_string(),
        });
        self.expect_unit(reply);
    }

    fn show_dialog_pick_list(&mut self, message: &str, log_index: i32, default_item: i32) {
        let reply = self.roundtrip(HostCall::ShowDialogPickList {
            message: message.to_string(),
            log_index,
            default_item,
        });
        self.expect_unit(reply);
    }
}
