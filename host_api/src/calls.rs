//! Typed forms of every bound operation on the call surface.
//!
//! [`HostCall`] has one variant per import; [`HostReply`] groups results by
//! shape, since the contract only ever returns nothing, a flat integer, an
//! unsigned word, bytes plus a status, a volume pair, or an event record.
//! The two unbound declarations (`set_list_item_selected`,
//! `set_list_item_top_index`) never cross the surface and therefore have no
//! variant here; the client answers them locally.

pub use crate::table::Subsystem;
use host_types::{LedMode, PanelLedColor, PanelLedSize, PrintColor, PrintDataType};
use serde::{Deserialize, Serialize};

/// One call crossing the surface, with typed arguments.
///
/// Out-buffer operations carry the caller's capacity (`length`) instead of
/// the buffer itself; the reply brings the produced bytes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HostCall {
    // General
    WaitMs { milliseconds: i32 },
    Rand,
    Millis,

    // GPIO
    SetIo { io: i32, on: i32 },
    GetIo { io: i32 },
    GetAllIo,

    // I2C
    I2cRead { address: i32, reg: i32, length: u32 },
    I2cWrite { address: i32, reg: i32, data: Vec<u8> },

    // SPI
    SpiReadWrite { data_in: Vec<u8> },

    // UART
    UartRxCount,
    UartRead { length: u32 },
    UartWrite { data: Vec<u8> },

    // PWM
    PwmSetFreqDuty { io: i32, freq_hz: f32, duty: f32 },
    PwmStop { io: i32 },

    // Radio
    RadioWrite { index: i32, data: Vec<u8> },
    RadioRead { index: i32, length: u32 },
    RadioRxCount { index: i32 },
    RadioLoadConfig { index: i32, data: Vec<u8> },
    RadioTxSubFile { index: i32, sub_file: String },
    RadioSetTx { index: i32 },
    RadioSetRx { index: i32 },
    RadioSetIdle { index: i32 },
    RadioRssi { index: i32 },
    RadioLqi { index: i32 },
    RadioSubFileIsTransmitting,
    RadioSubFileStop,

    // IR
    SendIrData { data: u32 },

    // LEDs
    SetBoardLed {
        led_index: i32,
        red: i32,
        green: i32,
        blue: i32,
        duration_ms: i32,
        mode: LedMode,
    },
    SetLedShowMode { mode: i32 },

    // Sound
    PlaySoundFromFile { file_name: String },
    PlaySoundFromNameOrId { name: String, id: i32 },
    PlaySoundFromNumber {
        is_float: i32,
        int_value: i32,
        float_value: f32,
        float_digits: i32,
    },
    PlaySoundFromFrequency {
        frequency: f32,
        duration: f32,
        amplitude: f32,
        wavetype: u8,
    },

    // File IO
    OpenFile { file_name: String, mode: i32 },
    CloseFile { handle: i32 },
    WriteFile { handle: i32, data: Vec<u8> },
    PreAllocateSpaceForFile { handle: i32, size_in_bytes: i32 },
    ReadFile { handle: i32, length: u32 },
    ReadFileLine { handle: i32, length: u32 },
    SetFilePosition { handle: i32, position: i32 },
    GetFilePosition { handle: i32 },
    GetFileSize { handle: i32 },

    // File system
    RenameFileOrDirectory { name: String, new_name: String },
    FileExists { file_name: String },
    MakeDirectory { file_name: String },
    ChangeDirectory { file_name: String },
    GetDirectoryItemByIndex {
        directory: String,
        length: u32,
        include_extension: i32,
        index: i32,
    },
    GetVolumeInfo,
    RemoveFileOrDirectory { file_name: String },

    // UI / events
    GetEventData,
    HasEvent,

    // Panels and controls
    AddPanel {
        index: i32,
        visible: i32,
        in_rotation: i32,
        use_tile: i32,
        tile_id: i32,
        bg_red: i32,
        bg_green: i32,
        bg_blue: i32,
        show_menu: i32,
    },
    AddPanelPickList {
        index: i32,
        caption: String,
        tile_id: i32,
        icon_id: i32,
        back_red: u8,
        back_green: u8,
        back_blue: u32,
        fore_red: u8,
        fore_green: u8,
        fore_blue: u32,
        log_index: i32,
    },
    SetPanelMenuText {
        panel: i32,
        button_gray_from_zero: i32,
        message: String,
    },
    AddControlLed {
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        color: PanelLedColor,
        size: PanelLedSize,
        initial_state: i32,
    },
    SetListItemText {
        log_index: i32,
        list_index: i32,
        text: String,
    },
    ClearLogOrPlotData {
        log_index_plus_one: i32,
        plot_index_plus_one: i32,
    },
    AddControlLogList {
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
    },
    AddControlPlotXAxis {
        panel: i32,
        control: i32,
        scroll_mode: i32,
        time_min: u64,
        time_max: u64,
    },
    AddControlPlotData {
        plot_data_index: i32,
        red: i32,
        green: i32,
        blue: i32,
    },
    AddControlPlot {
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
    },
    AddControlNumber {
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
    },
    AddControlPicture {
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        picture_id: i32,
        visible: i32,
    },
    AddControlText {
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        font_type: i32,
        font_size: i32,
        red: i32,
        green: i32,
        blue: i32,
        text: String,
    },
    AddControlBargraph {
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
    },
    AddControlButton {
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
        text: String,
    },
    SetControlValueMinMax {
        panel: i32,
        control: i32,
        enable: i32,
        min: i32,
        max: i32,
    },
    SetControlValueMinMaxF {
        panel: i32,
        control: i32,
        enable: i32,
        min: f32,
        max: f32,
    },
    SetLogDataText { log_index: i32, text: String },
    SetPlotData {
        plot_data: i32,
        settings: i32,
        new_value: i32,
    },
    SetControlValue {
        panel: i32,
        control: i32,
        new_value: i32,
    },
    SetControlValueFloat {
        panel: i32,
        control: i32,
        new_value: f32,
    },
    ExitToMainAppMenu,
    ShowPanel { index: i32 },
    AddControlPictureFromFile {
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        file_name: String,
        visible: i32,
    },

    // Debug print
    PrintInt {
        format_spec: String,
        color: PrintColor,
        data_type: PrintDataType,
        value: i32,
    },
    PrintFloat {
        format_spec: String,
        color: PrintColor,
        value: f32,
    },

    // Sensors
    SetAudioSettings {
        stream_mic: i32,
        stream_fft: i32,
        enable_mic_plot: i32,
        mic_plot_index: i32,
        enable_fft_plot: i32,
        fft_plot_index: i32,
    },
    SetSensorSettings {
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
    },
    SetAppLogSettings {
        log_ir_codes: i32,
        log_accel: i32,
        log_temp_c: i32,
        log_temp_f: i32,
        log_index: i32,
    },

    // FPGA
    LoadFpgaFromFile { file_name: String },

    // Zoom IO
    RunZoomIoScript { script: String },

    // RTC
    GetRtc,

    // Dialogs
    ShowDialogMsgBox {
        message: String,
        show_ok: i32,
        show_ok_cancel: i32,
        show_yes_no: i32,
        picture_index: i32,
        auto_close_half_sec: i32,
    },
    ShowDialogProgressBar {
        message: String,
        picture_index: i32,
        value: i32,
        show_ok_to_close: i32,
    },
    ShowDialogNumEdit {
        message: String,
        unsigned_format: i32,
        hex_format: i32,
        use_min_max: i32,
        initial_value: i32,
        minimum: i32,
        maximum: i32,
    },
    ShowDialogNumEditFloat {
        message: String,
        digits: i32,
        use_min_max: i32,
        initial_value: f32,
        minimum: i32,
        maximum: i32,
    },
    ShowDialogTextEdit {
        message: String,
        initial_value: String,
    },
    ShowDialogPickList {
        message: String,
        log_index: i32,
        default_item: i32,
    },
}

/// Reply shapes on the surface.
///
/// Flat by contract: callers cannot distinguish "invalid argument" from
/// "hardware busy"; a zero status is all they get.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostReply {
    /// No value; the call is assumed to have succeeded or failed silently
    Unit,
    /// Flat status (1/0), count, handle, or signed measurement
    Int(i32),
    /// Unsigned word (pin states, milliseconds)
    Uint(u32),
    /// Produced bytes plus the flat status or count
    Bytes { status: i32, data: Vec<u8> },
    /// Volume info pair
    Volume { free: i32, total: i32 },
    /// Dequeued event record: type code (or -1 for none) plus payload
    Event { event_type: i32, data: Vec<u8> },
}

impl HostCall {
    /// Returns the wire-level import symbol for this call.
    pub fn symbol(&self) -> &'static str {
        use HostCall::*;
        match self {
            WaitMs { .. } => "waitms",
            Rand => "wilirand",
            Millis => "millis",
            SetIo { .. } => "setIO",
            GetIo { .. } => "getIO",
            GetAllIo => "getAllIO",
            I2cRead { .. } => "i2cRead",
            I2cWrite { .. } => "i2cWrite",
            SpiReadWrite { .. } => "SPIReadWrite",
            UartRxCount => "UARTDataRxCount",
            UartRead { .. } => "UARTDataRead",
            UartWrite { .. } => "UARTDataWrite",
            PwmSetFreqDuty { .. } => "PWMSetFreqDuty",
            PwmStop { .. } => "PWMStop",
            RadioWrite { .. } => "RadioWrite",
            RadioRead { .. } => "RadioRead",
            RadioRxCount { .. } => "RadioGetRxCount",
            RadioLoadConfig { .. } => "RadioLoadConfig",
            RadioTxSubFile { .. } => "RadioTxSubFile",
            RadioSetTx { .. } => "RadioSetTx",
            RadioSetRx { .. } => "RadioSetRx",
            RadioSetIdle { .. } => "RadioSetIdle",
            RadioRssi { .. } => "RadioGetRSSI",
            RadioLqi { .. } => "RadioGetLQI",
            RadioSubFileIsTransmitting => "RadioSubFileIsTransmitting",
            RadioSubFileStop => "RadioSubFileStop",
            SendIrData { .. } => "sendIRData",
            SetBoardLed { .. } => "setBoardLED",
            SetLedShowMode { .. } => "setLEDShowMode",
            PlaySoundFromFile { .. } => "playSoundFromFile",
            PlaySoundFromNameOrId { .. } => "playSoundFromNameOrID",
            PlaySoundFromNumber { .. } => "playSoundFromNumber",
            PlaySoundFromFrequency { .. } => "playSoundFromFrequencyAndDuration",
            OpenFile { .. } => "OpenFile",
            CloseFile { .. } => "closeFile",
            WriteFile { .. } => "writeFile",
            PreAllocateSpaceForFile { .. } => "preAllocateSpaceForFile",
            ReadFile { .. } => "readFile",
            ReadFileLine { .. } => "readFileLine",
            SetFilePosition { .. } => "setFilePosition",
            GetFilePosition { .. } => "getFilePosition",
            GetFileSize { .. } => "getFileSize",
            RenameFileOrDirectory { .. } => "renameFileOrDirectory",
            FileExists { .. } => "fileExists",
            MakeDirectory { .. } => "makeDirectory",
            ChangeDirectory { .. } => "changeDirectory",
            GetDirectoryItemByIndex { .. } => "getDirectoryItemByIndex",
            GetVolumeInfo => "getVolumeInfo",
            RemoveFileOrDirectory { .. } => "removeFileOrDirectory",
            GetEventData => "getEventData",
            HasEvent => "hasEvent",
            AddPanel { .. } => "addPanel",
            AddPanelPickList { .. } => "addPanelPickList",
            SetPanelMenuText { .. } => "setPanelMenuText",
            AddControlLed { .. } => "addControlLED",
            SetListItemText { .. } => "setListItemText",
            ClearLogOrPlotData { .. } => "clearLogOrPlotData",
            AddControlLogList { .. } => "addControlLogList",
            AddControlPlotXAxis { .. } => "addControlPlotXAxis",
            AddControlPlotData { .. } => "addControlPlotData",
            AddControlPlot { .. } => "addControlPlot",
            AddControlNumber { .. } => "addControlNumber",
            AddControlPicture { .. } => "addControlPicture",
            AddControlText { .. } => "addControlText",
            AddControlBargraph { .. } => "addControlBargraph",
            AddControlButton { .. } => "addControlButton",
            SetControlValueMinMax { .. } => "setControlValueMinMax",
            SetControlValueMinMaxF { .. } => "setControlValueMinMaxF",
            SetLogDataText { .. } => "setLogDataText",
            SetPlotData { .. } => "setPlotData",
            SetControlValue { .. } => "setControlValue",
            SetControlValueFloat { .. } => "setControlValueFloat",
            ExitToMainAppMenu => "exitToMainAppMenu",
            ShowPanel { .. } => "showPanel",
            AddControlPictureFromFile { .. } => "addControlPictureFromFile",
            PrintInt { .. } => "printInt",
            PrintFloat { .. } => "printFloat",
            SetAudioSettings { .. } => "setAudioSettings",
            SetSensorSettings { .. } => "setSensorSettings",
            SetAppLogSettings { .. } => "setAppLogSettings",
            LoadFpgaFromFile { .. } => "loadFPGAFromFile",
            RunZoomIoScript { .. } => "runZoomIOScript",
            GetRtc => "getRTC",
            ShowDialogMsgBox { .. } => "showDialogMsgBox",
            ShowDialogProgressBar { .. } => "showDialogProgressBar",
            ShowDialogNumEdit { .. } => "showDialogNumEdit",
            ShowDialogNumEditFloat { .. } => "showDialogNumEditFloat",
            ShowDialogTextEdit { .. } => "showDialogTextEdit",
            ShowDialogPickList { .. } => "showDialogPickList",
        }
    }

    /// Returns the subsystem this call belongs to.
    pub fn subsystem(&self) -> Subsystem {
        use HostCall::*;
        match self {
            WaitMs { .. } | Rand | Millis => Subsystem::General,
            SetIo { .. } | GetIo { .. } | GetAllIo => Subsystem::Gpio,
            I2cRead { .. } | I2cWrite { .. } => Subsystem::I2c,
            SpiReadWrite { .. } => Subsystem::Spi,
            UartRxCount | UartRead { .. } | UartWrite { .. } => Subsystem::Uart,
            PwmSetFreqDuty { .. } | PwmStop { .. } => Subsystem::Pwm,
            RadioWrite { .. }
            | RadioRead { .. }
            | RadioRxCount { .. }
            | RadioLoadConfig { .. }
            | RadioTxSubFile { .. }
            | RadioSetTx { .. }
            | RadioSetRx { .. }
            | RadioSetIdle { .. }
            | RadioRssi { .. }
            | RadioLqi { .. }
            | RadioSubFileIsTransmitting
            | RadioSubFileStop => Subsystem::Radio,
            SendIrData { .. } => Subsystem::Ir,
            SetBoardLed { .. } | SetLedShowMode { .. } => Subsystem::Leds,
            PlaySoundFromFile { .. }
            | PlaySoundFromNameOrId { .. }
            | PlaySoundFromNumber { .. }
            | PlaySoundFromFrequency { .. } => Subsystem::Sound,
            OpenFile { .. }
            | CloseFile { .. }
            | WriteFile { .. }
            | PreAllocateSpaceForFile { .. }
            | ReadFile { .. }
            | ReadFileLine { .. }
            | SetFilePosition { .. }
            | GetFilePosition { .. }
            | GetFileSize { .. } => Subsystem::FileIo,
            RenameFileOrDirectory { .. }
            | FileExists { .. }
            | MakeDirectory { .. }
            | ChangeDirectory { .. }
            | GetDirectoryItemByIndex { .. }
            | GetVolumeInfo
            | RemoveFileOrDirectory { .. } => Subsystem::FileSystem,
            GetEventData | HasEvent => Subsystem::Ui,
            AddPanel { .. }
            | AddPanelPickList { .. }
            | SetPanelMenuText { .. }
            | AddControlLed { .. }
            | SetListItemText { .. }
            | ClearLogOrPlotData { .. }
            | AddControlLogList { .. }
            | AddControlPlotXAxis { .. }
            | AddControlPlotData { .. }
            | AddControlPlot { .. }
            | AddControlNumber { .. }
            | AddControlPicture { .. }
            | AddControlText { .. }
            | AddControlBargraph { .. }
            | AddControlButton { .. }
            | SetControlValueMinMax { .. }
            | SetControlValueMinMaxF { .. }
            | SetLogDataText { .. }
            | SetPlotData { .. }
            | SetControlValue { .. }
            | SetControlValueFloat { .. }
            | ExitToMainAppMenu
            | ShowPanel { .. }
            | AddControlPictureFromFile { .. } => Subsystem::Panels,
            PrintInt { .. } | PrintFloat { .. } => Subsystem::DebugPrint,
            SetAudioSettings { .. } | SetSensorSettings { .. } | SetAppLogSettings { .. } => {
                Subsystem::Sensors
            }
            LoadFpgaFromFile { .. } => Subsystem::Fpga,
            RunZoomIoScript { .. } => Subsystem::ZoomIo,
            GetRtc => Subsystem::Rtc,
            ShowDialogMsgBox { .. }
            | ShowDialogProgressBar { .. }
            | ShowDialogNumEdit { .. }
            | ShowDialogNumEditFloat { .. }
            | ShowDialogTextEdit { .. }
            | ShowDialogPickList { .. } => Subsystem::Dialogs,
        }
    }

    /// Returns the reply this call produces when the host refuses it.
    ///
    /// Flat failure only: the same shape a hardware failure would produce,
    /// so refusal is indistinguishable from failure on the guest side.
    pub fn denied_reply(&self) -> HostReply {
        use HostCall::*;
        match self {
            // Unsigned-word returns
            Millis | GetIo { .. } | GetAllIo => HostReply::Uint(0),
            // Byte-producing returns
            I2cRead { .. }
            | SpiReadWrite { .. }
            | UartRead { .. }
            | RadioRead { .. }
            | ReadFile { .. }
            | ReadFileLine { .. }
            | GetDirectoryItemByIndex { .. } => HostReply::Bytes {
                status: 0,
                data: Vec::new(),
            },
            GetVolumeInfo => HostReply::Volume { free: 0, total: 0 },
            GetEventData => HostReply::Event {
                event_type: -1,
                data: Vec::new(),
            },
            // Flat integer returns
            Rand
            | I2cWrite { .. }
            | UartRxCount
            | UartWrite { .. }
            | PwmSetFreqDuty { .. }
            | PwmStop { .. }
            | RadioWrite { .. }
            | RadioRxCount { .. }
            | RadioLoadConfig { .. }
            | RadioTxSubFile { .. }
            | RadioSetTx { .. }
            | RadioSetRx { .. }
            | RadioSetIdle { .. }
            | RadioRssi { .. }
            | RadioLqi { .. }
            | RadioSubFileIsTransmitting
            | OpenFile { .. }
            | CloseFile { .. }
            | WriteFile { .. }
            | PreAllocateSpaceForFile { .. }
            | SetFilePosition { .. }
            | GetFilePosition { .. }
            | GetFileSize { .. }
            | RenameFileOrDirectory { .. }
            | FileExists { .. }
            | MakeDirectory { .. }
            | ChangeDirectory { .. }
            | RemoveFileOrDirectory { .. }
            | HasEvent
            | LoadFpgaFromFile { .. }
            | RunZoomIoScript { .. } => HostReply::Int(0),
            // Everything else returns nothing
            _ => HostReply::Unit,
        }
    }
}
