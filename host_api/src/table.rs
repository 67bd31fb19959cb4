//! The static import table: the declaration surface itself.
//!
//! Each entry binds a guest-visible operation to its wire-level import
//! symbol, its ordered parameter list, and its return type. Symbol strings
//! and parameter order/count/width are a byte-for-byte contract with the
//! host loader and must not drift; `contract_tests` pins them.
//!
//! Two entries carry no import symbol (`set_list_item_selected`,
//! `set_list_item_top_index`). The source contract declares them without a
//! binding, so they are dispatched locally as no-ops rather than resolved
//! against the host. The inconsistency is preserved deliberately.

use serde::{Deserialize, Serialize};

/// Import namespace the host loader resolves symbols within.
pub const IMPORT_MODULE: &str = "wiliwasm";

/// Subsystem grouping of the flat namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subsystem {
    General,
    Gpio,
    I2c,
    Spi,
    Uart,
    Pwm,
    Radio,
    Ir,
    Leds,
    Sound,
    FileIo,
    FileSystem,
    Ui,
    Panels,
    DebugPrint,
    Sensors,
    Fpga,
    ZoomIo,
    Rtc,
    Dialogs,
}

/// Primitive ABI types appearing in import signatures.
///
/// Buffer parameters subsume the pointer only; an explicit length argument
/// that follows or precedes a buffer in the C-level signature is listed as
/// its own entry so argument order and count are preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiType {
    /// Signed 32-bit integer
    I32,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// 32-bit float
    F32,
    /// Unsigned 8-bit integer
    U8,
    /// Single character
    Char,
    /// NUL-terminated string pointer
    Str,
    /// Caller-supplied buffer the host reads from
    BufIn,
    /// Caller-supplied buffer the host writes into
    BufOut,
    /// Explicit buffer length argument
    Len,
    /// Pointer to a length: capacity on entry, bytes produced on exit
    LenInOut,
    /// Pointer to a 32-bit integer the host writes
    I32Out,
    /// No value
    Unit,
}

/// One entry of the import table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportDescriptor {
    /// Operation name on this side of the surface
    pub name: &'static str,
    /// Wire-level import symbol, if the entry is bound to the host
    pub symbol: Option<&'static str>,
    /// Ordered parameter types
    pub params: &'static [AbiType],
    /// Return type
    pub ret: AbiType,
    /// Subsystem the operation belongs to
    pub subsystem: Subsystem,
}

macro_rules! entry {
    ($name:literal, $symbol:expr, [$($param:ident),*], $ret:ident, $subsystem:ident) => {
        ImportDescriptor {
            name: $name,
            symbol: $symbol,
            params: &[$(AbiType::$param),*],
            ret: AbiType::$ret,
            subsystem: Subsystem::$subsystem,
        }
    };
}

/// The complete declaration surface, in declared order.
pub const IMPORT_TABLE: &[ImportDescriptor] = &[
    // General
    entry!("waitms", Some("waitms"), [I32], Unit, General),
    entry!("rand", Some("wilirand"), [], I32, General),
    entry!("millis", Some("millis"), [], U32, General),
    // GPIO
    entry!("set_io", Some("setIO"), [I32, I32], Unit, Gpio),
    entry!("get_io", Some("getIO"), [I32], U32, Gpio),
    entry!("get_all_io", Some("getAllIO"), [], U32, Gpio),
    // I2C
    entry!("i2c_read", Some("i2cRead"), [I32, I32, BufOut, Len], I32, I2c),
    entry!("i2c_write", Some("i2cWrite"), [I32, I32, BufIn, Len], I32, I2c),
    // SPI
    entry!("spi_read_write", Some("SPIReadWrite"), [BufIn, Len, BufOut], I32, Spi),
    // UART
    entry!("uart_rx_count", Some("UARTDataRxCount"), [], I32, Uart),
    entry!("uart_read", Some("UARTDataRead"), [BufOut, Len], I32, Uart),
    entry!("uart_write", Some("UARTDataWrite"), [BufIn, Len], I32, Uart),
    // PWM
    entry!("pwm_set_freq_duty", Some("PWMSetFreqDuty"), [I32, F32, F32], I32, Pwm),
    entry!("pwm_stop", Some("PWMStop"), [I32], I32, Pwm),
    // Radio
    entry!("radio_write", Some("RadioWrite"), [I32, BufIn, Len], I32, Radio),
    entry!("radio_read", Some("RadioRead"), [I32, BufOut, Len], I32, Radio),
    entry!("radio_rx_count", Some("RadioGetRxCount"), [I32], I32, Radio),
    entry!("radio_load_config", Some("RadioLoadConfig"), [I32, BufIn, Len], I32, Radio),
    entry!("radio_tx_sub_file", Some("RadioTxSubFile"), [I32, Str], I32, Radio),
    entry!("radio_set_tx", Some("RadioSetTx"), [I32], I32, Radio),
    entry!("radio_set_rx", Some("RadioSetRx"), [I32], I32, Radio),
    entry!("radio_set_idle", Some("RadioSetIdle"), [I32], I32, Radio),
    entry!("radio_rssi", Some("RadioGetRSSI"), [I32], I32, Radio),
    entry!("radio_lqi", Some("RadioGetLQI"), [I32], I32, Radio),
    entry!(
        "radio_sub_file_is_transmitting",
        Some("RadioSubFileIsTransmitting"),
        [],
        I32,
        Radio
    ),
    entry!("radio_sub_file_stop", Some("RadioSubFileStop"), [], Unit, Radio),
    // IR
    entry!("send_ir_data", Some("sendIRData"), [U32], Unit, Ir),
    // LEDs
    entry!(
        "set_board_led",
        Some("setBoardLED"),
        [I32, I32, I32, I32, I32, I32],
        Unit,
        Leds
    ),
    entry!("set_led_show_mode", Some("setLEDShowMode"), [I32], Unit, Leds),
    // Sound
    entry!("play_sound_from_file", Some("playSoundFromFile"), [Str], Unit, Sound),
    entry!(
        "play_sound_from_name_or_id",
        Some("playSoundFromNameOrID"),
        [Str, I32],
        Unit,
        Sound
    ),
    entry!(
        "play_sound_from_number",
        Some("playSoundFromNumber"),
        [I32, I32, F32, I32],
        Unit,
        Sound
    ),
    entry!(
        "play_sound_from_frequency",
        Some("playSoundFromFrequencyAndDuration"),
        [F32, F32, F32, Char],
        Unit,
        Sound
    ),
    // File IO. The open symbol is spelled "OpenFile" in the wire contract
    // while everything else in the group is lowerCamel; preserved as-is.
    entry!("open_file", Some("OpenFile"), [Str, I32], I32, FileIo),
    entry!("close_file", Some("closeFile"), [I32], I32, FileIo),
    entry!("write_file", Some("writeFile"), [I32, BufIn, Len], I32, FileIo),
    entry!(
        "pre_allocate_space_for_file",
        Some("preAllocateSpaceForFile"),
        [I32, I32],
        I32,
        FileIo
    ),
    entry!("read_file", Some("readFile"), [I32, BufOut, LenInOut], I32, FileIo),
    entry!("read_file_line", Some("readFileLine"), [I32, BufOut, LenInOut], I32, FileIo),
    entry!("set_file_position", Some("setFilePosition"), [I32, I32], I32, FileIo),
    entry!("get_file_position", Some("getFilePosition"), [I32], I32, FileIo),
    entry!("get_file_size", Some("getFileSize"), [I32], I32, FileIo),
    // File system
    entry!(
        "rename_file_or_directory",
        Some("renameFileOrDirectory"),
        [Str, Str],
        I32,
        FileSystem
    ),
    entry!("file_exists", Some("fileExists"), [Str], I32, FileSystem),
    entry!("make_directory", Some("makeDirectory"), [Str], I32, FileSystem),
    entry!("change_directory", Some("changeDirectory"), [Str], I32, FileSystem),
    entry!(
        "get_directory_item_by_index",
        Some("getDirectoryItemByIndex"),
        [Str, BufOut, I32, I32],
        I32,
        FileSystem
    ),
    entry!("get_volume_info", Some("getVolumeInfo"), [I32Out, I32Out], Unit, FileSystem),
    entry!(
        "remove_file_or_directory",
        Some("removeFileOrDirectory"),
        [Str],
        I32,
        FileSystem
    ),
    // UI / events
    entry!("get_event_data", Some("getEventData"), [BufOut], I32, Ui),
    entry!("has_event", Some("hasEvent"), [], I32, Ui),
    // Panels and controls
    entry!(
        "add_panel",
        Some("addPanel"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_panel_pick_list",
        Some("addPanelPickList"),
        [I32, Str, I32, I32, U8, U8, U32, U8, U8, U32, I32],
        Unit,
        Panels
    ),
    entry!("set_panel_menu_text", Some("setPanelMenuText"), [I32, I32, Str], Unit, Panels),
    entry!(
        "add_control_led",
        Some("addControlLED"),
        [I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!("set_list_item_text", Some("setListItemText"), [I32, I32, Str], Unit, Panels),
    // Declared without an import binding; local no-ops.
    entry!("set_list_item_selected", None, [I32, I32], Unit, Panels),
    entry!("set_list_item_top_index", None, [I32, I32], Unit, Panels),
    entry!(
        "clear_log_or_plot_data",
        Some("clearLogOrPlotData"),
        [I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_log_list",
        Some("addControlLogList"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_plot_x_axis",
        Some("addControlPlotXAxis"),
        [I32, I32, I32, U64, U64],
        Unit,
        Panels
    ),
    entry!(
        "add_control_plot_data",
        Some("addControlPlotData"),
        [I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_plot",
        Some("addControlPlot"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_number",
        Some("addControlNumber"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_picture",
        Some("addControlPicture"),
        [I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_text",
        Some("addControlText"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, Str],
        Unit,
        Panels
    ),
    entry!(
        "add_control_bargraph",
        Some("addControlBargraph"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "add_control_button",
        Some("addControlButton"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, Str],
        Unit,
        Panels
    ),
    entry!(
        "set_control_value_min_max",
        Some("setControlValueMinMax"),
        [I32, I32, I32, I32, I32],
        Unit,
        Panels
    ),
    entry!(
        "set_control_value_min_max_f",
        Some("setControlValueMinMaxF"),
        [I32, I32, I32, F32, F32],
        Unit,
        Panels
    ),
    entry!("set_log_data_text", Some("setLogDataText"), [I32, Str], Unit, Panels),
    entry!("set_plot_data", Some("setPlotData"), [I32, I32, I32], Unit, Panels),
    entry!("set_control_value", Some("setControlValue"), [I32, I32, I32], Unit, Panels),
    entry!(
        "set_control_value_float",
        Some("setControlValueFloat"),
        [I32, I32, F32],
        Unit,
        Panels
    ),
    entry!("exit_to_main_app_menu", Some("exitToMainAppMenu"), [], Unit, Panels),
    entry!("show_panel", Some("showPanel"), [I32], Unit, Panels),
    entry!(
        "add_control_picture_from_file",
        Some("addControlPictureFromFile"),
        [I32, I32, I32, I32, Str, I32],
        Unit,
        Panels
    ),
    // Debug print
    entry!("print_int", Some("printInt"), [Str, I32, I32, I32], Unit, DebugPrint),
    entry!("print_float", Some("printFloat"), [Str, I32, F32], Unit, DebugPrint),
    // Sensors
    entry!(
        "set_audio_settings",
        Some("setAudioSettings"),
        [I32, I32, I32, I32, I32, I32],
        Unit,
        Sensors
    ),
    entry!(
        "set_sensor_settings",
        Some("setSensorSettings"),
        [I32, I32, I32, I32, I32, I32, I32, I32, I32, I32, I32],
        Unit,
        Sensors
    ),
    entry!(
        "set_app_log_settings",
        Some("setAppLogSettings"),
        [I32, I32, I32, I32, I32],
        Unit,
        Sensors
    ),
    // FPGA
    entry!("load_fpga_from_file", Some("loadFPGAFromFile"), [Str], I32, Fpga),
    // Zoom IO
    entry!("run_zoom_io_script", Some("runZoomIOScript"), [Str], I32, ZoomIo),
    // RTC. The response arrives later as a GuiRtcResponse event.
    entry!("get_rtc", Some("getRTC"), [], Unit, Rtc),
    // Dialogs
    entry!(
        "show_dialog_msg_box",
        Some("showDialogMsgBox"),
        [Str, I32, I32, I32, I32, I32],
        Unit,
        Dialogs
    ),
    entry!(
        "show_dialog_progress_bar",
        Some("showDialogProgressBar"),
        [Str, I32, I32, I32],
        Unit,
        Dialogs
    ),
    entry!(
        "show_dialog_num_edit",
        Some("showDialogNumEdit"),
        [Str, I32, I32, I32, I32, I32, I32],
        Unit,
        Dialogs
    ),
    entry!(
        "show_dialog_num_edit_float",
        Some("showDialogNumEditFloat"),
        [Str, I32, I32, F32, I32, I32],
        Unit,
        Dialogs
    ),
    entry!(
        "show_dialog_text_edit",
        Some("showDialogTextEdit"),
        [Str, Str],
        Unit,
        Dialogs
    ),
    entry!(
        "show_dialog_pick_list",
        Some("showDialogPickList"),
        [Str, I32, I32],
        Unit,
        Dialogs
    ),
];

/// Looks up a table entry by its wire-level import symbol.
pub fn descriptor_for(symbol: &str) -> Option<&'static ImportDescriptor> {
    IMPORT_TABLE
        .iter()
        .find(|entry| entry.symbol == Some(symbol))
}

/// Looks up a table entry by its operation name.
pub fn descriptor_by_name(name: &str) -> Option<&'static ImportDescriptor> {
    IMPORT_TABLE.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(IMPORT_TABLE.len(), 91);
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = HashSet::new();
        for entry in IMPORT_TABLE {
            if let Some(symbol) = entry.symbol {
                assert!(seen.insert(symbol), "duplicate import symbol: {}", symbol);
            }
        }
        assert_eq!(seen.len(), 89);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in IMPORT_TABLE {
            assert!(seen.insert(entry.name), "duplicate operation name: {}", entry.name);
        }
    }

    #[test]
    fn test_unbound_entries() {
        let unbound: Vec<&str> = IMPORT_TABLE
            .iter()
            .filter(|entry| entry.symbol.is_none())
            .map(|entry| entry.name)
            .collect();
        assert_eq!(unbound, ["set_list_item_selected", "set_list_item_top_index"]);
    }

    #[test]
    fn test_open_file_symbol_spelling() {
        let entry = descriptor_by_name("open_file").unwrap();
        assert_eq!(entry.symbol, Some("OpenFile"));
    }

    #[test]
    fn test_descriptor_lookup_by_symbol() {
        let entry = descriptor_for("setIO").unwrap();
        assert_eq!(entry.name, "set_io");
        assert_eq!(entry.params, &[AbiType::I32, AbiType::I32]);
        assert_eq!(entry.ret, AbiType::Unit);
        assert_eq!(entry.subsystem, Subsystem::Gpio);
        assert!(descriptor_for("noSuchImport").is_none());
    }

    #[test]
    fn test_event_poll_signature() {
        let entry = descriptor_for("getEventData").unwrap();
        assert_eq!(entry.params, &[AbiType::BufOut]);
        assert_eq!(entry.ret, AbiType::I32);
        assert_eq!(entry.subsystem, Subsystem::Ui);
    }

    #[test]
    fn test_uart_write_returns_length() {
        // UARTDataWrite returns the written length, not a flag; the table
        // keeps it as a plain I32 like every count-returning entry.
        let entry = descriptor_for("UARTDataWrite").unwrap();
        assert_eq!(entry.ret, AbiType::I32);
    }

    #[test]
    fn test_subsystem_counts() {
        let count = |subsystem: Subsystem| {
            IMPORT_TABLE
                .iter()
                .filter(|entry| entry.subsystem == subsystem)
                .count()
        };
        assert_eq!(count(Subsystem::General), 3);
        assert_eq!(count(Subsystem::Gpio), 3);
        assert_eq!(count(Subsystem::I2c), 2);
        assert_eq!(count(Subsystem::Spi), 1);
        assert_eq!(count(Subsystem::Uart), 3);
        assert_eq!(count(Subsystem::Pwm), 2);
        assert_eq!(count(Subsystem::Radio), 12);
        assert_eq!(count(Subsystem::Ir), 1);
        assert_eq!(count(Subsystem::Leds), 2);
        assert_eq!(count(Subsystem::Sound), 4);
        assert_eq!(count(Subsystem::FileIo), 9);
        assert_eq!(count(Subsystem::FileSystem), 7);
        assert_eq!(count(Subsystem::Ui), 2);
        assert_eq!(count(Subsystem::Panels), 26);
        assert_eq!(count(Subsystem::DebugPrint), 2);
        assert_eq!(count(Subsystem::Sensors), 3);
        assert_eq!(count(Subsystem::Fpga), 1);
        assert_eq!(count(Subsystem::ZoomIo), 1);
        assert_eq!(count(Subsystem::Rtc), 1);
        assert_eq!(count(Subsystem::Dialogs), 6);
    }
}
