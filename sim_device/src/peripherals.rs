//! Fire-and-forget peripherals.
//!
//! None of these return values on the call surface; their observable
//! behavior is either captured state a test can inspect or a record queued
//! back through the event FIFO (IR loopback, RTC response, dialog answers).

use crate::events::EventQueue;
use host_types::{EventRecord, GuiEventType, LedMode, PrintColor, PrintDataType, EVENT_DATA_MAX};
use std::collections::{HashMap, VecDeque};

/// Last command applied to one board LED.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedCommand {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub duration_ms: i32,
    pub mode: LedMode,
}

#[derive(Debug, Default)]
pub struct BoardLeds {
    leds: HashMap<i32, LedCommand>,
    show_mode: i32,
}

impl BoardLeds {
    pub fn set(&mut self, led_index: i32, command: LedCommand) {
        self.leds.insert(led_index, command);
    }

    pub fn set_show_mode(&mut self, mode: i32) {
        self.show_mode = mode;
    }

    pub fn get(&self, led_index: i32) -> Option<LedCommand> {
        self.leds.get(&led_index).copied()
    }

    pub fn show_mode(&self) -> i32 {
        self.show_mode
    }
}

/// IR transmitter with optional loopback into the receiver.
#[derive(Debug, Default)]
pub struct IrPort {
    sent: Vec<u32>,
    loopback: bool,
}

impl IrPort {
    pub fn set_loopback(&mut self, enabled: bool) {
        self.loopback = enabled;
    }

    /// Transmits a code; with loopback on, the receiver reports it back
    /// as an event.
    pub fn send(&mut self, code: u32, events: &mut EventQueue) {
        self.sent.push(code);
        if self.loopback {
            events.push(EventRecord::ir_code(code));
        }
    }

    /// Simulates an external remote; always heard.
    pub fn receive(&mut self, code: u32, events: &mut EventQueue) {
        events.push(EventRecord::ir_code(code));
    }

    pub fn sent(&self) -> &[u32] {
        &self.sent
    }
}

/// One request made of the sound engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SoundCommand {
    File { file_name: String },
    NameOrId { name: String, id: i32 },
    Number { is_float: bool, int_value: i32, float_value: f32, float_digits: i32 },
    Tone { frequency: f32, duration: f32, amplitude: f32, wavetype: u8 },
}

#[derive(Debug, Default)]
pub struct SoundPlayer {
    played: Vec<SoundCommand>,
}

impl SoundPlayer {
    pub fn play(&mut self, command: SoundCommand) {
        self.played.push(command);
    }

    pub fn played(&self) -> &[SoundCommand] {
        &self.played
    }
}

/// Captured streaming configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AudioSettings {
    pub stream_mic: bool,
    pub stream_fft: bool,
    pub enable_mic_plot: bool,
    pub mic_plot_index: i32,
    pub enable_fft_plot: bool,
    pub fft_plot_index: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSettings {
    pub stream_accel: bool,
    pub stream_temp: bool,
    pub rate_milliseconds: i32,
    pub enable_accel_x_plot: bool,
    pub accel_x_plot_index: i32,
    pub enable_accel_y_plot: bool,
    pub accel_y_plot_index: i32,
    pub enable_accel_z_plot: bool,
    pub accel_z_plot_index: i32,
    pub enable_temp_plot: bool,
    pub temp_plot_index: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AppLogSettings {
    pub log_ir_codes: bool,
    pub log_accel: bool,
    pub log_temp_c: bool,
    pub log_temp_f: bool,
    pub log_index: i32,
}

/// Sensor streaming switchboard; settings are captured, streaming itself
/// is driven by tests pushing sample events.
#[derive(Debug, Default)]
pub struct SensorHub {
    pub audio: AudioSettings,
    pub sensors: SensorSettings,
    pub app_log: AppLogSettings,
}

#[derive(Debug, Default)]
pub struct Fpga {
    loaded: Option<String>,
}

impl Fpga {
    /// Records the loaded bitstream; the caller has already checked the
    /// file exists.
    pub fn load(&mut self, file_name: &str) {
        self.loaded = Some(file_name.to_string());
    }

    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct ZoomIo {
    scripts: Vec<String>,
}

impl ZoomIo {
    pub fn run(&mut self, script: &str) -> i32 {
        if script.is_empty() {
            return 0;
        }
        self.scripts.push(script.to_string());
        1
    }

    pub fn ran(&self) -> &[String] {
        &self.scripts
    }
}

/// Wall-clock time reported by the RTC response event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtcTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Default for RtcTime {
    fn default() -> Self {
        Self {
            year: 2020,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl RtcTime {
    /// Payload layout: year little-endian, then month through second.
    pub fn to_payload(self) -> [u8; 7] {
        let year = self.year.to_le_bytes();
        [
            year[0],
            year[1],
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
    }

    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() < 7 {
            return None;
        }
        Some(Self {
            year: u16::from_le_bytes([payload[0], payload[1]]),
            month: payload[2],
            day: payload[3],
            hour: payload[4],
            minute: payload[5],
            second: payload[6],
        })
    }
}

/// RTC answering reads through the event queue.
#[derive(Debug, Default)]
pub struct Rtc {
    time: RtcTime,
}

impl Rtc {
    pub fn set_time(&mut self, time: RtcTime) {
        self.time = time;
    }

    pub fn request(&self, events: &mut EventQueue) {
        events.push(EventRecord::with_payload(
            GuiEventType::GuiRtcResponse,
            &self.time.to_payload(),
        ));
    }
}

/// One dialog the device was asked to show.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogRequest {
    MsgBox { message: String },
    ProgressBar { message: String, value: i32 },
    NumEdit { message: String, initial_value: i32 },
    NumEditFloat { message: String, initial_value: f32 },
    TextEdit { message: String, initial_value: String },
    PickList { message: String, log_index: i32, default_item: i32 },
}

/// Modal dialogs answered through the event queue.
///
/// Tests can stage an answer; otherwise the default user confirms every
/// dialog with its initial value. A progress bar is not modal and never
/// answers.
#[derive(Debug, Default)]
pub struct DialogHost {
    shown: Vec<DialogRequest>,
    staged: VecDeque<EventRecord>,
}

impl DialogHost {
    /// Stages the answer event the next modal dialog will produce.
    pub fn stage_answer(&mut self, answer: EventRecord) {
        self.staged.push_back(answer);
    }

    pub fn shown(&self) -> &[DialogRequest] {
        &self.shown
    }

    fn answer(&mut self, default: EventRecord, events: &mut EventQueue) {
        events.push(self.staged.pop_front().unwrap_or(default));
    }

    pub fn msg_box(&mut self, message: &str, events: &mut EventQueue) {
        self.shown.push(DialogRequest::MsgBox {
            message: message.to_string(),
        });
        self.answer(EventRecord::int(GuiEventType::DialogAction, 1), events);
    }

    pub fn progress_bar(&mut self, message: &str, value: i32) {
        self.shown.push(DialogRequest::ProgressBar {
            message: message.to_string(),
            value,
        });
    }

    pub fn num_edit(&mut self, message: &str, initial_value: i32, events: &mut EventQueue) {
        self.shown.push(DialogRequest::NumEdit {
            message: message.to_string(),
            initial_value,
        });
        self.answer(
            EventRecord::int(GuiEventType::GuiNumEdit, initial_value),
            events,
        );
    }

    pub fn num_edit_float(&mut self, message: &str, initial_value: f32, events: &mut EventQueue) {
        self.shown.push(DialogRequest::NumEditFloat {
            message: message.to_string(),
            initial_value,
        });
        self.answer(
            EventRecord::float(GuiEventType::GuiNumEdit, initial_value),
            events,
        );
    }

    pub fn text_edit(&mut self, message: &str, initial_value: &str, events: &mut EventQueue) {
        self.shown.push(DialogRequest::TextEdit {
            message: message.to_string(),
            initial_value: initial_value.to_string(),
        });
        self.answer(
            EventRecord::with_payload(GuiEventType::GuiTextEdit, initial_value.as_bytes()),
            events,
        );
    }

    pub fn pick_list(
        &mut self,
        message: &str,
        log_index: i32,
        default_item: i32,
        events: &mut EventQueue,
    ) {
        self.shown.push(DialogRequest::PickList {
            message: message.to_string(),
            log_index,
            default_item,
        });
        self.answer(
            EventRecord::int(GuiEventType::PicklistSel, default_item),
            events,
        );
    }
}

/// One line sent to the debug console.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintValue {
    Int {
        data_type: PrintDataType,
        value: i32,
    },
    Float(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintRecord {
    pub format_spec: String,
    pub color: PrintColor,
    pub value: PrintValue,
}

/// Capture-only debug console.
#[derive(Debug, Default)]
pub struct DebugConsole {
    lines: Vec<PrintRecord>,
}

impl DebugConsole {
    pub fn print(&mut self, record: PrintRecord) {
        self.lines.push(record);
    }

    pub fn lines(&self) -> &[PrintRecord] {
        &self.lines
    }
}
