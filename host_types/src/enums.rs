//! Closed enumerations that cross the boundary as raw integers.
//!
//! Discriminants follow declared order and are part of the wire contract.
//! `from_raw` is total over `i32` and rejects anything outside the set;
//! no behavior is attached to any of these types.

use serde::{Deserialize, Serialize};

/// Number of event type codes, including the overflow marker.
pub const EVENT_TYPE_COUNT: i32 = 24;

/// Tag carried by every record read from the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum GuiEventType {
    /// Gray hardware button press
    GrayButton = 0,
    /// Yellow hardware button press
    YellowButton = 1,
    /// Green hardware button press
    GreenButton = 2,
    /// Blue hardware button press
    BlueButton = 3,
    /// Red hardware button press
    RedButton = 4,
    /// Received IR code
    IrCode = 5,
    /// On-panel button control activated
    GuiButton = 6,
    /// Numeric edit dialog result
    GuiNumEdit = 7,
    /// Text edit dialog result
    GuiTextEdit = 8,
    /// Streamed audio samples
    GuiAudioData = 9,
    /// Streamed FFT bins
    GuiFftData = 10,
    /// Deferred I2C response
    GuiI2cResponse = 11,
    /// The event queue overflowed; records were dropped
    EventFifoOverflow = 12,
    /// RTC read response
    GuiRtcResponse = 13,
    /// Streamed sensor sample
    GuiSensorData = 14,
    /// Main application selected
    MainAppSel = 15,
    /// A panel became visible
    PanelShow = 16,
    /// Pick list selection made
    PicklistSel = 17,
    /// A panel was hidden
    PanelHide = 18,
    /// The main menu was shown
    MainMenuShown = 19,
    /// Script started
    Started = 20,
    /// Statistics cleared
    ClrStats = 21,
    /// Dialog confirmed or dismissed
    DialogAction = 22,
    /// Guest-side overflow
    WasmOverflow = 23,
}

impl GuiEventType {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use GuiEventType::*;
        Some(match raw {
            0 => GrayButton,
            1 => YellowButton,
            2 => GreenButton,
            3 => BlueButton,
            4 => RedButton,
            5 => IrCode,
            6 => GuiButton,
            7 => GuiNumEdit,
            8 => GuiTextEdit,
            9 => GuiAudioData,
            10 => GuiFftData,
            11 => GuiI2cResponse,
            12 => EventFifoOverflow,
            13 => GuiRtcResponse,
            14 => GuiSensorData,
            15 => MainAppSel,
            16 => PanelShow,
            17 => PicklistSel,
            18 => PanelHide,
            19 => MainMenuShown,
            20 => Started,
            21 => ClrStats,
            22 => DialogAction,
            23 => WasmOverflow,
            _ => return None,
        })
    }
}

/// Display mode for the tri-color board LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum LedMode {
    SimpleValue = 0,
    Flash = 1,
    Pulse = 2,
    FlashFade = 3,
    PulseFade = 4,
}

impl LedMode {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use LedMode::*;
        Some(match raw {
            0 => SimpleValue,
            1 => Flash,
            2 => Pulse,
            3 => FlashFade,
            4 => PulseFade,
            _ => return None,
        })
    }
}

/// Color of an LED control placed on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PanelLedColor {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
    Orange = 4,
    Aqua = 5,
    Magenta = 6,
    White = 7,
}

impl PanelLedColor {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use PanelLedColor::*;
        Some(match raw {
            0 => Red,
            1 => Green,
            2 => Yellow,
            3 => Blue,
            4 => Orange,
            5 => Aqua,
            6 => Magenta,
            7 => White,
            _ => return None,
        })
    }
}

/// Size of an LED control placed on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PanelLedSize {
    Size32 = 0,
    Size48 = 1,
    Size64 = 2,
}

impl PanelLedSize {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use PanelLedSize::*;
        Some(match raw {
            0 => Size32,
            1 => Size48,
            2 => Size64,
            _ => return None,
        })
    }
}

/// Width of the value passed to the debug print channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PrintDataType {
    Int32 = 0,
    UInt32 = 1,
    Int16 = 2,
    UInt16 = 3,
    UInt8 = 4,
    Int8 = 5,
    Char = 6,
    Bool = 7,
}

impl PrintDataType {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use PrintDataType::*;
        Some(match raw {
            0 => Int32,
            1 => UInt32,
            2 => Int16,
            3 => UInt16,
            4 => UInt8,
            5 => Int8,
            6 => Char,
            7 => Bool,
            _ => return None,
        })
    }
}

/// Color used on the debug print channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PrintColor {
    Normal = 0,
    Black = 1,
    Blue = 2,
    Green = 3,
    Cyan = 4,
    Red = 5,
    Purple = 6,
    Brown = 7,
    Yellow = 8,
    White = 9,
}

impl PrintColor {
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        use PrintColor::*;
        Some(match raw {
            0 => Normal,
            1 => Black,
            2 => Blue,
            3 => Green,
            4 => Cyan,
            5 => Red,
            6 => Purple,
            7 => Brown,
            8 => Yellow,
            9 => White,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_discriminants_are_stable() {
        // Raw values are wire contract; declared order, starting at zero.
        let expected = [
            (GuiEventType::GrayButton, 0),
            (GuiEventType::YellowButton, 1),
            (GuiEventType::GreenButton, 2),
            (GuiEventType::BlueButton, 3),
            (GuiEventType::RedButton, 4),
            (GuiEventType::IrCode, 5),
            (GuiEventType::GuiButton, 6),
            (GuiEventType::GuiNumEdit, 7),
            (GuiEventType::GuiTextEdit, 8),
            (GuiEventType::GuiAudioData, 9),
            (GuiEventType::GuiFftData, 10),
            (GuiEventType::GuiI2cResponse, 11),
            (GuiEventType::EventFifoOverflow, 12),
            (GuiEventType::GuiRtcResponse, 13),
            (GuiEventType::GuiSensorData, 14),
            (GuiEventType::MainAppSel, 15),
            (GuiEventType::PanelShow, 16),
            (GuiEventType::PicklistSel, 17),
            (GuiEventType::PanelHide, 18),
            (GuiEventType::MainMenuShown, 19),
            (GuiEventType::Started, 20),
            (GuiEventType::ClrStats, 21),
            (GuiEventType::DialogAction, 22),
            (GuiEventType::WasmOverflow, 23),
        ];
        assert_eq!(expected.len() as i32, EVENT_TYPE_COUNT);
        for (value, raw) in expected {
            assert_eq!(value.as_raw(), raw);
            assert_eq!(GuiEventType::from_raw(raw), Some(value));
        }
        assert_eq!(GuiEventType::from_raw(EVENT_TYPE_COUNT), None);
        assert_eq!(GuiEventType::from_raw(-1), None);
    }

    #[test]
    fn test_led_mode_discriminants() {
        assert_eq!(LedMode::SimpleValue.as_raw(), 0);
        assert_eq!(LedMode::Flash.as_raw(), 1);
        assert_eq!(LedMode::Pulse.as_raw(), 2);
        assert_eq!(LedMode::FlashFade.as_raw(), 3);
        assert_eq!(LedMode::PulseFade.as_raw(), 4);
        assert_eq!(LedMode::from_raw(5), None);
    }

    #[test]
    fn test_panel_led_color_discriminants() {
        assert_eq!(PanelLedColor::Red.as_raw(), 0);
        assert_eq!(PanelLedColor::White.as_raw(), 7);
        assert_eq!(PanelLedColor::from_raw(4), Some(PanelLedColor::Orange));
        assert_eq!(PanelLedColor::from_raw(8), None);
    }

    #[test]
    fn test_panel_led_size_discriminants() {
        assert_eq!(PanelLedSize::Size32.as_raw(), 0);
        assert_eq!(PanelLedSize::Size48.as_raw(), 1);
        assert_eq!(PanelLedSize::Size64.as_raw(), 2);
        assert_eq!(PanelLedSize::from_raw(3), None);
    }

    #[test]
    fn test_print_data_type_discriminants() {
        assert_eq!(PrintDataType::Int32.as_raw(), 0);
        assert_eq!(PrintDataType::UInt8.as_raw(), 4);
        assert_eq!(PrintDataType::Bool.as_raw(), 7);
        assert_eq!(PrintDataType::from_raw(6), Some(PrintDataType::Char));
        assert_eq!(PrintDataType::from_raw(8), None);
    }

    #[test]
    fn test_print_color_discriminants() {
        assert_eq!(PrintColor::Normal.as_raw(), 0);
        assert_eq!(PrintColor::Cyan.as_raw(), 4);
        assert_eq!(PrintColor::White.as_raw(), 9);
        assert_eq!(PrintColor::from_raw(10), None);
    }

    #[test]
    fn test_from_raw_round_trip() {
        for raw in 0..EVENT_TYPE_COUNT {
            let value = GuiEventType::from_raw(raw).expect("value in range");
            assert_eq!(value.as_raw(), raw);
        }
    }
}
