//! Script SDK: ergonomic wrappers over the raw call surface.
//!
//! The surface itself is flat by contract; this crate adds the Rust
//! niceties on the guest side only. Flat failure values become `Result`,
//! file handles get scoped ownership, and event polling gets a typed
//! loop. Everything here is generic over [`HostApi`], so the same script
//! code runs against the simulated device or a real transport.

use host_api::HostApi;
use host_types::{
    EventRecord, GuiEventType, PrintColor, PrintDataType, EVENT_DATA_MAX, FILE_MODE_APPEND,
    FILE_MODE_READ, FILE_MODE_WRITE,
};
use thiserror::Error;

/// Errors raised by the SDK wrappers.
///
/// The surface only reports flat failure; the symbol name here is added
/// by the wrapper for diagnostics and never comes from the host.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("host call {symbol} failed")]
    CallFailed { symbol: &'static str },

    #[error("file {path} could not be opened")]
    OpenFailed { path: String },
}

fn check(status: i32, symbol: &'static str) -> Result<(), ScriptError> {
    if status != 0 {
        Ok(())
    } else {
        Err(ScriptError::CallFailed { symbol })
    }
}

/// Reads the next pending event, if any.
pub fn poll_event<H: HostApi>(host: &mut H) -> Option<EventRecord> {
    let mut buf = [0u8; EVENT_DATA_MAX];
    let code = host.get_event_data(&mut buf);
    let event_type = GuiEventType::from_raw(code)?;
    Some(EventRecord::with_payload(event_type, &buf))
}

/// Polling interval used by [`wait_for_event`], in milliseconds.
const POLL_INTERVAL_MS: i32 = 10;

/// Waits until an event of `wanted` type arrives or `timeout_ms` of
/// simulated time passes. Other events arriving meanwhile are discarded,
/// which matches how scripts drain the queue in a modal wait.
pub fn wait_for_event<H: HostApi>(
    host: &mut H,
    wanted: GuiEventType,
    timeout_ms: u32,
) -> Option<EventRecord> {
    let mut waited: u32 = 0;
    loop {
        while let Some(record) = poll_event(host) {
            if record.event_type() == wanted {
                return Some(record);
            }
        }
        if waited >= timeout_ms {
            return None;
        }
        host.waitms(POLL_INTERVAL_MS);
        waited += POLL_INTERVAL_MS as u32;
    }
}

/// An open file with scoped ownership of its handle.
///
/// Dropping the wrapper closes the handle; explicit [`ScriptFile::close`]
/// reports whether the host accepted the close.
pub struct ScriptFile<'a, H: HostApi> {
    host: &'a mut H,
    handle: i32,
    closed: bool,
}

impl<'a, H: HostApi> ScriptFile<'a, H> {
    fn open_with_mode(host: &'a mut H, path: &str, mode: i32) -> Result<Self, ScriptError> {
        let handle = host.open_file(path, mode);
        if handle == 0 {
            return Err(ScriptError::OpenFailed {
                path: path.to_string(),
            });
        }
        Ok(Self {
            host,
            handle,
            closed: false,
        })
    }

    /// Opens an existing file for reading.
    pub fn open(host: &'a mut H, path: &str) -> Result<Self, ScriptError> {
        Self::open_with_mode(host, path, FILE_MODE_READ)
    }

    /// Creates or truncates a file for writing.
    pub fn create(host: &'a mut H, path: &str) -> Result<Self, ScriptError> {
        Self::open_with_mode(host, path, FILE_MODE_WRITE)
    }

    /// Opens or creates a file positioned at its end.
    pub fn append(host: &'a mut H, path: &str) -> Result<Self, ScriptError> {
        Self::open_with_mode(host, path, FILE_MODE_APPEND)
    }

    pub fn handle(&self) -> i32 {
        self.handle
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        check(self.host.write_file(self.handle, data), "writeFile")
    }

    /// Reads the remainder of the file.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>, ScriptError> {
        let mut out = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let (status, n) = self.host.read_file(self.handle, &mut chunk);
            check(status, "readFile")?;
            if n <= 0 {
                return Ok(out);
            }
            out.extend_from_slice(&chunk[..n as usize]);
        }
    }

    /// Reads the next line as text; `None` at end of file.
    pub fn read_line(&mut self) -> Option<String> {
        let mut chunk = [0u8; 256];
        let (status, n) = self.host.read_file_line(self.handle, &mut chunk);
        if status == 0 {
            return None;
        }
        Some(String::from_utf8_lossy(&chunk[..n.max(0) as usize]).into_owned())
    }

    pub fn seek(&mut self, position: i32) -> Result<(), ScriptError> {
        check(
            self.host.set_file_position(self.handle, position),
            "setFilePosition",
        )
    }

    pub fn size(&mut self) -> i32 {
        self.host.get_file_size(self.handle)
    }

    /// Closes the handle, reporting whether the host accepted it.
    pub fn close(mut self) -> Result<(), ScriptError> {
        self.closed = true;
        check(self.host.close_file(self.handle), "closeFile")
    }
}

impl<H: HostApi> Drop for ScriptFile<'_, H> {
    fn drop(&mut self) {
        if !self.closed {
            self.host.close_file(self.handle);
        }
    }
}

/// Convenience calls layered on [`HostApi`].
pub trait HostApiExt: HostApi {
    /// Prints a decimal integer to the debug console.
    fn print_number(&mut self, value: i32, color: PrintColor) {
        self.print_int("%d\n", color, PrintDataType::Int32, value);
    }

    /// Prints a float with two digits to the debug console.
    fn print_decimal(&mut self, value: f32, color: PrintColor) {
        self.print_float("%.2f\n", color, value);
    }

    /// Drives a pin high or low as a bool.
    fn set_pin(&mut self, io: i32, high: bool) {
        self.set_io(io, i32::from(high));
    }

    /// Reads a pin as a bool.
    fn pin_is_high(&mut self, io: i32) -> bool {
        self.get_io(io) != 0
    }

    /// Writes a text line to the UART.
    fn uart_write_line(&mut self, line: &str) -> Result<(), ScriptError> {
        let written = self.uart_write(line.as_bytes());
        if written == line.len() as i32 {
            let newline = self.uart_write(b"\n");
            check(newline, "UARTDataWrite")
        } else {
            Err(ScriptError::CallFailed {
                symbol: "UARTDataWrite",
            })
        }
    }
}

impl<H: HostApi> HostApiExt for H {}

#[cfg(test)]
mod tests {
    use super::*;
    use host_types::EventNumber;
    use sim_device::SimulatedDevice;

    #[test]
    fn test_poll_event_decodes_record() {
        let mut device = SimulatedDevice::new();
        assert!(poll_event(&mut device).is_none());

        device.receive_ir(0x20DF_10EF);
        let record = poll_event(&mut device).expect("event pending");
        assert_eq!(record.event_type(), GuiEventType::IrCode);
        assert_eq!(record.as_ir_code(), Some(0x20DF_10EF));
    }

    #[test]
    fn test_wait_for_event_discards_others() {
        let mut device = SimulatedDevice::new();
        device.press_button(GuiEventType::GrayButton);
        device.push_event(EventRecord::int(GuiEventType::GuiNumEdit, 5));

        let record = wait_for_event(&mut device, GuiEventType::GuiNumEdit, 100).unwrap();
        assert_eq!(record.as_number(), Some(EventNumber::Int(5)));
        // The gray button press was consumed along the way.
        assert!(poll_event(&mut device).is_none());
    }

    #[test]
    fn test_wait_for_event_times_out_in_simulated_time() {
        let mut device = SimulatedDevice::new();
        assert!(wait_for_event(&mut device, GuiEventType::RedButton, 50).is_none());
        assert!(device.millis() >= 50);
    }

    #[test]
    fn test_file_round_trip_with_scoped_handle() {
        let mut device = SimulatedDevice::new();
        {
            let mut file = ScriptFile::create(&mut device, "/notes.txt").unwrap();
            file.write_all(b"line one\nline two\n").unwrap();
            file.close().unwrap();
        }

        let mut file = ScriptFile::open(&mut device, "/notes.txt").unwrap();
        assert_eq!(file.read_line().as_deref(), Some("line one"));
        assert_eq!(file.read_line().as_deref(), Some("line two"));
        assert_eq!(file.read_line(), None);

        file.seek(0).unwrap();
        assert_eq!(file.read_to_end().unwrap(), b"line one\nline two\n");
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let mut device = SimulatedDevice::new();
        assert!(matches!(
            ScriptFile::open(&mut device, "/nope.txt"),
            Err(ScriptError::OpenFailed { .. })
        ));
    }

    #[test]
    fn test_drop_closes_handle() {
        let mut device = SimulatedDevice::new();
        let handle;
        {
            let file = ScriptFile::create(&mut device, "/tmp.txt").unwrap();
            handle = file.handle();
        }
        // Handle is dead after the scope; closing again fails.
        assert_eq!(device.close_file(handle), 0);
    }

    #[test]
    fn test_ext_helpers() {
        let mut device = SimulatedDevice::new();
        device.set_pin(4, true);
        assert!(device.pin_is_high(4));

        device.print_number(7, PrintColor::Normal);
        assert_eq!(device.console.lines().len(), 1);

        device.uart_write_line("hello").unwrap();
        assert_eq!(device.uart.transmitted(), b"hello\n");
    }
}
