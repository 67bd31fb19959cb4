//! The two sub-GHz radio units.
//!
//! Units are addressed 1 and 2 on the call surface. A capture-file
//! transmission is the only asynchronous operation in the device: it
//! occupies a unit for a fixed simulated duration and completes when the
//! clock advances past it.

use std::collections::VecDeque;

/// Lowest valid radio index on the surface.
pub const RADIO_FIRST: i32 = 1;
/// Number of radio units.
pub const RADIO_COUNT: i32 = 2;

/// Simulated airtime of one capture-file transmission, in milliseconds.
pub const SUB_FILE_TX_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioMode {
    Idle,
    Tx,
    Rx,
}

#[derive(Debug)]
struct RadioUnit {
    mode: RadioMode,
    rx: VecDeque<u8>,
    tx_log: Vec<Vec<u8>>,
    config: Option<Vec<u8>>,
    rssi: i32,
    lqi: i32,
}

impl Default for RadioUnit {
    fn default() -> Self {
        Self {
            mode: RadioMode::Idle,
            rx: VecDeque::new(),
            tx_log: Vec::new(),
            config: None,
            rssi: -110,
            lqi: 0,
        }
    }
}

#[derive(Debug)]
struct SubFileTx {
    index: i32,
    file_name: String,
    remaining_ms: u32,
}

/// Both radio units plus the shared capture-file transmitter.
#[derive(Debug, Default)]
pub struct RadioBank {
    units: [RadioUnit; RADIO_COUNT as usize],
    sub_file: Option<SubFileTx>,
}

impl RadioBank {
    pub fn new() -> Self {
        Self::default()
    }

    fn unit(&self, index: i32) -> Option<&RadioUnit> {
        if (RADIO_FIRST..RADIO_FIRST + RADIO_COUNT).contains(&index) {
            Some(&self.units[(index - RADIO_FIRST) as usize])
        } else {
            None
        }
    }

    fn unit_mut(&mut self, index: i32) -> Option<&mut RadioUnit> {
        if (RADIO_FIRST..RADIO_FIRST + RADIO_COUNT).contains(&index) {
            Some(&mut self.units[(index - RADIO_FIRST) as usize])
        } else {
            None
        }
    }

    /// Queues bytes for transmission. The unit must be in transmit mode.
    pub fn write(&mut self, index: i32, data: &[u8]) -> i32 {
        match self.unit_mut(index) {
            Some(unit) if unit.mode == RadioMode::Tx => {
                unit.tx_log.push(data.to_vec());
                1
            }
            _ => 0,
        }
    }

    /// Drains up to `data.len()` received bytes. Returns the count.
    pub fn read(&mut self, index: i32, data: &mut [u8]) -> i32 {
        let Some(unit) = self.unit_mut(index) else {
            return 0;
        };
        let mut n = 0;
        while n < data.len() {
            match unit.rx.pop_front() {
                Some(byte) => {
                    data[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n as i32
    }

    pub fn rx_count(&self, index: i32) -> i32 {
        self.unit(index).map_or(0, |unit| unit.rx.len() as i32)
    }

    /// Loads a register configuration blob.
    pub fn load_config(&mut self, index: i32, data: &[u8]) -> i32 {
        match self.unit_mut(index) {
            Some(unit) if !data.is_empty() => {
                unit.config = Some(data.to_vec());
                1
            }
            _ => 0,
        }
    }

    pub fn set_tx(&mut self, index: i32) -> i32 {
        self.set_mode(index, RadioMode::Tx)
    }

    pub fn set_rx(&mut self, index: i32) -> i32 {
        self.set_mode(index, RadioMode::Rx)
    }

    pub fn set_idle(&mut self, index: i32) -> i32 {
        self.set_mode(index, RadioMode::Idle)
    }

    fn set_mode(&mut self, index: i32, mode: RadioMode) -> i32 {
        match self.unit_mut(index) {
            Some(unit) => {
                unit.mode = mode;
                1
            }
            None => 0,
        }
    }

    pub fn mode(&self, index: i32) -> Option<RadioMode> {
        self.unit(index).map(|unit| unit.mode)
    }

    pub fn rssi(&self, index: i32) -> i32 {
        self.unit(index).map_or(0, |unit| unit.rssi)
    }

    pub fn lqi(&self, index: i32) -> i32 {
        self.unit(index).map_or(0, |unit| unit.lqi)
    }

    /// Starts a capture-file transmission on a unit. Fails while another
    /// transmission is still on the air.
    pub fn start_sub_file_tx(&mut self, index: i32, file_name: &str) -> i32 {
        if self.sub_file.is_some() || file_name.is_empty() {
            return 0;
        }
        match self.unit_mut(index) {
            Some(unit) => {
                unit.mode = RadioMode::Tx;
                self.sub_file = Some(SubFileTx {
                    index,
                    file_name: file_name.to_string(),
                    remaining_ms: SUB_FILE_TX_MS,
                });
                1
            }
            None => 0,
        }
    }

    pub fn sub_file_is_transmitting(&self) -> i32 {
        i32::from(self.sub_file.is_some())
    }

    /// Cancels the in-progress capture-file transmission, if any.
    pub fn stop_sub_file_tx(&mut self) {
        if let Some(tx) = self.sub_file.take() {
            if let Some(unit) = self.unit_mut(tx.index) {
                unit.mode = RadioMode::Idle;
            }
        }
    }

    /// Name of the capture file currently on the air.
    pub fn sub_file_name(&self) -> Option<&str> {
        self.sub_file.as_ref().map(|tx| tx.file_name.as_str())
    }

    /// Advances simulated airtime; a finished transmission idles its unit.
    pub fn advance(&mut self, ms: u32) {
        let done = match self.sub_file.as_mut() {
            Some(tx) => {
                tx.remaining_ms = tx.remaining_ms.saturating_sub(ms);
                tx.remaining_ms == 0
            }
            None => false,
        };
        if done {
            self.stop_sub_file_tx();
        }
    }

    /// Delivers bytes into a unit's receive ring; the unit hears them only
    /// in receive mode.
    pub fn deliver(&mut self, index: i32, data: &[u8], rssi: i32, lqi: i32) {
        if let Some(unit) = self.unit_mut(index) {
            if unit.mode == RadioMode::Rx {
                unit.rx.extend(data.iter().copied());
                unit.rssi = rssi;
                unit.lqi = lqi;
            }
        }
    }

    /// Frames queued for transmission on a unit, oldest first.
    pub fn transmitted(&self, index: i32) -> &[Vec<u8>] {
        self.unit(index).map_or(&[], |unit| unit.tx_log.as_slice())
    }
}
