//! Wired buses: I2C register maps, the SPI port, and the UART.
//!
//! Tests attach I2C devices, preload SPI responses, and feed UART receive
//! bytes; the device under test only sees the flat bus operations.

use std::collections::{HashMap, VecDeque};

const I2C_REGISTER_SPACE: usize = 256;

/// I2C bus with one 256-byte register file per attached address.
#[derive(Debug, Default)]
pub struct I2cBus {
    devices: HashMap<i32, Vec<u8>>,
}

impl I2cBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a device with zeroed registers at `address`.
    pub fn attach_device(&mut self, address: i32) {
        self.devices
            .entry(address)
            .or_insert_with(|| vec![0u8; I2C_REGISTER_SPACE]);
    }

    /// Reads consecutive registers starting at `reg`. Fails for a missing
    /// device or a range falling outside the register file.
    pub fn read(&self, address: i32, reg: i32, data: &mut [u8]) -> i32 {
        let Some(regs) = self.devices.get(&address) else {
            return 0;
        };
        let Some(range) = register_range(reg, data.len()) else {
            return 0;
        };
        data.copy_from_slice(&regs[range]);
        1
    }

    /// Writes consecutive registers starting at `reg`.
    pub fn write(&mut self, address: i32, reg: i32, data: &[u8]) -> i32 {
        let Some(regs) = self.devices.get_mut(&address) else {
            return 0;
        };
        let Some(range) = register_range(reg, data.len()) else {
            return 0;
        };
        regs[range].copy_from_slice(data);
        1
    }
}

fn register_range(reg: i32, len: usize) -> Option<std::ops::Range<usize>> {
    if reg < 0 {
        return None;
    }
    let start = reg as usize;
    let end = start.checked_add(len)?;
    if end > I2C_REGISTER_SPACE {
        return None;
    }
    Some(start..end)
}

/// SPI port answering transfers from a preloaded response queue.
#[derive(Debug, Default)]
pub struct SpiPort {
    responses: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
}

impl SpiPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the bytes the next transfer will shift in.
    pub fn queue_response(&mut self, response: &[u8]) {
        self.responses.push_back(response.to_vec());
    }

    /// Full-duplex transfer. Without a queued response the input is
    /// echoed back, which matches an unconnected loopback jumper.
    pub fn transfer(&mut self, data_in: &[u8], data_out: &mut [u8]) -> i32 {
        self.sent.push(data_in.to_vec());
        match self.responses.pop_front() {
            Some(response) => {
                let n = response.len().min(data_out.len());
                data_out[..n].copy_from_slice(&response[..n]);
                data_out[n..].fill(0);
            }
            None => {
                let n = data_in.len().min(data_out.len());
                data_out[..n].copy_from_slice(&data_in[..n]);
            }
        }
        1
    }

    /// Everything shifted out so far, oldest first.
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }
}

/// UART with a receive ring fed by tests and a captured transmit log.
#[derive(Debug, Default)]
pub struct Uart {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl Uart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the receive ring.
    pub fn feed_rx(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    pub fn rx_count(&self) -> i32 {
        self.rx.len() as i32
    }

    /// Drains up to `data.len()` received bytes. Returns the count.
    pub fn read(&mut self, data: &mut [u8]) -> i32 {
        let mut n = 0;
        while n < data.len() {
            match self.rx.pop_front() {
                Some(byte) => {
                    data[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n as i32
    }

    /// Transmits bytes. Returns the count written.
    pub fn write(&mut self, data: &[u8]) -> i32 {
        self.tx.extend_from_slice(data);
        data.len() as i32
    }

    /// Everything transmitted so far.
    pub fn transmitted(&self) -> &[u8] {
        &self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i2c_requires_attached_device() {
        let mut bus = I2cBus::new();
        let mut buf = [0u8; 2];
        assert_eq!(bus.read(0x42, 0, &mut buf), 0);
        assert_eq!(bus.write(0x42, 0, &[1, 2]), 0);

        bus.attach_device(0x42);
        assert_eq!(bus.write(0x42, 0x10, &[0xAB, 0xCD]), 1);
        assert_eq!(bus.read(0x42, 0x10, &mut buf), 1);
        assert_eq!(buf, [0xAB, 0xCD]);
    }

    #[test]
    fn test_i2c_rejects_out_of_range_registers() {
        let mut bus = I2cBus::new();
        bus.attach_device(0x42);
        let mut buf = [0u8; 4];
        assert_eq!(bus.read(0x42, -1, &mut buf), 0);
        assert_eq!(bus.read(0x42, 254, &mut buf), 0);
        assert_eq!(bus.write(0x42, 255, &[1, 2]), 0);
    }

    #[test]
    fn test_spi_uses_queued_response() {
        let mut port = SpiPort::new();
        port.queue_response(&[9, 8, 7]);
        let mut out = [0u8; 3];
        assert_eq!(port.transfer(&[1, 2, 3], &mut out), 1);
        assert_eq!(out, [9, 8, 7]);
        assert_eq!(port.sent(), &[vec![1, 2, 3]]);
    }

    #[test]
    fn test_spi_echoes_without_response() {
        let mut port = SpiPort::new();
        let mut out = [0u8; 3];
        port.transfer(&[4, 5, 6], &mut out);
        assert_eq!(out, [4, 5, 6]);
    }

    #[test]
    fn test_spi_short_response_zero_fills() {
        let mut port = SpiPort::new();
        port.queue_response(&[0xFF]);
        let mut out = [7u8; 3];
        port.transfer(&[1, 2, 3], &mut out);
        assert_eq!(out, [0xFF, 0, 0]);
    }

    #[test]
    fn test_uart_rx_drains_in_order() {
        let mut uart = Uart::new();
        uart.feed_rx(b"hello");
        assert_eq!(uart.rx_count(), 5);

        let mut buf = [0u8; 3];
        assert_eq!(uart.read(&mut buf), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(uart.rx_count(), 2);

        let mut rest = [0u8; 8];
        assert_eq!(uart.read(&mut rest), 2);
        assert_eq!(&rest[..2], b"lo");
    }

    #[test]
    fn test_uart_write_reports_length() {
        let mut uart = Uart::new();
        assert_eq!(uart.write(b"ping"), 4);
        assert_eq!(uart.transmitted(), b"ping");
    }
}
