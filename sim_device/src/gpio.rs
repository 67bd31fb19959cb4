//! GPIO pin bank and per-pin PWM state.

use std::collections::HashMap;

/// Number of addressable GPIO pins.
pub const GPIO_PIN_COUNT: i32 = 32;

/// PWM output running on one pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwmSetting {
    pub freq_hz: f32,
    pub duty: f32,
}

/// All pins as one bitmask, bit N for pin N, plus the PWM table.
#[derive(Debug, Default)]
pub struct GpioBank {
    pins: u32,
    pwm: HashMap<i32, PwmSetting>,
}

impl GpioBank {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_range(io: i32) -> bool {
        (0..GPIO_PIN_COUNT).contains(&io)
    }

    /// Drives a pin; out-of-range pins are ignored.
    pub fn set(&mut self, io: i32, on: bool) {
        if !Self::in_range(io) {
            return;
        }
        if on {
            self.pins |= 1 << io;
        } else {
            self.pins &= !(1 << io);
        }
    }

    /// Reads a pin; out-of-range pins read low.
    pub fn get(&self, io: i32) -> u32 {
        if !Self::in_range(io) {
            return 0;
        }
        (self.pins >> io) & 1
    }

    pub fn all(&self) -> u32 {
        self.pins
    }

    /// Starts PWM on a pin. Duty is a percentage.
    pub fn pwm_start(&mut self, io: i32, freq_hz: f32, duty: f32) -> i32 {
        if !Self::in_range(io) || freq_hz <= 0.0 || !(0.0..=100.0).contains(&duty) {
            return 0;
        }
        self.pwm.insert(io, PwmSetting { freq_hz, duty });
        1
    }

    /// Stops PWM on a pin. Stopping an idle pin still succeeds.
    pub fn pwm_stop(&mut self, io: i32) -> i32 {
        if !Self::in_range(io) {
            return 0;
        }
        self.pwm.remove(&io);
        1
    }

    /// Returns the running PWM setting for a pin, if any.
    pub fn pwm(&self, io: i32) -> Option<PwmSetting> {
        self.pwm.get(&io).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_pin() {
        let mut bank = GpioBank::new();
        bank.set(3, true);
        assert_eq!(bank.get(3), 1);
        assert_eq!(bank.all(), 0b1000);

        bank.set(3, false);
        assert_eq!(bank.get(3), 0);
        assert_eq!(bank.all(), 0);
    }

    #[test]
    fn test_out_of_range_pins_read_low() {
        let mut bank = GpioBank::new();
        bank.set(-1, true);
        bank.set(GPIO_PIN_COUNT, true);
        assert_eq!(bank.all(), 0);
        assert_eq!(bank.get(-1), 0);
        assert_eq!(bank.get(GPIO_PIN_COUNT), 0);
    }

    #[test]
    fn test_pwm_start_validates_arguments() {
        let mut bank = GpioBank::new();
        assert_eq!(bank.pwm_start(2, 1000.0, 50.0), 1);
        assert_eq!(bank.pwm(2), Some(PwmSetting { freq_hz: 1000.0, duty: 50.0 }));

        assert_eq!(bank.pwm_start(2, 0.0, 50.0), 0);
        assert_eq!(bank.pwm_start(2, 1000.0, 101.0), 0);
        assert_eq!(bank.pwm_start(GPIO_PIN_COUNT, 1000.0, 50.0), 0);
    }

    #[test]
    fn test_pwm_stop() {
        let mut bank = GpioBank::new();
        bank.pwm_start(5, 440.0, 25.0);
        assert_eq!(bank.pwm_stop(5), 1);
        assert_eq!(bank.pwm(5), None);
        // Idempotent for a valid pin.
        assert_eq!(bank.pwm_stop(5), 1);
        assert_eq!(bank.pwm_stop(-2), 0);
    }
}
