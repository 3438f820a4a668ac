//! A device abstraction for the PCA9685 16-channel PWM controller.
//!
//! This module owns the register protocol: every write is a two-byte
//! `[register, value]` payload to the fixed chip address, with no read-back.
//! Higher-level modules ([`crate::led`], [`crate::servo`], [`crate::speaker`])
//! only ever express themselves as on/off step pairs through
//! [`Pca9685::set_channel_pulse`].

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::debug::debug_log;
use crate::error::Result;
use crate::registers::{
    ALL_LED_OFF_H, ALL_LED_OFF_L, ALL_LED_ON_H, ALL_LED_ON_L, CYCLE_TICKS, MODE1, MODE1_RESTART,
    MODE1_SLEEP, MODE1_WAKE, OSC_CLOCK_HZ, PCA9685_ADDRESS, PRESCALE, channel_base,
};

/// Oscillator settle time after waking the chip (hardware minimum, ms).
const OSC_SETTLE_MS: u32 = 1000;

/// Prescale value for a target PWM cycle frequency.
///
/// `floor(25 MHz / (freq * 4096)) - 1`, truncated to the width of the
/// PRE_SCALE register. No range validation: the caller keeps the result
/// inside the chip's accepted [3, 255]; anything else reaches the register
/// uninterpreted.
#[must_use]
pub fn prescale_for_frequency(freq_hz: u32) -> u8 {
    (OSC_CLOCK_HZ / (freq_hz * u32::from(CYCLE_TICKS))).wrapping_sub(1) as u8
}

/// The PCA9685 chip behind the shield, addressed over a blocking I2C bus.
///
/// # Example
///
/// ```rust,no_run
/// use embedded_hal::{delay::DelayNs, i2c::I2c};
/// use funduino_railway::Pca9685;
///
/// fn example<I2C: I2c>(i2c: I2C, delay: &mut impl DelayNs) -> Result<(), funduino_railway::Error<I2C::Error>> {
///     let mut chip = Pca9685::new(i2c);
///     chip.init(50, delay)?;
///     // Channel 3 high for a quarter of every cycle.
///     chip.set_channel_pulse(3, 0, 1024)?;
///     Ok(())
/// }
/// ```
pub struct Pca9685<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Pca9685<I2C> {
    /// Wrap the bus. No traffic until [`init`](Self::init) or a channel write.
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Write one register. `[register, value]` to the fixed chip address.
    fn write(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(PCA9685_ADDRESS, &[register, value])?;
        Ok(())
    }

    /// Configure the PWM carrier frequency and bring the chip up.
    ///
    /// Sequence: sleep (the prescaler is only writable while asleep), set the
    /// prescaler, zero the all-channels override registers, wake, block for
    /// the oscillator settle time, then set the restart bit so previously
    /// running channels resume synchronized.
    ///
    /// Safe to run again; a re-run replays the whole sequence including the
    /// settle delay.
    pub fn init(&mut self, freq_hz: u32, delay: &mut impl DelayNs) -> Result<(), I2C::Error> {
        let prescale = prescale_for_frequency(freq_hz);
        debug_log!("pca9685: init {} Hz, prescale {}", freq_hz, prescale);

        self.write(MODE1, MODE1_SLEEP)?;
        self.write(PRESCALE, prescale)?;
        self.write(ALL_LED_ON_L, 0x00)?;
        self.write(ALL_LED_ON_H, 0x00)?;
        self.write(ALL_LED_OFF_L, 0x00)?;
        self.write(ALL_LED_OFF_H, 0x00)?;
        self.write(MODE1, MODE1_WAKE)?;
        delay.delay_ms(OSC_SETTLE_MS);
        self.write(MODE1, MODE1_RESTART)?;
        Ok(())
    }

    /// Program one channel's on/off step pair.
    ///
    /// Four single-byte writes in fixed order: on-low, on-high, off-low,
    /// off-high. High bytes keep only the low nibble; the chip reserves the
    /// upper bits (full-on/full-off flags, unused here) and ignores the rest.
    /// Channel numbers are not validated.
    pub fn set_channel_pulse(
        &mut self,
        channel: u8,
        on_step: u16,
        off_step: u16,
    ) -> Result<(), I2C::Error> {
        let base = channel_base(channel);

        self.write(base, (on_step & 0xFF) as u8)?;
        self.write(base + 1, ((on_step >> 8) & 0x0F) as u8)?;
        self.write(base + 2, (off_step & 0xFF) as u8)?;
        self.write(base + 3, ((off_step >> 8) & 0x0F) as u8)?;
        Ok(())
    }

    /// Give the bus back.
    #[must_use]
    pub fn release(self) -> I2C {
        self.i2c
    }
}
