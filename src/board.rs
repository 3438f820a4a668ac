//! The shield itself: one PCA9685 plus the platform's blocking delay.
//!
//! See [`RailwayBoard`] for the usage example.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::Result;
use crate::pca9685::Pca9685;

/// Default PWM carrier frequency in Hz, the refresh rate hobby servos expect.
pub const DEFAULT_PWM_HZ: u32 = 50;

/// A device abstraction for the Funduino model-railway shield.
///
/// Owns the chip and the delay; every operation is a sequence of blocking
/// register writes, so a single caller at a time is assumed. Run
/// [`init`](Self::init) once before any lamp, servo, or tone operation.
///
/// # Example
///
/// ```rust,no_run
/// use embedded_hal::{delay::DelayNs, i2c::I2c};
/// use funduino_railway::{RailwayBoard, ServoId, SignalLed};
///
/// fn example<I2C: I2c, D: DelayNs>(
///     i2c: I2C,
///     delay: D,
/// ) -> Result<(), funduino_railway::Error<I2C::Error>> {
///     let mut board = RailwayBoard::new(i2c, delay);
///     board.init()?;
///
///     board.set_led(SignalLed::Green1, true)?;
///     board.set_servo_position(ServoId::Servo1, 90)?;
///     board.play_tone(440, 250)?;
///     Ok(())
/// }
/// ```
pub struct RailwayBoard<I2C, D> {
    pub(crate) chip: Pca9685<I2C>,
    pub(crate) delay: D,
}

impl<I2C, D> RailwayBoard<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wrap the bus and delay. No traffic until [`init`](Self::init).
    ///
    /// When other devices share the bus, hand this a bus-sharing wrapper such
    /// as an `embedded-hal-bus` device instead of the bare peripheral.
    #[must_use]
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            chip: Pca9685::new(i2c),
            delay,
        }
    }

    /// Configure the chip at the default carrier ([`DEFAULT_PWM_HZ`]).
    ///
    /// Blocks for the chip's one-second oscillator settle time.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.init_with_frequency(DEFAULT_PWM_HZ)
    }

    /// Configure the chip at a caller-chosen carrier frequency.
    ///
    /// The carrier is fixed from here on; servo pulse calibrations and tone
    /// pitch both assume it stays at whatever is chosen now.
    pub fn init_with_frequency(&mut self, freq_hz: u32) -> Result<(), I2C::Error> {
        self.chip.init(freq_hz, &mut self.delay)
    }

    /// Give back the bus and delay.
    #[must_use]
    pub fn release(self) -> (I2C, D) {
        (self.chip.release(), self.delay)
    }
}
