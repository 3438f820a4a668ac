//! Signal-lamp control.
//!
//! The shield wires two three-lamp signals (green/yellow/red each) to the
//! chip's first six channels. Lamps are binary: a lamp that is on holds its
//! channel high for the whole cycle; no dimming is exposed.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::board::RailwayBoard;
use crate::debug::debug_log;
use crate::error::Result;
use crate::registers::STEP_MAX;

/// One of the six signal lamps on the shield.
///
/// Discriminants are the shield's printed lamp numbers; the wired channel is
/// one below ([`channel`](Self::channel)).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalLed {
    /// Green lamp of signal 1.
    Green1 = 1,
    /// Yellow lamp of signal 1.
    Yellow1 = 2,
    /// Red lamp of signal 1.
    Red1 = 3,
    /// Green lamp of signal 2.
    Green2 = 4,
    /// Yellow lamp of signal 2.
    Yellow2 = 5,
    /// Red lamp of signal 2.
    Red2 = 6,
}

impl SignalLed {
    /// PWM channel the lamp is wired to (0 through 5).
    #[must_use]
    pub const fn channel(self) -> u8 {
        self as u8 - 1
    }
}

impl<I2C, D> RailwayBoard<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Switch one signal lamp fully on or fully off.
    ///
    /// On programs the pulse pair `(0, 4095)`, high for the entire cycle;
    /// off programs `(0, 0)`.
    pub fn set_led(&mut self, led: SignalLed, on: bool) -> Result<(), I2C::Error> {
        let off_step = if on { STEP_MAX } else { 0 };
        debug_log!("led: {:?} -> {}", led, on);
        self.chip.set_channel_pulse(led.channel(), 0, off_step)
    }
}
