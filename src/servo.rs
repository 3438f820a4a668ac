//! Point-servo control.
//!
//! Two hobby servos (turnout points, typically) hang off channels 0 and 7.
//! Each carries a calibration mapping its 0°-180° sweep onto an off-step
//! range; position requests interpolate linearly inside it.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::board::RailwayBoard;
use crate::debug::debug_log;
use crate::error::Result;

/// One of the two servo headers on the shield.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoId {
    /// Servo header 1, wired to channel 0.
    Servo1,
    /// Servo header 2, wired to channel 7.
    Servo2,
}

/// Wiring and pulse calibration for one servo.
///
/// `min_offset`/`max_offset` are the off-step values for 0° and 180°. They
/// are the only source of the servo's linearity; there is no runtime
/// recalibration.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// PWM channel the servo is wired to.
    pub channel: u8,
    /// Off-step at 0°.
    pub min_offset: u16,
    /// Off-step at 180°.
    pub max_offset: u16,
}

impl ServoId {
    /// The fixed calibration record for this header.
    #[must_use]
    pub const fn config(self) -> ServoConfig {
        match self {
            Self::Servo1 => ServoConfig {
                channel: 0,
                min_offset: 5,
                max_offset: 25,
            },
            Self::Servo2 => ServoConfig {
                channel: 7,
                min_offset: 5,
                max_offset: 25,
            },
        }
    }
}

/// Off-step for a position, interpolated inside the calibrated range.
///
/// `degrees * (max - min) / 180 + min`, floored. Degrees above 180 are not
/// clamped and extrapolate along the same line, past the calibrated range.
pub(crate) fn pulse_for_degrees(config: &ServoConfig, degrees: u16) -> u16 {
    let spread = u32::from(config.max_offset) - u32::from(config.min_offset);
    (u32::from(degrees) * spread / 180 + u32::from(config.min_offset)) as u16
}

impl<I2C, D> RailwayBoard<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Move a servo to a position in degrees (0 through 180).
    ///
    /// Programs the pulse pair `(0, pulse)` with the interpolated off-step.
    pub fn set_servo_position(&mut self, servo: ServoId, degrees: u16) -> Result<(), I2C::Error> {
        let config = servo.config();
        let pulse = pulse_for_degrees(&config, degrees);
        debug_log!("servo: {:?} {} deg -> off-step {}", servo, degrees, pulse);
        self.chip.set_channel_pulse(config.channel, 0, pulse)
    }
}
