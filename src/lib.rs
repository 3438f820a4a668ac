//! Device abstractions for the Funduino model-railway shield.
//!
//! The shield puts six signal lamps, two point servos, and a piezo speaker
//! behind a PCA9685 16-channel PWM controller on the I2C bus. This crate owns
//! the chip's register protocol: the clock prescaler for the carrier
//! frequency, the sleep/wake/restart startup sequence, and the 12-bit on/off
//! step pairs behind every lamp, servo, and tone request.
//!
//! The platform supplies the transport and the delay as `embedded-hal`
//! traits ([`I2c`](embedded_hal::i2c::I2c) and
//! [`DelayNs`](embedded_hal::delay::DelayNs)); nothing here touches hardware
//! directly, and the chip is never read back.
//!
//! # Glossary
//!
//! - **Channel:** one of the chip's 16 PWM outputs, each with its own on/off
//!   step pair.
//! - **On/off step:** tick index (0-4095) within the 4096-tick cycle at which
//!   the output goes high/low.
//! - **Prescaler:** divider turning the chip's 25 MHz oscillator into the
//!   cycle (carrier) frequency.
//!
//! # Example
//!
//! ```rust,no_run
//! use embedded_hal::{delay::DelayNs, i2c::I2c};
//! use funduino_railway::{RailwayBoard, ServoId, SignalLed};
//!
//! fn crossing_sequence<I2C: I2c, D: DelayNs>(
//!     i2c: I2C,
//!     delay: D,
//! ) -> Result<(), funduino_railway::Error<I2C::Error>> {
//!     let mut board = RailwayBoard::new(i2c, delay);
//!     board.init()?;
//!
//!     board.set_led(SignalLed::Green1, false)?;
//!     board.set_led(SignalLed::Red1, true)?;
//!     board.set_servo_position(ServoId::Servo1, 0)?;
//!     board.play_tone(440, 500)?;
//!     Ok(())
//! }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod debug;
mod error;
pub mod led;
pub mod pca9685;
pub mod registers;
pub mod servo;
pub mod speaker;

pub use crate::board::{DEFAULT_PWM_HZ, RailwayBoard};
pub use crate::error::{Error, Result};
pub use crate::led::SignalLed;
pub use crate::pca9685::Pca9685;
pub use crate::servo::{ServoConfig, ServoId};
