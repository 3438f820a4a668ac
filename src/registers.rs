//! PCA9685 register map and addressing arithmetic.
//!
//! Byte offsets into the chip's register space, the whole-byte MODE1 values
//! the startup sequence writes, and the per-channel arithmetic that locates a
//! channel's four on/off registers. Pure constants; the protocol lives in
//! [`crate::pca9685`].

/// Fixed 7-bit bus address of the PCA9685 on the shield.
pub const PCA9685_ADDRESS: u8 = 0x40;

/// The chip's internal oscillator frequency in Hz.
pub const OSC_CLOCK_HZ: u32 = 25_000_000;

/// Ticks per PWM cycle (12-bit counter).
pub const CYCLE_TICKS: u16 = 4096;

/// Highest on/off step value that fits the 12-bit counter.
pub const STEP_MAX: u16 = CYCLE_TICKS - 1;

/// Number of PWM output channels on the chip.
pub const CHANNEL_COUNT: u8 = 16;

// ============================================================================
// Mode and prescale registers
// ============================================================================

/// MODE1 register.
pub const MODE1: u8 = 0x00;
/// MODE2 register.
pub const MODE2: u8 = 0x01;
/// PRE_SCALE register; writable only while the chip sleeps.
pub const PRESCALE: u8 = 0xFE;

/// MODE1 value entering sleep (oscillator off).
pub const MODE1_SLEEP: u8 = 0x10;
/// MODE1 value clearing the sleep bit.
pub const MODE1_WAKE: u8 = 0x00;
/// MODE1 value setting the restart bit.
pub const MODE1_RESTART: u8 = 0x80;

// ============================================================================
// Channel on/off step registers
// ============================================================================

/// ALL_LED_ON low byte (global override, low half).
pub const ALL_LED_ON_L: u8 = 0xFA;
/// ALL_LED_ON high byte.
pub const ALL_LED_ON_H: u8 = 0xFB;
/// ALL_LED_OFF low byte.
pub const ALL_LED_OFF_L: u8 = 0xFC;
/// ALL_LED_OFF high byte.
pub const ALL_LED_OFF_H: u8 = 0xFD;

/// Channel 0 ON low byte; later channels follow at [`CHANNEL_REG_STRIDE`].
pub const LED0_ON_L: u8 = 0x06;
/// Channel 0 ON high byte.
pub const LED0_ON_H: u8 = 0x07;
/// Channel 0 OFF low byte.
pub const LED0_OFF_L: u8 = 0x08;
/// Channel 0 OFF high byte.
pub const LED0_OFF_H: u8 = 0x09;

/// Register-space distance between consecutive channels.
pub const CHANNEL_REG_STRIDE: u8 = 4;

/// First register (ON low byte) of a channel's four-register block.
///
/// Valid for channels 0 through 15; larger values address past the channel
/// block.
#[must_use]
pub const fn channel_base(channel: u8) -> u8 {
    LED0_ON_L + CHANNEL_REG_STRIDE * channel
}
