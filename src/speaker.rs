//! Piezo speaker control.
//!
//! The speaker sits on channel 8. A tone is one pulse program, a blocking
//! pause for the requested duration, and a silencing program; the caller is
//! occupied for the whole tone and tones never overlap.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::board::RailwayBoard;
use crate::debug::debug_log;
use crate::error::Result;
use crate::registers::CYCLE_TICKS;

/// PWM channel the speaker is wired to.
pub const SPEAKER_CHANNEL: u8 = 8;

/// Off-step for a tone frequency: `4096 * freq / 1000`, floored.
///
/// The step scales the duty width within the carrier cycle configured at
/// init, so the perceived pitch is coupled to that carrier rather than being
/// an independent tone frequency.
pub(crate) fn tone_off_step(freq_hz: u32) -> u16 {
    (u32::from(CYCLE_TICKS) * freq_hz / 1000) as u16
}

impl<I2C, D> RailwayBoard<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Sound the speaker, blocking for the whole duration.
    ///
    /// Programs `(0, off_step)` on the speaker channel, pauses for
    /// `duration_ms`, then silences with `(0, 0)`. There is no cancellation;
    /// a started tone always runs out.
    pub fn play_tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), I2C::Error> {
        let off_step = tone_off_step(freq_hz);
        debug_log!("speaker: {} Hz for {} ms, off-step {}", freq_hz, duration_ms, off_step);

        self.chip.set_channel_pulse(SPEAKER_CHANNEL, 0, off_step)?;
        self.delay.delay_ms(duration_ms);
        self.chip.set_channel_pulse(SPEAKER_CHANNEL, 0, 0)
    }
}
