#![allow(missing_docs)]
//! Pulse-programming tests: register addressing per channel, write order, and
//! the low/high byte split of 12-bit step values.

mod common;

use common::{harness, register_writes};
use funduino_railway::Pca9685;

#[test]
fn channel_zero_full_cycle_pulse() {
    let (bus, _, log) = harness();
    let mut chip = Pca9685::new(bus);

    chip.set_channel_pulse(0, 0, 4095).unwrap();

    assert_eq!(
        register_writes(&log),
        [(0x06, 0x00), (0x07, 0x00), (0x08, 0xFF), (0x09, 0x0F)]
    );
}

#[test]
fn channel_registers_are_spaced_four_apart() {
    let (bus, _, log) = harness();
    let mut chip = Pca9685::new(bus);

    chip.set_channel_pulse(1, 0, 0).unwrap();
    chip.set_channel_pulse(8, 0, 0).unwrap();
    chip.set_channel_pulse(15, 0, 0).unwrap();

    let registers: Vec<u8> = register_writes(&log).iter().map(|&(reg, _)| reg).collect();
    assert_eq!(
        registers,
        [
            0x0A, 0x0B, 0x0C, 0x0D, // channel 1
            0x26, 0x27, 0x28, 0x29, // channel 8
            0x42, 0x43, 0x44, 0x45, // channel 15
        ]
    );
}

#[test]
fn steps_split_into_low_byte_and_masked_high_nibble() {
    for (on_step, off_step) in [
        (0u16, 0u16),
        (1, 255),
        (256, 257),
        (2048, 4095),
        (4095, 4095),
        // Beyond 12 bits: the high nibble mask drops the overflow bit.
        (4096, 4096),
    ] {
        let (bus, _, log) = harness();
        let mut chip = Pca9685::new(bus);

        chip.set_channel_pulse(5, on_step, off_step).unwrap();

        let expected = [
            (0x1A, (on_step & 0xFF) as u8),
            (0x1B, ((on_step >> 8) & 0x0F) as u8),
            (0x1C, (off_step & 0xFF) as u8),
            (0x1D, ((off_step >> 8) & 0x0F) as u8),
        ];
        assert_eq!(register_writes(&log), expected, "steps ({on_step}, {off_step})");
    }
}

#[test]
fn every_write_targets_the_fixed_chip_address() {
    let (bus, _, log) = harness();
    let mut chip = Pca9685::new(bus);

    chip.set_channel_pulse(2, 300, 700).unwrap();

    assert!(log.borrow().iter().all(|event| match *event {
        common::Event::Write { address, .. } => address == 0x40,
        common::Event::PauseMs(_) => false,
    }));
}
