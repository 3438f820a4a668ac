//! Shared test doubles: a bus and a delay that record every interaction, in
//! order, into one log so tests can assert write sequences and pause
//! positions together.
#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorType, I2c, Operation};

/// One observed interaction with the outside world.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A `[register, value]` payload written to a bus address.
    Write {
        address: u8,
        register: u8,
        value: u8,
    },
    /// A blocking pause, in milliseconds.
    PauseMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// A bus and delay sharing one event log.
pub fn harness() -> (RecordingBus, RecordingDelay, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    (
        RecordingBus {
            log: Rc::clone(&log),
        },
        RecordingDelay {
            log: Rc::clone(&log),
        },
        log,
    )
}

/// The `(register, value)` pairs in the log, pauses skipped.
pub fn register_writes(log: &Log) -> Vec<(u8, u8)> {
    log.borrow()
        .iter()
        .filter_map(|event| match *event {
            Event::Write {
                register, value, ..
            } => Some((register, value)),
            Event::PauseMs(_) => None,
        })
        .collect()
}

pub struct RecordingBus {
    log: Log,
}

impl ErrorType for RecordingBus {
    type Error = Infallible;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    assert_eq!(bytes.len(), 2, "chip writes are [register, value] pairs");
                    self.log.borrow_mut().push(Event::Write {
                        address,
                        register: bytes[0],
                        value: bytes[1],
                    });
                }
                Operation::Read(_) => panic!("the driver never reads from the chip"),
            }
        }
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::PauseMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::PauseMs(ms));
    }
}
