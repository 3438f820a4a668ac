//! Error and result types for shield operations.

use derive_more::{Display, Error, From};

/// Errors from driving the shield.
///
/// The only failure source is the I2C transport; it is propagated untouched.
/// The chip is never read back, so there is nothing else to go wrong at this
/// layer.
#[derive(Debug, Display, Error, From)]
pub enum Error<E> {
    /// The underlying I2C transport failed.
    ///
    /// Bus error types carry no further cause, so none is exposed here.
    #[display("I2C transport error")]
    I2c(#[error(not(source))] E),
}

/// Result alias for shield operations, parameterized by the bus error.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
