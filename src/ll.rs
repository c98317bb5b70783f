//! Low-level interface to the SRC4392
//!
//! This module implements the byte-level register interface to the SRC4392.
//! Users of this library should typically not need to use this. Please
//! consider using the [high-level interface] instead.
//!
//! All registers on the device are one byte wide. Which registers are visible
//! behind a given address depends on the currently selected register page;
//! this layer is page-agnostic and accesses whatever the device currently
//! exposes.
//!
//! [high-level interface]: ../hl/index.html

use core::fmt;

use embedded_hal::i2c;

use crate::{i2c_type, maybe_async_attr};

/// The default 7-bit I2C address of the SRC4392
///
/// Valid when both address pins (A1, A0) are tied low. The full range is
/// 0x70 through 0x73 depending on pin strapping.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x70;

/// Entry point to the SRC4392 driver's low-level API
///
/// Please consider using [hl::Src4392] instead.
///
/// [hl::Src4392]: ../hl/struct.Src4392.html
pub struct Src4392<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Src4392<I2C> {
    /// Create a new instance of the low-level `Src4392`
    ///
    /// Requires the I2C bus the device is connected to and the device's
    /// 7-bit address (see [`DEFAULT_I2C_ADDRESS`]).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Src4392 { i2c, address }
    }

    /// Allow access to the I2C bus
    pub fn bus(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Release the I2C bus
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Src4392<I2C>
where
    I2C: i2c_type::i2c::I2c,
{
    /// Read one byte-wide register at `register` on the currently selected
    /// page
    ///
    /// Performs a register-pointer write followed by a one-byte read in a
    /// single bus transaction.
    #[maybe_async_attr]
    pub async fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C>> {
        let mut buffer = [0];
        self.i2c
            .write_read(self.address, &[register], &mut buffer)
            .await
            .map_err(Error::I2c)?;

        Ok(buffer[0])
    }

    /// Write one byte-wide register at `register` on the currently selected
    /// page
    #[maybe_async_attr]
    pub async fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<I2C>> {
        self.i2c
            .write(self.address, &[register, value])
            .await
            .map_err(Error::I2c)?;

        Ok(())
    }
}

/// A bus error that can occur when communicating with the SRC4392
pub enum Error<I2C>
where
    I2C: i2c::ErrorType,
{
    /// I2C error occured during a bus transaction
    I2c(I2C::Error),
}

// We can't derive this implementation, as the compiler will complain that the
// associated error type doesn't implement `Debug`.
impl<I2C> fmt::Debug for Error<I2C>
where
    I2C: i2c::ErrorType,
    I2C::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(error) => write!(f, "I2c({:?})", error),
        }
    }
}

impl<I2C> fmt::Display for Error<I2C>
where
    I2C: i2c::ErrorType,
    I2C::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for Error<I2C>
where
    I2C: i2c::ErrorType,
    I2C::Error: fmt::Debug,
{
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for Error<I2C>
where
    I2C: i2c::ErrorType,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(_) => defmt::write!(f, "I2c()"),
        }
    }
}
