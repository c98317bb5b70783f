//! Driver crate for the TI SRC4392 sample rate converter / digital audio
//! transceiver
//!
//! The SRC4392 exposes its control, status and AES3 buffer state as byte-wide
//! registers behind a two-wire serial port, organized in three pages selected
//! through a dedicated page register. This crate provides:
//!
//! * a [register map] describing every register group as plain data —
//!   addresses, named bit-fields and human-readable value labels,
//! * a [decode engine] that turns raw register bytes into structured,
//!   optionally serializable results,
//! * a [high-level interface] that reads and decodes register groups from a
//!   live device, and a [low-level interface] for raw byte access.
//!
//! This driver is built on top of [`embedded-hal`], which means it is portable
//! and can be used on any platform that implements the `embedded-hal` I2C
//! API. With the `async` cargo feature (on by default) the bus is accessed
//! through `embedded-hal-async` instead.
//!
//! [register map]: regmap/index.html
//! [decode engine]: decode/index.html
//! [high-level interface]: hl/index.html
//! [low-level interface]: ll/index.html
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "async")]
pub(crate) use maybe_async::must_be_async as maybe_async_attr;
#[cfg(not(feature = "async"))]
pub(crate) use maybe_async::must_be_sync as maybe_async_attr;

#[cfg(not(feature = "async"))]
pub(crate) use embedded_hal as i2c_type;
#[cfg(feature = "async")]
pub(crate) use embedded_hal_async as i2c_type;

pub mod decode;
pub mod hl;
pub mod ll;
pub mod regmap;

pub use crate::{
    decode::{decode_bytes, DecodeResult, FieldValue},
    hl::Src4392,
    ll::{Error, DEFAULT_I2C_ADDRESS},
    regmap::{FieldSpec, Page, RegisterGroupSpec, PAGE_SELECTION},
};

#[cfg(any(test, feature = "std"))]
pub use crate::hl::PageDump;
