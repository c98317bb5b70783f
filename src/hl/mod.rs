//! High-level interface to the SRC4392
//!
//! The entry point to this API is the [Src4392] struct. It wraps the
//! [low-level interface] and adds page selection and register group decoding
//! against the built-in [register map].
//!
//! The device exposes three register pages behind one shared address space;
//! a group read only makes sense while the group's page is selected. The
//! driver does not track the selected page: callers select a page with
//! [`Src4392::select_page`] before decoding groups that belong to it, and
//! must not interleave reads from different pages without re-selecting.
//!
//! [low-level interface]: ../ll/index.html
//! [register map]: ../regmap/index.html

#[cfg(any(test, feature = "std"))]
pub use dump::PageDump;

#[cfg(any(test, feature = "std"))]
mod dump;

use crate::{
    decode::{decode_bytes, DecodeResult},
    i2c_type, ll, maybe_async_attr,
    regmap::{Page, RegisterGroupSpec, PAGE_SELECTION},
    Error,
};

/// Entry point to the SRC4392 driver API
pub struct Src4392<I2C> {
    ll: ll::Src4392<I2C>,
}

impl<I2C> Src4392<I2C> {
    /// Create a new instance of `Src4392`
    ///
    /// Requires the I2C bus the device is connected to and the device's
    /// 7-bit address (see [`crate::DEFAULT_I2C_ADDRESS`]).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Src4392 {
            ll: ll::Src4392::new(i2c, address),
        }
    }

    /// Provides direct access to the register-level API
    pub fn ll(&mut self) -> &mut ll::Src4392<I2C> {
        &mut self.ll
    }

    /// Release the I2C bus
    pub fn free(self) -> I2C {
        self.ll.free()
    }
}

impl<I2C> Src4392<I2C>
where
    I2C: i2c_type::i2c::I2c,
{
    /// Select the register page that subsequent accesses observe
    #[maybe_async_attr]
    pub async fn select_page(&mut self, page: Page) -> Result<(), Error<I2C>> {
        self.ll.write_register(PAGE_SELECTION, page as u8).await
    }

    /// Read one byte-wide register on the currently selected page
    #[maybe_async_attr]
    pub async fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C>> {
        self.ll.read_register(register).await
    }

    /// Write one byte-wide register on the currently selected page
    #[maybe_async_attr]
    pub async fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<I2C>> {
        self.ll.write_register(register, value).await
    }

    /// Read and decode one register group from the currently selected page
    ///
    /// Reads the group's registers exactly once each, in declared order, and
    /// composes them big-endian: the first address read supplies the most
    /// significant byte. A bus error aborts the read; no partial result is
    /// returned.
    #[maybe_async_attr]
    pub async fn read_group(
        &mut self,
        spec: &'static RegisterGroupSpec,
    ) -> Result<DecodeResult, Error<I2C>> {
        let mut bytes = [0; 4];
        let bytes = &mut bytes[..spec.addresses.len()];
        for (byte, &address) in bytes.iter_mut().zip(spec.addresses) {
            *byte = self.ll.read_register(address).await?;
        }

        Ok(decode_bytes(spec, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::{lookup, page0, FieldSpec};

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = crate::DEFAULT_I2C_ADDRESS;

    #[tokio::test]
    async fn select_page_writes_the_page_register() {
        let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x7F, 0x02])]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        src4392.select_page(Page::DitBuffer).await.unwrap();

        src4392.free().done();
    }

    #[tokio::test]
    async fn multi_byte_group_composes_big_endian() {
        let pll = lookup(Page::Control, "0x0F-0x11").unwrap();
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(ADDR, vec![0x0F], vec![0x12]),
            I2cTransaction::write_read(ADDR, vec![0x10], vec![0x34]),
            I2cTransaction::write_read(ADDR, vec![0x11], vec![0x56]),
        ]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        let result = src4392.read_group(pll).await.unwrap();

        assert_eq!(result.value(), 0x123456);
        // J.D with J in bits 14..=19, D in bits 0..=13.
        assert_eq!(result.field("D"), Some(0x123456 & 0x3FFF));
        assert_eq!(result.field("J"), Some((0x123456 >> 14) & 0x3F));
        assert_eq!(result.field("P"), Some(0x123456 >> 20));

        src4392.free().done();
    }

    // The mock fails on out-of-order transactions, so this also pins down
    // that addresses are read strictly in spec-declared order.
    #[tokio::test]
    async fn reads_follow_spec_address_order() {
        let ratio = lookup(Page::Control, "0x32-0x33").unwrap();
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(ADDR, vec![0x32], vec![0xAA]),
            I2cTransaction::write_read(ADDR, vec![0x33], vec![0x55]),
        ]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        let result = src4392.read_group(ratio).await.unwrap();
        assert_eq!(result.value(), 0xAA55);

        src4392.free().done();
    }

    #[tokio::test]
    async fn power_down_reset_decodes_from_live_bytes() {
        let power = &page0::ALL[0];
        let i2c = I2cMock::new(&[I2cTransaction::write_read(ADDR, vec![0x01], vec![0b1000_0000])]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        let result = src4392.read_group(power).await.unwrap();

        assert_eq!(result.value(), 128);
        assert_eq!(result.field("RESET"), Some(1));
        assert_eq!(result.label("RESET"), Some("Enabled"));
        assert_eq!(result.field("PDNSRCn"), Some(0));
        assert_eq!(result.label("PDNSRCn"), Some("Enabled"));

        src4392.free().done();
    }

    static RESET_ONLY: RegisterGroupSpec = RegisterGroupSpec {
        name: "0x01",
        addresses: &[0x01],
        desc: "Power-Down and Reset",
        fields: &[FieldSpec {
            name: "RESET",
            bits: &[7],
            choices: Some(&["SRC4392 Active", "Reset"]),
            desc: "Software Reset",
        }],
    };

    #[tokio::test]
    async fn single_bit_field_labels_from_the_top_bit() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(ADDR, vec![0x01], vec![0b1000_0000])]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        let result = src4392.read_group(&RESET_ONLY).await.unwrap();

        assert_eq!(result.value(), 128);
        assert_eq!(result.field("RESET"), Some(1));
        assert_eq!(result.label("RESET"), Some("Reset"));

        src4392.free().done();
    }

    #[tokio::test]
    async fn bus_error_aborts_the_group_read() {
        use embedded_hal::i2c::ErrorKind;

        let pll = lookup(Page::Control, "0x0F-0x11").unwrap();
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(ADDR, vec![0x0F], vec![0x12]),
            I2cTransaction::write_read(ADDR, vec![0x10], vec![0x00])
                .with_error(ErrorKind::Other),
        ]);

        let mut src4392 = Src4392::new(i2c, ADDR);
        assert!(src4392.read_group(pll).await.is_err());

        src4392.free().done();
    }
}
