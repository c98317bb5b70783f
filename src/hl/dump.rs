//! Whole-page register dumps
//!
//! Available with the `std` feature. A dump is an ordered collection of
//! decoded register groups, serializable (with the `serde` feature) as one
//! JSON object per page, keyed by group label in catalogue order.

use crate::{
    decode::DecodeResult,
    i2c_type, maybe_async_attr,
    regmap::{Page, RegisterGroupSpec},
    Error,
};

use super::Src4392;

impl<I2C> Src4392<I2C>
where
    I2C: i2c_type::i2c::I2c,
{
    /// Select `page` and read and decode the given register groups from it,
    /// in order
    ///
    /// `groups` is typically a page catalogue (`page.groups().iter()`) or a
    /// curated subset such as [`crate::regmap::page0::DUMP_GROUPS`]. The
    /// first bus error aborts the dump.
    #[maybe_async_attr]
    pub async fn dump_page<G>(&mut self, page: Page, groups: G) -> Result<PageDump, Error<I2C>>
    where
        G: IntoIterator<Item = &'static RegisterGroupSpec>,
    {
        self.select_page(page).await?;

        let mut results = Vec::new();
        for spec in groups {
            results.push(self.read_group(spec).await?);
        }

        Ok(PageDump { results })
    }
}

/// An ordered dump of decoded register groups from one page
#[derive(Clone, Debug)]
pub struct PageDump {
    results: Vec<DecodeResult>,
}

impl PageDump {
    /// The decoded groups, in dump order
    pub fn iter(&self) -> impl Iterator<Item = &DecodeResult> {
        self.results.iter()
    }

    /// Find a decoded group by its display label
    pub fn get(&self, name: &str) -> Option<&DecodeResult> {
        self.results.iter().find(|result| result.spec().name == name)
    }

    /// Number of decoded groups in the dump
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the dump is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Serializes as a map of group label to decode result, in dump order
#[cfg(feature = "serde")]
impl serde::Serialize for PageDump {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(result.spec().name, result)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::page0;

    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = crate::DEFAULT_I2C_ADDRESS;

    fn expectations() -> Vec<I2cTransaction> {
        vec![
            I2cTransaction::write(ADDR, vec![0x7F, 0x00]),
            I2cTransaction::write_read(ADDR, vec![0x01], vec![0x3F]),
            I2cTransaction::write_read(ADDR, vec![0x03], vec![0x31]),
        ]
    }

    #[tokio::test]
    async fn dump_selects_the_page_then_reads_in_order() {
        let i2c = I2cMock::new(&expectations());

        let mut src4392 = Src4392::new(i2c, ADDR);
        let dump = src4392
            .dump_page(Page::Control, page0::DUMP_GROUPS[..2].iter().copied())
            .await
            .unwrap();

        assert_eq!(dump.len(), 2);
        assert_eq!(dump.get("0x01").unwrap().value(), 0x3F);
        assert_eq!(dump.get("0x03").unwrap().label("AFMT"), Some("24-Bit Philips I2S"));
        assert!(dump.get("0x7F").is_none());

        src4392.free().done();
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn dump_serializes_in_catalogue_order() {
        let i2c = I2cMock::new(&expectations());

        let mut src4392 = Src4392::new(i2c, ADDR);
        let dump = src4392
            .dump_page(Page::Control, page0::DUMP_GROUPS[..2].iter().copied())
            .await
            .unwrap();

        let json = serde_json::to_string(&dump).unwrap();
        let first = json.find("\"0x01\"").unwrap();
        let second = json.find("\"0x03\"").unwrap();
        assert!(first < second);

        src4392.free().done();
    }
}
