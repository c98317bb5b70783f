//! Register map of the SRC4392
//!
//! The map is plain configuration data: an ordered catalogue of
//! [`RegisterGroupSpec`] descriptors per device page, constructed once as
//! `'static` tables and never mutated. Each descriptor names the byte-wide
//! register address(es) making up one logical register, and the named
//! bit-fields within it.
//!
//! The catalogue content is transcribed from the SRC4392 datasheet register
//! descriptions (Texas Instruments, SBFS029):
//!
//! * [`page0`] — control and status registers,
//! * [`page1`] — DIR (receiver) channel status and user data buffers,
//! * [`page2`] — DIT (transmitter) channel status and user data buffers.

pub mod page0;
pub mod page1;
pub mod page2;

/// Address of the page selection register
///
/// Visible at the same address on every page. Writing 0, 1 or 2 switches
/// which register page subsequent accesses observe.
pub const PAGE_SELECTION: u8 = 0x7F;

/// One of the three register pages of the SRC4392
///
/// Register addresses are only meaningful relative to the currently selected
/// page; see [`crate::hl::Src4392::select_page`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Page {
    /// Page 0, control and status registers
    Control = 0,
    /// Page 1, DIR channel status and user data buffers
    DirBuffer = 1,
    /// Page 2, DIT channel status and user data buffers
    DitBuffer = 2,
}

impl Page {
    /// The catalogue of register groups living on this page, in address order
    pub fn groups(self) -> &'static [RegisterGroupSpec] {
        match self {
            Page::Control => &page0::ALL,
            Page::DirBuffer => &page1::ALL,
            Page::DitBuffer => &page2::ALL,
        }
    }
}

/// A named bit-field within a register group
///
/// `bits` lists the positions the field occupies in the group's composed
/// value, least-significant field bit first: entry `i` of the list is the
/// register bit that becomes bit `i` of the extracted field value.
#[derive(Debug)]
pub struct FieldSpec {
    /// Field name, unique within its group
    pub name: &'static str,
    /// Bit positions in the composed register value, field LSB first
    pub bits: &'static [u8],
    /// Labels indexed by the extracted field value
    ///
    /// A table may cover fewer values than the field can take; uncovered
    /// values simply decode without a label.
    pub choices: Option<&'static [&'static str]>,
    /// Datasheet description of the field
    pub desc: &'static str,
}

impl FieldSpec {
    /// Extract this field's value from a group's composed register value
    ///
    /// Re-packs the declared bit positions into a dense, zero-based integer.
    pub fn extract(&self, raw: u32) -> u32 {
        let mut value = 0;
        for (i, &bit) in self.bits.iter().enumerate() {
            if raw & (1 << bit) != 0 {
                value |= 1 << i;
            }
        }
        value
    }

    /// Look up the label for an extracted field value
    ///
    /// Returns `None` if the field has no choice table or the value falls
    /// outside it.
    pub fn label(&self, value: u32) -> Option<&'static str> {
        self.choices?.get(value as usize).copied()
    }
}

/// One logical register of the SRC4392
///
/// Groups one or more byte-wide register addresses into a single value.
/// Addresses are listed in descending byte significance: the first address
/// read supplies the most significant byte of the composed value.
#[derive(Debug)]
pub struct RegisterGroupSpec {
    /// Display label, the hex address or address range of the group
    pub name: &'static str,
    /// Underlying register addresses, most significant byte first
    pub addresses: &'static [u8],
    /// Datasheet description of the register
    pub desc: &'static str,
    /// Named bit-fields, in ascending first-bit order
    ///
    /// Empty for raw/opaque byte groups such as the channel status and user
    /// data buffers.
    pub fields: &'static [FieldSpec],
}

impl RegisterGroupSpec {
    /// Total bit width of the composed register value
    pub fn width(&self) -> u32 {
        8 * self.addresses.len() as u32
    }

    /// Check the descriptor for structural consistency
    ///
    /// The shipped catalogues are verified by tests; callers defining their
    /// own descriptors can use this at load time.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.addresses.is_empty() || self.addresses.len() > 4 {
            return Err(MapError::BadAddressCount { group: self.name });
        }
        for (i, field) in self.fields.iter().enumerate() {
            if field.bits.is_empty() {
                return Err(MapError::EmptyBits {
                    group: self.name,
                    field: field.name,
                });
            }
            for &bit in field.bits {
                if u32::from(bit) >= self.width() {
                    return Err(MapError::BitOutOfRange {
                        group: self.name,
                        field: field.name,
                        bit,
                    });
                }
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(MapError::DuplicateField {
                    group: self.name,
                    field: field.name,
                });
            }
            if let Some(choices) = field.choices {
                if field.bits.len() < 32 && choices.len() > 1 << field.bits.len() {
                    return Err(MapError::OversizedChoices {
                        group: self.name,
                        field: field.name,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Find a register group by its display label within a page's catalogue
pub fn lookup(page: Page, name: &str) -> Option<&'static RegisterGroupSpec> {
    page.groups().iter().find(|group| group.name == name)
}

/// A structural inconsistency in a register group descriptor
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MapError {
    /// A group must cover between one and four register addresses
    BadAddressCount {
        /// Label of the offending group
        group: &'static str,
    },
    /// A field declared no bit positions
    EmptyBits {
        /// Label of the offending group
        group: &'static str,
        /// Name of the offending field
        field: &'static str,
    },
    /// A field bit position exceeds the group's width
    BitOutOfRange {
        /// Label of the offending group
        group: &'static str,
        /// Name of the offending field
        field: &'static str,
        /// The offending bit position
        bit: u8,
    },
    /// Two fields in one group share a name
    DuplicateField {
        /// Label of the offending group
        group: &'static str,
        /// Name of the duplicated field
        field: &'static str,
    },
    /// A choice table is larger than the field's value range
    OversizedChoices {
        /// Label of the offending group
        group: &'static str,
        /// Name of the offending field
        field: &'static str,
    },
}

/// Shorthand for the raw, field-less byte groups of the buffer pages
macro_rules! raw_group {
    ($name:expr, $address:expr, $desc:expr) => {
        RegisterGroupSpec {
            name: $name,
            addresses: &[$address],
            desc: $desc,
            fields: &[],
        }
    };
}
pub(crate) use raw_group;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shipped_groups_validate() {
        for page in [Page::Control, Page::DirBuffer, Page::DitBuffer] {
            for group in page.groups() {
                group.validate().unwrap();
            }
        }
    }

    #[test]
    fn group_labels_are_unique_per_page() {
        for page in [Page::Control, Page::DirBuffer, Page::DitBuffer] {
            let groups = page.groups();
            for (i, group) in groups.iter().enumerate() {
                assert!(
                    groups[..i].iter().all(|g| g.name != group.name),
                    "duplicate group label {} on {:?}",
                    group.name,
                    page
                );
            }
        }
    }

    #[test]
    fn lookup_finds_power_down_register() {
        let group = lookup(Page::Control, "0x01").unwrap();
        assert_eq!(group.addresses, &[0x01]);
        assert_eq!(group.desc, "Power-Down and Reset");
    }

    #[test]
    fn lookup_misses_unknown_label() {
        assert!(lookup(Page::Control, "0xFF").is_none());
    }

    #[test]
    fn page_select_register_is_in_the_map() {
        let group = lookup(Page::Control, "0x7F").unwrap();
        assert_eq!(group.addresses, &[PAGE_SELECTION]);
    }

    #[test]
    fn dump_subset_covers_configuration_and_status() {
        let names: Vec<&str> = page0::DUMP_GROUPS.iter().map(|group| group.name).collect();
        assert_eq!(
            names,
            [
                "0x01", "0x03", "0x04", "0x05", "0x06", "0x07", "0x08", "0x09", "0x0A", "0x0D",
                "0x0E", "0x0F-0x11", "0x12", "0x13", "0x14", "0x15", "0x2B-0x2C", "0x2D", "0x2E",
                "0x2F", "0x30", "0x31",
            ]
        );
    }

    #[test]
    fn pll_group_spans_three_registers() {
        let group = lookup(Page::Control, "0x0F-0x11").unwrap();
        assert_eq!(group.addresses, &[0x0F, 0x10, 0x11]);
        assert_eq!(group.width(), 24);
    }
}
