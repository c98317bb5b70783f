//! Decoding of raw register bytes into structured results
//!
//! The engine composes the bytes of a register group into one integer and
//! extracts the group's named bit-fields from it. It is independent of the
//! bus: [`decode_bytes`] works on any byte slice, and
//! [`crate::hl::Src4392::read_group`] feeds it from a live device.

use crate::regmap::{FieldSpec, RegisterGroupSpec};

/// Compose raw register bytes into a decoded register group value
///
/// `bytes` must hold one byte per group address, in the group's declared
/// address order; the first byte lands in the most significant position.
///
/// # Panics
///
/// Panics if `bytes` does not match the group's address count. The shipped
/// catalogues never exceed four addresses per group.
pub fn decode_bytes(spec: &'static RegisterGroupSpec, bytes: &[u8]) -> DecodeResult {
    assert_eq!(bytes.len(), spec.addresses.len());

    let mut value: u32 = 0;
    for &byte in bytes {
        value = (value << 8) | u32::from(byte);
    }

    DecodeResult { spec, value }
}

/// The decoded state of one register group
///
/// Holds the composed raw value and borrows the descriptor it was decoded
/// against; field values and labels are derived on demand.
#[derive(Copy, Clone, Debug)]
pub struct DecodeResult {
    spec: &'static RegisterGroupSpec,
    value: u32,
}

impl DecodeResult {
    /// The descriptor this result was decoded against
    pub fn spec(&self) -> &'static RegisterGroupSpec {
        self.spec
    }

    /// The register description, as in the datasheet
    pub fn desc(&self) -> &'static str {
        self.spec.desc
    }

    /// The composed raw register value
    ///
    /// Width is 8 bits per group address; the first address read occupies
    /// the most significant byte.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// All named fields of the group, in catalogue order
    pub fn fields(&self) -> impl Iterator<Item = FieldValue> + '_ {
        self.spec.fields.iter().map(|field| {
            let value = field.extract(self.value);
            FieldValue {
                name: field.name,
                value,
                label: field.label(value),
            }
        })
    }

    /// Extract one field's value by name
    pub fn field(&self, name: &str) -> Option<u32> {
        self.field_spec(name).map(|field| field.extract(self.value))
    }

    /// Look up one field's label by name
    ///
    /// `None` if the field does not exist, has no choice table, or its value
    /// falls outside the table.
    pub fn label(&self, name: &str) -> Option<&'static str> {
        self.field_spec(name)?.label(self.field(name)?)
    }

    fn field_spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.spec.fields.iter().find(|field| field.name == name)
    }
}

/// One extracted field of a [`DecodeResult`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldValue {
    /// The field's name
    pub name: &'static str,
    /// The extracted, densely re-packed field value
    pub value: u32,
    /// The field's label, when its choice table covers the value
    pub label: Option<&'static str>,
}

/// Serializes to the register dump shape of the diagnostic tool:
/// `desc`, `value`, then `fields` (name to integer) and `sfields` (name to
/// label, only for labelled fields), both in catalogue order and present
/// only when non-empty.
#[cfg(feature = "serde")]
impl serde::Serialize for DecodeResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        struct Fields<'a>(&'a DecodeResult);

        impl serde::Serialize for Fields<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.0.spec().fields.len()))?;
                for field in self.0.fields() {
                    map.serialize_entry(field.name, &field.value)?;
                }
                map.end()
            }
        }

        struct Labels<'a>(&'a DecodeResult);

        impl serde::Serialize for Labels<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let mut map = serializer.serialize_map(None)?;
                for field in self.0.fields() {
                    if let Some(label) = field.label {
                        map.serialize_entry(field.name, label)?;
                    }
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("desc", self.desc())?;
        map.serialize_entry("value", &self.value)?;
        if !self.spec.fields.is_empty() {
            map.serialize_entry("fields", &Fields(self))?;
            if self.fields().any(|field| field.label.is_some()) {
                map.serialize_entry("sfields", &Labels(self))?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::{FieldSpec, RegisterGroupSpec};

    static CONTIGUOUS: RegisterGroupSpec = RegisterGroupSpec {
        name: "0x40",
        addresses: &[0x40],
        desc: "test register",
        fields: &[FieldSpec {
            name: "LOW3",
            bits: &[0, 1, 2],
            choices: None,
            desc: "",
        }],
    };

    static SCATTERED: RegisterGroupSpec = RegisterGroupSpec {
        name: "0x41",
        addresses: &[0x41],
        desc: "test register",
        fields: &[FieldSpec {
            name: "SWAPPED",
            bits: &[3, 1],
            choices: Some(&["A", "B"]),
            desc: "",
        }],
    };

    static WIDE: RegisterGroupSpec = RegisterGroupSpec {
        name: "0x42-0x43",
        addresses: &[0x42, 0x43],
        desc: "test register pair",
        fields: &[],
    };

    #[test]
    fn contiguous_field_is_a_mask() {
        for raw in [0x00, 0x05, 0x07, 0xFF, 0xA9] {
            let result = decode_bytes(&CONTIGUOUS, &[raw]);
            assert_eq!(result.field("LOW3"), Some(u32::from(raw) & 0b111));
        }
    }

    #[test]
    fn big_endian_composition() {
        let result = decode_bytes(&WIDE, &[0x12, 0x34]);
        assert_eq!(result.value(), 0x1234);
    }

    #[test]
    fn scattered_bits_repack_in_declared_order() {
        // Register bit 3 set, bit 1 clear: field bit 0 set, bit 1 clear.
        let result = decode_bytes(&SCATTERED, &[0b0000_1000]);
        assert_eq!(result.field("SWAPPED"), Some(1));

        // Register bit 1 set, bit 3 clear: only field bit 1 set.
        let result = decode_bytes(&SCATTERED, &[0b0000_0010]);
        assert_eq!(result.field("SWAPPED"), Some(2));
    }

    #[test]
    fn label_within_choice_table() {
        let result = decode_bytes(&SCATTERED, &[0b0000_1000]);
        assert_eq!(result.label("SWAPPED"), Some("B"));
    }

    #[test]
    fn value_outside_choice_table_has_no_label() {
        // Both bits set: field value 3, table only covers 0 and 1.
        let result = decode_bytes(&SCATTERED, &[0b0000_1010]);
        assert_eq!(result.field("SWAPPED"), Some(3));
        assert_eq!(result.label("SWAPPED"), None);
    }

    #[test]
    fn raw_group_has_no_fields() {
        let result = decode_bytes(&WIDE, &[0xAB, 0xCD]);
        assert_eq!(result.fields().count(), 0);
        assert_eq!(result.field("anything"), None);
        assert_eq!(result.label("anything"), None);
    }

    #[test]
    fn unknown_field_name_yields_none() {
        let result = decode_bytes(&CONTIGUOUS, &[0xFF]);
        assert_eq!(result.field("HIGH3"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_original_dump_shape() {
        let result = decode_bytes(&SCATTERED, &[0b0000_1000]);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "desc": "test register",
                "value": 8,
                "fields": { "SWAPPED": 1 },
                "sfields": { "SWAPPED": "B" },
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sfields_omitted_when_no_label_applies() {
        let result = decode_bytes(&SCATTERED, &[0b0000_1010]);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "desc": "test register",
                "value": 10,
                "fields": { "SWAPPED": 3 },
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_group_serializes_value_only() {
        let result = decode_bytes(&WIDE, &[0xAB, 0xCD]);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "desc": "test register pair",
                "value": 0xABCD,
            })
        );
    }
}
