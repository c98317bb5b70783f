//! Page 2: DIT channel status and user data buffers
//!
//! The transmitter sources its AES3 block of channel status (C) and user (U)
//! data per channel from these buffers. The bytes carry no device-defined
//! bit-fields; they are dumped raw and interpreted against IEC 60958 by the
//! caller.

use super::{raw_group, RegisterGroupSpec};

/// Every register group on page 2, in address order
pub static ALL: [RegisterGroupSpec; 48] = [
    raw_group!("0x00", 0x00, "DIT Channel Status Byte 0"),
    raw_group!("0x01", 0x01, "DIT Channel Status Byte 1"),
    raw_group!("0x02", 0x02, "DIT Channel Status Byte 2"),
    raw_group!("0x03", 0x03, "DIT Channel Status Byte 3"),
    raw_group!("0x04", 0x04, "DIT Channel Status Byte 4"),
    raw_group!("0x05", 0x05, "DIT Channel Status Byte 5"),
    raw_group!("0x06", 0x06, "DIT Channel Status Byte 6"),
    raw_group!("0x07", 0x07, "DIT Channel Status Byte 7"),
    raw_group!("0x08", 0x08, "DIT Channel Status Byte 8"),
    raw_group!("0x09", 0x09, "DIT Channel Status Byte 9"),
    raw_group!("0x0A", 0x0A, "DIT Channel Status Byte 10"),
    raw_group!("0x0B", 0x0B, "DIT Channel Status Byte 11"),
    raw_group!("0x0C", 0x0C, "DIT Channel Status Byte 12"),
    raw_group!("0x0D", 0x0D, "DIT Channel Status Byte 13"),
    raw_group!("0x0E", 0x0E, "DIT Channel Status Byte 14"),
    raw_group!("0x0F", 0x0F, "DIT Channel Status Byte 15"),
    raw_group!("0x10", 0x10, "DIT Channel Status Byte 16"),
    raw_group!("0x11", 0x11, "DIT Channel Status Byte 17"),
    raw_group!("0x12", 0x12, "DIT Channel Status Byte 18"),
    raw_group!("0x13", 0x13, "DIT Channel Status Byte 19"),
    raw_group!("0x14", 0x14, "DIT Channel Status Byte 20"),
    raw_group!("0x15", 0x15, "DIT Channel Status Byte 21"),
    raw_group!("0x16", 0x16, "DIT Channel Status Byte 22"),
    raw_group!("0x17", 0x17, "DIT Channel Status Byte 23"),
    raw_group!("0x18", 0x18, "DIT User Data Byte 0"),
    raw_group!("0x19", 0x19, "DIT User Data Byte 1"),
    raw_group!("0x1A", 0x1A, "DIT User Data Byte 2"),
    raw_group!("0x1B", 0x1B, "DIT User Data Byte 3"),
    raw_group!("0x1C", 0x1C, "DIT User Data Byte 4"),
    raw_group!("0x1D", 0x1D, "DIT User Data Byte 5"),
    raw_group!("0x1E", 0x1E, "DIT User Data Byte 6"),
    raw_group!("0x1F", 0x1F, "DIT User Data Byte 7"),
    raw_group!("0x20", 0x20, "DIT User Data Byte 8"),
    raw_group!("0x21", 0x21, "DIT User Data Byte 9"),
    raw_group!("0x22", 0x22, "DIT User Data Byte 10"),
    raw_group!("0x23", 0x23, "DIT User Data Byte 11"),
    raw_group!("0x24", 0x24, "DIT User Data Byte 12"),
    raw_group!("0x25", 0x25, "DIT User Data Byte 13"),
    raw_group!("0x26", 0x26, "DIT User Data Byte 14"),
    raw_group!("0x27", 0x27, "DIT User Data Byte 15"),
    raw_group!("0x28", 0x28, "DIT User Data Byte 16"),
    raw_group!("0x29", 0x29, "DIT User Data Byte 17"),
    raw_group!("0x2A", 0x2A, "DIT User Data Byte 18"),
    raw_group!("0x2B", 0x2B, "DIT User Data Byte 19"),
    raw_group!("0x2C", 0x2C, "DIT User Data Byte 20"),
    raw_group!("0x2D", 0x2D, "DIT User Data Byte 21"),
    raw_group!("0x2E", 0x2E, "DIT User Data Byte 22"),
    raw_group!("0x2F", 0x2F, "DIT User Data Byte 23"),
];
