//! Page 0: control and status registers
//!
//! Transcribed from the SRC4392 datasheet register map. Choice tables carry
//! exactly the values the datasheet enumerates; a field whose table does not
//! cover its full value range decodes without a label for the uncovered
//! values.

use super::{FieldSpec, RegisterGroupSpec, PAGE_SELECTION};

/// The selectable sources shared by all four general-purpose outputs
const GPO_SOURCES: &[&str] = &[
    "Forced Low",
    "Forced High",
    "SRC Interrupt (Active Low)",
    "Transmitter Interrupt (Active Low)",
    "Receiver Interrupt (Active Low)",
    "Receiver 50/15\u{3bc}s Pre-Emphasis (Active Low)",
    "Receiver Non-Audio Data (Active High)",
    "Receiver Non-Valid Data (Active High)",
    "Receiver Channel Status Bit",
    "Receiver User Data Bit",
    "Receiver Block Start Clock",
    "Receiver COPY Bit",
    "Receiver L-Bit",
    "Receiver Parity Error (Active High)",
    "Receiver Internal Sync Clock",
    "Transmitter Internal Sync Clock",
];

/// An Audio CD Q-channel sub-code byte
///
/// Bit 0 of the register carries the highest-numbered Q bit of the byte, so
/// names are listed from register bit 0 upward.
macro_rules! q_subcode_group {
    ($name:expr, $address:expr,
     $q0:expr, $q1:expr, $q2:expr, $q3:expr,
     $q4:expr, $q5:expr, $q6:expr, $q7:expr) => {
        RegisterGroupSpec {
            name: $name,
            addresses: &[$address],
            desc: "Audio CD Q-Channel Sub-Code",
            fields: &[
                FieldSpec { name: $q0, bits: &[0], choices: None, desc: "" },
                FieldSpec { name: $q1, bits: &[1], choices: None, desc: "" },
                FieldSpec { name: $q2, bits: &[2], choices: None, desc: "" },
                FieldSpec { name: $q3, bits: &[3], choices: None, desc: "" },
                FieldSpec { name: $q4, bits: &[4], choices: None, desc: "" },
                FieldSpec { name: $q5, bits: &[5], choices: None, desc: "" },
                FieldSpec { name: $q6, bits: &[6], choices: None, desc: "" },
                FieldSpec { name: $q7, bits: &[7], choices: None, desc: "" },
            ],
        }
    };
}

/// Every register group on page 0, in address order
pub static ALL: [RegisterGroupSpec; 47] = [
    RegisterGroupSpec {
        name: "0x01",
        addresses: &[0x01],
        desc: "Power-Down and Reset",
        fields: &[
            FieldSpec {
                name: "PDNSRCn",
                bits: &[0],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for the SRC Function Block",
            },
            FieldSpec {
                name: "PDNRXn",
                bits: &[1],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for the Receiver Function Block",
            },
            FieldSpec {
                name: "PDNTXn",
                bits: &[2],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for the Transmitter Function Block",
            },
            FieldSpec {
                name: "PDNPBn",
                bits: &[3],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for Serial Port B",
            },
            FieldSpec {
                name: "PDNPAn",
                bits: &[4],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for Serial Port A",
            },
            FieldSpec {
                name: "PDNALLn",
                bits: &[5],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Power-Down for All Functions",
            },
            FieldSpec {
                name: "RESET",
                bits: &[7],
                choices: Some(&["Disabled", "Enabled"]),
                desc: "Software Reset",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x02",
        addresses: &[0x02],
        desc: "Global Interrupt Status",
        fields: &[
            FieldSpec {
                name: "SRC",
                bits: &[0],
                choices: None,
                desc: "SRC Function Block Interrupt Status (Active High)",
            },
            FieldSpec {
                name: "RX",
                bits: &[1],
                choices: None,
                desc: "Receiver Function Block Interrupt Status (Active High)",
            },
            FieldSpec {
                name: "TX",
                bits: &[2],
                choices: None,
                desc: "Transmitter Function Block Interrupt Status (Active High)",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x03",
        addresses: &[0x03],
        desc: "Port A Control",
        fields: &[
            FieldSpec {
                name: "AFMT",
                bits: &[0, 1, 2],
                choices: Some(&[
                    "24-Bit Left-Justified",
                    "24-Bit Philips I2S",
                    "Unused",
                    "Unused",
                    "16-Bit Right-Justified",
                    "18-Bit Right-Justified",
                    "20-Bit Right-Justified",
                    "24-Bit Right-Justified",
                ]),
                desc: "Port A Audio Data Format",
            },
            FieldSpec {
                name: "AM/S",
                bits: &[3],
                choices: Some(&["Slave mode", "Master mode"]),
                desc: "Port A Slave/Master Mode",
            },
            FieldSpec {
                name: "AOUTS",
                bits: &[4, 5],
                choices: Some(&["Port A Input", "Port B Input", "DIR", "SRC"]),
                desc: "Port A Output Data Source",
            },
            FieldSpec {
                name: "AMUTE",
                bits: &[6],
                choices: Some(&["Unmuted", "Muted"]),
                desc: "Port A Output Mute",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x04",
        addresses: &[0x04],
        desc: "Port A Control",
        fields: &[
            FieldSpec {
                name: "ADIV",
                bits: &[0, 1],
                choices: Some(&[
                    "Divide by 128",
                    "Divide by 256",
                    "Divide by 384",
                    "Divide by 512",
                ]),
                desc: "Port A Master Clock Divider",
            },
            FieldSpec {
                name: "ACLK",
                bits: &[2, 3],
                choices: Some(&["MCLK", "RXCKI", "RXCKO", "Reserved"]),
                desc: "Port A Master Clock Source",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x05",
        addresses: &[0x05],
        desc: "Port B Control",
        fields: &[
            FieldSpec {
                name: "BFMT",
                bits: &[0, 1, 2],
                choices: Some(&[
                    "24-Bit Left-Justified",
                    "24-Bit Philips I2S",
                    "Unused",
                    "Unused",
                    "16-Bit Right-Justified",
                    "18-Bit Right-Justified",
                    "20-Bit Right-Justified",
                    "24-Bit Right-Justified",
                ]),
                desc: "Port B Audio Data Format",
            },
            FieldSpec {
                name: "BM/S",
                bits: &[3],
                choices: Some(&["Slave", "Master"]),
                desc: "Port B Slave/Master Mode",
            },
            FieldSpec {
                name: "BOUTS",
                bits: &[4, 5],
                choices: Some(&["Port B Input", "Port A Input", "DIR", "SRC"]),
                desc: "Port B Output Source",
            },
            FieldSpec {
                name: "BMUTE",
                bits: &[6],
                choices: Some(&["Unmuted", "Muted"]),
                desc: "Port B Output Mute",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x06",
        addresses: &[0x06],
        desc: "Port B Control",
        fields: &[
            FieldSpec {
                name: "BDIV",
                bits: &[0, 1],
                choices: Some(&[
                    "Divide by 128",
                    "Divide by 256",
                    "Divide by 384",
                    "Divide by 512",
                ]),
                desc: "Port B Master Clock Divider",
            },
            FieldSpec {
                name: "BCLK",
                bits: &[2, 3],
                choices: Some(&["MCLK", "RXCKI", "RXCKO", "Reserved"]),
                desc: "Port B Master Clock Source",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x07",
        addresses: &[0x07],
        desc: "Transmitter Control",
        fields: &[
            FieldSpec {
                name: "BSSL",
                bits: &[0],
                choices: Some(&["Data Slip Condition", "Block Start Condition"]),
                desc: "Block Start or Asynchronous Data Slip Interrupt Trigger Selection",
            },
            FieldSpec {
                name: "VALID",
                bits: &[1],
                choices: Some(&["Valid", "Invalid"]),
                desc: "Validity (V) Data Bit",
            },
            FieldSpec {
                name: "BLSM",
                bits: &[2],
                choices: Some(&["Input", "Output"]),
                desc: "Transmitter Block Start Input/Output Mode",
            },
            FieldSpec {
                name: "TXIS",
                bits: &[3, 4],
                choices: Some(&["Port A", "Port B", "DIR", "SRC"]),
                desc: "Transmitter Input Data Source",
            },
            FieldSpec {
                name: "TXDIV",
                bits: &[5, 6],
                choices: Some(&[
                    "Divide by 128",
                    "Divide by 256",
                    "Divide by 384",
                    "Divide by 512",
                ]),
                desc: "Transmitter Master Clock Divider",
            },
            FieldSpec {
                name: "TXCLK",
                bits: &[7],
                choices: Some(&["MCLK Input", "RXCKO"]),
                desc: "Transmitter Master Clock Source",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x08",
        addresses: &[0x08],
        desc: "Transmitter Control",
        fields: &[
            FieldSpec {
                name: "TXOFF",
                bits: &[0],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Transmitter Line Driver Output Enable",
            },
            FieldSpec {
                name: "TXMUTE",
                bits: &[1],
                choices: Some(&["Unmuted", "Muted"]),
                desc: "Transmitter Audio Data Mute",
            },
            FieldSpec {
                name: "AESOFF",
                bits: &[2],
                choices: Some(&["AES On", "AES Off"]),
                desc: "AESOUT Output Enable",
            },
            FieldSpec {
                name: "TXBTD",
                bits: &[3],
                choices: Some(&["Enabled", "Disabled"]),
                desc: "Transmitter C and U Data Buffer Transfer Disable",
            },
            FieldSpec {
                name: "LDMUX",
                bits: &[4],
                choices: Some(&["DIT AES3 Encoder Output", "Bypass Multiplexer Output"]),
                desc: "Transmitter Line Driver Input Source Selection",
            },
            FieldSpec {
                name: "AESMUX",
                bits: &[5],
                choices: Some(&["DIT AES3 Encoder Output", "Bypass Multiplexer Output"]),
                desc: "AESOUT CMOS Buffer Input Source Selection",
            },
            FieldSpec {
                name: "BYPMUX",
                bits: &[6, 7],
                choices: Some(&["RX1", "RX2", "RX3", "RX4"]),
                desc: "Bypass Multiplexer Source Selection",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x09",
        addresses: &[0x09],
        desc: "Transmitter Control",
        fields: &[
            FieldSpec {
                name: "TXCUS",
                bits: &[0, 1],
                choices: Some(&[
                    "Buffers not updated",
                    "Updated via SPI or I2C",
                    "Updated via DIR RA buffers",
                    "first 10 bytes via SPI or I2C and remainder via DIR RA buffers",
                ]),
                desc: "Transmitter Channel Status and User Data Source",
            },
            FieldSpec {
                name: "VALSEL",
                bits: &[2],
                choices: Some(&[
                    "VALID bit in control register 0x07",
                    "bit is transferred from the DIR block with zero latency",
                ]),
                desc: "Transmitter Validity Bit Source",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0A",
        addresses: &[0x0A],
        desc: "SRC and DIT Status",
        fields: &[
            FieldSpec {
                name: "TBTI",
                bits: &[0],
                choices: None,
                desc: "Transmitter Buffer Transfer Status, Active High",
            },
            FieldSpec {
                name: "TSLIP",
                bits: &[1],
                choices: None,
                desc: "Transmitter Source Data Slip Status, Active High",
            },
            FieldSpec {
                name: "READY",
                bits: &[4],
                choices: None,
                desc: "SRC Rate Estimator Ready Status, Active High",
            },
            FieldSpec {
                name: "RATIO",
                bits: &[5],
                choices: None,
                desc: "SRC Ratio Status, Active High",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0B",
        addresses: &[0x0B],
        desc: "SRC and DIT Interrupt Mask",
        fields: &[
            FieldSpec {
                name: "MTBTI",
                bits: &[0],
                choices: Some(&["BTI interrupt is masked", "BTI interrupt is enabled"]),
                desc: "Transmitter Buffer Transfer Interrupt Mask",
            },
            FieldSpec {
                name: "MTSLIP",
                bits: &[1],
                choices: Some(&["TSLIP interrupt is masked", "TSLIP interrupt is enabled"]),
                desc: "Transmitter TSLIP Interrupt Mask",
            },
            FieldSpec {
                name: "MREADY",
                bits: &[4],
                choices: Some(&["READY interrupt is masked", "READY interrupt is enabled"]),
                desc: "SRC Ready Interrupt Mask",
            },
            FieldSpec {
                name: "MRATIO",
                bits: &[5],
                choices: Some(&["RATIO interrupt is masked", "RATIO interrupt is enabled"]),
                desc: "SRC Ratio Interrupt Mask",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0C",
        addresses: &[0x0C],
        desc: "SRC and DIT Interrupt Mode",
        fields: &[
            FieldSpec {
                name: "TBTIM",
                bits: &[0, 1],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Transmitter Buffer Transfer Interrupt Mode",
            },
            FieldSpec {
                name: "TSLIPM",
                bits: &[2, 3],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Transmitter Data Source Slip Interrupt Mode",
            },
            FieldSpec {
                name: "READYM",
                bits: &[4, 5],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "SRC Ready Interrupt Mode",
            },
            FieldSpec {
                name: "RATIOM",
                bits: &[6, 7],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "SRC Ratio Interrupt Mode",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0D",
        addresses: &[0x0D],
        desc: "Receiver Control",
        fields: &[
            FieldSpec {
                name: "RXMUX",
                bits: &[0, 1],
                choices: Some(&["RX1", "RX2", "RX3", "RX4"]),
                desc: "Receiver Input Source Selection",
            },
            FieldSpec {
                name: "RXCLK",
                bits: &[3],
                choices: Some(&["RXCKI", "MCLK"]),
                desc: "Receiver Reference Clock Source",
            },
            FieldSpec {
                name: "RXBTD",
                bits: &[4],
                choices: Some(&[
                    "Enabled",
                    "Disabled; the user may read C and U data from the DIR UA buffers",
                ]),
                desc: "Receiver C and U Data Buffer Transfer Disable",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0E",
        addresses: &[0x0E],
        desc: "Receiver Control",
        fields: &[
            FieldSpec {
                name: "RXCKOE",
                bits: &[0],
                choices: Some(&[
                    "Disabled; the RXCKO output is set to high-impedance",
                    "Enabled; the recovered master clock is available at RXCKO",
                ]),
                desc: "RXCKO Output Enable",
            },
            FieldSpec {
                name: "RXCKOD",
                bits: &[1, 2],
                choices: Some(&["Passthrough", "PLL2 / 2", "PLL2 / 4", "PLL2 / 8"]),
                desc: "RXCKO Output Clock Divider",
            },
            FieldSpec {
                name: "RXAMLL",
                bits: &[3],
                choices: Some(&["Disabled", "Enabled; MUTE on LOL"]),
                desc: "Receiver Automatic Mute for Loss of Lock",
            },
            FieldSpec {
                name: "LOL",
                bits: &[4],
                choices: Some(&[
                    "PLL2 output clock is stopped for LOL",
                    "PLL2 output clock free runs when LOL",
                ]),
                desc: "Receiver Loss of Lock Mode for the Recovered Clock (output from PLL2)",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x0F-0x11",
        addresses: &[0x0F, 0x10, 0x11],
        desc: "Receiver PLL Configuration",
        fields: &[
            FieldSpec {
                name: "D",
                bits: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
                choices: None,
                desc: "Fractional part (0-9999) of K=J.D",
            },
            FieldSpec {
                name: "J",
                bits: &[14, 15, 16, 17, 18, 19],
                choices: None,
                desc: "Integer part (1 to 63) of K=J.D",
            },
            FieldSpec {
                name: "P",
                bits: &[20, 21, 22, 23],
                choices: None,
                desc: "Pre-Divider (1-7)",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x12",
        addresses: &[0x12],
        desc: "Non-PCM Audio Detection",
        fields: &[
            FieldSpec {
                name: "IEC61937",
                bits: &[0],
                choices: Some(&["Not an IEC61937 format", "IEC61937 format"]),
                desc: "Indicates detection of an IEC 61937 data",
            },
            FieldSpec {
                name: "DTS CD/LD",
                bits: &[1],
                choices: Some(&["CD/LD is not DTS encoded", "DTS CD/LD playback detected"]),
                desc: "Indicates detection of a DTS encoded audio",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x13",
        addresses: &[0x13],
        desc: "Receiver Status",
        fields: &[FieldSpec {
            name: "RXCKR",
            bits: &[0, 1],
            choices: Some(&["Clock rate not determined", "128fs", "256fs", "512fs"]),
            desc: "Maximum Available Recovered Clock Rate",
        }],
    },
    RegisterGroupSpec {
        name: "0x14",
        addresses: &[0x14],
        desc: "Receiver Status",
        fields: &[
            FieldSpec {
                name: "RBTI",
                bits: &[0],
                choices: Some(&[
                    "Buffer Transfer Incomplete, or No Buffer Transfer Interrupt Indicated",
                    "Buffer Transfer Completed",
                ]),
                desc: "Receiver Buffer Transfer Interrupt Status",
            },
            FieldSpec {
                name: "QCRC",
                bits: &[1],
                choices: Some(&["No Error", "Q-channel sub-code data CRC error detected"]),
                desc: "Q-Channel Sub-Code CRC Status",
            },
            FieldSpec {
                name: "UNLOCK",
                bits: &[2],
                choices: Some(&[
                    "No error; the DIR AES3 decoder and PLL2 are locked",
                    "DIR lock error; the AES3 decoder and PLL2 are unlocked",
                ]),
                desc: "DIR Unlock Error Status",
            },
            FieldSpec {
                name: "QCHG",
                bits: &[3],
                choices: Some(&[
                    "No change in Q-channel sub-code data",
                    "Q-channel data has changed",
                ]),
                desc: "Q-Channel Sub-Code Data Change Status",
            },
            FieldSpec {
                name: "BPERR",
                bits: &[4],
                choices: Some(&["No Error", "Bipolar Encoding Error Detected"]),
                desc: "Bipolar Encoding Error Status",
            },
            FieldSpec {
                name: "VBIT",
                bits: &[5],
                choices: Some(&["Valid Audio Data Indicated", "Non-Valid Data Indicated"]),
                desc: "Validity Bit Status",
            },
            FieldSpec {
                name: "PARITY",
                bits: &[6],
                choices: Some(&["No Error", "Parity Error Detected"]),
                desc: "Parity Status",
            },
            FieldSpec {
                name: "CSCRC",
                bits: &[7],
                choices: Some(&["No Error", "CRC Error Detected"]),
                desc: "Channel Status CRC Status",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x15",
        addresses: &[0x15],
        desc: "Receiver Status",
        fields: &[FieldSpec {
            name: "OSLIP",
            bits: &[0],
            choices: Some(&["No Error", "DIR Output Data Slip/Repeat Error Detected"]),
            desc: "Receiver Output Data Slip Error Status",
        }],
    },
    RegisterGroupSpec {
        name: "0x16",
        addresses: &[0x16],
        desc: "Receiver Interrupt Mask",
        fields: &[
            FieldSpec {
                name: "MRBTI",
                bits: &[0],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Receiver Buffer Transfer Interrupt Mask",
            },
            FieldSpec {
                name: "MQCRC",
                bits: &[1],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Q-Channel Sub-Code CRC Error Interrupt Mask",
            },
            FieldSpec {
                name: "MUNLOCK",
                bits: &[2],
                choices: Some(&["Masked", "Enabled"]),
                desc: "DIR Unlock Error Interrupt Mask",
            },
            FieldSpec {
                name: "MQCHG",
                bits: &[3],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Q-Channel Sub-Code Data Change Interrupt Mask",
            },
            FieldSpec {
                name: "MBPERR",
                bits: &[4],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Bipolar Encoding Error Interrupt Mask",
            },
            FieldSpec {
                name: "MVBIT",
                bits: &[5],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Validity Bit Interrupt Mask",
            },
            FieldSpec {
                name: "MPARITY",
                bits: &[6],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Parity Error Interrupt Mask",
            },
            FieldSpec {
                name: "MCSCRC",
                bits: &[7],
                choices: Some(&["Masked", "Enabled"]),
                desc: "Channel Status CRC Error Interrupt Mask",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x17",
        addresses: &[0x17],
        desc: "Receiver Interrupt Mask",
        fields: &[FieldSpec {
            name: "MOSLIP",
            bits: &[0],
            choices: Some(&["Masked", "Enabled"]),
            desc: "Receiver Output Data Slip Error Mask",
        }],
    },
    RegisterGroupSpec {
        name: "0x18",
        addresses: &[0x18],
        desc: "Receiver Interrupt Mode",
        fields: &[
            FieldSpec {
                name: "RBTIM",
                bits: &[0, 1],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Receive Buffer Transfer Interrupt Mode",
            },
            FieldSpec {
                name: "QCRCM",
                bits: &[2, 3],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Q-Channel Sub-Code CRC Error Interrupt Mode",
            },
            FieldSpec {
                name: "UNLOCKM",
                bits: &[4, 5],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "DIR Unlock Error Interrupt Mode",
            },
            FieldSpec {
                name: "QCHGM",
                bits: &[6, 7],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Q-Channel Sub-Code Data Change Interrupt Mode",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x19",
        addresses: &[0x19],
        desc: "Receiver Interrupt Mode",
        fields: &[
            FieldSpec {
                name: "BPERRM",
                bits: &[0, 1],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Bipolar Encoding Error Interrupt Mode",
            },
            FieldSpec {
                name: "VBITM",
                bits: &[2, 3],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Validity Error Interrupt Mode",
            },
            FieldSpec {
                name: "PARITYM",
                bits: &[4, 5],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Parity Error Interrupt Mode",
            },
            FieldSpec {
                name: "CSCRCM",
                bits: &[6, 7],
                choices: Some(&[
                    "Rising Edge Active",
                    "Falling Edge Active",
                    "Level Active",
                    "Reserved",
                ]),
                desc: "Channel Status CRC Error Interrupt Mode",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x1A",
        addresses: &[0x1A],
        desc: "Receiver Interrupt Mode",
        fields: &[FieldSpec {
            name: "OSLIPM",
            bits: &[0, 1],
            choices: Some(&[
                "Rising Edge Active",
                "Falling Edge Active",
                "Level Active",
                "Reserved",
            ]),
            desc: "Receiver Output Data Slip Error Interrupt Mode",
        }],
    },
    RegisterGroupSpec {
        name: "0x1B",
        addresses: &[0x1B],
        desc: "General-Purpose Out (GPO1)",
        fields: &[FieldSpec {
            name: "GPO1",
            bits: &[0, 1, 2, 3],
            choices: Some(GPO_SOURCES),
            desc: "General-Purpose Output 1 (GPO1) Configuration",
        }],
    },
    RegisterGroupSpec {
        name: "0x1C",
        addresses: &[0x1C],
        desc: "General-Purpose Out (GPO2)",
        fields: &[FieldSpec {
            name: "GPO2",
            bits: &[0, 1, 2, 3],
            choices: Some(GPO_SOURCES),
            desc: "General-Purpose Output 2 (GPO2) Configuration",
        }],
    },
    RegisterGroupSpec {
        name: "0x1D",
        addresses: &[0x1D],
        desc: "General-Purpose Out (GPO3)",
        fields: &[FieldSpec {
            name: "GPO3",
            bits: &[0, 1, 2, 3],
            choices: Some(GPO_SOURCES),
            desc: "General-Purpose Output 3 (GPO3) Configuration",
        }],
    },
    RegisterGroupSpec {
        name: "0x1E",
        addresses: &[0x1E],
        desc: "General-Purpose Out (GPO4)",
        fields: &[FieldSpec {
            name: "GPO4",
            bits: &[0, 1, 2, 3],
            choices: Some(GPO_SOURCES),
            desc: "General-Purpose Output 4 (GPO4) Configuration",
        }],
    },
    q_subcode_group!("0x1F", 0x1F, "Q7", "Q6", "Q5", "Q4", "Q3", "Q2", "Q1", "Q0"),
    q_subcode_group!("0x20", 0x20, "Q15", "Q14", "Q13", "Q12", "Q11", "Q10", "Q9", "Q8"),
    q_subcode_group!("0x21", 0x21, "Q23", "Q22", "Q21", "Q20", "Q19", "Q18", "Q17", "Q16"),
    q_subcode_group!("0x22", 0x22, "Q31", "Q30", "Q29", "Q28", "Q27", "Q26", "Q25", "Q24"),
    q_subcode_group!("0x23", 0x23, "Q39", "Q38", "Q37", "Q36", "Q35", "Q34", "Q33", "Q32"),
    q_subcode_group!("0x24", 0x24, "Q47", "Q46", "Q45", "Q44", "Q43", "Q42", "Q41", "Q40"),
    q_subcode_group!("0x25", 0x25, "Q55", "Q54", "Q53", "Q52", "Q51", "Q50", "Q49", "Q48"),
    q_subcode_group!("0x26", 0x26, "Q63", "Q62", "Q61", "Q60", "Q59", "Q58", "Q57", "Q56"),
    q_subcode_group!("0x27", 0x27, "Q71", "Q70", "Q69", "Q68", "Q67", "Q66", "Q65", "Q64"),
    q_subcode_group!("0x28", 0x28, "Q79", "Q78", "Q77", "Q76", "Q75", "Q74", "Q73", "Q72"),
    RegisterGroupSpec {
        name: "0x29-0x2A",
        addresses: &[0x29, 0x2A],
        desc: "PC Burst Preamble",
        fields: &[
            FieldSpec {
                name: "PC_DATATYPE",
                bits: &[0, 1, 2, 3, 4],
                choices: Some(&[
                    "Null",
                    "Dolby AC-3",
                    "Reserved",
                    "Pause",
                    "MPEG-1 Layer 1",
                    "MPEG-1 Layer 2 or 3 or MPEG-3 Without Extension",
                    "MPEG-2 Data With Extension",
                    "MPEG-2 AAC ADTS",
                    "MPEG-2 Layer 1 Low Sample Rate",
                    "MPEG-2 Layer 2 or 3 Low Sample Rate",
                    "Reserved",
                    "DTS Type 1",
                    "DTS Type 2",
                    "DTS Type 3",
                    "ATRAC",
                    "ATRAC2/3",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                    "Reserved",
                ]),
                desc: "PC Data Type",
            },
            FieldSpec {
                name: "PC_ERROR",
                bits: &[7],
                choices: Some(&["Valid burst-payload", "Burst-payload may contain errors"]),
                desc: "PC Error Flag",
            },
            FieldSpec {
                name: "PC_DATA",
                bits: &[8, 9, 10, 11, 12],
                choices: None,
                desc: "PC Data-Type-Dependent Information",
            },
            FieldSpec {
                name: "PC_STREAMNUMBER",
                bits: &[13, 14, 15],
                choices: None,
                desc: "PC Stream Number",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x2B-0x2C",
        addresses: &[0x2B, 0x2C],
        desc: "PD Burst Preamble",
        fields: &[FieldSpec {
            name: "PD_LENGTH",
            bits: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
            choices: None,
            desc: "PD Length of Burst",
        }],
    },
    RegisterGroupSpec {
        name: "0x2D",
        addresses: &[0x2D],
        desc: "SRC Control",
        fields: &[
            FieldSpec {
                name: "SRCIS",
                bits: &[0, 1],
                choices: Some(&["Port A", "Port B", "DIR", "Reserved"]),
                desc: "SRC Input Data Source",
            },
            FieldSpec {
                name: "SRCCLK",
                bits: &[2, 3],
                choices: Some(&["MCLK", "RXCKI", "RXCKO", "Reserved"]),
                desc: "SRC Reference Clock Source",
            },
            FieldSpec {
                name: "MUTE",
                bits: &[4],
                choices: Some(&["Unmuted", "Muted"]),
                desc: "SRC Output Soft Mute Function",
            },
            FieldSpec {
                name: "TRACK",
                bits: &[6],
                choices: Some(&["L/R independent attenuation", "R attenuation tracks L"]),
                desc: "SRC Digital Output Attenuation Tracking",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x2E",
        addresses: &[0x2E],
        desc: "SRC Control",
        fields: &[
            FieldSpec {
                name: "IGRP",
                bits: &[0, 1],
                choices: Some(&["64 Samples", "32 Samples", "16 Samples", "8 Samples"]),
                desc: "SRC Interpolation Filter Group Delay",
            },
            FieldSpec {
                name: "DDN",
                bits: &[2],
                choices: Some(&["Decimation Filter", "Direct Down Sampling"]),
                desc: "SRC Decimation Filter/Direct Down-Sampling Function",
            },
            FieldSpec {
                name: "DEM",
                bits: &[3, 4],
                choices: Some(&[
                    "De-Emphasis Disabled",
                    "De-Emphasis Enabled for fS = 48kHz",
                    "De-Emphasis Enabled for fS = 44.1kHz",
                    "De-Emphasis Enabled for fS = 32kHz",
                ]),
                desc: "Digital De-Emphasis Filter, Manual Configuration",
            },
            FieldSpec {
                name: "AUTODEM",
                bits: &[5],
                choices: Some(&["Disabled", "Enabled"]),
                desc: "Automatic De-Emphasis Configuration",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x2F",
        addresses: &[0x2F],
        desc: "SRC Control",
        fields: &[FieldSpec {
            name: "OWL",
            bits: &[6, 7],
            choices: Some(&["24 Bits", "20 Bits", "18 Bits", "16 Bits"]),
            desc: "SRC Output Word Length",
        }],
    },
    RegisterGroupSpec {
        name: "0x30",
        addresses: &[0x30],
        desc: "SRC Control",
        fields: &[FieldSpec {
            name: "AL",
            bits: &[0, 1, 2, 3, 4, 5, 6, 7],
            choices: None,
            desc: "Left Channel Attenuation",
        }],
    },
    RegisterGroupSpec {
        name: "0x31",
        addresses: &[0x31],
        desc: "SRC Control",
        fields: &[FieldSpec {
            name: "AR",
            bits: &[0, 1, 2, 3, 4, 5, 6, 7],
            choices: None,
            desc: "Right Channel Attenuation",
        }],
    },
    RegisterGroupSpec {
        name: "0x32-0x33",
        addresses: &[0x32, 0x33],
        desc: "SRC Input: Output Ratio",
        fields: &[
            FieldSpec {
                name: "SRF",
                bits: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                choices: None,
                desc: "Fractional Part of the Input-to-Output Sampling Ratio",
            },
            FieldSpec {
                name: "SRI",
                bits: &[11, 12, 13, 14, 15],
                choices: None,
                desc: "Integer Part of the Input-to-Output Sampling Ratio",
            },
        ],
    },
    RegisterGroupSpec {
        name: "0x7F",
        addresses: &[PAGE_SELECTION],
        desc: "Page Selection",
        fields: &[FieldSpec {
            name: "PAGE",
            bits: &[0, 1],
            choices: Some(&[
                "Page 0, Control and Status Registers",
                "Page 1, DIR Channel Status and User Data Buffers",
                "Page 2, DIT Channel Status and User Data Buffers",
                "Page 3, Reserved",
            ]),
            desc: "Page Selection",
        }],
    },
];

/// The register groups dumped by the diagnostic tool: configuration and
/// status, skipping interrupt plumbing, GPO routing and the Q sub-code bytes
pub static DUMP_GROUPS: [&RegisterGroupSpec; 22] = [
    &ALL[0],  // 0x01 Power-Down and Reset
    &ALL[2],  // 0x03 Port A Control
    &ALL[3],  // 0x04 Port A Control
    &ALL[4],  // 0x05 Port B Control
    &ALL[5],  // 0x06 Port B Control
    &ALL[6],  // 0x07 Transmitter Control
    &ALL[7],  // 0x08 Transmitter Control
    &ALL[8],  // 0x09 Transmitter Control
    &ALL[9],  // 0x0A SRC and DIT Status
    &ALL[12], // 0x0D Receiver Control
    &ALL[13], // 0x0E Receiver Control
    &ALL[14], // 0x0F-0x11 Receiver PLL Configuration
    &ALL[15], // 0x12 Non-PCM Audio Detection
    &ALL[16], // 0x13 Receiver Status
    &ALL[17], // 0x14 Receiver Status
    &ALL[18], // 0x15 Receiver Status
    &ALL[39], // 0x2B-0x2C PD Burst Preamble
    &ALL[40], // 0x2D SRC Control
    &ALL[41], // 0x2E SRC Control
    &ALL[42], // 0x2F SRC Control
    &ALL[43], // 0x30 SRC Control
    &ALL[44], // 0x31 SRC Control
];
