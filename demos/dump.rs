//! Dump the register state of an SRC4392 as JSON.
//!
//! Usage: `dump <channel>`, where `<channel>` names an entry of the channel
//! table below. Decodes the configuration/status subset of page 0 plus the
//! raw DIR and DIT buffer pages, and pretty-prints one JSON object per page.
//!
//! Run with `--features std`; logging is controlled through `RUST_LOG`.

use std::process::ExitCode;

use embedded_hal::i2c::Operation;
use linux_embedded_hal::I2cdev;

use src4392::{regmap::page0, Page, Src4392, DEFAULT_I2C_ADDRESS};

/// A named device context: which bus to open and where the chip lives on it.
struct Channel {
    name: &'static str,
    bus: &'static str,
    address: u8,
}

const CHANNELS: &[Channel] = &[
    Channel {
        name: "main",
        bus: "/dev/i2c-12",
        address: DEFAULT_I2C_ADDRESS,
    },
    Channel {
        name: "monitor",
        bus: "/dev/i2c-13",
        address: DEFAULT_I2C_ADDRESS,
    },
];

/// `linux-embedded-hal`'s bus is blocking; the driver's default build is
/// async. Bridge the two by running the blocking transaction inline.
struct I2cBridge(I2cdev);

impl embedded_hal::i2c::ErrorType for I2cBridge {
    type Error = linux_embedded_hal::I2CError;
}

impl embedded_hal_async::i2c::I2c for I2cBridge {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::transaction(&mut self.0, address, operations)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let selector = match std::env::args().nth(1) {
        Some(selector) => selector,
        None => {
            eprintln!("usage: dump <channel>");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast on an unknown selector, before touching any bus.
    let channel = match CHANNELS.iter().find(|channel| channel.name == selector) {
        Some(channel) => channel,
        None => {
            eprintln!("unknown channel {:?}", selector);
            eprint!("known channels:");
            for channel in CHANNELS {
                eprint!(" {}", channel.name);
            }
            eprintln!();
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "opening {} at 0x{:02X} for channel {}",
        channel.bus,
        channel.address,
        channel.name
    );
    let i2c = match I2cdev::new(channel.bus) {
        Ok(i2c) => i2c,
        Err(error) => {
            eprintln!("failed to open {}: {}", channel.bus, error);
            return ExitCode::FAILURE;
        }
    };

    let mut src4392 = Src4392::new(I2cBridge(i2c), channel.address);

    let dump = async {
        log::info!("dumping page 0");
        let page0 = src4392
            .dump_page(Page::Control, page0::DUMP_GROUPS.iter().copied())
            .await?;
        log::info!("dumping page 1");
        let page1 = src4392
            .dump_page(Page::DirBuffer, Page::DirBuffer.groups().iter())
            .await?;
        log::info!("dumping page 2");
        let page2 = src4392
            .dump_page(Page::DitBuffer, Page::DitBuffer.groups().iter())
            .await?;
        Ok::<_, src4392::Error<I2cBridge>>((page0, page1, page2))
    }
    .await;

    let (page0, page1, page2) = match dump {
        Ok(pages) => pages,
        Err(error) => {
            eprintln!("bus error while dumping: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let report = serde_json::json!({
        "page0": page0,
        "page1": page1,
        "page2": page2,
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("failed to serialize dump: {}", error);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
