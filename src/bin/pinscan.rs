//! Pin diagnostic scan firmware for the Pico 2 W
//!
//! Boots, probes every GPIO the board declares, and logs the system and pin
//! reports over defmt.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use panic_probe as _;

use pinscan::pinout::PinoutTable;
use pinscan::platform::rp2350::Rp2350Platform;
use pinscan::platform::traits::Platform;
use pinscan::report;
use pinscan::scan::scan_all;

#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

static PINOUTS: &str = include_str!("../../data/pinouts.ini");

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let mut platform = match Rp2350Platform::init() {
        Ok(platform) => platform,
        Err(error) => {
            defmt::panic!("platform init failed: {}", error);
        }
    };
    let table = PinoutTable::parse(PINOUTS);

    let mut out = heapless::String::<4096>::new();
    let _ = report::write_system_report(&mut out, platform.sysinfo());

    let records = scan_all(&mut platform, Some(&table));
    let _ = report::write_scan_report(&mut out, &records);

    for line in out.lines() {
        info!("{}", line);
    }
}
