// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod peripherals;

use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;
use peripherals::Peripherals;
use twinlight_common::{
    service::{run_pass, ServiceContext},
    services::{IndicatorService, SerialCommandService},
    ControllerState,
};

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("Twinlight init");

    let mut peripherals = match Peripherals::init() {
        Ok(peripherals) => peripherals,
        Err(e) => {
            defmt::error!("Board init failed: {:?}", e);
            loop {
                cortex_m::asm::nop();
            }
        }
    };

    let mut controller = ControllerState::new();
    let serial = SerialCommandService::new();
    let indicators = IndicatorService::new();

    defmt::println!(
        "Listening on UART0 at {} baud, blink interval {} ms",
        twinlight_common::SERIAL_BAUD_RATE,
        controller.blink_interval_ms
    );

    // Input before policy, every pass
    loop {
        let mut ctx = ServiceContext::new(&mut peripherals, &mut controller);
        run_pass(&[&serial, &indicators], &mut ctx);
    }
}
