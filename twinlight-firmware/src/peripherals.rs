// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up and the peripherals shared by all services.
//!
//! Fixed wiring:
//! - UART0 TX on GP0, RX on GP1
//! - Red indicator on GP14, green indicator on GP15 (active high)

use rp2040_hal::{
    clocks::init_clocks_and_plls,
    fugit::RateExtU32,
    gpio::{
        bank0::{Gpio0, Gpio1, Gpio14, Gpio15},
        FunctionSioOutput, FunctionUart, Pin, Pins, PullDown,
    },
    pac,
    uart::{DataBits, Enabled, StopBits, UartConfig, UartPeripheral},
    Clock, Sio, Timer, Watchdog,
};
use twinlight_common::{Board, Outputs, SERIAL_BAUD_RATE};

/// External crystal on the Pico board.
const XTAL_FREQ_HZ: u32 = 12_000_000;

type UartPins = (
    Pin<Gpio0, FunctionUart, PullDown>,
    Pin<Gpio1, FunctionUart, PullDown>,
);

pub type CommandUart = UartPeripheral<Enabled, pac::UART0, UartPins>;
pub type RedPin = Pin<Gpio14, FunctionSioOutput, PullDown>;
pub type GreenPin = Pin<Gpio15, FunctionSioOutput, PullDown>;

#[derive(Debug, defmt::Format)]
pub enum InitError {
    PeripheralsTaken,
    Clocks,
    Uart,
}

pub struct Peripherals {
    pub timer: Timer,
    pub uart: CommandUart,
    pub red_pin: RedPin,
    pub green_pin: GreenPin,
}

impl Peripherals {
    pub fn init() -> Result<Self, InitError> {
        let mut pac = pac::Peripherals::take().ok_or(InitError::PeripheralsTaken)?;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .map_err(|_| InitError::Clocks)?;

        let sio = Sio::new(pac.SIO);
        let pins = Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        let uart_pins = (
            pins.gpio0.into_function::<FunctionUart>(),
            pins.gpio1.into_function::<FunctionUart>(),
        );
        let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
            .enable(
                UartConfig::new(SERIAL_BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
                clocks.peripheral_clock.freq(),
            )
            .map_err(|_| InitError::Uart)?;

        let mut red_pin = pins.gpio14.into_push_pull_output();
        let mut green_pin = pins.gpio15.into_push_pull_output();
        twinlight_common::drive(&mut red_pin, &mut green_pin, Outputs::OFF);

        Ok(Self {
            timer,
            uart,
            red_pin,
            green_pin,
        })
    }
}

impl Board for Peripherals {
    /// Read one byte if the RX FIFO has one. Never blocks.
    fn read_byte(&mut self) -> Option<u8> {
        if !self.uart.uart_is_readable() {
            return None;
        }

        let mut buf = [0u8; 1];
        match self.uart.read_raw(&mut buf).map_err(|_| ()) {
            Ok(n) if n > 0 => Some(buf[0]),
            Ok(_) => None,
            Err(()) => {
                defmt::warn!("UART: read error, byte discarded");
                None
            }
        }
    }

    /// Milliseconds since boot, from the 64-bit microsecond timer.
    fn now_ms(&self) -> u64 {
        self.timer.get_counter().ticks() / 1_000
    }

    fn drive_outputs(&mut self, outputs: Outputs) {
        twinlight_common::drive(&mut self.red_pin, &mut self.green_pin, outputs);
    }
}
