// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial command service: interprets at most one received byte per pass.

use crate::{
    board::Board,
    controller,
    protocol::Command,
    service::{Service, ServiceContext},
};
use core::cell::Cell;

pub struct SerialCommandService {
    ignored: Cell<u32>,
}

impl SerialCommandService {
    pub const fn new() -> Self {
        Self {
            ignored: Cell::new(0),
        }
    }

    /// Bytes outside the command set seen so far.
    pub fn ignored_count(&self) -> u32 {
        self.ignored.get()
    }
}

impl Default for SerialCommandService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> Service<B> for SerialCommandService {
    fn process(&self, ctx: &mut ServiceContext<B>) {
        let Some(byte) = ctx.peripherals.read_byte() else {
            return;
        };

        match Command::from_byte(byte) {
            Some(_cmd) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Serial: {:?}", _cmd);
            }
            None => {
                let ignored = self.ignored.get().wrapping_add(1);
                self.ignored.set(ignored);
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Serial: ignoring byte 0x{:02x} ({} ignored so far)",
                    byte,
                    ignored
                );
            }
        }

        let state = *ctx.controller;
        let next = controller::handle_input(state, byte);
        #[cfg(feature = "defmt")]
        {
            if next.mode != state.mode {
                defmt::println!("Serial: mode {:?} -> {:?}", state.mode, next.mode);
            }
        }
        *ctx.controller = next;
    }
}
