// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Indicator service: applies the mode policy and drives the red/green pins.

use crate::{
    board::Board,
    controller::{self, Outputs},
    service::{Service, ServiceContext},
};
use core::cell::Cell;

/// Drives the pins only when the commanded levels change.
pub struct IndicatorService {
    driven: Cell<Option<Outputs>>,
}

impl IndicatorService {
    pub const fn new() -> Self {
        Self {
            driven: Cell::new(None),
        }
    }
}

impl Default for IndicatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> Service<B> for IndicatorService {
    fn process(&self, ctx: &mut ServiceContext<B>) {
        let now_ms = ctx.peripherals.now_ms();
        let state = *ctx.controller;
        let next = controller::apply_mode_policy(state, now_ms);

        #[cfg(feature = "defmt")]
        {
            defmt::trace!("Indicator: {} ms {:?}", now_ms, next);
            if next.last_toggle_ms != state.last_toggle_ms {
                defmt::debug!(
                    "Indicator: toggle at {} ms (interval {} ms)",
                    now_ms,
                    next.blink_interval_ms
                );
            }
        }
        *ctx.controller = next;

        if self.driven.get() != Some(next.outputs) {
            ctx.peripherals.drive_outputs(next.outputs);
            self.driven.set(Some(next.outputs));
        }
    }
}
