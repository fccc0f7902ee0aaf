// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Hardware seam used by the main-loop services.

use crate::controller::Outputs;

/// What the services need from the board. Every method must return immediately.
pub trait Board {
    /// One received byte, if any is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Monotonic milliseconds since boot.
    fn now_ms(&self) -> u64;

    /// Set the red and green indicator levels.
    fn drive_outputs(&mut self, outputs: Outputs);
}
