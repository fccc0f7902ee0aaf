// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for the Twinlight serial LED controller.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools
//! - `embedded` feature: Enables the `embedded-hal` pin driver
//! - `defmt` feature: Derives `defmt::Format` on the public types

#![cfg_attr(not(feature = "std"), no_std)]

pub mod board;
pub mod controller;
pub mod protocol;
pub mod service;
pub mod services;

// Re-export commonly used types
pub use board::Board;
pub use controller::{apply_command, apply_mode_policy, handle_input, step};
pub use controller::{ControllerState, Mode, Outputs};
pub use protocol::{Command, UnknownCommand};
pub use protocol::{DEFAULT_BLINK_INTERVAL_MS, FAST_BLINK_INTERVAL_MS, SERIAL_BAUD_RATE};

// Embedded-specific exports (only with embedded feature)
#[cfg(feature = "embedded")]
use embedded_hal::digital::{OutputPin, PinState};

/// Drive the red and green indicator pins to the given levels.
///
/// Pin errors are discarded; the outputs are reasserted on the next change.
#[cfg(feature = "embedded")]
pub fn drive(red: &mut impl OutputPin, green: &mut impl OutputPin, outputs: Outputs) {
    red.set_state(PinState::from(outputs.red)).ok();
    green.set_state(PinState::from(outputs.green)).ok();
}
