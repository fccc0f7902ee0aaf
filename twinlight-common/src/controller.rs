// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Indicator controller state machine.
//!
//! The controller is split into two pure steps, run once per loop pass:
//! - [`handle_input`]: interpret at most one received byte
//! - [`apply_mode_policy`]: reassert the outputs for the current mode and
//!   run the blink timer
//!
//! Explicit on/off commands only stick in [`Mode::Idle`]. Every other mode
//! overwrites the outputs each pass (blink on its next due toggle).

use crate::protocol::{Command, DEFAULT_BLINK_INTERVAL_MS, FAST_BLINK_INTERVAL_MS};

/// Output policy applied on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Outputs keep whatever the last command set.
    #[default]
    Idle,
    /// Red forced on, green forced off. No command enters this mode.
    RedSolid,
    /// Green forced on, red forced off. No command enters this mode.
    GreenSolid,
    /// Outputs alternate every blink interval.
    Blinking,
}

/// Commanded level of each indicator (`true` = on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    pub red: bool,
    pub green: bool,
}

impl Outputs {
    pub const OFF: Self = Self {
        red: false,
        green: false,
    };

    /// Exactly one indicator is on.
    pub const fn is_complementary(self) -> bool {
        self.red != self.green
    }
}

/// Complete controller state, owned by the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    pub mode: Mode,
    pub blink_interval_ms: u32,
    /// Monotonic time of the last blink toggle.
    pub last_toggle_ms: u64,
    /// Red level of the last toggle; green gets the complement.
    pub blink_phase: bool,
    pub outputs: Outputs,
}

impl ControllerState {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Idle,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            last_toggle_ms: 0,
            blink_phase: false,
            outputs: Outputs::OFF,
        }
    }

    /// Whether a blink toggle is due at `now_ms`, regardless of mode.
    ///
    /// A clock reading before the last toggle is never due.
    pub fn is_toggle_due(&self, now_ms: u64) -> bool {
        now_ms
            .checked_sub(self.last_toggle_ms)
            .is_some_and(|elapsed| elapsed >= u64::from(self.blink_interval_ms))
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret one received byte. Bytes outside the command set are no-ops.
pub fn handle_input(state: ControllerState, byte: u8) -> ControllerState {
    match Command::from_byte(byte) {
        Some(command) => apply_command(state, command),
        None => state,
    }
}

/// Apply an already-decoded command.
pub fn apply_command(mut state: ControllerState, command: Command) -> ControllerState {
    match command {
        Command::RedOn => state.outputs.red = true,
        Command::RedOff => state.outputs.red = false,
        Command::GreenOn => state.outputs.green = true,
        Command::GreenOff => state.outputs.green = false,
        Command::Blink => state.mode = Mode::Blinking,
        Command::FastBlink => state.blink_interval_ms = FAST_BLINK_INTERVAL_MS,
        Command::DefaultBlink => state.blink_interval_ms = DEFAULT_BLINK_INTERVAL_MS,
    }
    state
}

/// Apply the output policy of the current mode at time `now_ms`.
///
/// In blink mode at most one toggle happens per call; a long gap yields a
/// single toggle and the schedule restarts from `now_ms`.
pub fn apply_mode_policy(mut state: ControllerState, now_ms: u64) -> ControllerState {
    match state.mode {
        Mode::Idle => {}
        Mode::RedSolid => {
            state.outputs = Outputs {
                red: true,
                green: false,
            }
        }
        Mode::GreenSolid => {
            state.outputs = Outputs {
                red: false,
                green: true,
            }
        }
        Mode::Blinking => {
            if state.is_toggle_due(now_ms) {
                state.last_toggle_ms = now_ms;
                state.blink_phase = !state.blink_phase;
                state.outputs = Outputs {
                    red: state.blink_phase,
                    green: !state.blink_phase,
                };
            }
        }
    }
    state
}

/// One pass of the control loop: input first, then the mode policy.
pub fn step(state: ControllerState, pending: Option<u8>, now_ms: u64) -> ControllerState {
    let state = match pending {
        Some(byte) => handle_input(state, byte),
        None => state,
    };
    apply_mode_policy(state, now_ms)
}
