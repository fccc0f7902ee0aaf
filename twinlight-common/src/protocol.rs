// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Single-byte command protocol shared by the firmware and the host tool.
//!
//! There is no framing and no acknowledgement: every byte on the wire is one
//! command, and bytes outside the command set are ignored by the device.

use core::fmt;
use core::str::FromStr;

/// Serial link speed used by both ends.
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// Blink interval at power-up and after `D`.
pub const DEFAULT_BLINK_INTERVAL_MS: u32 = 500;
/// Blink interval after `S`.
pub const FAST_BLINK_INTERVAL_MS: u32 = 100;

/// Commands understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `R`: switch the red output on
    RedOn,
    /// `r`: switch the red output off
    RedOff,
    /// `G`: switch the green output on
    GreenOn,
    /// `g`: switch the green output off
    GreenOff,
    /// `B`: enter blink mode
    Blink,
    /// `S`: blink every 100 ms
    FastBlink,
    /// `D`: blink every 500 ms
    DefaultBlink,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::RedOn,
        Command::RedOff,
        Command::GreenOn,
        Command::GreenOff,
        Command::Blink,
        Command::FastBlink,
        Command::DefaultBlink,
    ];

    /// Decode a wire byte. Returns `None` for bytes outside the command set.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'R' => Some(Self::RedOn),
            b'r' => Some(Self::RedOff),
            b'G' => Some(Self::GreenOn),
            b'g' => Some(Self::GreenOff),
            b'B' => Some(Self::Blink),
            b'S' => Some(Self::FastBlink),
            b'D' => Some(Self::DefaultBlink),
            _ => None,
        }
    }

    pub const fn as_byte(self) -> u8 {
        match self {
            Self::RedOn => b'R',
            Self::RedOff => b'r',
            Self::GreenOn => b'G',
            Self::GreenOff => b'g',
            Self::Blink => b'B',
            Self::FastBlink => b'S',
            Self::DefaultBlink => b'D',
        }
    }

    /// Long-form name accepted by the host tool.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RedOn => "red-on",
            Self::RedOff => "red-off",
            Self::GreenOn => "green-on",
            Self::GreenOff => "green-off",
            Self::Blink => "blink",
            Self::FastBlink => "fast-blink",
            Self::DefaultBlink => "default-blink",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.name(), self.as_byte() as char)
    }
}

/// A token that is neither a command character nor a command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownCommand;

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown command")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parse either a single command character (`"R"`) or a name (`"red-on"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmd = match s.as_bytes() {
            [byte] => Self::from_byte(*byte),
            _ => Self::from_name(s),
        };
        cmd.ok_or(UnknownCommand)
    }
}
