// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Write-only serial transport. The controller never answers, so nothing is read back.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use serialport::SerialPort;
use twinlight_common::Command;

const WRITE_TIMEOUT: Duration = Duration::from_millis(500);

pub struct Transport<P = Box<dyn SerialPort>> {
    port: P,
}

impl Transport {
    /// Open a serial port at `baud`, 8N1.
    pub fn open(path: &str, baud: u32) -> Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(WRITE_TIMEOUT)
            .open()
            .with_context(|| format!("Failed to open serial port {path}"))?;
        Ok(Self::new(port))
    }
}

impl<P: Write> Transport<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Write one command byte and flush it out.
    pub fn send(&mut self, cmd: Command) -> Result<()> {
        self.port
            .write_all(&[cmd.as_byte()])
            .with_context(|| format!("Failed to send {cmd}"))?;
        self.port.flush().context("Failed to flush serial port")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> P {
        self.port
    }
}
