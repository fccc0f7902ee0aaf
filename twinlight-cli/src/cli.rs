// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use twinlight_common::{Command, SERIAL_BAUD_RATE};

use crate::commands::{self, SimulationOptions};
use crate::transport::Transport;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "twinlight")]
#[command(about = "Send commands to the Twinlight LED controller")]
pub struct Cli {
    /// Serial port (e.g., /dev/ttyACM0 or COM5)
    #[arg(short, long)]
    pub port: Option<String>,

    /// Baud rate
    #[arg(short, long, default_value_t = SERIAL_BAUD_RATE)]
    pub baud: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    fn pick(self, on: Command, off: Command) -> Command {
        match self {
            Switch::On => on,
            Switch::Off => off,
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Switch the red indicator on or off
    Red {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Switch the green indicator on or off
    Green {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Enter blink mode
    Blink,

    /// Blink every 100 ms
    Fast,

    /// Blink every 500 ms
    DefaultSpeed,

    /// Send a script of commands, e.g. "R g B S" or "red-on,blink"
    Send {
        #[arg(value_name = "SCRIPT")]
        script: String,

        /// Pause between commands in milliseconds
        #[arg(short, long, default_value = "0")]
        delay_ms: u64,
    },

    /// Read scripts from stdin, one per line, until EOF or "quit"
    Console,

    /// Run a script against the controller logic on virtual time (no device needed)
    Simulate {
        #[arg(value_name = "SCRIPT")]
        script: String,

        /// Virtual time to run after the first command
        #[arg(long, default_value = "2000")]
        duration_ms: u64,

        /// Virtual time per loop pass
        #[arg(long, default_value = "10")]
        tick_ms: u64,

        /// Virtual time of the first pass
        #[arg(long, default_value = "0")]
        start_ms: u64,
    },
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Simulate {
            script,
            duration_ms,
            tick_ms,
            start_ms,
        } => {
            let script = commands::parse_script(&script)?;
            commands::simulate(
                &script,
                SimulationOptions {
                    start_ms,
                    duration_ms,
                    tick_ms,
                },
            )
        }

        cmd => {
            let port = cli
                .port
                .as_deref()
                .ok_or_else(|| anyhow!("--port is required for this command"))?;

            // Reject bad scripts before touching the port
            let script = match &cmd {
                Commands::Send { script, .. } => commands::parse_script(script)?,
                _ => Vec::new(),
            };

            let mut transport = Transport::open(port, cli.baud)?;

            match cmd {
                Commands::Red { state } => commands::send_one(
                    &mut transport,
                    state.pick(Command::RedOn, Command::RedOff),
                ),
                Commands::Green { state } => commands::send_one(
                    &mut transport,
                    state.pick(Command::GreenOn, Command::GreenOff),
                ),
                Commands::Blink => commands::send_one(&mut transport, Command::Blink),
                Commands::Fast => commands::send_one(&mut transport, Command::FastBlink),
                Commands::DefaultSpeed => {
                    commands::send_one(&mut transport, Command::DefaultBlink)
                }
                Commands::Send { delay_ms, .. } => commands::send_script(
                    &mut transport,
                    &script,
                    Duration::from_millis(delay_ms),
                ),
                Commands::Console => {
                    commands::console(&mut transport, io::stdin().lock(), &mut io::stdout())
                }
                Commands::Simulate { .. } => bail!("unreachable"),
            }
        }
    }
}
