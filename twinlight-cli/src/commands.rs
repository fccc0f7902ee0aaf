// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for the host tool.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use twinlight_common::{step, Command, ControllerState, Mode, Outputs};

use crate::transport::Transport;

/// Parse a whitespace- or comma-separated script of command tokens.
///
/// A token is a command character (`R`, `g`, ...) or a name (`red-on`, ...).
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let commands = script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Command>()
                .with_context(|| format!("Invalid token '{token}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(!commands.is_empty(), "Script contains no commands");
    Ok(commands)
}

/// Send a single command.
pub fn send_one<P: Write>(transport: &mut Transport<P>, cmd: Command) -> Result<()> {
    transport.send(cmd)?;
    println!("Sent {cmd}");
    Ok(())
}

/// Send a list of commands in order, pausing `delay` between them.
pub fn send_script<P: Write>(
    transport: &mut Transport<P>,
    commands: &[Command],
    delay: Duration,
) -> Result<()> {
    let pb = ProgressBar::new(commands.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    for (i, &cmd) in commands.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        pb.set_message(cmd.name());
        transport.send(cmd)?;
        pb.inc(1);
    }

    pb.finish_with_message("done");
    Ok(())
}

/// Read scripts line by line and send them until EOF or `quit`, echoing
/// each command sent to `out`.
///
/// A bad line is reported and skipped; nothing from it is sent.
pub fn console<P: Write>(
    transport: &mut Transport<P>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Enter commands (e.g. \"R g B\"), \"quit\" to exit")?;

    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        match parse_script(line) {
            Ok(commands) => {
                for cmd in commands {
                    transport.send(cmd)?;
                    writeln!(out, "Sent {cmd}")?;
                }
            }
            Err(e) => eprintln!("{e:#}"),
        }
    }

    Ok(())
}

pub struct SimulationOptions {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub tick_ms: u64,
}

/// A change observed during a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub at_ms: u64,
    pub command: Option<Command>,
    pub mode: Mode,
    pub blink_interval_ms: u32,
    pub outputs: Outputs,
}

/// Drive the controller logic on virtual time, delivering one command per pass.
///
/// Returns every pass on which the mode, blink interval or outputs changed.
pub fn run_simulation(commands: &[Command], opts: &SimulationOptions) -> Result<Vec<Transition>> {
    ensure!(opts.tick_ms > 0, "--tick-ms must be greater than zero");

    let end_ms = opts.start_ms.saturating_add(opts.duration_ms);
    let mut pending = commands.iter().copied();
    let mut state = ControllerState::new();
    let mut transitions = Vec::new();
    let mut now_ms = opts.start_ms;

    while now_ms <= end_ms {
        let command = pending.next();
        let next = step(state, command.map(Command::as_byte), now_ms);

        if next.mode != state.mode
            || next.blink_interval_ms != state.blink_interval_ms
            || next.outputs != state.outputs
        {
            transitions.push(Transition {
                at_ms: now_ms,
                command,
                mode: next.mode,
                blink_interval_ms: next.blink_interval_ms,
                outputs: next.outputs,
            });
        }

        state = next;
        now_ms = match now_ms.checked_add(opts.tick_ms) {
            Some(t) => t,
            None => break,
        };
    }

    Ok(transitions)
}

fn level(on: bool) -> &'static str {
    if on {
        "ON "
    } else {
        "off"
    }
}

/// Run a simulation and print the transitions.
pub fn simulate(commands: &[Command], opts: SimulationOptions) -> Result<()> {
    let transitions = run_simulation(commands, &opts)?;

    println!(
        "Simulating {} command(s) from {} ms for {} ms ({} ms per pass)",
        commands.len(),
        opts.start_ms,
        opts.duration_ms,
        opts.tick_ms
    );
    println!();
    println!("{:>10}  {:<10} {:>8}  red  green  command", "time", "mode", "interval");

    for t in &transitions {
        println!(
            "{:>7} ms  {:<10} {:>5} ms  {}  {}    {}",
            t.at_ms,
            format!("{:?}", t.mode),
            t.blink_interval_ms,
            level(t.outputs.red),
            level(t.outputs.green),
            t.command.map(|c| c.name()).unwrap_or("")
        );
    }

    println!();
    println!("{} change(s)", transitions.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(start_ms: u64, duration_ms: u64, tick_ms: u64) -> SimulationOptions {
        SimulationOptions {
            start_ms,
            duration_ms,
            tick_ms,
        }
    }

    #[test]
    fn test_parse_script_mixed_tokens() {
        let commands = parse_script("R g, blink  fast-blink,D").unwrap();

        assert_eq!(
            commands,
            vec![
                Command::RedOn,
                Command::GreenOff,
                Command::Blink,
                Command::FastBlink,
                Command::DefaultBlink,
            ]
        );
    }

    #[test]
    fn test_parse_script_names_bad_token() {
        let err = parse_script("R x B").unwrap_err();
        assert!(format!("{err:#}").contains("'x'"));
    }

    #[test]
    fn test_parse_script_rejects_empty() {
        assert!(parse_script("  , ").is_err());
    }

    #[test]
    fn test_send_one_writes_byte() {
        let mut transport = Transport::new(Vec::new());
        send_one(&mut transport, Command::Blink).unwrap();

        assert_eq!(transport.into_inner(), b"B");
    }

    #[test]
    fn test_send_script_writes_in_order() {
        let mut transport = Transport::new(Vec::new());
        let commands = parse_script("R g B S").unwrap();
        send_script(&mut transport, &commands, Duration::ZERO).unwrap();

        assert_eq!(transport.into_inner(), b"RgBS");
    }

    #[test]
    fn test_console_skips_bad_lines_and_stops_at_quit() {
        let mut transport = Transport::new(Vec::new());
        let input = Cursor::new("R\n\nblink\nR bogus\nquit\nG\n");
        let mut out = Vec::new();
        console(&mut transport, input, &mut out).unwrap();

        assert_eq!(transport.into_inner(), b"RB");
        let echoed = String::from_utf8(out).unwrap();
        let sent: Vec<&str> = echoed.lines().filter(|l| l.starts_with("Sent")).collect();
        assert_eq!(sent, vec!["Sent red-on ('R')", "Sent blink ('B')"]);
    }

    #[test]
    fn test_simulation_default_blink() {
        let transitions = run_simulation(&[Command::Blink], &opts(0, 1000, 10)).unwrap();

        let times: Vec<u64> = transitions.iter().map(|t| t.at_ms).collect();
        assert_eq!(times, vec![0, 500, 1000]);
        assert_eq!(transitions[0].mode, Mode::Blinking);
        assert_eq!(transitions[0].outputs, Outputs::OFF);
        assert!(transitions[1].outputs.red);
        assert!(transitions[2].outputs.green);
    }

    #[test]
    fn test_simulation_fast_blink() {
        let transitions =
            run_simulation(&[Command::Blink, Command::FastBlink], &opts(0, 300, 10)).unwrap();

        let times: Vec<u64> = transitions.iter().map(|t| t.at_ms).collect();
        assert_eq!(times, vec![0, 10, 100, 200, 300]);
        assert_eq!(transitions[1].command, Some(Command::FastBlink));
        assert_eq!(transitions[1].blink_interval_ms, 100);
    }

    #[test]
    fn test_simulation_late_blink_toggles_immediately() {
        let transitions =
            run_simulation(&[Command::GreenOn, Command::Blink], &opts(5000, 10, 10)).unwrap();

        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].outputs, Outputs { red: false, green: true });
        assert_eq!(transitions[1].at_ms, 5010);
        assert_eq!(transitions[1].mode, Mode::Blinking);
        assert_eq!(transitions[1].outputs, Outputs { red: true, green: false });
    }

    #[test]
    fn test_simulation_rejects_zero_tick() {
        assert!(run_simulation(&[Command::Blink], &opts(0, 100, 0)).is_err());
    }
}
