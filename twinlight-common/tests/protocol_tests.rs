// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the single-byte command protocol.

use twinlight_common::protocol::{
    Command, UnknownCommand, DEFAULT_BLINK_INTERVAL_MS, FAST_BLINK_INTERVAL_MS, SERIAL_BAUD_RATE,
};

#[test]
fn test_command_bytes() {
    assert_eq!(Command::RedOn.as_byte(), b'R');
    assert_eq!(Command::RedOff.as_byte(), b'r');
    assert_eq!(Command::GreenOn.as_byte(), b'G');
    assert_eq!(Command::GreenOff.as_byte(), b'g');
    assert_eq!(Command::Blink.as_byte(), b'B');
    assert_eq!(Command::FastBlink.as_byte(), b'S');
    assert_eq!(Command::DefaultBlink.as_byte(), b'D');
}

#[test]
fn test_from_byte_inverts_as_byte() {
    for cmd in Command::ALL {
        assert_eq!(Command::from_byte(cmd.as_byte()), Some(cmd));
    }
}

#[test]
fn test_from_byte_rejects_everything_else() {
    let known: Vec<u8> = Command::ALL.iter().map(|c| c.as_byte()).collect();
    for byte in 0..=u8::MAX {
        if !known.contains(&byte) {
            assert_eq!(Command::from_byte(byte), None, "byte 0x{byte:02x}");
        }
    }
}

#[test]
fn test_lowercase_blink_bytes_are_not_commands() {
    assert_eq!(Command::from_byte(b'b'), None);
    assert_eq!(Command::from_byte(b's'), None);
    assert_eq!(Command::from_byte(b'd'), None);
    assert_eq!(Command::from_byte(b'\n'), None);
}

#[test]
fn test_parse_single_character() {
    assert_eq!("R".parse::<Command>(), Ok(Command::RedOn));
    assert_eq!("g".parse::<Command>(), Ok(Command::GreenOff));
    assert_eq!("S".parse::<Command>(), Ok(Command::FastBlink));
    assert_eq!("x".parse::<Command>(), Err(UnknownCommand));
}

#[test]
fn test_parse_names() {
    for cmd in Command::ALL {
        assert_eq!(cmd.name().parse::<Command>(), Ok(cmd));
    }
    assert_eq!("red".parse::<Command>(), Err(UnknownCommand));
    assert_eq!("".parse::<Command>(), Err(UnknownCommand));
}

#[test]
fn test_display_includes_name_and_byte() {
    assert_eq!(Command::FastBlink.to_string(), "fast-blink ('S')");
}

#[test]
fn test_link_constants() {
    assert_eq!(SERIAL_BAUD_RATE, 9600);
    assert_eq!(DEFAULT_BLINK_INTERVAL_MS, 500);
    assert_eq!(FAST_BLINK_INTERVAL_MS, 100);
}
