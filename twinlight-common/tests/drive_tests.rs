// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the `embedded-hal` indicator driver.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use twinlight_common::{drive, Outputs};

#[derive(Default)]
struct RecordingPin {
    high: Option<bool>,
    writes: usize,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        self.writes += 1;
        Ok(())
    }
}

#[test]
fn test_drive_sets_both_pins() {
    let mut red = RecordingPin::default();
    let mut green = RecordingPin::default();

    drive(
        &mut red,
        &mut green,
        Outputs {
            red: true,
            green: false,
        },
    );

    assert_eq!(red.high, Some(true));
    assert_eq!(green.high, Some(false));
    assert_eq!(red.writes, 1);
    assert_eq!(green.writes, 1);
}

#[test]
fn test_drive_off() {
    let mut red = RecordingPin::default();
    let mut green = RecordingPin::default();

    drive(&mut red, &mut green, Outputs::OFF);

    assert_eq!(red.high, Some(false));
    assert_eq!(green.high, Some(false));
}
