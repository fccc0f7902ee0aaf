// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service implementations for the controller main loop.

pub mod indicator;
pub mod serial;

pub use indicator::IndicatorService;
pub use serial::SerialCommandService;
