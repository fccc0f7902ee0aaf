// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Service system for the cooperative main loop.

use crate::controller::ControllerState;

/// Shared context passed to all services on every pass
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    pub controller: &'a mut ControllerState,
}

impl<'a, P> ServiceContext<'a, P> {
    pub fn new(peripherals: &'a mut P, controller: &'a mut ControllerState) -> Self {
        Self {
            peripherals,
            controller,
        }
    }
}

/// Trait for services that run in the main loop
pub trait Service<P> {
    /// Process this service's logic. Must not block.
    /// Uses interior mutability (Cell/RefCell) for service-local state.
    fn process(&self, ctx: &mut ServiceContext<P>);
}

/// Run each service once, in order.
pub fn run_pass<P>(services: &[&dyn Service<P>], ctx: &mut ServiceContext<P>) {
    for service in services {
        service.process(ctx);
    }
}
