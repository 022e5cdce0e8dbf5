// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Simulated host for builds without a native host (desktop, CI, tests).
//
// Every command is logged and accepted, which keeps the whole UI and
// interaction path exercisable with no host attached.

use drehwerk_core::error::Result;
use tracing::info;

use crate::traits::{HostCommand, HostTransport};

/// Transport that logs each command instead of crossing the host boundary.
pub struct SimulatedHost;

impl HostTransport for SimulatedHost {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn send(&self, command: HostCommand) -> Result<()> {
        info!(%command, "simulated host call");
        Ok(())
    }
}
