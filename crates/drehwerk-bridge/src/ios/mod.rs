// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS host transport.
//
// The embedding application statically links the four interop symbols
// below; they are bound as plain C functions. Requires compilation with
// the iOS SDK. The symbols return nothing — a failed host call is
// invisible at this boundary.

#![cfg(target_os = "ios")]

use drehwerk_core::error::Result;
use tracing::debug;

use crate::traits::{HostCommand, HostTransport};

unsafe extern "C" {
    fn SendRotationToNative(x: f32, y: f32, z: f32);
    fn TriggerFireSparkParticle();
    fn StopFireSparkParticle();
    fn OpenNativePage();
}

/// Transport backed by the statically linked host symbols.
pub struct IosHost;

impl HostTransport for IosHost {
    fn name(&self) -> &'static str {
        "ios"
    }

    fn send(&self, command: HostCommand) -> Result<()> {
        debug!(%command, "forwarding to native host");
        unsafe {
            match command {
                HostCommand::SendRotation { x, y, z } => SendRotationToNative(x, y, z),
                HostCommand::TriggerSpark => TriggerFireSparkParticle(),
                HostCommand::StopSpark => StopFireSparkParticle(),
                HostCommand::OpenNativePage => OpenNativePage(),
            }
        }
        Ok(())
    }
}
