// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drehwerk — native host bridge.
//
// Everything that crosses the viewer/host boundary lives here: the four
// outbound commands (rotation forwarding, spark trigger/stop, open native
// page) and the one inbound command (spark color update). The transport is
// chosen once at startup: real platform calls on a native host build, a
// logged simulation everywhere else. The UI path stays exercisable with no
// host attached.

pub mod bridge;
pub mod sim;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

use drehwerk_core::config::TransportMode;

use crate::traits::HostTransport;

pub use bridge::{EmitterLookup, NativeBridge};

/// Select the host transport for `mode`.
///
/// Asking for the native transport on a platform without a native host
/// falls back to the simulator with a warning.
pub fn host_transport(mode: TransportMode) -> Box<dyn HostTransport> {
    match mode {
        TransportMode::Native => {
            #[cfg(target_os = "ios")]
            {
                Box::new(ios::IosHost)
            }
            #[cfg(not(target_os = "ios"))]
            {
                tracing::warn!("no native host on this platform; using the simulator");
                Box::new(sim::SimulatedHost)
            }
        }
        TransportMode::Simulated => Box::new(sim::SimulatedHost),
    }
}
