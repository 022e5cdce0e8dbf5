// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host transport abstraction — the boundary between viewer-side logic and
// the native host application.
//
// The interop surface is a fixed set of four outbound calls. Each call is a
// command value so the delivery mechanism can be swapped at startup rather
// than branched at compile time.

use std::fmt;

use drehwerk_core::error::Result;

/// Outbound request to the native host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Raw Euler degrees from the turntable. Unbounded; the host interprets
    /// the values.
    SendRotation { x: f32, y: f32, z: f32 },
    /// Start the fire spark effect on the host side.
    TriggerSpark,
    /// Stop the fire spark effect on the host side.
    StopSpark,
    /// Open the host's native page over the viewer.
    OpenNativePage,
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendRotation { x, y, z } => write!(f, "rotation {x}, {y}, {z}"),
            Self::TriggerSpark => write!(f, "trigger fire spark"),
            Self::StopSpark => write!(f, "stop fire spark"),
            Self::OpenNativePage => write!(f, "open native page"),
        }
    }
}

/// A way of delivering [`HostCommand`]s to the native host.
///
/// Implementations must not block: host calls are synchronous and expected
/// to return promptly. The `Result` exists for the transport seam and its
/// tests; the bridge absorbs every error before it reaches UI callers.
pub trait HostTransport: Send + Sync {
    /// Transport name for logs.
    fn name(&self) -> &'static str;

    /// Deliver one command.
    fn send(&self, command: HostCommand) -> Result<()>;
}
