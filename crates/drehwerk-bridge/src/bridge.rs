// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The bridge object: outbound command surface plus the inbound color
// command from the host.

use std::sync::{Arc, Mutex};

use drehwerk_core::error::{DrehwerkError, Result};
use drehwerk_core::types::{SparkColor, SparkEmitter};
use tracing::{error, info, warn};

use crate::traits::{HostCommand, HostTransport};

/// Resolves the spark emitter at call time.
///
/// The emitter is owned by the viewer manager, and initialization order
/// between the manager and the bridge is not guaranteed — so the bridge
/// looks the handle up on every inbound command instead of caching it.
pub type EmitterLookup = Box<dyn Fn() -> Option<Arc<Mutex<SparkEmitter>>> + Send + Sync>;

/// Command boundary between viewer-side logic and the native host.
pub struct NativeBridge {
    transport: Box<dyn HostTransport>,
    emitter: EmitterLookup,
}

impl NativeBridge {
    pub fn new(transport: Box<dyn HostTransport>, emitter: EmitterLookup) -> Self {
        info!(transport = transport.name(), "native bridge ready");
        Self { transport, emitter }
    }

    /// Forward raw Euler degrees to the host.
    ///
    /// No validation, no range clamp — the host is responsible for
    /// interpreting the values.
    pub fn send_rotation(&self, x: f32, y: f32, z: f32) {
        self.dispatch(HostCommand::SendRotation { x, y, z });
    }

    /// Start the fire spark effect on the host. Safe to call repeatedly.
    pub fn trigger_spark(&self) {
        self.dispatch(HostCommand::TriggerSpark);
    }

    /// Stop the fire spark effect on the host. Always succeeds from the
    /// caller's point of view, no matter how often it was called before.
    pub fn stop_spark(&self) {
        self.dispatch(HostCommand::StopSpark);
    }

    /// Ask the host to open its native page over the viewer.
    pub fn open_native_page(&self) {
        self.dispatch(HostCommand::OpenNativePage);
    }

    // Outbound calls are fire-and-forget: a transport failure is logged and
    // absorbed, never reported back to the UI.
    fn dispatch(&self, command: HostCommand) {
        if let Err(e) = self.transport.send(command) {
            warn!(%command, error = %e, "host transport dropped a command");
        }
    }

    /// Inbound from the host: recolor the spark emitter and start emission.
    ///
    /// `payload` is `"<r>,<g>,<b>"`. A malformed payload or an unresolvable
    /// emitter drops the whole command — the emitter is never partially
    /// updated. The returned error is advisory; dispatch layers log it and
    /// move on, per the best-effort UI policy.
    pub fn handle_color_command(&self, payload: &str) -> Result<()> {
        let color: SparkColor = payload.parse().inspect_err(|_| {
            error!(payload, "invalid color data from host");
        })?;
        let Some(emitter) = (self.emitter)() else {
            error!("spark emitter is not assigned; dropping color command");
            return Err(DrehwerkError::MissingDependency("spark emitter"));
        };
        let mut emitter = emitter.lock().expect("emitter lock poisoned");
        info!(?color, "applying spark color from host");
        emitter.set_start_color(color);
        emitter.play();
        Ok(())
    }
}
