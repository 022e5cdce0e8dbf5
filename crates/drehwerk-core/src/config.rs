// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// How bridge commands reach the native host.
///
/// Selected once at startup. The simulated transport keeps the whole UI
/// path exercisable on builds without a native host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    /// Real platform calls into the embedding host application.
    Native,
    /// Logged simulation of every host call.
    Simulated,
}

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Host transport selection, applied at startup.
    pub transport: TransportMode,
    /// Touch-to-rotation sensitivity (degrees per pixel-second).
    pub rotation_sensitivity: f32,
    /// Minimum interval between rotation forwards to the host, in
    /// milliseconds. Touch frames inside the window are coalesced.
    pub rotation_throttle_ms: u64,
    /// Marquee scroll speed in pixels per second.
    pub marquee_speed: f32,
    /// How often the marquee's date/time line refreshes, in seconds.
    pub marquee_refresh_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transport: TransportMode::Simulated,
            rotation_sensitivity: 10.0,
            rotation_throttle_ms: 100,
            marquee_speed: 100.0,
            marquee_refresh_secs: 1,
        }
    }
}
