// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Drehwerk viewer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrehwerkError;

/// Which UI panel is active. Exactly one panel is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelState {
    /// The 3D object view with the marquee ticker.
    #[default]
    Home,
    /// The settings panel.
    Setting,
}

impl PanelState {
    /// Title text shown while this panel is active.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Setting => "Setting",
        }
    }
}

/// RGB start color for the spark emitter.
///
/// Channel values come straight from the host and are not clamped to
/// [0, 1]; callers are responsible for valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl SparkColor {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for SparkColor {
    type Err = DrehwerkError;

    /// Parse the inbound wire format `"<r>,<g>,<b>"`.
    ///
    /// Exactly three comma-separated decimal floats; surrounding whitespace
    /// per field is tolerated. A malformed payload is rejected wholesale —
    /// no channel is applied unless all three parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 3 {
            return Err(DrehwerkError::MalformedColor(s.to_owned()));
        }
        let mut channels = [0.0f32; 3];
        for (slot, field) in channels.iter_mut().zip(&fields) {
            *slot = field
                .trim()
                .parse()
                .map_err(|_| DrehwerkError::MalformedColor(s.to_owned()))?;
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }
}

/// Euler rotation of the turntable object, in degrees.
///
/// Values are raw and unbounded; the native host interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// The single spark particle emitter controlled through the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkEmitter {
    start_color: SparkColor,
    emitting: bool,
}

impl SparkEmitter {
    pub fn new() -> Self {
        Self {
            start_color: SparkColor::WHITE,
            emitting: false,
        }
    }

    pub fn start_color(&self) -> SparkColor {
        self.start_color
    }

    pub fn set_start_color(&mut self, color: SparkColor) {
        self.start_color = color;
    }

    /// Start emission. Repeated calls are permitted.
    pub fn play(&mut self) {
        self.emitting = true;
    }

    /// Stop emission. Always succeeds, no matter how often it was called.
    pub fn stop(&mut self) {
        self.emitting = false;
    }

    pub fn is_emitting(&self) -> bool {
        self.emitting
    }
}

impl Default for SparkEmitter {
    fn default() -> Self {
        Self::new()
    }
}
