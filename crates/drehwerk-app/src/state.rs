// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-frame UI snapshot consumed by the Dioxus pages.

use drehwerk_core::config::AppConfig;
use drehwerk_core::types::PanelState;

use crate::services::app_services::AppServices;

/// Snapshot of everything the pages render, captured once per frame.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The active panel; exactly one at any time.
    pub panel: PanelState,
    pub title: String,
    /// Whether the settings button accepts input.
    pub settings_enabled: bool,
    pub animating: bool,
    pub spark_emitting: bool,
    pub marquee_text: String,
    pub marquee_offset: f32,
    pub config: AppConfig,
}

impl AppState {
    pub fn capture(svc: &AppServices) -> Self {
        Self {
            panel: svc.panel(),
            title: svc.title(),
            settings_enabled: svc.settings_enabled(),
            animating: svc.is_animating(),
            spark_emitting: svc.spark_emitting(),
            marquee_text: svc.marquee_text(),
            marquee_offset: svc.marquee_offset(),
            config: svc.config(),
        }
    }
}
