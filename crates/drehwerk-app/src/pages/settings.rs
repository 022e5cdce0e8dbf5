// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings panel — transport selection, turntable and marquee tuning, and
// the native page entry point.

use dioxus::prelude::*;

use drehwerk_core::config::TransportMode;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let back_svc = svc.clone();
    let page_svc = svc.clone();
    let transport_svc = svc.clone();
    let sensitivity_svc = svc.clone();
    let throttle_svc = svc.clone();
    let speed_svc = svc.clone();

    let s = state.read();

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #2a2a2a;",
            h1 { style: "margin: 0; font-size: 20px;", "{s.title}" }
            button {
                style: "padding: 6px 14px; border-radius: 6px;",
                onclick: move |_| back_svc.back_home(),
                "Back"
            }
        }

        section { style: "margin: 16px; flex: 1;",
            h3 { "Host bridge" }
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #2a2a2a;",
                span { "Transport" }
                select {
                    style: "padding: 4px 8px; border-radius: 4px;",
                    value: transport_label(s.config.transport),
                    onchange: move |evt| {
                        if let Some(mode) = transport_from_label(&evt.value()) {
                            save(&transport_svc, move |c| c.transport = mode);
                        }
                    },
                    option { value: "Simulated", "Simulated" }
                    option { value: "Native", "Native" }
                }
            }
            button {
                style: "margin-top: 12px; padding: 8px 16px; border-radius: 6px;",
                onclick: move |_| page_svc.request_native_page(),
                "Open native page"
            }

            h3 { style: "margin-top: 24px;", "Turntable" }
            NumberRow {
                label: "Rotation sensitivity",
                value: s.config.rotation_sensitivity as f64,
                on_change: move |v: f64| {
                    save(&sensitivity_svc, move |c| c.rotation_sensitivity = v as f32);
                },
            }
            NumberRow {
                label: "Forward throttle (ms)",
                value: s.config.rotation_throttle_ms as f64,
                on_change: move |v: f64| {
                    save(&throttle_svc, move |c| c.rotation_throttle_ms = v as u64);
                },
            }

            h3 { style: "margin-top: 24px;", "Marquee" }
            NumberRow {
                label: "Scroll speed (px/s)",
                value: s.config.marquee_speed as f64,
                on_change: move |v: f64| {
                    save(&speed_svc, move |c| c.marquee_speed = v as f32);
                },
            }

            p { style: "margin-top: 24px; color: #888; font-size: 13px;",
                "Transport and tuning changes take effect on the next launch."
            }
        }
    }
}

/// Labelled numeric setting row.
#[component]
fn NumberRow(label: &'static str, value: f64, on_change: EventHandler<f64>) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #2a2a2a;",
            span { "{label}" }
            input {
                r#type: "number",
                style: "width: 90px; padding: 4px 8px; border-radius: 4px; text-align: right;",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(v) = evt.value().parse::<f64>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}

fn save(svc: &AppServices, apply: impl FnOnce(&mut drehwerk_core::config::AppConfig)) {
    if let Err(e) = svc.update_config(apply) {
        tracing::warn!(error = %e, "failed to persist config");
    }
}

fn transport_label(mode: TransportMode) -> &'static str {
    match mode {
        TransportMode::Native => "Native",
        TransportMode::Simulated => "Simulated",
    }
}

fn transport_from_label(label: &str) -> Option<TransportMode> {
    match label {
        "Native" => Some(TransportMode::Native),
        "Simulated" => Some(TransportMode::Simulated),
        _ => None,
    }
}
