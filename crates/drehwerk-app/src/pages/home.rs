// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home panel — the turntable view, spark indicator, marquee ticker, and
// the settings entry point.
//
// The "3D object" is a placeholder card rotated by dragging; real
// rendering is out of scope, but the drag path feeds the same controller
// the native build uses.

use dioxus::prelude::*;

use crate::services::app_services::AppServices;
use crate::state::AppState;

/// Frame time assumed for a drag event, in seconds.
const DRAG_DT: f32 = 1.0 / 60.0;

#[component]
pub fn Home() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let mut dragging = use_signal(|| false);
    let mut last_pos = use_signal(|| (0.0f32, 0.0f32));

    let drag_svc = svc.clone();
    let settings_svc = svc.clone();
    let anim_svc = svc.clone();

    let s = state.read();
    let spark = if s.spark_emitting { "#ff7a29" } else { "#333" };

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #2a2a2a;",
            h1 { style: "margin: 0; font-size: 20px;", "{s.title}" }
            button {
                style: "padding: 6px 14px; border-radius: 6px;",
                disabled: !s.settings_enabled,
                onclick: move |_| settings_svc.open_settings(),
                "Settings"
            }
        }

        // Turntable: drag to rotate; the rotation is forwarded to the host
        // through the bridge, throttled by the controller.
        div {
            style: "flex: 1; display: flex; align-items: center; justify-content: center; touch-action: none;",
            onmousedown: move |evt| {
                let p = evt.client_coordinates();
                dragging.set(true);
                last_pos.set((p.x as f32, p.y as f32));
            },
            onmousemove: move |evt| {
                if !dragging() {
                    return;
                }
                let p = evt.client_coordinates();
                let (lx, ly) = last_pos();
                drag_svc.handle_touch(p.x as f32 - lx, p.y as f32 - ly, DRAG_DT);
                last_pos.set((p.x as f32, p.y as f32));
            },
            onmouseup: move |_| dragging.set(false),
            onmouseleave: move |_| dragging.set(false),

            div {
                style: "width: 180px; height: 180px; border-radius: 16px; background: linear-gradient(135deg, #3b6ea5, #274060); display: flex; align-items: center; justify-content: center; user-select: none;",
                span { "drag to rotate" }
            }
        }

        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 16px;",
            // Spark indicator mirrors the emitter the host recolors.
            span {
                style: "width: 14px; height: 14px; border-radius: 50%; background: {spark}; display: inline-block;",
            }
            button {
                style: "padding: 6px 14px; border-radius: 6px;",
                onclick: move |_| {
                    if anim_svc.is_animating() {
                        anim_svc.stop_animation();
                    } else {
                        anim_svc.start_animation();
                    }
                },
                if s.animating { "Stop animation" } else { "Start animation" }
            }
        }

        // Marquee ticker.
        div {
            style: "overflow: hidden; white-space: nowrap; padding: 8px 0; border-top: 1px solid #2a2a2a;",
            span {
                style: "display: inline-block; transform: translateX({s.marquee_offset}px);",
                "{s.marquee_text}"
            }
        }
    }
}
