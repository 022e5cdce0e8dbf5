// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drehwerk — mobile 3D turntable viewer.
//
// Entry point. Initialises logging and backend services, then runs the
// Dioxus shell. Panel switching is owned by the viewer manager, so the
// shell renders whichever panel the captured state says is active instead
// of routing.

mod pages;
mod services;
mod state;

use std::time::Duration;

use dioxus::prelude::*;

use drehwerk_core::types::PanelState;

use pages::home::Home;
use pages::settings::Settings;
use services::app_services::AppServices;
use state::AppState;

/// Frame tick length (~60 Hz).
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("drehwerk starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(AppServices::init);

    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(AppState::capture(&svc)));

    // Frame loop: advance the throttle window and the marquee, then publish
    // a fresh snapshot for the pages.
    let tick_svc = svc.clone();
    use_future(move || {
        let svc = tick_svc.clone();
        async move {
            loop {
                tokio::time::sleep(FRAME).await;
                svc.frame(FRAME);
                state.set(AppState::capture(&svc));
            }
        }
    });

    let panel = state.read().panel;
    rsx! {
        div {
            class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #111; color: #eee;",
            if panel == PanelState::Setting {
                Settings {}
            } else {
                Home {}
            }
        }
    }
}
