// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the registry and the scene objects, and
// exposes the calls the Dioxus pages make.
//
// Everything runs on the frame loop; only singleton first access needs the
// registry's internal lock. The controller and marquee sit behind mutexes
// so the struct stays cheaply cloneable for Dioxus closures.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Local;
use drehwerk_bridge::{NativeBridge, host_transport};
use drehwerk_core::config::AppConfig;
use drehwerk_core::error::Result;
use drehwerk_core::registry::Registry;
use drehwerk_core::types::PanelState;
use drehwerk_scene::{MarqueeTicker, ObjectController, ViewerManager};
use tracing::{info, warn};

use super::data_dir;

/// Layout width of the rendered marquee line, in px.
const MARQUEE_TEXT_WIDTH: f32 = 640.0;
/// Layout width of the marquee viewport, in px.
const MARQUEE_VIEWPORT_WIDTH: f32 = 390.0;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    registry: Arc<Registry>,
    controller: Arc<Mutex<ObjectController>>,
    marquee: Arc<Mutex<MarqueeTicker>>,
    config: Arc<Mutex<AppConfig>>,
    /// Frame clock, advanced by [`AppServices::frame`].
    clock: Arc<Mutex<Duration>>,
}

#[allow(dead_code)]
impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Self {
        let config = load_config(&data_dir::config_path()).unwrap_or_else(|e| {
            warn!(error = %e, "config unavailable; using defaults");
            AppConfig::default()
        });

        let registry = Arc::new(Registry::new());

        // The manager goes in first so its emitter exists, but the bridge
        // still resolves it per call, never at construction.
        let manager = Arc::new(Mutex::new(ViewerManager::new(registry.clone())));
        registry.register(manager);

        let lookup = registry.clone();
        let bridge = NativeBridge::new(
            host_transport(config.transport),
            Box::new(move || {
                lookup
                    .get::<Mutex<ViewerManager>>()
                    .map(|m| m.lock().expect("manager lock poisoned").emitter())
            }),
        );
        registry.register(Arc::new(bridge));

        let mut controller = ObjectController::new(
            registry.clone(),
            config.rotation_sensitivity,
            Duration::from_millis(config.rotation_throttle_ms),
        );
        // The turntable comes up animating, as when the scene loads.
        controller.start_animation();

        let marquee = MarqueeTicker::new(
            config.marquee_speed,
            MARQUEE_TEXT_WIDTH,
            MARQUEE_VIEWPORT_WIDTH,
            Duration::from_secs(config.marquee_refresh_secs),
            Local::now(),
        );

        info!("app services initialised");
        Self {
            registry,
            controller: Arc::new(Mutex::new(controller)),
            marquee: Arc::new(Mutex::new(marquee)),
            config: Arc::new(Mutex::new(config)),
            clock: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    // -- Panels --------------------------------------------------------------

    pub fn open_settings(&self) {
        self.with_manager(|m| m.open_settings());
    }

    pub fn back_home(&self) {
        self.with_manager(|m| m.back_home());
    }

    pub fn request_native_page(&self) {
        self.with_manager(|m| m.request_native_page());
    }

    // -- Turntable -----------------------------------------------------------

    pub fn handle_touch(&self, dx: f32, dy: f32, dt: f32) {
        let now = *self.clock.lock().expect("clock lock poisoned");
        self.controller
            .lock()
            .expect("controller lock poisoned")
            .handle_touch(dx, dy, dt, now);
    }

    pub fn start_animation(&self) {
        self.controller
            .lock()
            .expect("controller lock poisoned")
            .start_animation();
    }

    pub fn stop_animation(&self) {
        self.controller
            .lock()
            .expect("controller lock poisoned")
            .stop_animation();
    }

    pub fn is_animating(&self) -> bool {
        self.controller
            .lock()
            .expect("controller lock poisoned")
            .is_animating()
    }

    // -- Frame loop ----------------------------------------------------------

    /// Advance one frame: the controller's throttle window and the marquee.
    pub fn frame(&self, dt: Duration) {
        let now = {
            let mut clock = self.clock.lock().expect("clock lock poisoned");
            *clock += dt;
            *clock
        };
        self.controller
            .lock()
            .expect("controller lock poisoned")
            .tick(now);
        self.marquee
            .lock()
            .expect("marquee lock poisoned")
            .advance(dt, Local::now());
    }

    // -- Inbound host commands ------------------------------------------------

    /// Entry point for the host's `TriggerParticleEffect` message.
    pub fn trigger_particle_effect(&self, payload: &str) {
        let Some(bridge) = self.registry.get::<NativeBridge>() else {
            warn!("bridge unavailable; color command dropped");
            return;
        };
        if let Err(e) = bridge.handle_color_command(payload) {
            warn!(error = %e, "color command dropped");
        }
    }

    // -- UI snapshot -----------------------------------------------------------

    pub fn panel(&self) -> PanelState {
        self.with_manager(|m| m.panel()).unwrap_or_default()
    }

    pub fn title(&self) -> String {
        self.with_manager(|m| m.title().to_owned())
            .unwrap_or_default()
    }

    pub fn settings_enabled(&self) -> bool {
        self.with_manager(|m| m.settings_enabled()).unwrap_or(false)
    }

    pub fn spark_emitting(&self) -> bool {
        self.with_manager(|m| m.emitter())
            .map(|e| e.lock().expect("emitter lock poisoned").is_emitting())
            .unwrap_or(false)
    }

    pub fn marquee_text(&self) -> String {
        self.marquee
            .lock()
            .expect("marquee lock poisoned")
            .text()
            .to_owned()
    }

    pub fn marquee_offset(&self) -> f32 {
        self.marquee.lock().expect("marquee lock poisoned").offset()
    }

    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Apply and persist a config change. Transport and tuning changes
    /// take effect on the next launch.
    pub fn update_config(&self, apply: impl FnOnce(&mut AppConfig)) -> Result<()> {
        let mut config = self.config.lock().expect("config lock poisoned");
        apply(&mut config);
        save_config(&data_dir::config_path(), &config)
    }

    /// Begin shutdown: the registry stops handing out singletons.
    pub fn shutdown(&self) {
        self.registry.shutdown();
    }

    fn with_manager<R>(&self, f: impl FnOnce(&mut ViewerManager) -> R) -> Option<R> {
        match self.registry.get::<Mutex<ViewerManager>>() {
            Some(manager) => {
                let mut guard = manager.lock().expect("manager lock poisoned");
                Some(f(&mut guard))
            }
            None => {
                warn!("viewer manager unavailable");
                None
            }
        }
    }
}

fn load_config(path: &Path) -> Result<AppConfig> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    std::fs::write(path, serde_json::to_vec_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drehwerk_core::config::TransportMode;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let config = AppConfig {
            transport: TransportMode::Native,
            rotation_throttle_ms: 250,
            ..AppConfig::default()
        };

        save_config(&path, &config).expect("save");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.transport, TransportMode::Native);
        assert_eq!(loaded.rotation_throttle_ms, 250);
    }

    #[test]
    fn missing_config_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(&dir.path().join("absent.json")).is_err());
    }
}
