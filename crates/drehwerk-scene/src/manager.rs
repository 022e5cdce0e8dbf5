// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer manager — the panel state machine and the spark lifecycle.
//
// This is the bridge's only viewer-side data source: it owns the spark
// emitter handle that inbound color commands resolve through the registry.
// Panel state is mutated here and nowhere else.

use std::sync::{Arc, Mutex};

use drehwerk_bridge::NativeBridge;
use drehwerk_core::registry::Registry;
use drehwerk_core::types::{PanelState, SparkEmitter};
use tracing::{error, info, warn};

pub struct ViewerManager {
    registry: Arc<Registry>,
    panel: PanelState,
    title: String,
    settings_enabled: bool,
    emitter: Arc<Mutex<SparkEmitter>>,
}

impl ViewerManager {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            panel: PanelState::Home,
            title: PanelState::Home.title().to_owned(),
            settings_enabled: true,
            emitter: Arc::new(Mutex::new(SparkEmitter::new())),
        }
    }

    /// Open the settings panel and stop the spark effect, both locally and
    /// on the host.
    pub fn open_settings(&mut self) {
        self.title = PanelState::Setting.title().to_owned();
        self.panel = PanelState::Setting;
        self.emitter.lock().expect("emitter lock poisoned").stop();

        info!("stopping fire spark effect");
        match self.registry.get::<NativeBridge>() {
            Some(bridge) => bridge.stop_spark(),
            None => warn!("bridge unavailable; cannot stop fire spark on the host"),
        }
    }

    /// Return to the home panel. The settings control stays disabled until
    /// the running animation releases it.
    pub fn back_home(&mut self) {
        self.title = PanelState::Home.title().to_owned();
        self.settings_enabled = false;
        self.panel = PanelState::Home;
    }

    /// Ask the host to open its native page. No local state changes; an
    /// unavailable bridge drops the request.
    pub fn request_native_page(&self) {
        match self.registry.get::<NativeBridge>() {
            Some(bridge) => {
                info!("requesting the native page");
                bridge.open_native_page();
            }
            None => error!("bridge unavailable; cannot open the native page"),
        }
    }

    /// Animation gating for the settings control.
    pub fn set_settings_enabled(&mut self, enabled: bool) {
        self.settings_enabled = enabled;
    }

    pub fn settings_enabled(&self) -> bool {
        self.settings_enabled
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle to the single spark emitter; the bridge resolves it per call.
    pub fn emitter(&self) -> Arc<Mutex<SparkEmitter>> {
        self.emitter.clone()
    }

    pub fn home_visible(&self) -> bool {
        self.panel == PanelState::Home
    }

    pub fn settings_visible(&self) -> bool {
        self.panel == PanelState::Setting
    }

    /// The 3D object is only shown alongside the home panel.
    pub fn object_visible(&self) -> bool {
        self.home_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drehwerk_bridge::traits::{HostCommand, HostTransport};
    use drehwerk_core::error::Result;

    struct RecordingHost(Arc<Mutex<Vec<HostCommand>>>);

    impl HostTransport for RecordingHost {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn send(&self, command: HostCommand) -> Result<()> {
            self.0.lock().unwrap().push(command);
            Ok(())
        }
    }

    /// Registry wired the way the app wires it: manager singleton first,
    /// then a bridge whose emitter lookup goes through the registry.
    fn wired_scene() -> (Arc<Registry>, Arc<Mutex<Vec<HostCommand>>>) {
        let registry = Arc::new(Registry::new());
        let sent = Arc::new(Mutex::new(Vec::new()));

        let manager = Arc::new(Mutex::new(ViewerManager::new(registry.clone())));
        registry.register(manager);

        let lookup = registry.clone();
        let bridge = NativeBridge::new(
            Box::new(RecordingHost(sent.clone())),
            Box::new(move || {
                lookup
                    .get::<Mutex<ViewerManager>>()
                    .map(|m| m.lock().unwrap().emitter())
            }),
        );
        registry.register(Arc::new(bridge));

        (registry, sent)
    }

    fn with_manager<R>(registry: &Registry, f: impl FnOnce(&mut ViewerManager) -> R) -> R {
        let manager = registry.get::<Mutex<ViewerManager>>().expect("manager");
        let mut guard = manager.lock().unwrap();
        f(&mut guard)
    }

    #[test]
    fn exactly_one_panel_is_active() {
        let (registry, _) = wired_scene();
        with_manager(&registry, |m| {
            assert!(m.home_visible() && !m.settings_visible());

            m.open_settings();
            assert!(m.settings_visible() && !m.home_visible());
            assert!(!m.object_visible());
            assert_eq!(m.title(), "Setting");

            m.back_home();
            assert!(m.home_visible() && !m.settings_visible());
            assert!(m.object_visible());
            assert_eq!(m.title(), "Home");

            // Transitions are safe from either state.
            m.back_home();
            assert!(m.home_visible() && !m.settings_visible());
        });
    }

    #[test]
    fn open_settings_stops_the_spark_locally_and_on_the_host() {
        let (registry, sent) = wired_scene();
        let emitter = with_manager(&registry, |m| {
            m.emitter().lock().unwrap().play();
            m.open_settings();
            m.emitter()
        });

        assert!(!emitter.lock().unwrap().is_emitting());
        assert_eq!(*sent.lock().unwrap(), vec![HostCommand::StopSpark]);
    }

    #[test]
    fn back_home_disables_the_settings_control() {
        let (registry, _) = wired_scene();
        with_manager(&registry, |m| {
            m.set_settings_enabled(true);
            m.back_home();
            assert!(!m.settings_enabled());
        });
    }

    #[test]
    fn native_page_request_goes_through_the_bridge() {
        let (registry, sent) = wired_scene();
        with_manager(&registry, |m| m.request_native_page());
        assert_eq!(*sent.lock().unwrap(), vec![HostCommand::OpenNativePage]);
    }

    #[test]
    fn missing_bridge_is_absorbed() {
        let registry = Arc::new(Registry::new());
        let mut manager = ViewerManager::new(registry);
        // No bridge registered: both operations log and no-op.
        manager.open_settings();
        manager.request_native_page();
        assert!(manager.settings_visible());
    }

    #[test]
    fn inbound_color_command_reaches_the_managed_emitter() {
        let (registry, _) = wired_scene();
        let bridge = registry.get::<NativeBridge>().expect("bridge");
        bridge.handle_color_command("1.0,0.5,0.25").expect("valid");

        let emitter = with_manager(&registry, |m| m.emitter());
        let emitter = emitter.lock().unwrap();
        assert!(emitter.is_emitting());
        assert_eq!(
            emitter.start_color(),
            drehwerk_core::types::SparkColor::new(1.0, 0.5, 0.25)
        );
    }
}
