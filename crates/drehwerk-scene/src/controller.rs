// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turntable controller — maps touch drags to Euler rotation and forwards
// the result to the host.
//
// Forwarding is throttled: at most one forward is in flight per window,
// and touch frames that land inside an open window are coalesced (dropped,
// not queued). Time is threaded in explicitly as the frame clock so the
// window logic stays deterministic.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use drehwerk_bridge::NativeBridge;
use drehwerk_core::registry::Registry;
use drehwerk_core::types::Rotation;
use tracing::{debug, error, warn};

use crate::manager::ViewerManager;

pub struct ObjectController {
    registry: Arc<Registry>,
    rotation: Rotation,
    sensitivity: f32,
    throttle: Duration,
    animating: bool,
    /// Frame-clock instant at which the open forwarding window closes.
    busy_until: Option<Duration>,
}

impl ObjectController {
    pub fn new(registry: Arc<Registry>, sensitivity: f32, throttle: Duration) -> Self {
        Self {
            registry,
            rotation: Rotation::default(),
            sensitivity,
            throttle,
            animating: false,
            busy_until: None,
        }
    }

    /// Apply one touch frame. `dx`/`dy` are pixel deltas, `dt` the frame
    /// time in seconds, `now` the frame clock.
    ///
    /// The rotation always updates. Forwarding to the host happens at most
    /// once per throttle window and pauses while the animation runs.
    pub fn handle_touch(&mut self, dx: f32, dy: f32, dt: f32, now: Duration) {
        self.rotation.x += dx * dt * self.sensitivity;
        self.rotation.y += dy * dt * self.sensitivity;

        if self.animating {
            return;
        }
        self.tick(now);
        if self.busy_until.is_some() {
            return;
        }
        self.busy_until = Some(now + self.throttle);

        let Rotation { x, y, z } = self.rotation;
        debug!(x, y, z, "forwarding rotation");
        match self.registry.get::<NativeBridge>() {
            Some(bridge) => bridge.send_rotation(x, y, z),
            None => warn!("bridge unavailable; rotation not forwarded"),
        }
    }

    /// Advance the frame clock, closing the forwarding window once the
    /// throttle has elapsed.
    pub fn tick(&mut self, now: Duration) {
        if let Some(until) = self.busy_until
            && now >= until
        {
            self.busy_until = None;
        }
    }

    /// Start the object's animation. The settings control locks while the
    /// animation runs, and touch forwarding pauses.
    pub fn start_animation(&mut self) {
        self.animating = true;
        self.set_settings_gate(false);
    }

    /// Stop the animation, release the settings control, and fire the
    /// spark effect on the host.
    pub fn stop_animation(&mut self) {
        self.animating = false;
        self.set_settings_gate(true);

        debug!("animation stopped; triggering spark effect");
        match self.registry.get::<NativeBridge>() {
            Some(bridge) => bridge.trigger_spark(),
            None => error!("bridge unavailable; cannot trigger fire spark"),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn set_settings_gate(&self, enabled: bool) {
        match self.registry.get::<Mutex<ViewerManager>>() {
            Some(manager) => manager
                .lock()
                .expect("manager lock poisoned")
                .set_settings_enabled(enabled),
            None => warn!("viewer manager unavailable; settings gate unchanged"),
        }
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

    const THROTTLE: Duration = Duration::from_millis(100);

    fn wired_controller() -> (ObjectController, Arc<Mutex<Vec<HostCommand>>>, Arc<Registry>) {
        let registry = Arc::new(Registry::new());
        let sent = Arc::new(Mutex::new(Vec::new()));

        let manager = Arc::new(Mutex::new(ViewerManager::new(registry.clone())));
        registry.register(manager);

        let bridge = NativeBridge::new(Box::new(RecordingHost(sent.clone())), Box::new(|| None));
        registry.register(Arc::new(bridge));

        let controller = ObjectController::new(registry.clone(), 10.0, THROTTLE);
        (controller, sent, registry)
    }

    fn rotations(sent: &Arc<Mutex<Vec<HostCommand>>>) -> usize {
        sent.lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, HostCommand::SendRotation { .. }))
            .count()
    }

    #[test]
    fn touch_rotates_by_delta_dt_and_sensitivity() {
        let (mut controller, _, _) = wired_controller();
        controller.handle_touch(2.0, -1.0, 0.5, Duration::ZERO);
        let rotation = controller.rotation();
        assert_eq!(rotation.x, 10.0);
        assert_eq!(rotation.y, -5.0);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn frames_inside_the_window_are_coalesced() {
        let (mut controller, sent, _) = wired_controller();

        controller.handle_touch(1.0, 0.0, 0.016, Duration::ZERO);
        controller.handle_touch(1.0, 0.0, 0.016, Duration::from_millis(30));
        controller.handle_touch(1.0, 0.0, 0.016, Duration::from_millis(60));
        assert_eq!(rotations(&sent), 1);

        // The window closes after the throttle; the next frame forwards.
        controller.handle_touch(1.0, 0.0, 0.016, Duration::from_millis(150));
        assert_eq!(rotations(&sent), 2);
    }

    #[test]
    fn coalesced_frames_still_rotate_the_object() {
        let (mut controller, sent, _) = wired_controller();
        controller.handle_touch(1.0, 0.0, 1.0, Duration::ZERO);
        controller.handle_touch(1.0, 0.0, 1.0, Duration::from_millis(10));
        assert_eq!(rotations(&sent), 1);
        assert_eq!(controller.rotation().x, 20.0);
    }

    #[test]
    fn tick_alone_closes_the_window() {
        let (mut controller, sent, _) = wired_controller();
        controller.handle_touch(1.0, 0.0, 0.016, Duration::ZERO);
        controller.tick(Duration::from_millis(100));
        controller.handle_touch(1.0, 0.0, 0.016, Duration::from_millis(101));
        assert_eq!(rotations(&sent), 2);
    }

    #[test]
    fn animation_gates_forwarding_and_the_settings_control() {
        let (mut controller, sent, registry) = wired_controller();

        controller.start_animation();
        assert!(controller.is_animating());
        let manager = registry.get::<Mutex<ViewerManager>>().expect("manager");
        assert!(!manager.lock().unwrap().settings_enabled());

        controller.handle_touch(1.0, 0.0, 0.016, Duration::ZERO);
        assert_eq!(rotations(&sent), 0);

        controller.stop_animation();
        assert!(!controller.is_animating());
        assert!(manager.lock().unwrap().settings_enabled());
        assert_eq!(
            sent.lock()
                .unwrap()
                .iter()
                .filter(|c| **c == HostCommand::TriggerSpark)
                .count(),
            1
        );

        controller.handle_touch(1.0, 0.0, 0.016, Duration::from_millis(10));
        assert_eq!(rotations(&sent), 1);
    }

    #[test]
    fn missing_bridge_is_absorbed() {
        let registry = Arc::new(Registry::new());
        let mut controller = ObjectController::new(registry, 10.0, THROTTLE);
        controller.handle_touch(1.0, 0.0, 0.5, Duration::ZERO);
        controller.stop_animation();
        assert_eq!(controller.rotation().x, 5.0);
    }
}
