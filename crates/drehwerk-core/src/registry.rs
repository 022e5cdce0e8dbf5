// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed singleton registry with an explicit lifecycle phase.
//
// Stateful components (the viewer manager, the native bridge) are recorded
// here keyed by type, and dependents resolve them at call time instead of
// through ambient statics. At most one live instance per type is retained;
// once shutdown begins the registry stops handing out instances for good.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::warn;

/// Process lifecycle as the registry sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Running,
    /// Entered exactly once; there is no way back to `Running`.
    ShuttingDown,
}

/// Map from component type to its single live instance.
#[derive(Default)]
pub struct Registry {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    phase: LifecyclePhase,
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        self.lock().phase
    }

    /// The recorded instance of `T`, if any. Never constructs.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let inner = self.lock();
        if inner.phase == LifecyclePhase::ShuttingDown {
            warn!(component = type_name::<T>(), "instance requested after shutdown");
            return None;
        }
        inner
            .entries
            .get(&TypeId::of::<T>())
            .cloned()
            .map(downcast_entry)
    }

    /// The recorded instance of `T`, constructing one with `init` if none
    /// exists.
    ///
    /// The check-then-create sequence runs under the registry lock, so
    /// concurrent first access constructs exactly once. Returns `None` once
    /// shutdown has begun — a terminated registry never resurrects.
    pub fn get_or_init<T, F>(&self, init: F) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let mut inner = self.lock();
        if inner.phase == LifecyclePhase::ShuttingDown {
            warn!(component = type_name::<T>(), "instance requested after shutdown");
            return None;
        }
        let entry = inner
            .entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Arc::new(init()))
            .clone();
        Some(downcast_entry(entry))
    }

    /// Record `instance` as the singleton for `T`.
    ///
    /// If an instance is already recorded, the newcomer is discarded and
    /// the first is returned with a warning — a duplicate never replaces
    /// the recorded instance. Registration is refused during shutdown.
    pub fn register<T: Any + Send + Sync>(&self, instance: Arc<T>) -> Option<Arc<T>> {
        let mut inner = self.lock();
        if inner.phase == LifecyclePhase::ShuttingDown {
            warn!(component = type_name::<T>(), "registration refused after shutdown");
            return None;
        }
        match inner.entries.get(&TypeId::of::<T>()) {
            Some(existing) => {
                warn!(
                    component = type_name::<T>(),
                    "duplicate instance; keeping the first"
                );
                Some(downcast_entry(existing.clone()))
            }
            None => {
                inner.entries.insert(TypeId::of::<T>(), instance.clone());
                Some(instance)
            }
        }
    }

    /// Clear the record for `T`, but only if `instance` is the recorded
    /// one — tearing down a discarded duplicate must not clear the
    /// survivor. Returns whether the record was cleared.
    pub fn clear<T: Any + Send + Sync>(&self, instance: &Arc<T>) -> bool {
        let mut inner = self.lock();
        let key = TypeId::of::<T>();
        let recorded = inner
            .entries
            .get(&key)
            .is_some_and(|existing| std::ptr::addr_eq(Arc::as_ptr(existing), Arc::as_ptr(instance)));
        if recorded {
            inner.entries.remove(&key);
        }
        recorded
    }

    /// Begin shutdown. From this point `get`, `get_or_init`, and
    /// `register` refuse all requests; recorded instances are kept alive
    /// but no longer handed out.
    pub fn shutdown(&self) {
        self.lock().phase = LifecyclePhase::ShuttingDown;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("registry lock poisoned")
    }
}

fn downcast_entry<T: Any + Send + Sync>(entry: Arc<dyn Any + Send + Sync>) -> Arc<T> {
    entry
        .downcast::<T>()
        .unwrap_or_else(|_| unreachable!("registry entry recorded under the wrong type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Widget(u32);

    #[test]
    fn get_or_init_constructs_once() {
        let registry = Registry::new();
        let first = registry.get_or_init(|| Widget(1)).expect("running");
        let second = registry.get_or_init(|| Widget(2)).expect("running");
        assert_eq!(second.0, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn get_never_constructs() {
        let registry = Registry::new();
        assert!(registry.get::<Widget>().is_none());
    }

    #[test]
    fn duplicate_registration_keeps_the_first() {
        let registry = Registry::new();
        let first = registry.register(Arc::new(Widget(1))).expect("running");
        let survivor = registry.register(Arc::new(Widget(2))).expect("running");
        assert_eq!(survivor.0, 1);
        assert!(Arc::ptr_eq(&first, &survivor));

        // Further attempts never displace the recorded instance either.
        let survivor = registry.register(Arc::new(Widget(3))).expect("running");
        assert_eq!(survivor.0, 1);
        assert_eq!(registry.get::<Widget>().expect("recorded").0, 1);
    }

    #[test]
    fn clear_ignores_non_recorded_instances() {
        let registry = Registry::new();
        let recorded = registry.register(Arc::new(Widget(1))).expect("running");
        let duplicate = Arc::new(Widget(2));

        assert!(!registry.clear(&duplicate));
        assert!(registry.get::<Widget>().is_some());

        assert!(registry.clear(&recorded));
        assert!(registry.get::<Widget>().is_none());

        // A cleared type can be recreated while still running.
        assert!(registry.get_or_init(|| Widget(3)).is_some());
    }

    #[test]
    fn shutdown_is_permanent() {
        let registry = Registry::new();
        let instance = registry.register(Arc::new(Widget(1))).expect("running");
        registry.shutdown();

        assert_eq!(registry.phase(), LifecyclePhase::ShuttingDown);
        // The object still exists, but the registry no longer hands it out.
        assert_eq!(instance.0, 1);
        assert!(registry.get::<Widget>().is_none());
        assert!(registry.get_or_init(|| Widget(2)).is_none());
        assert!(registry.register(Arc::new(Widget(3))).is_none());
    }

    #[test]
    fn concurrent_first_access_constructs_exactly_once() {
        let registry = Arc::new(Registry::new());
        let constructed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                let constructed = constructed.clone();
                std::thread::spawn(move || {
                    registry
                        .get_or_init(|| {
                            constructed.fetch_add(1, Ordering::SeqCst);
                            Widget(7)
                        })
                        .expect("running")
                })
            })
            .collect();

        let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(constructed.load(Ordering::SeqCst), 1);
        for instance in &instances {
            assert!(Arc::ptr_eq(instance, &instances[0]));
        }
    }
}
