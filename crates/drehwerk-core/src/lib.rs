// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drehwerk — core types, errors, configuration, and the singleton registry
// shared across all crates.

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::{AppConfig, TransportMode};
pub use error::DrehwerkError;
pub use registry::{LifecyclePhase, Registry};
pub use types::*;
