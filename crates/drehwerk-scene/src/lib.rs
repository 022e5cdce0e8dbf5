// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drehwerk Scene — viewer-side state between the UI shell and the bridge:
// the panel state machine with the spark lifecycle, the touch-driven
// turntable controller, and the marquee ticker.

pub mod controller;
pub mod manager;
pub mod marquee;

pub use controller::ObjectController;
pub use manager::ViewerManager;
pub use marquee::MarqueeTicker;
