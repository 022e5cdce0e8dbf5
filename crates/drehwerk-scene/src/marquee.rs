// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marquee ticker — scrolls the date/time line leftward across the
// viewport and wraps to the right edge once the text is fully off-screen.
//
// The displayed text refreshes on its own fixed cadence, independent of
// the scroll frame rate. Positions are anchored x offsets measured from
// the viewport centre, matching the UI layout.

use std::time::Duration;

use chrono::{DateTime, Local};

pub struct MarqueeTicker {
    offset: f32,
    speed: f32,
    text_width: f32,
    viewport_width: f32,
    refresh_every: Duration,
    since_refresh: Duration,
    text: String,
}

impl MarqueeTicker {
    pub fn new(
        speed: f32,
        text_width: f32,
        viewport_width: f32,
        refresh_every: Duration,
        now: DateTime<Local>,
    ) -> Self {
        let mut ticker = Self {
            offset: 0.0,
            speed,
            text_width,
            viewport_width,
            refresh_every,
            since_refresh: Duration::ZERO,
            text: format_date_time(now),
        };
        ticker.reset_position();
        ticker
    }

    /// Advance the scroll by `dt`, wrapping when the text has fully left
    /// the viewport, and refresh the text once the cadence has elapsed.
    pub fn advance(&mut self, dt: Duration, now: DateTime<Local>) {
        self.offset -= self.speed * dt.as_secs_f32();
        if self.offset + self.text_width < -self.viewport_width / 2.0 {
            self.reset_position();
        }

        self.since_refresh += dt;
        if self.since_refresh >= self.refresh_every {
            self.text = format_date_time(now);
            self.since_refresh = Duration::ZERO;
        }
    }

    /// Anchored x offset of the text.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // Park the text just past the right edge.
    fn reset_position(&mut self) {
        self.offset = self.viewport_width / 2.0 + self.text_width / 2.0;
    }
}

/// The line shown in the ticker.
pub fn format_date_time(now: DateTime<Local>) -> String {
    format!(
        "Current Date: {}. Current Time: {}",
        now.format("%A, %-d %B %Y"),
        now.format("%H:%M"),
    )
}
