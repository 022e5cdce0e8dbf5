// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

/// Application data directory, created on first use.
///
/// Desktop convention (XDG, then home). On mobile the host supplies the
/// documents directory through the platform build instead.
pub fn data_dir() -> PathBuf {
    let dir = base_dir().join("drehwerk");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Location of the persisted config file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

fn base_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from("/tmp")
}
