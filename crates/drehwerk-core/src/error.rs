// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Drehwerk.
//
// The viewer is a best-effort display surface: failures on the bridge and
// panel paths are logged and absorbed where they occur, never escalated to
// the frame loop. These variants exist so the seams stay testable.

use thiserror::Error;

/// Top-level error type for all Drehwerk operations.
#[derive(Debug, Error)]
pub enum DrehwerkError {
    // -- Host bridge --
    #[error("host transport error: {0}")]
    Transport(String),

    #[error("malformed color payload: {0:?}")]
    MalformedColor(String),

    // -- Component resolution --
    #[error("required component unavailable: {0}")]
    MissingDependency(&'static str),

    #[error("duplicate instance of {0}; keeping the first")]
    DuplicateInstance(&'static str),

    #[error("registry accessed after shutdown")]
    Terminated,

    // -- Config persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DrehwerkError>;
