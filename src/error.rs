//! Initialization failures and process exit codes
//!
//! Once the window and renderer are up the game loop has no fallible steps;
//! everything that can fail happens while bringing up the backend, and each
//! failure site exits with its own code so scripts can tell them apart.

use std::process::ExitCode;

use thiserror::Error;

/// Every way the process can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Game ran and the player quit
    Clean = 0,
    /// `--help` printed the usage
    Help = 2,
    /// Event loop / input subsystem failed
    Platform = 3,
    /// Text subsystem failed
    Text = 4,
    /// Window creation failed
    Window = 5,
    /// GPU adapter, device or surface failed
    Renderer = 6,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Fatal backend initialization error, carrying the backend's diagnostic
#[derive(Debug, Error)]
pub enum InitError {
    #[error("event loop failed to initialize: {0}")]
    Platform(String),

    #[error("text subsystem failed to initialize: {0}")]
    Text(String),

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create renderer: {0}")]
    Renderer(String),
}

impl InitError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            InitError::Platform(_) => ExitStatus::Platform,
            InitError::Text(_) => ExitStatus::Text,
            InitError::Window(_) => ExitStatus::Window,
            InitError::Renderer(_) => ExitStatus::Renderer,
        }
    }
}

impl From<winit::error::EventLoopError> for InitError {
    fn from(e: winit::error::EventLoopError) -> Self {
        InitError::Platform(e.to_string())
    }
}

impl From<winit::error::OsError> for InitError {
    fn from(e: winit::error::OsError) -> Self {
        InitError::Window(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for InitError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        InitError::Renderer(e.to_string())
    }
}

impl From<wgpu::RequestAdapterError> for InitError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        InitError::Renderer(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for InitError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        InitError::Renderer(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let all = [
            ExitStatus::Clean,
            ExitStatus::Help,
            ExitStatus::Platform,
            ExitStatus::Text,
            ExitStatus::Window,
            ExitStatus::Renderer,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
        assert_eq!(ExitStatus::Clean.code(), 0);
    }

    #[test]
    fn test_each_failure_site_has_nonzero_code() {
        let errors = [
            InitError::Platform("no display".into()),
            InitError::Text("bad font".into()),
            InitError::Window("denied".into()),
            InitError::Renderer("no adapter".into()),
        ];
        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_status().code()).collect();
        assert!(codes.iter().all(|&c| c != 0 && c != ExitStatus::Help.code()));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_message_keeps_backend_diagnostic() {
        let err = InitError::Window("X11 connection refused".into());
        assert!(err.to_string().contains("X11 connection refused"));
    }
}
