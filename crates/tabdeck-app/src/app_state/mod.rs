//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the host window, the chrome webview and the tab
//! orchestrator, and routes IPC, surface events and shortcuts between them.

mod controls;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod interception;
mod polling;
mod shutdown;
mod types;

pub use core::TabdeckApp;
