//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler`: owns the window,
//! the two webviews (through the shell controller) and the poll loop that
//! feeds captured webview events into the controller.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;

pub use core::ShellApp;
