//! UI module for todoview
//!
//! This module handles the task selector, its list widget, rendering, and the
//! terminal event loop.

pub mod app;
pub mod components;
pub mod core;
pub mod renderer;

pub use app::{SelectorApp, SelectorStatus};
pub use renderer::{run_app, run_app_loop};
