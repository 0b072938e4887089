//! todoview - a terminal list view of your Todoist tasks
//!
//! The binary fetches every task item from the Todoist sync API once, then
//! shows the labels in a paginated list you can browse and pick from.
//!
//! # Modules
//!
//! * [`backend`] - Task sources and the Todoist sync client
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup
//! * [`ui`] - Terminal selector, list widget and event loop

/// Backend abstraction layer and the Todoist implementation
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup writing to a file
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use backend::TaskLabel;
