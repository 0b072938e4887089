//! Core UI functionality for todoview.
//!
//! # Module Components
//!
//! - [`actions`] - Side effects requested by components
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event source
//!
//! Components implement [`Component`]: they consume one [`EventType`] at a
//! time, update their own state and answer with an [`Action`] that the event
//! loop carries out. Rendering reads state and never changes it.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventSource, EventType};
