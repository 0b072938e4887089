//! Reusable UI components

pub mod task_list_component;
pub mod task_list_item_component;

pub use task_list_component::TaskList;
pub use task_list_item_component::{ItemDelegate, PlainItemDelegate};
