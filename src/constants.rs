//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote sync API
/// Todoist sync endpoint returning a full snapshot of the requested resources
pub const DEFAULT_SYNC_ENDPOINT: &str = "https://api.todoist.com/sync/v9/sync";
/// Environment variable holding the bearer token
pub const DEFAULT_API_TOKEN_ENV: &str = "TODOIST_API_TOKEN";
/// Backend type understood by the backend factory
pub const BACKEND_TODOIST: &str = "todoist";
/// Sync token asking the server for a full (non-incremental) sync
pub const SYNC_TOKEN_FULL: &str = "*";
/// Resource types requested from the sync endpoint
pub const SYNC_RESOURCE_TYPES: &str = "[\"items\"]";

// List layout
/// Default title shown above the list
pub const LIST_TITLE: &str = "todos";
/// Default total height of the list, chrome included
pub const LIST_DEFAULT_HEIGHT: u16 = 14;
/// Upper bound accepted for the configured list height
pub const LIST_MAX_HEIGHT: u16 = 500;
/// Width used until the terminal reports its real size
pub const LIST_DEFAULT_WIDTH: u16 = 20;
/// Rows taken by the title, pagination and help lines
pub const LIST_CHROME_ROWS: u16 = 5;
/// Color of the cursored row (xterm 256 palette)
pub const SELECTED_ITEM_COLOR: u8 = 170;
/// Left padding of plain rows
pub const ITEM_PADDING: usize = 4;
/// Left padding of the cursored row, before its marker
pub const SELECTED_ITEM_PADDING: usize = 2;
/// Left margin of the title
pub const TITLE_MARGIN: usize = 2;
/// Marker in front of the cursored row
pub const SELECTED_MARKER: &str = "> ";
/// Shown in place of rows when the list is empty
pub const NO_ITEMS: &str = "No items.";
/// Help line under the list
pub const HELP_TEXT: &str = "↑/k up • ↓/j down • ←/→ page • enter select • q quit";
pub const PAGINATION_ACTIVE_DOT: &str = "•";
pub const PAGINATION_INACTIVE_DOT: &str = "○";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_ERROR_FETCH_ITEMS: &str = "❌ Failed to fetch items";
pub const WARN_EMPTY_API_TOKEN: &str = "API token environment variable is empty or unset";

// Logging
/// File name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "todoview.log";
/// Directory name used under the XDG config and data directories
pub const APP_DIR_NAME: &str = "todoview";
/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "todoview.toml";
