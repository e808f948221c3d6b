//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default URL for a fresh draft
pub const DEFAULT_URL: &str = "https://api.example.com/users";

/// Default request body for a fresh draft
pub const DEFAULT_BODY: &str = "{\n  \"name\": \"John\",\n  \"email\": \"john@example.com\"\n}";

/// Latency of the simulated transport
pub const SIMULATED_LATENCY_MS: u64 = 500;

/// How often the view is refreshed while a send is in flight
pub const SENDING_TICK_MS: u64 = 100;

/// Timeout applied by the real HTTP transport
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log file written next to the working directory
pub const LOG_FILE: &str = "sendpad.log";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".sendpad";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Placeholder shown before the first send
pub const NO_RESPONSE_PLACEHOLDER: &str = "Send a request to see response";

/// Application name
pub const APP_NAME: &str = "sendpad";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
