//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`. Display
//! strings that a deployment may change live in [`crate::models::SiteConfig`]
//! and are fetched at startup.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII logo printed by `about`.
pub const ASCII_LOGO: &str = include_str!("../assets/text/logo.txt");

/// Default virtual file tree (TOML: strings are files, tables are directories).
pub const DEFAULT_TREE: &str = include_str!("../assets/fs.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used in log messages.
pub const APP_NAME: &str = "v9sh";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Site configuration endpoint, answering `{ success, config }`.
pub const CONFIG_URL: &str = "/api/get-config";

/// Completion proxy endpoint (Ollama `generate` API).
pub const COMPLETION_URL: &str = "/api/ollama/generate";

/// Model requested from the completion proxy.
pub const COMPLETION_MODEL: &str = "llama3";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Completion request timeout in milliseconds.
pub const COMPLETION_TIMEOUT_MS: u32 = 30000;

// =============================================================================
// Console Configuration
// =============================================================================

/// Simulated commit delay after the last inquiry answer.
pub const SUBMIT_DELAY_MS: u32 = 1200;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key holding submitted inquiries (JSON array).
pub const INQUIRY_STORAGE_KEY: &str = "v9_inquiries";
