//! Configuration schema for the discrepancy engine.

use serde::{Deserialize, Serialize};

/// Default simulated adapter latency in milliseconds.
const DEFAULT_ADAPTER_LATENCY_MS: u64 = 100;
/// Default per-adapter fetch deadline in milliseconds.
const DEFAULT_ADAPTER_TIMEOUT_MS: u64 = 2_000;
/// Default number of activity feed entries.
const DEFAULT_FEED_LIMIT: usize = 20;
/// Default content preview budget in characters.
const DEFAULT_PREVIEW_CHARS: usize = 100;
/// Default server bind host.
const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
/// Default server bind port.
const DEFAULT_SERVER_PORT: u16 = 8080;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrosscheckConfig {
    /// Source adapter behavior.
    pub adapters: AdaptersConfig,
    /// Activity feed shaping.
    pub feed: FeedConfig,
    /// HTTP server binding.
    pub server: ServerConfig,
}

/// Source adapter behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdaptersConfig {
    /// Simulated network latency per built-in adapter fetch, in milliseconds.
    pub latency_ms: u64,
    /// Per-adapter fetch deadline in milliseconds. A fetch exceeding it
    /// degrades to zero records with an error flag instead of blocking the
    /// aggregation.
    pub timeout_ms: u64,
}

impl Default for AdaptersConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_ADAPTER_LATENCY_MS,
            timeout_ms: DEFAULT_ADAPTER_TIMEOUT_MS,
        }
    }
}

/// Activity feed shaping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// Maximum number of feed entries returned.
    pub limit: usize,
    /// Content preview budget in characters.
    pub preview_chars: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEED_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}
