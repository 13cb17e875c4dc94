//! JSON5 config loading and invariant validation.

use crate::{ConfigError, CrosscheckConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

impl CrosscheckConfig {
    /// Load a config from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        let config: CrosscheckConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adapters.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "adapters.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.adapters.timeout_ms < self.adapters.latency_ms {
            return Err(ConfigError::Invalid(
                "adapters.timeout_ms must not be below adapters.latency_ms".to_string(),
            ));
        }
        if self.feed.limit == 0 {
            return Err(ConfigError::Invalid(
                "feed.limit must be greater than zero".to_string(),
            ));
        }
        if self.feed.preview_chars == 0 {
            return Err(ConfigError::Invalid(
                "feed.preview_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, CrosscheckConfig};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_json5_with_comments_and_partial_fields() {
        let config = CrosscheckConfig::load_from_str(
            r#"{
                // simulated sources respond quickly in tests
                adapters: { latency_ms: 5, timeout_ms: 50 },
                feed: { limit: 10 },
            }"#,
        )
        .expect("load");
        assert_eq!(config.adapters.latency_ms, 5);
        assert_eq!(config.adapters.timeout_ms, 50);
        assert_eq!(config.feed.limit, 10);
        // untouched sections keep their defaults
        assert_eq!(config.feed.preview_chars, 100);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn load_from_path_round_trips() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("crosscheck.json5");
        fs::write(&path, "{ server: { port: 9090 } }").expect("write config");
        let config = CrosscheckConfig::load_from_path(&path).expect("load");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = CrosscheckConfig::load_from_str("{ adapters: { timeout_ms: 0 } }")
            .expect_err("zero timeout");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_timeout_below_latency() {
        let err =
            CrosscheckConfig::load_from_str("{ adapters: { latency_ms: 500, timeout_ms: 100 } }")
                .expect_err("timeout below latency");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_preview_budget() {
        let err = CrosscheckConfig::load_from_str("{ feed: { preview_chars: 0 } }")
            .expect_err("zero preview budget");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_surfaces_read_error() {
        let err = CrosscheckConfig::load_from_path("/nonexistent/crosscheck.json5")
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::ReadFailed(_)));
    }
}
