//! Deterministic adapters and record builders shared by crate tests.

use async_trait::async_trait;
use chrono::Utc;
use crosscheck_adapters::SourceAdapter;
use crosscheck_protocol::{AdapterError, DataType, Metadata, Platform, Record};
use std::time::Duration;

/// Build a well-formed record with the given platform and content.
pub fn sample_record(platform: Platform, content: &str) -> Record {
    Record::new(
        platform,
        DataType::Document,
        content,
        Metadata::new(),
        Utc::now(),
        "tester@company.com",
        format!("{}_test_001", platform.slug()),
        0.9,
    )
    .expect("sample record is well-formed")
}

/// Adapter that returns a fixed batch immediately.
#[derive(Debug)]
pub struct StaticAdapter {
    platform: Platform,
    records: Vec<Record>,
}

impl StaticAdapter {
    pub fn new(platform: Platform, records: Vec<Record>) -> Self {
        Self { platform, records }
    }
}

#[async_trait]
impl SourceAdapter for StaticAdapter {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        Ok(self.records.clone())
    }
}

/// Adapter whose fetch always fails.
#[derive(Debug)]
pub struct FailingAdapter {
    platform: Platform,
}

impl FailingAdapter {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl SourceAdapter for FailingAdapter {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        Err(AdapterError::FetchFailed("simulated outage".to_string()))
    }
}

/// Adapter that sleeps before returning its batch, for timeout tests.
#[derive(Debug)]
pub struct SlowAdapter {
    platform: Platform,
    delay: Duration,
    records: Vec<Record>,
}

impl SlowAdapter {
    pub fn new(platform: Platform, delay: Duration, records: Vec<Record>) -> Self {
        Self {
            platform,
            delay,
            records,
        }
    }
}

#[async_trait]
impl SourceAdapter for SlowAdapter {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch(&self) -> Result<Vec<Record>, AdapterError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }
}
