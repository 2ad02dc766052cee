#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;

use s3cli::Config;
use s3cli::config::args::build_config_from_args;
use s3cli::storage::{ObjectBody, ObjectReader, ObjectStore, Store};
use s3cli::types::error::S3cliError;
use s3cli::types::{BucketSummary, ObjectSummary};

pub const BUCKET: &str = "test-bucket";

const TEST_CONFIG: &str = r#"{
    "default": {
        "region": "us-east-1",
        "endpoint": "http://127.0.0.1:9000",
        "access_key_id": "test_access_key",
        "secret_key_id": "test_secret_key"
    }
}"#;

#[derive(Default)]
struct Bucket {
    creation_date: DateTime<Utc>,
    objects: BTreeMap<String, Vec<u8>>,
}

/// Shared state of a [`MemoryStore`]. Kept by tests to inspect what the
/// operations did after the store has been boxed.
#[derive(Default)]
pub struct MemoryState {
    buckets: BTreeMap<String, Bucket>,
    declared_lengths: HashMap<String, u64>,
    list_requests: Vec<(Option<String>, i32)>,
    delete_requests: Vec<String>,
}

impl MemoryState {
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.buckets.get(bucket)?.objects.get(key).cloned()
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.buckets
            .get(bucket)
            .map(|bucket| bucket.objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// (marker, max_keys) of every listing request in order.
    pub fn list_requests(&self) -> Vec<(Option<String>, i32)> {
        self.list_requests.clone()
    }

    pub fn delete_requests(&self) -> Vec<String> {
        self.delete_requests.clone()
    }
}

/// An S3 look-alike kept in memory: buckets hold keys in lexicographic order
/// and objects put through the store can be read back.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_bucket(&self, bucket: &str, created_secs: i64) {
        self.state.lock().unwrap().buckets.insert(
            bucket.to_string(),
            Bucket {
                creation_date: DateTime::from_timestamp(created_secs, 0).unwrap(),
                objects: BTreeMap::new(),
            },
        );
    }

    pub fn insert_object(&self, bucket: &str, key: &str, data: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .objects
            .insert(key.to_string(), data.to_vec());
    }

    /// Makes `get_object` report `length` instead of the real size of `key`.
    pub fn declare_length(&self, key: &str, length: u64) {
        self.state
            .lock()
            .unwrap()
            .declared_lengths
            .insert(key.to_string(), length);
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    pub fn boxed(&self) -> Store {
        Box::new(self.clone())
    }
}

fn no_such_bucket(operation: &'static str, bucket: &str) -> anyhow::Error {
    S3cliError::RemoteCall {
        operation,
        message: format!("NoSuchBucket: {bucket}"),
    }
    .into()
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .buckets
            .iter()
            .map(|(name, bucket)| BucketSummary {
                name: name.clone(),
                creation_date: bucket.creation_date,
            })
            .collect())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<&str>,
        max_keys: i32,
    ) -> Result<Vec<ObjectSummary>> {
        let mut state = self.state.lock().unwrap();
        state
            .list_requests
            .push((marker.map(str::to_string), max_keys));

        let objects = &state
            .buckets
            .get(bucket)
            .ok_or_else(|| no_such_bucket("list_objects", bucket))?
            .objects;

        Ok(objects
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .filter(|(key, _)| marker.is_none_or(|marker| marker < key.as_str()))
            .take(max_keys as usize)
            .map(|(key, data)| ObjectSummary::new(key, data.len() as i64, DateTime::default()))
            .collect())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody> {
        let state = self.state.lock().unwrap();
        let data = state
            .buckets
            .get(bucket)
            .ok_or_else(|| no_such_bucket("get_object", bucket))?
            .objects
            .get(key)
            .cloned()
            .ok_or_else(|| S3cliError::RemoteCall {
                operation: "get_object",
                message: format!("NoSuchKey: {key}"),
            })?;

        let content_length = state
            .declared_lengths
            .get(key)
            .copied()
            .unwrap_or(data.len() as u64);

        Ok(ObjectBody {
            content_length,
            body: Box::pin(std::io::Cursor::new(data)),
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        mut body: ObjectReader,
        content_length: u64,
    ) -> Result<()> {
        let mut data = Vec::new();
        body.read_to_end(&mut data).await?;
        assert_eq!(data.len() as u64, content_length);

        let mut state = self.state.lock().unwrap();
        state
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| no_such_bucket("put_object", bucket))?
            .objects
            .insert(key.to_string(), data);

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.delete_requests.push(key.to_string());
        state
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| no_such_bucket("delete_object", bucket))?
            .objects
            .remove(key);

        Ok(())
    }
}

pub struct TestHelper;

impl TestHelper {
    pub fn init_dummy_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dummy=trace")
            .try_init();
    }

    pub fn create_config_file() -> NamedTempFile {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(TEST_CONFIG.as_bytes()).unwrap();
        config_file.flush().unwrap();
        config_file
    }

    /// Builds a [`Config`] the way the CLI does, with a scratch config file.
    pub fn build_config(args: &[&str]) -> Config {
        let config_file = Self::create_config_file();
        let config_path = config_file.path().to_string_lossy().to_string();

        let mut all_args = vec!["s3cli", "--config", &config_path];
        all_args.extend_from_slice(args);

        build_config_from_args(all_args).unwrap()
    }
}
