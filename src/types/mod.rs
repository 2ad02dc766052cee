use std::fmt;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;
use zeroize_derive::{Zeroize, ZeroizeOnDrop};

use crate::types::error::S3cliError;

pub mod async_progress;
pub mod error;
pub mod size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
    pub last_modified: DateTime<Utc>,
}

impl ObjectSummary {
    pub fn new(key: &str, size: i64, last_modified: DateTime<Utc>) -> Self {
        Self {
            key: key.to_string(),
            size,
            last_modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
    pub creation_date: DateTime<Utc>,
}

/// Per-object constraints of `list-object`.
/// A zero size or an empty extension means the constraint is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeFilter {
    pub min_bytes: u64,
    pub max_bytes: u64,
    pub extension: String,
}

impl SizeFilter {
    pub fn is_match(&self, object: &ObjectSummary) -> bool {
        if !self.extension.is_empty() && !object.key.ends_with(&self.extension) {
            debug!(
                key = object.key,
                extension = self.extension,
                "object filtered by extension."
            );
            return false;
        }

        if 0 < self.min_bytes && object.size < self.min_bytes as i64 {
            debug!(
                key = object.key,
                size = object.size,
                min_bytes = self.min_bytes,
                "object filtered by min size."
            );
            return false;
        }

        if 0 < self.max_bytes && object.size > self.max_bytes as i64 {
            debug!(
                key = object.key,
                size = object.size,
                max_bytes = self.max_bytes,
                "object filtered by max size."
            );
            return false;
        }

        true
    }
}

/// Half-open range `[(page - 1) * page_size, page * page_size)` over the filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u64,
    page_size: u64,
}

impl PageWindow {
    pub fn new(page: u64, page_size: u64) -> Result<Self, S3cliError> {
        if page == 0 {
            return Err(S3cliError::Config(
                "page must be greater than 0".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(S3cliError::Config(
                "page size must be greater than 0".to_string(),
            ));
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn start_index(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn end_index(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }

    pub fn contains(&self, index: u64) -> bool {
        self.start_index() <= index && index < self.end_index()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub bucket: String,
    pub key: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// comma separated keys
    List(String),
    /// a file of newline separated keys
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub enum S3Credentials {
    Credentials { access_keys: AccessKeys },
    FromEnvironment,
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AccessKeys {
    pub access_key: String,
    pub secret_access_key: String,
}

impl Debug for AccessKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_struct("AccessKeys");
        keys.field("access_key", &self.access_key)
            .field("secret_access_key", &"** redacted **");
        keys.finish()
    }
}
