use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::storage::{ObjectBody, ObjectReader, ObjectStore, Store, convert_to_buf_byte_stream};
use crate::types::error::S3cliError;
use crate::types::{BucketSummary, ObjectSummary};

mod client_builder;

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub async fn create(client_config: &ClientConfig) -> Self {
        S3Store {
            client: client_config.create_client().await,
        }
    }

    pub async fn boxed_new(client_config: &ClientConfig) -> Store {
        Box::new(Self::create(client_config).await)
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        let mut buckets = Vec::new();
        let mut continuation_token = None;

        loop {
            let list_buckets_output = self
                .client
                .list_buckets()
                .set_continuation_token(continuation_token)
                .send()
                .await
                .map_err(|e| remote_call_error("list_buckets", e))?;

            for bucket in list_buckets_output.buckets() {
                buckets.push(BucketSummary {
                    name: bucket.name().unwrap_or_default().to_string(),
                    creation_date: to_chrono_utc(bucket.creation_date())?,
                });
            }

            continuation_token = list_buckets_output
                .continuation_token()
                .filter(|token| !token.is_empty())
                .map(|token| token.to_string());
            if continuation_token.is_none() {
                break;
            }
        }

        debug!(count = buckets.len(), "list_buckets() completed.");

        Ok(buckets)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<&str>,
        max_keys: i32,
    ) -> Result<Vec<ObjectSummary>> {
        let list_objects_output = self
            .client
            .list_objects()
            .bucket(bucket)
            .prefix(prefix)
            .set_marker(marker.map(|marker| marker.to_string()))
            .max_keys(max_keys)
            .send()
            .await
            .map_err(|e| remote_call_error("list_objects", e))?;

        let mut objects = Vec::with_capacity(list_objects_output.contents().len());
        for object in list_objects_output.contents() {
            objects.push(ObjectSummary::new(
                object.key().unwrap_or_default(),
                object.size().unwrap_or_default(),
                to_chrono_utc(object.last_modified())?,
            ));
        }

        trace!(
            bucket = bucket,
            prefix = prefix,
            marker = marker,
            count = objects.len(),
            "list_objects() completed."
        );

        Ok(objects)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody> {
        let get_object_output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| remote_call_error("get_object", e))?;

        let content_length = u64::try_from(get_object_output.content_length().unwrap_or_default())?;

        Ok(ObjectBody {
            content_length,
            body: Box::pin(get_object_output.body.into_async_read()),
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ObjectReader,
        content_length: u64,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_length(i64::try_from(content_length)?)
            .body(convert_to_buf_byte_stream(body))
            .send()
            .await
            .map_err(|e| remote_call_error("put_object", e))?;

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| remote_call_error("delete_object", e))?;

        Ok(())
    }
}

fn remote_call_error<E>(operation: &'static str, e: E) -> anyhow::Error
where
    E: std::error::Error,
{
    S3cliError::RemoteCall {
        operation,
        message: DisplayErrorContext(&e).to_string(),
    }
    .into()
}

fn to_chrono_utc(date_time: Option<&aws_smithy_types::DateTime>) -> Result<DateTime<Utc>> {
    Ok(date_time
        .map(|date_time| date_time.to_chrono_utc())
        .transpose()?
        .unwrap_or_default())
}
