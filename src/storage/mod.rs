use std::fmt;
use std::fmt::{Debug, Formatter};
use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_types::body::SdkBody;
use futures_util::stream::TryStreamExt;
use http_body_util::{BodyExt, StreamBody};
use hyper::body::Frame;
use tokio::io::{AsyncRead, BufReader};
use tokio_util::io::ReaderStream;

use crate::types::{BucketSummary, ObjectSummary};

pub mod s3;

pub type ObjectReader = Pin<Box<dyn AsyncRead + Send + Sync>>;

pub type Store = Box<dyn ObjectStore + Send + Sync>;

pub struct ObjectBody {
    /// length declared by the store, not the number of bytes the body will yield
    pub content_length: u64,
    pub body: ObjectReader,
}

impl Debug for ObjectBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBody")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Remote object store operations used by s3cli.
///
/// Every failure of the underlying service is reported as
/// [`S3cliError::RemoteCall`](crate::types::error::S3cliError::RemoteCall).
#[async_trait]
pub trait ObjectStore {
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>>;

    /// Returns at most `max_keys` objects whose key starts with `prefix` and is after `marker`.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<&str>,
        max_keys: i32,
    ) -> Result<Vec<ObjectSummary>>;

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: ObjectReader,
        content_length: u64,
    ) -> Result<()>;

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

pub fn convert_to_buf_byte_stream<R>(reader: R) -> ByteStream
where
    R: AsyncRead + Send + 'static + Sync,
{
    let buf_reader = BufReader::new(reader);

    let reader_stream = ReaderStream::new(buf_reader).map_ok(Frame::data);

    let stream_body = StreamBody::new(reader_stream);

    let boxed_body = BodyExt::boxed(stream_body);

    let sdk_body = SdkBody::from_body_1_x(boxed_body);

    ByteStream::new(sdk_body)
}
