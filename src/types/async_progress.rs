use std::io::Result;
use std::pin::Pin;
use std::task::{Context, Poll};

use indicatif::ProgressBar;
use pin_project::pin_project;
use tokio::io::{AsyncRead, ReadBuf};

/// Advances a progress bar by every chunk read from the inner reader.
#[pin_project]
pub struct AsyncReadWithProgress<R: AsyncRead> {
    #[pin]
    inner: R,
    progress: ProgressBar,
}

impl<R: AsyncRead> AsyncReadWithProgress<R> {
    pub fn new(inner: R, progress: ProgressBar) -> Self {
        Self { inner, progress }
    }
}

impl<R: AsyncRead> AsyncRead for AsyncReadWithProgress<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<Result<()>> {
        let this = self.project();

        let before = buf.filled().len();

        let result = this.inner.poll_read(cx, buf);
        if !result.is_ready() {
            return result;
        }

        let read_bytes = buf.filled().len() - before;
        if 0 < read_bytes {
            this.progress.inc(read_bytes as u64);
        }

        result
    }
}
