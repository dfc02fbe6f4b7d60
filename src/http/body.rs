//! Instrumented response body.
//!
//! # Responsibilities
//! - Forward every frame of the wrapped body unchanged
//! - Count data bytes passing through this layer
//! - Emit the post-handling line exactly once, at end of stream, on a body
//!   error, or when the body is dropped unread

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use std::time::Instant;

use axum::http::StatusCode;
use hyper::body::{Body, Bytes, Frame, SizeHint};
use pin_project_lite::pin_project;

use crate::observability::{LogSink, ResponseLine};
use crate::style::Palette;

/// Everything needed to log the outcome of one request.
pub(crate) struct Emitter {
    pub(crate) palette: Arc<Palette>,
    pub(crate) sink: Arc<dyn LogSink>,
    pub(crate) start: Instant,
}

impl Emitter {
    pub(crate) fn capture(self, status: StatusCode) -> Capture {
        Capture {
            emitter: self,
            status,
            bytes: 0,
        }
    }
}

/// Status and byte count for one response. Logs when dropped.
pub(crate) struct Capture {
    emitter: Emitter,
    status: StatusCode,
    bytes: u64,
}

impl Capture {
    fn record(&mut self, len: usize) {
        self.bytes += len as u64;
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        let line = ResponseLine {
            status: self.status,
            bytes: self.bytes,
            elapsed: self.emitter.start.elapsed(),
        };
        self.emitter.sink.emit(&line.render(&self.emitter.palette));
    }
}

pin_project! {
    /// Response body produced by [`RequestLog`](crate::RequestLog).
    pub struct LoggedBody<B> {
        #[pin]
        kind: Kind<B>,
        capture: Option<Capture>,
    }
}

pin_project! {
    #[project = KindProj]
    enum Kind<B> {
        Inner {
            #[pin]
            body: B,
        },
        Fixed {
            data: Option<Bytes>,
        },
    }
}

impl<B> LoggedBody<B> {
    pub(crate) fn new(body: B, capture: Capture) -> Self {
        Self {
            kind: Kind::Inner { body },
            capture: Some(capture),
        }
    }

    /// Body written by the middleware itself rather than the inner service.
    pub(crate) fn fixed(data: Bytes, capture: Capture) -> Self {
        Self {
            kind: Kind::Fixed { data: Some(data) },
            capture: Some(capture),
        }
    }
}

impl<B> fmt::Debug for LoggedBody<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture = self.capture.as_ref();
        f.debug_struct("LoggedBody")
            .field("status", &capture.map(|c| c.status))
            .field("bytes", &capture.map(|c| c.bytes))
            .finish_non_exhaustive()
    }
}

impl<B> Body for LoggedBody<B>
where
    B: Body<Data = Bytes>,
{
    type Data = Bytes;
    type Error = B::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.project();
        let frame = match this.kind.project() {
            KindProj::Inner { body } => ready!(body.poll_frame(cx)),
            KindProj::Fixed { data } => data.take().map(|data| Ok(Frame::data(data))),
        };

        match &frame {
            Some(Ok(frame)) => {
                if let (Some(data), Some(capture)) = (frame.data_ref(), this.capture.as_mut()) {
                    capture.record(data.len());
                }
            }
            // end of stream or body error
            _ => drop(this.capture.take()),
        }

        Poll::Ready(frame)
    }

    fn is_end_stream(&self) -> bool {
        match &self.kind {
            Kind::Inner { body } => body.is_end_stream(),
            Kind::Fixed { data } => data.is_none(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.kind {
            Kind::Inner { body } => body.size_hint(),
            Kind::Fixed { data } => {
                SizeHint::with_exact(data.as_ref().map_or(0, |data| data.len() as u64))
            }
        }
    }
}
