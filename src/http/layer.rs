//! The request logging middleware.
//!
//! # Responsibilities
//! - Log method, URI and peer host before the inner service runs
//! - Delegate with the request untouched (extensions and upgrade handle
//!   included)
//! - Wrap the response body so status, size and timing are logged once the
//!   response completes
//!
//! # Design Decisions
//! - No state is shared between requests besides the palette and the sink
//! - Inner service errors pass through without a post-handling line

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use std::time::Instant;

use axum::http::{header, HeaderValue, Request, Response, StatusCode};
use hyper::body::{Body, Bytes};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::http::body::{Emitter, LoggedBody};
use crate::observability::{LogSink, RequestLine, TracingSink};
use crate::style::Palette;

const INTERNAL_ERROR_BODY: &str = "Internal Server Error\n";

/// [`Layer`] that wraps services in [`RequestLog`].
#[derive(Clone)]
pub struct RequestLogLayer {
    palette: Arc<Palette>,
    sink: Arc<dyn LogSink>,
}

impl RequestLogLayer {
    pub fn new(palette: Palette, sink: impl LogSink) -> Self {
        Self::from_shared(Arc::new(palette), Arc::new(sink))
    }

    /// Build from an already shared palette and sink.
    pub fn from_shared(palette: Arc<Palette>, sink: Arc<dyn LogSink>) -> Self {
        Self { palette, sink }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for RequestLogLayer {
    /// Terminal-detected palette writing to the tracing subscriber.
    fn default() -> Self {
        Self::new(Palette::default(), TracingSink)
    }
}

impl fmt::Debug for RequestLogLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestLogLayer")
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLog<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLog {
            inner,
            palette: Arc::clone(&self.palette),
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Middleware that logs each request and its response.
#[derive(Clone)]
pub struct RequestLog<S> {
    inner: S,
    palette: Arc<Palette>,
    sink: Arc<dyn LogSink>,
}

impl<S> RequestLog<S> {
    pub fn new(inner: S, palette: Palette, sink: impl LogSink) -> Self {
        RequestLogLayer::new(palette, sink).layer(inner)
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Log and dispatch a request that may be missing.
    ///
    /// A missing request is answered with `500 Internal Server Error` and the
    /// inner service is never called. [`Service::call`] always passes
    /// `Some`.
    pub fn handle<ReqBody>(&mut self, req: Option<Request<ReqBody>>) -> ResponseFuture<S::Future>
    where
        S: Service<Request<ReqBody>>,
    {
        let line = match &req {
            Some(req) => RequestLine::from_request(req),
            None => RequestLine::absent(),
        };
        self.sink.emit(&line.render(&self.palette));

        let emitter = Emitter {
            palette: Arc::clone(&self.palette),
            sink: Arc::clone(&self.sink),
            start: Instant::now(),
        };

        let future = req.map(|req| self.inner.call(req));

        ResponseFuture {
            future,
            emitter: Some(emitter),
        }
    }
}

impl<S> fmt::Debug for RequestLog<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestLog")
            .field("inner", &self.inner)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestLog<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Body<Data = Bytes>,
{
    type Response = Response<LoggedBody<ResBody>>;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        self.handle(Some(req))
    }
}

pin_project! {
    /// Response future for [`RequestLog`].
    pub struct ResponseFuture<F> {
        // `None` when the request was missing
        #[pin]
        future: Option<F>,
        emitter: Option<Emitter>,
    }
}

impl<F, ResBody, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
    ResBody: Body<Data = Bytes>,
{
    type Output = Result<Response<LoggedBody<ResBody>>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let Some(future) = this.future.as_pin_mut() else {
            let emitter = this.emitter.take().expect("ResponseFuture polled after completion");
            return Poll::Ready(Ok(internal_error(emitter)));
        };

        let response = ready!(future.poll(cx))?;
        let emitter = this.emitter.take().expect("ResponseFuture polled after completion");
        let capture = emitter.capture(response.status());

        Poll::Ready(Ok(response.map(|body| LoggedBody::new(body, capture))))
    }
}

fn internal_error<B>(emitter: Emitter) -> Response<LoggedBody<B>> {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let body = LoggedBody::fixed(
        Bytes::from_static(INTERNAL_ERROR_BODY.as_bytes()),
        emitter.capture(status),
    );

    let mut response = Response::new(body);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}
