//! Colored request logging middleware for tower/axum/hyper servers.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ RequestLog ──── "<- GET /meow 127.0.0.1" ────▶ LogSink
//!                       │
//!                       ▼
//!                  inner service
//!                       │
//!   Client Response     ▼
//!   ◀────────────── LoggedBody ──── "-> 307 Temporary Redirect 4B 81µs" ─▶ LogSink
//!                (status + byte count)
//! ```
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use reqlog::{Palette, RequestLogLayer, TracingSink};
//!
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "oh bea" }))
//!     .layer(RequestLogLayer::new(Palette::plain(), TracingSink));
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod style;

pub use error::Error;
pub use http::{LoggedBody, RequestLog, RequestLogLayer};
pub use observability::{LogSink, MemorySink, TracingSink};
pub use style::{ColorMode, Palette, StatusClass, Theme};
