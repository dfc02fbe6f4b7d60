//! HTTP middleware subsystem.
//!
//! # Data Flow
//! ```text
//! Request
//!     → layer.rs (pre-handling line, start timer)
//!     → inner service (request forwarded untouched)
//!     → layer.rs (response head: status captured)
//!     → body.rs (frames forwarded, bytes counted)
//!     → end of stream / drop → post-handling line
//!
//! Protocol upgrades:
//!     inner service → upgrade.rs (checked access to the connection)
//! ```

pub mod body;
pub mod layer;
pub mod upgrade;

pub use body::LoggedBody;
pub use layer::{RequestLog, RequestLogLayer, ResponseFuture};
