//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RequestLog (pre-handling) ─┐
//!                            ├─→ entry.rs (RequestLine / ResponseLine)
//! LoggedBody (post-handling) ┘        → format.rs (host, compact bytes)
//!                                     → Palette (styling)
//!                                     → sink.rs (LogSink::emit, one call per line)
//!
//! Consumers:
//!     → TracingSink: process-wide tracing subscriber (logging.rs)
//!     → MemorySink: captured lines for assertions
//! ```
//!
//! # Design Decisions
//! - The sink is injected rather than global so tests can capture output
//! - Each line is fully rendered before it reaches the sink, so concurrent
//!   requests interleave at line granularity only

pub mod entry;
pub mod format;
pub mod logging;
pub mod sink;

pub use entry::{RequestLine, ResponseLine};
pub use sink::{LogSink, MemorySink, TracingSink};
