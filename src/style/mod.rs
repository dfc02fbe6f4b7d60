//! Terminal styling for log lines.
//!
//! # Data Flow
//! ```text
//! ColorMode + Theme (config / CLI)
//!     → theme.rs (resolve auto: terminal detection, COLORFGBG)
//!     → palette.rs (immutable Palette, built once)
//!     → shared via Arc with every RequestLog service
//!
//! Per request:
//!     status code → class.rs (StatusClass) → Palette::status → Style::paint
//! ```
//!
//! # Design Decisions
//! - Palette is immutable once built; no runtime mutation
//! - A plain palette never emits escape codes, so output degrades cleanly
//!   when stderr is not a terminal

pub mod class;
pub mod palette;
pub mod theme;

pub use class::StatusClass;
pub use palette::{Palette, Style};
pub use theme::{ColorMode, Theme};
