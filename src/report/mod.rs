//! Presentation-side helpers: formatting, display summaries and tracking payloads

pub mod format;
mod display;
pub mod tracking;

pub use display::{ChurnSummary, RetentionSummary, Summary};
pub use format::{format_compact_currency, format_currency, format_whole_count};
pub use tracking::{LogSink, TrackingEvent, TrackingSink};
