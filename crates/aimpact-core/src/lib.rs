//! Core library for aimpact.
//!
//! This crate provides the text metrics, canned chat, and template content
//! generation used by the `aimpact` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`metrics`] - Text statistics: counts, reading time, sentiment, readability, keywords
//! - [`debounce`] - Quiet-period policy for callers that re-analyze on every edit
//! - [`chat`] - Canned-response chat assistant
//! - [`generator`] - Template-based content generation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use aimpact_core::{Sentiment, analyze};
//!
//! let report = analyze("This is great. This is great.");
//! assert_eq!(report.word_count, 6);
//! assert_eq!(report.sentence_count, 2);
//! assert_eq!(report.sentiment, Sentiment::Positive);
//! ```
#![deny(unsafe_code)]

pub mod chat;
pub mod config;
pub mod debounce;
pub mod error;
pub mod generator;
pub mod keywords;
pub mod metrics;
pub mod sentiment;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ContentError, ContentResult};
pub use metrics::{AnalysisResult, ReadabilityBand, analyze};
pub use sentiment::Sentiment;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
