//! # shellprint-core
//!
//! Core library for shellprint - a behavioral profiler for shell usage.
//!
//! This library provides:
//! - Source readers for shell history and configuration files
//! - A command classifier with installed-tool detection
//! - Profile aggregation (tech stack, proficiency, work patterns)
//! - Timeline curation and corpus serialization
//! - A client for the external narrative-generation service
//!
//! ## Architecture
//!
//! Data flows one direction through the pipeline:
//!
//! ```text
//! Source Readers ──► Classifier / Config Parser ──► Aggregator ──► Timeline
//!                                                              └──► Corpus
//! ```
//!
//! No stage mutates another stage's output after it is produced, and every
//! ranking breaks ties deterministically, so identical input always yields
//! an identical profile.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shellprint_core::{Analyzer, Config};
//!
//! # async fn run() -> shellprint_core::Result<()> {
//! let config = Config::load()?;
//! let data = Analyzer::new(config).run().await?;
//! println!("{} commands analyzed", data.total_commands());
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use analyzer::Analyzer;
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod analyzer;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod configparse;
pub mod error;
pub mod logging;
pub mod narrative;
pub mod probe;
pub mod sources;
pub mod types;
