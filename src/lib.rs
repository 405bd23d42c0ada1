//! # spreadbook
//!
//! Consolidates a delimited file of timestamped bid/ask quotes into
//! per-symbol spread statistics and renders three fixed-format text reports:
//! a summary table and two histogram variants.
//!
//! ## Record format
//!
//! One record per line, `timestamp;symbol;bid;ask`, blank lines skipped,
//! trailing extra fields ignored. The spread of each record is
//! `100 * (ask - bid) / ask`, a signed percentage of the ask.
//!
//! ## Quick Start
//!
//! ```
//! use spreadbook::{AggregateStore, Format, ingest_line, report};
//!
//! let mut store = AggregateStore::new();
//! ingest_line(&mut store, 1, "09:00;ABC;10.00;10.10", ';')?;
//! ingest_line(&mut store, 2, "09:01;ABC;10.00;10.20", ';')?;
//! ingest_line(&mut store, 3, "09:02;XYZ;5.00;5.05", ';')?;
//!
//! // Ascending by count, ties broken by symbol
//! store.rank();
//! assert_eq!(store.items()[0].symbol, "XYZ");
//! assert_eq!(store.max_count(), 2);
//!
//! let mut out = Vec::new();
//! report::summary(store.items(), &Format::default(), &mut out)?;
//! report::histogram1(store.items(), store.max_count(), &mut out)?;
//! report::histogram2(store.items(), store.max_count(), &mut out)?;
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Summary:"));
//! # Ok::<(), spreadbook::Error>(())
//! ```
//!
//! ## Reports
//!
//! All reports render the same ranked sequence. Histogram #1 prints bars in
//! rank order; Histogram #2 prints even-indexed positions first (ascending)
//! and then odd-indexed positions in reverse, so the busiest symbols meet in
//! the middle of the chart.
//!
//! The whole run is a single synchronous pass: ingest every record, sort
//! once, render. Every error — unreadable file, short record, non-numeric
//! price — is fatal and aborts before any report output is written.

mod aggregate;
mod error;
mod ingest;
mod source;
mod store;

pub mod config;
pub mod engine;
pub mod formula;
pub mod report;

// Re-export public API
pub use aggregate::SymbolAggregate;
pub use config::Config;
pub use error::{Error, Result};
pub use ingest::{QuoteRecord, ingest_line, parse_record};
pub use report::Format;
pub use source::QuoteFile;
pub use store::AggregateStore;
