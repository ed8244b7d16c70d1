//! spendlog - Personal expense and income tracker
//!
//! This library provides the core functionality for the spendlog
//! tracker: validated expense and income entries, filtering and
//! sorting, JSON file persistence, and monthly cash-flow reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, filter criteria)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation, monthly reports, and export
//! - `display`: Terminal table formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::TrackerPaths, settings::Settings};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
