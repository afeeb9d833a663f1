//! Structured logging facility for deptrec
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use deptrec_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! The store layer only emits `tracing::debug!` for the statements it runs;
//! whoever drives an operation (the CLI) owns its start/end events.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
