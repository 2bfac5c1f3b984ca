// Vscene Report - daily usage report mailer
// Copyright (c) 2025 Vscene Report Contributors
// Licensed under the MIT License

//! # Vscene Report
//!
//! A scheduled job that emails one organisation's daily video-conferencing
//! usage. Once per day it reads yesterday's pre-aggregated record from
//! DynamoDB, renders it into an HTML template, and sends it through Amazon
//! SES to a fixed recipient list.
//!
//! ## Architecture
//!
//! - [`config`] - Environment-derived, immutable configuration
//! - [`domain`] - Report day, lookup key, record and error types
//! - [`adapters`] - DynamoDB store and SES mailer behind traits
//! - [`core`] - Rendering, dispatch and the run pipeline
//! - [`logging`] - Structured logging
//!
//! ## Behaviour
//!
//! - A missing record is not an error: it renders as an all-zero report.
//! - Any failure aborts the run before dispatch, so either one complete
//!   email is sent or none is.
//! - Runs are independent; re-running for the same day re-sends an
//!   equivalent email.
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]; the pipeline wraps the
//! failing stage's error in [`core::report::PipelineFailure`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
