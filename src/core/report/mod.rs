//! Daily report: render, dispatch and the orchestrating pipeline
//!
//! - [`render`] - template binding
//! - [`dispatch`] - message assembly and sending
//! - [`pipeline`] - strict fetch/render/dispatch sequencing
//! - [`summary`] - run outcome and failure types

pub mod dispatch;
pub mod pipeline;
pub mod render;
pub mod summary;

pub use dispatch::{build_message, subject_for, EmailDispatcher};
pub use pipeline::ReportPipeline;
pub use render::{render_template, template_value_names, ReportContext, ReportRenderer};
pub use summary::{PipelineFailure, RunState, RunSummary, Stage};
