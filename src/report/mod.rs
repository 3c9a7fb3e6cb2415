//! Report rendering and persistence
//!
//! `renderer` turns an ordered list of analyzed results into the fixed-width
//! text report; `store` writes the report and its structured JSON companion
//! to disk.

pub mod renderer;
pub mod store;

pub use renderer::{render, render_at};
pub use store::{FileSink, ReportSink};
