//! Research pipeline
//!
//! Fans a query out across the adapters assigned to each requested
//! category, filters thin results, summarizes the survivors, and renders
//! the final report.
//!
//! ```text
//! query
//!   │
//!   ▼
//! category fan-out ──► source adapters ──► RawResult stream
//!                                              │
//!                                              ▼
//!                                      content-length filter
//!                                              │
//!                                              ▼
//!                                         summarizer
//!                                              │
//!                                              ▼
//!                                     renderer + persistence
//! ```

pub mod pipeline;

pub use pipeline::{ResearchReport, Researcher};
