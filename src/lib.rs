// Trusted Researcher - aggregates trusted web sources into analyzed research reports

pub mod config;
pub mod types;
pub mod sources;   // Source adapters (arXiv, Semantic Scholar, Wikipedia, GitHub, Reddit)
pub mod llm;       // Ollama chat client and summarizer fallback chain
pub mod research;  // Aggregation pipeline
pub mod report;    // Report rendering and persistence
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use research::{ResearchReport, Researcher};
pub use types::{AnalyzedResult, RawResult, ResultKind};
