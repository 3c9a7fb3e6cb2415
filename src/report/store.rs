//! Report persistence
//!
//! Writes the rendered report and a structured JSON companion document to
//! timestamp-named files. The pipeline treats the sink as advisory: a write
//! failure is logged and never fails the research call.

use crate::types::AnalyzedResult;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn persist(&self, query: &str, report: &str, results: &[AnalyzedResult]) -> Result<()>;
}

/// Writes `trusted_research_<ts>.txt` and `trusted_data_<ts>.json` into a
/// directory.
pub struct FileSink {
    dir: PathBuf,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    query: &'a str,
    timestamp: &'a str,
    sources: &'a [AnalyzedResult],
    report: &'a str,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn persist(&self, query: &str, report: &str, results: &[AnalyzedResult]) -> Result<()> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        tokio::fs::create_dir_all(&self.dir).await?;

        let report_path = self.dir.join(format!("trusted_research_{timestamp}.txt"));
        tokio::fs::write(&report_path, report).await?;

        let document = ReportDocument {
            query,
            timestamp: &timestamp,
            sources: results,
            report,
        };
        let data_path = self.dir.join(format!("trusted_data_{timestamp}.json"));
        tokio::fs::write(&data_path, serde_json::to_string_pretty(&document)?).await?;

        info!(
            report = %report_path.display(),
            data = %data_path.display(),
            "Report saved"
        );
        Ok(())
    }
}
