use crate::llm::Summarizer;
use crate::report::{renderer, ReportSink};
use crate::sources::{Category, SourceRegistry};
use crate::types::AnalyzedResult;
use crate::utils::excerpt;
use tracing::{debug, info, warn};

/// Records whose content is shorter than this are dropped before
/// summarization. Exactly this length is retained.
const MIN_CONTENT_LEN: usize = 100;
/// Display budget for the content carried into the report.
const DISPLAY_CONTENT_LEN: usize = 500;

/// Outcome of one research invocation.
#[derive(Debug, Clone)]
pub struct ResearchReport {
    pub query: String,
    pub report: String,
    pub results: Vec<AnalyzedResult>,
}

pub struct Researcher {
    registry: SourceRegistry,
    summarizer: Summarizer,
    sink: Option<Box<dyn ReportSink>>,
}

impl Researcher {
    pub fn new(registry: SourceRegistry, summarizer: Summarizer) -> Self {
        Self {
            registry,
            summarizer,
            sink: None,
        }
    }

    /// Attach a persistence collaborator that receives every finished
    /// report.
    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run the full aggregation pipeline.
    ///
    /// Categories are processed in the given order; unrecognized names are
    /// ignored. Returns `None` when no source yielded enough content, which
    /// is a normal outcome rather than an error. All fetch and summarization
    /// failures are absorbed below this call.
    pub async fn conduct_research(
        &self,
        query: &str,
        categories: &[String],
        max_per_category: usize,
    ) -> Option<ResearchReport> {
        info!(query = %query, ?categories, "Starting trusted source research");

        let mut raw_results = Vec::new();
        for name in categories {
            let Some(category) = Category::parse(name) else {
                debug!(category = %name, "Ignoring unrecognized category");
                continue;
            };
            for adapter in self.registry.for_category(category) {
                let hits = adapter.search(query, max_per_category).await;
                raw_results.extend(hits);
            }
        }

        info!(count = raw_results.len(), "Analyzing sources");
        let mut analyzed = Vec::new();
        for result in raw_results {
            if result.content.chars().count() < MIN_CONTENT_LEN {
                debug!(title = %result.title, source = %result.source, "Dropping thin result");
                continue;
            }

            let analysis = self.summarizer.summarize(&result.content, query).await;
            debug!(title = %result.title, "Analyzed source");

            analyzed.push(AnalyzedResult {
                title: result.title,
                url: result.url,
                source: result.source,
                kind: result.kind,
                content: excerpt(&result.content, DISPLAY_CONTENT_LEN),
                analysis,
            });
        }

        if analyzed.is_empty() {
            info!("No suitable sources found");
            return None;
        }

        let report = renderer::render(query, &analyzed);
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.persist(query, &report, &analyzed).await {
                warn!(error = %e, "Failed to persist report");
            }
        }

        info!(count = analyzed.len(), "Research completed");
        Some(ResearchReport {
            query: query.to_string(),
            report,
            results: analyzed,
        })
    }
}
