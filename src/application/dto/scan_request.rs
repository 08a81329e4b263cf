use crate::lockfile_scan::policies::MetadataSelection;
use crate::lockfile_scan::services::FilterConfig;
use std::path::PathBuf;

/// Where a batch of query strings comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// JSON array file of `name@version` strings
    File(PathBuf),
    /// A single `name@version` string
    Inline(String),
}

/// ScanRequest - Internal request DTO for the scan use case
///
/// Query sources are resolved in the order they appear in `queries`.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path to the package-lock.json to scan
    pub lockfile_path: PathBuf,
    /// Query sources, in resolution order
    pub queries: Vec<QuerySource>,
    /// Post-search instance filter
    pub filter: FilterConfig,
    /// Whether dependency-range references are searched too
    pub search_in_deps: bool,
    /// Which passthrough metadata ends up in the report
    pub metadata: MetadataSelection,
}

impl ScanRequest {
    pub fn new(lockfile_path: PathBuf) -> Self {
        Self {
            lockfile_path,
            queries: Vec::new(),
            filter: FilterConfig::default(),
            search_in_deps: true,
            metadata: MetadataSelection::default(),
        }
    }

    pub fn with_query_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.queries.push(QuerySource::File(path.into()));
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.queries.push(QuerySource::Inline(query.into()));
        self
    }

    pub fn with_queries<I, S>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queries
            .extend(queries.into_iter().map(|q| QuerySource::Inline(q.into())));
        self
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search_in_deps(mut self, search_in_deps: bool) -> Self {
        self.search_in_deps = search_in_deps;
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataSelection) -> Self {
        self.metadata = metadata;
        self
    }
}
