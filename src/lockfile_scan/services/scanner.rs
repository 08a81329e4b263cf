use crate::lockfile_scan::domain::{LockfileDocument, PackageQuery, ScanResult};
use crate::lockfile_scan::services::{FilterConfig, InstanceFilter, InstanceFinder};

/// Scanner - runs find + filter for each query and packages the results
///
/// Queries are independent; results come back in query order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    finder: InstanceFinder,
    filter: FilterConfig,
}

impl Scanner {
    pub fn new(finder: InstanceFinder, filter: FilterConfig) -> Self {
        Self { finder, filter }
    }

    pub fn scan_query(&self, document: &LockfileDocument, query: &PackageQuery) -> ScanResult {
        let found = self
            .finder
            .find_instances(document, query.name(), query.version_spec());
        let kept = InstanceFilter::filter(&found, &self.filter);
        ScanResult::new(query.clone(), kept)
    }

    pub fn scan_all(&self, document: &LockfileDocument, queries: &[PackageQuery]) -> Vec<ScanResult> {
        queries
            .iter()
            .map(|query| self.scan_query(document, query))
            .collect()
    }
}

/// Scans every query with the default finder and the given filter
pub fn scan_all(
    document: &LockfileDocument,
    queries: &[PackageQuery],
    filter: &FilterConfig,
) -> Vec<ScanResult> {
    Scanner::new(InstanceFinder::default(), *filter).scan_all(document, queries)
}
