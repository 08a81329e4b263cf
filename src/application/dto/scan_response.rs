use crate::lockfile_scan::domain::ScanResult;

/// ScanResponse - Internal response DTO from the scan use case
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// One result per resolved query, in query order
    pub results: Vec<ScanResult>,
    /// lockfileVersion of the scanned document
    pub schema_version: u32,
    /// Number of entries the lockfile declared
    pub entry_count: usize,
    /// Query strings that could not be parsed or read
    pub skipped_queries: usize,
}

impl ScanResponse {
    pub fn new(
        results: Vec<ScanResult>,
        schema_version: u32,
        entry_count: usize,
        skipped_queries: usize,
    ) -> Self {
        Self {
            results,
            schema_version,
            entry_count,
            skipped_queries,
        }
    }

    /// Number of queries with at least one matching instance
    pub fn risk_count(&self) -> usize {
        self.results.iter().filter(|r| r.was_found()).count()
    }
}
