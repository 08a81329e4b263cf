use crate::application::dto::{QuerySource, ScanRequest, ScanResponse};
use crate::lockfile_scan::domain::{LockfileDocument, PackageQuery, ScanResult};
use crate::lockfile_scan::services::{InstanceFinder, Scanner};
use crate::ports::outbound::{LockfileReader, ProgressReporter, QueryListReader};
use crate::shared::error::ScanError;
use crate::shared::Result;
use std::path::Path;

/// ScanPackagesUseCase - resolves queries, loads the lockfile and scans it
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `QR` - QueryListReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanPackagesUseCase<LR, QR, PR> {
    lockfile_reader: LR,
    query_list_reader: QR,
    progress_reporter: PR,
}

impl<LR, QR, PR> ScanPackagesUseCase<LR, QR, PR>
where
    LR: LockfileReader,
    QR: QueryListReader,
    PR: ProgressReporter,
{
    pub fn new(lockfile_reader: LR, query_list_reader: QR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            query_list_reader,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Returns an error if no query could be resolved, or if the lockfile
    /// is missing or unparsable. Bad individual queries and unreadable
    /// query files are reported as warnings and skipped.
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Resolve query strings from every source
        let (queries, skipped) = self.resolve_queries(&request.queries);
        if queries.is_empty() {
            return Err(ScanError::NoQueries.into());
        }

        // Step 2: Load the lockfile
        let document = self.load_lockfile(&request.lockfile_path)?;

        // Step 3: Scan each query
        let scanner = Scanner::new(InstanceFinder::new(request.search_in_deps), request.filter);
        let results = self.scan_queries(&scanner, &document, &queries);

        // Step 4: Keep only the requested metadata
        let results = request.metadata.apply(&results);

        let response = ScanResponse::new(
            results,
            document.schema_version,
            document.entry_count(),
            skipped,
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} of {} package(s) found",
            response.risk_count(),
            response.results.len()
        ));

        Ok(response)
    }

    /// Expands every source into parsed queries, returning the number of
    /// inputs that had to be skipped
    fn resolve_queries(&self, sources: &[QuerySource]) -> (Vec<PackageQuery>, usize) {
        let mut queries = Vec::new();
        let mut skipped = 0;

        for source in sources {
            match source {
                QuerySource::File(path) => match self.query_list_reader.read_query_list(path) {
                    Ok(entries) => {
                        for entry in &entries {
                            skipped += self.push_parsed(entry, &mut queries);
                        }
                    }
                    Err(e) => {
                        self.warn(&e.to_string());
                        skipped += 1;
                    }
                },
                QuerySource::Inline(entry) => {
                    skipped += self.push_parsed(entry, &mut queries);
                }
            }
        }

        (queries, skipped)
    }

    /// Parses one query string into `queries`; returns 1 if it was skipped
    fn push_parsed(&self, raw: &str, queries: &mut Vec<PackageQuery>) -> usize {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return 0;
        }
        match trimmed.parse::<PackageQuery>() {
            Ok(query) => {
                queries.push(query);
                0
            }
            Err(e) => {
                self.warn(&e.to_string());
                1
            }
        }
    }

    fn warn(&self, message: &str) {
        self.progress_reporter
            .report_error(&format!("⚠️  Warning: {}", message));
    }

    fn load_lockfile(&self, lockfile_path: &Path) -> Result<LockfileDocument> {
        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.json from: {}",
            lockfile_path.display()
        ));

        let document = self.lockfile_reader.read_lockfile(lockfile_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package entries (lockfileVersion {})",
            document.entry_count(),
            document.schema_version
        ));

        Ok(document)
    }

    fn scan_queries(
        &self,
        scanner: &Scanner,
        document: &LockfileDocument,
        queries: &[PackageQuery],
    ) -> Vec<ScanResult> {
        self.progress_reporter
            .report(&format!("🔍 Scanning for {} package(s)...", queries.len()));

        let total = queries.len();
        queries
            .iter()
            .enumerate()
            .map(|(index, query)| {
                let result = scanner.scan_query(document, query);
                self.progress_reporter
                    .report_progress(index + 1, total, Some(&query.to_string()));
                result
            })
            .collect()
    }
}
