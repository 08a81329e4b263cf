use crate::lockfile_scan::domain::ScanResult;
use crate::shared::Result;

/// ScanFormatter port for rendering scan results
pub trait ScanFormatter {
    /// Renders `results` (one per query, in query order) to a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, results: &[ScanResult]) -> Result<String>;
}
