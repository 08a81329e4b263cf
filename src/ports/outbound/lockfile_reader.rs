use crate::lockfile_scan::domain::LockfileDocument;
use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for loading a package-lock.json
///
/// Implementations read and decode the file; the scan core only ever sees
/// the decoded document.
pub trait LockfileReader {
    /// Reads and decodes the lockfile at `lockfile_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read (permissions, symlink, size limit)
    /// - The content is not a valid lockfile JSON document
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<LockfileDocument>;
}
