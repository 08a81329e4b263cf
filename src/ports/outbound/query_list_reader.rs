use crate::shared::Result;
use std::path::Path;

/// QueryListReader port for loading flagged-package lists
pub trait QueryListReader {
    /// Reads a JSON array of `name@version` strings
    ///
    /// The strings are returned unparsed; parsing and per-item error
    /// reporting belong to the caller.
    fn read_query_list(&self, list_path: &Path) -> Result<Vec<String>>;
}
