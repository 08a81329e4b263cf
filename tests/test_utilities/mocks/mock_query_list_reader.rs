use scnpm::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock QueryListReader for testing
///
/// Paths without a registered list fail like a missing file would.
#[derive(Default)]
pub struct MockQueryListReader {
    lists: HashMap<PathBuf, Vec<String>>,
}

impl MockQueryListReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, path: &str, queries: &[&str]) -> Self {
        self.lists.insert(
            PathBuf::from(path),
            queries.iter().map(|q| q.to_string()).collect(),
        );
        self
    }
}

impl QueryListReader for MockQueryListReader {
    fn read_query_list(&self, list_path: &Path) -> Result<Vec<String>> {
        match self.lists.get(list_path) {
            Some(queries) => Ok(queries.clone()),
            None => anyhow::bail!("Mock query list not found: {}", list_path.display()),
        }
    }
}
