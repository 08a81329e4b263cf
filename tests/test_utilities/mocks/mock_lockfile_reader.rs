use scnpm::prelude::*;
use std::path::Path;

/// Mock LockfileReader for testing
///
/// Decodes `content` as a package-lock.json on every read.
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, _lockfile_path: &Path) -> Result<LockfileDocument> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(serde_json::from_str(&self.content)?)
    }
}
