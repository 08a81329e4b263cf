use crate::lockfile_scan::domain::LockfileDocument;
use crate::ports::outbound::{LockfileReader, QueryListReader};
use crate::shared::error::ScanError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LockfileReader and QueryListReader ports.
/// All reads go through the shared symlink/size checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<LockfileDocument> {
        if !lockfile_path.exists() {
            return Err(ScanError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: "Run in the root directory of an npm project, or specify the lockfile with --file.".to_string(),
            }
            .into());
        }

        let content = read_checked(lockfile_path, "package-lock.json")?;

        serde_json::from_str(&content).map_err(|e| {
            ScanError::LockfileParseError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl QueryListReader for FileSystemReader {
    fn read_query_list(&self, list_path: &Path) -> Result<Vec<String>> {
        let list_error = |details: String| ScanError::QueryListReadError {
            path: list_path.to_path_buf(),
            details,
        };

        let content = read_checked(list_path, "packages file").map_err(|e| list_error(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| list_error(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("package-lock.json");
        fs::write(
            &lockfile_path,
            r#"{
                "name": "test-project",
                "version": "1.0.0",
                "lockfileVersion": 2,
                "packages": {
                    "node_modules/react": { "version": "18.2.0", "dev": false }
                }
            }"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let document = reader.read_lockfile(&lockfile_path).unwrap();

        assert_eq!(document.name, "test-project");
        assert_eq!(document.version, "1.0.0");
        assert_eq!(document.schema_version, 2);
        assert_eq!(document.flat_packages.len(), 1);
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new();

        let result = reader.read_lockfile(&temp_dir.path().join("package-lock.json"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("package-lock.json not found"));
        assert!(err_string.contains("--file"));
    }

    #[test]
    fn test_read_lockfile_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("package-lock.json");
        fs::write(&lockfile_path, "not valid json").unwrap();

        let result = FileSystemReader::new().read_lockfile(&lockfile_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse package-lock.json"));
    }

    #[test]
    fn test_read_query_list_success() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("badpak.json");
        fs::write(
            &list_path,
            r#"["react@18.2.0", "@types/node@18.0.0", "lodash@4.17.21"]"#,
        )
        .unwrap();

        let queries = FileSystemReader::new().read_query_list(&list_path).unwrap();

        assert_eq!(
            queries,
            vec!["react@18.2.0", "@types/node@18.0.0", "lodash@4.17.21"]
        );
    }

    #[test]
    fn test_read_query_list_missing_file() {
        let result = FileSystemReader::new().read_query_list(Path::new("non-existent-file.json"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read packages file"));
    }

    #[test]
    fn test_read_query_list_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("invalid.json");
        fs::write(&list_path, "not valid json").unwrap();

        let result = FileSystemReader::new().read_query_list(&list_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_query_list_rejects_non_string_entries() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("numbers.json");
        fs::write(&list_path, "[1, 2, 3]").unwrap();

        assert!(FileSystemReader::new().read_query_list(&list_path).is_err());
    }
}
