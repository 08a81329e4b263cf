/// Mock implementations for testing
mod mock_lockfile_reader;
mod mock_progress_reporter;
mod mock_query_list_reader;

pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_query_list_reader::MockQueryListReader;
