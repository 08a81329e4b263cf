/// Filesystem and standard stream adapters
mod file_reader;
mod stdout_presenter;

pub use file_reader::FileSystemReader;
pub use stdout_presenter::StdoutPresenter;
