//! scnpm - scan npm lockfiles for known-compromised packages
//!
//! This library reads a `package-lock.json` (lockfileVersion 1, 2 or 3) and
//! reports every place a flagged `name@version` appears: installed copies
//! at any nesting depth, and dependency ranges that still pull it in.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lockfile_scan`): Lockfile model, matching and filtering
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scnpm::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanPackagesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanRequest::new(PathBuf::from("package-lock.json"))
//!     .with_query("event-stream@3.3.6");
//! let response = use_case.execute(request)?;
//!
//! let output = TableFormatter::default().format(&response.results)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod lockfile_scan;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        DisplayOptions, JsonFormatter, TableFormatter,
    };
    pub use crate::application::dto::{OutputFormat, QuerySource, ScanRequest, ScanResponse};
    pub use crate::application::use_cases::ScanPackagesUseCase;
    pub use crate::lockfile_scan::domain::{
        LockfileDocument, PackageInstance, PackageQuery, ScanResult,
    };
    pub use crate::lockfile_scan::policies::MetadataSelection;
    pub use crate::lockfile_scan::services::{scan_all, FilterConfig, InstanceFinder, Scanner};
    pub use crate::ports::outbound::{
        LockfileReader, OutputPresenter, ProgressReporter, QueryListReader, ScanFormatter,
    };
    pub use crate::shared::Result;
}
