pub mod lockfile;
pub mod package_query;
pub mod scan_result;

pub use lockfile::{FlatPackageEntry, LegacyDependencyNode, LockfileDocument};
pub use package_query::PackageQuery;
pub use scan_result::{InstanceMetadata, PackageInstance, ScanResult};
