/// Use cases module containing application business logic orchestration
mod scan_packages;

pub use scan_packages::ScanPackagesUseCase;
