/// Lockfile scanning domain
///
/// Pure logic over an already-parsed lockfile: no I/O happens here.
pub mod domain;
pub mod policies;
pub mod services;
