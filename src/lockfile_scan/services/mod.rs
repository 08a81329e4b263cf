mod instance_filter;
mod instance_finder;
mod name_matcher;
mod scanner;

pub use instance_filter::{FilterConfig, InstanceFilter};
pub use instance_finder::{find_instances, terminal_package_name, InstanceFinder};
pub use name_matcher::NameMatcher;
pub use scanner::{scan_all, Scanner};
