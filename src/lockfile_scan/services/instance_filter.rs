use crate::lockfile_scan::domain::PackageInstance;

/// Post-scan predicates selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub dev_only: bool,
    pub nested_only: bool,
    pub min_depth: usize,
}

impl FilterConfig {
    pub fn keeps(&self, instance: &PackageInstance) -> bool {
        (!self.dev_only || instance.is_dev)
            && (!self.nested_only || instance.is_nested)
            && instance.depth_level >= self.min_depth
    }
}

/// InstanceFilter - order-preserving subsequence of the instances `config` keeps
pub struct InstanceFilter;

impl InstanceFilter {
    pub fn filter(instances: &[PackageInstance], config: &FilterConfig) -> Vec<PackageInstance> {
        instances
            .iter()
            .filter(|instance| config.keeps(instance))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(version: &str, path: &str, is_dev: bool) -> PackageInstance {
        PackageInstance::install(version, path, is_dev)
    }

    fn fixture() -> Vec<PackageInstance> {
        vec![
            instance("1.0.0", "node_modules/a", true),
            instance("2.0.0", "node_modules/b/node_modules/a", false),
            instance("3.0.0", "node_modules/b/node_modules/c/node_modules/a", true),
        ]
    }

    fn versions(instances: &[PackageInstance]) -> Vec<&str> {
        instances.iter().map(|i| i.version.as_str()).collect()
    }

    #[test]
    fn test_default_config_keeps_everything() {
        let filtered = InstanceFilter::filter(&fixture(), &FilterConfig::default());
        assert_eq!(versions(&filtered), vec!["1.0.0", "2.0.0", "3.0.0"]);
    }

    #[test]
    fn test_dev_only() {
        let config = FilterConfig {
            dev_only: true,
            ..FilterConfig::default()
        };
        let filtered = InstanceFilter::filter(&fixture(), &config);
        assert_eq!(versions(&filtered), vec!["1.0.0", "3.0.0"]);
    }

    #[test]
    fn test_nested_only() {
        let config = FilterConfig {
            nested_only: true,
            ..FilterConfig::default()
        };
        let filtered = InstanceFilter::filter(&fixture(), &config);
        assert_eq!(versions(&filtered), vec!["2.0.0", "3.0.0"]);
    }

    #[test]
    fn test_min_depth() {
        let config = FilterConfig {
            min_depth: 2,
            ..FilterConfig::default()
        };
        let filtered = InstanceFilter::filter(&fixture(), &config);
        assert_eq!(versions(&filtered), vec!["3.0.0"]);
    }

    #[test]
    fn test_combined_predicates() {
        let config = FilterConfig {
            dev_only: true,
            nested_only: true,
            min_depth: 1,
        };
        let filtered = InstanceFilter::filter(&fixture(), &config);
        assert_eq!(versions(&filtered), vec!["3.0.0"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let configs = [
            FilterConfig::default(),
            FilterConfig {
                dev_only: true,
                ..FilterConfig::default()
            },
            FilterConfig {
                nested_only: true,
                min_depth: 2,
                ..FilterConfig::default()
            },
        ];
        for config in configs {
            let once = InstanceFilter::filter(&fixture(), &config);
            let twice = InstanceFilter::filter(&once, &config);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(InstanceFilter::filter(&[], &FilterConfig::default()).is_empty());
    }
}
