use crate::lockfile_scan::domain::{InstanceMetadata, PackageInstance, ScanResult};

/// MetadataSelection policy for deciding which passthrough metadata is reported
///
/// Instances always carry everything their lockfile entry had. This policy
/// keeps only the groups the user asked for:
/// - `registry`: resolved URL, integrity hash, license
/// - `dependencies`: dependencies and peerDependencies
/// - `technical`: engines, bin, scripts
///
/// The default selects nothing, so reports only contain the core fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataSelection {
    pub registry: bool,
    pub dependencies: bool,
    pub technical: bool,
}

impl MetadataSelection {
    /// Returns copies of `results` with unselected metadata cleared
    pub fn apply(&self, results: &[ScanResult]) -> Vec<ScanResult> {
        results
            .iter()
            .map(|result| {
                let instances = result
                    .instances()
                    .iter()
                    .map(|instance| self.project(instance))
                    .collect();
                ScanResult::new(result.query().clone(), instances)
            })
            .collect()
    }

    fn project(&self, instance: &PackageInstance) -> PackageInstance {
        let source = &instance.metadata;
        let mut metadata = InstanceMetadata::default();

        if self.registry {
            metadata.resolved = source.resolved.clone();
            metadata.integrity = source.integrity.clone();
            metadata.license = source.license.clone();
        }
        if self.dependencies {
            metadata.dependencies = source.dependencies.clone();
            metadata.peer_dependencies = source.peer_dependencies.clone();
        }
        if self.technical {
            metadata.engines = source.engines.clone();
            metadata.bin = source.bin.clone();
            metadata.scripts = source.scripts.clone();
        }

        instance.clone().with_metadata(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lockfile_scan::domain::PackageQuery;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn full_result() -> ScanResult {
        let metadata = InstanceMetadata {
            resolved: Some("https://registry.npmjs.org/chalk/-/chalk-5.3.0.tgz".to_string()),
            integrity: Some("sha512-xyz".to_string()),
            license: Some(json!("MIT")),
            dependencies: BTreeMap::from([("ansi-styles".to_string(), "^6.0.0".to_string())]),
            peer_dependencies: BTreeMap::new(),
            engines: Some(json!({ "node": ">=12" })),
            bin: None,
            scripts: BTreeMap::from([("postinstall".to_string(), "node setup.js".to_string())]),
        };
        ScanResult::new(
            PackageQuery::new("chalk", "5.3.0"),
            vec![PackageInstance::install("5.3.0", "node_modules/chalk", false).with_metadata(metadata)],
        )
    }

    #[test]
    fn test_default_selection_strips_all_metadata() {
        let projected = MetadataSelection::default().apply(&[full_result()]);
        assert_eq!(projected[0].instances()[0].metadata, InstanceMetadata::default());
    }

    #[test]
    fn test_registry_group() {
        let selection = MetadataSelection {
            registry: true,
            ..MetadataSelection::default()
        };
        let projected = selection.apply(&[full_result()]);
        let metadata = &projected[0].instances()[0].metadata;

        assert_eq!(metadata.integrity.as_deref(), Some("sha512-xyz"));
        assert_eq!(metadata.license, Some(json!("MIT")));
        assert!(metadata.dependencies.is_empty());
        assert!(metadata.engines.is_none());
    }

    #[test]
    fn test_dependencies_and_technical_groups() {
        let selection = MetadataSelection {
            registry: false,
            dependencies: true,
            technical: true,
        };
        let projected = selection.apply(&[full_result()]);
        let metadata = &projected[0].instances()[0].metadata;

        assert_eq!(metadata.dependencies["ansi-styles"], "^6.0.0");
        assert_eq!(metadata.scripts["postinstall"], "node setup.js");
        assert!(metadata.engines.is_some());
        assert!(metadata.resolved.is_none());
    }

    #[test]
    fn test_projection_keeps_counts_and_leaves_input_intact() {
        let original = full_result();
        let projected = MetadataSelection::default().apply(std::slice::from_ref(&original));

        assert_eq!(projected[0].total_instance_count(), original.total_instance_count());
        assert!(projected[0].was_found());
        assert!(original.instances()[0].metadata.integrity.is_some());
    }
}
