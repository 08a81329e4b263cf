use crate::lockfile_scan::domain::scan_result::REFERENCE_KIND_DEPENDENCIES;
use crate::lockfile_scan::domain::{
    FlatPackageEntry, InstanceMetadata, LegacyDependencyNode, LockfileDocument, PackageInstance,
};
use crate::lockfile_scan::services::NameMatcher;
use std::collections::BTreeMap;

const NODE_MODULES: &str = "node_modules";

/// InstanceFinder - walks a lockfile and collects every occurrence of a package
///
/// lockfileVersion 2+ is scanned twice over the flat `packages` map: once for
/// installed entries (exact version match) and once for declared dependency
/// ranges (the range must contain the queried version as a substring).
/// lockfileVersion 1 is a recursive descent over the nested tree.
#[derive(Debug, Clone, Copy)]
pub struct InstanceFinder {
    include_references: bool,
}

impl Default for InstanceFinder {
    fn default() -> Self {
        Self {
            include_references: true,
        }
    }
}

impl InstanceFinder {
    pub fn new(include_references: bool) -> Self {
        Self { include_references }
    }

    /// Finds all instances of `query_name` in `document`.
    /// An empty `version_spec` accepts any version.
    pub fn find_instances(
        &self,
        document: &LockfileDocument,
        query_name: &str,
        version_spec: &str,
    ) -> Vec<PackageInstance> {
        if !document.uses_flat_packages() {
            let mut instances = Vec::new();
            collect_legacy(
                &document.legacy_dependencies,
                query_name,
                version_spec,
                "",
                &mut instances,
            );
            return instances;
        }

        let mut instances = find_installs(&document.flat_packages, query_name, version_spec);
        if self.include_references {
            instances.extend(find_references(
                &document.flat_packages,
                query_name,
                version_spec,
            ));
        }
        instances
    }
}

/// Convenience wrapper using the default finder (references included)
pub fn find_instances(
    document: &LockfileDocument,
    query_name: &str,
    version_spec: &str,
) -> Vec<PackageInstance> {
    InstanceFinder::default().find_instances(document, query_name, version_spec)
}

fn find_installs(
    packages: &BTreeMap<String, FlatPackageEntry>,
    query_name: &str,
    version_spec: &str,
) -> Vec<PackageInstance> {
    packages
        .iter()
        .filter(|(path, entry)| {
            terminal_package_name(path).is_some_and(|name| NameMatcher::matches(&name, query_name))
                && (version_spec.is_empty() || entry.version == version_spec)
        })
        .map(|(path, entry)| {
            PackageInstance::install(entry.version.clone(), path.clone(), entry.is_dev)
                .with_metadata(flat_metadata(entry))
        })
        .collect()
}

fn find_references(
    packages: &BTreeMap<String, FlatPackageEntry>,
    query_name: &str,
    version_spec: &str,
) -> Vec<PackageInstance> {
    let mut instances = Vec::new();
    for (path, entry) in packages {
        for (dependency_name, version_range) in &entry.dependencies {
            if NameMatcher::matches(dependency_name, query_name)
                && (version_spec.is_empty() || version_range.contains(version_spec))
            {
                instances.push(PackageInstance::reference(
                    version_range.clone(),
                    path,
                    dependency_name,
                    REFERENCE_KIND_DEPENDENCIES,
                    entry.is_dev,
                ));
            }
        }
    }
    instances
}

/// A match does not prune its subtree: nested copies are reported too.
fn collect_legacy(
    dependencies: &BTreeMap<String, LegacyDependencyNode>,
    query_name: &str,
    version_spec: &str,
    base_path: &str,
    instances: &mut Vec<PackageInstance>,
) {
    for (name, node) in dependencies {
        let current_path = if base_path.is_empty() {
            format!("{}/{}", NODE_MODULES, name)
        } else {
            format!("{}/{}/{}", base_path, NODE_MODULES, name)
        };

        if NameMatcher::matches(name, query_name)
            && (version_spec.is_empty() || node.version == version_spec)
        {
            let metadata = InstanceMetadata {
                resolved: node.resolved_url.clone(),
                integrity: node.integrity_hash.clone(),
                ..InstanceMetadata::default()
            };
            instances.push(
                PackageInstance::install(node.version.clone(), current_path.clone(), node.is_dev)
                    .with_metadata(metadata),
            );
        }

        collect_legacy(
            &node.nested_dependencies,
            query_name,
            version_spec,
            &current_path,
            instances,
        );
    }
}

fn flat_metadata(entry: &FlatPackageEntry) -> InstanceMetadata {
    InstanceMetadata {
        resolved: entry.resolved_url.clone(),
        integrity: entry.integrity_hash.clone(),
        license: entry.license.clone(),
        dependencies: entry.dependencies.clone(),
        peer_dependencies: entry.peer_dependencies.clone(),
        engines: entry.engines.clone(),
        bin: entry.bin.clone(),
        scripts: entry.scripts.clone(),
    }
}

/// Extracts the package installed at `path`, i.e. the name following the last
/// `node_modules` segment (`@scope/name` spans two segments).
///
/// Returns `None` for paths without an installed package, such as the root
/// entry `""` or workspace folders.
pub fn terminal_package_name(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').collect();
    let boundary = segments[..segments.len().saturating_sub(1)]
        .iter()
        .rposition(|segment| *segment == NODE_MODULES)?;

    let first = segments[boundary + 1];
    match segments.get(boundary + 2) {
        Some(second) if first.starts_with('@') => Some(format!("{}/{}", first, second)),
        _ => Some(first.to_string()),
    }
}
