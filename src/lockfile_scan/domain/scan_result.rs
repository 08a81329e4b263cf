use super::PackageQuery;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Path segment that separates one install level from the next
pub const NESTING_BOUNDARY: &str = "/node_modules/";

/// Separator between an owning package path and a declared dependency name
pub const REFERENCE_ARROW: &str = " -> ";

/// Reference kind emitted for entries found in a package's `dependencies`
pub const REFERENCE_KIND_DEPENDENCIES: &str = "dependencies";

/// Passthrough metadata copied from the lockfile entry of an install instance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
}

/// One concrete occurrence of a queried package in the lockfile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInstance {
    /// Installed version, or the declared range for a reference
    pub version: String,
    #[serde(rename = "path")]
    pub location_path: String,
    pub is_dev: bool,
    pub is_nested: bool,
    #[serde(rename = "depth")]
    pub depth_level: usize,
    #[serde(flatten)]
    pub metadata: InstanceMetadata,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_reference: bool,
    #[serde(rename = "referenceType", skip_serializing_if = "String::is_empty")]
    pub reference_kind: String,
}

impl PackageInstance {
    /// An installed package at `install_path`
    pub fn install(version: impl Into<String>, install_path: impl Into<String>, is_dev: bool) -> Self {
        let location_path = install_path.into();
        let depth_level = nesting_depth(&location_path);
        Self {
            version: version.into(),
            is_nested: is_nested_path(&location_path),
            depth_level,
            location_path,
            is_dev,
            metadata: InstanceMetadata::default(),
            is_reference: false,
            reference_kind: String::new(),
        }
    }

    /// A dependency declaration `dependency_name: version_range` inside the
    /// entry at `owner_path`. Sits one level below its owner.
    pub fn reference(
        version_range: impl Into<String>,
        owner_path: &str,
        dependency_name: &str,
        reference_kind: &str,
        is_dev: bool,
    ) -> Self {
        Self {
            version: version_range.into(),
            location_path: format!("{}{}{}", owner_path, REFERENCE_ARROW, dependency_name),
            is_dev,
            is_nested: is_nested_path(owner_path),
            depth_level: nesting_depth(owner_path) + 1,
            metadata: InstanceMetadata::default(),
            is_reference: true,
            reference_kind: reference_kind.to_string(),
        }
    }

    pub fn with_metadata(mut self, metadata: InstanceMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Number of nesting boundaries crossed to reach `path`
///
/// `node_modules/a` is depth 0, `node_modules/a/node_modules/b` is depth 1.
pub fn nesting_depth(path: &str) -> usize {
    path.matches(NESTING_BOUNDARY).count()
}

pub fn is_nested_path(path: &str) -> bool {
    path.contains(NESTING_BOUNDARY)
}

/// Outcome of scanning for one query, after filtering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    #[serde(rename = "Package")]
    query: PackageQuery,
    #[serde(rename = "Found")]
    was_found: bool,
    #[serde(rename = "Instances")]
    instances: Vec<PackageInstance>,
    #[serde(rename = "TotalInstances")]
    total_instance_count: usize,
}

impl ScanResult {
    /// Builds a result from already-filtered instances; the count and the
    /// found flag are derived so they can never disagree with the list.
    pub fn new(query: PackageQuery, instances: Vec<PackageInstance>) -> Self {
        let total_instance_count = instances.len();
        Self {
            query,
            was_found: total_instance_count > 0,
            instances,
            total_instance_count,
        }
    }

    pub fn query(&self) -> &PackageQuery {
        &self.query
    }

    pub fn was_found(&self) -> bool {
        self.was_found
    }

    pub fn instances(&self) -> &[PackageInstance] {
        &self.instances
    }

    pub fn total_instance_count(&self) -> usize {
        self.total_instance_count
    }
}
