use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// First lockfileVersion that uses the flat, path-keyed `packages` map
pub const FLAT_SCHEMA_VERSION: u32 = 2;

/// Root of a parsed npm `package-lock.json`
///
/// Both maps may be present (lockfileVersion 2 carries the legacy tree for
/// backwards compatibility), but only the one selected by `schema_version`
/// is ever consulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockfileDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "lockfileVersion")]
    pub schema_version: u32,
    #[serde(default, rename = "dependencies")]
    pub legacy_dependencies: BTreeMap<String, LegacyDependencyNode>,
    #[serde(default, rename = "packages")]
    pub flat_packages: BTreeMap<String, FlatPackageEntry>,
}

impl LockfileDocument {
    /// Whether the flat `packages` map is authoritative for this document
    pub fn uses_flat_packages(&self) -> bool {
        self.schema_version >= FLAT_SCHEMA_VERSION
    }

    /// Number of entries in whichever map the schema version selects.
    /// Legacy trees are counted recursively.
    pub fn entry_count(&self) -> usize {
        if self.uses_flat_packages() {
            self.flat_packages.len()
        } else {
            self.legacy_dependencies
                .values()
                .map(LegacyDependencyNode::subtree_size)
                .sum()
        }
    }
}

/// One node of the lockfileVersion 1 nested dependency tree
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyDependencyNode {
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "resolved")]
    pub resolved_url: Option<String>,
    #[serde(default, rename = "integrity")]
    pub integrity_hash: Option<String>,
    #[serde(default, rename = "dev")]
    pub is_dev: bool,
    #[serde(default, rename = "dependencies")]
    pub nested_dependencies: BTreeMap<String, LegacyDependencyNode>,
}

impl LegacyDependencyNode {
    fn subtree_size(&self) -> usize {
        1 + self
            .nested_dependencies
            .values()
            .map(Self::subtree_size)
            .sum::<usize>()
    }
}

/// One entry of the lockfileVersion 2+ `packages` map, keyed by its
/// install path (e.g. `node_modules/express/node_modules/debug`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPackageEntry {
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "resolved")]
    pub resolved_url: Option<String>,
    #[serde(default, rename = "integrity")]
    pub integrity_hash: Option<String>,
    #[serde(default, rename = "dev")]
    pub is_dev: bool,
    #[serde(default, rename = "devOptional")]
    pub is_dev_optional: bool,
    /// Declared requirements (name -> version range), not resolved nodes
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub engines: Option<Value>,
    #[serde(default)]
    pub bin: Option<Value>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub license: Option<Value>,
}
