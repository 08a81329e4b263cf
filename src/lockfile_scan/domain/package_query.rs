use crate::shared::error::ScanError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A flagged package to look for: `name@version`
///
/// An empty `version_spec` matches every version of the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageQuery {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Version")]
    version_spec: String,
}

impl PackageQuery {
    pub fn new(name: impl Into<String>, version_spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_spec: version_spec.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version_spec(&self) -> &str {
        &self.version_spec
    }
}

impl FromStr for PackageQuery {
    type Err = ScanError;

    /// Splits on the first `@` after an optional leading scope marker.
    /// Everything after that `@` is kept verbatim as the version spec, so
    /// `pkg@1.0.0@beta` yields `1.0.0@beta`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ScanError::InvalidQuery {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let scope_offset = usize::from(input.starts_with('@'));
        let separator = input[scope_offset..]
            .find('@')
            .map(|pos| pos + scope_offset)
            .ok_or_else(|| invalid("invalid format, expected package@version"))?;

        let name = &input[..separator];
        if name.len() == scope_offset {
            return Err(invalid("package name is empty"));
        }

        Ok(Self::new(name, &input[separator + 1..]))
    }
}

impl fmt::Display for PackageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version_spec)
    }
}
