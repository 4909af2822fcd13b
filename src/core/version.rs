//! arduino-cli version handling
//!
//! Parses the `version` response into a semver version and checks it
//! against constraints, so callers can refuse tool builds they do not
//! support.

use semver::{Version, VersionReq};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CliError;

/// Version report of the bound arduino-cli executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    /// Application name, normally `arduino-cli`
    pub application: String,
    /// Parsed version
    pub version: Version,
    /// Git commit the tool was built from
    pub commit: Option<String>,
    /// Release status, e.g. `alpha`
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawVersion {
    #[serde(default)]
    application: String,
    version_string: String,
    commit: Option<String>,
    status: Option<String>,
}

impl ToolVersion {
    /// Interpret the JSON body printed by `arduino-cli version --format json`
    pub fn from_json(value: &Value) -> Result<Self, CliError> {
        let raw = RawVersion::deserialize(value).map_err(|e| CliError::Version {
            version: value.to_string(),
            error: e.to_string(),
        })?;

        let trimmed = raw.version_string.trim_start_matches('v');
        let version = Version::parse(trimmed).map_err(|e| CliError::Version {
            version: raw.version_string.clone(),
            error: e.to_string(),
        })?;

        Ok(Self {
            application: raw.application,
            version,
            commit: raw.commit.filter(|c| !c.is_empty()),
            status: raw.status.filter(|s| !s.is_empty()),
        })
    }

    /// Whether this version satisfies a semver constraint such as `>=0.35`
    pub fn satisfies(&self, constraint: &str) -> Result<bool, CliError> {
        let req = VersionReq::parse(constraint).map_err(|e| CliError::Version {
            version: constraint.to_string(),
            error: e.to_string(),
        })?;
        Ok(req.matches(&self.version))
    }
}
