// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency descriptors.
//!
//! ```text
//! Dependency { name, scope, location, features, optional, default_features }
//!
//! scope     Compile --> [dependencies]
//!           Dev     --> [dev-dependencies]
//!
//! location  CratesIo { version }          version = ".."
//!           Local    { path, version? }   path = "..", version = ".."
//!           Git      { url, reference? }  git = "..", branch|tag|rev = ".."
//!
//! to_table(): location keys, default-features, features, optional
//! ```

use bon::Builder;
use serde_json::Value;

use super::ManifestTable;
use crate::error::ConstructionError;

/// Section a dependency is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyScope {
    #[default]
    Compile,
    Dev,
}

impl DependencyScope {
    /// Parse a scope tag for the named dependency.
    ///
    /// Tags are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnknownScope`] for anything other than
    /// `compile` or `dev`.
    pub fn parse_for(dependency: &str, tag: &str) -> Result<Self, ConstructionError> {
        match tag.to_lowercase().as_str() {
            "compile" => Ok(Self::Compile),
            "dev" => Ok(Self::Dev),
            _ => Err(ConstructionError::UnknownScope {
                dependency: dependency.to_string(),
                scope: tag.to_string(),
            }),
        }
    }

    /// Top-level manifest key for this scope.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Compile => "dependencies",
            Self::Dev => "dev-dependencies",
        }
    }
}

impl std::fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile => write!(f, "compile"),
            Self::Dev => write!(f, "dev"),
        }
    }
}

/// Git revision selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitReference {
    Branch(String),
    Tag(String),
    Rev(String),
}

/// Where a dependency is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyLocation {
    /// Published on crates.io.
    CratesIo { version: String },
    /// Path dependency, optionally with a version for publishing.
    Local {
        path: String,
        version: Option<String>,
    },
    /// Git dependency.
    Git {
        url: String,
        reference: Option<GitReference>,
    },
}

impl DependencyLocation {
    pub fn crates_io(version: impl Into<String>) -> Self {
        Self::CratesIo {
            version: version.into(),
        }
    }

    pub fn local(path: impl Into<String>) -> Self {
        Self::Local {
            path: path.into(),
            version: None,
        }
    }

    pub fn git(url: impl Into<String>) -> Self {
        Self::Git {
            url: url.into(),
            reference: None,
        }
    }

    fn write_to(&self, attributes: &mut ManifestTable) {
        match self {
            Self::CratesIo { version } => {
                attributes.insert("version".into(), Value::from(version.as_str()));
            }
            Self::Local { path, version } => {
                attributes.insert("path".into(), Value::from(path.as_str()));
                if let Some(version) = version {
                    attributes.insert("version".into(), Value::from(version.as_str()));
                }
            }
            Self::Git { url, reference } => {
                attributes.insert("git".into(), Value::from(url.as_str()));
                let (key, value) = match reference {
                    Some(GitReference::Branch(branch)) => ("branch", branch),
                    Some(GitReference::Tag(tag)) => ("tag", tag),
                    Some(GitReference::Rev(rev)) => ("rev", rev),
                    None => return,
                };
                attributes.insert(key.into(), Value::from(value.as_str()));
            }
        }
    }
}

/// A resolved dependency ready to be placed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Dependency {
    #[builder(into)]
    pub name: String,
    #[builder(default)]
    pub scope: DependencyScope,
    pub location: DependencyLocation,
    #[builder(default)]
    pub features: Vec<String>,
    #[builder(default)]
    pub optional: bool,
    #[builder(default = true)]
    pub default_features: bool,
}

impl Dependency {
    /// Attribute sub-tree for this dependency.
    ///
    /// Only non-default attributes are emitted: `default-features` when
    /// disabled, `features` when non-empty, `optional` when set.
    #[must_use]
    pub fn to_table(&self) -> ManifestTable {
        let mut attributes = ManifestTable::new();
        self.location.write_to(&mut attributes);
        if !self.default_features {
            attributes.insert("default-features".into(), Value::Bool(false));
        }
        if !self.features.is_empty() {
            attributes.insert("features".into(), Value::from(self.features.clone()));
        }
        if self.optional {
            attributes.insert("optional".into(), Value::Bool(true));
        }
        attributes
    }
}
