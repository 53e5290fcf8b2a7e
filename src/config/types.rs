// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request record types and their conversion into descriptors.
//!
//! # Request Structure
//!
//! ```text
//! [settings]        SettingsConfig   --> Settings
//! [[dependencies]]  DependencyConfig --> Dependency
//! [[features]]      FeatureConfig    --> Feature
//! [output]          OutputConfig       (customization files, header)
//! ```
//!
//! # Dependency Location
//!
//! ```text
//! git  (+ branch | tag | rev)   --> Git
//! path (+ version)              --> Local
//! version                       --> CratesIo
//! path + git, version + git     --> ConflictingLocation
//! none                          --> MissingLocation
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::error::ConstructionError;
use crate::manifest::{
    Dependency, DependencyLocation, DependencyScope, Feature, GitReference, Settings,
};

/// `[settings]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsConfig {
    /// Crate name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Crate authors (omitted from the manifest when empty).
    pub authors: Vec<String>,
    /// One-line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// SPDX license expression.
    pub license: String,
    /// Source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Minimum supported Rust version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rust_version: Option<String>,
}

impl SettingsConfig {
    /// Convert into package settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingField`] if `name`, `version` or
    /// `license` is empty.
    pub fn to_settings(&self) -> Result<Settings, ConstructionError> {
        for (field, value) in [
            ("name", &self.name),
            ("version", &self.version),
            ("license", &self.license),
        ] {
            if value.trim().is_empty() {
                return Err(ConstructionError::MissingField { field });
            }
        }

        Ok(Settings::builder()
            .name(self.name.clone())
            .version(self.version.clone())
            .authors(self.authors.clone())
            .maybe_description(self.description.clone())
            .license(self.license.clone())
            .maybe_repository(self.repository.clone())
            .maybe_rust_version(self.rust_version.clone())
            .build())
    }
}

/// One `[[dependencies]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyConfig {
    /// Crate name as it appears in the manifest.
    pub name: String,
    /// `compile` (default) or `dev`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    pub features: Vec<String>,
    pub optional: bool,
    pub default_features: bool,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            scope: None,
            version: None,
            path: None,
            git: None,
            branch: None,
            tag: None,
            rev: None,
            features: Vec::new(),
            optional: false,
            default_features: true,
        }
    }
}

impl DependencyConfig {
    /// Convert into a dependency descriptor. `index` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstructionError`] for an empty name, an unknown scope
    /// tag, or a missing/conflicting location.
    pub fn to_dependency(&self, index: usize) -> Result<Dependency, ConstructionError> {
        if self.name.trim().is_empty() {
            return Err(ConstructionError::EmptyName {
                kind: "dependency",
                index,
            });
        }

        let scope = match &self.scope {
            Some(tag) => DependencyScope::parse_for(&self.name, tag)?,
            None => DependencyScope::default(),
        };

        Ok(Dependency::builder()
            .name(self.name.clone())
            .scope(scope)
            .location(self.location()?)
            .features(self.features.clone())
            .optional(self.optional)
            .default_features(self.default_features)
            .build())
    }

    fn location(&self) -> Result<DependencyLocation, ConstructionError> {
        let conflict = |first: &'static str, second: &'static str| {
            ConstructionError::ConflictingLocation {
                dependency: self.name.clone(),
                first,
                second,
            }
        };

        match (&self.git, &self.path, &self.version) {
            (Some(_), Some(_), _) => Err(conflict("path", "git")),
            (Some(_), None, Some(_)) => Err(conflict("version", "git")),
            (Some(url), None, None) => Ok(DependencyLocation::Git {
                url: url.clone(),
                reference: self.git_reference()?,
            }),
            (None, path, version) => {
                if self.branch.is_some() || self.tag.is_some() || self.rev.is_some() {
                    warn!(
                        dependency = %self.name,
                        "branch/tag/rev ignored for non-git dependency"
                    );
                }
                match (path, version) {
                    (Some(path), version) => Ok(DependencyLocation::Local {
                        path: path.clone(),
                        version: version.clone(),
                    }),
                    (None, Some(version)) => Ok(DependencyLocation::crates_io(version.clone())),
                    (None, None) => Err(ConstructionError::MissingLocation {
                        dependency: self.name.clone(),
                    }),
                }
            }
        }
    }

    fn git_reference(&self) -> Result<Option<GitReference>, ConstructionError> {
        match (&self.branch, &self.tag, &self.rev) {
            (None, None, None) => Ok(None),
            (Some(branch), None, None) => Ok(Some(GitReference::Branch(branch.clone()))),
            (None, Some(tag), None) => Ok(Some(GitReference::Tag(tag.clone()))),
            (None, None, Some(rev)) => Ok(Some(GitReference::Rev(rev.clone()))),
            _ => Err(ConstructionError::ConflictingGitReference {
                dependency: self.name.clone(),
            }),
        }
    }
}

/// One `[[features]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    pub name: String,
    /// Features or `dep/feature` entries this feature turns on.
    pub enables: Vec<String>,
    /// Part of the synthesized `default` feature.
    pub default: bool,
}

impl FeatureConfig {
    /// Convert into a feature descriptor. `index` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyName`] if the name is empty.
    pub fn to_feature(&self, index: usize) -> Result<Feature, ConstructionError> {
        if self.name.trim().is_empty() {
            return Err(ConstructionError::EmptyName {
                kind: "feature",
                index,
            });
        }
        Ok(Feature::new(
            self.name.clone(),
            self.enables.iter().cloned(),
            self.default,
        ))
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Customization files merged in order (JSON or TOML by extension).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customizations: Vec<PathBuf>,
    /// Comment banner written above the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}
