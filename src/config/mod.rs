// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request loading for manifest-rs.
//!
//! A request describes one manifest: package settings, dependency and
//! feature records, and where to find customizations.
//!
//! # Source Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. manifest.toml (cwd, optional)
//! 3. --input FILE (repeatable)
//! 4. MANIFEST_* env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MANIFEST_SETTINGS__VERSION=2.0.0   → settings.version = "2.0.0"
//! MANIFEST_OUTPUT__HEADER=Generated  → output.header = "Generated"
//! ```
//!
//! # Example
//!
//! ```toml
//! [settings]
//! name = "weather"
//! version = "0.1.0"
//! license = "Apache-2.0"
//!
//! [[dependencies]]
//! name = "serde"
//! version = "1.0"
//! features = ["derive"]
//!
//! [[features]]
//! name = "rt-tokio"
//! enables = ["tokio/rt"]
//! default = true
//! ```

pub mod customizations;
pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ManifestResult, Result};
use crate::manifest::{Dependency, Feature, ManifestTable, Settings, merge};

use customizations::load_customizations;
use loader::RequestLoader;
use types::{DependencyConfig, FeatureConfig, OutputConfig, SettingsConfig};

/// Complete manifest request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Request {
    /// Package settings.
    pub settings: SettingsConfig,
    /// Dependency records, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyConfig>,
    /// Feature records, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureConfig>,
    /// Output options.
    pub output: OutputConfig,
}

/// Typed inputs of the manifest pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInputs {
    pub settings: Settings,
    pub dependencies: Vec<Dependency>,
    pub features: Vec<Feature>,
}

impl Request {
    /// Create a new request loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use manifest_rs::config::Request;
    ///
    /// let request = Request::builder()
    ///     .add_toml_file("codegen/manifest.toml")
    ///     .add_toml_file_optional("manifest.local.toml")
    ///     .with_env_prefix("MANIFEST")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> RequestLoader {
        RequestLoader::new()
    }

    /// Load a request from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Request` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load a request from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Request` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Convert the records into typed pipeline inputs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ManifestError::Construction`] for the first
    /// invalid record.
    pub fn to_inputs(&self) -> ManifestResult<RequestInputs> {
        let settings = self.settings.to_settings()?;
        let dependencies = self
            .dependencies
            .iter()
            .enumerate()
            .map(|(index, record)| record.to_dependency(index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let features = self
            .features
            .iter()
            .enumerate()
            .map(|(index, record)| record.to_feature(index))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(RequestInputs {
            settings,
            dependencies,
            features,
        })
    }

    /// Load `[output] customizations` followed by `extra`, merged in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ManifestError::Config`] if any file cannot be
    /// loaded.
    pub fn load_customizations<P: AsRef<Path>>(
        &self,
        extra: &[P],
    ) -> ManifestResult<ManifestTable> {
        let layers = self
            .output
            .customizations
            .iter()
            .map(PathBuf::as_path)
            .chain(extra.iter().map(|path| path.as_ref()))
            .map(load_customizations)
            .collect::<ManifestResult<Vec<_>>>()?;
        Ok(merge::merge_layers(&ManifestTable::new(), &layers))
    }
}
