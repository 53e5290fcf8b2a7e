// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest synthesis pipeline.
//!
//! ```text
//! Settings + Dependency[] + Feature[]
//!        |
//!        v
//!   builder::build_manifest()  --> ManifestTable
//!        |
//!        v
//!   merge::deep_merge(customizations)
//!        |
//!        v
//!   render::write_manifest(writer)  --> Cargo.toml text
//! ```
//!
//! The tree is a `serde_json::Map` with insertion order preserved, so built
//! sections and arbitrary customizations (including nulls) share one value
//! type.

pub mod builder;
pub mod dependency;
pub mod merge;
pub mod render;
pub mod types;

#[cfg(test)]
mod tests;

use std::io::Write;

use bon::Builder;

use crate::error::ManifestResult;

pub use dependency::{Dependency, DependencyLocation, DependencyScope, GitReference};
pub use types::{Feature, Settings};

/// Ordered key/value tree of a manifest document.
pub type ManifestTable = serde_json::Map<String, serde_json::Value>;

/// Key of the single-entry table that stands for a TOML datetime in the tree.
///
/// `{"$__toml_private_datetime": "2024-01-01"}` renders as `2024-01-01`.
pub const DATETIME_KEY: &str = "$__toml_private_datetime";

/// Rust edition written to every generated manifest.
pub const EDITION: &str = "2024";

/// One build, merge and render run over borrowed inputs.
///
/// # Example
///
/// ```
/// use manifest_rs::manifest::{ManifestGenerator, Settings};
///
/// let settings = Settings::builder()
///     .name("weather")
///     .version("0.1.0")
///     .license("Apache-2.0")
///     .build();
///
/// let mut out = Vec::new();
/// ManifestGenerator::builder()
///     .settings(&settings)
///     .build()
///     .render(&mut out)?;
///
/// assert!(String::from_utf8(out)?.contains("name = \"weather\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ManifestGenerator<'a> {
    settings: &'a Settings,
    #[builder(default)]
    dependencies: &'a [Dependency],
    #[builder(default)]
    features: &'a [Feature],
    customizations: Option<&'a ManifestTable>,
    header: Option<&'a str>,
}

impl ManifestGenerator<'_> {
    /// Built tree with customizations merged in.
    #[must_use]
    pub fn tree(&self) -> ManifestTable {
        let built = builder::build_manifest(self.settings, self.dependencies, self.features);
        match self.customizations {
            Some(customizations) => merge::deep_merge(&built, customizations),
            None => built,
        }
    }

    /// Build, merge and write the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged tree cannot be rendered as TOML or the
    /// writer fails.
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W) -> ManifestResult<()> {
        render::write_manifest(&self.tree(), self.header, writer)
    }
}
