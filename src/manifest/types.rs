// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package settings and feature descriptors.
//!
//! ```text
//! Settings: name, version, authors, description?, license,
//!           repository?, rust_version?
//! Feature:  name, enables[], default
//! ```

use bon::Builder;

/// Package metadata rendered into the `[package]` section.
///
/// Supplied fully formed by the caller; the edition is not part of the
/// settings because it is always [`super::EDITION`].
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Settings {
    #[builder(into)]
    name: String,
    #[builder(into)]
    version: String,
    #[builder(default)]
    authors: Vec<String>,
    #[builder(into)]
    description: Option<String>,
    #[builder(into)]
    license: String,
    #[builder(into)]
    repository: Option<String>,
    #[builder(into)]
    rust_version: Option<String>,
}

impl Settings {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    #[must_use]
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    /// Minimum supported Rust version, rendered as `rust-version`.
    #[must_use]
    pub fn rust_version(&self) -> Option<&str> {
        self.rust_version.as_deref()
    }
}

/// A cargo feature and the features/dependencies it enables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    enables: Vec<String>,
    default: bool,
}

impl Feature {
    pub fn new<I, S>(name: impl Into<String>, enables: I, default: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            enables: enables.into_iter().map(Into::into).collect(),
            default,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn enables(&self) -> &[String] {
        &self.enables
    }

    /// Whether this feature belongs to the synthesized `default` set.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.default
    }
}
