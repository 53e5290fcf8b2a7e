// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered request loading.
//!
//! ```text
//! RequestLoader::new()
//!   .add_toml_file_optional("manifest.toml")   lowest
//!   .add_toml_file(--input)...
//!   .add_toml_str(..)
//!   .with_env_prefix("MANIFEST")               MANIFEST_SETTINGS__VERSION=2.0.0
//!   .set("settings.version", "2.0.0")          highest
//!        |
//!        v
//!    build() --> Request
//! ```
//!
//! Sources added later override earlier ones key by key. Environment
//! variables are applied after every file, and `set` overrides win over all.
//! Only `<PREFIX>_SETTINGS__*` and `<PREFIX>_OUTPUT__*` variables are read.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use tracing::debug;

use super::Request;
use crate::error::Result;

/// How a request source was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Must exist at `build()` time.
    Required,
    /// Skipped when absent; only recorded when present.
    Optional,
    /// In-memory TOML text.
    Inline,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        })
    }
}

/// A recorded request source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
    pub kind: InputKind,
    pub path: PathBuf,
}

/// Sections that can be set from the environment. `dependencies` and
/// `features` are arrays of tables and are not addressable per key.
const ENV_SECTIONS: [&str; 2] = ["SETTINGS", "OUTPUT"];

/// Environment variables captured by [`RequestLoader::with_env_vars`].
struct EnvOverrides {
    prefix: String,
    vars: config::Map<String, String>,
}

/// Collects request sources and builds a [`Request`] from them.
pub struct RequestLoader {
    sources: ConfigBuilder<DefaultState>,
    env: Option<EnvOverrides>,
    inputs: Vec<LoadedInput>,
}

impl RequestLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: config::Config::builder(),
            env: None,
            inputs: Vec::new(),
        }
    }

    /// Adds a TOML request file; `build()` fails if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), InputKind::Required)
    }

    /// Adds a TOML request file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), InputKind::Optional)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.sources = self
            .sources
            .add_source(File::from_str(content, FileFormat::Toml));
        self.inputs.push(LoadedInput {
            kind: InputKind::Inline,
            path: PathBuf::from("<string>"),
        });
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables from the process
    /// environment.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_vars(prefix, std::env::vars())
    }

    /// Like [`Self::with_env_prefix`], over an explicit variable set.
    ///
    /// Only `<PREFIX>_SETTINGS__*` and `<PREFIX>_OUTPUT__*` are kept, so
    /// unrelated variables sharing the prefix (e.g. `MANIFEST_DIR`) are
    /// ignored.
    #[must_use]
    pub fn with_env_vars<I>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let section_prefixes: Vec<String> = ENV_SECTIONS
            .iter()
            .map(|section| format!("{prefix}_{section}__").to_ascii_uppercase())
            .collect();
        let env_prefix = format!("{prefix}_").to_ascii_uppercase();
        let mut ignored = 0_usize;
        let vars = vars
            .into_iter()
            .filter(|(name, _)| {
                let upper = name.to_ascii_uppercase();
                let keep = section_prefixes.iter().any(|p| upper.starts_with(p.as_str()));
                if !keep && upper.starts_with(&env_prefix) {
                    ignored += 1;
                }
                keep
            })
            .collect();
        if ignored > 0 {
            debug!(prefix, ignored, "ignored environment variables outside request sections");
        }
        self.env = Some(EnvOverrides {
            prefix: prefix.to_string(),
            vars,
        });
        self
    }

    /// Sets a request override, e.g. `settings.version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid path expression.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.sources = self
            .sources
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Builds the request from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required request file is missing.
    /// - A request file has invalid TOML syntax.
    /// - The layered sources do not deserialize into a `Request`.
    pub fn build(self) -> Result<Request> {
        let sources = match self.env {
            Some(env) => self.sources.add_source(
                Environment::with_prefix(&env.prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env.vars)),
            ),
            None => self.sources,
        };
        let request: Request = sources.build()?.try_deserialize()?;
        debug!(
            sources = self.inputs.len(),
            dependencies = request.dependencies.len(),
            features = request.features.len(),
            "loaded request"
        );
        Ok(request)
    }

    #[must_use]
    pub fn loaded_inputs(&self) -> &[LoadedInput] {
        &self.inputs
    }

    /// One numbered line per recorded source, in precedence order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(i, input)| format!("{}. [{}] {}", i + 1, input.kind, input.path.display()))
            .collect()
    }

    fn add_file(mut self, path: &Path, kind: InputKind) -> Self {
        let required = kind == InputKind::Required;
        self.sources = self
            .sources
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.inputs.push(LoadedInput {
                kind,
                path: path.to_path_buf(),
            });
        }
        self
    }
}

impl Default for RequestLoader {
    fn default() -> Self {
        Self::new()
    }
}
