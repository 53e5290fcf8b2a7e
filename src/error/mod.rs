// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ManifestError (~16 bytes)
//!                     |
//!      +--------------+--------+-------+
//!      |              |        |       |
//!      v              v        v       v
//! Construction  Serialization  Config  Io
//!     Box           Box         Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Construction  UnknownScope, MissingField, EmptyName, MissingLocation, ...
//!   Serialization NullInArray, IntegerOutOfRange, InvalidDatetime, Toml
//!   Config        ReadError, ParseError, InvalidValue, NotFound
//!
//! All variants boxed => ManifestError fits in 16 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ManifestError`].
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Top-level error type for the manifest pipeline.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// An input record could not be turned into a descriptor.
    #[error("construction error: {0}")]
    Construction(#[from] Box<ConstructionError>),

    /// The merged tree cannot be rendered as TOML.
    #[error("serialization error: {0}")]
    Serialization(#[from] Box<SerializationError>),

    /// Request or customization loading error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error from the output sink.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ManifestError {
                fn from(err: $error) -> Self {
                    ManifestError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConstructionError => Construction,
    SerializationError => Serialization,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Construction Errors ---

/// Malformed or contractually invalid input records.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// Dependency scope tag is not one of `compile` or `dev`.
    #[error("dependency '{dependency}' has unknown scope '{scope}' (expected 'compile' or 'dev')")]
    UnknownScope { dependency: String, scope: String },

    /// Required package setting is missing or empty.
    #[error("settings field '{field}' is missing or empty")]
    MissingField { field: &'static str },

    /// A descriptor was given an empty name.
    #[error("{kind} #{index} has an empty name")]
    EmptyName { kind: &'static str, index: usize },

    /// Dependency has neither `version`, `path` nor `git`.
    #[error("dependency '{dependency}' needs one of 'version', 'path' or 'git'")]
    MissingLocation { dependency: String },

    /// Dependency names more than one source.
    #[error("dependency '{dependency}' sets both '{first}' and '{second}'")]
    ConflictingLocation {
        dependency: String,
        first: &'static str,
        second: &'static str,
    },

    /// Git dependency pins more than one of `branch`, `tag`, `rev`.
    #[error("git dependency '{dependency}' may set only one of 'branch', 'tag' or 'rev'")]
    ConflictingGitReference { dependency: String },
}

// --- Serialization Errors ---

/// The merged tree contains a shape TOML cannot represent.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// TOML arrays cannot hold null.
    #[error("null value inside array at '{path}'")]
    NullInArray { path: String },

    /// TOML integers are signed 64-bit.
    #[error("integer {value} at '{path}' does not fit in a TOML integer")]
    IntegerOutOfRange { path: String, value: String },

    /// A datetime marker whose text is not a TOML datetime.
    #[error("invalid datetime '{value}' at '{path}'")]
    InvalidDatetime { path: String, value: String },

    /// Error reported by the TOML writer.
    #[error("toml writer failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

// --- Config Errors ---

/// Request and customization loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read an input file.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an input file.
    #[error("failed to parse '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid value in the request.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Input file not found.
    #[error("input file not found: {0}")]
    NotFound(String),
}
