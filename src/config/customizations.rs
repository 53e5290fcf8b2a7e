// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Customization file loading.
//!
//! ```text
//! *.json  --> serde_json  (null allowed: drops the key from the output)
//! other   --> toml        (no null in TOML; datetimes kept as markers)
//!               |
//!               v
//!         ManifestTable (top level must be a table)
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, ManifestResult};
use crate::manifest::{DATETIME_KEY, ManifestTable};

/// Syntax of a customization file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizationFormat {
    Json,
    Toml,
}

impl CustomizationFormat {
    /// `.json` (any case) is JSON, everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Read and parse a customization file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is missing, unreadable, not valid
/// JSON/TOML, or its top level is not a table.
pub fn load_customizations(path: &Path) -> ManifestResult<ManifestTable> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.display().to_string())
        } else {
            ConfigError::ReadError {
                path: path.display().to_string(),
                source,
            }
        }
    })?;
    let origin = path.display().to_string();
    Ok(parse_customizations(
        &content,
        CustomizationFormat::from_path(path),
        &origin,
    )?)
}

/// Parse customization text. `origin` names the source in errors.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] on invalid syntax or a non-table top
/// level.
pub fn parse_customizations(
    content: &str,
    format: CustomizationFormat,
    origin: &str,
) -> Result<ManifestTable, ConfigError> {
    let parse_error = |message: String| ConfigError::ParseError {
        path: origin.to_string(),
        message,
    };

    let value = match format {
        CustomizationFormat::Json => {
            serde_json::from_str::<Value>(content).map_err(|e| parse_error(e.to_string()))?
        }
        CustomizationFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            toml_to_json(toml::Value::Table(table)).map_err(parse_error)?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(parse_error(format!(
            "expected a table at the top level, found {}",
            kind_of(&other)
        ))),
    }
}

/// Datetimes become `{DATETIME_KEY: text}` tables; NaN and infinite floats
/// have no JSON form.
fn toml_to_json(value: toml::Value) -> Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("unsupported float value {f}"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => {
            let mut marker = ManifestTable::new();
            marker.insert(DATETIME_KEY.to_string(), Value::String(dt.to_string()));
            Value::Object(marker)
        }
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| Ok((key, toml_to_json(value)?)))
                .collect::<Result<_, String>>()?,
        ),
    })
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
