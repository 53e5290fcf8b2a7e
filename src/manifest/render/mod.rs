// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! TOML rendering of the merged manifest tree.
//!
//! ```text
//! ManifestTable --to_toml_table()--> toml::Table --toml::to_string()--> text
//!                                                         |
//!                    # header lines (optional) + text ----+--> writer
//! ```
//!
//! | tree value          | TOML                              |
//! |---------------------|-----------------------------------|
//! | null in a table     | key omitted                       |
//! | null in an array    | `SerializationError::NullInArray` |
//! | integer > `i64::MAX`| `SerializationError::IntegerOutOfRange` |
//! | `{DATETIME_KEY: s}` | datetime literal                  |
//!
//! The rendered text is written as-is; no formatting pass runs afterwards.

use std::io::Write;

use serde_json::{Number, Value};
use tracing::debug;

use super::{DATETIME_KEY, ManifestTable};
use crate::error::{ManifestResult, SerializationError};

/// Convert the tree into a TOML table, dropping null table entries.
///
/// # Errors
///
/// Returns a [`SerializationError`] if the tree holds a null inside an array
/// or an integer outside the `i64` range.
pub fn to_toml_table(tree: &ManifestTable) -> Result<toml::Table, SerializationError> {
    convert_table(tree, "")
}

/// Render the tree as TOML text, prefixed by an optional comment header.
///
/// # Errors
///
/// Returns a [`SerializationError`] if the tree cannot be represented as TOML.
pub fn render_to_string(
    tree: &ManifestTable,
    header: Option<&str>,
) -> Result<String, SerializationError> {
    let table = to_toml_table(tree)?;
    let body = toml::to_string(&table)?;

    let mut rendered = String::with_capacity(body.len());
    if let Some(header) = header {
        for line in header.lines() {
            if line.is_empty() {
                rendered.push_str("#\n");
            } else {
                rendered.push_str("# ");
                rendered.push_str(line);
                rendered.push('\n');
            }
        }
        rendered.push('\n');
    }
    rendered.push_str(&body);
    Ok(rendered)
}

/// Render the tree and write it through `writer` in a single write.
///
/// # Errors
///
/// Returns [`crate::error::ManifestError::Serialization`] if rendering fails
/// (nothing is written in that case) and
/// [`crate::error::ManifestError::Io`] if the writer fails.
pub fn write_manifest<W: Write + ?Sized>(
    tree: &ManifestTable,
    header: Option<&str>,
    writer: &mut W,
) -> ManifestResult<()> {
    let rendered = render_to_string(tree, header)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    debug!(bytes = rendered.len(), "wrote manifest");
    Ok(())
}

fn convert_table(table: &ManifestTable, path: &str) -> Result<toml::Table, SerializationError> {
    let mut converted = toml::Table::new();
    for (key, value) in table {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        if let Some(value) = convert_value(value, &child_path)? {
            converted.insert(key.clone(), value);
        }
    }
    Ok(converted)
}

fn convert_value(value: &Value, path: &str) -> Result<Option<toml::Value>, SerializationError> {
    let converted = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Number(n) => convert_number(n, path)?,
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Array(items) => toml::Value::Array(convert_array(items, path)?),
        Value::Object(map) => match datetime_text(map) {
            Some(text) => convert_datetime(text, path)?,
            None => toml::Value::Table(convert_table(map, path)?),
        },
    };
    Ok(Some(converted))
}

fn convert_array(items: &[Value], path: &str) -> Result<Vec<toml::Value>, SerializationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_path = format!("{path}[{index}]");
            match convert_value(item, &item_path)? {
                Some(value) => Ok(value),
                None => Err(SerializationError::NullInArray { path: item_path }),
            }
        })
        .collect()
}

fn datetime_text(map: &ManifestTable) -> Option<&str> {
    match map.get(DATETIME_KEY) {
        Some(Value::String(text)) if map.len() == 1 => Some(text.as_str()),
        _ => None,
    }
}

fn convert_datetime(text: &str, path: &str) -> Result<toml::Value, SerializationError> {
    text.parse::<toml::value::Datetime>()
        .map(toml::Value::Datetime)
        .map_err(|_| SerializationError::InvalidDatetime {
            path: path.to_string(),
            value: text.to_string(),
        })
}

fn convert_number(number: &Number, path: &str) -> Result<toml::Value, SerializationError> {
    if let Some(integer) = number.as_i64() {
        return Ok(toml::Value::Integer(integer));
    }
    match number.as_f64() {
        Some(float) if !number.is_u64() => Ok(toml::Value::Float(float)),
        _ => Err(SerializationError::IntegerOutOfRange {
            path: path.to_string(),
            value: number.to_string(),
        }),
    }
}
