// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deep merge of customizations into a built manifest.
//!
//! ```text
//! base      { package: { name: "foo" } }
//! override  { package: { name: "bar", version: "2.0" } }
//!              |
//!              v
//! merged    { package: { name: "bar", version: "2.0" } }
//! ```
//!
//! - Tables: merged key by key; new keys are appended after existing ones.
//! - Arrays and scalars: override replaces the base value wholesale.
//! - Null: replaces the base value with null. The key stays in the tree and
//!   the serializer leaves it out of the rendered document.

use serde_json::Value;
use tracing::trace;

use super::ManifestTable;

/// Merge `customizations` over `base`, returning a new table.
///
/// Neither input is modified. Keys present in both are merged recursively
/// in place; keys only present in `customizations` are appended.
#[must_use]
pub fn deep_merge(base: &ManifestTable, customizations: &ManifestTable) -> ManifestTable {
    let mut merged = base.clone();
    for (key, overlay) in customizations {
        let value = match merged.get(key) {
            Some(existing) => merge_value(existing, overlay),
            None => overlay.clone(),
        };
        trace!(key = %key, "applying customization");
        merged.insert(key.clone(), value);
    }
    merged
}

/// Merge two values: tables recurse, everything else is replaced by `overlay`.
#[must_use]
pub fn merge_value(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(deep_merge(base_map, overlay_map))
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge several customization layers in order (last has highest precedence).
#[must_use]
pub fn merge_layers<'a, I>(base: &ManifestTable, layers: I) -> ManifestTable
where
    I: IntoIterator<Item = &'a ManifestTable>,
{
    layers
        .into_iter()
        .fold(base.clone(), |merged, layer| deep_merge(&merged, layer))
}
