// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render and tree commands.
//!
//! ```text
//! Request --> to_inputs() --> ManifestGenerator
//!                                 ^
//! [output] customizations + -c ---+   (skipped by --no-customizations)
//!
//! render: TOML --> stdout | write_atomic(-o)
//! tree:   merged tree --> pretty JSON on stdout
//! ```

use std::io::Write;

use tracing::{debug, info};

use crate::cli::render::{CustomizationArgs, RenderArgs, TreeArgs};
use crate::config::Request;
use crate::error::Result;
use crate::manifest::{ManifestGenerator, ManifestTable};
use crate::utility::fs::write_atomic;

/// Run the render command.
///
/// # Errors
///
/// Returns an error if the request is invalid, a customization file cannot
/// be loaded, the manifest cannot be rendered, or the output cannot be
/// written.
pub fn run_render_command(args: &RenderArgs, request: &Request) -> Result<()> {
    let manifest = render_manifest(args, request)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, &manifest)?;
            info!(path = %path.display(), bytes = manifest.len(), "wrote manifest");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&manifest)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Run the tree command.
///
/// # Errors
///
/// Returns an error if the request is invalid or a customization file cannot
/// be loaded.
pub fn run_tree_command(args: &TreeArgs, request: &Request) -> Result<()> {
    let tree = merged_tree(&args.customizations, request)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

/// Render the manifest described by `request` into memory.
///
/// The header comes from `--header`, falling back to `[output] header`.
///
/// # Errors
///
/// See [`run_render_command`].
pub fn render_manifest(args: &RenderArgs, request: &Request) -> Result<Vec<u8>> {
    let inputs = request.to_inputs()?;
    let customizations = resolve_customizations(&args.customizations, request)?;
    let header = args
        .header
        .as_deref()
        .or(request.output.header.as_deref());

    let mut manifest = Vec::new();
    ManifestGenerator::builder()
        .settings(&inputs.settings)
        .dependencies(&inputs.dependencies)
        .features(&inputs.features)
        .maybe_customizations(customizations.as_ref())
        .maybe_header(header)
        .build()
        .render(&mut manifest)?;
    Ok(manifest)
}

/// Build the manifest tree and merge customizations into it.
///
/// # Errors
///
/// See [`run_tree_command`].
pub fn merged_tree(args: &CustomizationArgs, request: &Request) -> Result<ManifestTable> {
    let inputs = request.to_inputs()?;
    let customizations = resolve_customizations(args, request)?;

    Ok(ManifestGenerator::builder()
        .settings(&inputs.settings)
        .dependencies(&inputs.dependencies)
        .features(&inputs.features)
        .maybe_customizations(customizations.as_ref())
        .build()
        .tree())
}

fn resolve_customizations(
    args: &CustomizationArgs,
    request: &Request,
) -> Result<Option<ManifestTable>> {
    if args.disabled {
        debug!("customizations disabled");
        return Ok(None);
    }

    let customizations = request.load_customizations(args.files.as_slice())?;
    debug!(
        files = request.output.customizations.len() + args.files.len(),
        keys = customizations.len(),
        "loaded customizations"
    );
    Ok(Some(customizations))
}
