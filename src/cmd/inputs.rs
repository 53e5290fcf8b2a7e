// manifest-rs: Cargo manifest synthesizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

/// Display loaded request files.
pub fn run_inputs_command(input_files: &[String]) {
    if input_files.is_empty() {
        println!("No request files loaded");
    } else {
        for line in input_files {
            println!("{line}");
        }
    }
}
