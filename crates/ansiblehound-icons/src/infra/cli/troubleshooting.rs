// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use log::LevelFilter;

pub fn setup_troubleshooting() {
    better_panic::install();
    human_panic::setup_panic!();

    // Warnings are shown by default, RUST_LOG takes over when defined
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_file(false)
        .format_target(false)
        .init();
}
