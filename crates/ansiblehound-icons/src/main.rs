// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

mod core;
mod infra;
mod ioc;
mod pusher;

use crate::infra::cli;
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::troubleshooting::setup_troubleshooting();
    let (task, turnoff_colors) = cli::parsing::parse_arguments()?;

    let pusher = ioc::create_pusher(task, turnoff_colors)?;
    pusher.execute().await?;

    Ok(())
}
