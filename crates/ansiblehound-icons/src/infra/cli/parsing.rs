// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::FailurePolicy;
use crate::infra::networking::http::HttpSettings;
use crate::pusher::PushTask;
use anyhow::{Context, bail};
use clap::Parser;
use reqwest::header::HeaderValue;
use std::process;
use std::time::Duration;
use url::Url;

pub static EXIT_CODE_USAGE_ERROR: i32 = 1;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "Example: ansiblehound-icons http://127.0.0.1:8080 ey[...]")]
struct CliParser {
    /// Base URL of the target BloodHound instance
    #[arg(value_name = "BLOODHOUND_URL")]
    pub bloodhound_url: String,

    /// JWT used as bearer token against BloodHound API
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Skip TLS certificate verification (exposes the token to man-in-the-middle attacks)
    #[arg(long)]
    pub insecure_skip_verify: bool,

    /// Give up on a request after this amount of seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Abort remaining registrations after the first unreachable request
    #[arg(long)]
    pub fail_fast: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_colors: bool,
}

pub fn parse_arguments() -> anyhow::Result<(PushTask, bool)> {
    let cli = match CliParser::try_parse() {
        Ok(parsed) => parsed,
        Err(incoming) if incoming.use_stderr() => {
            incoming.print()?;
            process::exit(EXIT_CODE_USAGE_ERROR)
        },
        Err(incoming) => incoming.exit(),
    };

    let turnoff_colors = cli.no_colors;
    let task = create_task(cli)?;
    Ok((task, turnoff_colors))
}

fn create_task(cli: CliParser) -> anyhow::Result<PushTask> {
    let base_url = Url::parse(&cli.bloodhound_url)
        .with_context(|| format!("ansiblehound.cli : invalid BloodHound URL ({})", cli.bloodhound_url))?;

    if !matches!(base_url.scheme(), "http" | "https") {
        bail!(
            "ansiblehound.cli : unsupported scheme for BloodHound URL ({})",
            cli.bloodhound_url
        )
    }

    if HeaderValue::from_str(&format!("Bearer {}", cli.token)).is_err() {
        bail!("ansiblehound.cli : invalid token (not usable as an HTTP header value)")
    }

    let http_settings = HttpSettings {
        insecure_skip_verify: cli.insecure_skip_verify,
        timeout: cli.timeout.map(Duration::from_secs),
    };

    let failure_policy = match cli.fail_fast {
        true => FailurePolicy::FailFast,
        false => FailurePolicy::ContinueOnError,
    };

    let task = PushTask {
        base_url: cli.bloodhound_url,
        token: cli.token,
        http_settings,
        failure_policy,
    };

    Ok(task)
}
