// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Output goes to stderr so the report on
/// stdout stays machine-readable.
pub fn setup_logging(log_level: &str, json_format: bool) {
    let directives = filter_spec(log_level);
    let filter = EnvFilter::from_str(&directives).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = if json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_current_span(false);
        subscriber.with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();
        subscriber.with(fmt_layer).try_init()
    };
    if installed.is_err() {
        return;
    }

    tracing::debug!(
        filter = %directives,
        format = if json_format { "json" } else { "compact" },
        "Logging initialized"
    );
}

/// A bare level (e.g. "debug") is scoped to this crate with everything else
/// at `warn`. Directive strings containing ',' or '=' pass through unchanged.
pub fn filter_spec(log_level: &str) -> String {
    let normalized = log_level.trim();
    if normalized.is_empty() {
        return "warn,xp_planner=info".to_string();
    }
    if normalized.contains(',') || normalized.contains('=') {
        normalized.to_string()
    } else {
        format!("warn,xp_planner={normalized}")
    }
}
