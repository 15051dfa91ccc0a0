// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

pub fn parse_boolish(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a USD amount such as `50`, `$1,250.50` or `-0.5`.
/// Grouping characters (`,` `_`) and a leading `$` are ignored.
pub fn parse_usd_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits: String = rest
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if digits.is_empty() {
        return None;
    }
    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// `clap` value parser wrapper around [`parse_usd_amount`].
pub fn usd_arg(raw: &str) -> Result<f64, String> {
    parse_usd_amount(raw).ok_or_else(|| format!("invalid USD amount: {raw:?}"))
}
