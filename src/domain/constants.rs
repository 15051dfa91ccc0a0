// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

// =============================================================================
// PATHS & ENVIRONMENT
// =============================================================================

pub const DEFAULT_PARAMS_PATH: &str = "config/params.yml";

/// Directory searched next to the executable (`<exe>/../config`).
pub const PARAMS_DIR_NAME: &str = "config";

pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Prefix for environment overrides of the params document.
/// Nested keys use `__`, e.g. `XP_PLANNER_FEES__DEX_FEE_PCT`.
pub const ENV_PREFIX: &str = "XP_PLANNER";
pub const ENV_NESTING_SEPARATOR: &str = "__";
pub const LOG_JSON_ENV: &str = "XP_PLANNER_LOG_JSON";

// =============================================================================
// PLANNER
// =============================================================================

pub const DEFAULT_AVG_SWAP_USD: f64 = 1.0;

/// Hard ceiling on accepted batches for a single plan.
pub const MAX_PLAN_BATCHES: usize = 1_000_000;

pub const ACTION_SWAPS: &str = "swaps";
pub const ACTION_DAILY_VOLUME_BONUS: &str = "daily_volume_bonus";
