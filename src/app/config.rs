// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::common::data_path::resolve_required_params_path;
use crate::domain::constants::{DEFAULT_PARAMS_PATH, ENV_NESTING_SEPARATOR, ENV_PREFIX};
use crate::domain::error::AppError;
use crate::domain::params::XpParams;
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Parameter set plus the file it was loaded from.
#[derive(Debug, Clone)]
pub struct PlannerSettings {
    pub params_path: PathBuf,
    pub params: XpParams,
}

impl PlannerSettings {
    /// Resolves `path` (default `config/params.yml`), then loads it with
    /// `XP_PLANNER_*` environment overrides layered on top.
    pub fn load_with_path(path: Option<&str>) -> Result<Self, AppError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let raw = path.unwrap_or(DEFAULT_PARAMS_PATH);
        let params_path = resolve_required_params_path(raw, None)?;
        let params = load_params(&params_path)?;
        Ok(Self {
            params_path,
            params,
        })
    }

    /// CLI budget if given, otherwise `usd_ref.default_budget_usd`.
    pub fn resolve_budget(&self, cli_budget: Option<f64>) -> Result<f64, AppError> {
        resolve_budget(&self.params, cli_budget)
    }
}

pub fn resolve_budget(params: &XpParams, cli_budget: Option<f64>) -> Result<f64, AppError> {
    cli_budget
        .or_else(|| params.default_budget_usd())
        .ok_or_else(|| {
            AppError::Config(
                "no budget given: pass --budget-usd or set usd_ref.default_budget_usd".into(),
            )
        })
}

pub fn load_params(path: &Path) -> Result<XpParams, AppError> {
    load_params_with_env(path, ENV_PREFIX)
}

/// Loads a params document (format from the file extension) and applies
/// `<env_prefix>_SECTION__KEY` overrides. The result is validated.
pub fn load_params_with_env(path: &Path, env_prefix: &str) -> Result<XpParams, AppError> {
    let builder = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator(ENV_NESTING_SEPARATOR)
                .try_parsing(true),
        );

    let params: XpParams = builder.build()?.try_deserialize()?;
    params.validate()?;

    tracing::info!(
        path = %path.display(),
        levels = params.levels.len(),
        base_quests = params.xp.base_quests.len(),
        volume_tiers = params.volume_tiers().len(),
        max_per_day = params.swap_per_tx().max_per_day,
        "Loaded XP params"
    );
    Ok(params)
}
