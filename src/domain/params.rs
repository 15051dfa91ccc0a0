// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@oxidity.com>

//! In-memory parameter model for the rewards program.
//!
//! The field layout mirrors the params document on disk so it can be
//! deserialized directly by [`crate::app::config::load_params`]. The planner
//! only ever reads from it.

use crate::domain::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpParams {
    pub levels: Vec<LevelThreshold>,
    pub xp: XpSources,
    pub fees: FeeSchedule,
    #[serde(default)]
    pub usd_ref: Option<UsdReference>,
}

/// Cumulative XP required to reach `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThreshold {
    #[serde(deserialize_with = "whole_u32")]
    pub level: u32,
    #[serde(deserialize_with = "whole_u64")]
    pub xp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpSources {
    #[serde(default)]
    pub base_quests: Vec<Quest>,
    pub repeatables: Repeatables,
}

/// One-time quest, awarded exactly once per plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "whole_u64")]
    pub xp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeatables {
    pub swap_per_tx: SwapPerTx,
    #[serde(default)]
    pub volume_bonus: VolumeBonus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPerTx {
    #[serde(deserialize_with = "whole_u64")]
    pub xp_per_tx: u64,
    #[serde(deserialize_with = "whole_u32")]
    pub max_per_day: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeBonus {
    #[serde(default)]
    pub tiers: Vec<VolumeTier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeTier {
    pub min_usd: f64,
    #[serde(deserialize_with = "whole_u64")]
    pub xp: u64,
}

/// Per-transaction cost model. Both percentages are fractions (0.003 = 0.3%)
/// applied to the average trade size of each transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub l2_gas_per_tx_usd: f64,
    pub dex_fee_pct: f64,
    pub price_impact_pct: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsdReference {
    #[serde(default)]
    pub default_budget_usd: Option<f64>,
}

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Reads a count that must be a whole, non-negative number. Going through
/// `f64` keeps the config source from silently rounding `2.5` to `3`.
fn whole_number<'de, D>(deserializer: D, max: f64) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {value}"
        )));
    }
    if value.fract() != 0.0 {
        return Err(D::Error::custom(format!(
            "expected a whole number, got fractional {value}"
        )));
    }
    if value > max {
        return Err(D::Error::custom(format!("{value} is out of range")));
    }
    Ok(value)
}

fn whole_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer, MAX_EXACT_WHOLE).map(|v| v as u64)
}

fn whole_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(deserializer, f64::from(u32::MAX)).map(|v| v as u32)
}

impl XpParams {
    /// Required cumulative XP for `level`. No interpolation between levels.
    pub fn level_xp(&self, level: u32) -> Result<u64, AppError> {
        self.levels
            .iter()
            .rev()
            .find(|row| row.level == level)
            .map(|row| row.xp)
            .ok_or(AppError::UnknownLevel { level })
    }

    pub fn base_quests_xp(&self) -> u64 {
        self.xp
            .base_quests
            .iter()
            .fold(0u64, |acc, quest| acc.saturating_add(quest.xp))
    }

    pub fn swap_per_tx(&self) -> &SwapPerTx {
        &self.xp.repeatables.swap_per_tx
    }

    pub fn volume_tiers(&self) -> &[VolumeTier] {
        &self.xp.repeatables.volume_bonus.tiers
    }

    pub fn default_budget_usd(&self) -> Option<f64> {
        self.usd_ref.and_then(|r| r.default_budget_usd)
    }

    /// Boundary checks applied by the loader. The planner itself never calls
    /// this and tolerates degenerate values.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.levels.is_empty() {
            return Err(AppError::validation("levels", "level table is empty"));
        }
        let mut seen = HashSet::with_capacity(self.levels.len());
        for row in &self.levels {
            if !seen.insert(row.level) {
                return Err(AppError::validation(
                    "levels",
                    format!("level {} is defined more than once", row.level),
                ));
            }
        }

        if self.swap_per_tx().max_per_day == 0 {
            return Err(AppError::validation(
                "xp.repeatables.swap_per_tx.max_per_day",
                "must be at least 1",
            ));
        }

        let fees = [
            ("fees.l2_gas_per_tx_usd", self.fees.l2_gas_per_tx_usd),
            ("fees.dex_fee_pct", self.fees.dex_fee_pct),
            ("fees.price_impact_pct", self.fees.price_impact_pct),
        ];
        for (field, value) in fees {
            ensure_non_negative(field, value)?;
        }

        for (idx, tier) in self.volume_tiers().iter().enumerate() {
            ensure_non_negative(
                &format!("xp.repeatables.volume_bonus.tiers[{idx}].min_usd"),
                tier.min_usd,
            )?;
        }

        if let Some(budget) = self.default_budget_usd()
            && !budget.is_finite()
        {
            return Err(AppError::validation(
                "usd_ref.default_budget_usd",
                "must be a finite number",
            ));
        }

        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::validation(
            field,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}
