// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::domain::constants::{ACTION_DAILY_VOLUME_BONUS, ACTION_SWAPS};
use crate::domain::params::{FeeSchedule, SwapPerTx};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Swaps,
    DailyVolumeBonus,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swaps => ACTION_SWAPS,
            Self::DailyVolumeBonus => ACTION_DAILY_VOLUME_BONUS,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable ledger entry produced by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionRecord {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    pub xp: u64,
    pub txs: u32,
    pub volume_usd: f64,
    pub cost_usd: f64,
}

impl ActionRecord {
    /// Bonus entry tagged with the batch volume that earned it. Never carries
    /// transactions or cost.
    pub fn volume_bonus(xp: u64, volume_usd: f64) -> Self {
        Self {
            kind: ActionKind::DailyVolumeBonus,
            xp,
            txs: 0,
            volume_usd,
            cost_usd: 0.0,
        }
    }
}

/// Simulates a batch of `swaps` transactions of `avg_volume_usd` each.
///
/// Gas is flat per transaction; the dex fee and price impact are charged per
/// transaction against the average trade size.
pub fn simulate_swaps(
    rate: &SwapPerTx,
    fees: &FeeSchedule,
    swaps: u32,
    avg_volume_usd: f64,
) -> ActionRecord {
    let n = f64::from(swaps);
    let l2_gas = fees.l2_gas_per_tx_usd * n;
    let dex_fee = avg_volume_usd * fees.dex_fee_pct * n;
    let price_impact = avg_volume_usd * fees.price_impact_pct * n;

    ActionRecord {
        kind: ActionKind::Swaps,
        xp: u64::from(swaps).saturating_mul(rate.xp_per_tx),
        txs: swaps,
        volume_usd: avg_volume_usd * n,
        cost_usd: l2_gas + dex_fee + price_impact,
    }
}
