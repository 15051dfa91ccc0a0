// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

//! Budget-constrained, day-batched XP planning.
//!
//! Starting from the one-time quest XP, the planner repeatedly books a full
//! day of swaps (`max_per_day`). When a full day would overshoot the budget it
//! backs off to the largest smaller batch that still fits. Each accepted batch
//! is followed by the volume bonus earned by that batch alone. The result is a
//! feasible greedy plan, not a cost-optimal one.

pub mod bonus;
pub mod swaps;

pub use bonus::VolumeBonusTable;
pub use swaps::{ActionKind, ActionRecord, simulate_swaps};

use crate::domain::constants::MAX_PLAN_BATCHES;
use crate::domain::error::AppError;
use crate::domain::params::XpParams;
use serde::Serialize;

/// Why the planning loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    Reached,
    /// Not even a single swap fits in the remaining budget.
    BudgetExhausted,
    /// The affordable batch earns no XP and costs nothing, so repeating it
    /// would never change the plan.
    NoProgress,
    BatchLimit,
}

impl PlanOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reached => "reached",
            Self::BudgetExhausted => "budget_exhausted",
            Self::NoProgress => "no_progress",
            Self::BatchLimit => "batch_limit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub target_level: u32,
    pub target_xp: u64,
    pub base_xp: u64,
    pub xp_total: u64,
    pub swaps: u64,
    pub avg_swap_usd: f64,
    pub budget_usd: f64,
    pub cost_total_usd: f64,
    pub actions: Vec<ActionRecord>,
    pub reached: bool,
    pub outcome: PlanOutcome,
}

impl PlanResult {
    pub fn swap_batches(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| a.kind == ActionKind::Swaps)
            .count()
    }

    pub fn bonus_xp_total(&self) -> u64 {
        self.actions
            .iter()
            .filter(|a| a.kind == ActionKind::DailyVolumeBonus)
            .map(|a| a.xp)
            .sum()
    }

    pub fn remaining_budget_usd(&self) -> f64 {
        self.budget_usd - self.cost_total_usd
    }
}

/// Read-only view over a parameter set. Holds no mutable state, so one
/// planner can serve any number of concurrent `plan_to_reach` calls.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    params: &'a XpParams,
    bonus: VolumeBonusTable,
    max_batches: usize,
}

impl<'a> Planner<'a> {
    pub fn new(params: &'a XpParams) -> Self {
        Self {
            params,
            bonus: VolumeBonusTable::new(params.volume_tiers()),
            max_batches: MAX_PLAN_BATCHES,
        }
    }

    /// Overrides the ceiling on accepted batches per plan.
    pub fn with_max_batches(mut self, max_batches: usize) -> Self {
        self.max_batches = max_batches;
        self
    }

    pub fn level_xp(&self, level: u32) -> Result<u64, AppError> {
        self.params.level_xp(level)
    }

    pub fn base_quests_xp(&self) -> u64 {
        self.params.base_quests_xp()
    }

    pub fn simulate_swaps(&self, swaps: u32, avg_volume_usd: f64) -> ActionRecord {
        simulate_swaps(
            self.params.swap_per_tx(),
            &self.params.fees,
            swaps,
            avg_volume_usd,
        )
    }

    pub fn volume_bonus_xp(&self, daily_volume_usd: f64) -> u64 {
        self.bonus.bonus_xp(daily_volume_usd)
    }

    pub fn plan_to_reach(
        &self,
        target_level: u32,
        budget_usd: f64,
        avg_swap_usd: f64,
    ) -> Result<PlanResult, AppError> {
        let target_xp = self.level_xp(target_level)?;
        let base_xp = self.base_quests_xp();
        let max_per_day = self.params.swap_per_tx().max_per_day;

        let mut xp_total = base_xp;
        let mut cost_total = 0.0_f64;
        let mut swaps = 0u64;
        let mut batches = 0usize;
        let mut actions = Vec::new();

        let outcome = loop {
            if xp_total >= target_xp {
                break PlanOutcome::Reached;
            }
            // Negated so a NaN budget stops here as well.
            if !(cost_total <= budget_usd) {
                break PlanOutcome::BudgetExhausted;
            }
            if batches >= self.max_batches {
                break PlanOutcome::BatchLimit;
            }

            let Some(batch) =
                self.affordable_batch(max_per_day, avg_swap_usd, cost_total, budget_usd)
            else {
                break PlanOutcome::BudgetExhausted;
            };
            let bonus =
                ActionRecord::volume_bonus(self.volume_bonus_xp(batch.volume_usd), batch.volume_usd);

            let gained = batch.xp.saturating_add(bonus.xp);
            if gained == 0 && batch.cost_usd == 0.0 {
                break PlanOutcome::NoProgress;
            }

            cost_total += batch.cost_usd;
            xp_total = xp_total.saturating_add(gained);
            swaps += u64::from(batch.txs);
            batches += 1;
            actions.push(batch);
            actions.push(bonus);
        };

        Ok(PlanResult {
            target_level,
            target_xp,
            base_xp,
            xp_total,
            swaps,
            avg_swap_usd,
            budget_usd,
            cost_total_usd: cost_total,
            actions,
            reached: xp_total >= target_xp,
            outcome,
        })
    }

    /// Full-day batch if it fits, otherwise the largest smaller batch that
    /// does. `None` when not even one swap fits.
    ///
    /// Batch cost is monotone in the swap count, so the backoff is a binary
    /// search over `1..max_per_day`.
    fn affordable_batch(
        &self,
        max_per_day: u32,
        avg_swap_usd: f64,
        spent_usd: f64,
        budget_usd: f64,
    ) -> Option<ActionRecord> {
        let fits = |swaps: u32| {
            let rec = self.simulate_swaps(swaps, avg_swap_usd);
            (spent_usd + rec.cost_usd <= budget_usd).then_some(rec)
        };

        if let Some(full_day) = fits(max_per_day) {
            return Some(full_day);
        }

        // Every size below `lo` fits; nothing at or above `hi` does.
        let (mut lo, mut hi) = (1u32, max_per_day);
        let mut best = None;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match fits(mid) {
                Some(rec) => {
                    best = Some(rec);
                    lo = mid + 1;
                }
                None => hi = mid,
            }
        }
        best
    }
}
