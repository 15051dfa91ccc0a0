// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use proptest::prelude::*;
use xp_planner::domain::params::{
    FeeSchedule, LevelThreshold, Quest, Repeatables, SwapPerTx, VolumeBonus, VolumeTier, XpParams,
    XpSources,
};
use xp_planner::{ActionKind, Planner};

fn build_params(
    quests: Vec<u64>,
    target_xp: u64,
    xp_per_tx: u64,
    max_per_day: u32,
    fees: FeeSchedule,
    tiers: Vec<VolumeTier>,
) -> XpParams {
    XpParams {
        levels: vec![
            LevelThreshold { level: 1, xp: 0 },
            LevelThreshold {
                level: 2,
                xp: target_xp,
            },
        ],
        xp: XpSources {
            base_quests: quests.into_iter().map(|xp| Quest { id: None, xp }).collect(),
            repeatables: Repeatables {
                swap_per_tx: SwapPerTx {
                    xp_per_tx,
                    max_per_day,
                },
                volume_bonus: VolumeBonus { tiers },
            },
        },
        fees,
        usd_ref: None,
    }
}

fn fee_strategy() -> impl Strategy<Value = FeeSchedule> {
    (0.0f64..0.5, 0.0f64..0.01, 0.0f64..0.01).prop_map(|(gas, dex, impact)| FeeSchedule {
        l2_gas_per_tx_usd: gas,
        dex_fee_pct: dex,
        price_impact_pct: impact,
    })
}

/// Tier tables whose awards grow with the threshold.
fn monotone_tiers() -> impl Strategy<Value = Vec<VolumeTier>> {
    prop::collection::vec((0.0f64..5_000.0, 0u64..100), 0..6).prop_map(|mut raw| {
        raw.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut xp = 0;
        raw.into_iter()
            .map(|(min_usd, step)| {
                xp += step;
                VolumeTier { min_usd, xp }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn base_quests_xp_is_the_sum(quests in prop::collection::vec(0u64..1_000, 0..20)) {
        let expected: u64 = quests.iter().sum();
        let params = build_params(quests, 100, 1, 1, FeeSchedule::default(), Vec::new());
        let planner = Planner::new(&params);
        prop_assert_eq!(planner.base_quests_xp(), expected);
        prop_assert_eq!(planner.base_quests_xp(), expected);
    }

    #[test]
    fn swap_cost_strictly_increases_with_batch_size(
        n in 0u32..500,
        avg in 0.01f64..10_000.0,
        gas in 0.0001f64..1.0,
        dex in 0.0001f64..0.05,
        impact in 0.0001f64..0.05,
    ) {
        let fees = FeeSchedule { l2_gas_per_tx_usd: gas, dex_fee_pct: dex, price_impact_pct: impact };
        let params = build_params(Vec::new(), 100, 1, 10, fees, Vec::new());
        let planner = Planner::new(&params);
        let smaller = planner.simulate_swaps(n, avg);
        let larger = planner.simulate_swaps(n + 1, avg);
        prop_assert!(larger.cost_usd > smaller.cost_usd);
        prop_assert_eq!(planner.simulate_swaps(0, avg).cost_usd, 0.0);
    }

    #[test]
    fn volume_bonus_is_non_decreasing(
        tiers in monotone_tiers(),
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0,
    ) {
        let params = build_params(Vec::new(), 100, 1, 10, FeeSchedule::default(), tiers);
        let planner = Planner::new(&params);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(planner.volume_bonus_xp(lo) <= planner.volume_bonus_xp(hi));
    }

    #[test]
    fn plan_stays_within_budget_and_flags_reached_correctly(
        quests in prop::collection::vec(0u64..200, 0..4),
        target_xp in 0u64..5_000,
        xp_per_tx in 0u64..20,
        max_per_day in 1u32..50,
        fees in fee_strategy(),
        tiers in monotone_tiers(),
        budget in -5.0f64..200.0,
        avg in 0.1f64..500.0,
    ) {
        let params = build_params(quests, target_xp, xp_per_tx, max_per_day, fees, tiers);
        let plan = Planner::new(&params)
            .with_max_batches(10_000)
            .plan_to_reach(2, budget, avg)
            .unwrap();

        prop_assert!(plan.cost_total_usd <= budget.max(0.0));
        prop_assert_eq!(plan.reached, plan.xp_total >= plan.target_xp);
        prop_assert!(plan.xp_total >= plan.base_xp);
        prop_assert_eq!(plan.actions.len() % 2, 0);

        let mut swaps = 0u64;
        for pair in plan.actions.chunks(2) {
            prop_assert_eq!(pair[0].kind, ActionKind::Swaps);
            prop_assert!(pair[0].txs >= 1 && pair[0].txs <= max_per_day);
            prop_assert_eq!(pair[1].kind, ActionKind::DailyVolumeBonus);
            prop_assert_eq!(pair[1].cost_usd, 0.0);
            swaps += u64::from(pair[0].txs);
        }
        prop_assert_eq!(plan.swaps, swaps);
    }
}
