// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::domain::params::VolumeTier;

/// Volume tiers ordered by ascending threshold, then ascending XP, so that
/// among tiers sharing a threshold the larger award is the one that sticks.
#[derive(Debug, Clone, Default)]
pub struct VolumeBonusTable {
    tiers: Vec<VolumeTier>,
}

impl VolumeBonusTable {
    pub fn new(tiers: &[VolumeTier]) -> Self {
        let mut tiers = tiers.to_vec();
        tiers.sort_by(|a, b| a.min_usd.total_cmp(&b.min_usd).then(a.xp.cmp(&b.xp)));
        Self { tiers }
    }

    /// XP of the highest-threshold tier met by `daily_volume_usd`, 0 if none.
    pub fn bonus_xp(&self, daily_volume_usd: f64) -> u64 {
        let mut xp = 0;
        for tier in &self.tiers {
            if daily_volume_usd >= tier.min_usd {
                xp = tier.xp;
            }
        }
        xp
    }
}
