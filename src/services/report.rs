// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@on1.no>

use crate::domain::error::AppError;
use crate::services::planner::PlanResult;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Minimal github-flavoured markdown table with padded columns.
struct Table {
    headers: Vec<&'static str>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| *h).collect(),
            align: columns.iter().map(|(_, a)| *a).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(col))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        self.write_row(&mut out, &headers, &widths);

        out.push('|');
        for (width, align) in widths.iter().zip(&self.align) {
            let dashes = "-".repeat(*width + 1);
            match align {
                Align::Left => {
                    let _ = write!(out, ":{dashes}|");
                }
                Align::Right => {
                    let _ = write!(out, "{dashes}:|");
                }
            }
        }
        out.push('\n');

        for row in &self.rows {
            self.write_row(&mut out, row, &widths);
        }
        out
    }

    fn write_row(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        out.push('|');
        for (col, width) in widths.iter().enumerate() {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            let _ = match self.align[col] {
                Align::Left => write!(out, " {cell:<width$} |"),
                Align::Right => write!(out, " {cell:>width$} |"),
            };
        }
        out.push('\n');
    }
}

fn usd(value: f64) -> String {
    format!("{value:.2}")
}

/// Action ledger followed by the summary row, both as markdown tables.
/// USD amounts are rounded to cents for display only.
pub fn render_text(plan: &PlanResult) -> String {
    let mut actions = Table::new(&[
        ("Action", Align::Left),
        ("XP", Align::Right),
        ("TXs", Align::Right),
        ("Volume USD", Align::Right),
        ("Cost USD", Align::Right),
    ]);
    for a in &plan.actions {
        actions.push(vec![
            a.kind.to_string(),
            a.xp.to_string(),
            a.txs.to_string(),
            usd(a.volume_usd),
            usd(a.cost_usd),
        ]);
    }

    let mut summary = Table::new(&[
        ("Target Lvl", Align::Right),
        ("Target XP", Align::Right),
        ("Base XP", Align::Right),
        ("XP Total", Align::Right),
        ("Swaps", Align::Right),
        ("Avg Swap USD", Align::Right),
        ("Cost Total USD", Align::Right),
        ("Reached", Align::Left),
        ("Outcome", Align::Left),
    ]);
    summary.push(vec![
        plan.target_level.to_string(),
        plan.target_xp.to_string(),
        plan.base_xp.to_string(),
        plan.xp_total.to_string(),
        plan.swaps.to_string(),
        usd(plan.avg_swap_usd),
        usd(plan.cost_total_usd),
        plan.reached.to_string(),
        plan.outcome.as_str().to_string(),
    ]);

    format!("{}\n{}", actions.render(), summary.render())
}

pub fn render_json(plan: &PlanResult) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(plan)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::planner::{ActionKind, ActionRecord, PlanOutcome};

    fn plan() -> PlanResult {
        PlanResult {
            target_level: 2,
            target_xp: 100,
            base_xp: 20,
            xp_total: 120,
            swaps: 20,
            avg_swap_usd: 1.0,
            budget_usd: 5.0,
            cost_total_usd: 0.2049,
            actions: vec![
                ActionRecord {
                    kind: ActionKind::Swaps,
                    xp: 50,
                    txs: 10,
                    volume_usd: 10.0,
                    cost_usd: 0.1,
                },
                ActionRecord::volume_bonus(0, 10.0),
            ],
            reached: true,
            outcome: PlanOutcome::Reached,
        }
    }

    #[test]
    fn text_report_lists_actions_then_summary() {
        let text = render_text(&plan());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("| Action"));
        assert!(lines[1].starts_with("|:"));
        assert!(lines[2].contains("swaps"));
        assert!(lines[2].contains("0.10"));
        assert!(lines[3].contains("daily_volume_bonus"));
        assert!(text.contains("Cost Total USD"));
        // Rounded for display only.
        assert!(text.contains("0.20"));
        assert!(text.contains("| true"));
        assert!(text.contains("reached"));
    }

    #[test]
    fn columns_are_padded_to_equal_width() {
        let text = render_text(&plan());
        let widths: Vec<usize> = text
            .lines()
            .take_while(|l| !l.is_empty())
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn json_report_keeps_unrounded_cost() {
        let json = render_json(&plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cost_total_usd"], 0.2049);
        assert_eq!(value["outcome"], "reached");
        assert_eq!(value["actions"][0]["action"], "swaps");
        assert_eq!(value["actions"].as_array().unwrap().len(), 2);
    }
}
