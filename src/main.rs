// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use clap::{Parser, Subcommand};
use xp_planner::app::config::PlannerSettings;
use xp_planner::app::logging::setup_logging;
use xp_planner::common::parsing::{parse_boolish, usd_arg};
use xp_planner::domain::constants::{DEFAULT_AVG_SWAP_USD, DEFAULT_PARAMS_PATH, LOG_JSON_ENV};
use xp_planner::domain::error::AppError;
use xp_planner::services::planner::Planner;
use xp_planner::services::report::{render_json, render_text};

#[derive(Parser, Debug)]
#[command(author, version, about = "XP level planner for swap reward programs")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    /// Emit logs as JSON (also via XP_PLANNER_LOG_JSON)
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a plan to reach a target level under a budget
    Simulate {
        /// Level to reach (must exist in the params level table)
        #[arg(long)]
        target_level: u32,

        /// Total USD budget (defaults to usd_ref.default_budget_usd)
        #[arg(long, value_parser = usd_arg, allow_negative_numbers = true)]
        budget_usd: Option<f64>,

        /// Average trade size per swap in USD
        #[arg(long, value_parser = usd_arg, allow_negative_numbers = true, default_value_t = DEFAULT_AVG_SWAP_USD)]
        avg_swap_usd: f64,

        /// Path to the params document (YAML, TOML or JSON)
        #[arg(long, default_value = DEFAULT_PARAMS_PATH)]
        params: String,

        /// Print the plan as JSON instead of tables
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let json_logs = cli.log_json
        || std::env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| parse_boolish(&v))
            .unwrap_or(false);
    setup_logging(if cli.debug { "debug" } else { "info" }, json_logs);

    match cli.command {
        Command::Simulate {
            target_level,
            budget_usd,
            avg_swap_usd,
            params,
            json,
        } => {
            let settings = PlannerSettings::load_with_path(Some(&params))?;
            let budget_usd = settings.resolve_budget(budget_usd)?;
            if avg_swap_usd <= 0.0 {
                tracing::warn!(avg_swap_usd, "Non-positive average swap size");
            }

            let planner = Planner::new(&settings.params);
            let plan = planner.plan_to_reach(target_level, budget_usd, avg_swap_usd)?;
            tracing::info!(
                target_level,
                target_xp = plan.target_xp,
                xp_total = plan.xp_total,
                batches = plan.swap_batches(),
                cost_total_usd = plan.cost_total_usd,
                remaining_usd = plan.remaining_budget_usd(),
                outcome = plan.outcome.as_str(),
                "Plan computed"
            );

            if json {
                println!("{}", render_json(&plan)?);
            } else {
                print!("{}", render_text(&plan));
            }
        }
    }
    Ok(())
}
