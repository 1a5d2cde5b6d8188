//! Pool allocator
//!
//! Spreads a monthly budget across the weeks of a month in proportion to
//! each week's day count, then carries every earlier week's over- or
//! under-spend forward. A week's overspend becomes a penalty and its
//! underspend a bonus, each spread over the remaining days of the month
//! after that week ends, so later weeks absorb it in proportion to their
//! length rather than the next week taking all of it.
//!
//! Nothing here fails: a zero or missing budget, an empty transaction list or
//! an unknown target week all degrade to `0` or the unadjusted allocation.

use serde::Serialize;
use tracing::debug;

use super::spending::week_spending;
use crate::models::{Transaction, WeekInfo};

/// One week's allocation after replaying the month so far
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeekAllocation {
    pub week_number: u32,
    pub days: u32,
    /// Share of the monthly budget by day count
    pub original: f64,
    /// Overspend carried in from earlier weeks
    pub penalty: f64,
    /// Underspend carried in from earlier weeks
    pub bonus: f64,
    /// `max(0, original - penalty + bonus)`
    pub adjusted: f64,
    pub spent: f64,
    /// `max(0, spent - adjusted)`
    pub over: f64,
    /// `max(0, adjusted - spent)`
    pub under: f64,
}

impl WeekAllocation {
    /// What is left of the adjusted budget (negative when overspent)
    pub fn remaining(&self) -> f64 {
        self.adjusted - self.spent
    }

    /// Adjusted budget per day of the week
    pub fn daily_allowance(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.adjusted / self.days as f64
        }
    }
}

/// Baseline share of the monthly budget for each week
///
/// Shares are proportional to day counts and sum to `|monthly_budget|`.
/// Returns zeros when the budget is zero or not finite, or the weeks cover
/// no days.
pub fn original_allocations(monthly_budget: f64, weeks: &[WeekInfo]) -> Vec<f64> {
    let total_days: u32 = weeks.iter().map(WeekInfo::days).sum();
    let budget = monthly_budget.abs();

    if total_days == 0 || !budget.is_finite() || budget <= 0.0 {
        return vec![0.0; weeks.len()];
    }

    let budget_per_day = budget / total_days as f64;
    weeks
        .iter()
        .map(|w| budget_per_day * w.days() as f64)
        .collect()
}

/// Effective budget for `target_week` (1-based) after carry-over
///
/// Every week before the target is replayed in order: its adjusted budget is
/// derived from the weeks before it, then compared against what was actually
/// spent. The target week's original share is then reduced by the carried
/// penalties and raised by the carried bonuses. Never negative.
pub fn weekly_budget_with_pool(
    monthly_budget: f64,
    all_weeks: &[WeekInfo],
    target_week: u32,
    transactions: &[Transaction],
    category_key: &str,
) -> f64 {
    if target_week == 0 || target_week as usize > all_weeks.len() {
        debug!(target_week, weeks = all_weeks.len(), "target week outside the month");
        return 0.0;
    }

    let original = original_allocations(monthly_budget, all_weeks);
    let target = target_week as usize - 1;

    if target == 0 || transactions.is_empty() {
        return original[target];
    }

    let days: Vec<u32> = all_weeks.iter().map(WeekInfo::days).collect();
    let history = replay(&original, all_weeks, target, transactions, category_key);
    let (penalty, bonus) = carried_into(&history, &days, target);
    let result = (original[target] - penalty + bonus).max(0.0);

    debug!(
        target_week,
        original = original[target],
        penalty,
        bonus,
        result,
        "pool-adjusted weekly budget"
    );
    result
}

/// Replay of every week in the month
///
/// Entry `k` has `adjusted == weekly_budget_with_pool(.., k + 1, ..)`. With
/// no transactions at all there is nothing to carry, so every week keeps its
/// original share.
pub fn pool_history(
    monthly_budget: f64,
    all_weeks: &[WeekInfo],
    transactions: &[Transaction],
    category_key: &str,
) -> Vec<WeekAllocation> {
    let original = original_allocations(monthly_budget, all_weeks);

    if transactions.is_empty() {
        return all_weeks
            .iter()
            .zip(&original)
            .map(|(week, &share)| WeekAllocation {
                week_number: week.week_number,
                days: week.days(),
                original: share,
                adjusted: share,
                under: share,
                ..Default::default()
            })
            .collect();
    }

    replay(
        &original,
        all_weeks,
        all_weeks.len(),
        transactions,
        category_key,
    )
}

/// Replay the first `count` weeks in order
///
/// The history is allocated once at its final length and filled forward;
/// each entry only reads the entries before it.
fn replay(
    original: &[f64],
    weeks: &[WeekInfo],
    count: usize,
    transactions: &[Transaction],
    category_key: &str,
) -> Vec<WeekAllocation> {
    let days: Vec<u32> = weeks.iter().map(WeekInfo::days).collect();
    let mut history = vec![WeekAllocation::default(); count];

    for i in 0..count {
        let (penalty, bonus) = carried_into(&history[..i], &days, i);
        let adjusted = (original[i] - penalty + bonus).max(0.0);
        let spent = week_spending(transactions, category_key, &weeks[i]);

        history[i] = WeekAllocation {
            week_number: weeks[i].week_number,
            days: days[i],
            original: original[i],
            penalty,
            bonus,
            adjusted,
            spent,
            over: (spent - adjusted).max(0.0),
            under: (adjusted - spent).max(0.0),
        };
        debug!(
            week = weeks[i].week_number,
            adjusted,
            spent,
            over = history[i].over,
            under = history[i].under,
            "replayed week"
        );
    }

    history
}

/// Penalty and bonus that earlier weeks carry into week `target`
///
/// Week `j`'s over/under amount is spread across the days left in the month
/// after it ends; `target` receives the fraction covering its own days.
fn carried_into(earlier: &[WeekAllocation], days: &[u32], target: usize) -> (f64, f64) {
    let target_days = days[target] as f64;
    let mut penalty = 0.0;
    let mut bonus = 0.0;

    for (j, week) in earlier.iter().enumerate() {
        let remaining_days: u32 = days[j + 1..].iter().sum();
        if remaining_days == 0 {
            continue;
        }
        let share = target_days / remaining_days as f64;
        penalty += week.over * share;
        bonus += week.under * share;
    }

    (penalty, bonus)
}
