//! Weekly Pool Report
//!
//! Month-long breakdown of a category budget: for each week its days, the
//! baseline share, the carry-over adjusted budget, what was spent and what is
//! left.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::{format_amount, separator};
use crate::error::{PoolBudgetError, PoolBudgetResult};
use crate::models::{Month, Transaction, WeekInfo};
use crate::services::week::weeks_of;
use crate::services::{pool_history, WeekAllocation};

/// One week of the report
#[derive(Debug, Clone)]
pub struct WeeklyPoolRow {
    pub week: WeekInfo,
    pub allocation: WeekAllocation,
}

/// Weekly pool report for one category and month
#[derive(Debug, Clone)]
pub struct WeeklyPoolReport {
    pub category: String,
    pub month: Month,
    /// Monthly budget as supplied (usually negative)
    pub monthly_budget: f64,
    pub rows: Vec<WeeklyPoolRow>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    category: &'a str,
    month: &'a str,
    year: i32,
    week: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u32,
    original: String,
    penalty: String,
    bonus: String,
    adjusted: String,
    spent: String,
    remaining: String,
}

impl WeeklyPoolReport {
    /// Generate the report for a month
    pub fn generate(
        month: Month,
        monthly_budget: f64,
        transactions: &[Transaction],
        category_key: &str,
    ) -> Self {
        let weeks = weeks_of(&month);
        let history = pool_history(monthly_budget, &weeks, transactions, category_key);

        let rows = weeks
            .into_iter()
            .zip(history)
            .map(|(week, allocation)| WeeklyPoolRow { week, allocation })
            .collect();

        Self {
            category: category_key.to_string(),
            month,
            monthly_budget,
            rows,
        }
    }

    /// Total spent across the month
    pub fn total_spent(&self) -> f64 {
        self.rows
            .iter()
            .fold(0.0, |total, r| total + r.allocation.spent)
    }

    /// Monthly budget minus everything spent
    pub fn total_remaining(&self) -> f64 {
        self.monthly_budget.abs() - self.total_spent()
    }

    /// Row for a given week number
    pub fn week(&self, week_number: u32) -> Option<&WeeklyPoolRow> {
        self.rows.iter().find(|r| r.week.week_number == week_number)
    }

    /// Format the report for terminal display
    ///
    /// `today` marks the row of the week it falls in, if any.
    pub fn format_terminal(&self, symbol: &str, today: Option<NaiveDate>) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Weekly Pool Budget: {} - {}\n",
            self.category, self.month
        ));
        output.push_str(&"=".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "Monthly Budget: {}\n",
            format_amount(self.monthly_budget.abs(), symbol)
        ));
        output.push_str(&format!(
            "Spent: {}    Remaining: {}\n\n",
            format_amount(self.total_spent(), symbol),
            format_amount(self.total_remaining(), symbol)
        ));

        output.push_str(&format!(
            "  {:<6} {:<15} {:>4} {:>14} {:>14} {:>14} {:>14} {:>12}\n",
            "Week", "Dates", "Days", "Original", "Adjusted", "Spent", "Remaining", "Per Day"
        ));
        output.push_str(&separator(96));
        output.push('\n');

        for row in &self.rows {
            let marker = match today {
                Some(date) if row.week.contains(date) => '>',
                _ => ' ',
            };
            let a = &row.allocation;
            output.push_str(&format!(
                "{} {:<6} {:<15} {:>4} {:>14} {:>14} {:>14} {:>14} {:>12}\n",
                marker,
                row.week.week_number,
                format!(
                    "{} - {}",
                    row.week.start_date.format("%d %b"),
                    row.week.end_date.format("%d %b")
                ),
                a.days,
                format_amount(a.original, symbol),
                format_amount(a.adjusted, symbol),
                format_amount(a.spent, symbol),
                format_amount(a.remaining(), symbol),
                format_amount(a.daily_allowance(), symbol),
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> PoolBudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let month_name = self.month.name();

        for row in &self.rows {
            let a = &row.allocation;
            csv_writer
                .serialize(CsvRow {
                    category: &self.category,
                    month: month_name,
                    year: self.month.year(),
                    week: row.week.week_number,
                    start_date: row.week.start_date,
                    end_date: row.week.end_date,
                    days: a.days,
                    original: format!("{:.2}", a.original),
                    penalty: format!("{:.2}", a.penalty),
                    bonus: format!("{:.2}", a.bonus),
                    adjusted: format!("{:.2}", a.adjusted),
                    spent: format!("{:.2}", a.spent),
                    remaining: format!("{:.2}", a.remaining()),
                })
                .map_err(|e| PoolBudgetError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| PoolBudgetError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::weekly_budget_with_pool;

    fn feb_2021() -> Month {
        Month::new(2021, 2).unwrap()
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::spending("3/2/2021", "Food", -600.0),
            Transaction::spending("9/2/2021", "Food", -150.0),
            Transaction::spending("9/2/2021", "Fuel", -80.0),
        ]
    }

    #[test]
    fn test_generate_matches_allocator() {
        let txns = sample_transactions();
        let report = WeeklyPoolReport::generate(feb_2021(), -1200.0, &txns, "Food");
        let weeks = weeks_of(&feb_2021());

        assert_eq!(report.rows.len(), 4);
        for row in &report.rows {
            let expected =
                weekly_budget_with_pool(-1200.0, &weeks, row.week.week_number, &txns, "Food");
            assert!((row.allocation.adjusted - expected).abs() < 1e-9);
        }
        assert!((report.total_spent() - 750.0).abs() < 1e-9);
        assert!((report.total_remaining() - 450.0).abs() < 1e-9);
        assert_eq!(report.week(2).unwrap().week.start_date.to_string(), "2021-02-08");
    }

    #[test]
    fn test_format_terminal() {
        let report = WeeklyPoolReport::generate(feb_2021(), -1200.0, &sample_transactions(), "Food");
        let today = NaiveDate::from_ymd_opt(2021, 2, 10);
        let output = report.format_terminal("$", today);

        assert!(output.contains("Weekly Pool Budget: Food - February 2021"));
        assert!(output.contains("Monthly Budget: $1,200.00"));
        assert!(output.contains("> 2"));
        assert!(output.contains("$300.00"));
    }

    #[test]
    fn test_export_csv() {
        let report = WeeklyPoolReport::generate(feb_2021(), -1200.0, &[], "Food");
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("category,month,year,week,start_date"));
        assert_eq!(
            lines[1],
            "Food,February,2021,1,2021-02-01,2021-02-07,7,300.00,0.00,0.00,300.00,0.00,300.00"
        );
    }
}
