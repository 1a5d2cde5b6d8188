//! Monthly category budget
//!
//! Supplied externally, one entry per category and month. Amounts are
//! normally negative (planned outflow); only the magnitude is allocated.

use serde::{Deserialize, Serialize};

use super::month::Month;

/// Planned amount for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMonthlyBudget {
    #[serde(alias = "categoryKey")]
    pub category_key: String,

    /// Month name ("March", "mar")
    pub month: String,

    /// Year; None means the budget applies to that month in any year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(alias = "monthlyAmount")]
    pub monthly_amount: f64,
}

impl CategoryMonthlyBudget {
    /// Create a new budget entry that applies to any year
    pub fn new(category_key: impl Into<String>, month: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            category_key: category_key.into(),
            month: month.into(),
            year: None,
            monthly_amount,
        }
    }

    /// Restrict the entry to a single year
    pub fn for_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Check if this entry covers the category and month
    ///
    /// Categories compare case-insensitively, months by resolved index.
    pub fn applies_to(&self, category_key: &str, month: &Month) -> bool {
        let same_category =
            self.category_key.trim().to_lowercase() == category_key.trim().to_lowercase();
        let same_month = Month::parse_name(&self.month) == Some(month.number());
        let same_year = self.year.map_or(true, |y| y == month.year());
        same_category && same_month && same_year
    }
}

/// Find the budget for a category and month
///
/// A year-specific entry wins over one that applies to any year.
pub fn find_budget<'a>(
    budgets: &'a [CategoryMonthlyBudget],
    category_key: &str,
    month: &Month,
) -> Option<&'a CategoryMonthlyBudget> {
    let mut matching = budgets.iter().filter(|b| b.applies_to(category_key, month));
    let first = matching.next()?;
    if first.year.is_some() {
        return Some(first);
    }
    Some(matching.find(|b| b.year.is_some()).unwrap_or(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_to() {
        let march = Month::new(2025, 3).unwrap();
        let budget = CategoryMonthlyBudget::new("Groceries", "Mar", -400.0);
        assert!(budget.applies_to("groceries", &march));
        assert!(!budget.applies_to("Dining", &march));
        assert!(!budget.applies_to("Groceries", &Month::new(2025, 4).unwrap()));
    }

    #[test]
    fn test_year_specific_wins() {
        let march = Month::new(2025, 3).unwrap();
        let budgets = vec![
            CategoryMonthlyBudget::new("Groceries", "March", -400.0),
            CategoryMonthlyBudget::new("Groceries", "March", -550.0).for_year(2025),
            CategoryMonthlyBudget::new("Groceries", "March", -300.0).for_year(2024),
        ];
        let found = find_budget(&budgets, "Groceries", &march).unwrap();
        assert_eq!(found.monthly_amount, -550.0);

        let march_2023 = Month::new(2023, 3).unwrap();
        let found = find_budget(&budgets, "Groceries", &march_2023).unwrap();
        assert_eq!(found.monthly_amount, -400.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"categoryKey":"Fuel","month":"June","monthlyAmount":-120}"#;
        let budget: CategoryMonthlyBudget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.category_key, "Fuel");
        assert_eq!(budget.year, None);
        assert_eq!(budget.monthly_amount, -120.0);
    }
}
