//! Saving-plan calculator for the bank comparison page.
//!
//! Projects what a recurring monthly deposit grows to at a bank's quoted
//! annual profit rate, compounding monthly: each month the deposit is added
//! and the whole balance earns one month of profit.

use shared::BankRate;

/// Projected outcome of a recurring-deposit plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReturn {
    /// Total paid in: monthly deposit times number of months.
    pub invested: f64,
    /// Balance at the end of the plan.
    pub total: f64,
    /// `total - invested`.
    pub profit: f64,
}

/// Numeric percentage at the front of a displayed rate string, e.g.
/// `"20.5%"` -> 20.5, `"18% (Halal)"` -> 18.0. `None` if the string does
/// not start with a number.
pub fn parse_rate_percent(rate: &str) -> Option<f64> {
    let trimmed = rate.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Grow `monthly` PKR per month for `months` months at `annual_rate_pct`.
/// `None` when the plan is degenerate (no deposit or no duration).
pub fn plan_return(monthly: f64, months: u32, annual_rate_pct: f64) -> Option<PlanReturn> {
    if monthly <= 0.0 || months == 0 {
        return None;
    }
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let mut total = 0.0;
    for _ in 0..months {
        total = (total + monthly) * (1.0 + monthly_rate);
    }
    let invested = monthly * months as f64;
    Some(PlanReturn { invested, total, profit: total - invested })
}

/// The bank whose quoted rate yields the highest profit for this plan,
/// along with the projection. Banks with unparseable rates are skipped.
pub fn best_bank<'a>(
    banks: &'a [BankRate],
    monthly: f64,
    months: u32,
) -> Option<(&'a BankRate, PlanReturn)> {
    banks
        .iter()
        .filter_map(|bank| {
            let rate = parse_rate_percent(&bank.rate)?;
            let ret = plan_return(monthly, months, rate)?;
            Some((bank, ret))
        })
        .max_by(|(_, a), (_, b)| a.profit.total_cmp(&b.profit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(name: &str, rate: &str) -> BankRate {
        BankRate {
            name: name.to_string(),
            rate: rate.to_string(),
            kind: "Conventional".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_parse_rate_percent() {
        assert_eq!(parse_rate_percent("20.5%"), Some(20.5));
        assert_eq!(parse_rate_percent("18% (Halal)"), Some(18.0));
        assert_eq!(parse_rate_percent("15% p.a."), Some(15.0));
        assert_eq!(parse_rate_percent("N/A"), None);
        assert_eq!(parse_rate_percent(""), None);
    }

    #[test]
    fn test_plan_return_compounds_monthly() {
        // 1000/month for 12 months at 12% p.a. (1% per month)
        let ret = plan_return(1000.0, 12, 12.0).unwrap();
        assert_eq!(ret.invested, 12_000.0);
        // Annuity-due future value: 1000 * ((1.01^12 - 1) / 0.01) * 1.01
        let expected = 1000.0 * ((1.01f64.powi(12) - 1.0) / 0.01) * 1.01;
        assert!((ret.total - expected).abs() < 1e-6);
        assert!(ret.profit > 0.0);
    }

    #[test]
    fn test_plan_return_degenerate_inputs() {
        assert_eq!(plan_return(0.0, 12, 18.0), None);
        assert_eq!(plan_return(-50.0, 12, 18.0), None);
        assert_eq!(plan_return(1000.0, 0, 18.0), None);
    }

    #[test]
    fn test_zero_rate_means_zero_profit() {
        let ret = plan_return(500.0, 6, 0.0).unwrap();
        assert_eq!(ret.total, 3000.0);
        assert_eq!(ret.profit, 0.0);
    }

    #[test]
    fn test_best_bank_picks_highest_rate() {
        let banks = vec![
            bank("EasyPaisa", "15%"),
            bank("HBL", "20.5%"),
            bank("Meezan Bank", "18% (Halal)"),
            bank("Broken", "call us"),
        ];
        let (best, ret) = best_bank(&banks, 5000.0, 12).unwrap();
        assert_eq!(best.name, "HBL");
        assert!(ret.profit > 0.0);
    }

    #[test]
    fn test_best_bank_empty_or_unparseable() {
        assert!(best_bank(&[], 5000.0, 12).is_none());
        let banks = vec![bank("Broken", "call us")];
        assert!(best_bank(&banks, 5000.0, 12).is_none());
    }
}
