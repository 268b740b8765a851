use crate::catalog::models::Plan;
use crate::config::CONSUMPTION_RATE;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 90;
pub const MIN_MB_PER_DAY: u32 = 0;
pub const MAX_MB_PER_DAY: u32 = 1000;

const SUGGESTED_MB_PER_DAY_FLOOR: f64 = 10.0;
const SUGGESTED_MB_PER_DAY_CEILING: f64 = 200.0;

/// Breakdown of a pay-on-usage deposit. Nothing here is rounded.
#[derive(Clone, Debug, PartialEq)]
pub struct DepositCalculation {
    pub days: u32,
    pub mb_per_day: u32,
    pub total_mb: u64,
    pub price_per_mb: f64,
    pub raw_cost: f64,
    pub required_deposit: f64,
    pub buffer_amount: f64,
}

pub fn calculate_deposit(plan: Option<&Plan>, days: u32, mb_per_day: u32) -> DepositCalculation {
    let total_mb = days as u64 * mb_per_day as u64;
    let Some(plan) = plan else {
        return DepositCalculation {
            days,
            mb_per_day,
            total_mb,
            price_per_mb: 0.0,
            raw_cost: 0.0,
            required_deposit: 0.0,
            buffer_amount: 0.0,
        };
    };

    let price_per_mb = plan.price_per_mb_usdc;
    let raw_cost = total_mb as f64 * price_per_mb;
    let required_deposit = raw_cost / CONSUMPTION_RATE;
    DepositCalculation {
        days,
        mb_per_day,
        total_mb,
        price_per_mb,
        raw_cost,
        required_deposit,
        buffer_amount: required_deposit - raw_cost,
    }
}

/// Starting MB/day estimate offered when a plan is picked.
pub fn suggested_mb_per_day(plan: &Plan) -> u32 {
    let even_spread = plan.mb as f64 / plan.validity_days.max(1) as f64;
    even_spread
        .clamp(SUGGESTED_MB_PER_DAY_FLOOR, SUGGESTED_MB_PER_DAY_CEILING)
        .round() as u32
}

/// Cumulative raw cost at the end of each day of the usage window.
pub fn projected_spend(calc: &DepositCalculation) -> Vec<(u32, f64)> {
    let daily = calc.mb_per_day as f64 * calc.price_per_mb;
    (1..=calc.days).map(|day| (day, daily * day as f64)).collect()
}

/// Parses the days slider value.
pub fn parse_days(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(days) if days.is_finite() => days.round().clamp(MIN_DAYS as f64, MAX_DAYS as f64) as u32,
        _ => MIN_DAYS,
    }
}

/// Parses the MB/day field. Anything that is not a number becomes 0.
/// Numbers are rounded and kept within 0..=1000.
pub fn parse_mb_per_day(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(mb) if mb.is_finite() => mb
            .round()
            .clamp(MIN_MB_PER_DAY as f64, MAX_MB_PER_DAY as f64) as u32,
        _ => 0,
    }
}

/// How much more USDC the wallet needs to cover `target`, if anything.
pub fn shortfall(balance: f64, target: f64) -> Option<f64> {
    (balance < target).then(|| target - balance)
}

pub fn format_usdc(amount: f64) -> String {
    format!("{:.2} USDC", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_countries;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn plan(id: &str) -> Plan {
        sample_countries()
            .into_iter()
            .flat_map(|c| c.plans)
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn fourteen_days_at_fifty_mb() {
        let us_business = plan("us-business-5gb");
        let calc = calculate_deposit(Some(&us_business), 14, 50);
        assert_eq!(calc.total_mb, 700);
        assert!(close(calc.price_per_mb, 0.0049));
        assert!(close(calc.raw_cost, 3.43));
        assert!(close(calc.required_deposit, 3.43 / 0.85));
        assert!((calc.required_deposit - 4.0353).abs() < 1e-4);
        assert!((calc.buffer_amount - 0.6053).abs() < 1e-4);
        assert_eq!(format_usdc(calc.required_deposit), "4.04 USDC");
    }

    #[test]
    fn buffer_is_never_negative() {
        let plans: Vec<Plan> = sample_countries().into_iter().flat_map(|c| c.plans).collect();
        for plan in &plans {
            for days in [1, 7, 30, 90] {
                for mb in [0, 1, 50, 1000] {
                    let calc = calculate_deposit(Some(plan), days, mb);
                    assert!(calc.buffer_amount >= 0.0);
                    assert!(close(calc.buffer_amount, calc.required_deposit - calc.raw_cost));
                    assert!(close(calc.required_deposit * 0.85, calc.raw_cost));
                }
            }
        }
    }

    #[test]
    fn zero_usage_costs_nothing() {
        let calc = calculate_deposit(Some(&plan("jp-unlimited-7d")), 30, 0);
        assert_eq!(calc.total_mb, 0);
        assert_eq!(calc.raw_cost, 0.0);
        assert_eq!(calc.required_deposit, 0.0);
        assert_eq!(calc.buffer_amount, 0.0);
    }

    #[test]
    fn without_a_plan_only_usage_is_reported() {
        let calc = calculate_deposit(None, 10, 25);
        assert_eq!(calc.total_mb, 250);
        assert_eq!(calc.price_per_mb, 0.0);
        assert_eq!(calc.required_deposit, 0.0);
    }

    #[test]
    fn suggested_usage_is_clamped() {
        assert_eq!(suggested_mb_per_day(&plan("us-business-5gb")), 171);
        assert_eq!(suggested_mb_per_day(&plan("us-travel-1gb")), 146);
        assert_eq!(suggested_mb_per_day(&plan("jp-unlimited-7d")), 200);

        let mut tiny = plan("us-travel-1gb");
        tiny.mb = 30;
        tiny.validity_days = 30;
        assert_eq!(suggested_mb_per_day(&tiny), 10);
    }

    #[test]
    fn projected_spend_ends_at_raw_cost() {
        let calc = calculate_deposit(Some(&plan("us-business-5gb")), 14, 50);
        let series = projected_spend(&calc);
        assert_eq!(series.len(), 14);
        assert_eq!(series[0].0, 1);
        let (last_day, last_total) = series[13];
        assert_eq!(last_day, 14);
        assert!(close(last_total, calc.raw_cost));
    }

    #[test]
    fn inputs_are_coerced() {
        assert_eq!(parse_mb_per_day("abc"), 0);
        assert_eq!(parse_mb_per_day(""), 0);
        assert_eq!(parse_mb_per_day("5000"), 1000);
        assert_eq!(parse_mb_per_day("0"), 0);
        assert_eq!(parse_mb_per_day("12.6"), 13);
        assert_eq!(parse_mb_per_day("-4"), 0);

        assert_eq!(parse_days("0"), 1);
        assert_eq!(parse_days("120"), 90);
        assert_eq!(parse_days("14"), 14);
    }

    #[test]
    fn shortfall_only_when_balance_is_short() {
        let missing = shortfall(10.0, 24.99).unwrap();
        assert_eq!(format!("{:.2}", missing), "14.99");
        assert_eq!(shortfall(150.75, 24.99), None);
        assert_eq!(shortfall(24.99, 24.99), None);
    }
}
