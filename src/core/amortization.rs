use super::types::{
    CompoundingFrequency, EmiResult, FdResult, PpfResult, RetirementResult, SipResult,
};
use crate::error::{Error, Result};

pub const PPF_MIN_YEARLY_INVESTMENT: f64 = 500.0;
pub const PPF_MAX_YEARLY_INVESTMENT: f64 = 150_000.0;
pub const PPF_MIN_YEARS: u32 = 15;
pub const PPF_MAX_RATE_PERCENT: f64 = 20.0;

pub fn compute_emi(principal: f64, annual_rate_percent: f64, years: u32) -> Result<EmiResult> {
    require_positive("principal", principal)?;
    require_positive("annual rate", annual_rate_percent)?;
    require_years(years)?;

    let monthly_rate = monthly_rate(annual_rate_percent);
    let months = months(years);
    let growth = (1.0 + monthly_rate).powf(months);
    let monthly_payment = require_finite(principal * monthly_rate * growth / (growth - 1.0))?;
    let total_payment = require_finite(monthly_payment * months)?;

    Ok(EmiResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

pub fn compute_sip_future_value(
    monthly_investment: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<SipResult> {
    require_positive("monthly investment", monthly_investment)?;
    require_positive("annual rate", annual_rate_percent)?;
    require_years(years)?;

    let months = months(years);
    let future_value =
        require_finite(annuity_due_future_value(monthly_investment, annual_rate_percent, months))?;
    let total_invested = monthly_investment * months;

    Ok(SipResult {
        future_value,
        total_invested,
        estimated_returns: future_value - total_invested,
    })
}

pub fn compute_fd_maturity(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
    frequency: CompoundingFrequency,
) -> Result<FdResult> {
    require_positive("principal", principal)?;
    require_positive("annual rate", annual_rate_percent)?;
    require_years(years)?;

    let periods = frequency.periods_per_year() as f64;
    let rate = annual_rate_percent / 100.0;
    let maturity =
        require_finite(principal * (1.0 + rate / periods).powf(periods * f64::from(years)))?;

    Ok(FdResult {
        maturity,
        total_interest: maturity - principal,
    })
}

/// PPF compounds yearly with the contribution credited at the start of each year.
pub fn compute_ppf_maturity(
    yearly_investment: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<PpfResult> {
    if !yearly_investment.is_finite() || yearly_investment < PPF_MIN_YEARLY_INVESTMENT {
        return Err(Error::validation(
            "yearlyInvestment",
            "Minimum investment is 500.",
        ));
    }
    if yearly_investment > PPF_MAX_YEARLY_INVESTMENT {
        return Err(Error::validation(
            "yearlyInvestment",
            "Maximum investment is 1,50,000.",
        ));
    }
    if years < PPF_MIN_YEARS {
        return Err(Error::validation("period", "Minimum period is 15 years."));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent <= 0.0 {
        return Err(Error::validation("rate", "Interest rate must be positive."));
    }
    if annual_rate_percent > PPF_MAX_RATE_PERCENT {
        return Err(Error::validation("rate", "Interest rate seems too high."));
    }

    // Annuity due over whole years, yearly compounding.
    let rate = annual_rate_percent / 100.0;
    let growth = 1.0 + rate;
    let accumulated = (growth.powf(f64::from(years)) - 1.0) / rate;
    let balance = require_finite(yearly_investment * accumulated * growth)?;
    let total_investment = yearly_investment * f64::from(years);

    Ok(PpfResult {
        maturity: balance,
        total_investment,
        total_interest: balance - total_investment,
    })
}

pub fn compute_retirement_corpus(
    current_age: u32,
    retirement_age: u32,
    monthly_savings: f64,
    annual_rate_percent: f64,
) -> Result<RetirementResult> {
    if current_age >= retirement_age {
        return Err(Error::validation(
            "retirementAge",
            "Retirement age must be greater than current age.",
        ));
    }
    if !monthly_savings.is_finite() || monthly_savings <= 0.0 {
        return Err(Error::validation("monthlySavings", "Savings must be positive."));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent <= 0.0 {
        return Err(Error::validation("returnRate", "Rate must be positive."));
    }

    let years = retirement_age - current_age;
    let months = months(years);
    let corpus = require_finite(annuity_due_future_value(
        monthly_savings,
        annual_rate_percent,
        months,
    ))?;

    Ok(RetirementResult {
        corpus,
        total_investment: monthly_savings * months,
        retirement_age,
        years,
    })
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Future value of `months` deposits made at the start of each month.
fn annuity_due_future_value(monthly: f64, annual_rate_percent: f64, months: f64) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    monthly * (((1.0 + r).powf(months) - 1.0) / r) * (1.0 + r)
}

/// Month count as `f64`; `years * 12` overflows `u32` for huge tenures.
fn months(years: u32) -> f64 {
    f64::from(years) * 12.0
}

/// Huge tenures overflow the growth factor to infinity (or NaN payments).
fn require_finite(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid(format!(
            "result is not representable (got {value}); tenure too long"
        )));
    }
    Ok(value)
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(format!("{name} must be > 0 (got {value})")));
    }
    Ok(())
}

fn require_years(years: u32) -> Result<()> {
    if years == 0 {
        return Err(Error::invalid("tenure must be at least 1 year"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn emi_matches_hand_calculation() {
        let emi = compute_emi(100_000.0, 10.0, 1).expect("valid emi");
        assert_approx_tol(emi.monthly_payment, 8_791.588_723, 1e-4);
        assert_approx_tol(emi.total_payment, 105_499.064_676, 1e-3);
        assert_approx_tol(emi.total_interest, 5_499.064_676, 1e-3);
    }

    #[test]
    fn emi_rejects_non_positive_inputs() {
        for (p, r, y) in [
            (0.0, 10.0, 1),
            (-1.0, 10.0, 1),
            (1_000.0, 0.0, 1),
            (1_000.0, 8.0, 0),
        ] {
            assert!(matches!(compute_emi(p, r, y), Err(Error::InvalidInput(_))));
        }
        assert!(matches!(
            compute_emi(f64::NAN, 8.0, 5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn sip_future_value_matches_hand_calculation() {
        let sip = compute_sip_future_value(1_000.0, 12.0, 1).expect("valid sip");
        assert_approx_tol(sip.future_value, 12_809.328_043, 1e-4);
        assert_approx_tol(sip.total_invested, 12_000.0, 1e-9);
        assert_approx_tol(sip.estimated_returns, 809.328_043, 1e-4);
    }

    #[test]
    fn sip_rejects_zero_rate() {
        assert!(matches!(
            compute_sip_future_value(1_000.0, 0.0, 10),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn fd_maturity_matches_hand_calculation() {
        let fd = compute_fd_maturity(10_000.0, 7.0, 1, CompoundingFrequency::Quarterly)
            .expect("valid fd");
        assert_approx_tol(fd.maturity, 10_718.590_313, 1e-5);
        assert_approx_tol(fd.total_interest, 718.590_313, 1e-5);

        let yearly = compute_fd_maturity(10_000.0, 7.0, 1, CompoundingFrequency::Yearly)
            .expect("valid fd");
        assert_approx_tol(yearly.maturity, 10_700.0, 1e-6);
    }

    #[test]
    fn ppf_accumulates_fifteen_yearly_contributions() {
        let ppf = compute_ppf_maturity(100_000.0, 7.1, 15).expect("valid ppf");

        let mut expected = 0.0;
        for _ in 0..15 {
            expected = (expected + 100_000.0) * 1.071;
        }
        assert_approx_tol(ppf.maturity, expected, 1e-6);
        assert_approx_tol(ppf.maturity, 2_712_139.480_192, 1e-3);
        assert_approx_tol(ppf.total_investment, 1_500_000.0, 1e-9);
        assert_approx_tol(ppf.total_interest, expected - 1_500_000.0, 1e-6);
    }

    #[test]
    fn ppf_bounds_are_field_level_validation_errors() {
        let cases = [
            (499.0, 7.1, 15, "yearlyInvestment"),
            (150_001.0, 7.1, 15, "yearlyInvestment"),
            (1_000.0, 7.1, 14, "period"),
            (1_000.0, 0.0, 15, "rate"),
            (1_000.0, 25.0, 15, "rate"),
        ];
        for (yearly, rate, years, field) in cases {
            let err = compute_ppf_maturity(yearly, rate, years).expect_err("must reject");
            assert_eq!(err.field(), Some(field), "case {yearly} {rate} {years}");
        }
        assert!(compute_ppf_maturity(500.0, 7.1, 15).is_ok());
        assert!(compute_ppf_maturity(150_000.0, 7.1, 15).is_ok());
    }

    #[test]
    fn retirement_corpus_uses_sip_formula_over_years_to_retirement() {
        let result = compute_retirement_corpus(30, 60, 5_000.0, 12.0).expect("valid");
        assert_eq!(result.years, 30);
        assert_eq!(result.retirement_age, 60);
        assert_approx_tol(result.corpus, 17_649_568.870_481, 1e-2);
        assert_approx_tol(result.total_investment, 1_800_000.0, 1e-9);

        let sip = compute_sip_future_value(5_000.0, 12.0, 30).expect("valid sip");
        assert_approx_tol(result.corpus, sip.future_value, 1e-6);
    }

    #[test]
    fn retirement_requires_current_age_below_retirement_age() {
        for (current, retire) in [(60, 60), (61, 60)] {
            let err = compute_retirement_corpus(current, retire, 1_000.0, 8.0)
                .expect_err("must reject");
            assert_eq!(err.field(), Some("retirementAge"));
        }
    }

    #[test]
    fn retirement_rejects_non_positive_savings_and_rate() {
        for (savings, rate, field) in [
            (0.0, 8.0, "monthlySavings"),
            (-500.0, 8.0, "monthlySavings"),
            (f64::NAN, 8.0, "monthlySavings"),
            (1_000.0, 0.0, "returnRate"),
            (1_000.0, -2.0, "returnRate"),
        ] {
            let err = compute_retirement_corpus(30, 60, savings, rate).expect_err("must reject");
            assert_eq!(err.field(), Some(field), "case {savings} {rate}");
        }
    }

    #[test]
    fn sip_rejects_non_positive_investment() {
        for monthly in [0.0, -100.0, f64::INFINITY] {
            assert!(matches!(
                compute_sip_future_value(monthly, 12.0, 10),
                Err(Error::InvalidInput(_))
            ));
        }
        assert!(matches!(
            compute_sip_future_value(1_000.0, 12.0, 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn fd_rejects_non_positive_inputs() {
        for (p, r, y) in [
            (0.0, 7.0, 1),
            (-10.0, 7.0, 1),
            (1_000.0, 0.0, 1),
            (1_000.0, -1.0, 1),
            (1_000.0, 7.0, 0),
        ] {
            assert!(matches!(
                compute_fd_maturity(p, r, y, CompoundingFrequency::Monthly),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn max_tenure_is_rejected_instead_of_overflowing() {
        assert!(matches!(
            compute_emi(1_000.0, 8.0, u32::MAX),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            compute_emi(1_000.0, 8.0, 200_000_000),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            compute_sip_future_value(1_000.0, 8.0, u32::MAX),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            compute_fd_maturity(1_000.0, 8.0, u32::MAX, CompoundingFrequency::Monthly),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            compute_ppf_maturity(1_000.0, 7.1, u32::MAX),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            compute_retirement_corpus(0, u32::MAX, 1_000.0, 8.0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn long_but_finite_tenure_approaches_interest_only_payment() {
        let emi = compute_emi(1_000.0, 10.0, 1_000).expect("finite emi");
        assert!(emi.monthly_payment.is_finite());
        assert!(emi.monthly_payment > 0.0);
        // Payment tends to principal * monthly rate as the term grows.
        assert_approx_tol(emi.monthly_payment, 1_000.0 * 10.0 / 1_200.0, 1e-9);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_emi_repays_more_than_principal(
            principal in 1u32..50_000_000,
            rate_bp in 10u32..10_000,
            years in 1u32..40
        ) {
            let principal = principal as f64;
            let emi = compute_emi(principal, rate_bp as f64 / 100.0, years).expect("valid emi");
            prop_assert!(emi.monthly_payment > 0.0);
            prop_assert!(emi.monthly_payment * (years * 12) as f64 > principal);
            prop_assert!(emi.total_interest >= 0.0);
        }

        #[test]
        fn prop_fd_maturity_grows_with_compounding_frequency(
            principal in 1u32..10_000_000,
            rate_bp in 10u32..10_000,
            years in 1u32..30
        ) {
            let principal = principal as f64;
            let rate = rate_bp as f64 / 100.0;
            let mut previous = 0.0;
            for freq in CompoundingFrequency::ALL {
                let fd = compute_fd_maturity(principal, rate, years, freq).expect("valid fd");
                prop_assert!(fd.maturity >= previous * (1.0 - 1e-12));
                prop_assert!(fd.maturity > principal);
                previous = fd.maturity;
            }
        }

        #[test]
        fn prop_sip_future_value_exceeds_contributions(
            monthly in 1u32..1_000_000,
            rate_bp in 10u32..5_000,
            years in 1u32..40
        ) {
            let sip = compute_sip_future_value(monthly as f64, rate_bp as f64 / 100.0, years)
                .expect("valid sip");
            prop_assert!(sip.future_value > sip.total_invested);
            prop_assert!(sip.estimated_returns > 0.0);
        }
    }
}
