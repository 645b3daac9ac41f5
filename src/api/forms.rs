//! Calculator request payloads and their form-level bounds.
//!
//! Payload fields are optional so GET query strings and partial JSON bodies
//! deserialize; missing required fields and out-of-range values come back
//! as `Error::Validation` naming the camelCase field.

use serde::Deserialize;

use crate::core::CompoundingFrequency;
use crate::error::{Error, Result};

pub const DEFAULT_FD_COMPOUNDING: u32 = 4;
pub const DEFAULT_PPF_RATE: f64 = 7.1;
pub const DEFAULT_PPF_PERIOD: u32 = 15;
/// Upper bound on tenure, period and goal horizon fields.
pub const MAX_TERM_YEARS: u32 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiPayload {
    pub principal: Option<f64>,
    pub rate: Option<f64>,
    pub tenure: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiForm {
    pub principal: f64,
    pub rate: f64,
    pub tenure: u32,
}

impl TryFrom<EmiPayload> for EmiForm {
    type Error = Error;

    fn try_from(payload: EmiPayload) -> Result<Self> {
        let principal = required("principal", payload.principal)?;
        at_least("principal", principal, 1.0, "Principal must be at least 1.")?;
        let rate = rate_percent("rate", payload.rate, 100.0, "Interest rate")?;
        let tenure = required("tenure", payload.tenure)?;
        years_at_least("tenure", tenure, 1, "Tenure must be at least 1 year.")?;
        years_at_most("tenure", tenure, "Tenure")?;
        Ok(Self {
            principal,
            rate,
            tenure,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipPayload {
    pub monthly_investment: Option<f64>,
    pub return_rate: Option<f64>,
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SipForm {
    pub monthly_investment: f64,
    pub return_rate: f64,
    pub period: u32,
}

impl TryFrom<SipPayload> for SipForm {
    type Error = Error;

    fn try_from(payload: SipPayload) -> Result<Self> {
        let monthly_investment = required("monthlyInvestment", payload.monthly_investment)?;
        at_least(
            "monthlyInvestment",
            monthly_investment,
            1.0,
            "Investment must be at least 1.",
        )?;
        let return_rate = rate_percent("returnRate", payload.return_rate, 100.0, "Return rate")?;
        let period = required("period", payload.period)?;
        years_at_least("period", period, 1, "Period must be at least 1 year.")?;
        years_at_most("period", period, "Period")?;
        Ok(Self {
            monthly_investment,
            return_rate,
            period,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdPayload {
    pub principal: Option<f64>,
    pub rate: Option<f64>,
    pub tenure: Option<u32>,
    pub compounding: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdForm {
    pub principal: f64,
    pub rate: f64,
    pub tenure: u32,
    pub compounding: CompoundingFrequency,
}

impl TryFrom<FdPayload> for FdForm {
    type Error = Error;

    fn try_from(payload: FdPayload) -> Result<Self> {
        let EmiForm {
            principal,
            rate,
            tenure,
        } = EmiForm::try_from(EmiPayload {
            principal: payload.principal,
            rate: payload.rate,
            tenure: payload.tenure,
        })?;
        // Anything but 1/2/4/12 is a client bug, reported as InvalidInput.
        let compounding = CompoundingFrequency::try_from(
            payload.compounding.unwrap_or(DEFAULT_FD_COMPOUNDING),
        )?;
        Ok(Self {
            principal,
            rate,
            tenure,
            compounding,
        })
    }
}

/// PPF bounds are enforced by the engine itself.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfPayload {
    pub yearly_investment: Option<f64>,
    pub rate: Option<f64>,
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PpfForm {
    pub yearly_investment: f64,
    pub rate: f64,
    pub period: u32,
}

impl TryFrom<PpfPayload> for PpfForm {
    type Error = Error;

    fn try_from(payload: PpfPayload) -> Result<Self> {
        let period = payload.period.unwrap_or(DEFAULT_PPF_PERIOD);
        years_at_most("period", period, "Period")?;
        Ok(Self {
            yearly_investment: required("yearlyInvestment", payload.yearly_investment)?,
            rate: payload.rate.unwrap_or(DEFAULT_PPF_RATE),
            period,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPayload {
    pub current_age: Option<u32>,
    pub retirement_age: Option<u32>,
    pub monthly_savings: Option<f64>,
    pub return_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementForm {
    pub current_age: u32,
    pub retirement_age: u32,
    pub monthly_savings: f64,
    pub return_rate: f64,
}

impl TryFrom<RetirementPayload> for RetirementForm {
    type Error = Error;

    fn try_from(payload: RetirementPayload) -> Result<Self> {
        let current_age = required("currentAge", payload.current_age)?;
        if !(18..=99).contains(&current_age) {
            return Err(Error::validation(
                "currentAge",
                "Current age must be between 18 and 99.",
            ));
        }
        let retirement_age = required("retirementAge", payload.retirement_age)?;
        if !(19..=100).contains(&retirement_age) {
            return Err(Error::validation(
                "retirementAge",
                "Retirement age must be between 19 and 100.",
            ));
        }
        let monthly_savings = required("monthlySavings", payload.monthly_savings)?;
        at_least("monthlySavings", monthly_savings, 1.0, "Savings must be positive.")?;
        let return_rate = rate_percent("returnRate", payload.return_rate, 50.0, "Rate")?;
        Ok(Self {
            current_age,
            retirement_age,
            monthly_savings,
            return_rate,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPayload {
    pub annual_income: Option<f64>,
}

impl TaxPayload {
    pub fn annual_income(&self) -> Result<f64> {
        let income = required("annualIncome", self.annual_income)?;
        at_least("annualIncome", income, 0.0, "Income must be non-negative.")?;
        Ok(income)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPayload {
    pub goal_amount: Option<f64>,
    pub initial_amount: Option<f64>,
    pub years: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsForm {
    pub goal_amount: f64,
    pub initial_amount: f64,
    pub years: u32,
}

impl TryFrom<SavingsPayload> for SavingsForm {
    type Error = Error;

    fn try_from(payload: SavingsPayload) -> Result<Self> {
        let goal_amount = required("goalAmount", payload.goal_amount)?;
        at_least("goalAmount", goal_amount, 1.0, "Goal must be at least 1.")?;
        let initial_amount = payload.initial_amount.unwrap_or(0.0);
        at_least(
            "initialAmount",
            initial_amount,
            0.0,
            "Initial amount cannot be negative.",
        )?;
        let years = required("years", payload.years)?;
        years_at_least("years", years, 1, "Years must be at least 1.")?;
        years_at_most("years", years, "Years")?;
        Ok(Self {
            goal_amount,
            initial_amount,
            years,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::validation(field, format!("{field} is required.")))
}

fn at_least(field: &'static str, value: f64, min: f64, message: &str) -> Result<()> {
    if !value.is_finite() || value < min {
        return Err(Error::validation(field, message));
    }
    Ok(())
}

fn years_at_least(field: &'static str, value: u32, min: u32, message: &str) -> Result<()> {
    if value < min {
        return Err(Error::validation(field, message));
    }
    Ok(())
}

fn years_at_most(field: &'static str, value: u32, label: &str) -> Result<()> {
    if value > MAX_TERM_YEARS {
        return Err(Error::validation(
            field,
            format!("{label} cannot exceed {MAX_TERM_YEARS} years."),
        ));
    }
    Ok(())
}

fn rate_percent(field: &'static str, value: Option<f64>, max: f64, label: &str) -> Result<f64> {
    let rate = required(field, value)?;
    at_least(field, rate, 0.1, &format!("{label} must be positive."))?;
    if rate > max {
        return Err(Error::validation(field, format!("{label} seems too high.")));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emi_form_requires_every_field() {
        let err = EmiForm::try_from(EmiPayload {
            principal: Some(10_000.0),
            rate: None,
            tenure: Some(5),
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("rate"));
        assert_eq!(err.to_string(), "rate: rate is required.");
    }

    #[test]
    fn emi_form_applies_rate_bounds() {
        for (rate, message) in [
            (0.05, "Interest rate must be positive."),
            (120.0, "Interest rate seems too high."),
        ] {
            let err = EmiForm::try_from(EmiPayload {
                principal: Some(10_000.0),
                rate: Some(rate),
                tenure: Some(5),
            })
            .unwrap_err();
            assert_eq!(
                err,
                Error::Validation {
                    field: "rate",
                    message: message.to_string()
                }
            );
        }
    }

    #[test]
    fn term_fields_are_capped() {
        let err = EmiForm::try_from(EmiPayload {
            principal: Some(10_000.0),
            rate: Some(8.0),
            tenure: Some(u32::MAX),
        })
        .unwrap_err();
        assert_eq!(
            err,
            Error::Validation {
                field: "tenure",
                message: "Tenure cannot exceed 100 years.".to_string()
            }
        );

        let err = SipForm::try_from(SipPayload {
            monthly_investment: Some(1_000.0),
            return_rate: Some(12.0),
            period: Some(MAX_TERM_YEARS + 1),
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("period"));

        let err = PpfForm::try_from(PpfPayload {
            yearly_investment: Some(1_000.0),
            period: Some(200_000_000),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("period"));

        let err = SavingsForm::try_from(SavingsPayload {
            goal_amount: Some(5_000.0),
            initial_amount: None,
            years: Some(4_000_000_000),
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("years"));

        assert!(
            EmiForm::try_from(EmiPayload {
                principal: Some(10_000.0),
                rate: Some(8.0),
                tenure: Some(MAX_TERM_YEARS),
            })
            .is_ok()
        );
    }

    #[test]
    fn fd_form_defaults_to_quarterly_and_rejects_odd_frequency() {
        let form = FdForm::try_from(FdPayload {
            principal: Some(10_000.0),
            rate: Some(7.0),
            tenure: Some(3),
            compounding: None,
        })
        .expect("valid");
        assert_eq!(form.compounding, CompoundingFrequency::Quarterly);

        let err = FdForm::try_from(FdPayload {
            principal: Some(10_000.0),
            rate: Some(7.0),
            tenure: Some(3),
            compounding: Some(3),
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn ppf_form_uses_defaults() {
        let form = PpfForm::try_from(PpfPayload {
            yearly_investment: Some(12_000.0),
            ..Default::default()
        })
        .expect("valid");
        assert_eq!(form.rate, DEFAULT_PPF_RATE);
        assert_eq!(form.period, DEFAULT_PPF_PERIOD);
    }

    #[test]
    fn retirement_form_checks_age_ranges() {
        let err = RetirementForm::try_from(RetirementPayload {
            current_age: Some(17),
            retirement_age: Some(60),
            monthly_savings: Some(1_000.0),
            return_rate: Some(10.0),
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("currentAge"));

        let err = RetirementForm::try_from(RetirementPayload {
            current_age: Some(30),
            retirement_age: Some(60),
            monthly_savings: Some(1_000.0),
            return_rate: Some(55.0),
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("returnRate"));
    }

    #[test]
    fn tax_payload_rejects_negative_income() {
        let payload = TaxPayload {
            annual_income: Some(-5.0),
        };
        assert_eq!(payload.annual_income().unwrap_err().field(), Some("annualIncome"));
    }

    #[test]
    fn savings_form_defaults_initial_amount_to_zero() {
        let form = SavingsForm::try_from(SavingsPayload {
            goal_amount: Some(5_000.0),
            initial_amount: None,
            years: Some(2),
        })
        .expect("valid");
        assert_eq!(form.initial_amount, 0.0);
    }
}
