use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Yearly,
    HalfYearly,
    #[default]
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CompoundingFrequency::Yearly),
            2 => Ok(CompoundingFrequency::HalfYearly),
            4 => Ok(CompoundingFrequency::Quarterly),
            12 => Ok(CompoundingFrequency::Monthly),
            other => Err(Error::invalid(format!(
                "compounding frequency must be one of 1, 2, 4, 12 (got {other})"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    pub future_value: f64,
    pub total_invested: f64,
    pub estimated_returns: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FdResult {
    pub maturity: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfResult {
    pub maturity: f64,
    pub total_investment: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub corpus: f64,
    pub total_investment: f64,
    pub retirement_age: u32,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub lower: f64,
    /// `None` is the open top bracket.
    pub upper: Option<f64>,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub annual_income: f64,
    pub taxable_income: f64,
    pub rebate_applied: bool,
    pub base_tax: f64,
    pub cess: f64,
    pub total_tax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Slugs of the built-in tutorial topics, in catalog order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicSlug {
    Budgeting,
    Investing,
    Saving,
    TaxPlanning,
}

impl TopicSlug {
    pub const ALL: [TopicSlug; 4] = [
        TopicSlug::Budgeting,
        TopicSlug::Investing,
        TopicSlug::Saving,
        TopicSlug::TaxPlanning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicSlug::Budgeting => "budgeting",
            TopicSlug::Investing => "investing",
            TopicSlug::Saving => "saving",
            TopicSlug::TaxPlanning => "tax-planning",
        }
    }
}

impl fmt::Display for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicSlug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| Error::NotFound(format!("topic '{s}'")))
    }
}
