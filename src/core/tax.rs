use super::types::{TaxBracket, TaxBreakdown};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct TaxRegime {
    pub standard_deduction: f64,
    /// Taxable income at or below this owes nothing (rebate u/s 87A).
    pub rebate_limit: f64,
    pub cess_rate: f64,
    pub brackets: &'static [TaxBracket],
}

const NEW_REGIME_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        lower: 300_000.0,
        upper: Some(600_000.0),
        rate: 0.05,
    },
    TaxBracket {
        lower: 600_000.0,
        upper: Some(900_000.0),
        rate: 0.10,
    },
    TaxBracket {
        lower: 900_000.0,
        upper: Some(1_200_000.0),
        rate: 0.15,
    },
    TaxBracket {
        lower: 1_200_000.0,
        upper: Some(1_500_000.0),
        rate: 0.20,
    },
    TaxBracket {
        lower: 1_500_000.0,
        upper: None,
        rate: 0.30,
    },
];

/// New tax regime, FY 2023-24, individuals below 60.
pub const NEW_REGIME_FY2023_24: TaxRegime = TaxRegime {
    standard_deduction: 50_000.0,
    rebate_limit: 700_000.0,
    cess_rate: 0.04,
    brackets: &NEW_REGIME_BRACKETS,
};

pub fn compute_tax(annual_income: f64) -> Result<f64> {
    compute_tax_breakdown(annual_income, &NEW_REGIME_FY2023_24).map(|b| b.total_tax)
}

pub fn compute_tax_breakdown(annual_income: f64, regime: &TaxRegime) -> Result<TaxBreakdown> {
    if !annual_income.is_finite() || annual_income < 0.0 {
        return Err(Error::invalid(format!(
            "annual income must be >= 0 (got {annual_income})"
        )));
    }

    let taxable_income = (annual_income - regime.standard_deduction).max(0.0);
    if taxable_income <= regime.rebate_limit {
        return Ok(TaxBreakdown {
            annual_income,
            taxable_income,
            rebate_applied: true,
            base_tax: 0.0,
            cess: 0.0,
            total_tax: 0.0,
        });
    }

    let base_tax = bracket_tax(taxable_income, regime.brackets);
    let cess = base_tax * regime.cess_rate;

    Ok(TaxBreakdown {
        annual_income,
        taxable_income,
        rebate_applied: false,
        base_tax,
        cess,
        total_tax: base_tax + cess,
    })
}

fn bracket_tax(taxable_income: f64, brackets: &[TaxBracket]) -> f64 {
    brackets
        .iter()
        .filter(|bracket| taxable_income > bracket.lower)
        .map(|bracket| {
            let top = bracket
                .upper
                .map_or(taxable_income, |upper| taxable_income.min(upper));
            (top - bracket.lower) * bracket.rate
        })
        .sum()
}
