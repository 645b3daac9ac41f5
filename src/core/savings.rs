use crate::error::{Error, Result};

/// Monthly amount to set aside to reach `goal_amount` in `years`, starting
/// from `initial_amount`. Zero once the goal is already covered.
pub fn compute_required_monthly_saving(
    goal_amount: f64,
    initial_amount: f64,
    years: u32,
) -> Result<f64> {
    if !goal_amount.is_finite() || goal_amount <= 0.0 {
        return Err(Error::validation("goalAmount", "Goal must be positive."));
    }
    if !initial_amount.is_finite() || initial_amount < 0.0 {
        return Err(Error::validation(
            "initialAmount",
            "Initial amount cannot be negative.",
        ));
    }
    if years < 1 {
        return Err(Error::validation("years", "Years must be at least 1."));
    }

    let remaining = goal_amount - initial_amount;
    if remaining <= 0.0 {
        return Ok(0.0);
    }
    Ok(remaining / (f64::from(years) * 12.0))
}
