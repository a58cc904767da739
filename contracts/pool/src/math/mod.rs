//! Share accounting arithmetic.
//! Integer-only; every division floors so rounding dust stays in the pool.

use crate::{errors::PoolError, storage::Reserve};

/// Computes `a * b / denominator`, rounding toward zero. All pool operands
/// are non-negative, so this is a floor.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator <= 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(denominator)
}

/// Shares minted for depositing `amount` into `reserve`.
///
/// An empty reserve mints 1:1; otherwise `amount * shares / balance`.
pub fn shares_for_deposit(amount: i128, reserve: &Reserve) -> Result<i128, PoolError> {
    if reserve.shares == 0 {
        return Ok(amount);
    }
    mul_div(amount, reserve.shares, reserve.balance).ok_or(PoolError::ArithmeticOverflow)
}

/// Tokens paid out for redeeming `shares` against `reserve`:
/// `shares * balance / total_shares`.
pub fn payout_for_shares(shares: i128, reserve: &Reserve) -> Result<i128, PoolError> {
    if shares > reserve.shares {
        return Err(PoolError::InvalidCertificate);
    }
    mul_div(shares, reserve.balance, reserve.shares).ok_or(PoolError::ArithmeticOverflow)
}
