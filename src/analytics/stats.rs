use crate::error::{Result, ScoutError};

/// Arithmetic mean. Empty input is an error, and so is a sum too large to represent.
pub fn average(prices: &[f64]) -> Result<f64> {
    if prices.is_empty() {
        return Err(ScoutError::NoPrices);
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    if !mean.is_finite() {
        return Err(ScoutError::PriceOverflow);
    }
    Ok(mean)
}

/// Median of the prices.
///
/// Returns `0.0` for empty input. That zero means "no data", not a real
/// median; callers should check for emptiness before trusting it.
pub fn median(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Two decimals with comma thousands separators, e.g. `1234567.5` -> `"1,234,567.50"`
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
