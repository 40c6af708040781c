//! Display formatting for metric values.
//!
//! Pure and total: an unpublished value renders as [`UNPUBLISHED`]. Rounding
//! works on the exact decimal expansion of the stored value and a half rounds
//! up, so `1.45` (stored as `1.4499999…`) shows as `1.4` while an exactly
//! representable `1.25` shows as `1.3`.

use crate::comparison::domain::{Metric, MetricKind};

/// Placeholder shown for unpublished values
pub const UNPUBLISHED: &str = "—";

/// Every finite f64 has at most 1074 fractional decimal digits
const EXACT_DIGITS: usize = 1100;

/// Magnitude from which numbers are written in exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Formats a throughput value given in Mbps.
///
/// `999` → `"999 Mbps"`, `1500` → `"1.5 Gbps"`, `1000000` → `"1000 Gbps"`.
pub fn format_throughput(value: Option<f64>) -> String {
    let Some(mbps) = value else {
        return UNPUBLISHED.to_string();
    };

    if mbps >= 1000.0 {
        let gbps = to_fixed(mbps / 1000.0, 1);
        format!("{} Gbps", gbps.strip_suffix(".0").unwrap_or(&gbps))
    } else {
        format!("{} Mbps", number_text(mbps))
    }
}

/// Formats a concurrent session count.
///
/// `999` → `"999"`, `1000` → `"1K"`, `1600000` → `"1.6M"`, `4190000` → `"4.19M"`.
pub fn format_sessions(value: Option<f64>) -> String {
    let Some(sessions) = value else {
        return UNPUBLISHED.to_string();
    };

    if sessions >= 1_000_000.0 {
        let millions = to_fixed(sessions / 1_000_000.0, 2);
        format!("{}M", millions.trim_end_matches('0').trim_end_matches('.'))
    } else if sessions >= 1000.0 {
        format!("{}K", to_fixed(sessions / 1000.0, 0))
    } else {
        number_text(sessions)
    }
}

/// Formats a metric with the formatter for its kind
pub fn format_metric(metric: Metric, value: Option<f64>) -> String {
    match metric.kind() {
        MetricKind::Throughput => format_throughput(value),
        MetricKind::Sessions => format_sessions(value),
    }
}

/// Plain text of a raw number: the shortest digits that read back as the same
/// value, `0` for negative zero, no trailing `.0` on integers, and exponent
/// form (`1e+21`, `1e-7`) outside `1e-6 <= |v| < 1e21`.
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Fixed-point text with `decimals` fraction digits, rounding half up on the
/// exact stored value
fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_THRESHOLD {
        return number_text(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int, frac) = exact.split_once('.').unwrap_or((&exact, ""));
    let mut digits: Vec<u8> = int.bytes().chain(frac.bytes().take(decimals)).collect();
    let mut int_len = int.len();

    if frac.as_bytes().get(decimals).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int, frac) = digits.split_at(int_len);
    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.push_str(&String::from_utf8_lossy(int));
    if decimals > 0 {
        text.push('.');
        text.push_str(&String::from_utf8_lossy(frac));
    }
    text
}
