use crate::comparison::domain::Metric;
use crate::shared::error::ComparatorError;

/// An open custom-benchmark edit for one appliance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkEditor {
    appliance_id: String,
    field: Metric,
    input: String,
}

impl BenchmarkEditor {
    pub fn new(appliance_id: &str, field: Metric, input: &str) -> Self {
        Self {
            appliance_id: appliance_id.to_string(),
            field,
            input: input.to_string(),
        }
    }

    pub fn appliance_id(&self) -> &str {
        &self.appliance_id
    }

    pub fn field(&self) -> Metric {
        self.field
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_field(&mut self, field: Metric) {
        self.field = field;
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// Parses the current input
    pub fn value(&self) -> Result<f64, ComparatorError> {
        parse_benchmark_input(&self.input)
    }
}

/// Parses user-entered benchmark text.
///
/// Leading whitespace is skipped and the longest leading decimal number is
/// used, so `"1500 Mbps"` reads as 1500. Empty text, text without a leading
/// number and non-finite results are rejected.
pub fn parse_benchmark_input(raw: &str) -> Result<f64, ComparatorError> {
    let prefix = numeric_prefix(raw.trim_start());

    prefix
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ComparatorError::InvalidValue {
            input: raw.to_string(),
        })
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}
