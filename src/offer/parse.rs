use serde_json::Value;

/// Result of reading one numeric field from a raw offer.
///
/// Everything past this boundary works with plain `f64`s; a field that is
/// missing, junk, or non-finite becomes `Default` and reads as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAmount {
    Numeric(f64),
    Default,
}

impl ParsedAmount {
    pub fn from_value(value: Option<&Value>) -> Self {
        let parsed = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => unformat_currency(s),
            _ => None,
        };

        match parsed {
            Some(v) if v.is_finite() => ParsedAmount::Numeric(v),
            _ => ParsedAmount::Default,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            ParsedAmount::Numeric(v) => v,
            ParsedAmount::Default => 0.0,
        }
    }

    pub fn rounded(self, places: i32) -> f64 {
        round_half_up(self.value(), places)
    }
}

/// Strip currency formatting and parse the leading decimal number.
///
/// A parenthesised amount such as `"(1,250.00)"` or `"$(1,250.00)"` is read
/// as negative. All characters other than digits, `-` and `.` are dropped
/// before parsing, so `"$1,500"` reads as 1500.
pub fn unformat_currency(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let signed = match negative_span(trimmed) {
        Some((open, close)) => format!(
            "{}-{}{}",
            &trimmed[..open],
            &trimmed[open + 1..close],
            &trimmed[close + 1..]
        ),
        None => trimmed.to_string(),
    };

    let cleaned: String = signed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    leading_number(&cleaned)
}

/// Byte offsets of the first `(` directly followed by a digit and the last
/// `)` after it.
fn negative_span(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let open = (0..bytes.len().saturating_sub(1))
        .find(|&i| bytes[i] == b'(' && bytes[i + 1].is_ascii_digit())?;
    let close = s.rfind(')').filter(|&close| close > open)?;
    Some((open, close))
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Round half-up to `places` decimals (`floor(x * 10^p + 0.5) / 10^p`).
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor + 0.5;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.floor() / factor;
    // -0.0 would otherwise leak into serialized output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
